//! Property-based tests for the fixture modules and the mocked accessor

use fixture_core::{arithmetic, text, UserValidator, Users};
use mocks::*;
use proptest::prelude::*;

fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

proptest! {
    #[test]
    fn add_and_mul_commute(a in finite_f64_strategy(), b in finite_f64_strategy()) {
        prop_assert_eq!(arithmetic::add(a, b), arithmetic::add(b, a));
        prop_assert_eq!(arithmetic::mul(a, b), arithmetic::mul(b, a));
    }

    #[test]
    fn sub_is_anti_symmetric(a in finite_f64_strategy(), b in finite_f64_strategy()) {
        prop_assert_eq!(arithmetic::sub(a, b), -arithmetic::sub(b, a));
    }

    #[test]
    fn sign_filters_partition_the_sequence(values in sequence_strategy()) {
        assert_partition(&values);
    }

    #[test]
    fn palindrome_is_invariant_under_reversal(s in text_strategy()) {
        prop_assert_eq!(text::is_palindrome(&s), text::is_palindrome(&reversed(&s)));
    }

    #[test]
    fn mirrored_text_is_a_palindrome(s in text_strategy()) {
        let mirrored = format!("{s}{}", reversed(&s));
        prop_assert!(text::is_palindrome(&mirrored));
    }

    #[test]
    fn anagram_is_symmetric_and_reflexive(a in text_strategy(), b in text_strategy()) {
        prop_assert_eq!(text::is_anagram(&a, &b), text::is_anagram(&b, &a));
        prop_assert!(text::is_anagram(&a, &a));
        prop_assert!(text::is_anagram(&a, &reversed(&a)));
    }

    #[test]
    fn mocked_users_round_trip(users in users_strategy()) {
        prop_assert!(UserValidator::validate_users(&users).is_ok());

        let mock = MockHttpClient::with_users(users.clone());
        let accessor = Users::new(mock.clone());
        let response = tokio_test::block_on(accessor.all()).unwrap();

        prop_assert_eq!(response.data, users);
        prop_assert_eq!(mock.call_count(), 1);
    }
}
