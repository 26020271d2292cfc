//! Random test data generators using the fake crate
//!
//! Provides realistic random data including:
//! - Users with plausible names and emails
//! - Property-based testing strategies for numbers, sequences, text and users

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use fixture_core::User;
use proptest::prelude::*;
use rand::Rng;

/// Generate a realistic random user with an id in `1..99999`
pub fn generate_random_user() -> User {
    let id: u32 = (1..99999).fake();
    User::new(
        id,
        FirstName().fake::<String>(),
        LastName().fake::<String>(),
        SafeEmail().fake::<String>(),
    )
}

/// Generate `count` random users with unique ids `1..=count`
pub fn generate_users(count: usize) -> Vec<User> {
    (1..=count)
        .map(|i| {
            let mut user = generate_random_user();
            user.id = i as u32;
            user
        })
        .collect()
}

/// Generate a random mixed-sign sequence of integral values in `-100..=100`
pub fn generate_sequence(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| f64::from(rng.gen_range(-100i32..=100))).collect()
}

/// Configurable user generator
pub struct UserGenerator {
    pub email_domain: String,
    pub first_id: u32,
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UserGenerator {
    /// Create new generator with default settings
    pub fn new() -> Self {
        Self {
            email_domain: "example.com".to_string(),
            first_id: 1,
        }
    }

    /// Generate users with consecutive ids and emails in this generator's domain
    pub fn generate(&self, count: usize) -> Vec<User> {
        (0..count)
            .map(|offset| {
                let first: String = FirstName().fake();
                let last: String = LastName().fake();
                let email = format!(
                    "{}.{}@{}",
                    first.to_lowercase().replace(' ', ""),
                    last.to_lowercase().replace(' ', ""),
                    self.email_domain
                );
                User::new(self.first_id + offset as u32, first, last, email)
            })
            .collect()
    }
}

/// Proptest strategy for finite, moderately sized floats
pub fn finite_f64_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        -1.0e6..1.0e6f64,
        (-1000i32..1000).prop_map(f64::from),
    ]
}

/// Proptest strategy for number sequences that regularly contain zeros
pub fn sequence_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(finite_f64_strategy(), 0..64)
}

/// Proptest strategy for short strings over a small alphabet, so that
/// palindromes and anagrams actually occur
pub fn text_strategy() -> impl Strategy<Value = String> {
    "[abcAé]{0,8}"
}

/// Proptest strategy for valid users
pub fn user_strategy() -> impl Strategy<Value = User> {
    (
        1u32..99999,
        "[A-Z][a-z]{1,11}",
        "[A-Z][a-z]{1,14}",
        "[a-z]{1,10}",
        "[a-z]{2,10}\\.(com|org|net)",
    )
        .prop_map(|(id, first, last, local, domain)| {
            User::new(id, first, last, format!("{local}@{domain}"))
        })
}

/// Proptest strategy for user lists with unique ids
pub fn users_strategy() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(user_strategy(), 0..10).prop_map(|users| {
        users
            .into_iter()
            .enumerate()
            .map(|(i, mut user)| {
                user.id = i as u32 + 1;
                user
            })
            .collect()
    })
}
