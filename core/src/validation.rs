use std::collections::HashSet;

use crate::{
    error::{FixtureError, Result},
    models::User,
};

/// Validation utilities for externally sourced user records
pub struct UserValidator;

impl UserValidator {
    /// Validate a single user record
    ///
    /// A user must:
    /// - Have a positive ID
    /// - Have non-blank first and last names
    /// - Have an email with a non-empty local part and domain
    ///
    /// # Returns
    /// * `Ok(())` - If the record is valid
    /// * `Err(FixtureError::Validation)` - Naming the first offending field
    pub fn validate_user(user: &User) -> Result<()> {
        if user.id == 0 {
            return Err(FixtureError::Validation(
                "User ID must be a positive integer".to_string(),
            ));
        }

        if user.first_name.trim().is_empty() {
            return Err(Self::empty_field(user.id, "first_name"));
        }

        if user.last_name.trim().is_empty() {
            return Err(Self::empty_field(user.id, "last_name"));
        }

        Self::validate_email(&user.email)
    }

    /// Validate an email address loosely: `local@domain` with a dot in the domain
    pub fn validate_email(email: &str) -> Result<()> {
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };

        if valid {
            Ok(())
        } else {
            Err(FixtureError::Validation(format!("Invalid email address: '{email}'")))
        }
    }

    /// Validate a whole response body: every record valid, IDs unique
    pub fn validate_users(users: &[User]) -> Result<()> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in users {
            Self::validate_user(user)?;
            if !seen.insert(user.id) {
                return Err(FixtureError::Validation(format!(
                    "Duplicate user ID {} in response",
                    user.id
                )));
            }
        }
        Ok(())
    }

    fn empty_field(id: u32, field: &str) -> FixtureError {
        FixtureError::Validation(format!("User {id}: field '{field}' cannot be empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(id: u32) -> User {
        User::new(id, "Test", "User", format!("user{id}@example.com"))
    }

    #[test]
    fn test_valid_users() {
        assert!(UserValidator::validate_user(&user(1)).is_ok());
        assert!(UserValidator::validate_users(&[user(1), user(2)]).is_ok());
        assert!(UserValidator::validate_users(&[]).is_ok());
    }

    #[test]
    fn test_zero_id_rejected() {
        let error = UserValidator::validate_user(&user(0)).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut blank_first = user(1);
        blank_first.first_name = "   ".to_string();
        assert!(UserValidator::validate_user(&blank_first).is_err());

        let mut blank_last = user(1);
        blank_last.last_name = String::new();
        assert!(UserValidator::validate_user(&blank_last).is_err());
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("a.b+c@mail.example.org", true)]
    #[case("missing-at.example.com", false)]
    #[case("@example.com", false)]
    #[case("ada@localhost", false)]
    #[case("ada@example.", false)]
    #[case("ada@@example.com", false)]
    fn test_validate_email(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(UserValidator::validate_email(email).is_ok(), valid);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let error = UserValidator::validate_users(&[user(1), user(2), user(1)]).unwrap_err();
        assert_eq!(
            error,
            FixtureError::Validation("Duplicate user ID 1 in response".to_string())
        );
    }
}
