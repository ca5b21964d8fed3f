//! Request-shape predicates.
//!
//! Pure and total; applied at the transport boundary before requests reach
//! the auth service. The service itself trusts its callers' inputs.

use validator::ValidateEmail;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Structural email-format check.
pub fn is_email(value: &str) -> bool {
    value.validate_email()
}

/// A password is valid if its trimmed length is at least
/// [`MIN_PASSWORD_LENGTH`] and it is non-empty after trimming.
pub fn is_valid_password(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Application identifiers are strictly positive.
pub fn is_valid_app_id(app_id: i32) -> bool {
    app_id > 0
}

/// User identifiers are strictly positive.
pub fn is_valid_user_id(user_id: i64) -> bool {
    user_id > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(is_email("a@x.com"));
        assert!(is_email("user.name+tag@example.co.uk"));
        assert!(!is_email(""));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("missing@domain@twice.com"));
    }

    #[test]
    fn password_length() {
        assert!(is_valid_password("12345"));
        assert!(is_valid_password("secret1"));
        assert!(!is_valid_password("1234"));
        assert!(!is_valid_password(""));
        // Whitespace does not count toward the minimum length.
        assert!(!is_valid_password("   ab   "));
    }

    #[test]
    fn identifiers_must_be_positive() {
        assert!(is_valid_app_id(1));
        assert!(!is_valid_app_id(0));
        assert!(!is_valid_app_id(-1));

        assert!(is_valid_user_id(1));
        assert!(!is_valid_user_id(0));
        assert!(!is_valid_user_id(-5));
    }
}
