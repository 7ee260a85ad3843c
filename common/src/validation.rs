//! Form validation rules shared by every form of the dashboard.
//!
//! Each rule returns `Ok(())` or the [`ValidationError`] to display next to
//! the field. Rules are meant to be chained with `and_then`, so only the first
//! failing rule of a field is reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Moroccan mobile/landline: `+212` or `0`, then 5-7, then 8 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+212|0)[5-7]\d{8}$").expect("valid phone pattern"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email pattern")
});

pub const LOGIN_PASSWORD_MIN: usize = 6;
pub const REGISTER_PASSWORD_MIN: usize = 8;

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Blank (empty or whitespace-only) values are missing.
pub fn validate_required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

/// Length is counted in characters, not bytes.
pub fn validate_min_length(
    value: &str,
    min: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().count() < min {
        Err(ValidationError::TooShort { field, min })
    } else {
        Ok(())
    }
}

pub fn validate_max_length(
    value: &str,
    max: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

/// Registration passwords need a lowercase letter, an uppercase letter and a
/// digit on top of the minimum length.
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    validate_required(password, "Le mot de passe")?;
    validate_min_length(password, REGISTER_PASSWORD_MIN, "Le mot de passe")?;
    let lower = password.chars().any(|c| c.is_lowercase());
    let upper = password.chars().any(|c| c.is_uppercase());
    let digit = password.chars().any(|c| c.is_ascii_digit());
    if lower && upper && digit {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    validate_required(confirmation, "La confirmation")?;
    if password == confirmation {
        Ok(())
    } else {
        Err(ValidationError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern() {
        for ok in ["+212612345678", "0612345678", "0512345678", "+212712345678"] {
            assert!(is_valid_phone(ok), "{ok}");
        }
        for bad in ["612345678", "0812345678", "+2126123456789", "+33612345678", "06 12 34 56 78", ""] {
            assert!(!is_valid_phone(bad), "{bad}");
        }
    }

    #[test]
    fn email_pattern_is_case_insensitive() {
        assert!(is_valid_email("jean.dupont@email.com"));
        assert!(is_valid_email("AGENCE+immo@Exemple.MA"));
        assert!(!is_valid_email("jean@email"));
        assert!(!is_valid_email("@email.com"));
        assert!(!is_valid_email("jean dupont@email.com"));
    }

    #[test]
    fn required_rejects_whitespace() {
        assert_eq!(
            validate_required("   ", "Le nom"),
            Err(ValidationError::Required { field: "Le nom" })
        );
        assert_eq!(validate_required("x", "Le nom"), Ok(()));
    }

    #[test]
    fn lengths_count_characters() {
        assert!(validate_min_length("é", 2, "Le nom").is_err());
        assert!(validate_min_length("éé", 2, "Le nom").is_ok());
        assert!(validate_min_length("", 2, "Le nom").is_ok());
        assert!(validate_max_length("abc", 2, "Notes").is_err());
    }

    #[test]
    fn new_password_strength() {
        assert_eq!(validate_new_password("Secret12"), Ok(()));
        assert_eq!(validate_new_password("secret12"), Err(ValidationError::WeakPassword));
        assert!(matches!(
            validate_new_password("Se1"),
            Err(ValidationError::TooShort { min: 8, .. })
        ));
        assert_eq!(validate_confirmation("Secret12", "Secret13"), Err(ValidationError::Mismatch));
    }
}
