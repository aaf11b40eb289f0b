//! Registration field validation.
//!
//! These checks belong to the caller side of the ledger contract: records
//! handed to the ledger are assumed to have passed them already.

use thiserror::Error;

use crate::constants::MOBILE_DIGITS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Email must end with {0}")]
    EmailDomain(String),

    #[error("Mobile number is required")]
    MobileRequired,

    #[error("Mobile must be exactly {MOBILE_DIGITS} digits")]
    MobileFormat,
}

/// Names must be non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// Emails must be non-empty and end with the required domain suffix.
pub fn validate_email(email: &str, domain_suffix: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !email.ends_with(domain_suffix) {
        return Err(ValidationError::EmailDomain(domain_suffix.to_string()));
    }
    Ok(())
}

/// Mobile numbers must be exactly ten ASCII digits.
pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    let mobile = mobile.trim();
    if mobile.is_empty() {
        return Err(ValidationError::MobileRequired);
    }
    if mobile.len() != MOBILE_DIGITS || !mobile.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MobileFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EMAIL_DOMAIN;

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert!(validate_name("Asha").is_ok());
    }

    #[test]
    fn test_email_requires_domain() {
        assert!(validate_email("asha@gmail.com", EMAIL_DOMAIN).is_ok());
        assert_eq!(
            validate_email("asha@example.org", EMAIL_DOMAIN),
            Err(ValidationError::EmailDomain(EMAIL_DOMAIN.to_string()))
        );
        assert_eq!(
            validate_email("", EMAIL_DOMAIN),
            Err(ValidationError::EmailRequired)
        );
    }

    #[test]
    fn test_mobile_requires_ten_digits() {
        assert!(validate_mobile("9876543210").is_ok());
        assert_eq!(validate_mobile("12345"), Err(ValidationError::MobileFormat));
        assert_eq!(
            validate_mobile("98765432ab"),
            Err(ValidationError::MobileFormat)
        );
        assert_eq!(validate_mobile(""), Err(ValidationError::MobileRequired));
    }
}
