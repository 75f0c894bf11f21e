//! EmailAddress - Contact address of a customer

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Maximum length, in characters, of an email address.
pub const EMAIL_MAX_LEN: usize = 100;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Exactly one '@' with a non-empty, whitespace-free side on each end.
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = raw.as_ref().trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if email.chars().count() > EMAIL_MAX_LEN {
            return Err(ValidationError::EmailTooLong { max: EMAIL_MAX_LEN });
        }
        if !email_regex().is_match(email) {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        let email = EmailAddress::new(" alice@example.com ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_rejects_addresses_without_single_at() {
        for raw in ["alice.example.com", "@example.com", "alice@", "a@b@c", "al ice@x.io"] {
            assert_eq!(
                EmailAddress::new(raw),
                Err(ValidationError::MalformedEmail),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(EmailAddress::new("  "), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_rejects_over_length_even_when_well_formed() {
        let local = "a".repeat(EMAIL_MAX_LEN);
        let raw = format!("{local}@example.com");
        assert_eq!(
            EmailAddress::new(raw),
            Err(ValidationError::EmailTooLong { max: EMAIL_MAX_LEN })
        );

        let domain = "b".repeat(EMAIL_MAX_LEN - 2);
        assert!(EmailAddress::new(format!("a@{domain}")).is_ok());
    }
}
