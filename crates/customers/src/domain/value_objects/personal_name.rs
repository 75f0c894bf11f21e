//! PersonalName - First and last name of a customer

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{ValidationError, ValidationErrors};

/// Maximum length, in characters, of each name part.
pub const NAME_PART_MAX_LEN: usize = 50;

/// Validated first/last name pair. Both parts are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPersonalName", rename_all = "camelCase")]
pub struct PersonalName {
    first: String,
    last: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPersonalName {
    first: String,
    last: String,
}

impl PersonalName {
    /// Validate both parts, reporting every failing part.
    pub fn new(first: impl AsRef<str>, last: impl AsRef<str>) -> Result<Self, ValidationErrors> {
        let first = name_part("firstName", first.as_ref());
        let last = name_part("lastName", last.as_ref());

        match (first, last) {
            (Ok(first), Ok(last)) => Ok(Self { first, last }),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error.into()),
            (Err(first), Err(last)) => {
                let mut errors = ValidationErrors::from(first);
                errors.extend(last.into());
                Err(errors)
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }
}

fn name_part(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyNamePart { field });
    }
    if trimmed.chars().count() > NAME_PART_MAX_LEN {
        return Err(ValidationError::NamePartTooLong {
            field,
            max: NAME_PART_MAX_LEN,
        });
    }
    Ok(trimmed.to_string())
}

impl TryFrom<RawPersonalName> for PersonalName {
    type Error = ValidationErrors;

    fn try_from(raw: RawPersonalName) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.last)
    }
}

impl fmt::Display for PersonalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_is_trimmed() {
        let name = PersonalName::new("  Alice ", "Adams\t").unwrap();
        assert_eq!(name.first(), "Alice");
        assert_eq!(name.last(), "Adams");
        assert_eq!(name.to_string(), "Alice Adams");
    }

    #[test]
    fn test_both_empty_parts_are_reported() {
        let errors = PersonalName::new("", "   ").unwrap_err();
        assert_eq!(errors.errors().len(), 2);
        assert!(errors.has_field("firstName"));
        assert!(errors.has_field("lastName"));
    }

    #[test]
    fn test_length_bound_counts_characters() {
        let at_limit = "é".repeat(NAME_PART_MAX_LEN);
        assert!(PersonalName::new(&at_limit, "Adams").is_ok());

        let over = "a".repeat(NAME_PART_MAX_LEN + 1);
        let errors = PersonalName::new("Alice", over).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ValidationError::NamePartTooLong {
                field: "lastName",
                max: NAME_PART_MAX_LEN
            }]
        );
    }
}
