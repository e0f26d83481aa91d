//! Field validators.

use regex::Regex;

use crate::error::{ErrorCode, ValidationError};
use crate::messages;

/// Trait for field validators.
///
/// Validators report errors with their default message; the owning field
/// swaps it for its own message for the same [`ErrorCode`].
pub trait Validator: Send + Sync {
    /// Validates a value.
    fn validate(&self, value: &str) -> Result<(), ValidationError>;
}

/// Validator that accepts values matching a regular expression.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
}

impl RegexValidator {
    /// Creates a validator from a pattern string.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Creates a validator from a compiled regex.
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::new(ErrorCode::Invalid, messages::INVALID))
        }
    }
}

/// Validator that enforces a maximum number of characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLengthValidator {
    max_length: usize,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let length = value.chars().count();
        if length > self.max_length {
            Err(ValidationError::new(ErrorCode::MaxLength, messages::MAX_LENGTH)
                .param("limit_value", self.max_length)
                .param("show_value", length))
        } else {
            Ok(())
        }
    }
}

/// Validator that enforces a minimum number of characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
    min_length: usize,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let length = value.chars().count();
        if length < self.min_length {
            Err(ValidationError::new(ErrorCode::MinLength, messages::MIN_LENGTH)
                .param("limit_value", self.min_length)
                .param("show_value", length))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_validator() {
        let v = RegexValidator::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        assert!(v.validate("2024-01-15").is_ok());
        let err = v.validate("not a date").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Invalid);
        assert_eq!(err.message(), messages::INVALID);
    }

    #[test]
    fn test_regex_validator_bad_pattern() {
        assert!(RegexValidator::new("[0-9").is_err());
    }

    #[test]
    fn test_max_length_validator() {
        let v = MaxLengthValidator::new(5);
        assert!(v.validate("hello").is_ok());
        let err = v.validate("hello world").unwrap_err();
        assert_eq!(
            err.message(),
            "Ensure this value has at most 5 characters (it has 11)."
        );
    }

    #[test]
    fn test_max_length_counts_characters() {
        let v = MaxLengthValidator::new(4);
        assert!(v.validate("Liège").is_err());
        assert!(v.validate("Luik").is_ok());
        assert!(v.validate("éééé").is_ok());
    }

    #[test]
    fn test_min_length_validator() {
        let v = MinLengthValidator::new(5);
        assert!(v.validate("hello").is_ok());
        let err = v.validate("hi").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MinLength);
        assert_eq!(err.params().get("show_value").map(String::as_str), Some("2"));
    }
}
