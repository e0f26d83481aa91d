//! Error message configuration.
//!
//! Fields look up the message for a rejected value by its [`ErrorCode`].
//! The effective table is built once, at construction, by layering:
//!
//! 1. the defaults of [`ErrorMessages::default`],
//! 2. the defaults of the concrete field (a postal code field replaces
//!    `invalid`, for instance),
//! 3. the caller's [`ErrorMessageOverrides`].

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Default message for [`ErrorCode::Required`].
pub const REQUIRED: &str = "This field is required.";
/// Default message for [`ErrorCode::Invalid`].
pub const INVALID: &str = "Enter a valid value.";
/// Default message for [`ErrorCode::MaxLength`].
pub const MAX_LENGTH: &str =
    "Ensure this value has at most {limit_value} characters (it has {show_value}).";
/// Default message for [`ErrorCode::MinLength`].
pub const MIN_LENGTH: &str =
    "Ensure this value has at least {limit_value} characters (it has {show_value}).";

/// Complete set of messages a field reports errors with.
///
/// Messages are untranslated message ids; fields pass them through their
/// [`Translator`](crate::Translator) when an error is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    /// Reported when a required field is empty.
    pub required: String,
    /// Reported when the value does not match the field's format.
    pub invalid: String,
    /// Reported when the value exceeds `max_length`.
    pub max_length: String,
    /// Reported when the value is shorter than `min_length`.
    pub min_length: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            required: REQUIRED.to_string(),
            invalid: INVALID.to_string(),
            max_length: MAX_LENGTH.to_string(),
            min_length: MIN_LENGTH.to_string(),
        }
    }
}

impl ErrorMessages {
    /// Creates the default message table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the `invalid` message.
    #[must_use]
    pub fn invalid(mut self, message: impl Into<String>) -> Self {
        self.invalid = message.into();
        self
    }

    /// Returns the message for a code.
    pub fn get(&self, code: ErrorCode) -> &str {
        match code {
            ErrorCode::Required => &self.required,
            ErrorCode::Invalid => &self.invalid,
            ErrorCode::MaxLength => &self.max_length,
            ErrorCode::MinLength => &self.min_length,
        }
    }

    /// Applies caller overrides on top of this table.
    #[must_use]
    pub fn merged(mut self, overrides: &ErrorMessageOverrides) -> Self {
        let slots = [
            (&mut self.required, &overrides.required),
            (&mut self.invalid, &overrides.invalid),
            (&mut self.max_length, &overrides.max_length),
            (&mut self.min_length, &overrides.min_length),
        ];
        for (slot, replacement) in slots {
            if let Some(message) = replacement {
                slot.clone_from(message);
            }
        }
        self
    }
}

/// Per-instance message overrides; unset keys keep the field's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessageOverrides {
    /// Replacement for the `required` message.
    pub required: Option<String>,
    /// Replacement for the `invalid` message.
    pub invalid: Option<String>,
    /// Replacement for the `max_length` message.
    pub max_length: Option<String>,
    /// Replacement for the `min_length` message.
    pub min_length: Option<String>,
}

impl ErrorMessageOverrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message for a code.
    #[must_use]
    pub fn set(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
        let slot = match code {
            ErrorCode::Required => &mut self.required,
            ErrorCode::Invalid => &mut self.invalid,
            ErrorCode::MaxLength => &mut self.max_length,
            ErrorCode::MinLength => &mut self.min_length,
        };
        *slot = Some(message.into());
        self
    }

    /// Returns whether no key is overridden.
    pub const fn is_empty(&self) -> bool {
        self.required.is_none()
            && self.invalid.is_none()
            && self.max_length.is_none()
            && self.min_length.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let messages = ErrorMessages::new();
        assert_eq!(messages.get(ErrorCode::Required), "This field is required.");
        assert_eq!(messages.get(ErrorCode::Invalid), "Enter a valid value.");
    }

    #[test]
    fn test_overrides_win_over_component_defaults() {
        let component = ErrorMessages::new().invalid("Enter a postal code.");
        let overrides = ErrorMessageOverrides::new().set(ErrorCode::Invalid, "Nope.");
        let merged = component.merged(&overrides);
        assert_eq!(merged.invalid, "Nope.");
        assert_eq!(merged.required, REQUIRED);
    }

    #[test]
    fn test_empty_overrides_keep_table() {
        let component = ErrorMessages::new().invalid("Enter a postal code.");
        let merged = component.clone().merged(&ErrorMessageOverrides::new());
        assert_eq!(merged, component);
        assert!(ErrorMessageOverrides::new().is_empty());
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: ErrorMessageOverrides =
            serde_json::from_str(r#"{"invalid": "Bad code."}"#).unwrap();
        assert_eq!(overrides.invalid.as_deref(), Some("Bad code."));
        assert!(overrides.required.is_none());
    }

    #[test]
    fn test_partial_table_from_json() {
        let messages: ErrorMessages = serde_json::from_str(r#"{"required": "Fill me."}"#).unwrap();
        assert_eq!(messages.required, "Fill me.");
        assert_eq!(messages.invalid, INVALID);
    }
}
