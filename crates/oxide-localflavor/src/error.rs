//! Error types for fields.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Key identifying why a value was rejected.
///
/// Each code maps to one entry of [`ErrorMessages`](crate::ErrorMessages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    /// The field is required and the value was empty.
    Required,
    /// The value does not have the expected shape.
    Invalid,
    /// The value is longer than allowed.
    MaxLength,
    /// The value is shorter than allowed.
    MinLength,
}

impl ErrorCode {
    /// Returns the message key for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Invalid => "invalid",
            Self::MaxLength => "max_length",
            Self::MinLength => "min_length",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value failed validation.
///
/// The message may contain `{name}` placeholders; they are filled from
/// [`params`](Self::params) whenever the message is replaced through
/// [`with_message`](Self::with_message).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    code: ErrorCode,
    message: String,
    params: BTreeMap<&'static str, String>,
}

impl ValidationError {
    /// Creates an error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            params: BTreeMap::new(),
        }
    }

    /// Attaches a named parameter and re-interpolates the message.
    #[must_use]
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.insert(name, value.to_string());
        self.message = self.interpolate(&self.message);
        self
    }

    /// Replaces the message, filling placeholders from the parameters.
    #[must_use]
    pub fn with_message(mut self, template: &str) -> Self {
        self.message = self.interpolate(template);
        self
    }

    /// Returns the error code.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the named parameters.
    pub const fn params(&self) -> &BTreeMap<&'static str, String> {
        &self.params
    }

    fn interpolate(&self, template: &str) -> String {
        self.params
            .iter()
            .fold(template.to_string(), |message, (name, value)| {
                message.replace(&format!("{{{name}}}"), value)
            })
    }
}

/// Field configuration errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A pattern given to a regex field does not compile.
    #[error("invalid field pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FormError>;
