//! Field trait and the regex-validated text field.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ErrorCode, Result, ValidationError};
use crate::i18n::{no_translation, SharedTranslator};
use crate::messages::{ErrorMessageOverrides, ErrorMessages};
use crate::validation::{MaxLengthValidator, MinLengthValidator, RegexValidator, Validator};
use crate::widgets::{TextInput, Widget, WidgetAttrs};

/// Options accepted by every field constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Whether an empty value is rejected. Defaults to `true`.
    pub required: bool,
    /// Whether surrounding whitespace is removed before validation.
    /// Defaults to `true`.
    pub strip: bool,
    /// Initial value.
    pub initial: Option<String>,
    /// Maximum number of characters.
    pub max_length: Option<usize>,
    /// Minimum number of characters.
    pub min_length: Option<usize>,
    /// Message overrides for this instance.
    pub error_messages: ErrorMessageOverrides,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            required: true,
            strip: true,
            initial: None,
            max_length: None,
            min_length: None,
            error_messages: ErrorMessageOverrides::default(),
            attrs: WidgetAttrs::default(),
        }
    }
}

impl FieldOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows empty values.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Keeps surrounding whitespace.
    #[must_use]
    pub fn no_strip(mut self) -> Self {
        self.strip = false;
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the minimum length.
    #[must_use]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Overrides the message reported for `code`.
    #[must_use]
    pub fn error_message(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
        self.error_messages = self.error_messages.set(code, message);
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// A form field: cleans submitted text and renders through a widget.
pub trait Field: Send + Sync {
    /// Validates a submitted value and returns its cleaned form.
    fn clean(&self, value: &str) -> std::result::Result<String, ValidationError>;

    /// Returns the widget this field renders with.
    fn widget(&self) -> &dyn Widget;

    /// Returns the options the field was built with.
    fn options(&self) -> &FieldOptions;

    /// Returns the attributes the field contributes to its widget.
    fn widget_attrs(&self) -> WidgetAttrs {
        let options = self.options();
        let mut attrs = options.attrs.clone();
        if let Some(max) = options.max_length {
            attrs.set("maxlength", max.to_string());
        }
        if let Some(min) = options.min_length {
            attrs.set("minlength", min.to_string());
        }
        attrs
    }

    /// Renders the field's widget, falling back to the initial value.
    fn render(&self, name: &str, value: Option<&str>) -> String {
        let value = value.or(self.options().initial.as_deref());
        self.widget().render(name, value, &self.widget_attrs())
    }
}

/// A text field whose value must match a regular expression.
///
/// ```rust
/// use oxide_localflavor::{ErrorCode, Field, FieldOptions, RegexField};
///
/// let field = RegexField::new(r"^[A-Z]{2}$", FieldOptions::new()).unwrap();
/// assert_eq!(field.clean(" BE ").unwrap(), "BE");
/// assert_eq!(field.clean("bel").unwrap_err().code(), ErrorCode::Invalid);
/// assert_eq!(field.clean("").unwrap_err().code(), ErrorCode::Required);
/// ```
pub struct RegexField {
    options: FieldOptions,
    messages: ErrorMessages,
    validators: Vec<Box<dyn Validator>>,
    widget: TextInput,
    translator: SharedTranslator,
}

impl fmt::Debug for RegexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexField")
            .field("options", &self.options)
            .field("messages", &self.messages)
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

impl RegexField {
    /// Creates a field from a pattern string.
    pub fn new(pattern: &str, options: FieldOptions) -> Result<Self> {
        Ok(Self::from_regex(Regex::new(pattern)?, options))
    }

    /// Creates a field from a compiled regex with the default messages.
    pub fn from_regex(regex: Regex, options: FieldOptions) -> Self {
        Self::with_defaults(regex, ErrorMessages::default(), options)
    }

    /// Creates a field whose messages start from `defaults` instead of the
    /// framework defaults. Caller overrides in `options` still win.
    pub fn with_defaults(regex: Regex, defaults: ErrorMessages, options: FieldOptions) -> Self {
        let messages = defaults.merged(&options.error_messages);

        let mut validators: Vec<Box<dyn Validator>> = Vec::new();
        if let Some(max) = options.max_length {
            validators.push(Box::new(MaxLengthValidator::new(max)));
        }
        if let Some(min) = options.min_length {
            validators.push(Box::new(MinLengthValidator::new(min)));
        }
        validators.push(Box::new(RegexValidator::from_regex(regex)));

        Self {
            options,
            messages,
            validators,
            widget: TextInput::default(),
            translator: no_translation(),
        }
    }

    /// Sets the translator used for error messages.
    #[must_use]
    pub fn translator(mut self, translator: SharedTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Returns the effective message table.
    pub fn messages(&self) -> &ErrorMessages {
        &self.messages
    }

    fn localize(&self, error: ValidationError) -> ValidationError {
        let template = self.translator.gettext(self.messages.get(error.code()));
        error.with_message(&template)
    }
}

impl Field for RegexField {
    fn clean(&self, value: &str) -> std::result::Result<String, ValidationError> {
        let value = if self.options.strip {
            value.trim()
        } else {
            value
        };

        if value.is_empty() {
            if self.options.required {
                debug!(code = %ErrorCode::Required, "rejected field value");
                let error = ValidationError::new(ErrorCode::Required, "");
                return Err(self.localize(error));
            }
            return Ok(String::new());
        }

        for validator in &self.validators {
            if let Err(error) = validator.validate(value) {
                debug!(code = %error.code(), "rejected field value");
                return Err(self.localize(error));
            }
        }

        Ok(value.to_string())
    }

    fn widget(&self) -> &dyn Widget {
        &self.widget
    }

    fn options(&self) -> &FieldOptions {
        &self.options
    }
}
