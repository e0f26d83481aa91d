//! Belgian form fields.

use once_cell::sync::Lazy;
use oxide_localflavor::{
    DeprecationNotice, ErrorMessages, Field, FieldOptions, RegexField, SharedTranslator,
    ValidationError, Widget,
};
use regex::Regex;

/// Message reported for a malformed postal code.
pub const INVALID_POSTAL_CODE: &str =
    "Enter a valid postal code in the range and format 1XXX - 9XXX.";

/// Message reported for a malformed phone number.
pub const INVALID_PHONE_NUMBER: &str = "Enter a valid phone number in one of the formats \
     0x xxx xx xx, 0xx xx xx xx, 04xx xx xx xx, \
     0x/xxx.xx.xx, 0xx/xx.xx.xx, 04xx/xx.xx.xx, \
     0x.xxx.xx.xx, 0xx.xx.xx.xx, 04xx.xx.xx.xx, \
     0xxxxxxxx or 04xxxxxxxx.";

static POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d{3}$").expect("postal code pattern compiles"));

// One alternative per dialling format: one-digit zone with a seven-digit
// subscriber number, two-digit zone with six digits, mobile 04xx with six.
static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^0\d[/. ]?\d{3}[. ]\d{2}[. ]?\d{2}$",
        r"|^0\d{2}[/. ]?\d{2}[. ]?\d{2}[. ]?\d{2}$",
        r"|^04\d{2}[/. ]?\d{2}[. ]?\d{2}[. ]?\d{2}$",
    ))
    .expect("phone number pattern compiles")
});

/// Logged each time a [`PhoneNumberField`] is built.
pub static PHONE_NUMBER_FIELD_DEPRECATION: DeprecationNotice = DeprecationNotice::new(
    "PhoneNumberField",
    "1.4",
    "a dedicated phone number library such as the `phonenumber` crate",
);

/// A field that validates its input as a Belgian postal code.
///
/// A postal code is four digits, the first one from 1 to 9. The first digit
/// mostly identifies the province, but 1xxx is shared by Brussels and both
/// Brabants and 3xxx by eastern Flemish Brabant and Limburg. Only the
/// shape is checked.
///
/// ```rust
/// use oxide_localflavor::{Field, FieldOptions};
/// use oxide_localflavor_be::PostalCodeField;
///
/// let field = PostalCodeField::new(FieldOptions::new());
/// assert_eq!(field.clean("1000").unwrap(), "1000");
/// assert!(field.clean("0123").is_err());
/// ```
#[derive(Debug)]
pub struct PostalCodeField {
    inner: RegexField,
}

impl PostalCodeField {
    /// Creates the field.
    pub fn new(options: FieldOptions) -> Self {
        let defaults = ErrorMessages::new().invalid(INVALID_POSTAL_CODE);
        Self {
            inner: RegexField::with_defaults(Regex::clone(&POSTAL_CODE), defaults, options),
        }
    }

    /// Sets the translator used for error messages.
    #[must_use]
    pub fn translator(self, translator: SharedTranslator) -> Self {
        Self {
            inner: self.inner.translator(translator),
        }
    }

    /// Returns the effective message table.
    pub fn messages(&self) -> &ErrorMessages {
        self.inner.messages()
    }
}

impl Default for PostalCodeField {
    fn default() -> Self {
        Self::new(FieldOptions::default())
    }
}

impl Field for PostalCodeField {
    fn clean(&self, value: &str) -> Result<String, ValidationError> {
        self.inner.clean(value)
    }

    fn widget(&self) -> &dyn Widget {
        self.inner.widget()
    }

    fn options(&self) -> &FieldOptions {
        self.inner.options()
    }
}

/// A field that validates its input as a Belgian phone number.
///
/// Accepted shapes, with `/`, `.` or a space as optional separators:
/// - `0d ddd dd dd`: a larger city, one-digit zone
/// - `0dd dd dd dd`: a smaller city, two-digit zone
/// - `04dd dd dd dd`: a mobile number
///
/// Deprecated since 1.4: building one logs
/// [`PHONE_NUMBER_FIELD_DEPRECATION`]. Prefer a dedicated phone number
/// library, which knows about real numbering plans.
#[derive(Debug)]
pub struct PhoneNumberField {
    inner: RegexField,
}

impl PhoneNumberField {
    /// Creates the field and logs its deprecation notice.
    pub fn new(options: FieldOptions) -> Self {
        let defaults = ErrorMessages::new().invalid(INVALID_PHONE_NUMBER);
        let inner = RegexField::with_defaults(Regex::clone(&PHONE_NUMBER), defaults, options);
        PHONE_NUMBER_FIELD_DEPRECATION.emit();
        Self { inner }
    }

    /// Sets the translator used for error messages.
    #[must_use]
    pub fn translator(self, translator: SharedTranslator) -> Self {
        Self {
            inner: self.inner.translator(translator),
        }
    }

    /// Returns the effective message table.
    pub fn messages(&self) -> &ErrorMessages {
        self.inner.messages()
    }
}

impl Default for PhoneNumberField {
    fn default() -> Self {
        Self::new(FieldOptions::default())
    }
}

impl Field for PhoneNumberField {
    fn clean(&self, value: &str) -> Result<String, ValidationError> {
        self.inner.clean(value)
    }

    fn widget(&self) -> &dyn Widget {
        self.inner.widget()
    }

    fn options(&self) -> &FieldOptions {
        self.inner.options()
    }
}
