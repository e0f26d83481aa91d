//! # oxide-localflavor
//!
//! Field and widget plumbing shared by the country packages
//! (`oxide-localflavor-be`, ...).
//!
//! This crate provides:
//! - The [`Field`] trait and [`RegexField`], a text field validated by one
//!   regular expression
//! - The [`Widget`] trait with [`TextInput`] and [`Select`]
//! - Per-field error message tables with caller overrides
//! - A [`Translator`] hook for localized messages and labels
//! - [`DeprecationNotice`] for superseded components
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_localflavor::{ErrorCode, ErrorMessages, Field, FieldOptions, RegexField};
//! use regex::Regex;
//!
//! let field = RegexField::with_defaults(
//!     Regex::new(r"^\d{4}$").unwrap(),
//!     ErrorMessages::new().invalid("Enter four digits."),
//!     FieldOptions::new().optional(),
//! );
//!
//! assert_eq!(field.clean("1000").unwrap(), "1000");
//! assert_eq!(field.clean("").unwrap(), "");
//!
//! let err = field.clean("10").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::Invalid);
//! assert_eq!(err.to_string(), "Enter four digits.");
//! ```
//!
//! ## Select Widgets
//!
//! ```rust
//! use oxide_localflavor::{Select, Widget, WidgetAttrs};
//!
//! let widget = Select::new(None, [("draft", "Draft"), ("published", "Published")]);
//! let html = widget.render("status", Some("draft"), &WidgetAttrs::new());
//! assert!(html.contains(r#"<option value="draft" selected>Draft</option>"#));
//! ```

mod deprecation;
mod error;
mod field;
mod i18n;
pub mod messages;
pub mod validation;
pub mod widgets;

pub use deprecation::DeprecationNotice;
pub use error::{ErrorCode, FormError, Result, ValidationError};
pub use field::{Field, FieldOptions, RegexField};
pub use i18n::{no_translation, Catalog, NoTranslation, SharedTranslator, Translator};
pub use messages::{ErrorMessageOverrides, ErrorMessages};
pub use widgets::{Select, TextInput, Widget, WidgetAttrs};
