//! # oxide-localflavor-be
//!
//! Belgium-specific form helpers:
//! - [`PostalCodeField`]: four-digit postal codes, 1XXX to 9XXX
//! - [`PhoneNumberField`]: landline and mobile numbers (deprecated)
//! - [`RegionSelect`] and [`ProvinceSelect`]: dropdowns over the fixed
//!   [`REGION_CHOICES`] and [`PROVINCE_CHOICES`] tables
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oxide_localflavor::{Catalog, Field, FieldOptions, Widget, WidgetAttrs};
//! use oxide_localflavor_be::{PostalCodeField, ProvinceSelect, INVALID_POSTAL_CODE};
//!
//! let postal_code = PostalCodeField::new(FieldOptions::new());
//! assert_eq!(postal_code.clean(" 4000 ").unwrap(), "4000");
//! assert_eq!(postal_code.clean("40000").unwrap_err().message(), INVALID_POSTAL_CODE);
//!
//! let catalog = Catalog::new().entry("Liege", "Luik");
//! let province = ProvinceSelect::new(None).translator(Arc::new(catalog));
//! let html = province.render("province", Some("WLG"), &WidgetAttrs::new());
//! assert!(html.contains(r#"<option value="WLG" selected>Luik</option>"#));
//! ```

mod error;
mod fields;
mod provinces;
mod regions;
mod widgets;

pub use error::UnknownCode;
pub use fields::{
    PhoneNumberField, PostalCodeField, INVALID_PHONE_NUMBER, INVALID_POSTAL_CODE,
    PHONE_NUMBER_FIELD_DEPRECATION,
};
pub use provinces::{Province, PROVINCE_CHOICES};
pub use regions::{Region, REGION_CHOICES};
pub use widgets::{ProvinceSelect, RegionSelect};
