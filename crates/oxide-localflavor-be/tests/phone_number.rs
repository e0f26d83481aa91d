//! Tests for the Belgian phone number field.

use oxide_localflavor::{ErrorCode, Field, FieldOptions};
use oxide_localflavor_be::{PhoneNumberField, INVALID_PHONE_NUMBER};
use proptest::prelude::*;

const VALID: &[&str] = &[
    // one-digit zone
    "02 123 45 67",
    "02/123.45.67",
    "02.123.45.67",
    "02123 45 67",
    // two-digit zone
    "050 12 34 56",
    "050/12.34.56",
    "050.12.34.56",
    "050123456",
    // mobile
    "0495 12 34 56",
    "0495/12.34.56",
    "0495.12.34.56",
    "0495123456",
];

const INVALID: &[&str] = &[
    "049512345 6",
    "12 345 67 89",
    "02-123-45-67",
    "0212345678",
    "02 123 45 6",
    "+32 2 123 45 67",
    "0495 123 456",
    "0495 12 34 56 78",
    "phone",
];

#[test]
fn accepts_documented_formats() {
    let field = PhoneNumberField::default();
    for number in VALID {
        assert_eq!(field.clean(number).unwrap(), *number, "{number}");
    }
}

#[test]
fn rejects_malformed_numbers() {
    let field = PhoneNumberField::default();
    for number in INVALID {
        let err = field.clean(number).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Invalid, "{number}");
        assert_eq!(err.message(), INVALID_PHONE_NUMBER);
    }
}

#[test]
fn cleaning_is_idempotent() {
    let field = PhoneNumberField::default();
    for number in VALID {
        let once = field.clean(number).unwrap();
        assert_eq!(field.clean(&once).unwrap(), once);
    }
}

#[test]
fn optional_empty_value() {
    let field = PhoneNumberField::new(FieldOptions::new().optional());
    assert_eq!(field.clean("  ").unwrap(), "");
}

#[test]
fn length_limit_runs_first() {
    let field = PhoneNumberField::new(FieldOptions::new().max_length(10));
    let err = field.clean("0495 12 34 56").unwrap_err();
    assert_eq!(err.code(), ErrorCode::MaxLength);
    assert!(field.clean("0495123456").is_ok());
}

proptest! {
    #[test]
    fn mobile_numbers_with_any_separators(
        digits in "[0-9]{8}",
        separators in prop::collection::vec(prop::sample::select(vec!["", " ", "."]), 3),
    ) {
        let number = format!(
            "04{}{}{}{}{}{}{}",
            &digits[..2], separators[0], &digits[2..4], separators[1],
            &digits[4..6], separators[2], &digits[6..],
        );
        let field = PhoneNumberField::default();
        prop_assert_eq!(field.clean(&number).unwrap(), number);
    }

    #[test]
    fn letters_are_rejected(number in "0[0-9]{3}[a-z][0-9]{4}") {
        let field = PhoneNumberField::default();
        prop_assert!(field.clean(&number).is_err());
    }
}
