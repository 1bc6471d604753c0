//! Reusable validators
//!
//! Each validator is a pure function from raw text to a typed value or a
//! list of `FormError`s. They can be passed to `empty` or
//! `Form::with_validator` as is.

use crate::form::{FormError, Validation};

/// Raw text is not a number
pub const INVALID_NUMBER: &str = "invalidNumber";

/// Raw text is shorter than required
pub const INVALID_LENGTH: &str = "invalidLength";

/// Raw text is empty
pub const EMPTY_STRING: &str = "emptyString";

/// Accepts any text as is
pub fn accept_text(raw: &str) -> Validation<String> {
    Ok(raw.to_string())
}

/// Empty text means no value, anything else is kept as is
pub fn optional_text(raw: &str) -> Validation<Option<String>> {
    if raw.is_empty() {
        Ok(None)
    } else {
        Ok(Some(raw.to_string()))
    }
}

/// Parses a finite number, ignoring surrounding whitespace.
///
/// Decimal and exponent notation are accepted; empty text, `inf` and `NaN`
/// are not.
pub fn number_validator(raw: &str) -> Validation<f64> {
    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(vec![FormError::new(
            INVALID_NUMBER,
            format!("'{}' is not a number", raw),
        )]),
    }
}

/// Parses a whole number, ignoring surrounding whitespace
pub fn int_validator(raw: &str) -> Validation<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        vec![FormError::new(
            INVALID_NUMBER,
            format!("'{}' is not a whole number", raw),
        )]
    })
}

/// Rejects empty text
pub fn not_empty_validator(raw: &str) -> Validation<String> {
    if raw.is_empty() {
        Err(vec![FormError::new(EMPTY_STRING, "Value must not be empty")])
    } else {
        Ok(raw.to_string())
    }
}

/// Rejects text shorter than `min_length` characters
pub fn min_length_validator(
    min_length: usize,
) -> impl Fn(&str) -> Validation<String> + Clone + Send + Sync + 'static {
    move |raw: &str| {
        if raw.chars().count() < min_length {
            Err(vec![FormError::new(
                INVALID_LENGTH,
                format!("Must be at least {} characters long", min_length),
            )])
        } else {
            Ok(raw.to_string())
        }
    }
}
