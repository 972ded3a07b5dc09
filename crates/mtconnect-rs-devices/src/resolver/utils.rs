// crates/mtconnect-rs-devices/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::error::DevicesError;
use alloc::string::String;
use core::str::FromStr;

/// Returns the trimmed value, or `None` if it is absent or blank.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(String::from(trimmed))
    }
}

/// Returns the value of a mandatory attribute.
pub(super) fn required(
    value: Option<String>,
    element: &str,
    attribute: &'static str,
) -> Result<String, DevicesError> {
    non_empty(value).ok_or_else(|| DevicesError::MissingAttribute {
        element: String::from(element),
        attribute,
    })
}

/// Parses an optional numeric attribute (`xs:float`, `xs:integer`, ...).
pub(super) fn parse_number<T: FromStr>(
    value: Option<&str>,
    element: &str,
    attribute: &'static str,
) -> Result<Option<T>, DevicesError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| DevicesError::InvalidAttributeFormat {
            element: String::from(element),
            attribute,
            value: String::from(raw),
        })
}

/// Parses an optional `xs:float` attribute. `NaN` and infinities are rejected.
pub(super) fn parse_float(
    value: Option<&str>,
    element: &str,
    attribute: &'static str,
) -> Result<Option<f64>, DevicesError> {
    match parse_number::<f64>(value, element, attribute)? {
        Some(number) if !number.is_finite() => Err(DevicesError::InvalidAttributeFormat {
            element: String::from(element),
            attribute,
            value: String::from(value.unwrap_or_default().trim()),
        }),
        parsed => Ok(parsed),
    }
}

/// Parses an optional `xs:boolean` attribute, defaulting to `false`.
pub(super) fn parse_bool(
    value: Option<&str>,
    element: &str,
    attribute: &'static str,
) -> Result<bool, DevicesError> {
    match value.map(str::trim) {
        None | Some("") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(DevicesError::InvalidAttributeFormat {
            element: String::from(element),
            attribute,
            value: String::from(other),
        }),
    }
}
