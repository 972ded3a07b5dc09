// crates/mtconnect-rs-devices/src/error.rs

use alloc::fmt;
use alloc::string::String;
use core::str::Utf8Error;
use mtconnect_rs::{ParseCategoryError, ParseRepresentationError};
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while parsing an MTConnectDevices document.
///
/// Some variants are fatal for the whole document (`XmlReading`,
/// `XmlParsing`, `UnexpectedRoot`); the rest describe why a single device,
/// component or data item was skipped and end up in the document's
/// diagnostics.
#[derive(Debug)]
pub enum DevicesError {
    /// An error from the underlying `quick-xml` reader (malformed XML).
    XmlReading(XmlError),

    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from `serde_json` while rendering a document.
    JsonSerializing(serde_json::Error),

    /// An element or attribute name was not valid UTF-8.
    Utf8(Utf8Error),

    /// The input contained no root element.
    EmptyInput,

    /// The root element was not `<MTConnectDevices>`.
    UnexpectedRoot { found: String },

    /// A required XML element was missing (e.g., Header).
    MissingElement { element: &'static str },

    /// A required attribute was missing (e.g., @id on a component).
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// An attribute had an invalid format (e.g., a non-numeric @sampleRate).
    InvalidAttributeFormat {
        element: String,
        attribute: &'static str,
        value: String,
    },

    /// A child element name that is not allowed in its container.
    UnexpectedElement { container: &'static str, found: String },
}

impl From<XmlError> for DevicesError {
    fn from(e: XmlError) -> Self {
        DevicesError::XmlReading(e)
    }
}

impl From<DeError> for DevicesError {
    fn from(e: DeError) -> Self {
        DevicesError::XmlParsing(e)
    }
}

impl From<serde_json::Error> for DevicesError {
    fn from(e: serde_json::Error) -> Self {
        DevicesError::JsonSerializing(e)
    }
}

impl From<Utf8Error> for DevicesError {
    fn from(e: Utf8Error) -> Self {
        DevicesError::Utf8(e)
    }
}

/// Converts a core `ParseCategoryError` into a user-friendly error.
impl From<ParseCategoryError> for DevicesError {
    fn from(e: ParseCategoryError) -> Self {
        DevicesError::InvalidAttributeFormat {
            element: "DataItem".into(),
            attribute: "category",
            value: e.0,
        }
    }
}

impl From<ParseRepresentationError> for DevicesError {
    fn from(e: ParseRepresentationError) -> Self {
        DevicesError::InvalidAttributeFormat {
            element: "DataItem".into(),
            attribute: "representation",
            value: e.0,
        }
    }
}

impl fmt::Display for DevicesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevicesError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            DevicesError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            DevicesError::JsonSerializing(e) => write!(f, "JSON serializing error: {}", e),
            DevicesError::Utf8(e) => write!(f, "Invalid UTF-8 in element name: {}", e),
            DevicesError::EmptyInput => write!(f, "Input contains no XML root element"),
            DevicesError::UnexpectedRoot { found } => {
                write!(f, "Expected <MTConnectDevices> root element, found <{}>", found)
            }
            DevicesError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            DevicesError::MissingAttribute { element, attribute } => {
                write!(f, "Missing required attribute {} on <{}>", attribute, element)
            }
            DevicesError::InvalidAttributeFormat {
                element,
                attribute,
                value,
            } => write!(
                f,
                "Invalid format for attribute {} on <{}>: '{}'",
                attribute, element, value
            ),
            DevicesError::UnexpectedElement { container, found } => {
                write!(f, "Unexpected element <{}> inside <{}>", found, container)
            }
        }
    }
}

impl core::error::Error for DevicesError {}
