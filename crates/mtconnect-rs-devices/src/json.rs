// crates/mtconnect-rs-devices/src/json.rs

use crate::error::DevicesError;
use crate::types::Document;
use alloc::string::String;

/// Renders a parsed document as pretty-printed JSON.
///
/// Field names are camelCase and type tags are written as `"type"`, e.g.
/// `{"type": "Linear", "id": "x", ...}` for a component.
///
/// Floating point attributes are always finite: the parser rejects `NaN`
/// and infinities, so no value is rendered as `null` for that reason.
///
/// # Errors
/// Returns `DevicesError::JsonSerializing` if `serde_json` fails to render
/// the document.
pub fn save_devices_to_json(document: &Document) -> Result<String, DevicesError> {
    Ok(serde_json::to_string_pretty(document)?)
}
