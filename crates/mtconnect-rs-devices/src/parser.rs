// crates/mtconnect-rs-devices/src/parser.rs

use crate::error::DevicesError;
use crate::model::Fragment;
use crate::namespaces;
use crate::paths::assign_paths;
use crate::resolver::resolve_document;
use crate::types::Document;
use alloc::string::String;
use log::{debug, warn};

const ROOT_ELEMENT: &str = "MTConnectDevices";

/// Parses an `MTConnectDevices` XML document into a [`Document`].
///
/// The pipeline is:
/// 1. Trim surrounding whitespace and a leading byte order mark.
/// 2. Strip namespace prefixes and detect the declared version.
/// 3. Deserialize every device, component and data item on its own and
///    resolve it into public types, skipping non-conforming elements.
/// 4. Assign `xpath` and `type_path` to every node when devices are present.
///
/// A document with no devices is not an error; check
/// [`Document::diagnostics`] for elements that were skipped.
///
/// # Errors
/// Returns a `DevicesError` if the input is empty, is not well-formed XML,
/// or its root element is not `<MTConnectDevices>`.
pub fn load_devices_from_str(xml_content: &str) -> Result<Document, DevicesError> {
    let trimmed = xml_content.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(DevicesError::EmptyInput);
    }

    // 1. Normalize element names and pick up the namespace version.
    let normalized = namespaces::normalize(trimmed)?;
    if normalized.root != ROOT_ELEMENT {
        return Err(DevicesError::UnexpectedRoot {
            found: normalized.root,
        });
    }

    // 2. Deserialize each section, device, component and data item from its
    //    own fragment and resolve them into the public types.
    let root = Fragment::root(&normalized.root, &normalized.xml);
    let mut document = resolve_document(&root, normalized.version)?;

    // 3. Address every node.
    if !document.devices.is_empty() {
        assign_paths(&mut document);
    }

    debug!(
        "Parsed MTConnectDevices (version {}): {} device(s), {} component(s), {} data item(s), {} skipped element(s)",
        document
            .version
            .map(|v| alloc::format!("{}", v))
            .unwrap_or_else(|| String::from("unknown")),
        document.devices.len(),
        document.get_components().len(),
        document.get_data_items().len(),
        document.diagnostics.len()
    );

    Ok(document)
}

impl Document {
    /// Parses an `MTConnectDevices` document, returning `None` on failure.
    ///
    /// The failure is logged at `warn` level. Use
    /// [`load_devices_from_str`](crate::load_devices_from_str) to get the
    /// error itself.
    pub fn create(xml_content: &str) -> Option<Document> {
        match load_devices_from_str(xml_content) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Failed to parse MTConnectDevices document: {}", e);
                None
            }
        }
    }
}
