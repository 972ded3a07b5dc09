// crates/mtconnect-rs-devices/src/resolver/mod.rs

//! Handles the business logic of resolving values from a deserialized document model.
//!
//! This module contains the main `resolve_document` orchestrator and
//! sub-modules for the header, devices, components and data items. Every
//! device, component and data item is deserialized from its own
//! [`Fragment`]; an element that does not conform is logged, recorded in
//! [`Diagnostics`] and skipped.

use crate::error::DevicesError;
use crate::model::{self, Fragment};
use crate::types;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::warn;
use mtconnect_rs::Version;

// --- Sub-modules ---

mod component;
mod data_item;
mod device;
mod header;
mod utils;

/// Collects the recoverable problems found while resolving a document.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    entries: Vec<types::ParseDiagnostic>,
}

impl Diagnostics {
    /// Records that `element` (with optional `id`) was skipped because of `error`.
    pub(crate) fn skip(&mut self, element: &str, id: Option<&str>, error: &DevicesError) {
        let id_text = id.map(|i| format!(" id='{}'", i)).unwrap_or_default();
        warn!("Skipping <{}{}>: {}", element, id_text, error);

        self.entries.push(types::ParseDiagnostic {
            element: String::from(element),
            id: id.map(String::from),
            message: error.to_string(),
        });
    }

    pub(crate) fn into_inner(self) -> Vec<types::ParseDiagnostic> {
        self.entries
    }
}

/// Resolves the final `Document` from the root element of a normalized document.
/// This function contains all the logic for mapping the internal `model`
/// to the public, ergonomic `types`.
///
/// `namespace_version` is the version found on the root element's namespace;
/// when absent the header's agent version is used instead.
///
/// # Errors
/// Only fails if the root element cannot be split into its sections;
/// everything below it is reported through the document's diagnostics.
pub(crate) fn resolve_document(
    root: &Fragment<'_>,
    namespace_version: Option<Version>,
) -> Result<types::Document, DevicesError> {
    let mut diagnostics = Diagnostics::default();
    let sections = root.children()?;

    let header = match sections.iter().find(|s| s.element_name == "Header") {
        Some(fragment) => match fragment.deserialize::<model::Header>() {
            Ok(model) => header::resolve_header(&model, &mut diagnostics),
            Err(e) => {
                diagnostics.skip("Header", None, &e);
                types::Header::default()
            }
        },
        None => {
            diagnostics.skip(
                "MTConnectDevices",
                None,
                &DevicesError::MissingElement { element: "Header" },
            );
            types::Header::default()
        }
    };

    let version = namespace_version.or_else(|| {
        header
            .version
            .as_deref()
            .and_then(|v| v.parse::<Version>().ok())
    });

    let mut devices = Vec::new();
    let mut has_devices = false;
    for container in sections.iter().filter(|s| s.element_name == "Devices") {
        has_devices = true;
        match container.children() {
            Ok(fragments) => devices.extend(device::resolve_devices(fragments, &mut diagnostics)),
            Err(e) => diagnostics.skip("Devices", None, &e),
        }
    }
    if !has_devices {
        diagnostics.skip(
            "MTConnectDevices",
            None,
            &DevicesError::MissingElement { element: "Devices" },
        );
    }

    Ok(types::Document {
        header,
        devices,
        version,
        diagnostics: diagnostics.into_inner(),
    })
}
