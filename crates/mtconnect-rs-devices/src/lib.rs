// crates/mtconnect-rs-devices/src/lib.rs

#![no_std]
#![doc = "Parses MTConnectDevices documents into a typed device model."]
#![doc = ""]
#![doc = "This `no_std + alloc` library reads the device model published by an"]
#![doc = "MTConnect agent: devices, their component trees and"]
#![doc = "the data items declared on every node."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `Document::create` / `load_devices_from_str`: Parsing an `MTConnectDevices` XML document,"]
#![doc = "  with or without namespace prefixes, skipping elements that do not conform."]
#![doc = "- `Device::get_data_items` / `Device::get_components`: Pre-order walks of a device tree."]
#![doc = "- `save_devices_to_json`: Rendering a parsed document as JSON."]

extern crate alloc;

// --- Crate Modules ---

mod error;
mod json;
mod model;
pub mod namespaces;
mod parser;
mod paths;
mod resolver;
mod tree;
mod types;

// --- Public API Re-exports ---

pub use error::DevicesError;
pub use json::save_devices_to_json;
pub use namespaces::{NormalizedXml, normalize};
pub use parser::load_devices_from_str;
pub use types::{
    Component, Composition, Constraints, DataItem, Description, Device, DeviceKind, Document,
    Filter, Header, ParseDiagnostic, Reference, ReferenceKind, Source,
};

pub use mtconnect_rs::{Category, DataItemDefinition, Representation, Version};
