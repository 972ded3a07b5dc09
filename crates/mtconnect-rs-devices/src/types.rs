// crates/mtconnect-rs-devices/src/types.rs

//! Public, ergonomic data structures for representing a parsed MTConnectDevices document.

use alloc::string::String;
use alloc::vec::Vec;
use mtconnect_rs::{Category, DataItemDefinition, Representation, Version};
use serde::Serialize;

// --- Root Document Structure ---

/// Represents a fully parsed and resolved MTConnectDevices document.
///
/// This is the main public struct. It is created once by
/// [`Document::create`](crate::Document::create) or
/// [`load_devices_from_str`](crate::load_devices_from_str) and is not
/// modified afterwards.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Metadata from the `<Header>` element.
    pub header: Header,

    /// The `<Device>` and `<Agent>` trees, in document order.
    pub devices: Vec<Device>,

    /// Version declared by the document namespace, falling back to the
    /// header's agent version.
    pub version: Option<Version>,

    /// Elements that were skipped because they did not conform to the schema.
    pub diagnostics: Vec<ParseDiagnostic>,
}

// --- Header ---

/// Represents the `<Header>` element.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// `@creationTime`
    pub creation_time: Option<String>,
    /// `@sender`
    pub sender: Option<String>,
    /// `@instanceId`
    pub instance_id: Option<u64>,
    /// `@version` (agent build, e.g. "1.7.0.3")
    pub version: Option<String>,
    /// `@bufferSize`
    pub buffer_size: Option<u64>,
    /// `@assetBufferSize`
    pub asset_buffer_size: Option<u64>,
    /// `@assetCount`
    pub asset_count: Option<u64>,
    /// `@deviceModelChangeTime`
    pub device_model_change_time: Option<String>,
    /// `@testIndicator`
    pub test_indicator: bool,
}

// --- Device ---

/// Whether a root element is a `<Device>` or the agent's own `<Agent>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceKind {
    #[default]
    Device,
    Agent,
}

impl DeviceKind {
    /// The XML element name for this kind.
    pub fn element_name(&self) -> &'static str {
        match self {
            DeviceKind::Device => "Device",
            DeviceKind::Agent => "Agent",
        }
    }
}

/// The root of one piece of equipment's component tree.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub kind: DeviceKind,
    pub id: String,
    pub name: Option<String>,
    pub native_name: Option<String>,
    pub uuid: Option<String>,
    pub iso841_class: Option<String>,
    pub mtconnect_version: Option<Version>,
    pub sample_interval: Option<f64>,
    pub sample_rate: Option<f64>,
    pub description: Option<Description>,
    /// DataItems declared directly on the device.
    pub data_items: Vec<DataItem>,
    pub compositions: Vec<Composition>,
    pub references: Vec<Reference>,
    /// Top-level components, in document order.
    pub components: Vec<Component>,
    pub xpath: String,
    pub type_path: String,
}

// --- Component ---

/// A physical or logical part of a device (axis, controller, sensor, ...).
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// The XML element name the component was declared with (e.g. "Axes", "Path").
    #[serde(rename = "type")]
    pub component_type: String,
    pub id: String,
    pub name: Option<String>,
    pub native_name: Option<String>,
    pub uuid: Option<String>,
    pub sample_interval: Option<f64>,
    pub sample_rate: Option<f64>,
    pub description: Option<Description>,
    pub data_items: Vec<DataItem>,
    pub compositions: Vec<Composition>,
    pub references: Vec<Reference>,
    /// Sub-components, in document order.
    pub components: Vec<Component>,
    pub xpath: String,
    pub type_path: String,
}

/// Represents `<Description>`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub station: Option<String>,
    /// Free text content of the element.
    pub value: Option<String>,
}

/// Represents `<Composition>`: a lower level element of a component
/// (e.g. a MOTOR inside a Linear axis) that is not modelled as a component.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub id: String,
    #[serde(rename = "type")]
    pub composition_type: String,
    pub name: Option<String>,
    pub uuid: Option<String>,
}

/// The kind of entity a [`Reference`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceKind {
    Component,
    DataItem,
}

/// Represents `<ComponentRef>` or `<DataItemRef>`.
///
/// References are lookups by id, not structural edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub kind: ReferenceKind,
    pub id_ref: String,
    pub name: Option<String>,
}

// --- DataItem ---

/// A declared measurement or event slot on a device or component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    pub category: Category,
    pub id: String,
    /// Standard type code, e.g. "TEMPERATURE".
    #[serde(rename = "type")]
    pub data_item_type: String,
    pub sub_type: Option<String>,
    pub name: Option<String>,
    pub units: Option<String>,
    pub native_units: Option<String>,
    pub native_scale: Option<String>,
    pub representation: Representation,
    pub significant_digits: Option<u32>,
    pub statistic: Option<String>,
    pub coordinate_system: Option<String>,
    pub composition_id: Option<String>,
    pub sample_rate: Option<f64>,
    pub discrete: bool,
    pub source: Option<Source>,
    pub constraints: Option<Constraints>,
    pub filters: Vec<Filter>,
    pub xpath: String,
    pub type_path: String,
}

impl DataItem {
    /// Returns the standard definition for this item's type, if known.
    pub fn definition(&self) -> Option<&'static DataItemDefinition> {
        mtconnect_rs::lookup(&self.data_item_type)
    }
}

/// Represents `<Source>`: where the agent obtains the item's values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub component_id: Option<String>,
    pub data_item_id: Option<String>,
    pub composition_id: Option<String>,
    pub value: Option<String>,
}

/// Represents `<Constraints>`: the allowed values of a DataItem.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Allowed values for EVENT items.
    pub values: Vec<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub nominal: Option<f64>,
    pub filter: Option<Filter>,
}

/// Represents `<Filter>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// `MINIMUM_DELTA` or `PERIOD`.
    #[serde(rename = "type")]
    pub filter_type: String,
    pub value: f64,
}

// --- Diagnostics ---

/// A recoverable problem found while resolving a document.
///
/// The offending element was skipped (or, for header attributes, left
/// empty); parsing continued with its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDiagnostic {
    /// Local name of the skipped element.
    pub element: String,
    /// Its `id` attribute, if it had one.
    pub id: Option<String>,
    /// Human readable reason.
    pub message: String,
}
