// crates/mtconnect-rs-devices/src/model/common.rs

//! Contains helper structs shared by devices and components.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Represents `<Description manufacturer="..." model="...">Free text</Description>`
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Description {
    #[serde(rename = "@manufacturer", default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "@model", default)]
    pub model: Option<String>,
    #[serde(rename = "@serialNumber", default)]
    pub serial_number: Option<String>,
    #[serde(rename = "@station", default)]
    pub station: Option<String>,
    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}

/// Represents `<Composition id="..." type="..." name="..." uuid="..."/>`
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Composition {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub composition_type: Option<String>,
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    #[serde(rename = "@uuid", default)]
    pub uuid: Option<String>,
}

/// Represents `<Compositions>`.
#[derive(Debug, Deserialize, Default)]
pub struct Compositions {
    #[serde(rename = "Composition", default)]
    pub composition: Vec<Composition>,
}

/// Attributes shared by `<ComponentRef>` and `<DataItemRef>`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ReferenceAttributes {
    #[serde(rename = "@idRef", default)]
    pub id_ref: Option<String>,
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
}
