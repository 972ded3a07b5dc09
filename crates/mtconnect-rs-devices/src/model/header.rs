//! Contains model structs related to the `<Header>`.

use alloc::string::String;
use serde::Deserialize;

/// Protocol metadata published by the agent.
///
/// All attributes are kept as raw strings; numeric conversion happens in
/// `resolver::header`.
#[derive(Debug, Deserialize, Default)]
pub struct Header {
    #[serde(rename = "@creationTime", default)]
    pub creation_time: Option<String>,

    #[serde(rename = "@sender", default)]
    pub sender: Option<String>,

    #[serde(rename = "@instanceId", default)]
    pub instance_id: Option<String>, // xs:unsignedLong

    #[serde(rename = "@version", default)]
    pub version: Option<String>,

    #[serde(rename = "@bufferSize", default)]
    pub buffer_size: Option<String>, // xs:unsignedInt

    #[serde(rename = "@assetBufferSize", default)]
    pub asset_buffer_size: Option<String>,

    #[serde(rename = "@assetCount", default)]
    pub asset_count: Option<String>,

    #[serde(rename = "@deviceModelChangeTime", default)]
    pub device_model_change_time: Option<String>,

    #[serde(rename = "@testIndicator", default)]
    pub test_indicator: Option<String>, // xs:boolean
}
