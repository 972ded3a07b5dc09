// crates/mtconnect-rs-devices/src/resolver/header.rs

use super::Diagnostics;
use super::utils::{non_empty, parse_bool, parse_number};
use crate::error::DevicesError;
use crate::model;
use crate::types;

/// Parses a `model::Header` into a `types::Header`.
///
/// An unparsable numeric attribute is recorded as a diagnostic and left as `None`.
pub(super) fn resolve_header(
    model: &model::header::Header,
    diagnostics: &mut Diagnostics,
) -> types::Header {
    let mut number = |value: &Option<alloc::string::String>, attribute: &'static str| {
        parse_number::<u64>(value.as_deref(), "Header", attribute)
            .unwrap_or_else(|e| record(diagnostics, e))
    };

    let instance_id = number(&model.instance_id, "instanceId");
    let buffer_size = number(&model.buffer_size, "bufferSize");
    let asset_buffer_size = number(&model.asset_buffer_size, "assetBufferSize");
    let asset_count = number(&model.asset_count, "assetCount");

    let test_indicator = parse_bool(model.test_indicator.as_deref(), "Header", "testIndicator")
        .unwrap_or_else(|e| {
            diagnostics.skip("Header", None, &e);
            false
        });

    types::Header {
        creation_time: non_empty(model.creation_time.clone()),
        sender: non_empty(model.sender.clone()),
        instance_id,
        version: non_empty(model.version.clone()),
        buffer_size,
        asset_buffer_size,
        asset_count,
        device_model_change_time: non_empty(model.device_model_change_time.clone()),
        test_indicator,
    }
}

fn record<T>(diagnostics: &mut Diagnostics, error: DevicesError) -> Option<T> {
    diagnostics.skip("Header", None, &error);
    None
}
