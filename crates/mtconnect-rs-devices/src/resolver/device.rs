// crates/mtconnect-rs-devices/src/resolver/device.rs

use super::Diagnostics;
use super::component::build_component;
use super::utils::non_empty;
use crate::error::DevicesError;
use crate::model::{self, Fragment};
use crate::types;
use alloc::string::String;
use alloc::vec::Vec;
use mtconnect_rs::Version;

/// Resolves the children of `<Devices>` into `Device` roots.
///
/// Anything other than `<Device>` or `<Agent>` is reported and skipped, as
/// is any device that cannot be deserialized or whose own attributes fail
/// validation.
pub(super) fn resolve_devices(
    fragments: Vec<Fragment<'_>>,
    diagnostics: &mut Diagnostics,
) -> Vec<types::Device> {
    let mut devices = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match resolve_device(&fragment, diagnostics) {
            Ok(device) => devices.push(device),
            Err(e) => diagnostics.skip(&fragment.element_name, fragment.id.as_deref(), &e),
        }
    }
    devices
}

fn resolve_device(
    fragment: &Fragment<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<types::Device, DevicesError> {
    let kind = match fragment.element_name.as_str() {
        "Device" => types::DeviceKind::Device,
        "Agent" => types::DeviceKind::Agent,
        other => {
            return Err(DevicesError::UnexpectedElement {
                container: "Devices",
                found: String::from(other),
            });
        }
    };

    let mut model: model::Component = fragment.deserialize()?;
    let iso841_class = non_empty(model.iso841_class.take());
    let mtconnect_version = non_empty(model.mtconnect_version.take())
        .map(|v| {
            v.parse::<Version>()
                .map_err(|_| DevicesError::InvalidAttributeFormat {
                    element: fragment.element_name.clone(),
                    attribute: "mtconnectVersion",
                    value: v,
                })
        })
        .transpose()?;

    let component = build_component(fragment, model, diagnostics)?;

    Ok(types::Device {
        kind,
        id: component.id,
        name: component.name,
        native_name: component.native_name,
        uuid: component.uuid,
        iso841_class,
        mtconnect_version,
        sample_interval: component.sample_interval,
        sample_rate: component.sample_rate,
        description: component.description,
        data_items: component.data_items,
        compositions: component.compositions,
        references: component.references,
        components: component.components,
        xpath: component.xpath,
        type_path: component.type_path,
    })
}
