// crates/mtconnect-rs-devices/src/paths.rs

//! Assigns the `xpath` and `type_path` addresses of every device,
//! component and data item after a document has been resolved.
//!
//! `xpath` locates the element in the agent's XML by id, e.g.
//! `//Devices/Device[@id='d1']/Components/Axes[@id='a']`.
//! `type_path` is the human readable chain of element types with names and
//! sub-types in brackets, e.g. `Device/Axes/Linear[X]/POSITION[ACTUAL]`.

use crate::types::{Component, DataItem, Document};
use alloc::format;
use alloc::string::String;

/// Fills in the paths of every node in the document.
pub(crate) fn assign_paths(document: &mut Document) {
    for device in &mut document.devices {
        let element = device.kind.element_name();
        device.xpath = format!("//Devices/{}[@id='{}']", element, device.id);
        device.type_path = String::from(element);

        assign_data_items(&mut device.data_items, &device.xpath, &device.type_path);
        assign_components(&mut device.components, &device.xpath, &device.type_path);
    }
}

fn assign_components(components: &mut [Component], parent_xpath: &str, parent_type_path: &str) {
    for component in components {
        component.xpath = format!(
            "{}/Components/{}[@id='{}']",
            parent_xpath, component.component_type, component.id
        );
        component.type_path = match &component.name {
            Some(name) => format!("{}/{}[{}]", parent_type_path, component.component_type, name),
            None => format!("{}/{}", parent_type_path, component.component_type),
        };

        assign_data_items(&mut component.data_items, &component.xpath, &component.type_path);
        assign_components(&mut component.components, &component.xpath, &component.type_path);
    }
}

fn assign_data_items(data_items: &mut [DataItem], owner_xpath: &str, owner_type_path: &str) {
    for item in data_items {
        item.xpath = format!("{}/DataItems/DataItem[@id='{}']", owner_xpath, item.id);
        item.type_path = match &item.sub_type {
            Some(sub_type) => format!("{}/{}[{}]", owner_type_path, item.data_item_type, sub_type),
            None => format!("{}/{}", owner_type_path, item.data_item_type),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Device, DeviceKind};
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use mtconnect_rs::{Category, Representation};

    fn data_item(id: &str, data_item_type: &str, sub_type: Option<&str>) -> DataItem {
        DataItem {
            category: Category::Sample,
            id: id.to_string(),
            data_item_type: data_item_type.to_string(),
            sub_type: sub_type.map(|s| s.to_string()),
            name: None,
            units: None,
            native_units: None,
            native_scale: None,
            representation: Representation::Value,
            significant_digits: None,
            statistic: None,
            coordinate_system: None,
            composition_id: None,
            sample_rate: None,
            discrete: false,
            source: None,
            constraints: None,
            filters: Vec::new(),
            xpath: String::new(),
            type_path: String::new(),
        }
    }

    #[test]
    fn test_assign_paths() {
        let linear = Component {
            component_type: "Linear".to_string(),
            id: "x".to_string(),
            name: Some("X".to_string()),
            data_items: vec![data_item("xpos", "POSITION", Some("ACTUAL"))],
            ..Default::default()
        };
        let axes = Component {
            component_type: "Axes".to_string(),
            id: "a".to_string(),
            components: vec![linear],
            ..Default::default()
        };
        let mut document = Document {
            devices: vec![
                Device {
                    id: "d1".to_string(),
                    data_items: vec![data_item("avail", "AVAILABILITY", None)],
                    components: vec![axes],
                    ..Default::default()
                },
                Device {
                    kind: DeviceKind::Agent,
                    id: "agent".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        assign_paths(&mut document);

        let device = &document.devices[0];
        assert_eq!(device.xpath, "//Devices/Device[@id='d1']");
        assert_eq!(device.type_path, "Device");
        assert_eq!(
            device.data_items[0].xpath,
            "//Devices/Device[@id='d1']/DataItems/DataItem[@id='avail']"
        );
        assert_eq!(device.data_items[0].type_path, "Device/AVAILABILITY");

        let axes = &device.components[0];
        assert_eq!(axes.xpath, "//Devices/Device[@id='d1']/Components/Axes[@id='a']");
        assert_eq!(axes.type_path, "Device/Axes");

        let linear = &axes.components[0];
        assert_eq!(
            linear.xpath,
            "//Devices/Device[@id='d1']/Components/Axes[@id='a']/Components/Linear[@id='x']"
        );
        assert_eq!(linear.type_path, "Device/Axes/Linear[X]");
        assert_eq!(
            linear.data_items[0].xpath,
            "//Devices/Device[@id='d1']/Components/Axes[@id='a']/Components/Linear[@id='x']/DataItems/DataItem[@id='xpos']"
        );
        assert_eq!(linear.data_items[0].type_path, "Device/Axes/Linear[X]/POSITION[ACTUAL]");

        let agent = &document.devices[1];
        assert_eq!(agent.xpath, "//Devices/Agent[@id='agent']");
        assert_eq!(agent.type_path, "Agent");
    }
}
