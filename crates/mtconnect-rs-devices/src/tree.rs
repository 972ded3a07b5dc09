// crates/mtconnect-rs-devices/src/tree.rs

//! Read-only accessors that walk the device / component / data item tree.
//!
//! Every walk is pre-order and depth first: a component's own data items
//! come before those of its sub-components, and siblings keep document order.

use crate::types::{Component, DataItem, Device, Document};
use alloc::vec::Vec;

fn collect_components<'a>(components: &'a [Component], out: &mut Vec<&'a Component>) {
    for component in components {
        out.push(component);
        collect_components(&component.components, out);
    }
}

fn collect_data_items<'a>(components: &'a [Component], out: &mut Vec<&'a DataItem>) {
    for component in components {
        out.extend(component.data_items.iter());
        collect_data_items(&component.components, out);
    }
}

impl Device {
    /// Returns every data item of the device: its own first, then those of
    /// each component in pre-order.
    pub fn get_data_items(&self) -> Vec<&DataItem> {
        let mut items: Vec<&DataItem> = self.data_items.iter().collect();
        collect_data_items(&self.components, &mut items);
        items
    }

    /// Returns every component below the device in pre-order.
    /// The device itself is not included.
    pub fn get_components(&self) -> Vec<&Component> {
        let mut components = Vec::new();
        collect_components(&self.components, &mut components);
        components
    }

    /// Finds a data item anywhere in the device by its `id`.
    pub fn get_data_item(&self, id: &str) -> Option<&DataItem> {
        self.get_data_items().into_iter().find(|d| d.id == id)
    }

    /// Finds a component anywhere in the device by its `id`.
    pub fn get_component(&self, id: &str) -> Option<&Component> {
        self.get_components().into_iter().find(|c| c.id == id)
    }

    /// Returns the data items with the given type code, e.g. "POSITION".
    pub fn get_data_items_by_type(&self, data_item_type: &str) -> Vec<&DataItem> {
        self.get_data_items()
            .into_iter()
            .filter(|d| d.data_item_type == data_item_type)
            .collect()
    }
}

impl Component {
    /// Returns the component's sub-components in pre-order, excluding itself.
    pub fn get_components(&self) -> Vec<&Component> {
        let mut components = Vec::new();
        collect_components(&self.components, &mut components);
        components
    }

    /// Returns the component's own data items followed by those of its
    /// sub-components in pre-order.
    pub fn get_data_items(&self) -> Vec<&DataItem> {
        let mut items: Vec<&DataItem> = self.data_items.iter().collect();
        collect_data_items(&self.components, &mut items);
        items
    }
}

impl Document {
    /// Finds a device whose `id`, `name` or `uuid` equals `key`.
    pub fn get_device(&self, key: &str) -> Option<&Device> {
        self.devices.iter().find(|d| {
            d.id == key || d.name.as_deref() == Some(key) || d.uuid.as_deref() == Some(key)
        })
    }

    /// Data items of all devices, device by device.
    pub fn get_data_items(&self) -> Vec<&DataItem> {
        self.devices.iter().flat_map(Device::get_data_items).collect()
    }

    /// Components of all devices, device by device.
    pub fn get_components(&self) -> Vec<&Component> {
        self.devices.iter().flat_map(Device::get_components).collect()
    }

    pub fn get_data_item(&self, id: &str) -> Option<&DataItem> {
        self.devices.iter().find_map(|d| d.get_data_item(id))
    }
}
