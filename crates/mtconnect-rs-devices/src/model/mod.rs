//! Internal `serde` data structures that map directly to the MTConnectDevices XML schema.
//!
//! The structs are deliberately lenient: attributes are captured as
//! `Option<String>` and converted by the `resolver`, so that one bad value
//! only disqualifies the element carrying it instead of the whole document.
//! Repeated elements (`<Devices>`, `<Components>`, `<DataItems>`) are split
//! into [`Fragment`]s and each child is deserialized on its own.
//! They are not intended for direct public use.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

pub mod common;
pub mod component;
pub mod data_item;
pub mod fragment;
pub mod header;

// Re-export key components for internal use
pub use common::Description;
pub use component::{Component, NamedChildren};
pub use data_item::DataItem;
pub use fragment::Fragment;
pub use header::Header;

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<MTConnectDevices>
  <Header creationTime="2024-05-01T10:00:00Z" sender="agent" instanceId="42" version="1.7.0.3" bufferSize="131072"/>
  <Devices>
    <Agent id="agent_1" name="Agent" uuid="agent-uuid"/>
    <Device id="d1" name="Mill" uuid="mill-uuid"><Description>one</Description><Description>two</Description></Device>
    <Device id="d2" name="Lathe"/>
  </Devices>
</MTConnectDevices>"#;

    #[test]
    fn test_deserialize_root_sections() {
        let root = Fragment::root("MTConnectDevices", DOCUMENT);
        let sections = root.children().unwrap();
        assert_eq!(sections[0].element_name, "Header");

        let header: Header = sections[0].deserialize().unwrap();
        assert_eq!(header.instance_id.as_deref(), Some("42"));

        let devices = root.children_of("Devices").unwrap();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].element_name, "Agent");

        let agent: Component = devices[0].deserialize().unwrap();
        assert_eq!(agent.id.as_deref(), Some("agent_1"));

        // A malformed device fails alone.
        assert!(devices[1].deserialize::<Component>().is_err());
        let lathe: Component = devices[2].deserialize().unwrap();
        assert_eq!(lathe.name.as_deref(), Some("Lathe"));
    }

    #[test]
    fn test_document_without_devices() {
        let root = Fragment::root(
            "MTConnectDevices",
            r#"<MTConnectDevices><Header sender="agent"/></MTConnectDevices>"#,
        );
        assert!(root.children_of("Devices").unwrap().is_empty());
    }
}
