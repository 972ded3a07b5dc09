// crates/mtconnect-rs-devices/src/namespaces.rs

//! Namespace normalisation for MTConnect documents.
//!
//! Agents publish documents either with a default namespace
//! (`<MTConnectDevices xmlns="urn:mtconnect.org:MTConnectDevices:1.7">`) or
//! with prefixed elements (`<m:MTConnectDevices xmlns:m="...">`), and vendor
//! extensions add further prefixes (`<x:Spindle>`). The serde model matches
//! plain element names, so this pass rewrites every element name to its
//! local name before deserialization. Attribute names are left untouched.

use crate::error::DevicesError;
use alloc::string::String;
use core::str;
use log::trace;
use mtconnect_rs::Version;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// The output of [`normalize`].
#[derive(Debug)]
pub struct NormalizedXml {
    /// The document with all element prefixes removed.
    pub xml: String,
    /// Local name of the root element.
    pub root: String,
    /// Version declared by an MTConnectDevices namespace on the root element.
    pub version: Option<Version>,
}

/// Rewrites `xml` so that every element is named by its local name.
///
/// Text, CDATA sections, entity references and attributes are copied
/// verbatim. Comments, processing instructions, the XML declaration and
/// DOCTYPE are dropped.
///
/// # Errors
/// Returns `DevicesError::XmlReading` for malformed XML and
/// `DevicesError::EmptyInput` if no root element is found.
pub fn normalize(xml: &str) -> Result<NormalizedXml, DevicesError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::with_capacity(xml.len());
    let mut root: Option<String> = None;
    let mut version = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if root.is_none() {
                    root = Some(local_name(&e)?.into());
                    version = version_from_root(&e);
                }
                write_start(&mut out, &e)?;
                out.push('>');
                depth += 1;
            }
            Event::Empty(e) => {
                if root.is_none() {
                    root = Some(local_name(&e)?.into());
                    version = version_from_root(&e);
                }
                write_start(&mut out, &e)?;
                out.push_str("/>");
            }
            Event::End(e) => {
                out.push_str("</");
                out.push_str(str::from_utf8(e.local_name().as_ref())?);
                out.push('>');
                depth = depth.saturating_sub(1);
            }
            Event::Text(e) => {
                // Text outside the root element is not part of the document.
                if depth > 0 {
                    out.push_str(str::from_utf8(&e)?);
                }
            }
            Event::GeneralRef(e) => {
                out.push('&');
                out.push_str(str::from_utf8(&e)?);
                out.push(';');
            }
            Event::CData(e) => {
                out.push_str("<![CDATA[");
                out.push_str(str::from_utf8(&e)?);
                out.push_str("]]>");
            }
            Event::Eof => break,
            // Decl, PI, Comment, DocType
            _ => {}
        }
    }

    let root = root.ok_or(DevicesError::EmptyInput)?;
    trace!(
        "Normalized <{}> document ({} -> {} bytes)",
        root,
        xml.len(),
        out.len()
    );

    Ok(NormalizedXml {
        xml: out,
        root,
        version,
    })
}

fn local_name<'a>(e: &'a BytesStart<'_>) -> Result<&'a str, DevicesError> {
    Ok(str::from_utf8(e.local_name().into_inner())?)
}

/// Writes `<name attrs` without the closing bracket.
fn write_start(out: &mut String, e: &BytesStart<'_>) -> Result<(), DevicesError> {
    out.push('<');
    out.push_str(local_name(e)?);
    out.push_str(str::from_utf8(e.attributes_raw())?);
    Ok(())
}

/// Finds the version of an `xmlns` or `xmlns:*` declaration naming an
/// MTConnectDevices namespace. The default namespace wins over prefixed ones.
fn version_from_root(e: &BytesStart<'_>) -> Option<Version> {
    let mut prefixed = None;

    for attr in e.attributes().flatten() {
        let key = attr.key.as_ref();
        if key != b"xmlns" && !key.starts_with(b"xmlns:") {
            continue;
        }
        let Ok(value) = str::from_utf8(&attr.value) else {
            continue;
        };
        if !value.contains("MTConnectDevices") {
            continue;
        }
        match Version::from_namespace(value) {
            Some(v) if key == b"xmlns" => return Some(v),
            Some(v) => prefixed = prefixed.or(Some(v)),
            None => {}
        }
    }

    prefixed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_element_prefixes() {
        let xml = r#"<m:MTConnectDevices xmlns:m="urn:mtconnect.org:MTConnectDevices:1.3" xmlns:x="urn:example.com:Ext"><m:Devices><x:Spindle id="s1"/></m:Devices></m:MTConnectDevices>"#;
        let normalized = normalize(xml).unwrap();

        assert_eq!(normalized.root, "MTConnectDevices");
        assert_eq!(normalized.version, Some(Version::V1_3));
        assert_eq!(
            normalized.xml,
            r#"<MTConnectDevices xmlns:m="urn:mtconnect.org:MTConnectDevices:1.3" xmlns:x="urn:example.com:Ext"><Devices><Spindle id="s1"/></Devices></MTConnectDevices>"#
        );
    }

    #[test]
    fn test_default_namespace_wins() {
        let xml = r#"<MTConnectDevices xmlns:m="urn:mtconnect.org:MTConnectDevices:1.2" xmlns="urn:mtconnect.org:MTConnectDevices:1.7"/>"#;
        let normalized = normalize(xml).unwrap();
        assert_eq!(normalized.version, Some(Version::V1_7));
    }

    #[test]
    fn test_keeps_text_and_entities() {
        let xml = r#"<?xml version="1.0"?><!-- comment --><Root><Description>Tom &amp; Jerry</Description></Root>"#;
        let normalized = normalize(xml).unwrap();
        assert_eq!(
            normalized.xml,
            "<Root><Description>Tom &amp; Jerry</Description></Root>"
        );
        assert_eq!(normalized.version, None);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(normalize(""), Err(DevicesError::EmptyInput)));
        assert!(matches!(
            normalize("just some text"),
            Err(DevicesError::EmptyInput)
        ));
    }

    #[test]
    fn test_malformed_xml() {
        let result = normalize("<MTConnectDevices><Devices></MTConnectDevices>");
        assert!(
            matches!(result, Err(DevicesError::XmlReading(_))),
            "Expected XmlReading error, got {:?}",
            result
        );
    }
}
