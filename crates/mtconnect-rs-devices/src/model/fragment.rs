// crates/mtconnect-rs-devices/src/model/fragment.rs

//! Splits a document into per-element slices.
//!
//! Devices, components and data items are each deserialized from their own
//! slice of the document, so a child that does not fit the serde model only
//! fails itself. Its siblings and its parent are unaffected.

use crate::error::DevicesError;
use alloc::string::String;
use alloc::vec::Vec;
use core::str;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::Deserialize;

/// One element of a (namespace normalized) document and its full XML text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Local name of the element, e.g. "Linear".
    pub element_name: String,
    /// Raw value of its `id` attribute, read before deserialization so that
    /// a failed element can still be reported by id.
    pub id: Option<String>,
    /// The element from its start tag through its end tag.
    pub xml: &'a str,
}

impl<'a> Fragment<'a> {
    /// Wraps a whole document whose root element is `element_name`.
    pub fn root(element_name: &str, xml: &'a str) -> Self {
        Self {
            element_name: String::from(element_name),
            id: None,
            xml,
        }
    }

    /// Deserializes this element into a model struct.
    pub fn deserialize<T>(&self) -> Result<T, DevicesError>
    where
        T: Deserialize<'a>,
    {
        Ok(quick_xml::de::from_str(self.xml)?)
    }

    /// Returns the direct child elements in document order.
    pub fn children(&self) -> Result<Vec<Fragment<'a>>, DevicesError> {
        let xml = self.xml;
        let mut reader = Reader::from_str(xml);
        let mut children = Vec::new();
        let mut depth = 0usize;
        let mut open: Option<(String, Option<String>, usize)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    depth += 1;
                    if depth == 2 {
                        let end_of_tag = reader.buffer_position() as usize;
                        open = Some((element_name(&e)?, id_attribute(&e), tag_start(xml, end_of_tag)));
                    }
                }
                Event::End(_) => {
                    if depth == 2 {
                        if let Some((element_name, id, start)) = open.take() {
                            let end = reader.buffer_position() as usize;
                            children.push(Fragment {
                                element_name,
                                id,
                                xml: xml.get(start..end).unwrap_or_default(),
                            });
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Empty(e) => {
                    if depth == 1 {
                        let end = reader.buffer_position() as usize;
                        children.push(Fragment {
                            element_name: element_name(&e)?,
                            id: id_attribute(&e),
                            xml: xml.get(tag_start(xml, end)..end).unwrap_or_default(),
                        });
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(children)
    }

    /// Returns the children of every direct child named `container`, e.g.
    /// the elements inside `<Components>`.
    pub fn children_of(&self, container: &str) -> Result<Vec<Fragment<'a>>, DevicesError> {
        let mut grandchildren = Vec::new();
        for child in self.children()? {
            if child.element_name == container {
                grandchildren.extend(child.children()?);
            }
        }
        Ok(grandchildren)
    }
}

fn element_name(e: &BytesStart<'_>) -> Result<String, DevicesError> {
    Ok(String::from(str::from_utf8(e.local_name().into_inner())?))
}

fn id_attribute(e: &BytesStart<'_>) -> Option<String> {
    let attr = e.try_get_attribute("id").ok().flatten()?;
    str::from_utf8(&attr.value).ok().map(String::from)
}

/// Offset of the `<` that opens the tag ending at `end_of_tag`.
/// `<` cannot appear inside a tag of well-formed XML.
fn tag_start(xml: &str, end_of_tag: usize) -> usize {
    xml.get(..end_of_tag)
        .and_then(|head| head.rfind('<'))
        .unwrap_or(0)
}
