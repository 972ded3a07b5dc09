// crates/mtconnect-rs-devices/src/model/component.rs

//! Contains the generic component schema and the container that reads
//! heterogeneously named children such as `<Components>`.

use super::common::{Compositions, Description, ReferenceAttributes};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

/// One child element of a [`NamedChildren`] container.
#[derive(Debug)]
pub struct NamedChild<T> {
    /// Local name of the child element (e.g. `Axes`, `Linear`, `Device`).
    pub element_name: String,
    /// The child deserialized through the container's common schema.
    pub value: T,
}

/// A container whose children are distinguished by element name only.
///
/// The standard names every component kind by its own element (`<Axes>`,
/// `<Controller>`, `<Path>`, ...) although all of them share one schema.
/// Rather than declaring a type per element name, this container reads the
/// element as a map: each key is a child element name and each value is
/// deserialized as `T`. Attribute keys (`@...`) and text (`$text`) on the
/// container itself are ignored.
///
/// Children keep their document order.
#[derive(Debug)]
pub struct NamedChildren<T> {
    pub entries: Vec<NamedChild<T>>,
}

impl<T> Default for NamedChildren<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<'de, T> Deserialize<'de> for NamedChildren<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChildrenVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ChildrenVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = NamedChildren<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an element containing named child elements")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key.starts_with('@') || key.starts_with('$') {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                    let value = map.next_value::<T>()?;
                    entries.push(NamedChild {
                        element_name: key,
                        value,
                    });
                }
                Ok(NamedChildren { entries })
            }

            // `<Components></Components>` may surface as an empty string.
            fn visit_str<E>(self, _v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(NamedChildren::default())
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(NamedChildren::default())
            }
        }

        deserializer.deserialize_map(ChildrenVisitor(PhantomData))
    }
}

/// The schema shared by every component element and by `<Device>` / `<Agent>`.
///
/// `Device` extends `Component` in the standard; the two device-only
/// attributes stay `None` on ordinary components. `<DataItems>` and
/// `<Components>` are not part of it: each of their children is read from
/// its own [`Fragment`](super::Fragment) so that one bad child is skipped alone.
#[derive(Debug, Deserialize, Default)]
pub struct Component {
    #[serde(rename = "@id", default)]
    pub id: Option<String>, // xs:ID

    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "@nativeName", default)]
    pub native_name: Option<String>,

    #[serde(rename = "@uuid", default)]
    pub uuid: Option<String>,

    #[serde(rename = "@sampleInterval", default)]
    pub sample_interval: Option<String>, // xs:float

    /// Deprecated in favour of `sampleInterval`.
    #[serde(rename = "@sampleRate", default)]
    pub sample_rate: Option<String>, // xs:float

    /// Device only.
    #[serde(rename = "@iso841Class", default)]
    pub iso841_class: Option<String>,

    /// Device only.
    #[serde(rename = "@mtconnectVersion", default)]
    pub mtconnect_version: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<Description>,

    #[serde(rename = "Compositions", default)]
    pub compositions: Option<Compositions>,

    /// `<ComponentRef>` and `<DataItemRef>` children.
    #[serde(rename = "References", default)]
    pub references: Option<NamedChildren<ReferenceAttributes>>,
}
