// crates/mtconnect-rs-devices/src/model/data_item.rs

//! Contains model structs related to `<DataItem>`.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Represents a `<DataItem>` element.
#[derive(Debug, Deserialize, Default)]
pub struct DataItem {
    #[serde(rename = "@category", default)]
    pub category: Option<String>, // SAMPLE | EVENT | CONDITION

    #[serde(rename = "@id", default)]
    pub id: Option<String>,

    #[serde(rename = "@type", default)]
    pub data_item_type: Option<String>,

    #[serde(rename = "@subType", default)]
    pub sub_type: Option<String>,

    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "@units", default)]
    pub units: Option<String>,

    #[serde(rename = "@nativeUnits", default)]
    pub native_units: Option<String>,

    #[serde(rename = "@nativeScale", default)]
    pub native_scale: Option<String>,

    #[serde(rename = "@representation", default)]
    pub representation: Option<String>,

    #[serde(rename = "@significantDigits", default)]
    pub significant_digits: Option<String>, // xs:integer

    #[serde(rename = "@statistic", default)]
    pub statistic: Option<String>,

    #[serde(rename = "@coordinateSystem", default)]
    pub coordinate_system: Option<String>,

    #[serde(rename = "@compositionId", default)]
    pub composition_id: Option<String>,

    #[serde(rename = "@sampleRate", default)]
    pub sample_rate: Option<String>, // xs:float

    #[serde(rename = "@discrete", default)]
    pub discrete: Option<String>, // xs:boolean

    #[serde(rename = "Source", default)]
    pub source: Option<Source>,

    #[serde(rename = "Constraints", default)]
    pub constraints: Option<Constraints>,

    #[serde(rename = "Filters", default)]
    pub filters: Option<Filters>,
}

/// Represents `<Source componentId="..." dataItemId="...">text</Source>`.
#[derive(Debug, Deserialize, Default)]
pub struct Source {
    #[serde(rename = "@componentId", default)]
    pub component_id: Option<String>,
    #[serde(rename = "@dataItemId", default)]
    pub data_item_id: Option<String>,
    #[serde(rename = "@compositionId", default)]
    pub composition_id: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

/// Represents `<Constraints>`.
#[derive(Debug, Deserialize, Default)]
pub struct Constraints {
    #[serde(rename = "Value", default)]
    pub value: Vec<String>,
    #[serde(rename = "Minimum", default)]
    pub minimum: Option<String>,
    #[serde(rename = "Maximum", default)]
    pub maximum: Option<String>,
    #[serde(rename = "Nominal", default)]
    pub nominal: Option<String>,
    /// Deprecated location of a single filter (pre 1.4).
    #[serde(rename = "Filter", default)]
    pub filter: Option<Filter>,
}

/// Represents `<Filters>`.
#[derive(Debug, Deserialize, Default)]
pub struct Filters {
    #[serde(rename = "Filter", default)]
    pub filter: Vec<Filter>,
}

/// Represents `<Filter type="MINIMUM_DELTA">0.5</Filter>`.
#[derive(Debug, Deserialize, Default)]
pub struct Filter {
    #[serde(rename = "@type", default)]
    pub filter_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_data_item() {
        let xml = r#"
<DataItem category="SAMPLE" id="xpos" type="POSITION" subType="ACTUAL" units="MILLIMETER"
          nativeUnits="INCH" nativeScale="10" significantDigits="4" representation="TIME_SERIES"
          sampleRate="100" coordinateSystem="MACHINE">
  <Source componentId="x" dataItemId="xraw">X_POS</Source>
  <Constraints>
    <Minimum>-500</Minimum>
    <Maximum>500</Maximum>
  </Constraints>
  <Filters>
    <Filter type="MINIMUM_DELTA">0.01</Filter>
  </Filters>
</DataItem>"#;
        let item: DataItem = quick_xml::de::from_str(xml).unwrap();

        assert_eq!(item.category.as_deref(), Some("SAMPLE"));
        assert_eq!(item.data_item_type.as_deref(), Some("POSITION"));
        assert_eq!(item.sub_type.as_deref(), Some("ACTUAL"));
        assert_eq!(item.native_scale.as_deref(), Some("10"));
        assert_eq!(item.significant_digits.as_deref(), Some("4"));

        let source = item.source.unwrap();
        assert_eq!(source.component_id.as_deref(), Some("x"));
        assert_eq!(source.value.as_deref(), Some("X_POS"));

        let constraints = item.constraints.unwrap();
        assert_eq!(constraints.minimum.as_deref(), Some("-500"));
        assert!(constraints.value.is_empty());

        let filters = item.filters.unwrap();
        assert_eq!(filters.filter[0].filter_type.as_deref(), Some("MINIMUM_DELTA"));
    }

    #[test]
    fn test_deserialize_constraint_values() {
        let xml = r#"
<DataItem category="EVENT" id="mode" type="CONTROLLER_MODE">
  <Constraints>
    <Value>AUTOMATIC</Value>
    <Value>MANUAL</Value>
  </Constraints>
</DataItem>"#;
        let item: DataItem = quick_xml::de::from_str(xml).unwrap();
        let constraints = item.constraints.unwrap();
        assert_eq!(constraints.value, ["AUTOMATIC", "MANUAL"]);
    }
}
