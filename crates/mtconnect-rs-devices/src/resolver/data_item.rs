// crates/mtconnect-rs-devices/src/resolver/data_item.rs

use super::Diagnostics;
use super::utils::{non_empty, parse_bool, parse_float, parse_number, required};
use crate::error::DevicesError;
use crate::model::{self, Fragment};
use crate::types;
use alloc::string::String;
use alloc::vec::Vec;
use log::debug;
use mtconnect_rs::{Category, Representation};

const ELEMENT: &str = "DataItem";

/// Resolves the children of a `<DataItems>` element.
///
/// Each `<DataItem>` is deserialized on its own; one that fails is reported
/// and skipped. Other elements (vendor extensions) are ignored.
pub(super) fn resolve_data_items(
    fragments: Vec<Fragment<'_>>,
    diagnostics: &mut Diagnostics,
) -> Vec<types::DataItem> {
    let mut resolved = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if fragment.element_name != ELEMENT {
            debug!("Ignoring <{}> inside <DataItems>", fragment.element_name);
            continue;
        }
        match fragment.deserialize().and_then(resolve_data_item) {
            Ok(data_item) => resolved.push(data_item),
            Err(e) => diagnostics.skip(ELEMENT, fragment.id.as_deref(), &e),
        }
    }
    resolved
}

/// Resolves a single `<DataItem>`.
///
/// `id`, `type` and `category` are required. Paths are filled in later.
pub(super) fn resolve_data_item(
    model: model::DataItem,
) -> Result<types::DataItem, DevicesError> {
    let id = required(model.id, ELEMENT, "id")?;
    let data_item_type = required(model.data_item_type, ELEMENT, "type")?;
    let category = required(model.category, ELEMENT, "category")?.parse::<Category>()?;

    let representation = match non_empty(model.representation) {
        Some(value) => value.parse::<Representation>()?,
        None => Representation::default(),
    };

    let significant_digits =
        parse_number::<u32>(model.significant_digits.as_deref(), ELEMENT, "significantDigits")?;
    let sample_rate = parse_float(model.sample_rate.as_deref(), ELEMENT, "sampleRate")?;
    let discrete = parse_bool(model.discrete.as_deref(), ELEMENT, "discrete")?;

    let constraints = model.constraints.map(resolve_constraints).transpose()?;
    let filters = match model.filters {
        Some(filters) => filters
            .filter
            .into_iter()
            .map(resolve_filter)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(types::DataItem {
        category,
        id,
        data_item_type,
        sub_type: non_empty(model.sub_type),
        name: non_empty(model.name),
        units: non_empty(model.units),
        native_units: non_empty(model.native_units),
        native_scale: non_empty(model.native_scale),
        representation,
        significant_digits,
        statistic: non_empty(model.statistic),
        coordinate_system: non_empty(model.coordinate_system),
        composition_id: non_empty(model.composition_id),
        sample_rate,
        discrete,
        source: model.source.map(|s| types::Source {
            component_id: non_empty(s.component_id),
            data_item_id: non_empty(s.data_item_id),
            composition_id: non_empty(s.composition_id),
            value: non_empty(s.value),
        }),
        constraints,
        filters,
        xpath: String::new(),
        type_path: String::new(),
    })
}

fn resolve_constraints(
    model: model::data_item::Constraints,
) -> Result<types::Constraints, DevicesError> {
    Ok(types::Constraints {
        values: model
            .value
            .into_iter()
            .filter_map(|v| non_empty(Some(v)))
            .collect(),
        minimum: parse_float(model.minimum.as_deref(), "Constraints", "Minimum")?,
        maximum: parse_float(model.maximum.as_deref(), "Constraints", "Maximum")?,
        nominal: parse_float(model.nominal.as_deref(), "Constraints", "Nominal")?,
        filter: model.filter.map(resolve_filter).transpose()?,
    })
}

fn resolve_filter(model: model::data_item::Filter) -> Result<types::Filter, DevicesError> {
    let filter_type = required(model.filter_type, "Filter", "type")?;
    let value = parse_float(model.value.as_deref(), "Filter", "value")?.ok_or(
        DevicesError::MissingAttribute {
            element: String::from("Filter"),
            attribute: "value",
        },
    )?;
    Ok(types::Filter { filter_type, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn item(id: &str, category: &str, data_item_type: &str) -> model::DataItem {
        model::DataItem {
            id: Some(id.to_string()),
            category: Some(category.to_string()),
            data_item_type: Some(data_item_type.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_data_item_defaults() {
        let resolved = resolve_data_item(item("avail", "EVENT", "AVAILABILITY")).unwrap();
        assert_eq!(resolved.id, "avail");
        assert_eq!(resolved.category, Category::Event);
        assert_eq!(resolved.data_item_type, "AVAILABILITY");
        assert_eq!(resolved.representation, Representation::Value);
        assert!(!resolved.discrete);
        assert!(resolved.filters.is_empty());
        assert!(resolved.xpath.is_empty());
    }

    #[test]
    fn test_resolve_data_item_full() {
        let mut model = item("xpos", "SAMPLE", "POSITION");
        model.sub_type = Some("ACTUAL".to_string());
        model.units = Some("MILLIMETER".to_string());
        model.representation = Some("TIME_SERIES".to_string());
        model.significant_digits = Some("4".to_string());
        model.sample_rate = Some("100".to_string());
        model.constraints = Some(model::data_item::Constraints {
            minimum: Some("-500".to_string()),
            maximum: Some("500".to_string()),
            ..Default::default()
        });
        model.filters = Some(model::data_item::Filters {
            filter: vec![model::data_item::Filter {
                filter_type: Some("MINIMUM_DELTA".to_string()),
                value: Some("0.01".to_string()),
            }],
        });

        let resolved = resolve_data_item(model).unwrap();
        assert_eq!(resolved.sub_type.as_deref(), Some("ACTUAL"));
        assert_eq!(resolved.representation, Representation::TimeSeries);
        assert_eq!(resolved.significant_digits, Some(4));
        assert_eq!(resolved.sample_rate, Some(100.0));
        let constraints = resolved.constraints.unwrap();
        assert_eq!(constraints.minimum, Some(-500.0));
        assert_eq!(constraints.maximum, Some(500.0));
        assert_eq!(resolved.filters.len(), 1);
        assert_eq!(resolved.filters[0].filter_type, "MINIMUM_DELTA");
        assert_eq!(resolved.filters[0].value, 0.01);
    }

    #[test]
    fn test_resolve_data_item_errors() {
        let mut missing_type = item("a", "EVENT", "");
        missing_type.data_item_type = None;
        assert!(matches!(
            resolve_data_item(missing_type),
            Err(DevicesError::MissingAttribute { attribute: "type", .. })
        ));

        assert!(matches!(
            resolve_data_item(item("b", "SAMPLES", "POSITION")),
            Err(DevicesError::InvalidAttributeFormat { attribute: "category", .. })
        ));

        let mut bad_digits = item("c", "SAMPLE", "POSITION");
        bad_digits.significant_digits = Some("four".to_string());
        assert!(matches!(
            resolve_data_item(bad_digits),
            Err(DevicesError::InvalidAttributeFormat {
                attribute: "significantDigits",
                ..
            })
        ));

        let mut nan_bound = item("d", "SAMPLE", "POSITION");
        nan_bound.constraints = Some(model::data_item::Constraints {
            maximum: Some("NaN".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            resolve_data_item(nan_bound),
            Err(DevicesError::InvalidAttributeFormat { attribute: "Maximum", .. })
        ));
    }

    #[test]
    fn test_resolve_data_items_skips_invalid() {
        let xml = r#"<DataItems>
  <DataItem id="avail" category="EVENT" type="AVAILABILITY"/>
  <DataItem id="temp" type="TEMPERATURE"/>
  <Extension/>
  <DataItem id="dup" category="SAMPLE" type="LOAD"><Source/><Source/></DataItem>
  <DataItem id="estop" category="EVENT" type="EMERGENCY_STOP"/>
</DataItems>"#;
        let fragments = Fragment::root("DataItems", xml).children().unwrap();

        let mut diagnostics = Diagnostics::default();
        let resolved = resolve_data_items(fragments, &mut diagnostics);

        let ids: Vec<&str> = resolved.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["avail", "estop"]);

        let diagnostics = diagnostics.into_inner();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].element, "DataItem");
        assert_eq!(diagnostics[0].id.as_deref(), Some("temp"));
        assert_eq!(
            diagnostics[0].message,
            "Missing required attribute category on <DataItem>"
        );
        assert_eq!(diagnostics[1].id.as_deref(), Some("dup"));
        assert!(diagnostics[1].message.starts_with("XML parsing error"));
    }
}
