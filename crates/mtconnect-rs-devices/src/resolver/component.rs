// crates/mtconnect-rs-devices/src/resolver/component.rs

use super::Diagnostics;
use super::data_item::resolve_data_items;
use super::utils::{non_empty, parse_float, required};
use crate::error::DevicesError;
use crate::model::{self, Fragment, NamedChildren};
use crate::types;
use alloc::string::String;
use alloc::vec::Vec;

/// Resolves the children of a `<Components>` element.
///
/// A component that fails, whether in deserialization or validation, is
/// skipped together with its subtree.
pub(super) fn resolve_components(
    fragments: Vec<Fragment<'_>>,
    diagnostics: &mut Diagnostics,
) -> Vec<types::Component> {
    let mut resolved = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let result = fragment
            .deserialize()
            .and_then(|model| build_component(&fragment, model, diagnostics));
        match result {
            Ok(component) => resolved.push(component),
            Err(e) => diagnostics.skip(&fragment.element_name, fragment.id.as_deref(), &e),
        }
    }
    resolved
}

/// Builds a component from its deserialized attributes and, recursively,
/// the data items and sub-components found in `fragment`.
///
/// The component's own attributes are validated before any child is
/// visited, so a rejected component leaves no diagnostics for its subtree.
pub(super) fn build_component(
    fragment: &Fragment<'_>,
    model: model::Component,
    diagnostics: &mut Diagnostics,
) -> Result<types::Component, DevicesError> {
    let element_name = fragment.element_name.as_str();
    let id = required(model.id, element_name, "id")?;
    let sample_interval =
        parse_float(model.sample_interval.as_deref(), element_name, "sampleInterval")?;
    let sample_rate = parse_float(model.sample_rate.as_deref(), element_name, "sampleRate")?;

    let data_item_fragments = fragment.children_of("DataItems")?;
    let component_fragments = fragment.children_of("Components")?;

    let description = model.description.map(resolve_description);
    let data_items = resolve_data_items(data_item_fragments, diagnostics);
    let compositions = resolve_compositions(model.compositions, diagnostics);
    let references = resolve_references(model.references, diagnostics);
    let components = resolve_components(component_fragments, diagnostics);

    Ok(types::Component {
        component_type: String::from(element_name),
        id,
        name: non_empty(model.name),
        native_name: non_empty(model.native_name),
        uuid: non_empty(model.uuid),
        sample_interval,
        sample_rate,
        description,
        data_items,
        compositions,
        references,
        components,
        xpath: String::new(),
        type_path: String::new(),
    })
}

fn resolve_description(model: model::Description) -> types::Description {
    types::Description {
        manufacturer: non_empty(model.manufacturer),
        model: non_empty(model.model),
        serial_number: non_empty(model.serial_number),
        station: non_empty(model.station),
        value: non_empty(model.text),
    }
}

fn resolve_compositions(
    model: Option<model::common::Compositions>,
    diagnostics: &mut Diagnostics,
) -> Vec<types::Composition> {
    let Some(compositions) = model else {
        return Vec::new();
    };

    let mut resolved = Vec::new();
    for composition in compositions.composition {
        let id = composition.id.clone();
        let result = required(composition.id, "Composition", "id").and_then(|id| {
            Ok(types::Composition {
                id,
                composition_type: required(composition.composition_type, "Composition", "type")?,
                name: non_empty(composition.name),
                uuid: non_empty(composition.uuid),
            })
        });
        match result {
            Ok(c) => resolved.push(c),
            Err(e) => diagnostics.skip("Composition", id.as_deref(), &e),
        }
    }
    resolved
}

fn resolve_references(
    model: Option<NamedChildren<model::common::ReferenceAttributes>>,
    diagnostics: &mut Diagnostics,
) -> Vec<types::Reference> {
    let Some(references) = model else {
        return Vec::new();
    };

    let mut resolved = Vec::new();
    for child in references.entries {
        let kind = match child.element_name.as_str() {
            "ComponentRef" => types::ReferenceKind::Component,
            "DataItemRef" => types::ReferenceKind::DataItem,
            _ => {
                let e = DevicesError::UnexpectedElement {
                    container: "References",
                    found: child.element_name.clone(),
                };
                diagnostics.skip(&child.element_name, None, &e);
                continue;
            }
        };
        match required(child.value.id_ref, &child.element_name, "idRef") {
            Ok(id_ref) => resolved.push(types::Reference {
                kind,
                id_ref,
                name: non_empty(child.value.name),
            }),
            Err(e) => diagnostics.skip(&child.element_name, None, &e),
        }
    }
    resolved
}
