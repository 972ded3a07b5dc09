//! Static dictionary of standard DataItem types.
//!
//! Each entry records the defaults a DataItem type carries in the MTConnect
//! standard: its usual category, default units, the version that introduced
//! it, the version that deprecated it (if any) and its declared sub-types.
//! The table is informational: nothing here gates or validates documents.

use crate::types::Category;
use crate::version::Version;

/// Definition of one standard DataItem type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataItemDefinition {
    /// The `type` attribute value, e.g. `"TEMPERATURE"`.
    pub type_id: &'static str,
    /// The category the type is normally declared with.
    pub category: Category,
    /// Units reported when the document does not override them.
    pub default_units: Option<&'static str>,
    /// First version of the standard containing the type.
    pub minimum_version: Version,
    /// Version in which the type was deprecated.
    pub maximum_version: Option<Version>,
    /// Standard values of the `subType` attribute.
    pub sub_types: &'static [&'static str],
}

impl DataItemDefinition {
    /// Returns true if `sub_type` is one of the declared sub-types.
    pub fn has_sub_type(&self, sub_type: &str) -> bool {
        self.sub_types.contains(&sub_type)
    }

    /// Returns true if the type is part of the given version of the standard.
    pub fn is_defined_in(&self, version: Version) -> bool {
        version >= self.minimum_version
            && self.maximum_version.is_none_or(|max| version < max)
    }
}

const fn sample(
    type_id: &'static str,
    units: &'static str,
    minimum_version: Version,
    sub_types: &'static [&'static str],
) -> DataItemDefinition {
    DataItemDefinition {
        type_id,
        category: Category::Sample,
        default_units: Some(units),
        minimum_version,
        maximum_version: None,
        sub_types,
    }
}

const fn event(
    type_id: &'static str,
    minimum_version: Version,
    sub_types: &'static [&'static str],
) -> DataItemDefinition {
    DataItemDefinition {
        type_id,
        category: Category::Event,
        default_units: None,
        minimum_version,
        maximum_version: None,
        sub_types,
    }
}

const fn condition(type_id: &'static str, minimum_version: Version) -> DataItemDefinition {
    DataItemDefinition {
        type_id,
        category: Category::Condition,
        default_units: None,
        minimum_version,
        maximum_version: None,
        sub_types: &[],
    }
}

const fn deprecated(definition: DataItemDefinition, version: Version) -> DataItemDefinition {
    DataItemDefinition {
        maximum_version: Some(version),
        ..definition
    }
}

const ACTUAL_COMMANDED: &[&str] = &["ACTUAL", "COMMANDED", "PROGRAMMED"];
const FEEDRATE: &[&str] = &["ACTUAL", "COMMANDED", "JOG", "PROGRAMMED", "RAPID", "OVERRIDE"];
const ELECTRICAL: &[&str] = &["ALTERNATING", "DIRECT", "ACTUAL", "TARGET"];

/// All known definitions, sorted by `type_id`.
static DEFINITIONS: &[DataItemDefinition] = &[
    sample("ACCELERATION", "MILLIMETER/SECOND^2", Version::V1_2, ACTUAL_COMMANDED),
    event("ACTIVE_AXES", Version::V1_1, &[]),
    deprecated(sample("AMPERAGE", "AMPERE", Version::V1_2, ELECTRICAL), Version::V1_6),
    sample("ANGLE", "DEGREE", Version::V1_1, &["ACTUAL", "COMMANDED"]),
    sample("ANGULAR_ACCELERATION", "DEGREE/SECOND^2", Version::V1_2, ACTUAL_COMMANDED),
    sample("ANGULAR_VELOCITY", "DEGREE/SECOND", Version::V1_2, &[]),
    event("ASSET_CHANGED", Version::V1_2, &[]),
    event("ASSET_REMOVED", Version::V1_3, &[]),
    event("AVAILABILITY", Version::V1_1, &[]),
    sample("AXIS_FEEDRATE", "MILLIMETER/SECOND", Version::V1_1, FEEDRATE),
    event("BLOCK", Version::V1_1, &[]),
    condition("COMMUNICATIONS", Version::V1_1),
    event("CONTROLLER_MODE", Version::V1_1, &[]),
    condition("DATA_RANGE", Version::V1_1),
    event("DIRECTION", Version::V1_2, &["ROTARY", "LINEAR"]),
    sample("DISPLACEMENT", "MILLIMETER", Version::V1_2, &[]),
    event("DOOR_STATE", Version::V1_1, &[]),
    sample("ELECTRICAL_ENERGY", "WATT_SECOND", Version::V1_2, &[]),
    event("EMERGENCY_STOP", Version::V1_1, &[]),
    event("EXECUTION", Version::V1_1, &[]),
    sample("FREQUENCY", "HERTZ", Version::V1_2, &[]),
    event("FUNCTIONAL_MODE", Version::V1_3, &[]),
    condition("HARDWARE", Version::V1_1),
    deprecated(event("LINE", Version::V1_1, &[]), Version::V1_4),
    sample("LOAD", "PERCENT", Version::V1_1, &[]),
    condition("LOGIC_PROGRAM", Version::V1_1),
    event("MESSAGE", Version::V1_1, &[]),
    condition("MOTION_PROGRAM", Version::V1_1),
    event("PART_COUNT", Version::V1_1, &["ALL", "GOOD", "BAD", "TARGET", "REMAINING"]),
    sample("PATH_FEEDRATE", "MILLIMETER/SECOND", Version::V1_1, FEEDRATE),
    sample("PATH_POSITION", "MILLIMETER_3D", Version::V1_1, &["ACTUAL", "COMMANDED", "TARGET", "PROBE"]),
    sample("POSITION", "MILLIMETER", Version::V1_1, &["ACTUAL", "COMMANDED", "PROGRAMMED", "TARGET"]),
    sample("PRESSURE", "PASCAL", Version::V1_1, &[]),
    event("PROGRAM", Version::V1_1, &[]),
    event("ROTARY_MODE", Version::V1_2, &[]),
    sample("ROTARY_VELOCITY", "REVOLUTION/MINUTE", Version::V1_2, ACTUAL_COMMANDED),
    event("SERIAL_NUMBER", Version::V1_3, &[]),
    deprecated(sample("SPINDLE_SPEED", "REVOLUTION/MINUTE", Version::V1_1, &["ACTUAL", "COMMANDED", "OVERRIDE"]), Version::V1_2),
    condition("SYSTEM", Version::V1_1),
    sample("TEMPERATURE", "CELSIUS", Version::V1_1, &[]),
    event("TOOL_ASSET_ID", Version::V1_2, &[]),
    event("TOOL_NUMBER", Version::V1_2, &[]),
    sample("TORQUE", "NEWTON_METER", Version::V1_2, &[]),
    event("USER", Version::V1_4, &["OPERATOR", "MAINTENANCE", "SET_UP"]),
    sample("VELOCITY", "MILLIMETER/SECOND", Version::V1_2, &[]),
    deprecated(sample("VOLTAGE", "VOLT", Version::V1_1, ELECTRICAL), Version::V1_6),
    sample("WATTAGE", "WATT", Version::V1_2, &[]),
];

/// Looks up the definition of a DataItem `type` attribute value.
pub fn lookup(type_id: &str) -> Option<&'static DataItemDefinition> {
    DEFINITIONS
        .binary_search_by(|d| d.type_id.cmp(type_id))
        .ok()
        .map(|i| &DEFINITIONS[i])
}

/// Returns every known definition, sorted by type.
pub fn definitions() -> &'static [DataItemDefinition] {
    DEFINITIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        for pair in DEFINITIONS.windows(2) {
            assert!(
                pair[0].type_id < pair[1].type_id,
                "{} must sort before {}",
                pair[0].type_id,
                pair[1].type_id
            );
        }
    }

    #[test]
    fn test_lookup_sample() {
        let temperature = lookup("TEMPERATURE").expect("TEMPERATURE is defined");
        assert_eq!(temperature.category, Category::Sample);
        assert_eq!(temperature.default_units, Some("CELSIUS"));
        assert_eq!(temperature.minimum_version, Version::V1_1);
    }

    #[test]
    fn test_lookup_event_sub_types() {
        let part_count = lookup("PART_COUNT").unwrap();
        assert_eq!(part_count.category, Category::Event);
        assert!(part_count.default_units.is_none());
        assert!(part_count.has_sub_type("GOOD"));
        assert!(!part_count.has_sub_type("ACTUAL"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("x:CUSTOM_TYPE").is_none());
        assert!(lookup("temperature").is_none());
    }

    #[test]
    fn test_deprecated_range() {
        let spindle_speed = lookup("SPINDLE_SPEED").unwrap();
        assert!(spindle_speed.is_defined_in(Version::V1_1));
        assert!(!spindle_speed.is_defined_in(Version::V1_2));

        let rotary_velocity = lookup("ROTARY_VELOCITY").unwrap();
        assert!(!rotary_velocity.is_defined_in(Version::V1_1));
        assert!(rotary_velocity.is_defined_in(Version::V2_0));
    }
}
