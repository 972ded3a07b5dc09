use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::Serialize;

// --- DataItem Classification (MTConnect Part 2, Section 7) ---

/// The category of a DataItem.
///
/// Every DataItem reports exactly one kind of value: a continuously
/// sampled number, a discrete state, or a health/fault condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// A continuously changing numeric value (e.g. TEMPERATURE).
    Sample,
    /// A discrete state or message (e.g. EXECUTION).
    Event,
    /// The health of a component (NORMAL, WARNING, FAULT).
    Condition,
}

impl Category {
    /// Returns the attribute value used in MTConnect documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sample => "SAMPLE",
            Category::Event => "EVENT",
            Category::Condition => "CONDITION",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for an unrecognised `category` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown DataItem category: '{}'", self.0)
    }
}

impl core::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "SAMPLE" => Ok(Category::Sample),
            "EVENT" => Ok(Category::Event),
            "CONDITION" => Ok(Category::Condition),
            other => Err(ParseCategoryError(other.into())),
        }
    }
}

/// The shape of the values reported for a DataItem.
///
/// Absent from the document means `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Representation {
    /// A single value per observation.
    #[default]
    Value,
    /// A series of samples taken at a fixed rate.
    TimeSeries,
    /// Each observation is reported even if equal to the previous one.
    /// Deprecated in 1.5 in favour of the `discrete` attribute.
    Discrete,
    /// A set of key-value pairs (1.5+).
    DataSet,
    /// A two dimensional set of key-value pairs (1.6+).
    Table,
}

impl Representation {
    /// Returns the attribute value used in MTConnect documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::Value => "VALUE",
            Representation::TimeSeries => "TIME_SERIES",
            Representation::Discrete => "DISCRETE",
            Representation::DataSet => "DATA_SET",
            Representation::Table => "TABLE",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for an unrecognised `representation` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRepresentationError(pub String);

impl fmt::Display for ParseRepresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown DataItem representation: '{}'", self.0)
    }
}

impl core::error::Error for ParseRepresentationError {}

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "VALUE" => Ok(Representation::Value),
            "TIME_SERIES" => Ok(Representation::TimeSeries),
            "DISCRETE" => Ok(Representation::Discrete),
            "DATA_SET" => Ok(Representation::DataSet),
            "TABLE" => Ok(Representation::Table),
            other => Err(ParseRepresentationError(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_category_from_str() {
        assert_eq!("SAMPLE".parse::<Category>(), Ok(Category::Sample));
        assert_eq!("EVENT".parse::<Category>(), Ok(Category::Event));
        assert_eq!(" CONDITION ".parse::<Category>(), Ok(Category::Condition));
        assert_eq!(
            "sample".parse::<Category>(),
            Err(ParseCategoryError("sample".to_string()))
        );
    }

    #[test]
    fn test_category_display_matches_attribute() {
        for category in [Category::Sample, Category::Event, Category::Condition] {
            let text = category.to_string();
            assert_eq!(text.parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_representation_default_is_value() {
        assert_eq!(Representation::default(), Representation::Value);
    }

    #[test]
    fn test_representation_from_str() {
        assert_eq!(
            "TIME_SERIES".parse::<Representation>(),
            Ok(Representation::TimeSeries)
        );
        assert_eq!("TABLE".parse::<Representation>(), Ok(Representation::Table));
        assert_eq!(
            "DATA_SET".parse::<Representation>(),
            Ok(Representation::DataSet)
        );
        assert!("MATRIX".parse::<Representation>().is_err());
    }
}
