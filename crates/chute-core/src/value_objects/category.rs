//! Category - the fixed set of age cohorts

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Age cohort a student trains in.
///
/// The set is fixed; registration rejects anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Sub7,
    Sub9,
    Sub11,
    Sub13,
    Sub15,
}

impl Category {
    /// All categories, youngest first
    pub const ALL: [Category; 5] = [
        Category::Sub7,
        Category::Sub9,
        Category::Sub11,
        Category::Sub13,
        Category::Sub15,
    ];

    /// Wire representation ("Sub-7" .. "Sub-15")
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sub7 => "Sub-7",
            Self::Sub9 => "Sub-9",
            Self::Sub11 => "Sub-11",
            Self::Sub13 => "Sub-13",
            Self::Sub15 => "Sub-15",
        }
    }

    /// Parse a category from its wire representation
    pub fn parse(s: &str) -> Result<Self, CategoryParseError> {
        match s {
            "Sub-7" => Ok(Self::Sub7),
            "Sub-9" => Ok(Self::Sub9),
            "Sub-11" => Ok(Self::Sub11),
            "Sub-13" => Ok(Self::Sub13),
            "Sub-15" => Ok(Self::Sub15),
            _ => Err(CategoryParseError::Unknown(s.to_string())),
        }
    }
}

/// Error when parsing a category from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryParseError {
    #[error("unknown category: {0}")]
    Unknown(String),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
