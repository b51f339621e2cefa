//! Reference month - the year-month key used for billing deduplication

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A calendar month at year-month granularity ("2024-03").
///
/// This is the natural key of a charge together with the student ID: billing
/// never issues two charges for the same student and reference month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    /// Create a reference month, rejecting out-of-range month numbers
    pub fn new(year: i32, month: u32) -> Result<Self, ReferenceMonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(ReferenceMonthParseError::MonthOutOfRange(month));
        }
        if !(1970..=9999).contains(&year) {
            return Err(ReferenceMonthParseError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Parse from the wire format `YYYY-MM`
    pub fn parse(s: &str) -> Result<Self, ReferenceMonthParseError> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| ReferenceMonthParseError::InvalidFormat(s.to_string()))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(ReferenceMonthParseError::InvalidFormat(s.to_string()));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| ReferenceMonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ReferenceMonthParseError::InvalidFormat(s.to_string()))?;
        Self::new(year, month)
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u32 {
        self.month
    }
}

/// Error when parsing a reference month
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceMonthParseError {
    #[error("invalid reference month format (expected YYYY-MM): {0}")]
    InvalidFormat(String),
    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),
    #[error("year out of range: {0}")]
    YearOutOfRange(i32),
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for ReferenceMonth {
    type Err = ReferenceMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ReferenceMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReferenceMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
