//! Quarter classification logic.
//!
//! This module provides the [`Quarter`] label type and the classifier that
//! maps a sale's raw transaction timestamp to a calendar quarter, tolerating
//! missing and unparseable dates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A calendar quarter label, rendered as `"<year>-Q<1..4>"`.
///
/// Quarter boundaries follow the calendar: Q1 covers January–March, Q2
/// April–June, Q3 July–September, Q4 October–December. The derived ordering
/// is (year, quarter), which for four-digit years coincides with the lexical
/// ordering of the rendered labels.
///
/// # Example
///
/// ```
/// use commission_engine::report::Quarter;
/// use chrono::NaiveDate;
///
/// let q = Quarter::of_date(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
/// assert_eq!(q.to_string(), "2024-Q1");
/// assert_eq!("2024-Q1".parse::<Quarter>().unwrap(), q);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    year: i32,
    quarter: u8,
}

impl Quarter {
    /// Returns the quarter containing the given date.
    pub fn of_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month0() / 3 + 1) as u8,
        }
    }

    /// The calendar year of this quarter.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The quarter number within the year, 1 through 4.
    pub fn quarter(&self) -> u8 {
        self.quarter
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

impl FromStr for Quarter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidQuarterLabel {
            value: s.to_string(),
        };

        let (year, quarter) = s.split_once("-Q").ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let quarter: u8 = quarter.parse().map_err(|_| invalid())?;
        if !(1..=4).contains(&quarter) {
            return Err(invalid());
        }

        Ok(Self { year, quarter })
    }
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quarter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Classifies a raw sale date into a quarter.
///
/// Returns `None` when the value is missing, empty, or does not parse as a
/// calendar date; such a record is excluded from the quarter set and from
/// every accumulator. Accepted forms are RFC 3339 timestamps, naive
/// datetimes (`YYYY-MM-DDTHH:MM:SS`), and plain dates (`YYYY-MM-DD`).
///
/// Timestamps with an offset resolve to the calendar date in their own
/// offset; no time-zone normalization is applied.
///
/// # Example
///
/// ```
/// use commission_engine::report::quarter_of;
///
/// assert_eq!(quarter_of(Some("2024-02-10")).unwrap().to_string(), "2024-Q1");
/// assert_eq!(quarter_of(Some("not-a-date")), None);
/// assert_eq!(quarter_of(None), None);
/// ```
pub fn quarter_of(date: Option<&str>) -> Option<Quarter> {
    let raw = date?.trim();
    if raw.is_empty() {
        return None;
    }
    parse_date(raw).map(Quarter::of_date)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // Keep the date as written in the timestamp's own offset.
        return Some(dt.naive_local().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    None
}
