//! Per-instance configuration carried by every [`YearlessDate`](crate::YearlessDate).

use crate::Error;
use crate::consts::DEFAULT_SEPARATOR;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format keys understood by [`YearlessDate::format`](crate::YearlessDate::format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    /// "1 Mar"
    #[display(fmt = "short")]
    Short,
    /// "1 March"
    #[default]
    #[display(fmt = "long")]
    Long,
    /// `{"month":3,"day":1}`
    #[display(fmt = "json")]
    Json,
    /// "3/1"
    #[display(fmt = "monthDay")]
    MonthDay,
    /// "1/3"
    #[display(fmt = "dayMonth")]
    DayMonth,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            "json" => Ok(Self::Json),
            "monthDay" => Ok(Self::MonthDay),
            "dayMonth" => Ok(Self::DayMonth),
            other => Err(Error::InvalidArgument(format!("unknown format: {other}"))),
        }
    }
}

/// Which month name to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameFormat {
    #[display(fmt = "short")]
    Short,
    #[display(fmt = "long")]
    Long,
}

impl FromStr for NameFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(Error::InvalidArgument(format!("unknown name format: {other}"))),
        }
    }
}

/// Formatting and parsing preferences of a date.
///
/// Deserializes from a partial JSON object; missing fields keep their defaults:
///
/// ```
/// # use yearless_date::{Format, Settings};
/// let settings: Settings = serde_json::from_str(r#"{"format": "short"}"#).unwrap();
/// assert_eq!(settings.format, Format::Short);
/// assert_eq!(settings.separator, "/");
/// assert!(settings.month_first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Joins month and day in the numeric formats
    pub separator: String,
    /// Format used by `Display`
    pub format: Format,
    /// Reads two bare numbers as (month, day) when true, (day, month) otherwise
    pub month_first: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            format: Format::default(),
            month_first: true,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_month_first(mut self, month_first: bool) -> Self {
        self.month_first = month_first;
        self
    }
}
