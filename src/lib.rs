mod consts;
mod error;
pub mod picker;
mod prelude;
mod settings;
mod types;

pub use consts::*;
pub use error::{Error, ErrorKind};
pub use settings::{Format, NameFormat, Settings};
pub use types::{Day, Month, days_in_month, month_info, month_name, months};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// One side of a numeric pair: an integer, or a string holding one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Int(i64),
    Text(String),
}

impl From<i32> for Component {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Component {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for Component {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl Component {
    /// Reads the component as an integer; text must be a whole decimal
    /// integer once surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` for text that isn't an integer.
    pub fn to_int(&self) -> Result<i64, Error> {
        match self {
            Self::Int(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::InvalidArgument(format!("not an integer: {text:?}"))),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Anything a yearless date can be built from.
#[derive(Debug, Clone)]
pub enum DateInput {
    /// Already a date, used as is
    Date(YearlessDate),
    /// Free-form text such as "01 March", "Mar/1" or "3-1"
    Text(String),
    /// Two numbers whose order is resolved by [`Settings::month_first`]
    Pair(Component, Component),
}

impl From<YearlessDate> for DateInput {
    fn from(date: YearlessDate) -> Self {
        Self::Date(date)
    }
}

impl From<&YearlessDate> for DateInput {
    fn from(date: &YearlessDate) -> Self {
        Self::Date(date.clone())
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<A: Into<Component>, B: Into<Component>> From<(A, B)> for DateInput {
    fn from((a, b): (A, B)) -> Self {
        Self::Pair(a.into(), b.into())
    }
}

impl<T: Into<Component>> From<[T; 2]> for DateInput {
    fn from([a, b]: [T; 2]) -> Self {
        Self::Pair(a.into(), b.into())
    }
}

/// A (month, day) pair without a year.
///
/// February always has 28 days, so the dates form a cycle of
/// [`DAYS_IN_CYCLE`] days. Equality, ordering and hashing only look at the
/// month and day; the [`Settings`] a date carries only affect how it is
/// parsed and displayed.
#[derive(Debug, Clone)]
pub struct YearlessDate {
    month: Month,
    day: Day,
    settings: Settings,
}

impl YearlessDate {
    /// Creates a date with default settings.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if `day` is past the end of `month`.
    pub fn new(month: Month, day: Day) -> Result<Self, Error> {
        let day = Day::new(day.get(), month)?;
        Ok(Self {
            month,
            day,
            settings: Settings::default(),
        })
    }

    /// Replaces the settings carried by this date
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Validates a raw month and day.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` unless `1 <= month <= 12` and
    /// `1 <= day <= days_in_month(month)`.
    pub fn resolve_month_day(month: i64, day: i64) -> Result<(Month, Day), Error> {
        let invalid = || Error::invalid_date(month, day);
        let month_u8 = u8::try_from(month).map_err(|_| invalid())?;
        let day_u8 = u8::try_from(day).map_err(|_| invalid())?;
        let month_typed = Month::new(month_u8).map_err(|_| invalid())?;
        let day_typed = Day::new(day_u8, month_typed)?;
        Ok((month_typed, day_typed))
    }

    /// Parses free-form text: two tokens split by a space, a slash or a
    /// hyphen (tried in that order). A token naming a month ("Mar",
    /// "september") fixes which side is the month; otherwise both tokens must
    /// be integers and are read like [`YearlessDate::from_pair`] does.
    ///
    /// # Errors
    /// Returns `Error::Parse` when no separator yields exactly two tokens or a
    /// token is neither a month name nor an integer, and `Error::InvalidDate`
    /// when the numbers don't form a date.
    pub fn from_string(s: &str, settings: &Settings) -> Result<Self, Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse("empty input".to_owned()));
        }
        let tokens = Self::split_tokens(trimmed)?;

        let names = tokens.map(Month::from_name);
        match names {
            [Some(_), Some(_)] => Err(Error::Parse(format!(
                "two month names in {trimmed:?}"
            ))),
            [Some(month), None] => {
                let day = Self::parse_token(tokens[1])?;
                Self::resolve_month_day(i64::from(month.get()), day)
                    .map(|(month, day)| Self::from_parts(month, day, settings))
            }
            [None, Some(month)] => {
                let day = Self::parse_token(tokens[0])?;
                Self::resolve_month_day(i64::from(month.get()), day)
                    .map(|(month, day)| Self::from_parts(month, day, settings))
            }
            [None, None] => {
                let first = Self::parse_token(tokens[0])?;
                let second = Self::parse_token(tokens[1])?;
                Self::resolve_pair(first, second, settings)
            }
        }
    }

    /// Builds a date from two numbers in either order.
    ///
    /// `settings.month_first` picks the preferred reading; if that isn't a
    /// valid date the swapped reading is tried before giving up, so `(31, 1)`
    /// is the 31st of January either way.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if a component isn't an integer and
    /// `Error::InvalidDate` (for the preferred reading) if neither reading is valid.
    pub fn from_pair(
        first: impl Into<Component>,
        second: impl Into<Component>,
        settings: &Settings,
    ) -> Result<Self, Error> {
        let first = first.into().to_int()?;
        let second = second.into().to_int()?;
        Self::resolve_pair(first, second, settings)
    }

    /// Builds a date from an explicit month and day, without any reordering.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if a component isn't an integer and
    /// `Error::InvalidDate` if they don't form a date.
    pub fn from_month_day(
        month: impl Into<Component>,
        day: impl Into<Component>,
        settings: &Settings,
    ) -> Result<Self, Error> {
        let month = month.into().to_int()?;
        let day = day.into().to_int()?;
        let (month, day) = Self::resolve_month_day(month, day)?;
        Ok(Self::from_parts(month, day, settings))
    }

    /// Builds a date from any supported input. An existing date is passed
    /// through unchanged, keeping its own settings.
    ///
    /// # Errors
    /// See [`YearlessDate::from_string`] and [`YearlessDate::from_pair`].
    pub fn from_input(input: impl Into<DateInput>, settings: &Settings) -> Result<Self, Error> {
        match input.into() {
            DateInput::Date(date) => Ok(date),
            DateInput::Text(text) => Self::from_string(&text, settings),
            DateInput::Pair(first, second) => Self::from_pair(first, second, settings),
        }
    }

    fn from_parts(month: Month, day: Day, settings: &Settings) -> Self {
        Self {
            month,
            day,
            settings: settings.clone(),
        }
    }

    fn split_tokens(s: &str) -> Result<[&str; 2], Error> {
        INPUT_SEPARATORS
            .iter()
            .find_map(|&separator| {
                let mut parts = s.split(separator);
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(first), Some(second), None) => Some([first.trim(), second.trim()]),
                    _ => None,
                }
            })
            .ok_or_else(|| Error::Parse(s.to_owned()))
    }

    fn parse_token(token: &str) -> Result<i64, Error> {
        token
            .parse::<i64>()
            .map_err(|_| Error::Parse(format!("unreadable token {token:?}")))
    }

    fn resolve_pair(first: i64, second: i64, settings: &Settings) -> Result<Self, Error> {
        let (month, day) = if settings.month_first {
            (first, second)
        } else {
            (second, first)
        };
        Self::resolve_month_day(month, day)
            .or_else(|err| {
                #[cfg(feature = "log")]
                log::debug!("{month}/{day} is not a month/day, trying it the other way round");
                Self::resolve_month_day(day, month).map_err(|_| err)
            })
            .map(|(month, day)| Self::from_parts(month, day, settings))
    }
}

impl YearlessDate {
    /// Month number, 1..=12
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn month_name(&self, format: NameFormat) -> &'static str {
        self.month.name(format)
    }

    /// Two-digit month, "03" for March
    pub fn month_padded(&self) -> String {
        format!("{:02}", self.month.get())
    }

    /// Two-digit day, "07" for the 7th
    pub fn day_padded(&self) -> String {
        format!("{:02}", self.day.get())
    }

    /// Days in this date's month
    pub fn days_in_month(&self) -> u8 {
        self.month.days()
    }

    /// `-1`, `0` or `1` as this date sorts before, equal to or after `other`
    pub fn compare_to(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }

    /// Whether this date lies on the arc going forward from `prev` to `next`,
    /// both ends included.
    ///
    /// When `prev` is after `next` the arc wraps past the end of December
    /// (Nov 15 → Feb 1 contains Jan 1); when they are equal the arc is the
    /// whole cycle.
    pub fn is_between(&self, prev: &Self, next: &Self) -> bool {
        match prev.cmp(next) {
            Ordering::Equal => true,
            Ordering::Less => prev <= self && self <= next,
            Ordering::Greater => prev <= self || self <= next,
        }
    }

    /// Renders the date. `separator` overrides the configured one for the
    /// numeric formats.
    pub fn format(&self, format: Format, separator: Option<&str>) -> String {
        let separator = separator.unwrap_or(&self.settings.separator);
        match format {
            Format::Short => format!("{} {}", self.day, self.month.name(NameFormat::Short)),
            Format::Long => format!("{} {}", self.day, self.month.name(NameFormat::Long)),
            // A two-field record of integers always serializes
            Format::Json => serde_json::to_string(self).unwrap_or_default(),
            Format::MonthDay => format!("{}{separator}{}", self.month, self.day),
            Format::DayMonth => format!("{}{separator}{}", self.day, self.month),
        }
    }
}

impl YearlessDate {
    /// Moves the month by `n` (negative goes back), wrapping around the year.
    /// The day is clamped down to the new month's length. Does nothing if `n`
    /// isn't an integer.
    pub fn shift_month_in_place(&mut self, n: impl Into<Component>) -> &mut Self {
        if let Ok(n) = n.into().to_int() {
            self.month = self.month.shifted(n);
            self.day = self.day.clamped_to(self.month);
        }
        self
    }

    /// Moves the date by `n` days, carrying into the following or previous
    /// months as often as needed. Does nothing if `n` isn't an integer.
    pub fn shift_day_in_place(&mut self, n: impl Into<Component>) -> &mut Self {
        let Ok(n) = n.into().to_int() else {
            return self;
        };
        // Whole cycles land on the same date
        let mut day = i64::from(self.day.get()) + n % i64::from(DAYS_IN_CYCLE);
        let mut month = self.month;
        loop {
            if day < i64::from(MIN_DAY) {
                month = month.previous();
                day += i64::from(month.days());
            } else if day > i64::from(month.days()) {
                day -= i64::from(month.days());
                month = month.next();
            } else {
                break;
            }
        }
        // The loop leaves day in 1..=month.days()
        if let Ok((month, day)) = Self::resolve_month_day(i64::from(month.get()), day) {
            self.month = month;
            self.day = day;
        }
        self
    }

    /// Sets the month, clamping the day down if the new month is shorter.
    ///
    /// # Errors
    /// Returns an error and leaves the date untouched if `m` is not a month.
    pub fn set_month(&mut self, m: impl Into<Component>) -> Result<u8, Error> {
        let m = m.into().to_int()?;
        let month = u8::try_from(m)
            .ok()
            .and_then(|m| Month::new(m).ok())
            .ok_or(Error::invalid_date(m, i64::from(self.day.get())))?;
        self.month = month;
        self.day = self.day.clamped_to(month);
        Ok(month.get())
    }

    /// Sets the day.
    ///
    /// # Errors
    /// Returns an error and leaves the date untouched unless `d` is a day of
    /// the current month.
    pub fn set_day(&mut self, d: impl Into<Component>) -> Result<u8, Error> {
        let d = d.into().to_int()?;
        let (_, day) = Self::resolve_month_day(i64::from(self.month.get()), d)?;
        self.day = day;
        Ok(day.get())
    }
}

impl PartialEq for YearlessDate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for YearlessDate {}

impl Hash for YearlessDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.month.hash(state);
        self.day.hash(state);
    }
}

impl PartialOrd for YearlessDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearlessDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.month, self.day).cmp(&(other.month, other.day))
    }
}

impl fmt::Display for YearlessDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(self.settings.format, None))
    }
}

impl FromStr for YearlessDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s, &Settings::default())
    }
}

impl TryFrom<(u8, u8)> for YearlessDate {
    type Error = Error;

    fn try_from(value: (u8, u8)) -> Result<Self, Self::Error> {
        Self::from_pair(value.0, value.1, &Settings::default())
    }
}

#[derive(Serialize)]
struct Record {
    month: u8,
    day: u8,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Record { month: i64, day: i64 },
    Text(String),
}

impl serde::Serialize for YearlessDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Record {
            month: self.month.get(),
            day: self.day.get(),
        }
        .serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for YearlessDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let date = match Repr::deserialize(deserializer)? {
            Repr::Record { month, day } => Self::from_month_day(month, day, &Settings::default()),
            Repr::Text(text) => text.parse(),
        };
        date.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u8, day: u8) -> YearlessDate {
        YearlessDate::from_month_day(month, day, &Settings::default()).unwrap()
    }

    fn day_first() -> Settings {
        Settings::default().with_month_first(false)
    }

    #[test]
    fn test_resolve_month_day_bounds() {
        for month in -1..=14_i64 {
            for day in -1..=33_i64 {
                let expected = (1..=12).contains(&month)
                    && day >= 1
                    && day <= i64::from(days_in_month(month as u8).unwrap_or(0));
                assert_eq!(
                    YearlessDate::resolve_month_day(month, day).is_ok(),
                    expected,
                    "{month}/{day}"
                );
            }
        }
    }

    #[test]
    fn test_resolve_month_day_error() {
        let result = YearlessDate::resolve_month_day(2, 30);
        assert!(matches!(
            result,
            Err(Error::InvalidDate { month: 2, day: 30 })
        ));
        let result = YearlessDate::resolve_month_day(i64::MAX, 1);
        assert!(matches!(result, Err(Error::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_month_names() {
        struct TestCase {
            input: &'static str,
            month: u8,
            day: u8,
        }

        let cases = [
            TestCase { input: "01 March", month: 3, day: 1 },
            TestCase { input: "Mar/1", month: 3, day: 1 },
            TestCase { input: "Mar 1", month: 3, day: 1 },
            TestCase { input: "1-mar", month: 3, day: 1 },
            TestCase { input: "DECEMBER 31", month: 12, day: 31 },
            TestCase { input: "15 sep", month: 9, day: 15 },
            TestCase { input: "Sept-30", month: 9, day: 30 },
            TestCase { input: "  25 December  ", month: 12, day: 25 },
            TestCase { input: "Feb / 28", month: 2, day: 28 },
        ];

        for case in &cases {
            let parsed: YearlessDate = case.input.parse().unwrap();
            assert_eq!(
                (parsed.month(), parsed.day()),
                (case.month, case.day),
                "parsing {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_month_name_overrides_order_setting() {
        let parsed = YearlessDate::from_string("March 4", &day_first()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (3, 4));
        let parsed = YearlessDate::from_string("4 March", &Settings::default()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (3, 4));
    }

    #[test]
    fn test_parse_numeric_text() {
        let parsed: YearlessDate = "3/1".parse().unwrap();
        assert_eq!((parsed.month(), parsed.day()), (3, 1));

        let parsed = YearlessDate::from_string("3/1", &day_first()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (1, 3));

        // Falls back to the swapped reading
        let parsed: YearlessDate = "25-12".parse().unwrap();
        assert_eq!((parsed.month(), parsed.day()), (12, 25));
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input: &'static str,
            kind: ErrorKind,
        }

        let cases = [
            TestCase { input: "", kind: ErrorKind::Parse },
            TestCase { input: "March", kind: ErrorKind::Parse },
            TestCase { input: "1 2 3", kind: ErrorKind::Parse },
            TestCase { input: "1/2/3", kind: ErrorKind::Parse },
            TestCase { input: "Marc 1", kind: ErrorKind::Parse },
            TestCase { input: "May June", kind: ErrorKind::Parse },
            TestCase { input: "first/March", kind: ErrorKind::Parse },
            TestCase { input: "Feb 30", kind: ErrorKind::InvalidDate },
            TestCase { input: "40/40", kind: ErrorKind::InvalidDate },
            TestCase { input: "0 0", kind: ErrorKind::InvalidDate },
        ];

        for case in &cases {
            let result = case.input.parse::<YearlessDate>();
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(case.kind),
                "parsing {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_from_pair() {
        let parsed = YearlessDate::from_pair(3, 1, &Settings::default()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (3, 1));

        let parsed = YearlessDate::from_pair(3, 1, &day_first()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (1, 3));

        let parsed = YearlessDate::from_pair("31", "1", &Settings::default()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (1, 31));

        let parsed = YearlessDate::from_pair(" 7 ", 4, &Settings::default()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (7, 4));
    }

    #[test]
    fn test_from_pair_errors() {
        let result = YearlessDate::from_pair("x", 1, &Settings::default());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        // The preferred reading is the one reported
        let result = YearlessDate::from_pair(13, 40, &Settings::default());
        assert!(matches!(
            result,
            Err(Error::InvalidDate { month: 13, day: 40 })
        ));
    }

    #[test]
    fn test_from_month_day_never_swaps() {
        let result = YearlessDate::from_month_day(31, 1, &Settings::default());
        assert!(matches!(result, Err(Error::InvalidDate { .. })));

        let result = YearlessDate::from_month_day("3.5", 1, &Settings::default());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let parsed = YearlessDate::from_month_day("12", 25_i64, &day_first()).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (12, 25));
    }

    #[test]
    fn test_from_input() {
        let settings = Settings::default();
        let original = date(7, 4).with_settings(Settings::default().with_format(Format::Short));

        let passed = YearlessDate::from_input(&original, &settings).unwrap();
        assert_eq!(passed, original);
        assert_eq!(passed.settings().format, Format::Short);

        let parsed = YearlessDate::from_input("Jul 4", &settings).unwrap();
        assert_eq!(parsed, original);

        let parsed = YearlessDate::from_input([7, 4], &settings).unwrap();
        assert_eq!(parsed, original);

        let parsed = YearlessDate::from_input(("4", 7), &day_first()).unwrap();
        assert_eq!(parsed, original);

        let parsed = YearlessDate::from_input(("4", 7), &settings).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (4, 7));
    }

    #[test]
    fn test_new_and_try_from() {
        let month = Month::new(2).unwrap();
        let ok = YearlessDate::new(month, Day::try_from(28_u8).unwrap()).unwrap();
        assert_eq!(ok.day(), 28);
        assert!(YearlessDate::new(month, Day::try_from(29_u8).unwrap()).is_err());

        let parsed = YearlessDate::try_from((3_u8, 1_u8)).unwrap();
        assert_eq!((parsed.month(), parsed.day()), (3, 1));
    }

    #[test]
    fn test_compare_to() {
        let a = date(3, 1);
        let b = date(3, 2);
        let c = date(4, 1);

        assert_eq!(a.compare_to(&b), -1);
        assert_eq!(b.compare_to(&a), 1);
        assert_eq!(a.compare_to(&a.clone()), 0);
        assert_eq!(b.compare_to(&c), -1);
        assert!(a < b && b < c && a < c);
    }

    #[test]
    fn test_ordering_is_total() {
        let samples: Vec<_> = [(1, 1), (1, 31), (2, 28), (6, 15), (12, 1), (12, 31)]
            .into_iter()
            .map(|(m, d)| date(m, d))
            .collect();

        for a in &samples {
            assert_eq!(a.compare_to(a), 0);
            for b in &samples {
                assert_eq!(a.compare_to(b), -b.compare_to(a));
                for c in &samples {
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_equality_ignores_settings() {
        let plain = date(5, 5);
        let styled = date(5, 5).with_settings(day_first().with_separator("."));
        assert_eq!(plain, styled);
    }

    #[test]
    fn test_is_between_non_wrapping() {
        let prev = date(3, 10);
        let next = date(5, 20);

        assert!(date(3, 10).is_between(&prev, &next));
        assert!(date(4, 1).is_between(&prev, &next));
        assert!(date(5, 20).is_between(&prev, &next));
        assert!(!date(3, 9).is_between(&prev, &next));
        assert!(!date(5, 21).is_between(&prev, &next));
        assert!(!date(12, 25).is_between(&prev, &next));
    }

    #[test]
    fn test_is_between_wrapping() {
        let prev = date(11, 15);
        let next = date(2, 1);

        assert!(date(11, 15).is_between(&prev, &next));
        assert!(date(12, 31).is_between(&prev, &next));
        assert!(date(1, 1).is_between(&prev, &next));
        assert!(date(2, 1).is_between(&prev, &next));
        assert!(!date(2, 2).is_between(&prev, &next));
        assert!(!date(11, 14).is_between(&prev, &next));
        assert!(!date(6, 1).is_between(&prev, &next));
    }

    #[test]
    fn test_is_between_full_cycle() {
        let point = date(7, 7);
        for (month, info) in months() {
            for day in [1, info.days] {
                assert!(date(month.get(), day).is_between(&point, &point));
            }
        }
    }

    #[test]
    fn test_format() {
        let d = date(3, 1);
        assert_eq!(d.format(Format::Short, None), "1 Mar");
        assert_eq!(d.format(Format::Long, None), "1 March");
        assert_eq!(d.format(Format::MonthDay, None), "3/1");
        assert_eq!(d.format(Format::DayMonth, None), "1/3");
        assert_eq!(d.format(Format::DayMonth, Some("-")), "1-3");
        assert_eq!(d.format(Format::Json, Some("-")), r#"{"month":3,"day":1}"#);

        let d = date(9, 2);
        assert_eq!(d.format(Format::Short, None), "2 Sept");
    }

    #[test]
    fn test_json_format_matches_serde() {
        for (month, info) in months() {
            let d = date(month.get(), info.days);
            assert_eq!(
                d.format(Format::Json, None),
                serde_json::to_string(&d).unwrap()
            );
        }
    }

    #[test]
    fn test_display_uses_settings() {
        let d = date(12, 25);
        assert_eq!(d.to_string(), "25 December");

        let d = d.with_settings(
            Settings::default()
                .with_format(Format::MonthDay)
                .with_separator("."),
        );
        assert_eq!(d.to_string(), "12.25");
    }

    #[test]
    fn test_month_day_round_trip() {
        for (month, info) in months() {
            for day in 1..=info.days {
                let original = date(month.get(), day);
                let text = original.format(Format::MonthDay, Some("/"));
                let parsed = YearlessDate::from_string(&text, &Settings::default()).unwrap();
                assert_eq!(parsed, original, "round trip of {text}");
            }
        }
    }

    #[test]
    fn test_accessors() {
        let d = date(3, 7);
        assert_eq!(d.month(), 3);
        assert_eq!(d.month_padded(), "03");
        assert_eq!(d.month_name(NameFormat::Short), "Mar");
        assert_eq!(d.month_name(NameFormat::Long), "March");
        assert_eq!(d.day(), 7);
        assert_eq!(d.day_padded(), "07");
        assert_eq!(d.days_in_month(), 31);

        let d = date(11, 23);
        assert_eq!(d.month_padded(), "11");
        assert_eq!(d.day_padded(), "23");
    }

    #[test]
    fn test_shift_month() {
        let mut d = date(1, 31);
        d.shift_month_in_place(1);
        assert_eq!((d.month(), d.day()), (2, 28));
        // The clamped day is not restored
        d.shift_month_in_place(1);
        assert_eq!((d.month(), d.day()), (3, 28));

        let mut d = date(12, 15);
        d.shift_month_in_place(1);
        assert_eq!((d.month(), d.day()), (1, 15));
        d.shift_month_in_place(-2);
        assert_eq!((d.month(), d.day()), (11, 15));
    }

    #[test]
    fn test_shift_month_full_year_is_identity() {
        for (month, info) in months() {
            let mut d = date(month.get(), info.days);
            d.shift_month_in_place(12);
            assert_eq!(d.month(), month.get());
            d.shift_month_in_place(-12);
            assert_eq!(d.month(), month.get());
            assert_eq!(d.day(), info.days);
        }
    }

    #[test]
    fn test_shift_month_ignores_non_integers() {
        let mut d = date(4, 10);
        d.shift_month_in_place("soon");
        assert_eq!((d.month(), d.day()), (4, 10));
        d.shift_month_in_place("-1");
        assert_eq!((d.month(), d.day()), (3, 10));
    }

    #[test]
    fn test_shift_day() {
        struct TestCase {
            from: (u8, u8),
            by: i64,
            to: (u8, u8),
        }

        let cases = [
            TestCase { from: (12, 31), by: 1, to: (1, 1) },
            TestCase { from: (1, 1), by: -1, to: (12, 31) },
            TestCase { from: (2, 28), by: 1, to: (3, 1) },
            TestCase { from: (3, 1), by: -1, to: (2, 28) },
            TestCase { from: (1, 31), by: 30, to: (3, 2) },
            TestCase { from: (2, 28), by: 400, to: (4, 4) },
            TestCase { from: (2, 28), by: -400, to: (1, 24) },
            TestCase { from: (6, 15), by: 365, to: (6, 15) },
            TestCase { from: (6, 15), by: -730, to: (6, 15) },
            TestCase { from: (6, 15), by: 0, to: (6, 15) },
            TestCase { from: (1, 1), by: 364, to: (12, 31) },
            TestCase { from: (5, 5), by: i64::MAX, to: (2, 21) },
        ];

        for case in &cases {
            let mut d = date(case.from.0, case.from.1);
            d.shift_day_in_place(case.by);
            assert_eq!(
                (d.month(), d.day()),
                case.to,
                "{:?} shifted by {}",
                case.from,
                case.by
            );
        }
    }

    #[test]
    fn test_shift_day_matches_single_steps() {
        let mut stepped = date(10, 20);
        for _ in 0..100 {
            stepped.shift_day_in_place(1);
        }
        let mut jumped = date(10, 20);
        jumped.shift_day_in_place(100);
        assert_eq!(stepped, jumped);
    }

    #[test]
    fn test_shift_day_ignores_non_integers() {
        let mut d = date(4, 10);
        d.shift_day_in_place("2.5");
        assert_eq!((d.month(), d.day()), (4, 10));
    }

    #[test]
    fn test_set_month() {
        let mut d = date(1, 30);
        assert!(d.set_month(13).is_err());
        assert!(d.set_month(0).is_err());
        assert!(d.set_month("feb").is_err());
        assert_eq!((d.month(), d.day()), (1, 30));

        assert_eq!(d.set_month(2).unwrap(), 2);
        assert_eq!((d.month(), d.day()), (2, 28));

        assert_eq!(d.set_month("4").unwrap(), 4);
        assert_eq!((d.month(), d.day()), (4, 28));
    }

    #[test]
    fn test_set_day() {
        let mut d = date(1, 10);
        assert!(d.set_day(32).is_err());
        assert!(d.set_day(0).is_err());
        assert!(d.set_day("tenth").is_err());
        assert_eq!(d.day(), 10);

        assert_eq!(d.set_day(31).unwrap(), 31);
        assert_eq!(d.day(), 31);

        let mut d = date(2, 1);
        assert!(d.set_day(29).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = date(8, 8).with_settings(day_first());
        let mut copy = original.clone();
        copy.shift_day_in_place(30);
        assert_eq!((original.month(), original.day()), (8, 8));
        assert_eq!((copy.month(), copy.day()), (9, 7));
        assert_eq!(copy.settings(), original.settings());
    }

    #[test]
    fn test_serde() {
        let d = date(3, 1);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"month":3,"day":1}"#);

        let parsed: YearlessDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let parsed: YearlessDate = serde_json::from_str(r#""1 March""#).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<YearlessDate, _> = serde_json::from_str(r#"{"month":2,"day":30}"#);
        assert!(result.is_err());

        let result: Result<YearlessDate, _> = serde_json::from_str(r#""Smarch 1""#);
        assert!(result.is_err());

        let result: Result<YearlessDate, _> = serde_json::from_str("301");
        assert!(result.is_err());
    }

    #[test]
    fn test_component() {
        assert_eq!(Component::from(5).to_int().unwrap(), 5);
        assert_eq!(Component::from(" -3 ").to_int().unwrap(), -3);
        assert!(Component::from("3rd").to_int().is_err());
        assert_eq!(Component::from("x").to_string(), "x");
    }
}
