use crate::Error;
use crate::consts::{MAX_MONTH, MIN_DAY, MONTH_ALIASES, MONTHS, MONTHS_IN_YEAR, MonthInfo};
use crate::settings::NameFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, Error> {
        let non_zero =
            NonZeroU8::new(value).ok_or(Error::invalid_date(i64::from(value), i64::from(MIN_DAY)))?;
        if value > MAX_MONTH {
            return Err(Error::invalid_date(i64::from(value), i64::from(MIN_DAY)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Table entry for this month
    pub fn info(self) -> &'static MonthInfo {
        &MONTHS[(self.get() - 1) as usize]
    }

    /// Fixed day count of this month
    pub fn days(self) -> u8 {
        self.info().days
    }

    pub fn name(self, format: NameFormat) -> &'static str {
        match format {
            NameFormat::Short => self.info().short,
            NameFormat::Long => self.info().long,
        }
    }

    /// Moves `n` months forward (or backward when negative), wrapping
    /// December into January and back.
    pub fn shifted(self, n: i64) -> Self {
        let months = i64::from(MONTHS_IN_YEAR);
        let index = (i64::from(self.get()) - 1 + n.rem_euclid(months)).rem_euclid(months);
        // index is in 0..12, so index + 1 is a valid month
        Self(NonZeroU8::MIN.saturating_add(index as u8))
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    pub fn previous(self) -> Self {
        self.shifted(-1)
    }

    /// Resolves a month name case-insensitively: short and long forms from
    /// the table plus a few accepted aliases ("sep").
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let number = MONTHS
            .iter()
            .position(|m| m.short.eq_ignore_ascii_case(name) || m.long.eq_ignore_ascii_case(name))
            .map(|i| i as u8 + 1)
            .or_else(|| {
                MONTH_ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|&(_, number)| number)
            })?;
        Self::new(number).ok()
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's non-zero and within the month's day count
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if the value is 0 or too large for the month.
    pub fn new(value: u8, month: Month) -> Result<Self, Error> {
        let invalid = || Error::invalid_date(i64::from(month.get()), i64::from(value));
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > month.days() {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Last day of the given month
    pub fn last_of(month: Month) -> Self {
        Self(NonZeroU8::new(month.days()).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns this day, or the last day of `month` if it doesn't fit there
    pub fn clamped_to(self, month: Month) -> Self {
        if self.get() > month.days() {
            Self::last_of(month)
        } else {
            self
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate the upper bound without a month, so just check minimum
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(Error::invalid_date(0, i64::from(value)))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Month table helpers, keyed by raw month numbers

/// Table entry for month `m` (1-indexed), `None` outside `1..=12`
pub fn month_info(m: u8) -> Option<&'static MonthInfo> {
    Month::new(m).ok().map(Month::info)
}

/// Day count of month `m`, `None` if `m` is not a month
pub fn days_in_month(m: u8) -> Option<u8> {
    month_info(m).map(|info| info.days)
}

/// Name of month `m` in the requested form, `None` if `m` is not a month
pub fn month_name(m: u8, format: NameFormat) -> Option<&'static str> {
    Month::new(m).ok().map(|month| month.name(format))
}

/// Iterates every month of the table in order, with its number.
pub fn months() -> impl Iterator<Item = (Month, &'static MonthInfo)> {
    (1..=MAX_MONTH)
        .filter_map(|m| Month::new(m).ok())
        .map(|month| (month, month.info()))
}
