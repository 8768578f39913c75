use crate::consts::MAX_MONTH;

/// Error type for building and mutating yearless dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Text could not be split into a month and a day, or a token is unreadable.
    #[error("Invalid yearless date: {0}")]
    Parse(String),

    /// Wrong argument shape, or a non-integer where an integer is required.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Month outside `1..=12`, or day outside the month's day count.
    #[error("Invalid date: month {month}, day {day} (month must be 1-{max}, day within the month)", max = MAX_MONTH)]
    InvalidDate { month: i64, day: i64 },
}

/// Discriminant of [`Error`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    InvalidArgument,
    InvalidDate,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidDate { .. } => ErrorKind::InvalidDate,
        }
    }

    pub(crate) const fn invalid_date(month: i64, day: i64) -> Self {
        Self::InvalidDate { month, day }
    }
}
