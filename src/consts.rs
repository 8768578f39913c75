/// Number of months in a (yearless) year
pub const MONTHS_IN_YEAR: u8 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Length of the yearless cycle: February is always 28 days
pub const DAYS_IN_CYCLE: u16 = 365;

/// Static description of one month of the yearless calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthInfo {
    /// Abbreviated name ("Jan", "Sept", ...)
    pub short: &'static str,
    /// Full name ("January", ...)
    pub long: &'static str,
    /// Fixed day count, no leap-year variation
    pub days: u8,
}

/// Month table, index 0 is January (use `types::month_info` for 1-indexed access)
pub static MONTHS: [MonthInfo; 12] = [
    MonthInfo { short: "Jan", long: "January", days: 31 },
    MonthInfo { short: "Feb", long: "February", days: 28 },
    MonthInfo { short: "Mar", long: "March", days: 31 },
    MonthInfo { short: "Apr", long: "April", days: 30 },
    MonthInfo { short: "May", long: "May", days: 31 },
    MonthInfo { short: "Jun", long: "June", days: 30 },
    MonthInfo { short: "Jul", long: "July", days: 31 },
    MonthInfo { short: "Aug", long: "August", days: 31 },
    MonthInfo { short: "Sept", long: "September", days: 30 },
    MonthInfo { short: "Oct", long: "October", days: 31 },
    MonthInfo { short: "Nov", long: "November", days: 30 },
    MonthInfo { short: "Dec", long: "December", days: 31 },
];

/// Extra lowercase spellings accepted on input besides the table's names
pub(crate) const MONTH_ALIASES: [(&str, u8); 1] = [("sep", 9)];

/// Token separators tried in order when parsing free-form text
pub const INPUT_SEPARATORS: [char; 3] = [' ', '/', '-'];

/// Default separator used by the numeric output formats
pub const DEFAULT_SEPARATOR: &str = "/";
