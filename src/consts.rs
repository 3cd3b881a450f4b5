/// Minimum valid year (inclusive).
/// Four digit years keep textual and chronological ordering identical.
pub const MIN_YEAR: u16 = 1000;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Maximum valid hour
pub const MAX_HOUR: u8 = 23;
/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Stands in for an absent month or day in the canonical encoding.
/// Sorts below every real month and day.
pub const PLACEHOLDER: &str = "00";

/// Separator between date fields in the canonical encoding
pub const CANONICAL_SEPARATOR: char = '.';
/// Separators accepted between date fields when parsing text
pub const INPUT_SEPARATORS: [char; 3] = ['.', '-', '/'];
/// Separator between hour and minute
pub const TIME_SEPARATOR: char = ':';
/// Separator between a zone's area and location
pub const ZONE_SEPARATOR: char = '/';

/// Identifier every UTC alias is normalized to
pub const UTC_ZONE: &str = "Etc/UTC";
/// Names accepted as aliases of [`UTC_ZONE`]
pub(crate) const UTC_ALIASES: [&str; 8] = [
    "UTC",
    "Etc/UTC",
    "UCT",
    "Etc/UCT",
    "Universal",
    "Etc/Universal",
    "Zulu",
    "Etc/Zulu",
];
