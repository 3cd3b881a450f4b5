use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, UTC_ALIASES, UTC_ZONE,
    ZONE_SEPARATOR,
};
use crate::error::{FuzzyDateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1000..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `FuzzyDateError::OutOfRange` for any other value.
    pub fn new(value: u16) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(out_of_range("year", value.into(), MIN_YEAR.into(), MAX_YEAR.into()));
        }
        let non_zero = NonZeroU16::new(value)
            .ok_or_else(|| out_of_range("year", 0, MIN_YEAR.into(), MAX_YEAR.into()))?;
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = FuzzyDateError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `FuzzyDateError::OutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self> {
        let non_zero = NonZeroU8::new(value)
            .filter(|m| m.get() <= MAX_MONTH)
            .ok_or_else(|| out_of_range("month", value.into(), 1, MAX_MONTH.into()))?;
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FuzzyDateError;

    fn try_from(value: u8) -> Result<Self> {
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
        write!(f, "{:02}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvalidCalendarDate` if the day does not exist in that month.
    pub fn new(value: u8, year: u16, month: Month) -> Result<Self> {
        NonZeroU8::new(value)
            .filter(|d| d.get() <= days_in_month(year, month))
            .map(Self)
            .ok_or(FuzzyDateError::InvalidCalendarDate {
                year: year.into(),
                month: month.get().into(),
                day: value.into(),
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// An hour of the day in `0..=MAX_HOUR`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// # Errors
    /// Returns `FuzzyDateError::OutOfRange` if the value is > `MAX_HOUR`.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_HOUR {
            return Err(out_of_range("hour", value.into(), 0, MAX_HOUR.into()));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour {
    type Error = FuzzyDateError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A minute of the hour in `0..=MAX_MINUTE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Minute(u8);

impl Minute {
    /// # Errors
    /// Returns `FuzzyDateError::OutOfRange` if the value is > `MAX_MINUTE`.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_MINUTE {
            return Err(out_of_range("minute", value.into(), 0, MAX_MINUTE.into()));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Minute {
    type Error = FuzzyDateError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Minute> for u8 {
    fn from(minute: Minute) -> Self {
        minute.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// An `Area/Location` zone identifier.
///
/// Only the syntax is checked here; whether the zone exists is up to a
/// [`ZoneCatalog`](crate::ZoneCatalog). UTC aliases are normalized to [`UTC_ZONE`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneName(String);

impl ZoneName {
    /// # Errors
    /// Returns `FuzzyDateError::InvalidTimezone` if `value` is not of the form `Area/Location`.
    pub fn new(value: &str) -> Result<Self> {
        if UTC_ALIASES.contains(&value) {
            return Ok(Self(UTC_ZONE.to_owned()));
        }
        if !is_zone_syntax(value) {
            return Err(FuzzyDateError::InvalidTimezone(value.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ZoneName {
    type Error = FuzzyDateError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<ZoneName> for String {
    fn from(zone: ZoneName) -> Self {
        zone.0
    }
}

impl AsRef<str> for ZoneName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Helper functions

/// True when `value` is exactly one `/` with `[A-Za-z_]+` on either side.
pub fn is_zone_syntax(value: &str) -> bool {
    let is_part = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == '_');
    value
        .split_once(ZONE_SEPARATOR)
        .is_some_and(|(area, location)| is_part(area) && is_part(location))
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
pub const fn days_in_month(year: u16, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Checks that `(year, month, day)` names a real Gregorian date, returning the typed month and day.
pub(crate) fn calendar_date(year: u16, month: i64, day: i64) -> Result<(Month, Day)> {
    let invalid = FuzzyDateError::InvalidCalendarDate {
        year: year.into(),
        month,
        day,
    };
    let month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::new(m).ok())
        .ok_or_else(|| invalid.clone())?;
    let day = u8::try_from(day)
        .ok()
        .filter(|d| *d >= MIN_DAY)
        .and_then(|d| Day::new(d, year, month).ok())
        .ok_or(invalid)?;
    Ok((month, day))
}

const fn out_of_range(component: &'static str, value: i64, min: i64, max: i64) -> FuzzyDateError {
    FuzzyDateError::OutOfRange {
        component,
        value,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1000).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_out_of_range() {
        for value in [0, 1, 999, 10000, u16::MAX] {
            let result = Year::new(value);
            assert!(
                matches!(result, Err(FuzzyDateError::OutOfRange { component: "year", .. })),
                "year {value} should be out of range"
            );
        }
    }

    #[test]
    fn test_year_display_is_padded() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.to_string(), "2024");
        assert_eq!(year.get(), 2024);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("999").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(Month::new(0).is_err());
        assert!(Month::new(13).is_err());
        assert_eq!(Month::new(8).unwrap().to_string(), "08");
    }

    #[test]
    fn test_day_new_valid() {
        let jan = Month::new(1).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(1, 2024, jan).is_ok());
        assert!(Day::new(31, 2024, jan).is_ok());

        assert!(Day::new(28, 2023, feb).is_ok());
        assert!(Day::new(29, 2023, feb).is_err());

        assert!(Day::new(29, 2024, feb).is_ok());
        assert!(Day::new(30, 2024, feb).is_err());

        assert!(Day::new(30, 2024, apr).is_ok());
        assert!(Day::new(31, 2024, apr).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        let jan = Month::new(1).unwrap();
        assert!(matches!(
            Day::new(0, 2024, jan),
            Err(FuzzyDateError::InvalidCalendarDate { .. })
        ));
        assert_eq!(
            Day::new(32, 2024, jan),
            Err(FuzzyDateError::InvalidCalendarDate {
                year: 2024,
                month: 1,
                day: 32
            })
        );
    }

    #[test]
    fn test_hour_and_minute_bounds() {
        assert!(Hour::new(0).is_ok());
        assert!(Hour::new(23).is_ok());
        assert!(matches!(
            Hour::new(24),
            Err(FuzzyDateError::OutOfRange { component: "hour", .. })
        ));
        assert!(Minute::new(59).is_ok());
        assert!(matches!(
            Minute::new(60),
            Err(FuzzyDateError::OutOfRange { component: "minute", .. })
        ));
        assert_eq!(Hour::new(7).unwrap().to_string(), "07");
        assert_eq!(Minute::new(5).unwrap().to_string(), "05");
    }

    #[test]
    fn test_zone_name_syntax() {
        struct TestCase {
            input:    &'static str,
            is_valid: bool,
        }

        let cases = [
            TestCase { input: "America/Chicago", is_valid: true },
            TestCase { input: "America/New_York", is_valid: true },
            TestCase { input: "Etc/UTC", is_valid: true },
            TestCase { input: "America/Argentina/Buenos_Aires", is_valid: false },
            TestCase { input: "America/Port-au-Prince", is_valid: false },
            TestCase { input: "Chicago", is_valid: false },
            TestCase { input: "/Chicago", is_valid: false },
            TestCase { input: "America/", is_valid: false },
            TestCase { input: "", is_valid: false },
        ];

        for case in &cases {
            assert_eq!(
                ZoneName::new(case.input).is_ok(),
                case.is_valid,
                "zone {:?}",
                case.input
            );
        }
    }

    #[test]
    fn test_zone_name_normalizes_utc_aliases() {
        for alias in ["UTC", "Etc/UTC", "Zulu", "Etc/Universal"] {
            assert_eq!(ZoneName::new(alias).unwrap().as_str(), UTC_ZONE);
        }
    }

    #[test]
    fn test_calendar_date() {
        assert!(calendar_date(2020, 2, 29).is_ok());
        assert_eq!(
            calendar_date(2019, 2, 29),
            Err(FuzzyDateError::InvalidCalendarDate {
                year: 2019,
                month: 2,
                day: 29
            })
        );
        assert!(calendar_date(2020, 13, 1).is_err());
        assert!(calendar_date(2020, 1, 32).is_err());
        assert!(calendar_date(2020, -1, 1).is_err());
        assert!(calendar_date(2020, 1, 300).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2020, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2021, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2100, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
            TestCase { year: 2400, is_leap: true, description: "divisible by 400" },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            let typed = Month::new(month).unwrap();
            assert_eq!(days_in_month(2023, typed), expected[month as usize]);
        }
        let feb = Month::new(2).unwrap();
        assert_eq!(days_in_month(2024, feb), 29);
        assert_eq!(days_in_month(2000, feb), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(1900, feb), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_days_in_month_rejects_impossible_months() {
        for month in [0, 13, u8::MAX] {
            let result = Month::new(month).map(|m| days_in_month(2020, m));
            assert!(
                matches!(result, Err(FuzzyDateError::OutOfRange { component: "month", .. })),
                "month {month}"
            );
        }
    }
}
