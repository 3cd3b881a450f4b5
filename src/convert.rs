//! Conversions between fuzzy dates and `chrono` values.

use chrono::{DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::catalog::Tzdb;
use crate::consts::UTC_ZONE;
use crate::error::{FuzzyDateError, Result};
use crate::{Components, FuzzyDate, Parts};

/// A timezone that may carry an IANA identifier.
pub trait NamedZone: TimeZone {
    /// The zone's identifier, or `None` for anonymous offsets.
    fn zone_name(&self) -> Option<&str>;
}

impl NamedZone for Tz {
    fn zone_name(&self) -> Option<&str> {
        Some(self.name())
    }
}

impl NamedZone for Utc {
    fn zone_name(&self) -> Option<&str> {
        Some(UTC_ZONE)
    }
}

/// Fixed offsets have no identifier, so they never make a fuzzy date.
impl NamedZone for FixedOffset {
    fn zone_name(&self) -> Option<&str> {
        None
    }
}

impl FuzzyDate {
    /// Builds an exact, time-less value from a calendar date.
    ///
    /// # Errors
    /// Returns `FuzzyDateError::OutOfRange` if the year is outside 1000-9999.
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        Self::from_components(
            Components::new()
                .y(date.year())
                .m(date.month())
                .d(date.day()),
        )
    }

    /// Builds a minute-precision value from a zone-aware timestamp.
    ///
    /// Seconds are dropped. UTC timestamps are stored under [`UTC_ZONE`].
    ///
    /// # Errors
    /// Returns `FuzzyDateError::InvalidTimezone` when the zone has no
    /// `Area/Location` identifier.
    pub fn from_timestamp<Z: NamedZone>(timestamp: &DateTime<Z>) -> Result<Self> {
        let zone = timestamp.timezone();
        let name = zone.zone_name().ok_or_else(|| {
            FuzzyDateError::InvalidTimezone("timestamp has no named zone".to_owned())
        })?;
        Self::from_components(
            Components::new()
                .y(timestamp.year())
                .m(timestamp.month())
                .d(timestamp.day())
                .hour(timestamp.hour())
                .minute(timestamp.minute())
                .tz(name),
        )
    }

    /// The calendar date, or `None` when the day is unknown.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.parts()?.date_columns();
        NaiveDate::from_ymd_opt(year.into(), month?.into(), day?.into())
    }

    /// The zone-aware timestamp, or `None` unless date, time and zone are all present.
    ///
    /// A wall-clock time repeated by a DST transition resolves to the earlier instant.
    ///
    /// # Errors
    /// `InvalidTimezone` if the zone no longer resolves, `NonexistentLocalTime`
    /// if the wall-clock time was skipped by a DST transition.
    pub fn to_timestamp(&self) -> Result<Option<DateTime<Tz>>> {
        let Some(Parts::Minute {
            year,
            month,
            day,
            hour,
            minute,
            zone,
        }) = self.parts()
        else {
            return Ok(None);
        };

        let tz = Tzdb::resolve(zone.as_str()).ok_or_else(|| {
            debug!("zone {zone} of {self} no longer resolves");
            FuzzyDateError::InvalidTimezone(zone.to_string())
        })?;
        let local = NaiveDate::from_ymd_opt(year.get().into(), month.get().into(), day.get().into())
            .and_then(|date| date.and_hms_opt(hour.get().into(), minute.get().into(), 0))
            .ok_or(FuzzyDateError::InvalidCalendarDate {
                year:  year.get().into(),
                month: month.get().into(),
                day:   day.get().into(),
            })?;

        match tz.from_local_datetime(&local) {
            LocalResult::Single(timestamp) => Ok(Some(timestamp)),
            LocalResult::Ambiguous(earliest, _) => Ok(Some(earliest)),
            LocalResult::None => Err(FuzzyDateError::NonexistentLocalTime(
                local.to_string(),
                zone.to_string(),
            )),
        }
    }
}

impl TryFrom<NaiveDate> for FuzzyDate {
    type Error = FuzzyDateError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_date(date)
    }
}
