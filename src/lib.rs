//! Partial, sortable calendar dates.
//!
//! A [`FuzzyDate`] holds a year, optionally a month, optionally a day, and,
//! when the day is known, optionally a time of day with an IANA zone. Every
//! value has a canonical text encoding (`YYYY.MM.DD[ HH:MM Area/Location]`,
//! with `00` standing in for an unknown month or day) whose plain string
//! ordering is also its chronological ordering, so fuzzy and exact dates can be
//! stored and range-queried side by side.
//!
//! ```
//! use fuzzy_dates::FuzzyDate;
//!
//! let year: FuzzyDate = "2020".parse().unwrap();
//! let month: FuzzyDate = "2020-02".parse().unwrap();
//! let day: FuzzyDate = "2020/02/29".parse().unwrap();
//!
//! assert_eq!(month.as_str(), "2020.02.00");
//! assert!(year < month && month < day);
//!
//! let range = month.range().unwrap();
//! assert_eq!(range.end().as_str(), "2020.02.29");
//! ```

#[macro_use]
mod logging;

mod catalog;
mod codec;
mod components;
mod consts;
mod convert;
mod display;
mod error;
pub mod fields;
mod prelude;
mod range;
pub mod storage;
mod types;

#[cfg(test)]
mod test_utils;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

pub use catalog::{Tzdb, ZoneCatalog};
pub use components::{ComponentValue, Components, FIELD_NAMES};
pub use consts::*;
pub use convert::NamedZone;
pub use display::{ConfigError, DisplayConfig, Field, FieldOrder, FormattedDate, Separator};
pub use error::{FuzzyDateError, Result};
pub use range::FuzzyDateRange;
pub use types::{Day, Hour, Minute, Month, Year, ZoneName, days_in_month, is_leap_year};

use crate::prelude::*;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// How much of a date a value specifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Precision {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "minute")]
    Minute,
}

/// The validated components of a non-empty value, one variant per precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Parts {
    Year {
        year: Year,
    },
    Month {
        year:  Year,
        month: Month,
    },
    Day {
        year:  Year,
        month: Month,
        day:   Day,
    },
    Minute {
        year:   Year,
        month:  Month,
        day:    Day,
        hour:   Hour,
        minute: Minute,
        zone:   ZoneName,
    },
}

impl Parts {
    pub(crate) const fn year(&self) -> Year {
        match self {
            Self::Year { year }
            | Self::Month { year, .. }
            | Self::Day { year, .. }
            | Self::Minute { year, .. } => *year,
        }
    }

    pub(crate) const fn month(&self) -> Option<Month> {
        match self {
            Self::Year { .. } => None,
            Self::Month { month, .. } | Self::Day { month, .. } | Self::Minute { month, .. } => {
                Some(*month)
            },
        }
    }

    pub(crate) const fn day(&self) -> Option<Day> {
        match self {
            Self::Year { .. } | Self::Month { .. } => None,
            Self::Day { day, .. } | Self::Minute { day, .. } => Some(*day),
        }
    }

    /// (year, month, day) as plain numbers.
    pub(crate) const fn date_columns(&self) -> (u16, Option<u8>, Option<u8>) {
        let month = match self.month() {
            Some(month) => Some(month.get()),
            None => None,
        };
        let day = match self.day() {
            Some(day) => Some(day.get()),
            None => None,
        };
        (self.year().get(), month, day)
    }

    const fn precision(&self) -> Precision {
        match self {
            Self::Year { .. } => Precision::Year,
            Self::Month { .. } => Precision::Month,
            Self::Day { .. } => Precision::Day,
            Self::Minute { .. } => Precision::Minute,
        }
    }
}

/// A date with varying levels of precision.
///
/// Values are immutable. Equality, hashing and ordering are all defined by the
/// canonical encoding returned from [`as_str`](Self::as_str). The empty value
/// (see [`FuzzyDate::empty`]) encodes as `""` and stands in for "no date".
#[derive(Debug, Clone, Default)]
pub struct FuzzyDate {
    parts:     Option<Parts>,
    canonical: String,
}

impl FuzzyDate {
    pub(crate) fn from_parts(parts: Option<Parts>) -> Self {
        let canonical = parts.as_ref().map(codec::encode).unwrap_or_default();
        trace!("constructed fuzzy date {canonical:?}");
        Self { parts, canonical }
    }

    /// The empty placeholder: no components at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses `YYYY`, `YYYY.MM`, `YYYY.MM.DD` or `YYYY.MM.DD HH:MM Area/Location`.
    ///
    /// Any of `.`, `-` or `/` may separate the date fields; surrounding
    /// whitespace is ignored. A `00` month or day means the field is unknown.
    ///
    /// # Errors
    /// `MalformedInput` if the text does not fit the grammar, otherwise any
    /// validation error the components trigger.
    pub fn from_text(text: &str) -> Result<Self> {
        let components = codec::decode(text).inspect_err(|_e| {
            debug!("rejecting fuzzy date text {text:?}: {_e}");
        })?;
        Self::from_components(components)
    }

    /// Builds a value from explicit components, checking zones against [`Tzdb`].
    ///
    /// # Errors
    /// Returns the first rule the components break.
    pub fn from_components(components: Components) -> Result<Self> {
        Self::from_components_in(components, &Tzdb)
    }

    /// Builds a value from explicit components, checking zones against `catalog`.
    ///
    /// # Errors
    /// Returns the first rule the components break.
    pub fn from_components_in(components: Components, catalog: &impl ZoneCatalog) -> Result<Self> {
        components
            .validate(catalog)
            .inspect_err(|_e| {
                debug!("rejecting fuzzy date components: {_e}");
            })
            .map(Self::from_parts)
    }

    /// Builds a value from loosely typed JSON.
    ///
    /// A string takes the text path, an object the component path, and
    /// `null` gives the empty value. An object may instead carry a single
    /// `"text"` key.
    ///
    /// # Errors
    /// `TypeMismatch` for any other JSON type; `ConflictingArguments` when an
    /// object mixes `"text"` with components or uses unknown keys.
    pub fn from_seed(seed: &Value) -> Result<Self> {
        match seed {
            Value::Null => Ok(Self::empty()),
            Value::String(text) => Self::from_text(text),
            Value::Object(object) => match object.get("text") {
                Some(Value::String(text)) if object.len() == 1 => Self::from_text(text),
                Some(Value::String(_)) => Err(FuzzyDateError::ConflictingArguments(
                    "\"text\" cannot be combined with other components".to_owned(),
                )),
                Some(_) => Err(FuzzyDateError::TypeMismatch("a non-string \"text\" value")),
                None => Self::from_components(Components::from_json(object)?),
            },
            Value::Bool(_) => Err(FuzzyDateError::TypeMismatch("a boolean")),
            Value::Number(_) => Err(FuzzyDateError::TypeMismatch("a number")),
            Value::Array(_) => Err(FuzzyDateError::TypeMismatch("an array")),
        }
    }

    /// The canonical encoding.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// True for the empty placeholder.
    pub const fn is_empty(&self) -> bool {
        self.parts.is_none()
    }

    /// Returns the year component (absent only for the empty value)
    pub fn year(&self) -> Option<u16> {
        self.parts.as_ref().map(|p| p.year().get())
    }

    /// Returns the month component if present
    pub fn month(&self) -> Option<u8> {
        self.parts.as_ref().and_then(Parts::month).map(Month::get)
    }

    /// Returns the day component if present
    pub fn day(&self) -> Option<u8> {
        self.parts.as_ref().and_then(Parts::day).map(Day::get)
    }

    pub fn hour(&self) -> Option<u8> {
        match &self.parts {
            Some(Parts::Minute { hour, .. }) => Some(hour.get()),
            _ => None,
        }
    }

    pub fn minute(&self) -> Option<u8> {
        match &self.parts {
            Some(Parts::Minute { minute, .. }) => Some(minute.get()),
            _ => None,
        }
    }

    /// Returns the zone identifier if a time is present
    pub fn timezone(&self) -> Option<&str> {
        match &self.parts {
            Some(Parts::Minute { zone, .. }) => Some(zone.as_str()),
            _ => None,
        }
    }

    /// (year, month, day), with `None` for absent fields.
    pub fn as_list(&self) -> [Option<u16>; 3] {
        [
            self.year(),
            self.month().map(u16::from),
            self.day().map(u16::from),
        ]
    }

    pub fn precision(&self) -> Option<Precision> {
        self.parts.as_ref().map(Parts::precision)
    }

    /// True when the day is unknown.
    pub fn is_fuzzy(&self) -> bool {
        self.day().is_none()
    }

    pub fn has_time(&self) -> bool {
        self.hour().is_some() && self.minute().is_some()
    }

    /// Date, time and zone are all present.
    pub fn has_full_datetime(&self) -> bool {
        !self.is_fuzzy() && self.has_time() && self.timezone().is_some()
    }

    pub(crate) const fn parts(&self) -> Option<&Parts> {
        self.parts.as_ref()
    }
}

impl PartialEq for FuzzyDate {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for FuzzyDate {}

impl Hash for FuzzyDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for FuzzyDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FuzzyDate {
    /// Plain byte-wise comparison of the canonical encodings.
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for FuzzyDate {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for FuzzyDate {
    type Err = FuzzyDateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl TryFrom<Components> for FuzzyDate {
    type Error = FuzzyDateError;

    fn try_from(components: Components) -> Result<Self> {
        Self::from_components(components)
    }
}

impl serde::Serialize for FuzzyDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> serde::Deserialize<'de> for FuzzyDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        storage::from_stored(Some(s.as_str())).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn exact_date() -> impl Strategy<Value = (u16, u8, u8)> {
        (1000u16..=9999, 1u8..=12)
            .prop_flat_map(|(y, m)| {
                let last = days_in_month(y, Month::new(m).unwrap());
                (Just(y), Just(m), 1..=last)
            })
    }

    fn any_components() -> impl Strategy<Value = Components> {
        let zones = prop::sample::select(vec!["America/Chicago", "Europe/London", "Asia/Tokyo", "Etc/UTC"]);
        (exact_date(), 0u8..4, 0u8..=23, 0u8..=59, zones).prop_map(|((y, m, d), precision, h, min, tz)| {
            match precision {
                0 => Components::new().y(y),
                1 => Components::new().y(y).m(m),
                2 => Components::new().y(y).m(m).d(d),
                _ => Components::new().y(y).m(m).d(d).hour(h).minute(min).tz(tz),
            }
        })
    }

    proptest! {
        #[test]
        fn round_trip(components in any_components()) {
            let value = FuzzyDate::from_components(components).unwrap();
            let decoded = FuzzyDate::from_text(value.as_str()).unwrap();
            prop_assert_eq!(&decoded, &value);
            prop_assert_eq!(decoded.as_str(), value.as_str());
            prop_assert_eq!(decoded.as_list(), value.as_list());
            prop_assert_eq!(decoded.timezone(), value.timezone());
        }

        #[test]
        fn precision_orders_shared_prefixes((y, m, d) in exact_date(), h in 0u8..=23, min in 0u8..=59) {
            let year = FuzzyDate::from_components(Components::new().y(y)).unwrap();
            let month = FuzzyDate::from_components(Components::new().y(y).m(m)).unwrap();
            let day = FuzzyDate::from_components(Components::new().y(y).m(m).d(d)).unwrap();
            let time = FuzzyDate::from_components(
                Components::new().y(y).m(m).d(d).hour(h).minute(min).tz("Etc/UTC"),
            )
            .unwrap();
            prop_assert!(year.as_str() < month.as_str());
            prop_assert!(month.as_str() < day.as_str());
            prop_assert!(day.as_str() < time.as_str());
        }

        #[test]
        fn encoding_order_is_chronological(a in exact_date(), b in exact_date()) {
            let left = FuzzyDate::from_components(Components::new().y(a.0).m(a.1).d(a.2)).unwrap();
            let right = FuzzyDate::from_components(Components::new().y(b.0).m(b.1).d(b.2)).unwrap();
            prop_assert_eq!(left.cmp(&right), a.cmp(&b));
        }

        #[test]
        fn years_outside_range_are_rejected(y in prop_oneof![i64::MIN..1000i64, 10_000i64..=i64::MAX]) {
            let result = FuzzyDate::from_components(Components::new().y(ComponentValue::Int(y)));
            let is_out_of_range = matches!(result, Err(FuzzyDateError::OutOfRange { component: "year", .. }));
            prop_assert!(is_out_of_range);
        }

        #[test]
        fn day_without_month_is_incomplete(y in 1000u16..=9999, d in 1u8..=31) {
            let result = FuzzyDate::from_components(Components::new().y(y).d(d));
            let is_incomplete = matches!(result, Err(FuzzyDateError::IncompleteComponents(_)));
            prop_assert!(is_incomplete);
        }

        #[test]
        fn partial_time_block_is_incomplete((y, m, d) in exact_date(), which in 0usize..3) {
            let base = Components::new().y(y).m(m).d(d);
            let components = match which {
                0 => base.hour(12),
                1 => base.minute(30),
                _ => base.tz("Etc/UTC"),
            };
            let result = FuzzyDate::from_components(components);
            let is_incomplete = matches!(result, Err(FuzzyDateError::IncompleteComponents(_)));
            prop_assert!(is_incomplete);
        }

        #[test]
        fn range_covers_every_matching_day((y, m, d) in exact_date(), with_month in any::<bool>()) {
            let fuzzy = if with_month {
                FuzzyDate::from_components(Components::new().y(y).m(m)).unwrap()
            } else {
                FuzzyDate::from_components(Components::new().y(y)).unwrap()
            };
            let exact = FuzzyDate::from_components(Components::new().y(y).m(m).d(d)).unwrap();
            let range = fuzzy.range().unwrap();
            prop_assert!(range.start() <= &exact);
            prop_assert!(&exact <= range.end());
            prop_assert!(range.contains(&exact));
        }
    }
}
