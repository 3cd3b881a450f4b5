//! Explicit components and the rules that turn them into a [`FuzzyDate`](crate::FuzzyDate).

use std::num::IntErrorKind;

use serde_json::{Map, Value};

use crate::Parts;
use crate::catalog::ZoneCatalog;
use crate::consts::{MAX_HOUR, MAX_MINUTE, MAX_YEAR, MIN_YEAR};
use crate::error::{FuzzyDateError, Result};
use crate::prelude::*;
use crate::types::{Hour, Minute, Year, ZoneName, calendar_date};

/// Field names accepted by [`Components::set`] and in JSON seeds.
pub const FIELD_NAMES: [&str; 6] = ["y", "m", "d", "hour", "minute", "tz"];

/// A single, not yet validated component.
///
/// Components arrive either as integers or as text; both are accepted and
/// coerced during validation. Empty text counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub enum ComponentValue {
    Int(i64),
    Text(String),
}

impl ComponentValue {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Integers too large for `i64` saturate, so range checks still report them as out of range.
    fn to_integer(&self, component: &'static str) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>().or_else(|e| match e.kind() {
                    IntErrorKind::PosOverflow => Ok(i64::MAX),
                    IntErrorKind::NegOverflow => Ok(i64::MIN),
                    _ => Err(FuzzyDateError::MalformedInput(format!(
                        "{component} {s:?} is not an integer"
                    ))),
                })
            },
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.trim().to_owned(),
        }
    }

    fn from_json(value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(Self::Text(s.clone()))),
            Value::Number(n) => n.as_i64().map(|n| Some(Self::Int(n))).ok_or_else(|| {
                debug!("rejecting non-integer component {n}");
                FuzzyDateError::TypeMismatch("a non-integer number")
            }),
            Value::Bool(_) => Err(FuzzyDateError::TypeMismatch("a boolean")),
            Value::Array(_) => Err(FuzzyDateError::TypeMismatch("an array")),
            Value::Object(_) => Err(FuzzyDateError::TypeMismatch("an object")),
        }
    }
}

impl From<&str> for ComponentValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ComponentValue {
                fn from(value: $ty) -> Self {
                    Self::Int(value.into())
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, i8, i16, i32);

/// The explicit named-component construction path.
///
/// Every field is optional; omitted fields are absent. A month or day of
/// zero is the placeholder and also means absent.
///
/// ```
/// use fuzzy_dates::{Components, FuzzyDate};
///
/// let date = FuzzyDate::from_components(Components::new().y(2020).m("05")).unwrap();
/// assert_eq!(date.as_str(), "2020.05.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    year:   Option<ComponentValue>,
    month:  Option<ComponentValue>,
    day:    Option<ComponentValue>,
    hour:   Option<ComponentValue>,
    minute: Option<ComponentValue>,
    tz:     Option<ComponentValue>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn y(mut self, value: impl Into<ComponentValue>) -> Self {
        self.year = Some(value.into());
        self
    }

    #[must_use]
    pub fn m(mut self, value: impl Into<ComponentValue>) -> Self {
        self.month = Some(value.into());
        self
    }

    #[must_use]
    pub fn d(mut self, value: impl Into<ComponentValue>) -> Self {
        self.day = Some(value.into());
        self
    }

    #[must_use]
    pub fn hour(mut self, value: impl Into<ComponentValue>) -> Self {
        self.hour = Some(value.into());
        self
    }

    #[must_use]
    pub fn minute(mut self, value: impl Into<ComponentValue>) -> Self {
        self.minute = Some(value.into());
        self
    }

    #[must_use]
    pub fn tz(mut self, value: impl Into<ComponentValue>) -> Self {
        self.tz = Some(value.into());
        self
    }

    /// Sets a component by name (`y`, `m`, `d`, `hour`, `minute` or `tz`).
    ///
    /// # Errors
    /// Returns `FuzzyDateError::ConflictingArguments` for any other name.
    pub fn set(mut self, field: &str, value: impl Into<ComponentValue>) -> Result<Self> {
        let slot = match field {
            "y" => &mut self.year,
            "m" => &mut self.month,
            "d" => &mut self.day,
            "hour" => &mut self.hour,
            "minute" => &mut self.minute,
            "tz" => &mut self.tz,
            other => return Err(unknown_field(other)),
        };
        *slot = Some(value.into());
        Ok(self)
    }

    /// Reads components from a JSON object keyed by field name.
    ///
    /// # Errors
    /// Unknown keys give `ConflictingArguments`; values that are not strings,
    /// integers or null give `TypeMismatch`.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self> {
        object.iter().try_fold(Self::new(), |components, (key, value)| {
            if !FIELD_NAMES.contains(&key.as_str()) {
                return Err(unknown_field(key));
            }
            match ComponentValue::from_json(value)? {
                Some(value) => components.set(key, value),
                None => Ok(components),
            }
        })
    }

    /// True when no component carries a value.
    pub fn is_blank(&self) -> bool {
        self.slots().iter().all(|slot| slot.is_none())
    }

    fn slots(&self) -> [&Option<ComponentValue>; 6] {
        [&self.year, &self.month, &self.day, &self.hour, &self.minute, &self.tz]
    }

    fn normalized(self) -> Self {
        let keep = |slot: Option<ComponentValue>| slot.filter(|v| !v.is_blank());
        Self {
            year:   keep(self.year),
            month:  keep(self.month),
            day:    keep(self.day),
            hour:   keep(self.hour),
            minute: keep(self.minute),
            tz:     keep(self.tz),
        }
    }

    /// Applies the validation rules in order, stopping at the first failure.
    ///
    /// `Ok(None)` is the empty placeholder.
    pub(crate) fn validate(self, catalog: &impl ZoneCatalog) -> Result<Option<Parts>> {
        let components = self.normalized();
        if components.is_blank() {
            return Ok(None);
        }
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            tz,
        } = components;

        let Some(year) = year else {
            return Err(FuzzyDateError::IncompleteComponents(
                "a year is required when any other component is given",
            ));
        };
        let year = year.to_integer("year")?;

        // Zero is the placeholder for an absent month or day.
        let month = placeholder_aware(month.as_ref(), "month")?;
        let day = placeholder_aware(day.as_ref(), "day")?;
        if day.is_some() && month.is_none() {
            return Err(FuzzyDateError::IncompleteComponents("a day requires a month"));
        }

        let year = u16::try_from(year)
            .ok()
            .and_then(|y| Year::new(y).ok())
            .ok_or(FuzzyDateError::OutOfRange {
                component: "year",
                value:     year,
                min:       MIN_YEAR.into(),
                max:       MAX_YEAR.into(),
            })?;

        // Substituting 1 for absent fields lets one calendar check cover every precision.
        let (checked_month, checked_day) =
            calendar_date(year.get(), month.unwrap_or(1), day.unwrap_or(1))?;

        let parts = match (month, day) {
            (None, _) => Parts::Year { year },
            (Some(_), None) => Parts::Month {
                year,
                month: checked_month,
            },
            (Some(_), Some(_)) => Parts::Day {
                year,
                month: checked_month,
                day: checked_day,
            },
        };

        if hour.is_none() && minute.is_none() && tz.is_none() {
            return Ok(Some(parts));
        }
        let (Some(hour), Some(minute), Some(tz)) = (hour, minute, tz) else {
            return Err(FuzzyDateError::IncompleteComponents(
                "hour, minute and timezone must be given together",
            ));
        };
        let Parts::Day { year, month, day } = parts else {
            return Err(FuzzyDateError::IncompleteComponents(
                "a time requires a year, month and day",
            ));
        };

        let hour = Hour::new(bounded(hour.to_integer("hour")?, "hour", MAX_HOUR)?)?;
        let minute = Minute::new(bounded(minute.to_integer("minute")?, "minute", MAX_MINUTE)?)?;
        let zone = ZoneName::new(&tz.to_text())?;
        if !catalog.zone_exists(zone.as_str()) {
            return Err(FuzzyDateError::InvalidTimezone(zone.into()));
        }

        Ok(Some(Parts::Minute {
            year,
            month,
            day,
            hour,
            minute,
            zone,
        }))
    }
}

fn unknown_field(name: &str) -> FuzzyDateError {
    FuzzyDateError::ConflictingArguments(format!(
        "unknown field {name:?} (expected one of {FIELD_NAMES:?})"
    ))
}

fn placeholder_aware(value: Option<&ComponentValue>, component: &'static str) -> Result<Option<i64>> {
    Ok(value
        .map(|v| v.to_integer(component))
        .transpose()?
        .filter(|n| *n != 0))
}

fn bounded(value: i64, component: &'static str, max: u8) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or(FuzzyDateError::OutOfRange {
            component,
            value,
            min: 0,
            max: max.into(),
        })
}
