//! Human-facing rendering of fuzzy dates.
//!
//! The canonical encoding is for storage; this module renders the same value
//! with a configurable field order and separator, leaving unknown fields out
//! instead of writing `00`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::FuzzyDate;
use crate::prelude::*;

/// A rejected display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field order must be a permutation of 'y', 'm' and 'd', got {0:?}")]
    InvalidFieldOrder(String),

    #[error("field separator must be one of '.', '-' or '/', got {0:?}")]
    UnsupportedSeparator(String),
}

/// One of the three date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "y")]
    Year,
    #[display(fmt = "m")]
    Month,
    #[display(fmt = "d")]
    Day,
}

impl Field {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            'y' => Some(Self::Year),
            'm' => Some(Self::Month),
            'd' => Some(Self::Day),
            _ => None,
        }
    }

    /// Position in [`FuzzyDate::as_list`].
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
        }
    }

    /// Hint text for an empty input box.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Year => "yyyy",
            Self::Month => "mm",
            Self::Day => "dd",
        }
    }

    /// Only the year must always be filled in.
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Year)
    }
}

/// The order the date fields are shown in; always a permutation of y, m, d.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldOrder([Field; 3]);

impl FieldOrder {
    /// # Errors
    /// Returns `ConfigError::InvalidFieldOrder` if a field repeats.
    pub fn new(fields: [Field; 3]) -> Result<Self, ConfigError> {
        let [a, b, c] = fields;
        if a == b || b == c || a == c {
            return Err(ConfigError::InvalidFieldOrder(
                fields.iter().map(ToString::to_string).collect(),
            ));
        }
        Ok(Self(fields))
    }

    pub const fn fields(self) -> [Field; 3] {
        self.0
    }

    /// Where `field` appears in this order.
    pub fn position(self, field: Field) -> usize {
        self.0.iter().position(|f| *f == field).unwrap_or(field.index())
    }
}

impl Default for FieldOrder {
    fn default() -> Self {
        Self([Field::Month, Field::Day, Field::Year])
    }
}

impl FromStr for FieldOrder {
    type Err = ConfigError;

    /// Parses strings such as `"ymd"` or `"DMY"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidFieldOrder(s.to_owned());
        let fields = s
            .to_ascii_lowercase()
            .chars()
            .map(Field::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        let fields: [Field; 3] = fields.try_into().map_err(|_| invalid())?;
        Self::new(fields).map_err(|_| invalid())
    }
}

impl TryFrom<String> for FieldOrder {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldOrder> for String {
    fn from(order: FieldOrder) -> Self {
        order.to_string()
    }
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|field| write!(f, "{field}"))
    }
}

/// Separator placed between displayed date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Separator {
    #[display(fmt = ".")]
    Dot,
    #[display(fmt = "-")]
    Dash,
    #[default]
    #[display(fmt = "/")]
    Slash,
}

impl Separator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
            Self::Slash => '/',
        }
    }
}

impl FromStr for Separator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(Self::Dot),
            "-" => Ok(Self::Dash),
            "/" => Ok(Self::Slash),
            other => Err(ConfigError::UnsupportedSeparator(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(separator: Separator) -> Self {
        separator.to_string()
    }
}

/// How dates are shown to people.
///
/// Build one at startup, either with [`DisplayConfig::new`] or by
/// deserializing it, and pass it to whatever renders dates. Invalid settings
/// are rejected here, not when a date is displayed.
///
/// ```
/// use fuzzy_dates::{DisplayConfig, FuzzyDate};
///
/// let config = DisplayConfig::new("dmy", ".", true).unwrap();
/// let date: FuzzyDate = "2020-05-07".parse().unwrap();
/// assert_eq!(date.display(&config).to_string(), "7.5.2020");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub field_order:        FieldOrder,
    pub field_separator:    Separator,
    pub trim_leading_zeros: bool,
}

impl DisplayConfig {
    /// # Errors
    /// Returns a `ConfigError` naming the first invalid setting.
    pub fn new(
        field_order: &str,
        field_separator: &str,
        trim_leading_zeros: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            field_order: field_order.parse()?,
            field_separator: field_separator.parse()?,
            trim_leading_zeros,
        })
    }
}

/// A [`FuzzyDate`] rendered with a [`DisplayConfig`]; see [`FuzzyDate::display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedDate<'a> {
    date:   &'a FuzzyDate,
    config: &'a DisplayConfig,
}

impl FuzzyDate {
    /// Renders the known date fields in the configured order, followed by
    /// `HH:MM Area/Location` when a time is present.
    pub const fn display<'a>(&'a self, config: &'a DisplayConfig) -> FormattedDate<'a> {
        FormattedDate { date: self, config }
    }
}

impl fmt::Display for FormattedDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.date.as_list();
        let present = self
            .config
            .field_order
            .fields()
            .into_iter()
            .filter_map(|field| columns[field.index()].map(|value| (field, value)));

        for (i, (field, value)) in present.enumerate() {
            if i > 0 {
                write!(f, "{}", self.config.field_separator)?;
            }
            match (self.config.trim_leading_zeros, field) {
                (true, _) => write!(f, "{value}")?,
                (false, Field::Year) => write!(f, "{value:04}")?,
                (false, _) => write!(f, "{value:02}")?,
            }
        }

        if let (Some(hour), Some(minute), Some(zone)) =
            (self.date.hour(), self.date.minute(), self.date.timezone())
        {
            write!(f, " {hour:02}:{minute:02} {zone}")?;
        }
        Ok(())
    }
}
