//! Splitting a fuzzy date into separately editable fields and back.
//!
//! The three date fields come first, in the configured [`FieldOrder`](crate::FieldOrder),
//! followed by an `HH:MM` time and a zone name.

use crate::components::Components;
use crate::consts::TIME_SEPARATOR;
use crate::display::{DisplayConfig, Field};
use crate::error::{FuzzyDateError, Result};
use crate::FuzzyDate;

/// Raw field contents as a user would edit them. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableFields {
    /// Date fields in display order.
    pub date:     [String; 3],
    /// `HH:MM`, or empty.
    pub time:     String,
    /// Zone identifier, or empty.
    pub timezone: String,
}

impl EditableFields {
    /// The date field holding `field` under `config`'s order.
    pub fn get(&self, field: Field, config: &DisplayConfig) -> &str {
        &self.date[config.field_order.position(field)]
    }
}

/// Splits `date` into fields ordered by `config`.
pub fn decompose(date: &FuzzyDate, config: &DisplayConfig) -> EditableFields {
    let columns = date.as_list();
    let text = |field: Field| {
        columns[field.index()]
            .map(|value| value.to_string())
            .unwrap_or_default()
    };
    let time = match (date.hour(), date.minute()) {
        (Some(hour), Some(minute)) => format!("{hour:02}{TIME_SEPARATOR}{minute:02}"),
        _ => String::new(),
    };

    EditableFields {
        date: config.field_order.fields().map(text),
        time,
        timezone: date.timezone().unwrap_or_default().to_owned(),
    }
}

/// Rebuilds a date from edited fields.
///
/// The time is only used when both the time and the zone are filled in.
/// Leaving every field blank gives the empty value.
///
/// # Errors
/// `MalformedInput` for a time not shaped `HH:MM`, otherwise whatever the
/// components themselves break.
pub fn compose(fields: &EditableFields, config: &DisplayConfig) -> Result<FuzzyDate> {
    let mut components = Components::new()
        .y(fields.get(Field::Year, config))
        .m(fields.get(Field::Month, config))
        .d(fields.get(Field::Day, config));

    let time = fields.time.trim();
    let timezone = fields.timezone.trim();
    if !time.is_empty() && !timezone.is_empty() {
        let (hour, minute) = time.split_once(TIME_SEPARATOR).ok_or_else(|| {
            FuzzyDateError::MalformedInput(format!("time {time:?} is not HH:MM"))
        })?;
        components = components.hour(hour).minute(minute).tz(timezone);
    }

    FuzzyDate::from_components(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, fuzzy_month};

    fn fields(date: [&str; 3], time: &str, timezone: &str) -> EditableFields {
        EditableFields {
            date:     date.map(str::to_owned),
            time:     time.to_owned(),
            timezone: timezone.to_owned(),
        }
    }

    #[test]
    fn test_decompose_follows_field_order() {
        let config = DisplayConfig::default();
        let value = date("2020.05.07 09:05 America/Chicago");
        assert_eq!(
            decompose(&value, &config),
            fields(["5", "7", "2020"], "09:05", "America/Chicago")
        );

        let config = DisplayConfig::new("ymd", "-", false).unwrap();
        assert_eq!(decompose(&fuzzy_month(2020, 5), &config), fields(["2020", "5", ""], "", ""));
    }

    #[test]
    fn test_decompose_empty() {
        let config = DisplayConfig::default();
        assert_eq!(decompose(&FuzzyDate::empty(), &config), EditableFields::default());
    }

    #[test]
    fn test_compose() {
        let config = DisplayConfig::new("dmy", ".", false).unwrap();
        let value = compose(&fields(["07", "05", "2020"], "09:05", "America/Chicago"), &config).unwrap();
        assert_eq!(value.as_str(), "2020.05.07 09:05 America/Chicago");

        let value = compose(&fields(["", "05", "2020"], "", ""), &config).unwrap();
        assert_eq!(value, fuzzy_month(2020, 5));
    }

    #[test]
    fn test_compose_ignores_time_without_zone() {
        let config = DisplayConfig::default();
        let value = compose(&fields(["5", "7", "2020"], "09:05", ""), &config).unwrap();
        assert_eq!(value.as_str(), "2020.05.07");
    }

    #[test]
    fn test_compose_blank_is_empty() {
        let config = DisplayConfig::default();
        assert!(compose(&EditableFields::default(), &config).unwrap().is_empty());
    }

    #[test]
    fn test_compose_errors() {
        let config = DisplayConfig::default();
        assert!(matches!(
            compose(&fields(["5", "7", ""], "", ""), &config),
            Err(FuzzyDateError::IncompleteComponents(_))
        ));
        assert!(matches!(
            compose(&fields(["5", "7", "2020"], "0905", "America/Chicago"), &config),
            Err(FuzzyDateError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_decompose_compose_round_trip() {
        let config = DisplayConfig::new("ydm", "/", true).unwrap();
        for input in ["2020", "2020.02", "2020.02.29", "2020.02.29 23:59 Asia/Tokyo"] {
            let value = date(input);
            assert_eq!(compose(&decompose(&value, &config), &config).unwrap(), value);
        }
    }
}
