//! The canonical text form.
//!
//! ```text
//! YYYY.MM.DD
//! YYYY.MM.DD HH:MM Area/Location
//! ```
//!
//! An absent month or day is written as `00`. Byte-wise comparison of two
//! encodings orders them chronologically, with less precise values first.
//!
//! Decoding is more lenient than encoding: any of `.`, `-` and `/` may
//! separate the date fields, the month and day may be left off entirely, and
//! the time block may be separated by any run of whitespace.

use crate::Parts;
use crate::components::Components;
use crate::consts::{CANONICAL_SEPARATOR, INPUT_SEPARATORS, PLACEHOLDER, TIME_SEPARATOR};
use crate::error::{FuzzyDateError, Result};
use crate::types::is_zone_syntax;

/// Writes the canonical encoding of `parts`.
pub(crate) fn encode(parts: &Parts) -> String {
    let (year, month, day) = parts.date_columns();
    let date = format!(
        "{year:04}{CANONICAL_SEPARATOR}{}{CANONICAL_SEPARATOR}{}",
        field(month),
        field(day)
    );
    match parts {
        Parts::Minute {
            hour, minute, zone, ..
        } => format!("{date} {hour}{TIME_SEPARATOR}{minute} {zone}"),
        _ => date,
    }
}

fn field(value: Option<u8>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_owned(), |v| format!("{v:02}"))
}

/// Splits text into raw components. Only the grammar is checked here; the
/// values themselves are validated when the components are built.
pub(crate) fn decode(text: &str) -> Result<Components> {
    let fields = split(text.trim())
        .ok_or_else(|| FuzzyDateError::MalformedInput(format!("{text:?} is not a fuzzy date")))?;

    let mut components = Components::new().y(fields.year);
    if let Some(month) = fields.month {
        components = components.m(month);
    }
    if let Some(day) = fields.day {
        components = components.d(day);
    }
    if let Some((hour, minute, zone)) = fields.time {
        components = components.hour(hour).minute(minute).tz(zone);
    }
    Ok(components)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Fields<'a> {
    year:  &'a str,
    month: Option<&'a str>,
    day:   Option<&'a str>,
    time:  Option<(&'a str, &'a str, &'a str)>,
}

fn split(text: &str) -> Option<Fields<'_>> {
    let mut cursor = Cursor(text);
    let mut fields = Fields {
        year: cursor.digits(4)?,
        ..Fields::default()
    };
    if cursor.is_done() {
        return Some(fields);
    }

    cursor.separator()?;
    fields.month = Some(cursor.digits(2)?);
    if cursor.is_done() {
        return Some(fields);
    }

    cursor.separator()?;
    fields.day = Some(cursor.digits(2)?);
    if cursor.is_done() {
        return Some(fields);
    }

    // The time block only ever follows a day.
    cursor.whitespace()?;
    let hour = cursor.digits(2)?;
    cursor.literal(TIME_SEPARATOR)?;
    let minute = cursor.digits(2)?;
    cursor.whitespace()?;
    let zone = cursor.rest();
    if !is_zone_syntax(zone) {
        return None;
    }
    fields.time = Some((hour, minute, zone));
    Some(fields)
}

struct Cursor<'a>(&'a str);

impl<'a> Cursor<'a> {
    const fn is_done(&self) -> bool {
        self.0.is_empty()
    }

    const fn rest(&self) -> &'a str {
        self.0
    }

    fn digits(&mut self, count: usize) -> Option<&'a str> {
        let taken = self.0.get(..count)?;
        if !taken.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0 = &self.0[count..];
        Some(taken)
    }

    fn literal(&mut self, expected: char) -> Option<()> {
        self.0 = self.0.strip_prefix(expected)?;
        Some(())
    }

    fn separator(&mut self) -> Option<()> {
        self.0 = self.0.strip_prefix(INPUT_SEPARATORS)?;
        Some(())
    }

    fn whitespace(&mut self) -> Option<()> {
        let trimmed = self.0.trim_start();
        if trimmed.len() == self.0.len() {
            return None;
        }
        self.0 = trimmed;
        Some(())
    }
}
