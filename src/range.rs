use chrono::NaiveDate;

use crate::consts::{DECEMBER, JANUARY, MIN_DAY};
use crate::types::{Day, Month, Year, days_in_month};
use crate::{FuzzyDate, Parts};

/// The inclusive span of exact dates a fuzzy date could stand for.
///
/// Both bounds are day-precision values without a time, so they compare
/// directly against other exact dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuzzyDateRange {
    start: FuzzyDate,
    end:   FuzzyDate,
}

impl FuzzyDateRange {
    /// Returns the start date of the range
    pub const fn start(&self) -> &FuzzyDate {
        &self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> &FuzzyDate {
        &self.end
    }

    /// Returns both start and end dates as a tuple
    pub fn into_dates(self) -> (FuzzyDate, FuzzyDate) {
        (self.start, self.end)
    }

    /// Checks whether every day `date` could stand for falls inside this range.
    /// Times are ignored; only calendar days are compared.
    pub fn contains(&self, date: &FuzzyDate) -> bool {
        date.range()
            .is_some_and(|other| self.start <= other.start && other.end <= self.end)
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}

impl FuzzyDate {
    /// Earliest calendar day this value could stand for.
    pub fn lower_bound(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.parts()?.date_columns();
        NaiveDate::from_ymd_opt(
            year.into(),
            month.unwrap_or(JANUARY).into(),
            day.unwrap_or(MIN_DAY).into(),
        )
    }

    /// Latest calendar day this value could stand for (inclusive).
    pub fn upper_bound_inclusive(&self) -> Option<NaiveDate> {
        let parts = self.parts()?;
        let year = parts.year();
        let month = match parts.month() {
            Some(month) => month,
            None => Month::new(DECEMBER).ok()?,
        };
        let day = match parts.day() {
            Some(day) => day,
            None => last_day(year, month)?,
        };
        NaiveDate::from_ymd_opt(year.get().into(), month.get().into(), day.get().into())
    }

    /// Expands this value to the exact dates it could stand for.
    ///
    /// Returns `None` only for the empty value.
    pub fn range(&self) -> Option<FuzzyDateRange> {
        let parts = self.parts()?;
        let year = parts.year();
        let (start_month, start_day) = match (parts.month(), parts.day()) {
            (Some(month), Some(day)) => (month, day),
            (Some(month), None) => (month, first_day(year, month)?),
            (None, _) => {
                let month = Month::new(JANUARY).ok()?;
                (month, first_day(year, month)?)
            },
        };
        let (end_month, end_day) = match (parts.month(), parts.day()) {
            (Some(month), Some(day)) => (month, day),
            (Some(month), None) => (month, last_day(year, month)?),
            (None, _) => {
                let month = Month::new(DECEMBER).ok()?;
                (month, last_day(year, month)?)
            },
        };

        Some(FuzzyDateRange {
            start: exact(year, start_month, start_day),
            end:   exact(year, end_month, end_day),
        })
    }
}

fn first_day(year: Year, month: Month) -> Option<Day> {
    Day::new(MIN_DAY, year.get(), month).ok()
}

fn last_day(year: Year, month: Month) -> Option<Day> {
    Day::new(days_in_month(year.get(), month), year.get(), month).ok()
}

fn exact(year: Year, month: Month, day: Day) -> FuzzyDate {
    FuzzyDate::from_parts(Some(Parts::Day { year, month, day }))
}
