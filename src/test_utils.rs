//! Shorthand constructors for tests.

use crate::{Components, FuzzyDate};

pub fn date(text: &str) -> FuzzyDate {
    FuzzyDate::from_text(text).unwrap_or_else(|e| panic!("{text:?} should parse: {e}"))
}

pub fn fuzzy_year(year: u16) -> FuzzyDate {
    build(Components::new().y(year))
}

pub fn fuzzy_month(year: u16, month: u8) -> FuzzyDate {
    build(Components::new().y(year).m(month))
}

pub fn fuzzy_day(year: u16, month: u8, day: u8) -> FuzzyDate {
    build(Components::new().y(year).m(month).d(day))
}

fn build(components: Components) -> FuzzyDate {
    FuzzyDate::from_components(components.clone())
        .unwrap_or_else(|e| panic!("{components:?} should be valid: {e}"))
}
