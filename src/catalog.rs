//! Timezone name catalogs.
//!
//! A catalog answers two questions: which zones can be offered to a user, and
//! whether a given zone exists. Fuzzy dates consult one when validating their
//! zone component.

use std::collections::BTreeSet;

use chrono_tz::{TZ_VARIANTS, Tz};

use crate::types::is_zone_syntax;

/// Read-only source of IANA zone identifiers.
pub trait ZoneCatalog {
    /// All zone names this catalog offers, sorted.
    fn zone_names(&self) -> BTreeSet<String>;

    /// Whether `name` is a zone this catalog knows about.
    fn zone_exists(&self, name: &str) -> bool;
}

/// The zone database compiled into `chrono-tz`.
///
/// Only `Area/Location` names are listed, since those are the only zones a
/// fuzzy date can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tzdb;

impl Tzdb {
    /// Resolves `name` to a zone of the compiled database.
    pub fn resolve(name: &str) -> Option<Tz> {
        name.parse::<Tz>().ok()
    }
}

impl ZoneCatalog for Tzdb {
    fn zone_names(&self) -> BTreeSet<String> {
        TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| is_zone_syntax(name))
            .map(str::to_owned)
            .collect()
    }

    fn zone_exists(&self, name: &str) -> bool {
        Self::resolve(name).is_some()
    }
}

impl<C: ZoneCatalog + ?Sized> ZoneCatalog for &C {
    fn zone_names(&self) -> BTreeSet<String> {
        (**self).zone_names()
    }

    fn zone_exists(&self, name: &str) -> bool {
        (**self).zone_exists(name)
    }
}

impl ZoneCatalog for BTreeSet<String> {
    fn zone_names(&self) -> BTreeSet<String> {
        self.clone()
    }

    fn zone_exists(&self, name: &str) -> bool {
        self.contains(name)
    }
}
