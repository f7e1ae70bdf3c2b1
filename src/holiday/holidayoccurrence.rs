use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::jurisdiction::jurisdiction::Jurisdiction;
use crate::time::utility::is_weekend;

use super::holidayrule::HolidayRule;

/// A holiday rule pinned to its date in one year.
///
/// Equality, hashing and ordering look at the date only: the store keeps one
/// occurrence per date, whatever rule produced it.
#[derive(Clone)]
pub struct HolidayOccurrence {
    date: NaiveDate,
    rule: Arc<HolidayRule>
}

impl HolidayOccurrence {
    /// `None` if the rule yields no date for `year`.
    pub fn new(rule: Arc<HolidayRule>, year: i32) -> Option<HolidayOccurrence> {
        let date = rule.date_for(year)?;
        Some(HolidayOccurrence { date, rule })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn rule(&self) -> &Arc<HolidayRule> {
        &self.rule
    }

    pub fn name(&self) -> &'static str {
        self.rule.name()
    }

    pub fn applies_to(&self, jurisdiction: Jurisdiction) -> bool {
        self.rule.applies_to(jurisdiction)
    }

    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }

    pub fn is_weekend(&self) -> bool {
        is_weekend(self.date)
    }
}

impl PartialEq for HolidayOccurrence {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for HolidayOccurrence {}

impl Hash for HolidayOccurrence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl PartialOrd for HolidayOccurrence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HolidayOccurrence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl fmt::Display for HolidayOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.rule.jurisdictions().iter().map(|j| j.code()).collect();
        write!(f, "{} ({}) in: [{}]", self.date, self.name(), codes.join(", "))
    }
}

impl fmt::Debug for HolidayOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayOccurrence")
            .field("date", &self.date)
            .field("rule", &self.rule.key())
            .finish()
    }
}

impl Serialize for HolidayOccurrence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        let mut state = serializer.serialize_struct("HolidayOccurrence", 5)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("sunday", &self.is_sunday())?;
        state.serialize_field("weekend", &self.is_weekend())?;
        state.serialize_field("jurisdictions", self.rule.jurisdictions())?;
        state.end()
    }
}
