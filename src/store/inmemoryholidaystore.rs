use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;

use crate::holiday::holidayoccurrence::HolidayOccurrence;

use super::holidaystore::HolidayStore;

/// `HolidayStore` held in a date-ordered map behind a `RwLock`.
///
/// Writers and readers of the same date are serialized by the lock, so a
/// re-run of the materializer while queries are served stays consistent.
pub struct InMemoryHolidayStore {
    occurrences: RwLock<BTreeMap<NaiveDate, HolidayOccurrence>>
}

impl InMemoryHolidayStore {
    pub fn new() -> InMemoryHolidayStore {
        InMemoryHolidayStore { occurrences: RwLock::new(BTreeMap::new()) }
    }
}

impl Default for InMemoryHolidayStore {
    fn default() -> Self {
        InMemoryHolidayStore::new()
    }
}

impl HolidayStore for InMemoryHolidayStore {
    fn save(&self, occurrence: HolidayOccurrence) {
        self.occurrences
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(occurrence.date(), occurrence);
    }

    fn find_by_date(&self, date: NaiveDate) -> Option<HolidayOccurrence> {
        self.occurrences
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&date)
            .cloned()
    }

    fn find_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<HolidayOccurrence> {
        // BTreeMap::range panics on reversed bounds
        if from > to {
            return Vec::new();
        }
        self.occurrences
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .range(from..=to)
            .map(|(_, occurrence)| occurrence.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.occurrences.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn save_all(&self, occurrences: Vec<HolidayOccurrence>) {
        let mut map = self.occurrences.write().unwrap_or_else(PoisonError::into_inner);
        for occurrence in occurrences {
            map.insert(occurrence.date(), occurrence);
        }
    }
}
