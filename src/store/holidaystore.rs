use chrono::NaiveDate;

use crate::holiday::holidayoccurrence::HolidayOccurrence;

/// Persistence of materialized occurrences, keyed by date.
///
/// The store knows nothing about jurisdictions. `save` is an upsert: saving an
/// occurrence whose date is already stored replaces the previous one.
pub trait HolidayStore: Send + Sync {
    fn save(&self, occurrence: HolidayOccurrence);

    fn find_by_date(&self, date: NaiveDate) -> Option<HolidayOccurrence>;

    /// Occurrences with `from <= date <= to`, date ascending.
    fn find_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<HolidayOccurrence>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn save_all(&self, occurrences: Vec<HolidayOccurrence>) {
        for occurrence in occurrences {
            self.save(occurrence);
        }
    }
}
