use std::sync::Arc;

use tracing::{debug, info};

use crate::store::holidaystore::HolidayStore;
use crate::time::eastercalculator::EASTER_YEAR_RANGE;

use super::holidayerror::HolidayError;
use super::holidayoccurrence::HolidayOccurrence;
use super::holidayruleset::HolidayRuleSet;

/// Expands the rule set over a range of years into a `HolidayStore`.
///
/// Runs as a single bulk write pass before read traffic starts. Re-running over
/// an overlapping range rewrites the same dates.
pub struct Materializer {
    rule_set: Arc<HolidayRuleSet>
}

impl Materializer {
    pub fn new(rule_set: Arc<HolidayRuleSet>) -> Materializer {
        Materializer { rule_set }
    }

    /// Saves one occurrence per rule and year in `from_year..=to_year`, rules in
    /// declaration order. Returns the number of occurrences saved; on a shared
    /// date the later rule replaces the earlier one in the store.
    pub fn materialize<S>(&self, store: &S, from_year: i32, to_year: i32) -> Result<usize, HolidayError> where
        S: HolidayStore + ?Sized {
        if from_year > to_year {
            return Err(HolidayError::InvalidYearRange { from: from_year, to: to_year });
        }
        for year in [from_year, to_year] {
            if !EASTER_YEAR_RANGE.contains(&year) {
                return Err(HolidayError::YearOutOfRange(year));
            }
        }

        info!(from_year, to_year, rules = self.rule_set.len(), "materializing holidays");
        let mut saved = 0usize;
        for year in from_year..=to_year {
            let mut occurrences = Vec::with_capacity(self.rule_set.len());
            for rule in self.rule_set.all() {
                let occurrence = HolidayOccurrence::new(Arc::clone(rule), year)
                    .ok_or(HolidayError::YearOutOfRange(year))?;
                occurrences.push(occurrence);
            }
            saved += occurrences.len();
            store.save_all(occurrences);
            debug!(year, "year materialized");
        }
        info!(saved, stored = store.len(), "materialization finished");
        Ok(saved)
    }
}
