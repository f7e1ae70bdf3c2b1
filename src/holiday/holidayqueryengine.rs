use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::jurisdiction::jurisdiction::Jurisdiction;
use crate::store::holidaystore::HolidayStore;
use crate::time::utility::parse_date;

use super::holidayerror::HolidayError;
use super::holidayoccurrence::HolidayOccurrence;

/// Point and range queries for holidays in a jurisdiction.
///
/// A date that is no holiday and a date whose holiday does not apply in the
/// jurisdiction both answer `None`.
pub trait HolidayQuery {
    /// chrono pattern used by the text overloads.
    fn date_format(&self) -> &str;

    fn get_holiday(&self, date: NaiveDate, jurisdiction: Jurisdiction) -> Option<HolidayOccurrence>;

    /// Holidays in `from..=to` applying to `jurisdiction`, date ascending.
    fn get_holidays(&self, from: NaiveDate, to: NaiveDate, jurisdiction: Jurisdiction) -> Vec<HolidayOccurrence>;

    fn is_holiday(&self, date: NaiveDate, jurisdiction: Jurisdiction) -> bool {
        trace!(%date, %jurisdiction, "is holiday");
        self.get_holiday(date, jurisdiction).is_some()
    }

    fn get_holiday_str(&self, date: &str, jurisdiction: Jurisdiction) -> Result<Option<HolidayOccurrence>, HolidayError> {
        let date = parse_date(date, self.date_format())?;
        Ok(self.get_holiday(date, jurisdiction))
    }

    fn get_holidays_str(&self, from: &str, to: &str, jurisdiction: Jurisdiction) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        let from = parse_date(from, self.date_format())?;
        let to = parse_date(to, self.date_format())?;
        Ok(self.get_holidays(from, to, jurisdiction))
    }
}

/// `HolidayQuery` answered from a populated `HolidayStore`; applicability is
/// filtered after retrieval.
pub struct HolidayQueryEngine<S: HolidayStore + ?Sized> {
    store: Arc<S>,
    date_format: String
}

impl<S: HolidayStore + ?Sized> HolidayQueryEngine<S> {
    pub fn new(store: Arc<S>, date_format: impl Into<String>) -> HolidayQueryEngine<S> {
        HolidayQueryEngine {
            store,
            date_format: date_format.into()
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S: HolidayStore + ?Sized> HolidayQuery for HolidayQueryEngine<S> {
    fn date_format(&self) -> &str {
        &self.date_format
    }

    fn get_holiday(&self, date: NaiveDate, jurisdiction: Jurisdiction) -> Option<HolidayOccurrence> {
        let found = self.store
            .find_by_date(date)
            .filter(|occurrence| occurrence.applies_to(jurisdiction));
        debug!(%date, %jurisdiction, holiday = ?found.as_ref().map(|o| o.name()), "holiday lookup");
        found
    }

    fn get_holidays(&self, from: NaiveDate, to: NaiveDate, jurisdiction: Jurisdiction) -> Vec<HolidayOccurrence> {
        let found: Vec<HolidayOccurrence> = self.store
            .find_by_date_range(from, to)
            .into_iter()
            .filter(|occurrence| occurrence.applies_to(jurisdiction))
            .collect();
        debug!(%from, %to, %jurisdiction, count = found.len(), "holiday range lookup");
        found
    }
}
