use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::jurisdiction::jurisdiction::Jurisdiction;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// A named holiday: how its date is derived for a year and where it applies.
///
/// `key` identifies the rule; `name` is for display and may be shared by
/// several rules.
pub struct HolidayRule {
    key: &'static str,
    name: &'static str,
    recurring_holiday: Arc<dyn RecurringHoliday>,
    jurisdictions: BTreeSet<Jurisdiction>
}

impl HolidayRule {
    pub fn new<I>(key: &'static str,
                  name: &'static str,
                  recurring_holiday: Arc<dyn RecurringHoliday>,
                  jurisdictions: I) -> HolidayRule where
        I: IntoIterator<Item = Jurisdiction> {
        HolidayRule {
            key,
            name,
            recurring_holiday,
            jurisdictions: jurisdictions.into_iter().collect()
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn date_for(&self, year: i32) -> Option<NaiveDate> {
        self.recurring_holiday.get_holiday(year)
    }

    pub fn applies_to(&self, jurisdiction: Jurisdiction) -> bool {
        self.jurisdictions.contains(&jurisdiction)
    }

    pub fn jurisdictions(&self) -> &BTreeSet<Jurisdiction> {
        &self.jurisdictions
    }

    pub fn is_nationwide(&self) -> bool {
        Jurisdiction::ALL.iter().all(|j| self.jurisdictions.contains(j))
    }
}

impl fmt::Debug for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayRule")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("jurisdictions", &self.jurisdictions)
            .finish()
    }
}
