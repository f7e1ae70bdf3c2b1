use chrono::{NaiveDate, Weekday};

use super::super::utility::{previous_weekday, shift_days};
use super::recurringholiday::RecurringHoliday;

/// Day of Repentance and Prayer.
///
/// Counted back from Christmas: the 4th Advent Sunday is the last Sunday
/// strictly before Dec 25, four weeks before it lies the last Sunday of the
/// church year, and the holiday is the Wednesday before that Sunday.
#[derive(Clone, Copy, Debug, Default)]
pub struct RepentanceDayHoliday;

impl RepentanceDayHoliday {
    pub fn last_sunday_of_church_year(year: i32) -> Option<NaiveDate> {
        let christmas = NaiveDate::from_ymd_opt(year, 12, 25)?;
        let fourth_advent = previous_weekday(christmas, Weekday::Sun)?;
        shift_days(fourth_advent, -28)
    }
}

impl RecurringHoliday for RepentanceDayHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        previous_weekday(Self::last_sunday_of_church_year(year)?, Weekday::Wed)
    }
}
