use chrono::{Datelike, NaiveDate};

/// Date-generating rule of a holiday: at most one date per year.
///
/// Implementations must be pure for a fixed year. `Send + Sync` lets rules be
/// shared through `Arc` with concurrent readers.
pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()) == Some(*d)
    }
}
