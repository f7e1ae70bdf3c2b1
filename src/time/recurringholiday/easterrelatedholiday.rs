use std::sync::Arc;

use chrono::NaiveDate;

use super::super::eastercalculator::EasterCalculator;
use super::recurringholiday::RecurringHoliday;

/// Movable feast at a fixed distance from Western Easter Sunday.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    easter_calculator: Arc<EasterCalculator>,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(easter_calculator: Arc<EasterCalculator>, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            easter_calculator,
            shift_days
        }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        self.easter_calculator.easter_offset(year, self.shift_days)
    }
}
