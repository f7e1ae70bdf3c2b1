use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::trace;

/// Years for which Gauss's method yields the Gregorian Easter date.
pub const EASTER_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1583..=4099;

/// Western Easter Sunday by Gauss's method, memoized per year.
///
/// Every movable feast asks for the same year repeatedly while a horizon is
/// materialized, so the result is cached. A cached year is never recomputed or
/// replaced: the first write wins.
pub struct EasterCalculator {
    cache: RwLock<HashMap<i32, NaiveDate>>
}

impl EasterCalculator {
    pub fn new() -> EasterCalculator {
        EasterCalculator { cache: RwLock::new(HashMap::new()) }
    }

    /// Easter Sunday of `year`, `None` outside `EASTER_YEAR_RANGE`.
    pub fn easter_sunday(&self, year: i32) -> Option<NaiveDate> {
        if let Some(&easter) = self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year) {
            return Some(easter);
        }

        trace!(year, "easter cache miss");
        let easter = Self::compute(year)?;
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Some(*cache.entry(year).or_insert(easter))
    }

    /// Easter Sunday of `year` shifted by `offset_days`.
    pub fn easter_offset(&self, year: i32, offset_days: i64) -> Option<NaiveDate> {
        self.easter_sunday(year)
            .and_then(|easter| super::utility::shift_days(easter, offset_days))
    }

    pub fn cached_years(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn compute(year: i32) -> Option<NaiveDate> {
        if !EASTER_YEAR_RANGE.contains(&year) {
            return None;
        }

        let a = year % 19;
        let b = year % 4;
        let c = year % 7;
        let k = year / 100;
        let p = (8 * k + 13) / 25;
        let q = k / 4;
        let m = (15 + k - p - q) % 30;
        let d = (19 * a + m) % 30;
        let n = (4 + k - q) % 7;
        let e = (2 * b + 4 * c + 6 * d + n) % 7;
        let mut day = 22 + d + e;

        if d == 29 && e == 6 {
            day = 50;
        } else if d == 28 && e == 6 && a > 10 {
            day = 49;
        }

        // `day` counts days of March, 32 being April 1
        let first_of_march = NaiveDate::from_ymd_opt(year, 3, 1)?;
        super::utility::shift_days(first_of_march, (day - 1) as i64)
    }
}

impl Default for EasterCalculator {
    fn default() -> Self {
        EasterCalculator::new()
    }
}
