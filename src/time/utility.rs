use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holiday::holidayerror::HolidayError;

/// Date text format used at every boundary: `dd.mm.yyyy`.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Shifts `d` by a signed number of days, `None` on calendar overflow.
pub fn shift_days(d: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        d.checked_add_days(Days::new(n as u64))
    } else {
        d.checked_sub_days(Days::new(n.unsigned_abs()))
    }
}

/// The closest `weekday` strictly before `d`.
pub fn previous_weekday(d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let days_back = (d.weekday().num_days_from_monday() as i64
                     - weekday.num_days_from_monday() as i64 + 7) % 7;
    // same weekday goes back a full week
    let days_back = if days_back == 0 { 7 } else { days_back };
    shift_days(d, -days_back)
}

/// Parses `text` with `format` and accepts it only if formatting the date
/// back yields the same text, so unpadded fields, short or signed years and
/// surrounding whitespace are rejected.
pub fn parse_date(text: &str, format: &str) -> Result<NaiveDate, HolidayError> {
    let date = NaiveDate::parse_from_str(text, format).map_err(|source| HolidayError::DateParse {
        input: text.to_owned(),
        source
    })?;
    if date.format(format).to_string() != text {
        return Err(HolidayError::NonCanonicalDate {
            input: text.to_owned(),
            format: format.to_owned()
        });
    }
    Ok(date)
}
