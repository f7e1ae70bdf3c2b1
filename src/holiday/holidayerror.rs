use thiserror::Error;

use crate::manager::managererror::ManagerError;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("cannot parse date '{input}': {source}")]
    DateParse {
        input: String,
        source: chrono::ParseError
    },
    #[error("date '{input}' does not match '{format}' exactly")]
    NonCanonicalDate {
        input: String,
        format: String
    },
    #[error("unknown jurisdiction '{0}'")]
    UnknownJurisdiction(String),
    #[error("no holiday dates can be derived for year {0}")]
    YearOutOfRange(i32),
    #[error("invalid year range {from}..={to}")]
    InvalidYearRange {
        from: i32,
        to: i32
    },
    #[error(transparent)]
    Manager(#[from] ManagerError)
}
