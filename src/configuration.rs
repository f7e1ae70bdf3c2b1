use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::holiday::holidayerror::HolidayError;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::eastercalculator::EASTER_YEAR_RANGE;
use crate::time::utility::DEFAULT_DATE_FORMAT;

const DEFAULT_START_YEAR: i32 = 1970;
const DEFAULT_END_YEAR: i32 = 2100;

fn default_start_year() -> i32 {
    DEFAULT_START_YEAR
}

fn default_end_year() -> i32 {
    DEFAULT_END_YEAR
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

/// Settings of the holiday engine, read from a JSON document.
///
/// Every field is optional:
///
/// ```json
/// { "start_year": 1970, "end_year": 2100, "date_format": "%d.%m.%Y" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_start_year")]
    start_year: i32,
    #[serde(default = "default_end_year")]
    end_year: i32,
    #[serde(default = "default_date_format")]
    date_format: String
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            date_format: default_date_format()
        }
    }

    pub fn with_year_range(mut self, start_year: i32, end_year: i32) -> Configuration {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Configuration {
        self.date_format = date_format.into();
        self
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json(json_value)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        parse_json_value(json_value)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn validate(&self) -> Result<(), HolidayError> {
        if self.start_year > self.end_year {
            return Err(HolidayError::InvalidYearRange { from: self.start_year, to: self.end_year });
        }
        for year in [self.start_year, self.end_year] {
            if !EASTER_YEAR_RANGE.contains(&year) {
                return Err(HolidayError::YearOutOfRange(year));
            }
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
