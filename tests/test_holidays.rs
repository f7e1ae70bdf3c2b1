//! End-to-end checks of the holiday engine over the historic 1970..=2100 horizon.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use std::thread;

use chrono::{Datelike, NaiveDate};

use holidayengine::configuration::Configuration;
use holidayengine::engine::HolidayEngine;
use holidayengine::holiday::holidayqueryengine::HolidayQuery;
use holidayengine::jurisdiction::jurisdiction::Jurisdiction;
use holidayengine::store::holidaystore::HolidayStore;
use holidayengine::store::inmemoryholidaystore::InMemoryHolidayStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn engine() -> &'static HolidayEngine<InMemoryHolidayStore> {
    static ENGINE: OnceLock<HolidayEngine<InMemoryHolidayStore>> = OnceLock::new();
    ENGINE.get_or_init(|| HolidayEngine::in_memory(Configuration::default()).unwrap())
}

// ─── Materialized horizon ─────────────────────────────────────────────────────

#[test]
fn every_year_of_the_horizon_is_populated() {
    let store = engine().query_engine().store();
    for year in 1970..=2100 {
        let found = store.find_by_date_range(date(year, 1, 1), date(year, 12, 31));
        assert_eq!(found.len(), 19, "{year}");
        let dates: HashSet<NaiveDate> = found.iter().map(|o| o.date()).collect();
        assert_eq!(dates.len(), found.len());
        assert!(found.iter().all(|o| o.date().year() == year));
    }
}

#[test]
fn nothing_outside_the_horizon() {
    let queries = engine().query_engine();
    assert!(!queries.is_holiday(date(1969, 12, 25), Jurisdiction::Bayern));
    assert!(!queries.is_holiday(date(2101, 1, 1), Jurisdiction::Bayern));
}

// ─── Reference queries ────────────────────────────────────────────────────────

#[test]
fn new_year_2020_in_every_state() {
    for jurisdiction in Jurisdiction::ALL {
        let found = engine().query_engine().get_holiday_str("01.01.2020", jurisdiction).unwrap();
        assert_eq!(found.map(|o| o.name()), Some("New Year"), "{jurisdiction}");
    }
}

#[test]
fn nrw_2022() {
    let found = engine().holidays_in("01.01.2022", "31.12.2022", "NW").unwrap();
    let names: Vec<&str> = found.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec![
        "New Year",
        "Good Friday",
        "Easter Monday",
        "Labour Day",
        "Ascension Day",
        "Whit Monday",
        "Corpus Christi",
        "Day of German Unity",
        "All Saints' Day",
        "Christmas Eve",
        "1st Christmas Day",
        "2nd Christmas Day",
        "2nd Christmas Day"
    ]);
}

#[test]
fn regional_holidays_2022() {
    let queries = engine().query_engine();
    assert!(queries.is_holiday(date(2022, 3, 8), Jurisdiction::Berlin));
    assert!(!queries.is_holiday(date(2022, 3, 8), Jurisdiction::Brandenburg));
    assert!(queries.is_holiday(date(2022, 9, 20), Jurisdiction::Thueringen));
    assert!(queries.is_holiday(date(2022, 8, 15), Jurisdiction::Saarland));
    assert!(!queries.is_holiday(date(2022, 8, 15), Jurisdiction::Bayern));
    assert!(queries.is_holiday(date(2022, 10, 31), Jurisdiction::Hamburg));
    assert!(!queries.is_holiday(date(2022, 10, 31), Jurisdiction::Hessen));
    assert!(queries.is_holiday(date(2022, 11, 16), Jurisdiction::Sachsen));
    assert!(!queries.is_holiday(date(2022, 11, 16), Jurisdiction::SachsenAnhalt));
}

#[test]
fn christmas_2022() {
    for jurisdiction in Jurisdiction::ALL {
        assert!(engine().query_engine().is_holiday(date(2022, 12, 25), jurisdiction));
        assert!(!engine().query_engine().is_holiday(date(2022, 12, 27), jurisdiction));
    }
}

#[test]
fn labour_day_2022_is_sunday_and_weekend() {
    let found = engine().holiday_in("01.05.2022", "nw").unwrap().unwrap();
    assert_eq!(found.name(), "Labour Day");
    assert!(found.is_sunday());
    assert!(found.is_weekend());
}

#[test]
fn ascension_day_is_forty_days_after_easter() {
    let found = engine().holiday_in("27.05.2022", "BY").unwrap().unwrap();
    assert_eq!(found.name(), "Ascension Day");
    assert!(engine().holiday_in("26.05.2022", "BY").unwrap().is_none());

    // Easter 2008 was on March 23
    assert_eq!(engine().holiday_in("01.05.2008", "BY").unwrap().unwrap().name(), "Labour Day");
    assert_eq!(engine().holiday_in("02.05.2008", "BY").unwrap().unwrap().name(), "Ascension Day");
}

#[test]
fn malformed_date_text_is_an_error() {
    for text in ["1.1.2022", "1.01.2022", "01.01.22", "01.01.+2022", " 01.01.2020 "] {
        assert!(engine().holiday_in(text, "BY").is_err(), "{text}");
        assert!(engine().holidays_in(text, "31.12.2022", "BY").is_err(), "{text}");
    }
    assert!(engine().holiday_in("01.01.2022", "BY").unwrap().is_some());
}

#[test]
fn json_record() {
    let found = engine().holiday_in("25.12.2022", "by").unwrap().unwrap();
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["date"], "2022-12-25");
    assert_eq!(json["name"], "1st Christmas Day");
    assert_eq!(json["sunday"], true);
    assert_eq!(json["jurisdictions"].as_array().map(|a| a.len()), Some(16));
}

// ─── Concurrent reads ─────────────────────────────────────────────────────────

#[test]
fn concurrent_queries_agree() {
    let engine = engine();
    let expected = engine.holidays_in("01.01.1970", "31.12.2100", "SN").unwrap().len();
    thread::scope(|scope| {
        let handles: Vec<_> = Jurisdiction::ALL
            .into_iter()
            .map(|jurisdiction| scope.spawn(move || {
                let all = engine.query_engine().get_holidays(date(1970, 1, 1), date(2100, 12, 31), jurisdiction);
                (jurisdiction, all.len())
            }))
            .collect();
        for handle in handles {
            let (jurisdiction, count) = handle.join().unwrap();
            assert!(count > 0);
            if jurisdiction == Jurisdiction::Sachsen {
                assert_eq!(count, expected);
            }
        }
    });
}

#[test]
fn rematerializing_while_reading_keeps_one_occurrence_per_date() {
    let store = Arc::new(InMemoryHolidayStore::new());
    let engine = HolidayEngine::initialize(
        Configuration::new().with_year_range(2022, 2022),
        Arc::clone(&store)).unwrap();
    let materializer = holidayengine::holiday::materializer::Materializer::new(Arc::clone(engine.rule_set()));
    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..10 {
                materializer.materialize(store.as_ref(), 2022, 2022).unwrap();
            }
        });
        scope.spawn(|| {
            for _ in 0..10 {
                let found = engine.query_engine().get_holidays(date(2022, 1, 1), date(2022, 12, 31), Jurisdiction::Berlin);
                assert_eq!(found.len(), 12);
            }
        });
    });
    assert_eq!(store.len(), 19);
}
