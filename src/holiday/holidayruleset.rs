use std::sync::Arc;

use crate::jurisdiction::jurisdiction::Jurisdiction;
use crate::jurisdiction::jurisdiction::Jurisdiction::{
    BadenWuerttemberg,
    Bayern,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hessen,
    MecklenburgVorpommern,
    Niedersachsen,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
    Sachsen,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen
};
use crate::manager::manager::{FrozenManager, ManagerBuilder};
use crate::manager::managererror::ManagerError;
use crate::time::eastercalculator::EasterCalculator;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::repentancedayholiday::RepentanceDayHoliday;

use super::holidayrule::HolidayRule;

/// Ordered, read-only list of holiday rules with a lookup by rule key.
///
/// Declaration order is kept so materialization is deterministic.
pub struct HolidayRuleSet {
    rules: Vec<Arc<HolidayRule>>,
    by_key: FrozenManager<&'static str, Arc<HolidayRule>>
}

impl HolidayRuleSet {
    pub fn from_rules(rules: Vec<HolidayRule>) -> Result<HolidayRuleSet, ManagerError> {
        let rules: Vec<Arc<HolidayRule>> = rules.into_iter().map(Arc::new).collect();
        let mut by_key = ManagerBuilder::with_capacity(rules.len());
        for rule in rules.iter() {
            by_key.insert(rule.key(), Arc::clone(rule))?;
        }
        Ok(HolidayRuleSet {
            rules,
            by_key: by_key.freeze()
        })
    }

    /// The statutory public holidays of the German federal states.
    pub fn german(easter_calculator: Arc<EasterCalculator>) -> Result<HolidayRuleSet, ManagerError> {
        let fixed = |month: u32, day: u32| -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
            let holiday = FixedDateHoliday::new(month, day)
                .ok_or_else(|| ManagerError::InvalidDefinition(format!("{day}.{month} is not a calendar day")))?;
            let holiday: Arc<dyn RecurringHoliday> = Arc::new(holiday);
            Ok(holiday)
        };
        let easter = |shift_days: i64| -> Arc<dyn RecurringHoliday> {
            let holiday: Arc<dyn RecurringHoliday> =
                Arc::new(EasterRelatedHoliday::new(Arc::clone(&easter_calculator), shift_days));
            holiday
        };

        let rules = vec![
            HolidayRule::new("new_year", "New Year", fixed(1, 1)?, Jurisdiction::ALL),
            HolidayRule::new("all_saints", "All Saints' Day", fixed(11, 1)?,
                [BadenWuerttemberg, Bayern, NordrheinWestfalen, RheinlandPfalz, Saarland]),
            HolidayRule::new("womens_day", "International Women's Day", fixed(3, 8)?, [Berlin]),
            HolidayRule::new("childrens_day", "Children's Day", fixed(9, 20)?, [Thueringen]),
            HolidayRule::new("labour_day", "Labour Day", fixed(5, 1)?, Jurisdiction::ALL),
            HolidayRule::new("assumption_day", "Assumption Day", fixed(8, 15)?, [Saarland]),
            HolidayRule::new("epiphany", "Epiphany", fixed(1, 6)?, [Bayern, BadenWuerttemberg]),
            HolidayRule::new("german_unity_day", "Day of German Unity", fixed(10, 3)?, Jurisdiction::ALL),
            HolidayRule::new("reformation_day", "Reformation Day", fixed(10, 31)?,
                [Brandenburg, Bremen, Hamburg, MecklenburgVorpommern, Niedersachsen, Sachsen,
                 SachsenAnhalt, SchleswigHolstein, Thueringen]),
            HolidayRule::new("christmas_eve", "Christmas Eve", fixed(12, 24)?, Jurisdiction::ALL),
            HolidayRule::new("christmas_day_1", "1st Christmas Day", fixed(12, 25)?, Jurisdiction::ALL),
            HolidayRule::new("christmas_day_2", "2nd Christmas Day", fixed(12, 26)?, Jurisdiction::ALL),
            // shares its display name with the 2nd Christmas Day
            HolidayRule::new("new_years_eve", "2nd Christmas Day", fixed(12, 31)?, Jurisdiction::ALL),
            HolidayRule::new("good_friday", "Good Friday", easter(-2), Jurisdiction::ALL),
            HolidayRule::new("easter_monday", "Easter Monday", easter(1), Jurisdiction::ALL),
            HolidayRule::new("ascension_day", "Ascension Day", easter(40), Jurisdiction::ALL),
            HolidayRule::new("corpus_christi", "Corpus Christi", easter(60),
                [BadenWuerttemberg, Bayern, Hessen, NordrheinWestfalen, RheinlandPfalz, Saarland]),
            HolidayRule::new("whit_monday", "Whit Monday", easter(50), Jurisdiction::ALL),
            HolidayRule::new("repentance_day", "Day of Repentance and Prayer",
                Arc::new(RepentanceDayHoliday), [Sachsen])
        ];

        HolidayRuleSet::from_rules(rules)
    }

    pub fn all(&self) -> &[Arc<HolidayRule>] {
        &self.rules
    }

    pub fn by_key(&self, key: &str) -> Option<&Arc<HolidayRule>> {
        self.by_key.get(key)
    }

    pub fn applicable_to(&self, jurisdiction: Jurisdiction) -> impl Iterator<Item = &Arc<HolidayRule>> {
        self.rules.iter().filter(move |rule| rule.applies_to(jurisdiction))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use proptest::prelude::*;

    use super::*;

    fn german() -> HolidayRuleSet {
        HolidayRuleSet::german(Arc::new(EasterCalculator::new())).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn declaration_order_is_stable() {
        let rule_set = german();
        let keys: Vec<&str> = rule_set.all().iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), 19);
        assert_eq!(keys.first(), Some(&"new_year"));
        assert_eq!(keys.last(), Some(&"repentance_day"));
        assert_eq!(keys, german().all().iter().map(|r| r.key()).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_display_names_are_kept() {
        let rule_set = german();
        let second_christmas_day = rule_set.by_key("christmas_day_2").unwrap();
        let new_years_eve = rule_set.by_key("new_years_eve").unwrap();
        assert_eq!(second_christmas_day.name(), new_years_eve.name());
        assert_eq!(new_years_eve.date_for(2022), Some(date(2022, 12, 31)));
        assert_eq!(second_christmas_day.date_for(2022), Some(date(2022, 12, 26)));
    }

    #[test]
    fn duplicate_rule_keys_are_rejected() {
        let make = || HolidayRule::new(
            "labour_day",
            "Labour Day",
            Arc::new(FixedDateHoliday::new(5, 1).unwrap()),
            Jurisdiction::ALL);
        let result = HolidayRuleSet::from_rules(vec![make(), make()]);
        assert!(matches!(result, Err(ManagerError::DuplicateKey(ref key)) if key == "labour_day"));
    }

    #[test]
    fn movable_feasts_2022() {
        let rule_set = german();
        let date_of = |key: &str| rule_set.by_key(key).unwrap().date_for(2022);
        assert_eq!(date_of("good_friday"), Some(date(2022, 4, 15)));
        assert_eq!(date_of("easter_monday"), Some(date(2022, 4, 18)));
        assert_eq!(date_of("ascension_day"), Some(date(2022, 5, 27)));
        assert_eq!(date_of("whit_monday"), Some(date(2022, 6, 6)));
        assert_eq!(date_of("corpus_christi"), Some(date(2022, 6, 16)));
        assert_eq!(date_of("repentance_day"), Some(date(2022, 11, 16)));
    }

    #[test]
    fn movable_feasts_fall_on_their_weekday() {
        let rule_set = german();
        for year in 1970..=2100 {
            let weekday_of = |key: &str| rule_set.by_key(key).unwrap().date_for(year).unwrap().weekday();
            assert_eq!(weekday_of("good_friday"), Weekday::Fri);
            assert_eq!(weekday_of("easter_monday"), Weekday::Mon);
            assert_eq!(weekday_of("ascension_day"), Weekday::Fri);
            assert_eq!(weekday_of("whit_monday"), Weekday::Mon);
            assert_eq!(weekday_of("corpus_christi"), Weekday::Thu);
            assert_eq!(weekday_of("repentance_day"), Weekday::Wed);
        }
    }

    #[test]
    fn applicability() {
        let rule_set = german();
        assert!(rule_set.by_key("womens_day").unwrap().applies_to(Berlin));
        assert!(!rule_set.by_key("womens_day").unwrap().applies_to(Bayern));
        assert_eq!(rule_set.by_key("reformation_day").unwrap().jurisdictions().len(), 9);
        assert_eq!(rule_set.by_key("all_saints").unwrap().jurisdictions().len(), 5);
        assert_eq!(rule_set.by_key("corpus_christi").unwrap().jurisdictions().len(), 6);
        assert_eq!(rule_set.applicable_to(NordrheinWestfalen).count(), 13);
        assert_eq!(rule_set.applicable_to(Sachsen).count(), 13);
        assert_eq!(rule_set.applicable_to(Hamburg).count(), 12);
    }

    #[test]
    fn unknown_key() {
        assert!(german().by_key("carnival_monday").is_none());
    }

    proptest! {
        #[test]
        fn every_rule_yields_one_deterministic_date(year in 1970i32..=2100) {
            let rule_set = german();
            let fresh = german();
            for (rule, fresh_rule) in rule_set.all().iter().zip(fresh.all()) {
                let first = rule.date_for(year);
                prop_assert!(first.is_some());
                prop_assert_eq!(first.map(|d| d.year()), Some(year));
                prop_assert_eq!(first, rule.date_for(year));
                prop_assert_eq!(first, fresh_rule.date_for(year));
            }
        }
    }
}
