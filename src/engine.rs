use std::sync::Arc;

use tracing::info;

use crate::configuration::Configuration;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayoccurrence::HolidayOccurrence;
use crate::holiday::holidayqueryengine::{HolidayQuery, HolidayQueryEngine};
use crate::holiday::holidayruleset::HolidayRuleSet;
use crate::holiday::materializer::Materializer;
use crate::jurisdiction::jurisdiction::Jurisdiction;
use crate::jurisdiction::jurisdictionregistry::JurisdictionRegistry;
use crate::store::holidaystore::HolidayStore;
use crate::store::inmemoryholidaystore::InMemoryHolidayStore;
use crate::time::eastercalculator::EasterCalculator;

/// Wires registry, rule set, store and query engine together.
///
/// `initialize` performs the only write phase: after it returns, every shared
/// component is read-only and the engine can be queried from many threads.
pub struct HolidayEngine<S: HolidayStore> {
    jurisdictions: JurisdictionRegistry,
    rule_set: Arc<HolidayRuleSet>,
    query_engine: HolidayQueryEngine<S>
}

impl<S: HolidayStore> HolidayEngine<S> {
    pub fn initialize(configuration: Configuration, store: Arc<S>) -> Result<HolidayEngine<S>, HolidayError> {
        configuration.validate()?;

        let jurisdictions = JurisdictionRegistry::new()?;
        let easter_calculator = Arc::new(EasterCalculator::new());
        let rule_set = Arc::new(HolidayRuleSet::german(easter_calculator)?);

        let materializer = Materializer::new(Arc::clone(&rule_set));
        let saved = materializer.materialize(store.as_ref(), configuration.start_year(), configuration.end_year())?;
        info!(
            jurisdictions = jurisdictions.len(),
            rules = rule_set.len(),
            saved,
            "holiday engine initialized"
        );

        let query_engine = HolidayQueryEngine::new(store, configuration.date_format());
        Ok(HolidayEngine {
            jurisdictions,
            rule_set,
            query_engine
        })
    }

    pub fn jurisdictions(&self) -> &JurisdictionRegistry {
        &self.jurisdictions
    }

    pub fn rule_set(&self) -> &Arc<HolidayRuleSet> {
        &self.rule_set
    }

    pub fn query_engine(&self) -> &HolidayQueryEngine<S> {
        &self.query_engine
    }

    pub fn jurisdiction(&self, code: &str) -> Result<Jurisdiction, HolidayError> {
        self.jurisdictions
            .by_code(code)
            .ok_or_else(|| HolidayError::UnknownJurisdiction(code.to_owned()))
    }

    pub fn holiday_in(&self, date: &str, code: &str) -> Result<Option<HolidayOccurrence>, HolidayError> {
        let jurisdiction = self.jurisdiction(code)?;
        self.query_engine.get_holiday_str(date, jurisdiction)
    }

    pub fn holidays_in(&self, from: &str, to: &str, code: &str) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        let jurisdiction = self.jurisdiction(code)?;
        self.query_engine.get_holidays_str(from, to, jurisdiction)
    }
}

impl HolidayEngine<InMemoryHolidayStore> {
    pub fn in_memory(configuration: Configuration) -> Result<HolidayEngine<InMemoryHolidayStore>, HolidayError> {
        HolidayEngine::initialize(configuration, Arc::new(InMemoryHolidayStore::new()))
    }
}
