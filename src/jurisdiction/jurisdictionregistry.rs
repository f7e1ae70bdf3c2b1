use serde::Serialize;

use crate::manager::manager::{FrozenManager, ManagerBuilder};
use crate::manager::managererror::ManagerError;

use super::jurisdiction::Jurisdiction;

/// Read-only lookup of jurisdictions by numeric key or by code.
///
/// Both indexes are built in `new` from `Jurisdiction::ALL` and never change
/// afterwards. Code lookup is case-insensitive.
pub struct JurisdictionRegistry {
    by_key: FrozenManager<u8, Jurisdiction>,
    by_code: FrozenManager<String, Jurisdiction>
}

#[derive(Serialize)]
pub struct JurisdictionRecord {
    pub key: u8,
    pub code: &'static str,
    pub name: &'static str
}

impl JurisdictionRegistry {
    pub fn new() -> Result<JurisdictionRegistry, ManagerError> {
        JurisdictionRegistry::from_jurisdictions(&Jurisdiction::ALL)
    }

    pub fn from_jurisdictions(jurisdictions: &[Jurisdiction]) -> Result<JurisdictionRegistry, ManagerError> {
        let mut by_key = ManagerBuilder::with_capacity(jurisdictions.len());
        let mut by_code = ManagerBuilder::with_capacity(jurisdictions.len());
        for &jurisdiction in jurisdictions {
            by_key.insert(jurisdiction.key(), jurisdiction)?;
            by_code.insert(jurisdiction.code().to_uppercase(), jurisdiction)?;
            if let Some(legacy_code) = jurisdiction.legacy_code() {
                by_code.insert(legacy_code.to_uppercase(), jurisdiction)?;
            }
        }
        Ok(JurisdictionRegistry {
            by_key: by_key.freeze(),
            by_code: by_code.freeze()
        })
    }

    pub fn by_key(&self, key: u8) -> Option<Jurisdiction> {
        self.by_key.get(&key).copied()
    }

    pub fn by_code(&self, code: &str) -> Option<Jurisdiction> {
        self.by_code.get(code.trim().to_uppercase().as_str()).copied()
    }

    /// All registered jurisdictions, ordered by key.
    pub fn all(&self) -> Vec<Jurisdiction> {
        let mut all: Vec<Jurisdiction> = self.by_key.values().copied().collect();
        all.sort_by_key(|j| j.key());
        all
    }

    pub fn records(&self) -> Vec<JurisdictionRecord> {
        self.all()
            .into_iter()
            .map(|j| JurisdictionRecord { key: j.key(), code: j.code(), name: j.name() })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
