use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::hash::Hash;

use super::managererror::ManagerError;

/// Mutable registry used while the fixed value lists are indexed.
///
/// A key may be inserted only once; a second insert is a programming error
/// reported as `ManagerError::DuplicateKey`. Call `freeze` once every value is
/// registered to obtain the read-only `FrozenManager` served to readers.
pub struct ManagerBuilder<K, V> {
    map: HashMap<K, V>
}

impl<K, V> ManagerBuilder<K, V> where
    K: Eq + Hash + Display {
    pub fn new() -> ManagerBuilder<K, V> {
        ManagerBuilder { map: HashMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> ManagerBuilder<K, V> {
        ManagerBuilder { map: HashMap::with_capacity(capacity) }
    }

    pub fn insert(&mut self, key: K, value: V) -> Result<(), ManagerError> {
        match self.map.entry(key) {
            Entry::Occupied(occupied) => Err(ManagerError::DuplicateKey(occupied.key().to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn freeze(self) -> FrozenManager<K, V> {
        FrozenManager { map: self.map }
    }
}

impl<K, V> Default for ManagerBuilder<K, V> where
    K: Eq + Hash + Display {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}

/// Read-only registry. No method takes `&mut self`, so a shared reference
/// can be handed to any number of threads.
pub struct FrozenManager<K, V> {
    map: HashMap<K, V>
}

impl<K, V> FrozenManager<K, V> where
    K: Eq + Hash {
    pub fn get<Q>(&self, key: &Q) -> Option<&V> where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized {
        self.map.get(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
