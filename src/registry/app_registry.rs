use std::path::Path;

use super::entry::Entry;
use crate::error::{Error, Result};
use crate::logger::{debug, info};
use crate::store::{AppMap, JsonStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Replaced,
    /// The name was taken and overwrite was not requested; nothing changed.
    Kept,
}

/// In-memory name -> path mapping, written through to its store after
/// every mutation.
#[derive(Debug)]
pub struct AppRegistry {
    apps: AppMap,
    store: JsonStore,
}

impl AppRegistry {
    pub fn new(store: JsonStore) -> Self {
        Self {
            apps: AppMap::new(),
            store,
        }
    }

    /// Reads the store. A corrupted store yields an empty registry together
    /// with the `LoadCorrupted` error for the caller to surface.
    pub fn load(store: JsonStore) -> (Self, Option<Error>) {
        let loaded = store.load();
        let registry = Self {
            apps: loaded.apps,
            store,
        };
        (registry, loaded.corrupted)
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn add(&mut self, name: &str, path: &str, overwrite: bool) -> Result<AddOutcome> {
        let name = name.trim();
        let path = path.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        if !Path::new(path).exists() {
            debug!("rejecting '{}': '{}' does not exist", name, path);
            return Err(Error::PathNotFound(path.into()));
        }

        let outcome = match self.apps.get_mut(name) {
            Some(_) if !overwrite => {
                debug!("'{}' already registered, keeping existing path", name);
                return Ok(AddOutcome::Kept);
            }
            Some(existing) => {
                *existing = path.to_string();
                AddOutcome::Replaced
            }
            None => {
                self.apps.insert(name.to_string(), path.to_string());
                AddOutcome::Inserted
            }
        };
        info!("{:?} '{}' -> '{}'", outcome, name, path);

        self.store.save(&self.apps)?;
        Ok(outcome)
    }

    /// Returns whether an entry was removed. Absent names are not an error.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let Some(index) = self.index_of(name) else {
            debug!("remove: '{}' not registered", name);
            return Ok(false);
        };
        if let Some((key, _)) = self.apps.shift_remove_index(index) {
            info!("removed '{}'", key);
        }
        self.store.save(&self.apps)?;
        Ok(true)
    }

    pub fn list(&self) -> Vec<Entry> {
        self.apps
            .iter()
            .map(|(name, path)| Entry::new(name, path))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let index = self.index_of(name)?;
        self.apps.get_index(index).map(|(_, path)| path.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Exact key first, then the trimmed form. Hand-edited stores may carry
    /// keys with surrounding whitespace.
    fn index_of(&self, name: &str) -> Option<usize> {
        self.apps
            .get_index_of(name)
            .or_else(|| self.apps.get_index_of(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
