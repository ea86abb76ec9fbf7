//! The `Vault` aggregate: pure in-memory CRUD over entries, no I/O.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::errors::{PassVaultError, Result};

use super::entry::{advance, Entry};
use super::format::CURRENT_VERSION;

/// All entries, keyed by ID, plus the time of the last structural change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    version: String,
    entries: BTreeMap<String, Entry>,
    updated_at: DateTime<Utc>,
}

impl Default for Vault {
    fn default() -> Self {
        Self::new()
    }
}

impl Vault {
    /// An empty vault stamped with the current format version.
    pub fn new() -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            entries: BTreeMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// Reassemble a vault from a decoded document.
    pub(crate) fn from_parts(
        version: String,
        entries: BTreeMap<String, Entry>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version,
            entries,
            updated_at,
        }
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Insert a new entry. Fails if the ID is already taken.
    pub fn create_entry(&mut self, entry: Entry) -> Result<()> {
        if self.entries.contains_key(&entry.id) {
            return Err(PassVaultError::EntryAlreadyExists(entry.id.clone()));
        }
        self.entries.insert(entry.id.clone(), entry);
        self.touch();
        Ok(())
    }

    /// A detached copy of the entry with `id`.
    pub fn get_entry(&self, id: &str) -> Result<Entry> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| PassVaultError::EntryNotFound(id.to_string()))
    }

    /// Replace an existing entry wholesale. Not an upsert.
    pub fn update_entry(&mut self, entry: Entry) -> Result<()> {
        let slot = self
            .entries
            .get_mut(&entry.id)
            .ok_or_else(|| PassVaultError::EntryNotFound(entry.id.clone()))?;
        *slot = entry;
        self.touch();
        Ok(())
    }

    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        if self.entries.remove(id).is_none() {
            return Err(PassVaultError::EntryNotFound(id.to_string()));
        }
        self.touch();
        Ok(())
    }

    /// Copies of every entry, in ID order.
    pub fn list_entries(&self) -> Vec<Entry> {
        self.entries.values().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub(crate) fn entries(&self) -> &BTreeMap<String, Entry> {
        &self.entries
    }

    fn touch(&mut self) {
        self.updated_at = advance(self.updated_at);
    }
}
