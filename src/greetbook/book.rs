use crate::error::{GreetbookError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The contact collection: records keyed by name, keys unique.
///
/// Backed by a `BTreeMap` so iteration (and therefore every listing and the
/// birthday report's tie order) is ascending by name, deterministic across
/// runs and reloads. Lookup is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name. Re-adding an existing name
    /// replaces the old record silently.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name.as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record. Errors if the name is absent.
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| GreetbookError::ContactNotFound(name.to_string()))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for record in self.records.values() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
