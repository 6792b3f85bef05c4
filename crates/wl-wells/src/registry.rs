//! In-memory set of loaded wells, keyed by well name.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;
use tracing::warn;

use crate::record::WellRecord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Well not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Added,
    /// A well with this name was already registered; the new record was discarded.
    Duplicate,
}

/// Owns every loaded `WellRecord`. The first record registered under a name wins.
#[derive(Debug, Default, Clone)]
pub struct WellRegistry {
    wells: Vec<WellRecord>,
    by_name: HashMap<String, usize>,
}

impl WellRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, record: WellRecord) -> RegisterOutcome {
        if let Some(&existing) = self.by_name.get(record.name()) {
            warn!(
                well = record.name(),
                kept = %self.wells[existing].source_path().display(),
                ignored = %record.source_path().display(),
                "duplicate well name, keeping the first load"
            );
            return RegisterOutcome::Duplicate;
        }
        self.by_name
            .insert(record.name().to_string(), self.wells.len());
        self.wells.push(record);
        RegisterOutcome::Added
    }

    pub fn get(&self, name: &str) -> Result<&WellRecord, RegistryError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.wells[idx])
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Well names in registration order.
    pub fn all_names(&self) -> Vec<&str> {
        self.wells.iter().map(WellRecord::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WellRecord> {
        self.wells.iter()
    }

    /// Sorted union of curve names over all wells.
    pub fn available_curves(&self) -> Vec<String> {
        self.wells
            .iter()
            .flat_map(|w| w.curve_names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }
}
