//! Session state: loaded wells, the well selection and the track layout.

use tracing::debug;
use wl_core::TrackId;
use wl_tracks::{TrackEdit, TrackList};
use wl_wells::{WellRecord, WellRegistry};

use crate::error::{AppError, AppResult};

/// Well names checked for display, in the order they were checked.
///
/// Names are kept even when no such well is loaded; rendering skips them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns `false` if it was already selected.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Returns `false` if the name was not selected.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for name in iter {
            selection.insert(name);
        }
        selection
    }
}

#[derive(Debug, Default)]
pub struct Session {
    pub registry: WellRegistry,
    pub selection: Selection,
    pub tracks: TrackList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a loaded well for display.
    pub fn select_well(&mut self, name: &str) -> AppResult<()> {
        if !self.registry.contains(name) {
            return Err(AppError::WellNotFound(name.to_string()));
        }
        self.selection.insert(name);
        Ok(())
    }

    pub fn deselect_well(&mut self, name: &str) -> bool {
        self.selection.remove(name)
    }

    pub fn apply(&mut self, edit: TrackEdit) -> AppResult<TrackId> {
        debug!(track = ?edit.target(), "applying track edit");
        Ok(self.tracks.apply(edit)?)
    }

    /// Selected wells that are loaded, in selection order.
    pub fn selected_wells(&self) -> Vec<&WellRecord> {
        self.selection
            .names()
            .iter()
            .filter_map(|name| match self.registry.get(name) {
                Ok(well) => Some(well),
                Err(_) => {
                    debug!(well = %name, "selected well is not loaded");
                    None
                }
            })
            .collect()
    }

    /// Swap in a selection and track layout, e.g. from a saved configuration.
    pub fn replace_layout(&mut self, selection: Selection, tracks: TrackList) {
        self.selection = selection;
        self.tracks = tracks;
    }
}
