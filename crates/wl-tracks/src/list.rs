//! Ordered track collection.

use tracing::debug;
use wl_core::{IdAllocator, TrackId};

use crate::edit::TrackEdit;
use crate::error::{TrackError, TrackResult};
use crate::spec::{CurveSpec, TrackSpec};

/// Tracks in display order. Indices are always `1..=len`.
#[derive(Debug, Default, Clone)]
pub struct TrackList {
    tracks: Vec<TrackSpec>,
    ids: IdAllocator,
}

impl TrackList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackSpec> {
        self.tracks.iter()
    }

    pub fn as_slice(&self) -> &[TrackSpec] {
        &self.tracks
    }

    pub fn ids(&self) -> Vec<TrackId> {
        self.tracks.iter().map(TrackSpec::id).collect()
    }

    pub fn get(&self, id: TrackId) -> TrackResult<&TrackSpec> {
        self.tracks
            .iter()
            .find(|t| t.id() == id)
            .ok_or(TrackError::UnknownTrack(id))
    }

    pub fn get_mut(&mut self, id: TrackId) -> TrackResult<&mut TrackSpec> {
        self.tracks
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TrackError::UnknownTrack(id))
    }

    /// Track at a 1-based display index.
    pub fn at_index(&self, index: usize) -> TrackResult<&TrackSpec> {
        index
            .checked_sub(1)
            .and_then(|i| self.tracks.get(i))
            .ok_or(TrackError::NoTrackAtIndex(index))
    }

    /// Append a track with index `len + 1` and one empty primary curve slot.
    pub fn add_track(&mut self) -> TrackResult<&mut TrackSpec> {
        let id = self.ids.allocate().ok_or(TrackError::IdsExhausted)?;
        let index = self.tracks.len() + 1;
        self.tracks.push(TrackSpec::new(id, index));
        debug!(track = %id, index, "added track");
        let last = self.tracks.len() - 1;
        Ok(&mut self.tracks[last])
    }

    /// Remove a track; every later track moves up one display index.
    pub fn remove_track(&mut self, id: TrackId) -> TrackResult<TrackSpec> {
        let pos = self
            .tracks
            .iter()
            .position(|t| t.id() == id)
            .ok_or(TrackError::UnknownTrack(id))?;
        let removed = self.tracks.remove(pos);
        self.renumber();
        debug!(track = %id, index = removed.index(), "removed track");
        Ok(removed)
    }

    /// Remove by 1-based display index.
    pub fn remove_track_at(&mut self, index: usize) -> TrackResult<TrackSpec> {
        let id = self.at_index(index)?.id();
        self.remove_track(id)
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Append a curve slot. The first slot of an empty track becomes primary.
    /// The name is trimmed but not checked against any loaded well.
    pub fn add_curve(&mut self, id: TrackId, curve_name: Option<String>) -> TrackResult<usize> {
        let track = self.get_mut(id)?;
        let is_primary = track.curves.is_empty();
        let spec = match clean_name(curve_name) {
            Some(name) => CurveSpec::named(name, is_primary),
            None => CurveSpec::unassigned(is_primary),
        };
        track.curves.push(spec);
        Ok(track.curves.len() - 1)
    }

    /// Remove a curve slot. If it was primary, the first remaining slot takes over.
    pub fn remove_curve(&mut self, id: TrackId, slot: usize) -> TrackResult<CurveSpec> {
        let track = self.get_mut(id)?;
        check_slot(track, slot)?;
        let removed = track.curves.remove(slot);
        if removed.is_primary && !track.curves.is_empty() {
            track.mark_primary(0);
        }
        Ok(removed)
    }

    pub fn curve_mut(&mut self, id: TrackId, slot: usize) -> TrackResult<&mut CurveSpec> {
        let track = self.get_mut(id)?;
        check_slot(track, slot)?;
        Ok(&mut track.curves[slot])
    }

    /// Apply one edit and return the id of the track it touched.
    pub fn apply(&mut self, edit: TrackEdit) -> TrackResult<TrackId> {
        match edit {
            TrackEdit::AddTrack => Ok(self.add_track()?.id()),
            TrackEdit::RemoveTrack(id) => self.remove_track(id).map(|t| t.id()),
            TrackEdit::AddCurve { track, curve_name } => {
                self.add_curve(track, curve_name)?;
                Ok(track)
            }
            TrackEdit::RemoveCurve { track, slot } => {
                self.remove_curve(track, slot)?;
                Ok(track)
            }
            TrackEdit::AssignCurve {
                track,
                slot,
                curve_name,
            } => {
                self.curve_mut(track, slot)?.curve_name = clean_name(curve_name);
                Ok(track)
            }
            TrackEdit::SetPrimary { track, slot } => {
                let t = self.get_mut(track)?;
                check_slot(t, slot)?;
                t.mark_primary(slot);
                Ok(track)
            }
            TrackEdit::SetCurveColor { track, slot, color } => {
                self.curve_mut(track, slot)?.color = color;
                Ok(track)
            }
            TrackEdit::SetCurveWidth { track, slot, width } => {
                self.curve_mut(track, slot)?.set_width(width);
                Ok(track)
            }
            TrackEdit::SetCurveStyle { track, slot, style } => {
                self.curve_mut(track, slot)?.line_style = style;
                Ok(track)
            }
            TrackEdit::SetGrid { track, on } => {
                self.get_mut(track)?.grid = on;
                Ok(track)
            }
            TrackEdit::SetFlipX { track, on } => {
                self.get_mut(track)?.flip_x = on;
                Ok(track)
            }
            TrackEdit::SetFlipY { track, on } => {
                self.get_mut(track)?.flip_y = on;
                Ok(track)
            }
            TrackEdit::SetScale { track, scale } => {
                self.get_mut(track)?.scale = scale;
                Ok(track)
            }
            TrackEdit::SetBackground { track, color } => {
                self.get_mut(track)?.background_color = color;
                Ok(track)
            }
            TrackEdit::SetBoundText { track, bound, text } => {
                self.get_mut(track)?.set_bound_text(bound, &text);
                Ok(track)
            }
        }
    }

    fn renumber(&mut self) {
        for (i, track) in self.tracks.iter_mut().enumerate() {
            track.set_index(i + 1);
        }
    }
}

/// Trim a picked curve name; a blank name leaves the slot unassigned.
fn clean_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

fn check_slot(track: &TrackSpec, slot: usize) -> TrackResult<()> {
    if slot < track.curves.len() {
        Ok(())
    } else {
        Err(TrackError::CurveSlotOob {
            track: track.id(),
            slot,
            len: track.curves.len(),
        })
    }
}
