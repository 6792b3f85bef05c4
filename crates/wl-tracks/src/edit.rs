//! Edits addressed to a track by its stable id.

use wl_core::{AxisScale, LineStyle, Rgb, TrackId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisBound {
    XMin,
    XMax,
    YMin,
    YMax,
}

/// A single user edit. Front ends build these instead of holding on to
/// track objects; `TrackList::apply` resolves the id at apply time.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackEdit {
    AddTrack,
    RemoveTrack(TrackId),
    AddCurve {
        track: TrackId,
        curve_name: Option<String>,
    },
    RemoveCurve {
        track: TrackId,
        slot: usize,
    },
    AssignCurve {
        track: TrackId,
        slot: usize,
        curve_name: Option<String>,
    },
    SetPrimary {
        track: TrackId,
        slot: usize,
    },
    SetCurveColor {
        track: TrackId,
        slot: usize,
        color: Rgb,
    },
    SetCurveWidth {
        track: TrackId,
        slot: usize,
        width: u8,
    },
    SetCurveStyle {
        track: TrackId,
        slot: usize,
        style: LineStyle,
    },
    SetGrid {
        track: TrackId,
        on: bool,
    },
    SetFlipX {
        track: TrackId,
        on: bool,
    },
    SetFlipY {
        track: TrackId,
        on: bool,
    },
    SetScale {
        track: TrackId,
        scale: AxisScale,
    },
    SetBackground {
        track: TrackId,
        color: Rgb,
    },
    /// Bound typed as text; text that is not a number clears the bound.
    SetBoundText {
        track: TrackId,
        bound: AxisBound,
        text: String,
    },
}

impl TrackEdit {
    /// Track the edit is addressed to; `None` for `AddTrack`.
    pub fn target(&self) -> Option<TrackId> {
        match self {
            TrackEdit::AddTrack => None,
            TrackEdit::RemoveTrack(track)
            | TrackEdit::AddCurve { track, .. }
            | TrackEdit::RemoveCurve { track, .. }
            | TrackEdit::AssignCurve { track, .. }
            | TrackEdit::SetPrimary { track, .. }
            | TrackEdit::SetCurveColor { track, .. }
            | TrackEdit::SetCurveWidth { track, .. }
            | TrackEdit::SetCurveStyle { track, .. }
            | TrackEdit::SetGrid { track, .. }
            | TrackEdit::SetFlipX { track, .. }
            | TrackEdit::SetFlipY { track, .. }
            | TrackEdit::SetScale { track, .. }
            | TrackEdit::SetBackground { track, .. }
            | TrackEdit::SetBoundText { track, .. } => Some(*track),
        }
    }
}
