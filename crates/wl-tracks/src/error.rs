//! Track model error types.

use wl_core::TrackId;

pub type TrackResult<T> = Result<T, TrackError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    #[error("Track {track} has no curve slot {slot} (it has {len})")]
    CurveSlotOob {
        track: TrackId,
        slot: usize,
        len: usize,
    },

    #[error("No track at display index {0}")]
    NoTrackAtIndex(usize),

    #[error("Track id space exhausted")]
    IdsExhausted,
}
