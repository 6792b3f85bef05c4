//! wl-tracks: the track/curve display configuration.
//!
//! Provides:
//! - `CurveSpec` / `TrackSpec` display settings
//! - `TrackList`, the ordered track collection with contiguous 1-based indices
//! - `TrackEdit`, message values that address tracks by stable `TrackId`
//!
//! # Example
//!
//! ```
//! use wl_tracks::{TrackEdit, TrackList};
//!
//! let mut tracks = TrackList::new();
//! let first = tracks.apply(TrackEdit::AddTrack).unwrap();
//! let second = tracks.apply(TrackEdit::AddTrack).unwrap();
//! tracks.apply(TrackEdit::RemoveTrack(first)).unwrap();
//!
//! assert_eq!(tracks.get(second).unwrap().index(), 1);
//! ```

pub mod edit;
pub mod error;
pub mod list;
pub mod spec;

pub use edit::{AxisBound, TrackEdit};
pub use error::{TrackError, TrackResult};
pub use list::TrackList;
pub use spec::{CurveSpec, MAX_CURVE_WIDTH, MIN_CURVE_WIDTH, TrackSpec};
