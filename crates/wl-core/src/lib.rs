//! wl-core: stable foundation for welllog.
//!
//! Contains:
//! - error (shared error types)
//! - ids (stable compact IDs for tracks)
//! - numeric (axis-bound parsing and extents)
//! - color (RGB colors parsed from names or hex)
//! - style (line style and axis scale enums)

pub mod color;
pub mod error;
pub mod ids;
pub mod numeric;
pub mod style;

// Re-exports: nice ergonomics for downstream crates
pub use color::Rgb;
pub use error::{WlError, WlResult};
pub use ids::*;
pub use numeric::*;
pub use style::{AxisScale, LineStyle};
