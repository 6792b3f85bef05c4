//! wl-render: turns wells and track layouts into plot-ready figures.
//!
//! Rendering is a pure function of its inputs. A front end (or the CLI's
//! JSON export) draws the resulting [`Figure`]s.

pub mod axis;
pub mod figure;
pub mod render;

pub use axis::{Axis, x_axis, y_axis};
pub use figure::{
    AxisLabel, DEPTH_LABEL, Figure, NO_CURVES, NO_TRACKS, Panel, PlotLine, PlotPanel,
};
pub use render::{render, render_well};
