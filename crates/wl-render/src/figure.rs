//! Plot-ready output of the renderer.

use serde::Serialize;
use wl_core::{LineStyle, Rgb};

use crate::axis::Axis;

pub const NO_TRACKS: &str = "No tracks";
pub const NO_CURVES: &str = "No curves";
pub const DEPTH_LABEL: &str = "Depth";

/// Everything drawn for one well: one panel per track, left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub well_name: String,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn plots(&self) -> impl Iterator<Item = &PlotPanel> {
        self.panels.iter().filter_map(|p| match p {
            Panel::Plot(plot) => Some(plot),
            Panel::Placeholder { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// Text in place of a plot. `track_index` is `None` for the figure-wide
    /// "No tracks" panel.
    Placeholder {
        track_index: Option<usize>,
        message: String,
    },
    Plot(PlotPanel),
}

impl Panel {
    pub fn message(&self) -> Option<&str> {
        match self {
            Panel::Placeholder { message, .. } => Some(message),
            Panel::Plot(_) => None,
        }
    }

    pub fn as_plot(&self) -> Option<&PlotPanel> {
        match self {
            Panel::Plot(plot) => Some(plot),
            Panel::Placeholder { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPanel {
    /// 1-based track index the panel was drawn from.
    pub track_index: usize,
    pub lines: Vec<PlotLine>,
    pub x: Axis,
    pub y: Axis,
    pub grid: bool,
    pub background: Rgb,
    /// Set on the first panel of a figure only.
    pub y_label: Option<String>,
    pub bottom_label: Option<AxisLabel>,
    pub top_label: Option<AxisLabel>,
    /// Plotted curve names in drawing order.
    pub legend: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub text: String,
    pub color: Rgb,
}

/// One curve drawn as `(value, depth)` points.
///
/// Samples that cannot be drawn (NaN, or non-positive under log scale) split
/// the line, so `segments` holds each unbroken run separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLine {
    pub curve_name: String,
    pub segments: Vec<Vec<[f64; 2]>>,
    pub color: Rgb,
    pub width: u8,
    pub style: LineStyle,
}

impl PlotLine {
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.segments.iter().flatten().copied()
    }
}
