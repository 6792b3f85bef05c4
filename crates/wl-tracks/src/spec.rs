//! Curve and track display settings.

use wl_core::{AxisScale, LineStyle, Rgb, TrackId, parse_axis_bound};

use crate::edit::AxisBound;

pub const MIN_CURVE_WIDTH: u8 = 1;
pub const MAX_CURVE_WIDTH: u8 = 10;

/// How one curve is drawn inside its track.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSpec {
    /// `None` is an empty slot waiting for the user to pick a curve.
    pub curve_name: Option<String>,
    pub color: Rgb,
    width: u8,
    pub line_style: LineStyle,
    /// The primary curve labels the bottom x axis of its track.
    pub is_primary: bool,
}

impl CurveSpec {
    /// Empty slot. Primary slots start blue, secondary ones black.
    pub fn unassigned(is_primary: bool) -> Self {
        Self {
            curve_name: None,
            color: if is_primary { Rgb::BLUE } else { Rgb::BLACK },
            width: MIN_CURVE_WIDTH,
            line_style: LineStyle::Solid,
            is_primary,
        }
    }

    pub fn named(curve_name: impl Into<String>, is_primary: bool) -> Self {
        Self {
            curve_name: Some(curve_name.into()),
            ..Self::unassigned(is_primary)
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: u8) -> Self {
        self.set_width(width);
        self
    }

    pub fn with_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Set the line width, clamped to 1..=10.
    pub fn set_width(&mut self, width: u8) {
        self.width = width.clamp(MIN_CURVE_WIDTH, MAX_CURVE_WIDTH);
    }

    pub fn assigned_name(&self) -> Option<&str> {
        self.curve_name.as_deref()
    }
}

/// One depth track: a column of overlaid curves sharing the depth axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSpec {
    id: TrackId,
    index: usize,
    pub curves: Vec<CurveSpec>,
    pub grid: bool,
    pub flip_x: bool,
    pub flip_y: bool,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub scale: AxisScale,
    pub background_color: Rgb,
}

impl TrackSpec {
    pub(crate) fn new(id: TrackId, index: usize) -> Self {
        Self {
            id,
            index,
            curves: vec![CurveSpec::unassigned(true)],
            grid: false,
            flip_x: false,
            flip_y: false,
            x_min: None,
            x_max: None,
            y_min: None,
            y_max: None,
            scale: AxisScale::Linear,
            background_color: Rgb::WHITE,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    /// 1-based display position.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Display label, e.g. `Track 2`.
    pub fn label(&self) -> String {
        format!("Track {}", self.index)
    }

    pub fn bound(&self, bound: AxisBound) -> Option<f64> {
        match bound {
            AxisBound::XMin => self.x_min,
            AxisBound::XMax => self.x_max,
            AxisBound::YMin => self.y_min,
            AxisBound::YMax => self.y_max,
        }
    }

    pub fn set_bound(&mut self, bound: AxisBound, value: Option<f64>) {
        let value = value.filter(|v| v.is_finite());
        match bound {
            AxisBound::XMin => self.x_min = value,
            AxisBound::XMax => self.x_max = value,
            AxisBound::YMin => self.y_min = value,
            AxisBound::YMax => self.y_max = value,
        }
    }

    /// Set a bound from user text; text that does not parse clears the bound.
    pub fn set_bound_text(&mut self, bound: AxisBound, text: &str) {
        self.set_bound(bound, parse_axis_bound(text));
    }

    /// Names of the assigned curves, in slot order.
    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().filter_map(CurveSpec::assigned_name)
    }

    pub fn primary_slot(&self) -> Option<usize> {
        self.curves.iter().position(|c| c.is_primary)
    }

    /// Make `slot` the only primary curve.
    pub(crate) fn mark_primary(&mut self, slot: usize) {
        for (i, curve) in self.curves.iter_mut().enumerate() {
            curve.is_primary = i == slot;
        }
    }
}
