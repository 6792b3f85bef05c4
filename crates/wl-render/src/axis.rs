//! Axis extents for a track panel.

use serde::Serialize;
use tracing::debug;
use wl_core::{AxisScale, finite_extent};

/// Fraction of the data span added on each side of an autoscaled x axis.
const X_MARGIN: f64 = 0.05;

/// One axis of a panel.
///
/// Uninverted, `lo` sits at the left edge of an x axis and at the bottom
/// edge of a y axis. `inverted` swaps the ends. A default depth axis is
/// inverted, so the shallowest depth is at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub lo: f64,
    pub hi: f64,
    pub inverted: bool,
    pub scale: AxisScale,
}

impl Axis {
    /// Value at the left edge, read as an x axis.
    pub fn left(&self) -> f64 {
        if self.inverted { self.hi } else { self.lo }
    }

    pub fn right(&self) -> f64 {
        if self.inverted { self.lo } else { self.hi }
    }

    /// Value at the top edge, read as a y axis.
    pub fn top(&self) -> f64 {
        if self.inverted { self.lo } else { self.hi }
    }

    pub fn bottom(&self) -> f64 {
        if self.inverted { self.hi } else { self.lo }
    }

    pub fn contains(&self, v: f64) -> bool {
        let (a, b) = if self.lo <= self.hi {
            (self.lo, self.hi)
        } else {
            (self.hi, self.lo)
        };
        v >= a && v <= b
    }
}

/// Value axis. Autoscales over `values`; explicit bounds win individually.
///
/// Under log scale only positive values count and non-positive bounds are
/// ignored.
pub fn x_axis(
    values: impl IntoIterator<Item = f64>,
    scale: AxisScale,
    min: Option<f64>,
    max: Option<f64>,
    flip: bool,
) -> Axis {
    let drawable = values.into_iter().filter(|v| drawable(*v, scale));
    let (auto_lo, auto_hi) = match finite_extent(drawable) {
        Some((lo, hi)) => pad(lo, hi, scale),
        None => empty_range(scale),
    };

    Axis {
        lo: bound(min, scale, "x_min").unwrap_or(auto_lo),
        hi: bound(max, scale, "x_max").unwrap_or(auto_hi),
        inverted: flip,
        scale,
    }
}

/// Depth axis. Depth increases downward unless `flip`.
pub fn y_axis(depth: &[f64], min: Option<f64>, max: Option<f64>, flip: bool) -> Axis {
    let (auto_lo, auto_hi) = match finite_extent(depth.iter().copied()) {
        Some((lo, hi)) if lo < hi => (lo, hi),
        Some((lo, hi)) => pad(lo, hi, AxisScale::Linear),
        None => empty_range(AxisScale::Linear),
    };

    Axis {
        lo: bound(min, AxisScale::Linear, "y_min").unwrap_or(auto_lo),
        hi: bound(max, AxisScale::Linear, "y_max").unwrap_or(auto_hi),
        inverted: !flip,
        scale: AxisScale::Linear,
    }
}

/// Whether a sample can be placed on an axis of the given scale.
pub(crate) fn drawable(v: f64, scale: AxisScale) -> bool {
    match scale {
        AxisScale::Linear => v.is_finite(),
        AxisScale::Log => v.is_finite() && v > 0.0,
    }
}

fn bound(value: Option<f64>, scale: AxisScale, which: &str) -> Option<f64> {
    let v = value?;
    if drawable(v, scale) {
        Some(v)
    } else {
        debug!(bound = which, value = v, ?scale, "ignoring axis bound");
        None
    }
}

fn pad(lo: f64, hi: f64, scale: AxisScale) -> (f64, f64) {
    match scale {
        AxisScale::Linear => {
            let span = hi - lo;
            let padding = if span.abs() < 1e-15 {
                if lo == 0.0 { 1.0 } else { lo.abs() * X_MARGIN }
            } else {
                span * X_MARGIN
            };
            (lo - padding, hi + padding)
        }
        AxisScale::Log => {
            // pad by a fraction of a decade so the range stays positive
            let (llo, lhi) = (lo.log10(), hi.log10());
            let span = lhi - llo;
            let padding = if span.abs() < 1e-15 { 0.5 } else { span * X_MARGIN };
            (10f64.powf(llo - padding), 10f64.powf(lhi + padding))
        }
    }
}

fn empty_range(scale: AxisScale) -> (f64, f64) {
    match scale {
        AxisScale::Linear => (0.0, 1.0),
        AxisScale::Log => (1.0, 10.0),
    }
}
