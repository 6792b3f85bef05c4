//! Figure construction.

use tracing::debug;
use wl_core::AxisScale;
use wl_tracks::{CurveSpec, TrackSpec};
use wl_wells::WellRecord;

use crate::axis::{drawable, x_axis, y_axis};
use crate::figure::{
    AxisLabel, DEPTH_LABEL, Figure, NO_CURVES, NO_TRACKS, Panel, PlotLine, PlotPanel,
};

/// One figure per well, in the order given.
pub fn render(wells: &[&WellRecord], tracks: &[TrackSpec]) -> Vec<Figure> {
    wells.iter().map(|well| render_well(well, tracks)).collect()
}

pub fn render_well(well: &WellRecord, tracks: &[TrackSpec]) -> Figure {
    let panels = if tracks.is_empty() {
        vec![Panel::Placeholder {
            track_index: None,
            message: NO_TRACKS.to_string(),
        }]
    } else {
        tracks
            .iter()
            .enumerate()
            .map(|(i, track)| render_track(well, track, i == 0))
            .collect()
    };

    Figure {
        well_name: well.name().to_string(),
        title: format!("Well: {}", well.name()),
        panels,
    }
}

fn render_track(well: &WellRecord, track: &TrackSpec, first: bool) -> Panel {
    if track.curves.is_empty() {
        return Panel::Placeholder {
            track_index: Some(track.index()),
            message: NO_CURVES.to_string(),
        };
    }

    let depth = well.depth();
    let mut plotted: Vec<(&CurveSpec, &[f64])> = Vec::new();
    for spec in &track.curves {
        let Some(name) = spec.assigned_name() else {
            continue;
        };
        match well.curve(name) {
            Some(values) => plotted.push((spec, values)),
            None => debug!(
                well = well.name(),
                curve = name,
                track = track.index(),
                "curve not in well; skipped"
            ),
        }
    }

    let lines: Vec<PlotLine> = plotted
        .iter()
        .map(|(spec, values)| plot_line(spec, values, depth, track.scale))
        .collect();

    let x = x_axis(
        plotted.iter().flat_map(|(_, values)| values.iter().copied()),
        track.scale,
        track.x_min,
        track.x_max,
        track.flip_x,
    );
    let y = y_axis(depth, track.y_min, track.y_max, track.flip_y);

    // bottom axis belongs to the primary curve, or the first plotted one if
    // the primary slot is empty or missing from this well
    let bottom = plotted
        .iter()
        .position(|(spec, _)| spec.is_primary)
        .or((!plotted.is_empty()).then_some(0));
    let top = bottom.and_then(|b| (0..plotted.len()).find(|&i| i != b));
    let label = |i: usize| AxisLabel {
        text: lines[i].curve_name.clone(),
        color: lines[i].color,
    };

    Panel::Plot(PlotPanel {
        track_index: track.index(),
        x,
        y,
        grid: track.grid,
        background: track.background_color,
        y_label: first.then(|| DEPTH_LABEL.to_string()),
        bottom_label: bottom.map(label),
        top_label: top.map(label),
        legend: lines.iter().map(|l| l.curve_name.clone()).collect(),
        lines,
    })
}

fn plot_line(spec: &CurveSpec, values: &[f64], depth: &[f64], scale: AxisScale) -> PlotLine {
    let mut segments = Vec::new();
    let mut run: Vec<[f64; 2]> = Vec::new();
    for (&v, &d) in values.iter().zip(depth) {
        if drawable(v, scale) && d.is_finite() {
            run.push([v, d]);
        } else if !run.is_empty() {
            segments.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        segments.push(run);
    }

    PlotLine {
        curve_name: spec.assigned_name().unwrap_or_default().to_string(),
        segments,
        color: spec.color,
        width: spec.width(),
        style: spec.line_style,
    }
}
