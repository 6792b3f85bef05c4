//! Saving and restoring the well selection and track layout.

use std::path::Path;

use tracing::{debug, info};
use wl_core::Rgb;
use wl_project::{CurveDef, CurveEntryDef, LATEST_VERSION, SessionConfig, TrackDef};
use wl_tracks::{CurveSpec, TrackEdit, TrackList, TrackSpec};

use crate::error::AppResult;
use crate::session::Selection;

/// Snapshot the selection and tracks as the latest configuration schema.
pub fn config_from_session(selection: &Selection, tracks: &TrackList) -> SessionConfig {
    SessionConfig {
        version: LATEST_VERSION,
        saved_at: Some(chrono::Utc::now().to_rfc3339()),
        selected_wells: selection.names().to_vec(),
        tracks: tracks.iter().map(track_def).collect(),
    }
}

fn track_def(track: &TrackSpec) -> TrackDef {
    TrackDef {
        curves: track
            .curves
            .iter()
            .map(|c| {
                CurveEntryDef::Spec(CurveDef {
                    curve: c.curve_name.clone(),
                    color: c.color.to_hex(),
                    width: c.width(),
                    line_style: c.line_style,
                    primary: c.is_primary,
                })
            })
            .collect(),
        background_color: track.background_color.to_hex(),
        grid: track.grid,
        flip_x: track.flip_x,
        flip_y: track.flip_y,
        x_min: track.x_min,
        x_max: track.x_max,
        y_min: track.y_min,
        y_max: track.y_max,
        scale: track.scale,
    }
}

/// Rebuild a selection and track list from a (migrated, validated) config.
/// Tracks get fresh ids in file order.
pub fn session_parts_from_config(config: &SessionConfig) -> AppResult<(Selection, TrackList)> {
    let selection: Selection = config.selected_wells.iter().cloned().collect();

    let mut tracks = TrackList::new();
    for def in &config.tracks {
        let track = tracks.add_track()?;
        let id = track.id();
        track.curves = def
            .curves
            .iter()
            .map(curve_spec)
            .collect::<AppResult<Vec<_>>>()?;
        track.background_color = def.background_color.parse()?;
        track.grid = def.grid;
        track.flip_x = def.flip_x;
        track.flip_y = def.flip_y;
        track.x_min = def.x_min;
        track.x_max = def.x_max;
        track.y_min = def.y_min;
        track.y_max = def.y_max;
        track.scale = def.scale;

        let has_primary = track.curves.iter().any(|c| c.is_primary);
        if !has_primary && !track.curves.is_empty() {
            tracks.apply(TrackEdit::SetPrimary { track: id, slot: 0 })?;
        }
    }

    Ok((selection, tracks))
}

fn curve_spec(entry: &CurveEntryDef) -> AppResult<CurveSpec> {
    let mut spec = match entry {
        CurveEntryDef::Name(_) => CurveSpec::unassigned(false),
        CurveEntryDef::Spec(def) => CurveSpec::unassigned(def.primary)
            .with_color(def.color.parse::<Rgb>()?)
            .with_width(def.width)
            .with_style(def.line_style),
    };
    spec.curve_name = entry.curve_name().map(str::to_string);
    Ok(spec)
}

/// Write the selection and tracks; the format follows the file extension.
pub fn save_configuration(path: &Path, selection: &Selection, tracks: &TrackList) -> AppResult<()> {
    let config = config_from_session(selection, tracks);
    wl_project::save(path, &config)?;
    info!(
        path = %path.display(),
        wells = selection.len(),
        tracks = tracks.len(),
        "saved configuration"
    );
    Ok(())
}

pub fn load_configuration(path: &Path) -> AppResult<(Selection, TrackList)> {
    let config = wl_project::load(path)?;
    debug!(
        path = %path.display(),
        saved_at = config.saved_at.as_deref().unwrap_or("-"),
        "read configuration"
    );
    let parts = session_parts_from_config(&config)?;
    info!(
        path = %path.display(),
        wells = parts.0.len(),
        tracks = parts.1.len(),
        "loaded configuration"
    );
    Ok(parts)
}
