//! Session configuration validation logic.

use std::collections::HashSet;

use wl_core::Rgb;

use crate::schema::{CurveEntryDef, SessionConfig, TrackDef};

const MIN_WIDTH: u8 = 1;
const MAX_WIDTH: u8 = 10;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(config: &SessionConfig) -> Result<(), ValidationError> {
    if config.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    let mut wells = HashSet::new();
    for name in &config.selected_wells {
        if !wells.insert(name) {
            return Err(ValidationError::DuplicateId {
                id: name.clone(),
                context: "selected_wells".to_string(),
            });
        }
    }

    for (i, track) in config.tracks.iter().enumerate() {
        validate_track(track, i + 1)?;
    }

    Ok(())
}

fn validate_track(track: &TrackDef, number: usize) -> Result<(), ValidationError> {
    check_color(
        &track.background_color,
        format!("tracks[{number}].background_color"),
    )?;

    let bounds = [
        ("x_min", track.x_min),
        ("x_max", track.x_max),
        ("y_min", track.y_min),
        ("y_max", track.y_max),
    ];
    for (name, value) in bounds {
        if let Some(v) = value
            && !v.is_finite()
        {
            return Err(ValidationError::InvalidValue {
                field: format!("tracks[{number}].{name}"),
                value: v.to_string(),
                reason: "axis bounds must be finite".to_string(),
            });
        }
    }

    for (slot, entry) in track.curves.iter().enumerate() {
        let CurveEntryDef::Spec(def) = entry else {
            continue;
        };
        let field = |what: &str| format!("tracks[{number}].curves[{slot}].{what}");

        check_color(&def.color, field("color"))?;
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&def.width) {
            return Err(ValidationError::InvalidValue {
                field: field("width"),
                value: def.width.to_string(),
                reason: format!("must be between {MIN_WIDTH} and {MAX_WIDTH}"),
            });
        }
        if let Some(name) = &def.curve
            && name.trim().is_empty()
        {
            return Err(ValidationError::InvalidValue {
                field: field("curve"),
                value: name.clone(),
                reason: "curve name is blank; omit the field for an empty slot".to_string(),
            });
        }
    }

    let primaries = track
        .curves
        .iter()
        .filter(|c| matches!(c, CurveEntryDef::Spec(def) if def.primary))
        .count();
    if primaries > 1 {
        return Err(ValidationError::InvalidValue {
            field: format!("tracks[{number}].curves"),
            value: primaries.to_string(),
            reason: "at most one primary curve per track".to_string(),
        });
    }

    Ok(())
}

fn check_color(text: &str, field: String) -> Result<(), ValidationError> {
    text.parse::<Rgb>()
        .map(|_| ())
        .map_err(|e| ValidationError::InvalidValue {
            field,
            value: text.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CurveDef;

    fn config(tracks: Vec<TrackDef>) -> SessionConfig {
        SessionConfig {
            version: 2,
            saved_at: None,
            selected_wells: vec!["A".to_string()],
            tracks,
        }
    }

    #[test]
    fn accepts_defaults() {
        validate_config(&config(vec![TrackDef::default()])).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let mut c = config(vec![]);
        c.version = 99;
        assert!(matches!(
            validate_config(&c),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        ));
    }

    #[test]
    fn rejects_bad_color_and_width() {
        let bad_bg = TrackDef {
            background_color: "not-a-color".to_string(),
            ..TrackDef::default()
        };
        assert!(validate_config(&config(vec![bad_bg])).is_err());

        let wide = TrackDef {
            curves: vec![CurveEntryDef::Spec(CurveDef {
                width: 11,
                ..CurveDef::default()
            })],
            ..TrackDef::default()
        };
        let err = validate_config(&config(vec![wide])).unwrap_err();
        assert!(err.to_string().contains("tracks[1].curves[0].width"), "{err}");
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let track = TrackDef {
            y_max: Some(f64::INFINITY),
            ..TrackDef::default()
        };
        assert!(validate_config(&config(vec![track])).is_err());
    }

    #[test]
    fn rejects_duplicate_selected_wells() {
        let mut c = config(vec![]);
        c.selected_wells.push("A".to_string());
        assert!(matches!(
            validate_config(&c),
            Err(ValidationError::DuplicateId { .. })
        ));
    }
}
