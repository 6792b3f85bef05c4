//! Schema migration framework.

use crate::ProjectError;
use crate::schema::{CurveDef, CurveEntryDef, DEFAULT_CURVE_COLOR, SessionConfig};

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut config: SessionConfig) -> Result<SessionConfig, ProjectError> {
    while config.version < LATEST_VERSION {
        config = migrate_one_version(config)?;
    }
    Ok(config)
}

fn migrate_one_version(config: SessionConfig) -> Result<SessionConfig, ProjectError> {
    match config.version {
        1 => migrate_v1_to_v2(config),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// v1 stored bare curve names per track; v2 stores full curve settings.
/// The first slot of each track becomes the primary curve.
fn migrate_v1_to_v2(mut config: SessionConfig) -> Result<SessionConfig, ProjectError> {
    for track in &mut config.tracks {
        let has_primary = track
            .curves
            .iter()
            .any(|c| matches!(c, CurveEntryDef::Spec(def) if def.primary));

        for (slot, entry) in track.curves.iter_mut().enumerate() {
            if let CurveEntryDef::Name(_) = entry {
                *entry = CurveEntryDef::Spec(CurveDef {
                    curve: entry.curve_name().map(str::to_string),
                    color: DEFAULT_CURVE_COLOR.to_string(),
                    primary: slot == 0 && !has_primary,
                    ..CurveDef::default()
                });
            }
        }
    }

    config.version = 2;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TrackDef;

    #[test]
    fn migrate_latest_is_noop() {
        let config = SessionConfig {
            version: LATEST_VERSION,
            saved_at: None,
            selected_wells: vec!["A".to_string()],
            tracks: vec![TrackDef::default()],
        };

        let migrated = migrate_to_latest(config.clone()).unwrap();
        assert_eq!(migrated, config);
    }

    #[test]
    fn migrate_bare_names_to_curve_defs() {
        let config = SessionConfig {
            version: 1,
            saved_at: None,
            selected_wells: vec!["A".to_string()],
            tracks: vec![TrackDef {
                curves: vec![
                    CurveEntryDef::Name("GR".to_string()),
                    CurveEntryDef::Name("Select Curve".to_string()),
                ],
                background_color: "#eeeeee".to_string(),
                ..TrackDef::default()
            }],
        };

        let migrated = migrate_to_latest(config).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);

        let track = &migrated.tracks[0];
        assert_eq!(track.background_color, "#eeeeee");
        let defs: Vec<&CurveDef> = track
            .curves
            .iter()
            .map(|c| match c {
                CurveEntryDef::Spec(def) => def,
                CurveEntryDef::Name(n) => panic!("unmigrated entry {n}"),
            })
            .collect();
        assert_eq!(defs[0].curve.as_deref(), Some("GR"));
        assert!(defs[0].primary);
        assert_eq!(defs[1].curve, None);
        assert!(!defs[1].primary);
    }

    #[test]
    fn unknown_old_version_fails() {
        let config = SessionConfig {
            version: 0,
            saved_at: None,
            selected_wells: vec![],
            tracks: vec![],
        };
        assert!(matches!(
            migrate_to_latest(config),
            Err(ProjectError::Migration { .. })
        ));
    }
}
