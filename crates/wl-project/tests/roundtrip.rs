//! File round trips for session configurations.

use std::path::PathBuf;

use proptest::prelude::*;
use wl_core::{AxisScale, LineStyle};
use wl_project::{
    CurveDef, CurveEntryDef, LATEST_VERSION, ProjectError, SessionConfig, TrackDef, load, save,
};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("wl_project_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn sample() -> SessionConfig {
    SessionConfig {
        version: LATEST_VERSION,
        saved_at: Some("2026-01-02T03:04:05+00:00".to_string()),
        selected_wells: vec!["A-1".to_string(), "B-2".to_string()],
        tracks: vec![
            TrackDef {
                curves: vec![
                    CurveEntryDef::Spec(CurveDef {
                        curve: Some("GR".to_string()),
                        color: "#008000".to_string(),
                        width: 2,
                        line_style: LineStyle::Dashed,
                        primary: true,
                    }),
                    CurveEntryDef::Spec(CurveDef::default()),
                ],
                grid: true,
                x_min: Some(0.0),
                x_max: Some(150.0),
                ..TrackDef::default()
            },
            TrackDef {
                curves: vec![CurveEntryDef::Spec(CurveDef {
                    curve: Some("RES".to_string()),
                    primary: true,
                    ..CurveDef::default()
                })],
                scale: AxisScale::Log,
                flip_y: true,
                background_color: "#f0f0c8".to_string(),
                ..TrackDef::default()
            },
        ],
    }
}

#[test]
fn yaml_round_trip() {
    let path = scratch("session.yaml");
    let config = sample();
    save(&path, &config).unwrap();
    assert_eq!(load(&path).unwrap(), config);
}

#[test]
fn json_round_trip() {
    let path = scratch("session.json");
    let config = sample();
    save(&path, &config).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.trim_start().starts_with('{'));
    assert_eq!(load(&path).unwrap(), config);
}

#[test]
fn legacy_file_loads_as_latest() {
    let path = scratch("legacy.yml");
    std::fs::write(
        &path,
        "selected_wells: [W1]\ntracks:\n  - curves: [GR, RHOB]\n    bg_color: '#FFFFFF'\n  - curves: []\n",
    )
    .unwrap();

    let config = load(&path).unwrap();
    assert_eq!(config.version, LATEST_VERSION);
    assert_eq!(config.selected_wells, vec!["W1"]);
    assert_eq!(config.tracks.len(), 2);

    let names: Vec<_> = config.tracks[0]
        .curves
        .iter()
        .map(|c| c.curve_name())
        .collect();
    assert_eq!(names, vec![Some("GR"), Some("RHOB")]);
    assert!(config.tracks[1].curves.is_empty());
}

#[test]
fn invalid_files_are_rejected() {
    let path = scratch("broken.yaml");
    std::fs::write(&path, "tracks: [ {curves: ").unwrap();
    assert!(matches!(load(&path), Err(ProjectError::Yaml(_))));

    let path = scratch("future.json");
    std::fs::write(&path, r#"{"version": 7, "tracks": []}"#).unwrap();
    assert!(matches!(load(&path), Err(ProjectError::Validation(_))));

    let missing = scratch("does_not_exist.yaml");
    let _ = std::fs::remove_file(&missing);
    assert!(matches!(load(&missing), Err(ProjectError::Io(_))));
}

fn track_def() -> impl Strategy<Value = TrackDef> {
    (
        prop::collection::vec(prop::option::of("[A-Z]{2,5}"), 0..4),
        any::<bool>(),
        any::<bool>(),
        prop::option::of((-10_000i32..10_000).prop_map(f64::from)),
        1u8..=10,
    )
        .prop_map(|(names, grid, flip_x, x_min, width)| TrackDef {
            curves: names
                .into_iter()
                .enumerate()
                .map(|(slot, curve)| {
                    CurveEntryDef::Spec(CurveDef {
                        curve,
                        width,
                        primary: slot == 0,
                        ..CurveDef::default()
                    })
                })
                .collect(),
            grid,
            flip_x,
            x_min,
            ..TrackDef::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn json_preserves_any_layout(tracks in prop::collection::vec(track_def(), 0..5)) {
        let config = SessionConfig {
            version: LATEST_VERSION,
            saved_at: None,
            selected_wells: vec![],
            tracks,
        };
        let text = serde_json::to_string(&config).unwrap();
        let back = wl_project::parse_json(&text).unwrap();
        prop_assert_eq!(back, config);
    }
}
