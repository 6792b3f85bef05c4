//! End-to-end flow: load a folder, lay out tracks, save, restore, render.

use std::path::PathBuf;

use proptest::prelude::*;
use wl_app::{
    AppError, Selection, Session, list_wells, load_configuration, load_folder, load_inputs,
    render_session, save_configuration,
};
use wl_core::Rgb;
use wl_render::{NO_TRACKS, Panel};
use wl_tracks::{TrackEdit, TrackList};
use wl_wells::MissingValuePolicy;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn las_text(well: &str) -> String {
    format!(
        "~V\nVERS. 2.0 :\nWRAP. NO :\n\
         ~W\nWELL. {well} :\nNULL. -999.25 :\n\
         ~C\nDEPTH.FT :\nGR.API :\nRHOB.G/C3 :\n\
         ~A\n\
         5000 55 2.31\n\
         5001 -999.25 2.35\n\
         5002 61 2.40\n"
    )
}

fn write_fixture_folder(name: &str) -> PathBuf {
    let dir = scratch_dir(name);
    std::fs::write(dir.join("01_alpha.las"), las_text("ALPHA")).unwrap();
    std::fs::write(dir.join("02_beta.las"), las_text("BETA")).unwrap();
    std::fs::write(dir.join("03_alpha_again.las"), las_text("ALPHA")).unwrap();
    std::fs::write(dir.join("04_broken.las"), "~A\n1 2 3\n").unwrap();
    dir
}

#[test]
fn folder_load_reports_each_file() {
    let dir = write_fixture_folder("wl_app_folder_report");
    let mut session = Session::new();

    let report = load_folder(&mut session.registry, &dir, MissingValuePolicy::DropRow).unwrap();

    assert_eq!(report.loaded, vec!["ALPHA", "BETA"]);
    assert_eq!(report.duplicates, vec!["ALPHA"]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("04_broken.las"));
    assert!(!report.is_clean());

    let wells = list_wells(&session.registry);
    assert_eq!(wells.len(), 2);
    assert_eq!(wells[0].rows, 2);
    assert_eq!(wells[0].dropped_rows, 1);
    assert_eq!(wells[0].curves, vec!["GR", "RHOB"]);
}

#[test]
fn missing_folder_is_an_error() {
    let mut session = Session::new();
    let dir = std::env::temp_dir().join("wl_app_no_such_folder");
    let _ = std::fs::remove_dir_all(&dir);
    assert!(matches!(
        load_folder(&mut session.registry, &dir, MissingValuePolicy::DropRow),
        Err(AppError::FolderRead { .. })
    ));
}

#[test]
fn save_restore_and_render() {
    let dir = write_fixture_folder("wl_app_save_restore");
    let mut session = Session::new();
    load_inputs(
        &mut session.registry,
        std::slice::from_ref(&dir),
        MissingValuePolicy::KeepNan,
    )
    .unwrap();
    session.select_well("BETA").unwrap();
    session.select_well("ALPHA").unwrap();

    let id = session.apply(TrackEdit::AddTrack).unwrap();
    session
        .apply(TrackEdit::AssignCurve {
            track: id,
            slot: 0,
            curve_name: Some("GR".into()),
        })
        .unwrap();
    session
        .apply(TrackEdit::AddCurve {
            track: id,
            curve_name: Some("RHOB".into()),
        })
        .unwrap();
    session
        .apply(TrackEdit::SetBackground {
            track: id,
            color: Rgb::new(250, 250, 210),
        })
        .unwrap();

    let path = dir.join("layout.yaml");
    save_configuration(&path, &session.selection, &session.tracks).unwrap();

    let mut restored = Session::new();
    restored.registry = session.registry.clone();
    let (selection, tracks) = load_configuration(&path).unwrap();
    restored.replace_layout(selection, tracks);

    assert_eq!(restored.selection.names(), &["BETA", "ALPHA"]);
    let track = restored.tracks.at_index(1).unwrap();
    assert_eq!(track.curve_names().collect::<Vec<_>>(), vec!["GR", "RHOB"]);
    assert_eq!(track.background_color, Rgb::new(250, 250, 210));

    let figures = render_session(&restored);
    assert_eq!(figures.len(), 2);
    assert_eq!(figures[0].title, "Well: BETA");
    let plot = figures[0].panels[0].as_plot().unwrap();
    assert_eq!(plot.legend, vec!["GR", "RHOB"]);
    // KeepNan leaves a gap in GR at 5001
    assert_eq!(plot.lines[0].segments.len(), 2);
    assert_eq!(plot.lines[1].point_count(), 3);

    restored.tracks.clear();
    let figures = render_session(&restored);
    assert_eq!(
        figures[1].panels,
        vec![Panel::Placeholder {
            track_index: None,
            message: NO_TRACKS.to_string()
        }]
    );
}

#[test]
fn padded_curve_names_restore_exactly() {
    let dir = scratch_dir("wl_app_padded_names");
    let path = dir.join("layout.json");
    let mut tracks = TrackList::new();
    let id = tracks.apply(TrackEdit::AddTrack).unwrap();
    tracks
        .apply(TrackEdit::AssignCurve {
            track: id,
            slot: 0,
            curve_name: Some(" GR".into()),
        })
        .unwrap();

    save_configuration(&path, &Selection::new(), &tracks).unwrap();
    let (_, restored) = load_configuration(&path).unwrap();

    assert_eq!(restored.as_slice()[0].curves, tracks.as_slice()[0].curves);
    assert_eq!(restored.as_slice()[0].curves[0].curve_name.as_deref(), Some("GR"));
}

#[test]
fn legacy_configuration_file_loads() {
    let dir = scratch_dir("wl_app_legacy_config");
    let path = dir.join("old.yaml");
    std::fs::write(
        &path,
        "selected_wells: [ALPHA]\ntracks:\n  - curves: [GR, Select Curve]\n    bg_color: '#FFFFFF'\n",
    )
    .unwrap();

    let (selection, tracks) = load_configuration(&path).unwrap();
    assert_eq!(selection.names(), &["ALPHA"]);
    let track = tracks.at_index(1).unwrap();
    assert_eq!(track.curves.len(), 2);
    assert_eq!(track.curve_names().collect::<Vec<_>>(), vec!["GR"]);
    assert_eq!(track.background_color, Rgb::WHITE);
}

#[derive(Debug, Clone)]
struct TrackLayout {
    curves: Vec<Option<String>>,
    background: (u8, u8, u8),
}

fn layout() -> impl Strategy<Value = TrackLayout> {
    (
        prop::collection::vec(prop::option::of(" ?[A-Z]{2,4}[0-9] ?"), 0..4),
        any::<(u8, u8, u8)>(),
    )
        .prop_map(|(curves, background)| TrackLayout { curves, background })
}

fn build(layouts: &[TrackLayout]) -> TrackList {
    let mut tracks = TrackList::new();
    for layout in layouts {
        let id = tracks.add_track().unwrap().id();
        tracks.remove_curve(id, 0).unwrap();
        for name in &layout.curves {
            tracks.add_curve(id, name.clone()).unwrap();
        }
        let (r, g, b) = layout.background;
        tracks
            .apply(TrackEdit::SetBackground {
                track: id,
                color: Rgb::new(r, g, b),
            })
            .unwrap();
    }
    tracks
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn configuration_round_trip(
        wells in prop::collection::vec("W[0-9A-Z-]{0,6}", 0..4),
        layouts in prop::collection::vec(layout(), 0..4),
        json in any::<bool>(),
    ) {
        let selection: Selection = wells.iter().cloned().collect();
        let tracks = build(&layouts);
        let dir = std::env::temp_dir().join("wl_app_roundtrip_prop");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(if json { "layout.json" } else { "layout.yaml" });

        save_configuration(&path, &selection, &tracks).unwrap();
        let (back_selection, back_tracks) = load_configuration(&path).unwrap();

        prop_assert_eq!(back_selection.names(), selection.names());
        prop_assert_eq!(back_tracks.len(), tracks.len());
        for (a, b) in tracks.iter().zip(back_tracks.iter()) {
            prop_assert_eq!(&a.curves, &b.curves);
            prop_assert_eq!(a.background_color, b.background_color);
            prop_assert_eq!(a.index(), b.index());
        }
    }
}
