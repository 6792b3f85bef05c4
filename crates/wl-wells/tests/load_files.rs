//! Integration tests for loading LAS files from disk.

use std::path::PathBuf;

use wl_wells::{LoadError, RegisterOutcome, WellRegistry, find_las_files, load};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn las_text(well: &str, rows: &str) -> String {
    format!(
        "~VERSION INFORMATION\n\
         VERS. 2.0 : CWLS LOG ASCII STANDARD\n\
         WRAP. NO  : ONE LINE PER DEPTH STEP\n\
         ~WELL INFORMATION\n\
         NULL. -999.25 : NULL VALUE\n\
         WELL. {well} : WELL\n\
         ~CURVE INFORMATION\n\
         DEPT.M      : DEPTH\n\
         GR  .GAPI   : GAMMA RAY\n\
         RHOB.G/C3   : BULK DENSITY\n\
         ~A\n{rows}"
    )
}

#[test]
fn missing_rhob_row_is_dropped_from_every_curve() {
    let dir = scratch_dir("wl_wells_drop_row");
    let path = dir.join("well_a.las");
    let rows = "1000.0 45.0 2.45\n\
                1000.5 47.0 2.47\n\
                1001.0 49.0 -999.25\n\
                1001.5 51.0 2.51\n\
                1002.0 53.0 2.53\n";
    std::fs::write(&path, las_text("WELL A", rows)).unwrap();

    let record = load(&path).unwrap();

    assert_eq!(record.name(), "WELL A");
    assert_eq!(record.curves().len(), 2);
    assert_eq!(record.curve_names().collect::<Vec<_>>(), vec!["GR", "RHOB"]);
    assert_eq!(record.len(), 4);
    assert_eq!(record.depth(), &[1000.0, 1000.5, 1001.5, 1002.0]);
    for curve in record.curves() {
        assert_eq!(curve.values.len(), record.depth().len());
    }
    assert_eq!(record.source_path(), path.as_path());
}

#[test]
fn unreadable_and_invalid_files_fail_per_file() {
    let dir = scratch_dir("wl_wells_bad_files");

    let missing = dir.join("missing.las");
    assert!(matches!(load(&missing), Err(LoadError::Read { .. })));

    let garbage = dir.join("garbage.las");
    std::fs::write(&garbage, "this is not a log\n").unwrap();
    let err = load(&garbage).unwrap_err();
    assert!(matches!(err, LoadError::Format { .. }));
    assert_eq!(err.path(), garbage.as_path());

    let no_depth = dir.join("no_depth.las");
    std::fs::write(&no_depth, "~C\nTIME.S :\nGR.API :\n~A\n1 2\n").unwrap();
    assert!(matches!(
        load(&no_depth),
        Err(LoadError::MissingDepthColumn { .. })
    ));
}

#[test]
fn same_well_name_registers_once() {
    let dir = scratch_dir("wl_wells_duplicates");
    let first = dir.join("a.las");
    let second = dir.join("b.las");
    std::fs::write(&first, las_text("DUP", "1.0 2.0 3.0\n")).unwrap();
    std::fs::write(&second, las_text("DUP", "5.0 6.0 7.0\n")).unwrap();

    let mut registry = WellRegistry::new();
    assert_eq!(registry.register(load(&first).unwrap()), RegisterOutcome::Added);
    assert_eq!(
        registry.register(load(&second).unwrap()),
        RegisterOutcome::Duplicate
    );

    assert_eq!(registry.all_names().len(), 1);
    assert_eq!(registry.get("DUP").unwrap().depth(), &[1.0]);
}

#[test]
fn folder_scan_finds_las_files_in_name_order() {
    let dir = scratch_dir("wl_wells_folder_scan");
    std::fs::write(dir.join("b.LAS"), las_text("B", "1 2 3\n")).unwrap();
    std::fs::write(dir.join("a.las"), las_text("A", "1 2 3\n")).unwrap();
    std::fs::write(dir.join("notes.txt"), "ignore me").unwrap();
    std::fs::create_dir_all(dir.join("nested.las")).unwrap();

    let files = find_las_files(&dir).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.las", "b.LAS"]);
}
