//! Batch loading of LAS files into the registry.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use wl_wells::{MissingValuePolicy, RegisterOutcome, WellRegistry, find_las_files, load_with};

use crate::error::{AppError, AppResult};

/// A file that could not be loaded, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of a batch load. One bad file never stops the batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Well names newly registered, in load order.
    pub loaded: Vec<String>,
    /// Well names skipped because a well with that name was already loaded.
    pub duplicates: Vec<String>,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load each file and register it. Failures are collected, not returned.
pub fn load_paths(
    registry: &mut WellRegistry,
    paths: &[PathBuf],
    policy: MissingValuePolicy,
) -> LoadReport {
    let mut report = LoadReport::default();

    for path in paths {
        match load_with(path, policy) {
            Ok(record) => {
                let name = record.name().to_string();
                let rows = record.len();
                match registry.register(record) {
                    RegisterOutcome::Added => {
                        info!(well = %name, rows, path = %path.display(), "loaded well");
                        report.loaded.push(name);
                    }
                    RegisterOutcome::Duplicate => report.duplicates.push(name),
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load LAS file");
                report.failures.push(LoadFailure {
                    path: path.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

/// Load every `*.las` file directly inside `dir`, in file-name order.
pub fn load_folder(
    registry: &mut WellRegistry,
    dir: &Path,
    policy: MissingValuePolicy,
) -> AppResult<LoadReport> {
    let files = find_las_files(dir).map_err(|e| AppError::FolderRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    if files.is_empty() {
        warn!(dir = %dir.display(), "no LAS files found");
    }
    Ok(load_paths(registry, &files, policy))
}

/// Expand a mix of files and folders into the LAS files to load.
/// Folders contribute their `*.las` files; files are taken as given.
pub fn collect_las_paths(inputs: &[PathBuf]) -> AppResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let files = find_las_files(input).map_err(|e| AppError::FolderRead {
                path: input.clone(),
                source: e,
            })?;
            paths.extend(files);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

/// Files and folders in one go, as the CLI takes them.
pub fn load_inputs(
    registry: &mut WellRegistry,
    inputs: &[PathBuf],
    policy: MissingValuePolicy,
) -> AppResult<LoadReport> {
    let paths = collect_las_paths(inputs)?;
    Ok(load_paths(registry, &paths, policy))
}
