//! LAS file -> `WellRecord`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::las::{LasError, LasFile};
use crate::record::{Curve, CurveInfo, RecordError, WellHeader, WellRecord};

/// Column names accepted as the depth index, compared case-insensitively.
pub const DEPTH_ALIASES: [&str; 3] = ["DEPT", "DEPTH", "MD"];

const DEFAULT_NULL: f64 = -999.25;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid LAS file: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: LasError,
    },

    #[error("{path} has no depth column (expected one of DEPT, DEPTH, MD; found {columns:?})")]
    MissingDepthColumn { path: PathBuf, columns: Vec<String> },

    #[error("{path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Format { path, .. }
            | LoadError::MissingDepthColumn { path, .. }
            | LoadError::Record { path, .. } => path,
        }
    }
}

/// What to do with a depth step where any column holds a missing value.
///
/// `DropRow` removes the whole step from every curve. It is lossy: one bad
/// sample in a rarely-used curve costs every other curve that depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValuePolicy {
    #[default]
    DropRow,
    /// Keep the step; missing samples become NaN and depth-less rows are still dropped.
    KeepNan,
}

/// Load a LAS file with the default whole-row drop policy.
pub fn load(path: &Path) -> LoadResult<WellRecord> {
    load_with(path, MissingValuePolicy::DropRow)
}

pub fn load_with(path: &Path, policy: MissingValuePolicy) -> LoadResult<WellRecord> {
    let bytes = fs::read(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    // LAS is ASCII by definition; tolerate stray Latin-1 bytes in headers.
    let text = String::from_utf8_lossy(&bytes);

    let las = LasFile::parse(&text).map_err(|e| LoadError::Format {
        path: path.to_path_buf(),
        source: e,
    })?;

    let record = record_from_las(las, path, policy)?;
    debug!(
        well = record.name(),
        rows = record.len(),
        dropped = record.dropped_rows(),
        "loaded {}",
        path.display()
    );
    Ok(record)
}

/// Turn a parsed file into a record: pick the depth column, apply the
/// missing-value policy, and resolve the well name.
pub fn record_from_las(
    las: LasFile,
    path: &Path,
    policy: MissingValuePolicy,
) -> LoadResult<WellRecord> {
    let columns = unique_column_names(&las);

    // match on the raw mnemonic; a repeated DEPT is still a depth column
    let Some(depth_idx) = las
        .curve_mnemonics()
        .position(|name| DEPTH_ALIASES.iter().any(|a| a.eq_ignore_ascii_case(name)))
    else {
        return Err(LoadError::MissingDepthColumn {
            path: path.to_path_buf(),
            columns,
        });
    };

    let null_value = las.null_value();
    let sentinel = null_value.unwrap_or(DEFAULT_NULL);
    let is_missing = |v: f64| !v.is_finite() || v == sentinel;

    let mut depth = Vec::with_capacity(las.rows.len());
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(las.rows.len()); columns.len()];
    let mut dropped_rows = 0;

    for row in &las.rows {
        let drop = match policy {
            MissingValuePolicy::DropRow => row.iter().any(|&v| is_missing(v)),
            MissingValuePolicy::KeepNan => is_missing(row[depth_idx]),
        };
        if drop {
            dropped_rows += 1;
            continue;
        }
        for (col, &v) in row.iter().enumerate() {
            if col == depth_idx {
                depth.push(v);
            } else {
                values[col].push(if is_missing(v) { f64::NAN } else { v });
            }
        }
    }

    let curves: Vec<Curve> = las
        .curves
        .iter()
        .zip(columns.iter())
        .zip(values)
        .enumerate()
        .filter(|(col, _)| *col != depth_idx)
        .map(|(_, ((item, name), values))| Curve {
            info: CurveInfo {
                name: name.clone(),
                unit: item.unit.clone(),
                description: item.description.clone(),
            },
            values,
        })
        .collect();

    let name = las
        .well_value("WELL")
        .map(str::to_string)
        .unwrap_or_else(|| file_name(path));

    let header = WellHeader {
        well: las.well_value("WELL").map(str::to_string),
        uwi: las.well_value("UWI").map(str::to_string),
        field: las.well_value("FLD").map(str::to_string),
        company: las.well_value("COMP").map(str::to_string),
        null_value,
        depth_unit: Some(las.curves[depth_idx].unit.clone()).filter(|u| !u.is_empty()),
        las_version: las.version.clone(),
    };

    let record = WellRecord::new(name, depth, curves, path)
        .map_err(|e| LoadError::Record {
            path: path.to_path_buf(),
            source: e,
        })?
        .with_header(header)
        .with_dropped_rows(dropped_rows);

    Ok(record)
}

/// Curve mnemonics with repeats disambiguated as `GR:1`, `GR:2`, ...
fn unique_column_names(las: &LasFile) -> Vec<String> {
    let mnemonics: Vec<&str> = las.curve_mnemonics().collect();
    let mut seen = std::collections::HashMap::<&str, usize>::new();

    mnemonics
        .iter()
        .map(|&m| {
            let total = mnemonics.iter().filter(|&&other| other == m).count();
            if total == 1 {
                return m.to_string();
            }
            let n = seen.entry(m).or_insert(0);
            *n += 1;
            format!("{m}:{n}")
        })
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `*.las` files directly inside `dir`, sorted by file name.
pub fn find_las_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_las = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("las"))
            .unwrap_or(false);
        if is_las && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
