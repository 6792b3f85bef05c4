//! Immutable, depth-indexed well records.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("curve {name} has {len} samples but depth has {depth_len}")]
    LengthMismatch {
        name: String,
        len: usize,
        depth_len: usize,
    },

    #[error("curve {name} appears more than once")]
    DuplicateCurve { name: String },
}

/// Header metadata kept alongside the samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WellHeader {
    pub well: Option<String>,
    pub uwi: Option<String>,
    pub field: Option<String>,
    pub company: Option<String>,
    pub null_value: Option<f64>,
    pub depth_unit: Option<String>,
    pub las_version: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveInfo {
    pub name: String,
    pub unit: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub info: CurveInfo,
    pub values: Vec<f64>,
}

impl Curve {
    pub fn name(&self) -> &str {
        &self.info.name
    }
}

/// One loaded well. Every curve has exactly one sample per depth step.
#[derive(Debug, Clone, PartialEq)]
pub struct WellRecord {
    name: String,
    depth: Vec<f64>,
    curves: Vec<Curve>,
    source_path: PathBuf,
    header: WellHeader,
    dropped_rows: usize,
}

impl WellRecord {
    pub fn new(
        name: impl Into<String>,
        depth: Vec<f64>,
        curves: Vec<Curve>,
        source_path: impl Into<PathBuf>,
    ) -> Result<Self, RecordError> {
        for (i, curve) in curves.iter().enumerate() {
            if curve.values.len() != depth.len() {
                return Err(RecordError::LengthMismatch {
                    name: curve.info.name.clone(),
                    len: curve.values.len(),
                    depth_len: depth.len(),
                });
            }
            if curves[..i].iter().any(|c| c.info.name == curve.info.name) {
                return Err(RecordError::DuplicateCurve {
                    name: curve.info.name.clone(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            depth,
            curves,
            source_path: source_path.into(),
            header: WellHeader::default(),
            dropped_rows: 0,
        })
    }

    pub fn with_header(mut self, header: WellHeader) -> Self {
        self.header = header;
        self
    }

    pub fn with_dropped_rows(mut self, dropped_rows: usize) -> Self {
        self.dropped_rows = dropped_rows;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Curve names in file column order (depth excluded).
    pub fn curve_names(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(Curve::name)
    }

    pub fn curve(&self, name: &str) -> Option<&[f64]> {
        self.curves
            .iter()
            .find(|c| c.info.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn curve_info(&self, name: &str) -> Option<&CurveInfo> {
        self.curves
            .iter()
            .find(|c| c.info.name == name)
            .map(|c| &c.info)
    }

    pub fn has_curve(&self, name: &str) -> bool {
        self.curve(name).is_some()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn header(&self) -> &WellHeader {
        &self.header
    }

    /// Rows removed by the loader's missing-value policy.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Shallowest and deepest finite depth.
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        wl_core::finite_extent(self.depth.iter().copied())
    }
}
