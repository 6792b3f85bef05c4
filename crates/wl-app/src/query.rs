//! Query helpers over the loaded wells.

use std::path::PathBuf;

use serde::Serialize;
use wl_wells::{WellRecord, WellRegistry};

use crate::error::AppResult;

/// Summary of one loaded well for listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WellSummary {
    pub name: String,
    pub source_path: PathBuf,
    pub rows: usize,
    pub dropped_rows: usize,
    pub depth_range: Option<(f64, f64)>,
    pub depth_unit: Option<String>,
    pub las_version: String,
    pub curves: Vec<String>,
}

impl WellSummary {
    fn from_record(well: &WellRecord) -> Self {
        let header = well.header();
        Self {
            name: well.name().to_string(),
            source_path: well.source_path().to_path_buf(),
            rows: well.len(),
            dropped_rows: well.dropped_rows(),
            depth_range: well.depth_range(),
            depth_unit: header.depth_unit.clone(),
            las_version: header.las_version.clone(),
            curves: well.curve_names().map(str::to_string).collect(),
        }
    }
}

/// All loaded wells, in load order.
pub fn list_wells(registry: &WellRegistry) -> Vec<WellSummary> {
    registry.iter().map(WellSummary::from_record).collect()
}

pub fn get_well_summary(registry: &WellRegistry, name: &str) -> AppResult<WellSummary> {
    Ok(WellSummary::from_record(registry.get(name)?))
}

/// Sorted union of curve names across every loaded well.
pub fn available_curves(registry: &WellRegistry) -> Vec<String> {
    registry.available_curves()
}
