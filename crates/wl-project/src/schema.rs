//! Session configuration schema definitions.

use serde::{Deserialize, Serialize};
use wl_core::{AxisScale, LineStyle};

/// Text the legacy format stored for a curve slot with nothing picked.
pub const UNSELECTED_CURVE: &str = "Select Curve";

pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_CURVE_COLOR: &str = "#0000ff";
pub const DEFAULT_CURVE_WIDTH: u8 = 1;

/// Saved selection and track layout.
///
/// Files without a `version` field are the legacy layout (version 1):
/// ```yaml
/// selected_wells: [A-1, B-2]
/// tracks:
///   - curves: [GR, Select Curve]
///     bg_color: "#FFFFFF"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "legacy_version")]
    pub version: u32,
    /// RFC 3339 time of the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub selected_wells: Vec<String>,
    #[serde(default)]
    pub tracks: Vec<TrackDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackDef {
    #[serde(default)]
    pub curves: Vec<CurveEntryDef>,
    #[serde(default = "default_background", alias = "bg_color")]
    pub background_color: String,
    #[serde(default)]
    pub grid: bool,
    #[serde(default)]
    pub flip_x: bool,
    #[serde(default)]
    pub flip_y: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
    #[serde(default)]
    pub scale: AxisScale,
}

impl Default for TrackDef {
    fn default() -> Self {
        Self {
            curves: Vec::new(),
            background_color: default_background(),
            grid: false,
            flip_x: false,
            flip_y: false,
            x_min: None,
            x_max: None,
            y_min: None,
            y_max: None,
            scale: AxisScale::Linear,
        }
    }
}

/// A curve slot: a bare name (legacy) or full display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CurveEntryDef {
    Name(String),
    Spec(CurveDef),
}

impl CurveEntryDef {
    /// Assigned curve name; empty and placeholder names count as unassigned.
    pub fn curve_name(&self) -> Option<&str> {
        let name = match self {
            CurveEntryDef::Name(name) => Some(name.as_str()),
            CurveEntryDef::Spec(def) => def.curve.as_deref(),
        };
        name.map(str::trim)
            .filter(|n| !n.is_empty() && *n != UNSELECTED_CURVE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    #[serde(default = "default_curve_color")]
    pub color: String,
    #[serde(default = "default_curve_width")]
    pub width: u8,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default)]
    pub primary: bool,
}

impl Default for CurveDef {
    fn default() -> Self {
        Self {
            curve: None,
            color: default_curve_color(),
            width: DEFAULT_CURVE_WIDTH,
            line_style: LineStyle::Solid,
            primary: false,
        }
    }
}

fn legacy_version() -> u32 {
    1
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

fn default_curve_color() -> String {
    DEFAULT_CURVE_COLOR.to_string()
}

fn default_curve_width() -> u8 {
    DEFAULT_CURVE_WIDTH
}
