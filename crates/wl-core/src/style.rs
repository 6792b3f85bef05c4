//! Line style and axis scale choices for a track.

use core::fmt;
use core::str::FromStr;

use crate::WlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    pub const ALL: [LineStyle; 4] = [
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::Dotted,
        LineStyle::DashDot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LineStyle::Solid => "Solid",
            LineStyle::Dashed => "Dashed",
            LineStyle::Dotted => "Dotted",
            LineStyle::DashDot => "Dash-dot",
        }
    }
}

impl FromStr for LineStyle {
    type Err = WlError;

    /// Accepts the display labels and the short codes `-`, `--`, `:`, `-.`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let style = match text {
            "-" => LineStyle::Solid,
            "--" => LineStyle::Dashed,
            ":" => LineStyle::Dotted,
            "-." => LineStyle::DashDot,
            _ => match text.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
                "solid" => LineStyle::Solid,
                "dashed" => LineStyle::Dashed,
                "dotted" => LineStyle::Dotted,
                "dashdot" => LineStyle::DashDot,
                _ => {
                    return Err(WlError::UnknownVariant {
                        what: "line style",
                        text: s.to_string(),
                    });
                }
            },
        };
        Ok(style)
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl FromStr for AxisScale {
    type Err = WlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(AxisScale::Linear),
            "log" => Ok(AxisScale::Log),
            _ => Err(WlError::UnknownVariant {
                what: "axis scale",
                text: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisScale::Linear => f.write_str("Linear"),
            AxisScale::Log => f.write_str("Log"),
        }
    }
}
