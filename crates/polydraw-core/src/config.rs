//! Canvas configuration.

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::shapes::{Polygon, RgbColor, ShapeStyle};
use serde::{Deserialize, Serialize};

/// Colors used by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Outline color for new shapes.
    pub stroke: RgbColor,
    /// Fill color for new shapes.
    pub fill: RgbColor,
    /// Outline color of the selected shape.
    pub selection: RgbColor,
    /// Canvas background.
    pub background: RgbColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stroke: RgbColor::black(),
            fill: RgbColor::crimson(),
            selection: RgbColor::blue(),
            background: RgbColor::white(),
        }
    }
}

/// Canvas configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub palette: Palette,
    /// Whether new shapes start out filled.
    pub filled: bool,
    /// Number of undoable changes kept.
    pub history_capacity: usize,
    /// Per-axis distance from the first point that closes a polygon.
    pub polygon_close_tolerance: i32,
    /// Transform targets are clamped to `0..=canvas_width`.
    pub canvas_width: i32,
    /// Transform targets are clamped to `0..=canvas_height`.
    pub canvas_height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            filled: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            polygon_close_tolerance: Polygon::DEFAULT_CLOSE_TOLERANCE,
            canvas_width: 1920,
            canvas_height: 1080,
        }
    }
}

impl CanvasConfig {
    /// Style applied to newly created shapes.
    pub fn initial_style(&self) -> ShapeStyle {
        ShapeStyle::new(self.palette.stroke, self.palette.fill, self.filled)
    }
}
