//! Draw descriptions handed to the external renderer.
//!
//! The core never rasterizes anything. Each frame is a complete, ordered list
//! of what to draw, back to front.

use crate::geometry::{Bounds, Point};
use crate::shapes::{RgbColor, ShapeId, ShapeKind};
use serde::Serialize;

/// Geometry to stroke (and optionally fill).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outline {
    /// Polyline through the points, closed from the last point back to the first.
    Closed(Vec<Point>),
    /// Circle with its enclosing square.
    Circle {
        center: Point,
        diameter: i32,
        bounds: Bounds,
    },
}

/// How to draw one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderDescription {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub outline: Outline,
    pub stroke: RgbColor,
    /// Interior color, `None` when the shape is not filled.
    pub fill: Option<RgbColor>,
}

/// Everything needed to redraw the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    pub background: RgbColor,
    /// Shapes in draw order.
    pub shapes: Vec<RenderDescription>,
    /// Clicks collected for a shape that is still being built.
    pub pending_points: Vec<Point>,
    /// Color for the pending point markers.
    pub marker_color: RgbColor,
}

impl RenderFrame {
    /// Description of a specific shape, if it is part of this frame.
    pub fn shape(&self, id: ShapeId) -> Option<&RenderDescription> {
        self.shapes.iter().find(|s| s.id == id)
    }
}
