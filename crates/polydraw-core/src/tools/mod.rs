//! Tool system for the canvas.

use crate::geometry::Point;
use crate::shapes::{Polygon, ShapeKind, ShapeStyle};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Square,
    Triangle,
    Circle,
    Polygon,
    Select,
    Transform,
}

impl ToolKind {
    /// The shape this tool draws, if it is a drawing tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Square => Some(ShapeKind::Square),
            ToolKind::Triangle => Some(ShapeKind::Triangle),
            ToolKind::Circle => Some(ShapeKind::Circle),
            ToolKind::Polygon => Some(ShapeKind::Polygon),
            ToolKind::Select | ToolKind::Transform => None,
        }
    }
}

/// What a click did to the shape under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The current tool does not draw.
    Ignored,
    /// The point was stored; more are needed.
    Pending,
    /// Enough points were collected to build a shape.
    Complete { kind: ShapeKind, points: Vec<Point> },
}

/// Manages the current tool and the points collected for the next shape.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current style to apply to new shapes.
    pub current_style: ShapeStyle,
    /// Per-axis distance that closes a polygon.
    pub close_tolerance: i32,
    /// Clicks collected so far.
    pending: Vec<Point>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self {
            current_tool: ToolKind::default(),
            current_style: ShapeStyle::default(),
            close_tolerance: Polygon::DEFAULT_CLOSE_TOLERANCE,
            pending: Vec::new(),
        }
    }
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool. Any half-built shape is discarded.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if !self.pending.is_empty() {
            log::debug!(
                "Discarding {} pending point(s) on switch to {:?}",
                self.pending.len(),
                tool
            );
        }
        self.current_tool = tool;
        self.pending.clear();
    }

    /// Points collected for the shape under construction.
    pub fn pending_points(&self) -> &[Point] {
        &self.pending
    }

    pub fn is_constructing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Discard collected points.
    pub fn cancel(&mut self) {
        self.pending.clear();
    }

    /// Feed a click to the current tool.
    ///
    /// Polygons close on a click near the first point, but only once at least
    /// three corners exist; before that a nearby click is just another corner.
    pub fn accept_click(&mut self, point: Point) -> ClickOutcome {
        let Some(kind) = self.current_tool.shape_kind() else {
            return ClickOutcome::Ignored;
        };

        if kind == ShapeKind::Polygon {
            let closes = self.pending.len() >= Polygon::MIN_POINTS
                && Polygon::closes_at(self.pending[0], point, self.close_tolerance);
            if closes {
                return ClickOutcome::Complete {
                    kind,
                    points: std::mem::take(&mut self.pending),
                };
            }
            self.pending.push(point);
            return ClickOutcome::Pending;
        }

        self.pending.push(point);
        if self.pending.len() >= kind.required_points() {
            ClickOutcome::Complete {
                kind,
                points: std::mem::take(&mut self.pending),
            }
        } else {
            ClickOutcome::Pending
        }
    }
}
