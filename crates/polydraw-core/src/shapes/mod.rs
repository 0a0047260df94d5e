//! Shape definitions for the canvas.

mod circle;
mod polygon;
mod square;
mod triangle;

pub use circle::Circle;
pub use polygon::Polygon;
pub use square::Square;
pub use triangle::Triangle;

use crate::geometry::{Point, rotate_points};
use crate::render::{Outline, RenderDescription};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Serializable RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub const fn crimson() -> Self {
        Self::new(220, 20, 60)
    }

    pub const fn blue() -> Self {
        Self::new(0, 0, 255)
    }

    /// `#rrggbb` form, as used by SVG output.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for RgbColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

impl From<RgbColor> for Color {
    fn from(color: RgbColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Outline color.
    pub stroke_color: RgbColor,
    /// Interior color, only drawn when `filled` is set.
    pub fill_color: RgbColor,
    /// Whether the interior is painted.
    pub filled: bool,
}

impl ShapeStyle {
    pub fn new(stroke_color: RgbColor, fill_color: RgbColor, filled: bool) -> Self {
        Self {
            stroke_color,
            fill_color,
            filled,
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: RgbColor::black(),
            fill_color: RgbColor::white(),
            filled: false,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// The closed set of shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    Triangle,
    Circle,
    Polygon,
}

impl ShapeKind {
    /// Number of clicked points needed to build this kind.
    pub fn required_points(self) -> usize {
        match self {
            ShapeKind::Square => Square::REQUIRED_POINTS,
            ShapeKind::Triangle => Triangle::REQUIRED_POINTS,
            ShapeKind::Circle => Circle::REQUIRED_POINTS,
            ShapeKind::Polygon => Polygon::MIN_POINTS,
        }
    }

    /// Number of stored vertices needed to draw this kind.
    pub fn renderable_vertices(self) -> usize {
        match self {
            ShapeKind::Square => 4,
            ShapeKind::Triangle => 3,
            ShapeKind::Circle => 2,
            ShapeKind::Polygon => 3,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// Shape construction and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{kind} needs at least {required} points, got {actual}")]
    InsufficientPoints {
        kind: ShapeKind,
        required: usize,
        actual: usize,
    },
    #[error("{kind} has {actual} vertices, needs {required} to render")]
    NotRenderable {
        kind: ShapeKind,
        required: usize,
        actual: usize,
    },
}

impl ShapeError {
    fn check_points(kind: ShapeKind, points: &[Point]) -> Result<(), ShapeError> {
        let required = kind.required_points();
        if points.len() < required {
            return Err(ShapeError::InsufficientPoints {
                kind,
                required,
                actual: points.len(),
            });
        }
        Ok(())
    }

    fn check_renderable(kind: ShapeKind, vertices: &[Point]) -> Result<(), ShapeError> {
        let required = kind.renderable_vertices();
        if vertices.len() < required {
            return Err(ShapeError::NotRenderable {
                kind,
                required,
                actual: vertices.len(),
            });
        }
        Ok(())
    }
}

/// Common trait for all shapes.
///
/// Vertex 0 is the pivot for rotation and the anchor for moves.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    fn kind(&self) -> ShapeKind;

    /// Ordered vertices; meaning depends on the variant.
    fn vertices(&self) -> &[Point];

    fn vertices_mut(&mut self) -> &mut Vec<Point>;

    /// Last rotation delta applied, in degrees.
    fn rotation(&self) -> i32;

    fn set_rotation(&mut self, degrees: i32);

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Geometry the renderer has to draw.
    fn outline(&self) -> Result<Outline, ShapeError>;

    /// Rotate every vertex but the pivot by `delta` degrees.
    fn rotate(&mut self, delta: i32) {
        let rotated = match self.vertices().split_first() {
            Some((&pivot, rest)) => rotate_points(pivot, rest, delta),
            None => Vec::new(),
        };
        if !rotated.is_empty() {
            self.vertices_mut()[1..].copy_from_slice(&rotated);
        }
        self.set_rotation(delta);
    }

    /// Move every vertex by (dx, dy).
    fn translate(&mut self, dx: i32, dy: i32) {
        for vertex in self.vertices_mut().iter_mut() {
            *vertex = vertex.offset(dx, dy);
        }
    }
}

/// Enum wrapper for all shape types.
///
/// `Clone` keeps the identity and is used for history snapshots;
/// [`Shape::duplicate`] produces an independent instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Square(Square),
    Triangle(Triangle),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Build a shape of `kind` from clicked points.
    pub fn build(kind: ShapeKind, points: &[Point], style: ShapeStyle) -> Result<Shape, ShapeError> {
        let mut shape = match kind {
            ShapeKind::Square => Shape::Square(Square::from_points(points)?),
            ShapeKind::Triangle => Shape::Triangle(Triangle::from_points(points)?),
            ShapeKind::Circle => Shape::Circle(Circle::from_points(points)?),
            ShapeKind::Polygon => Shape::Polygon(Polygon::from_points(points)?),
        };
        *shape.style_mut() = style;
        Ok(shape)
    }

    fn inner(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Square(s) => s,
            Shape::Triangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Polygon(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Square(s) => s,
            Shape::Triangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Polygon(s) => s,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.inner().id()
    }

    pub fn kind(&self) -> ShapeKind {
        self.inner().kind()
    }

    pub fn vertices(&self) -> &[Point] {
        self.inner().vertices()
    }

    /// The rotation/move pivot (vertex 0).
    pub fn pivot(&self) -> Option<Point> {
        self.vertices().first().copied()
    }

    pub fn rotation(&self) -> i32 {
        self.inner().rotation()
    }

    pub fn style(&self) -> &ShapeStyle {
        self.inner().style()
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        self.inner_mut().style_mut()
    }

    pub fn rotate(&mut self, delta: i32) {
        self.inner_mut().rotate(delta);
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.inner_mut().translate(dx, dy);
    }

    /// Describe this shape for the renderer.
    pub fn render_description(&self) -> Result<RenderDescription, ShapeError> {
        let style = self.style();
        Ok(RenderDescription {
            id: self.id(),
            kind: self.kind(),
            outline: self.inner().outline()?,
            stroke: style.stroke_color,
            fill: style.filled.then_some(style.fill_color),
        })
    }

    /// Deep copy with a fresh identity.
    pub fn duplicate(&self) -> Shape {
        let mut copy = self.clone();
        let new_id = Uuid::new_v4();
        match &mut copy {
            Shape::Square(s) => s.id = new_id,
            Shape::Triangle(s) => s.id = new_id,
            Shape::Circle(s) => s.id = new_id,
            Shape::Polygon(s) => s.id = new_id,
        }
        copy
    }

    /// Compare everything but identity.
    pub fn same_content(&self, other: &Shape) -> bool {
        self.kind() == other.kind()
            && self.vertices() == other.vertices()
            && self.rotation() == other.rotation()
            && self.style() == other.style()
    }
}
