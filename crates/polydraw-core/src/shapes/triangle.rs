//! Triangle shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::Point;
use crate::render::Outline;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A triangle through three clicked points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    /// Corners in click order.
    pub vertices: Vec<Point>,
    /// Last rotation delta in degrees.
    pub rotation: i32,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Triangle {
    pub const REQUIRED_POINTS: usize = 3;

    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            vertices: vec![a, b, c],
            rotation: 0,
            style: ShapeStyle::default(),
        }
    }

    pub fn from_points(points: &[Point]) -> Result<Self, ShapeError> {
        ShapeError::check_points(ShapeKind::Triangle, points)?;
        Ok(Self::new(points[0], points[1], points[2]))
    }
}

impl ShapeTrait for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn vertices_mut(&mut self) -> &mut Vec<Point> {
        &mut self.vertices
    }

    fn rotation(&self) -> i32 {
        self.rotation
    }

    fn set_rotation(&mut self, degrees: i32) {
        self.rotation = degrees;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn outline(&self) -> Result<Outline, ShapeError> {
        ShapeError::check_renderable(ShapeKind::Triangle, &self.vertices)?;
        Ok(Outline::Closed(self.vertices[..3].to_vec()))
    }
}
