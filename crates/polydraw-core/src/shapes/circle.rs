//! Circle shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::{Bounds, Point, distance, midpoint};
use crate::render::Outline;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle defined by the two endpoints of a diameter.
///
/// Only the endpoints are stored; center, diameter and the bounding box are
/// derived whenever they are asked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Diameter endpoints.
    pub vertices: Vec<Point>,
    /// Last rotation delta in degrees.
    pub rotation: i32,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    pub const REQUIRED_POINTS: usize = 2;

    pub fn from_diameter(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            vertices: vec![start, end],
            rotation: 0,
            style: ShapeStyle::default(),
        }
    }

    pub fn from_points(points: &[Point]) -> Result<Self, ShapeError> {
        ShapeError::check_points(ShapeKind::Circle, points)?;
        Ok(Self::from_diameter(points[0], points[1]))
    }

    fn endpoints(&self) -> Option<(Point, Point)> {
        match self.vertices.as_slice() {
            [start, end, ..] => Some((*start, *end)),
            _ => None,
        }
    }

    pub fn center(&self) -> Option<Point> {
        self.endpoints().map(|(start, end)| midpoint(start, end))
    }

    /// Diameter in whole pixels.
    pub fn diameter(&self) -> Option<i32> {
        self.endpoints().map(|(start, end)| distance(start, end) as i32)
    }

    /// Square enclosing the circle.
    pub fn bounding_box(&self) -> Option<Bounds> {
        let center = self.center()?;
        let diameter = self.diameter()?;
        let min = center.offset(-diameter / 2, -diameter / 2);
        Some(Bounds::new(min, min.offset(diameter, diameter)))
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
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
        ShapeError::check_renderable(ShapeKind::Circle, &self.vertices)?;
        match (self.center(), self.diameter(), self.bounding_box()) {
            (Some(center), Some(diameter), Some(bounds)) => Ok(Outline::Circle {
                center,
                diameter,
                bounds,
            }),
            _ => Err(ShapeError::NotRenderable {
                kind: ShapeKind::Circle,
                required: Self::REQUIRED_POINTS,
                actual: self.vertices.len(),
            }),
        }
    }
}
