//! Free-form polygon shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::Point;
use crate::render::Outline;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed polygon through any number (three or more) of clicked points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub(crate) id: ShapeId,
    /// Corners in click order; the closing click is not stored.
    pub vertices: Vec<Point>,
    /// Last rotation delta in degrees.
    pub rotation: i32,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polygon {
    pub const MIN_POINTS: usize = 3;

    /// Default distance, per axis, within which a click closes the polygon.
    pub const DEFAULT_CLOSE_TOLERANCE: i32 = 10;

    pub fn from_points(points: &[Point]) -> Result<Self, ShapeError> {
        ShapeError::check_points(ShapeKind::Polygon, points)?;
        Ok(Self {
            id: Uuid::new_v4(),
            vertices: points.to_vec(),
            rotation: 0,
            style: ShapeStyle::default(),
        })
    }

    /// Whether `click` lands close enough to `first` to close the outline.
    ///
    /// X and Y are checked on their own; being near on either axis is enough.
    pub fn closes_at(first: Point, click: Point, tolerance: i32) -> bool {
        let near = |a: i32, b: i32| (i64::from(a) - i64::from(b)).abs() <= i64::from(tolerance);
        near(click.x, first.x) || near(click.y, first.y)
    }
}

impl ShapeTrait for Polygon {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
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
        ShapeError::check_renderable(ShapeKind::Polygon, &self.vertices)?;
        Ok(Outline::Closed(self.vertices.clone()))
    }
}
