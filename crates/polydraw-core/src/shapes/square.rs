//! Square shape.

use super::{ShapeError, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::Point;
use crate::render::Outline;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A square stored as its four corners, walking around the outline.
///
/// Vertex 0 and vertex 2 are the diagonal the user clicked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Square {
    pub(crate) id: ShapeId,
    /// Corners in outline order.
    pub vertices: Vec<Point>,
    /// Last rotation delta in degrees.
    pub rotation: i32,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Square {
    pub const REQUIRED_POINTS: usize = 2;

    /// Create the square whose diagonal runs from `key` to `opposite`.
    pub fn from_diagonal(key: Point, opposite: Point) -> Self {
        let (key_x, key_y) = (f64::from(key.x), f64::from(key.y));
        let (opp_x, opp_y) = (f64::from(opposite.x), f64::from(opposite.y));
        let mid_x = (key_x + opp_x) / 2.0;
        let mid_y = (key_y + opp_y) / 2.0;
        let half_dx = (opp_x - key_x) / 2.0;
        let half_dy = (opp_y - key_y) / 2.0;

        let corner = |x: f64, y: f64| Point::from_kurbo(kurbo::Point::new(x, y));

        Self {
            id: Uuid::new_v4(),
            vertices: vec![
                key,
                corner(mid_x + half_dy, mid_y - half_dx),
                opposite,
                corner(mid_x - half_dy, mid_y + half_dx),
            ],
            rotation: 0,
            style: ShapeStyle::default(),
        }
    }

    /// Build from clicked points: the first is the key corner, the second the opposite one.
    pub fn from_points(points: &[Point]) -> Result<Self, ShapeError> {
        ShapeError::check_points(ShapeKind::Square, points)?;
        Ok(Self::from_diagonal(points[0], points[1]))
    }
}

impl ShapeTrait for Square {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
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
        ShapeError::check_renderable(ShapeKind::Square, &self.vertices)?;
        Ok(Outline::Closed(self.vertices[..4].to_vec()))
    }
}
