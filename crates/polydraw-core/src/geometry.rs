//! Integer point type and the pure math used by shapes and selection.

use kurbo::Affine;
use serde::{Deserialize, Serialize};

/// A point on the canvas in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by a delta, saturating at the coordinate limits.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Round a floating point position to the nearest pixel.
    pub fn from_kurbo(point: kurbo::Point) -> Self {
        Self::new(point.x.round() as i32, point.y.round() as i32)
    }

    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64, self.y as f64)
    }
}

/// Axis-aligned integer rectangle (`min` inclusive top-left, `max` bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = f64::from(p2.x) - f64::from(p1.x);
    let dy = f64::from(p2.y) - f64::from(p1.y);
    (dx * dx + dy * dy).sqrt()
}

/// Midpoint of two points, truncated toward zero like integer division.
pub fn midpoint(p1: Point, p2: Point) -> Point {
    let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
    Point::new(mid(p1.x, p2.x), mid(p1.y, p2.y))
}

/// Rotate `points` about `pivot` by `angle_degrees`.
///
/// Each point is rotated from its current position, so repeated calls compose
/// geometrically. Results are rounded to the nearest pixel; the pivot itself
/// maps onto itself exactly.
pub fn rotate_points(pivot: Point, points: &[Point], angle_degrees: i32) -> Vec<Point> {
    if angle_degrees == 0 {
        return points.to_vec();
    }
    let rot = Affine::rotate_about((angle_degrees as f64).to_radians(), pivot.to_kurbo());
    points
        .iter()
        .map(|&p| {
            if p == pivot {
                p
            } else {
                Point::from_kurbo(rot * p.to_kurbo())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert!((distance(Point::new(0, 0), Point::new(3, 4)) - 5.0).abs() < f64::EPSILON);
        assert!(distance(Point::new(7, 7), Point::new(7, 7)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let far = distance(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
        assert!((far - (f64::from(i32::MAX) - f64::from(i32::MIN))).abs() < f64::EPSILON);
        assert_eq!(
            midpoint(Point::new(i32::MAX, i32::MIN), Point::new(i32::MAX, i32::MIN)),
            Point::new(i32::MAX, i32::MIN)
        );
        assert_eq!(Point::new(i32::MAX, i32::MIN).offset(1, -1), Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_midpoint_truncates() {
        assert_eq!(midpoint(Point::new(0, 0), Point::new(10, 10)), Point::new(5, 5));
        assert_eq!(midpoint(Point::new(0, 0), Point::new(5, 3)), Point::new(2, 1));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let pivot = Point::new(0, 0);
        let rotated = rotate_points(pivot, &[Point::new(10, 0), Point::new(10, 10)], 90);
        assert_eq!(rotated, vec![Point::new(0, 10), Point::new(-10, 10)]);
    }

    #[test]
    fn test_rotate_about_offset_pivot() {
        let pivot = Point::new(100, 100);
        let rotated = rotate_points(pivot, &[Point::new(110, 100)], 180);
        assert_eq!(rotated, vec![Point::new(90, 100)]);
    }

    #[test]
    fn test_rotate_zero_is_noop() {
        let points = vec![Point::new(3, 7), Point::new(-12, 40)];
        assert_eq!(rotate_points(Point::new(1, 1), &points, 0), points);
    }

    #[test]
    fn test_pivot_never_moves() {
        let pivot = Point::new(5, 5);
        let rotated = rotate_points(pivot, &[pivot, Point::new(15, 5)], 45);
        assert_eq!(rotated[0], pivot);
    }

    #[test]
    fn test_rotation_composes_on_current_positions() {
        let pivot = Point::new(0, 0);
        let once = rotate_points(pivot, &[Point::new(100, 0)], 90);
        let twice = rotate_points(pivot, &once, 90);
        assert_eq!(twice, vec![Point::new(-100, 0)]);
    }
}
