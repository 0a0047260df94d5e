//! Conversion of draw descriptions into kurbo paths.

use kurbo::{BezPath, Circle, Shape as KurboShape};
use polydraw_core::geometry::Point;
use polydraw_core::render::Outline;

/// Flattening tolerance for curved outlines.
const PATH_TOLERANCE: f64 = 0.1;

/// Build the path for a shape outline.
pub fn outline_path(outline: &Outline) -> BezPath {
    match outline {
        Outline::Closed(points) => {
            let mut path = BezPath::new();
            let Some((first, rest)) = points.split_first() else {
                return path;
            };
            path.move_to(first.to_kurbo());
            for point in rest {
                path.line_to(point.to_kurbo());
            }
            path.close_path();
            path
        }
        Outline::Circle {
            center, diameter, ..
        } => Circle::new(center.to_kurbo(), f64::from(*diameter) / 2.0).to_path(PATH_TOLERANCE),
    }
}

/// Dot marking a click that is waiting to become part of a shape.
pub fn marker_path(point: Point, radius: f64) -> BezPath {
    Circle::new(point.to_kurbo(), radius).to_path(PATH_TOLERANCE)
}
