use crate::error::{InsertionError, Result};
use crate::geometry::Triangle;
use crate::math::polygon_2d::{bounding_box_2d, orient_2d};
use crate::math::Point2;

/// Ratio between the super-triangle's extent and the enlarged bounding box.
const SPREAD: f64 = 20.0;

/// Builds a triangle strictly enclosing every point of `points`.
///
/// The bounding box of the points is enlarged by `margin` on every side.
/// With `d` the larger side of the enlarged box and `(cx, cy)` its center,
/// the vertices are `(cx - 20d, cy - d)`, `(cx + 20d, cy - d)` and
/// `(cx, cy + 20d)`, listed counter-clockwise.
///
/// # Errors
///
/// Returns `InsertionError::EmptyInput` for an empty point set.
pub fn build(points: &[Point2], margin: f64) -> Result<Triangle> {
    let (min, max) = bounding_box_2d(points).ok_or(InsertionError::EmptyInput)?;

    let width = (max.x - min.x) + 2.0 * margin;
    let height = (max.y - min.y) + 2.0 * margin;
    let mut d = width.max(height);
    if d <= 0.0 {
        // A single point (or identical points) with no margin.
        d = 1.0;
    }

    let cx = 0.5 * (min.x + max.x);
    let cy = 0.5 * (min.y + max.y);

    Triangle::from_vertices(
        Point2::new(cx - SPREAD * d, cy - d),
        Point2::new(cx + SPREAD * d, cy - d),
        Point2::new(cx, cy + SPREAD * d),
    )
}

/// Returns `true` if `p` lies strictly inside `triangle`.
#[must_use]
pub fn strictly_contains(triangle: &Triangle, p: &Point2) -> bool {
    let sign = triangle.signed_area().signum();
    triangle
        .edges()
        .iter()
        .all(|e| sign * orient_2d(e.start(), e.end(), p) > 0.0)
}
