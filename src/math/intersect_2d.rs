use super::polygon_2d::orient_2d;
use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Proper crossing test for the segments `a0-a1` and `b0-b1`.
///
/// The segments cross iff the endpoints of each one lie strictly on opposite
/// sides of the other one's supporting line. Touching, shared endpoints and
/// collinear overlaps are not crossings.
#[must_use]
pub fn segments_cross_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let o_a0 = orient_2d(b0, b1, a0);
    let o_a1 = orient_2d(b0, b1, a1);
    let o_b0 = orient_2d(a0, a1, b0);
    let o_b1 = orient_2d(a0, a1, b1);

    opposite_sides(o_a0, o_a1) && opposite_sides(o_b0, o_b1)
}

fn opposite_sides(u: f64, v: f64) -> bool {
    (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0)
}

/// Intersection point of the infinite lines through `a0-a1` and `b0-b1`.
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` if the lines are parallel or
/// collinear: the determinant is measured against the product of the segment
/// lengths, so the check depends on the angle between the lines only.
pub fn line_line_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Result<Point2> {
    let da = a1 - a0;
    let db = b1 - b0;
    let det = da.perp(&db);
    if det.abs() <= TOLERANCE * da.norm() * db.norm() {
        return Err(GeometryError::ParallelLines.into());
    }

    // Cross products of each line's endpoints.
    let ca = a1.x * a0.y - a0.x * a1.y;
    let cb = b1.x * b0.y - b0.x * b1.y;

    let x = (ca * db.x - cb * da.x) / det;
    let y = (ca * db.y - cb * da.y) / det;
    Ok(Point2::new(x, y))
}
