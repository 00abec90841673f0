use super::polygon_2d::is_collinear;
use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};
use crate::geometry::Circle;

/// Computes the circle passing through `a`, `b` and `c`.
///
/// The center is the intersection of the perpendicular bisectors of `ab` and
/// `ac`, solved in closed form with the 2D cross product of `b - a` and
/// `c - a` as the determinant. The radius is the distance from the center to
/// `a`; the squared radius is kept exact so that containment of the defining
/// vertices is decided without rounding through `sqrt`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the three points are collinear or
/// coincident (the bisectors are parallel).
pub fn circumcircle(a: &Point2, b: &Point2, c: &Point2) -> Result<Circle> {
    if is_collinear(a, b, c) {
        return Err(GeometryError::Degenerate(format!(
            "collinear vertices ({}, {}), ({}, {}), ({}, {}) have no circumcircle",
            a.x, a.y, b.x, b.y, c.x, c.y
        ))
        .into());
    }

    let ab = b - a;
    let ac = c - a;
    let d = 2.0 * ab.perp(&ac);
    let ab_sq = ab.norm_squared();
    let ac_sq = ac.norm_squared();
    let offset = Vector2::new(
        (ac.y * ab_sq - ab.y * ac_sq) / d,
        (ab.x * ac_sq - ac.x * ab_sq) / d,
    );

    let center = a + offset;
    Ok(Circle::from_radius_squared(center, offset.norm_squared()))
}
