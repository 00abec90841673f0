use super::{Point2, TOLERANCE};

/// Orientation of `p` relative to the directed line `a -> b`.
///
/// Returns the 2D cross product `(b - a) x (p - a)`: positive when `p` lies to
/// the left, negative when it lies to the right, zero when collinear.
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    (b - a).perp(&(p - a))
}

/// Returns `true` if the three points span no area (collinear or coincident).
///
/// The cross product is measured against the squared length of the longest
/// side, so the result depends on the shape of the triangle and not on its
/// size or position.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let longest_sq = nalgebra::distance_squared(a, b)
        .max(nalgebra::distance_squared(b, c))
        .max(nalgebra::distance_squared(c, a));
    orient_2d(a, b, c).abs() <= TOLERANCE * longest_sq
}

/// Axis-aligned bounding box of a point set as `(min, max)`.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn bounding_box_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}
