use crate::math::Point2;

/// A circle in the plane.
///
/// Stores the squared radius as computed, so that containment tests compare
/// squared distances without a round trip through `sqrt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius_sq: f64,
}

impl Circle {
    /// Creates a circle from its center and squared radius.
    #[must_use]
    pub fn from_radius_squared(center: Point2, radius_sq: f64) -> Self {
        Self { center, radius_sq }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius_sq.sqrt()
    }

    /// Returns the squared radius of the circle.
    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        self.radius_sq
    }

    /// Returns `true` if `p` lies strictly inside the circle.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        nalgebra::distance_squared(&self.center, p) < self.radius_sq
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn radius_round_trip() {
        let c = Circle::from_radius_squared(Point2::new(1.0, -2.0), 9.0);
        assert_relative_eq!(c.radius(), 3.0);
        assert_relative_eq!(c.radius_squared(), 9.0);
    }

    #[test]
    fn boundary_is_not_contained() {
        let c = Circle::from_radius_squared(Point2::new(0.0, 0.0), 4.0);
        assert!(c.contains(&Point2::new(1.0, 1.0)));
        assert!(!c.contains(&Point2::new(2.0, 0.0)));
        assert!(!c.contains(&Point2::new(0.0, -2.0)));
        assert!(!c.contains(&Point2::new(3.0, 3.0)));
    }
}
