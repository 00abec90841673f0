use std::fmt;

use super::{Circle, Edge};
use crate::error::{GeometryError, Result, TopologyError};
use crate::math::circumcircle::circumcircle;
use crate::math::polygon_2d::{is_collinear, orient_2d};
use crate::math::Point2;

/// A triangle stored as a closed loop of three edges.
///
/// `edges[i].end()` equals `edges[(i + 1) % 3].start()`, and the vertices
/// span a non-zero area. Both properties are checked on construction, so a
/// `Triangle` value is always closed and non-degenerate.
///
/// A triangle is an immutable snapshot. Replacing an edge produces a new
/// triangle (see [`Triangle::with_edge`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    edges: [Edge; 3],
}

impl Triangle {
    /// Creates a triangle from three edges forming a closed loop.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OpenLoop` if consecutive edges do not connect,
    /// or `GeometryError::Degenerate` if the vertices are collinear or
    /// coincident.
    pub fn from_edges(edges: [Edge; 3]) -> Result<Self> {
        for i in 0..3 {
            let next = &edges[(i + 1) % 3];
            if edges[i].end() != next.start() {
                return Err(TopologyError::OpenLoop(format!(
                    "edge {i} ends at ({}, {}) but edge {} starts at ({}, {})",
                    edges[i].end().x,
                    edges[i].end().y,
                    (i + 1) % 3,
                    next.start().x,
                    next.start().y
                ))
                .into());
            }
        }

        let [a, b, c] = [*edges[0].start(), *edges[0].end(), *edges[1].end()];
        if is_collinear(&a, &b, &c) {
            return Err(GeometryError::Degenerate(format!(
                "zero-area triangle ({}, {}), ({}, {}), ({}, {})",
                a.x, a.y, b.x, b.y, c.x, c.y
            ))
            .into());
        }

        Ok(Self { edges })
    }

    /// Creates the triangle `a -> b -> c -> a`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are collinear or
    /// coincident.
    pub fn from_vertices(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        Self::from_edges([Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)])
    }

    /// Returns the three edges in loop order.
    #[must_use]
    pub fn edges(&self) -> &[Edge; 3] {
        &self.edges
    }

    /// Returns the edge at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EdgeIndexOutOfRange` if `index >= 3`.
    pub fn edge(&self, index: usize) -> Result<&Edge> {
        self.edges
            .get(index)
            .ok_or_else(|| TopologyError::EdgeIndexOutOfRange { index }.into())
    }

    /// Returns the vertices in loop order (the start point of each edge).
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [
            *self.edges[0].start(),
            *self.edges[1].start(),
            *self.edges[2].start(),
        ]
    }

    /// Returns `true` if any of the three edges equals `edge` (in either
    /// direction).
    #[must_use]
    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.iter().any(|e| e == edge)
    }

    /// Returns `true` if `p` is one of the three vertices.
    #[must_use]
    pub fn has_vertex(&self, p: &Point2) -> bool {
        self.edges.iter().any(|e| e.start() == p)
    }

    /// Signed area, positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices();
        0.5 * orient_2d(&a, &b, &c)
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns a new snapshot with the edge at `index` replaced by `edge`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EdgeIndexOutOfRange` if `index >= 3`, and the
    /// errors of [`Triangle::from_edges`] if the rebuilt loop is open or
    /// degenerate.
    pub fn with_edge(&self, index: usize, edge: Edge) -> Result<Self> {
        let mut edges = self.edges;
        let slot = edges
            .get_mut(index)
            .ok_or(TopologyError::EdgeIndexOutOfRange { index })?;
        *slot = edge;
        Self::from_edges(edges)
    }

    /// Computes the circumscribed circle.
    ///
    /// Uses `A = edges[0].start`, `B = edges[0].end`, `C = edges[1].end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the vertices are collinear.
    pub fn circumcircle(&self) -> Result<Circle> {
        circumcircle(self.edges[0].start(), self.edges[0].end(), self.edges[1].end())
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the vertices are collinear.
    pub fn is_within_circumcircle(&self, p: &Point2) -> Result<bool> {
        Ok(self.circumcircle()?.contains(p))
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} | {} | {}]", self.edges[0], self.edges[1], self.edges[2])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::BowyerError;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit() -> Triangle {
        Triangle::from_vertices(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)).unwrap()
    }

    #[test]
    fn edges_form_closed_loop() {
        let t = unit();
        for i in 0..3 {
            assert_eq!(t.edges()[i].end(), t.edges()[(i + 1) % 3].start());
        }
    }

    #[test]
    fn area_and_orientation() {
        let ccw = unit();
        assert_relative_eq!(ccw.signed_area(), 6.0);
        let cw = Triangle::from_vertices(p(0.0, 0.0), p(0.0, 3.0), p(4.0, 0.0)).unwrap();
        assert_relative_eq!(cw.signed_area(), -6.0);
        assert_relative_eq!(cw.area(), 6.0);
    }

    #[test]
    fn has_edge_ignores_direction() {
        let t = unit();
        assert!(t.has_edge(&Edge::new(p(4.0, 0.0), p(0.0, 0.0))));
        assert!(t.has_edge(&Edge::new(p(0.0, 3.0), p(4.0, 0.0))));
        assert!(!t.has_edge(&Edge::new(p(0.0, 0.0), p(4.0, 3.0))));
    }

    #[test]
    fn has_vertex_basic() {
        let t = unit();
        assert!(t.has_vertex(&p(0.0, 3.0)));
        assert!(!t.has_vertex(&p(1.0, 1.0)));
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let err = Triangle::from_vertices(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn micro_and_translated_triangles_are_valid() {
        let micro = Triangle::from_vertices(p(0.0, 0.0), p(1.0e-6, 0.0), p(0.0, 1.0e-6)).unwrap();
        assert_relative_eq!(micro.area(), 0.5e-12, max_relative = 1e-9);

        // Thin fan triangle from a super-triangle around a micrometre square.
        assert!(
            Triangle::from_vertices(p(-1.95e-5, -5.0e-7), p(0.0, 0.0), p(2.05e-5, -5.0e-7)).is_ok()
        );

        let far =
            Triangle::from_vertices(p(1.0e6, 1.0e6), p(1.0e6 + 1.0, 1.0e6), p(1.0e6, 1.0e6 + 1.0))
                .unwrap();
        assert_relative_eq!(far.area(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn open_loop_is_rejected() {
        let edges = [
            Edge::new(p(0.0, 0.0), p(4.0, 0.0)),
            Edge::new(p(4.0, 0.0), p(0.0, 3.0)),
            Edge::new(p(0.0, 2.0), p(0.0, 0.0)),
        ];
        let err = Triangle::from_edges(edges).unwrap_err();
        assert!(matches!(err, BowyerError::Topology(TopologyError::OpenLoop(_))));
    }

    #[test]
    fn with_edge_rebuilds_snapshot() {
        let t = unit();
        // Reversing an edge keeps the vertex set but breaks the loop order.
        let err = t.with_edge(1, t.edges()[1].reversed()).unwrap_err();
        assert!(matches!(err, BowyerError::Topology(TopologyError::OpenLoop(_))));

        let same = t.with_edge(2, Edge::new(p(0.0, 3.0), p(0.0, 0.0))).unwrap();
        assert_eq!(same, t);
    }

    #[test]
    fn with_edge_out_of_range() {
        let t = unit();
        let err = t.with_edge(3, t.edges()[0]).unwrap_err();
        assert!(matches!(
            err,
            BowyerError::Topology(TopologyError::EdgeIndexOutOfRange { index: 3 })
        ));
        assert!(t.edge(5).is_err());
    }

    #[test]
    fn circumcircle_of_right_triangle() {
        let c = unit().circumcircle().unwrap();
        assert_relative_eq!(c.center().x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.center().y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(c.radius(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn within_circumcircle_is_strict() {
        let t = unit();
        assert!(t.is_within_circumcircle(&p(1.0, 1.0)).unwrap());
        // (4, 3) lies exactly on the circle through the right-angle corners.
        assert!(!t.is_within_circumcircle(&p(4.0, 3.0)).unwrap());
        assert!(!t.is_within_circumcircle(&p(10.0, 10.0)).unwrap());
    }

    #[test]
    fn display_lists_edges() {
        let s = unit().to_string();
        assert!(s.starts_with("[(0, 0) to (4, 0)"));
    }
}
