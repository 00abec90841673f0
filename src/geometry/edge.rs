use std::fmt;

use crate::error::Result;
use crate::math::intersect_2d::{line_line_intersect_2d, segments_cross_2d};
use crate::math::Point2;

/// A straight segment between two points.
///
/// The edge keeps its direction (`start -> end`) for loop bookkeeping, but
/// equality is undirected: `a-b` equals `b-a`. The length is computed once
/// on construction.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    start: Point2,
    end: Point2,
    length: f64,
}

impl Edge {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            length: nalgebra::distance(&start, &end),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the Euclidean length cached at construction.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns the same segment traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            length: self.length,
        }
    }

    /// Returns `true` if `p` is one of the two endpoints.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point2) -> bool {
        self.start == *p || self.end == *p
    }

    /// Proper crossing test against `other`.
    ///
    /// Shared endpoints, touching and collinear overlaps do not count.
    #[must_use]
    pub fn intersects(&self, other: &Edge) -> bool {
        segments_cross_2d(&self.start, &self.end, &other.start, &other.end)
    }

    /// Intersection point of the lines supporting `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParallelLines` if the lines are parallel.
    pub fn intersection_point(&self, other: &Edge) -> Result<Point2> {
        line_line_intersect_2d(&self.start, &self.end, &other.start, &other.end)
    }

    /// Returns `true` if `other` crosses this edge at a point strictly
    /// between this edge's endpoints.
    #[must_use]
    pub fn crosses_through(&self, other: &Edge) -> bool {
        if !self.intersects(other) {
            return false;
        }
        self.intersection_point(other).is_ok_and(|x| {
            let along = nalgebra::distance(&self.start, &x);
            along > 0.0 && along < self.length
        })
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) to ({}, {})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
