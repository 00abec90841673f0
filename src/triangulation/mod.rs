mod bowyer_watson;
pub mod cleanup;
pub mod repair;
mod store;
pub mod super_triangle;

pub use bowyer_watson::{BowyerWatson, EngineState, InsertionOutcome, InsertionReport, Triangulate};
pub use store::{TriangleId, TriangleRecord, TriangleState, TriangleStore};

use crate::error::{InsertionError, Result};
use crate::geometry::Triangle;

/// What to do when a point cannot be inserted because of degenerate geometry
/// (coincident with an earlier point, or producing a zero-area triangle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Abort the whole triangulation with the error.
    #[default]
    Abort,
    /// Leave the triangulation untouched for that point and continue.
    SkipPoint,
}

/// Parameters controlling a triangulation run.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Distance by which the bounding box of the input is enlarged on every
    /// side before the super-triangle is built around it.
    pub margin: f64,
    /// Flip illegal edges around each inserted point.
    pub legalize_edges: bool,
    /// Drop every triangle touching a super-triangle vertex from the output.
    pub strip_super_triangle: bool,
    /// Handling of degenerate points.
    pub on_degenerate: DegeneratePolicy,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            margin: 1.0,
            legalize_edges: true,
            strip_super_triangle: false,
            on_degenerate: DegeneratePolicy::Abort,
        }
    }
}

impl TriangulationParams {
    /// Default parameters with the given enlargement margin.
    #[must_use]
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            ..Self::default()
        }
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns `InsertionError::InvalidParameters` if the margin is negative
    /// or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(InsertionError::InvalidParameters(format!(
                "margin must be finite and non-negative, got {}",
                self.margin
            ))
            .into());
        }
        Ok(())
    }
}

/// Counters collected over one triangulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangulationStats {
    /// Points inserted into the triangulation.
    pub points_inserted: usize,
    /// Points skipped under [`DegeneratePolicy::SkipPoint`].
    pub points_skipped: usize,
    /// Triangles created, including the super-triangle.
    pub triangles_created: usize,
    /// Triangles removed from the working set.
    pub triangles_removed: usize,
    /// Edge flips applied by the repair pass.
    pub repairs_applied: usize,
    /// Illegal edges the repair pass could not flip.
    pub repairs_rejected: usize,
}

/// The result of a triangulation run.
#[derive(Debug, Clone)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    super_triangle: Triangle,
    stats: TriangulationStats,
}

impl Triangulation {
    pub(crate) fn new(
        triangles: Vec<Triangle>,
        super_triangle: Triangle,
        stats: TriangulationStats,
    ) -> Self {
        Self {
            triangles,
            super_triangle,
            stats,
        }
    }

    /// Output triangles in creation order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Output triangles with no vertex on the super-triangle.
    #[must_use]
    pub fn interior_triangles(&self) -> Vec<Triangle> {
        cleanup::remove_super_triangle_vertices(&self.triangles, &self.super_triangle)
    }

    /// The bounding triangle the run was seeded with.
    #[must_use]
    pub fn super_triangle(&self) -> &Triangle {
        &self.super_triangle
    }

    /// Counters collected during the run.
    #[must_use]
    pub fn stats(&self) -> &TriangulationStats {
        &self.stats
    }

    /// Number of output triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the output holds no triangle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Consumes the result, returning the output triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(TriangulationParams::default().validate().is_ok());
        assert!(TriangulationParams::new(0.0).validate().is_ok());
    }

    #[test]
    fn bad_margins_are_rejected() {
        for margin in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(TriangulationParams::new(margin).validate().is_err(), "{margin}");
        }
    }
}
