use crate::error::{GeometryError, InsertionError, Result};
use crate::geometry::{Edge, Triangle};
use crate::math::{is_finite, Point2, TOLERANCE};

use super::cleanup::remove_super_triangle_vertices;
use super::repair::{legalize_edges, RepairOutcome};
use super::super_triangle::{self, strictly_contains};
use super::{
    DegeneratePolicy, TriangleId, TriangleStore, Triangulation, TriangulationParams,
    TriangulationStats,
};

/// Lifecycle of a [`BowyerWatson`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No super-triangle yet.
    Uninitialized,
    /// The super-triangle is seeded, no point inserted.
    SuperTriangleCreated,
    /// At least one point was processed.
    Inserting {
        /// Number of points inserted so far.
        inserted: usize,
    },
    /// The output was taken; no more insertions.
    Done,
}

/// Whether a point made it into the triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionOutcome {
    /// The point is a vertex of the triangulation.
    Inserted,
    /// Skipped under [`DegeneratePolicy::SkipPoint`].
    Skipped,
}

/// What one call to [`BowyerWatson::insert_point`] did.
#[derive(Debug, Clone)]
pub struct InsertionReport {
    /// The inserted point.
    pub point: Point2,
    /// Bad triangles removed from the working set.
    pub removed: Vec<TriangleId>,
    /// Number of cavity boundary edges.
    pub boundary_edges: usize,
    /// Fan triangles created, one per boundary edge.
    pub created: Vec<TriangleId>,
    /// Result of the repair pass.
    pub repairs: RepairOutcome,
    /// Whether the point was inserted or skipped.
    pub outcome: InsertionOutcome,
}

impl InsertionReport {
    fn skipped(point: Point2) -> Self {
        Self {
            point,
            removed: Vec::new(),
            boundary_edges: 0,
            created: Vec::new(),
            repairs: RepairOutcome::default(),
            outcome: InsertionOutcome::Skipped,
        }
    }
}

/// The cavity of a point, fully computed before anything is mutated.
struct Cavity {
    bad: Vec<TriangleId>,
    boundary_edges: usize,
    fan: Vec<Triangle>,
}

/// Incremental Bowyer-Watson engine.
///
/// Owns the triangle store for one run. Drive it with
/// [`create_super_triangle`](Self::create_super_triangle), then
/// [`insert_point`](Self::insert_point) once per point, then
/// [`finish`](Self::finish). [`Triangulate`] does all three.
#[derive(Debug)]
pub struct BowyerWatson {
    params: TriangulationParams,
    store: TriangleStore,
    super_triangle: Option<Triangle>,
    vertices: Vec<Point2>,
    state: EngineState,
    stats: TriangulationStats,
}

impl BowyerWatson {
    /// Creates an engine in the [`EngineState::Uninitialized`] state.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn new(params: TriangulationParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            store: TriangleStore::new(),
            super_triangle: None,
            vertices: Vec::new(),
            state: EngineState::Uninitialized,
            stats: TriangulationStats::default(),
        })
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns the triangle store.
    #[must_use]
    pub fn store(&self) -> &TriangleStore {
        &self.store
    }

    /// Returns the counters collected so far.
    #[must_use]
    pub fn stats(&self) -> &TriangulationStats {
        &self.stats
    }

    /// Returns the super-triangle, once created.
    #[must_use]
    pub fn super_triangle(&self) -> Option<&Triangle> {
        self.super_triangle.as_ref()
    }

    /// Seeds the store with a triangle enclosing all of `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine was already seeded, if `points` is
    /// empty, or if a coordinate is not finite.
    pub fn create_super_triangle(&mut self, points: &[Point2]) -> Result<TriangleId> {
        if self.state != EngineState::Uninitialized {
            return Err(InsertionError::InvalidState(format!(
                "super-triangle already created (state {:?})",
                self.state
            ))
            .into());
        }
        if let Some(bad) = points.iter().find(|p| !is_finite(p)) {
            return Err(GeometryError::NonFinite { x: bad.x, y: bad.y }.into());
        }

        let triangle = super_triangle::build(points, self.params.margin)?;
        tracing::debug!(%triangle, points = points.len(), "super-triangle created");

        let id = self.store.add(triangle.clone());
        self.super_triangle = Some(triangle);
        self.stats.triangles_created += 1;
        self.state = EngineState::SuperTriangleCreated;
        Ok(id)
    }

    /// Inserts one point.
    ///
    /// Removes every triangle whose circumcircle strictly contains `point`,
    /// fans the cavity boundary to `point`, and flips illegal edges around
    /// it when [`TriangulationParams::legalize_edges`] is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not seeded or already finished, if
    /// `point` is not finite or lies outside the super-triangle, or (under
    /// [`DegeneratePolicy::Abort`]) if `point` duplicates an inserted point
    /// or would create a zero-area triangle.
    pub fn insert_point(&mut self, point: Point2) -> Result<InsertionReport> {
        let inserted = match self.state {
            EngineState::SuperTriangleCreated => 0,
            EngineState::Inserting { inserted } => inserted,
            EngineState::Uninitialized | EngineState::Done => {
                return Err(InsertionError::InvalidState(format!(
                    "cannot insert a point in state {:?}",
                    self.state
                ))
                .into());
            }
        };
        if !is_finite(&point) {
            return Err(GeometryError::NonFinite {
                x: point.x,
                y: point.y,
            }
            .into());
        }
        if !self
            .super_triangle()
            .is_some_and(|st| strictly_contains(st, &point))
        {
            return Err(InsertionError::OutsideBounds {
                x: point.x,
                y: point.y,
            }
            .into());
        }

        let cavity = match self.cavity(&point) {
            Ok(cavity) => cavity,
            Err(err)
                if err.is_degenerate()
                    && self.params.on_degenerate == DegeneratePolicy::SkipPoint =>
            {
                tracing::warn!(x = point.x, y = point.y, %err, "skipping degenerate point");
                self.stats.points_skipped += 1;
                return Ok(InsertionReport::skipped(point));
            }
            Err(err) => return Err(err),
        };

        for &id in &cavity.bad {
            self.store.deactivate(id, inserted)?;
        }
        let created: Vec<TriangleId> = cavity
            .fan
            .into_iter()
            .map(|t| self.store.add(t))
            .collect();

        let repairs = if self.params.legalize_edges {
            legalize_edges(&mut self.store, &point, &created)?
        } else {
            RepairOutcome::default()
        };

        tracing::debug!(
            x = point.x,
            y = point.y,
            bad = cavity.bad.len(),
            boundary = cavity.boundary_edges,
            created = created.len(),
            "point inserted"
        );

        self.stats.points_inserted += 1;
        self.stats.triangles_removed += cavity.bad.len();
        self.stats.triangles_created += created.len();
        self.stats.repairs_applied += repairs.applied;
        self.stats.repairs_rejected += repairs.rejected;
        self.vertices.push(point);
        self.state = EngineState::Inserting {
            inserted: inserted + 1,
        };

        Ok(InsertionReport {
            point,
            removed: cavity.bad,
            boundary_edges: cavity.boundary_edges,
            created,
            repairs,
            outcome: InsertionOutcome::Inserted,
        })
    }

    /// Collects the working set into the final [`Triangulation`].
    ///
    /// Triangles touching the super-triangle are kept unless
    /// [`TriangulationParams::strip_super_triangle`] is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine was never seeded or already finished.
    pub fn finish(&mut self) -> Result<Triangulation> {
        if matches!(self.state, EngineState::Uninitialized | EngineState::Done) {
            return Err(InsertionError::InvalidState(format!(
                "cannot finish in state {:?}",
                self.state
            ))
            .into());
        }
        let super_triangle = self
            .super_triangle()
            .cloned()
            .ok_or_else(|| InsertionError::InvalidState("missing super-triangle".into()))?;

        let mut triangles: Vec<Triangle> = self.store.active().map(|(_, t)| t.clone()).collect();
        if self.params.strip_super_triangle {
            triangles = remove_super_triangle_vertices(&triangles, &super_triangle);
        }

        self.state = EngineState::Done;
        tracing::info!(
            output = triangles.len(),
            inserted = self.stats.points_inserted,
            skipped = self.stats.points_skipped,
            repairs_applied = self.stats.repairs_applied,
            repairs_rejected = self.stats.repairs_rejected,
            "triangulation finished"
        );
        Ok(Triangulation::new(triangles, super_triangle, self.stats))
    }

    /// Computes the bad triangles, the cavity boundary and the fan for
    /// `point` without touching the store.
    fn cavity(&self, point: &Point2) -> Result<Cavity> {
        if self
            .vertices
            .iter()
            .any(|v| nalgebra::distance_squared(v, point) < TOLERANCE * TOLERANCE)
        {
            return Err(InsertionError::DuplicatePoint {
                x: point.x,
                y: point.y,
            }
            .into());
        }

        let mut bad: Vec<(TriangleId, &Triangle)> = Vec::new();
        for (id, triangle) in self.store.active() {
            if triangle.is_within_circumcircle(point)? {
                bad.push((id, triangle));
            }
        }
        if bad.is_empty() {
            return Err(GeometryError::Degenerate(format!(
                "point ({}, {}) lies in no circumcircle",
                point.x, point.y
            ))
            .into());
        }

        // Edges shared by two bad triangles are inside the cavity.
        let boundary: Vec<Edge> = bad
            .iter()
            .flat_map(|(_, t)| t.edges().iter())
            .filter(|e| bad.iter().filter(|(_, t)| t.has_edge(e)).count() == 1)
            .copied()
            .collect();

        let fan = boundary
            .iter()
            .map(|e| {
                Triangle::from_edges([
                    Edge::new(*e.start(), *point),
                    Edge::new(*point, *e.end()),
                    Edge::new(*e.end(), *e.start()),
                ])
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Cavity {
            bad: bad.into_iter().map(|(id, _)| id).collect(),
            boundary_edges: boundary.len(),
            fan,
        })
    }
}

/// Triangulates a planar point set with the Bowyer-Watson algorithm.
///
/// Points are inserted in ascending X order (stable for equal X).
pub struct Triangulate {
    points: Vec<Point2>,
    params: TriangulationParams,
}

impl Triangulate {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, params: TriangulationParams) -> Self {
        Self { points, params }
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the point set is
    /// empty or contains non-finite coordinates, or a degenerate point is
    /// met under [`DegeneratePolicy::Abort`].
    pub fn execute(&self) -> Result<Triangulation> {
        let mut engine = BowyerWatson::new(self.params)?;
        engine.create_super_triangle(&self.points)?;

        for point in insertion_order(&self.points) {
            engine.insert_point(point)?;
        }

        engine.finish()
    }
}

/// Sorts `points` by ascending X. Points with equal X keep their input order.
fn insertion_order(points: &[Point2]) -> Vec<Point2> {
    let mut ordered = points.to_vec();
    ordered.sort_by(|a, b| a.x.total_cmp(&b.x));
    ordered
}
