//! Post-insertion edge repair.
//!
//! After a cavity is re-triangulated, the edge of each new triangle opposite
//! the inserted point is checked against the triangle on its other side. If
//! that triangle's far vertex lies strictly inside the circumcircle, the
//! shared edge is illegal and is flipped: the two triangles are rebuilt
//! around the other diagonal of their quadrilateral, under the same handles,
//! and the flipped triangles are checked again.
//!
//! A flip is only possible when the new diagonal crosses through the shared
//! edge (a convex quadrilateral). Illegal edges that cannot be flipped, or
//! whose rebuilt triangles fail validation, are left in place and counted.

use crate::error::Result;
use crate::geometry::{Edge, Triangle};
use crate::math::Point2;

use super::{TriangleId, TriangleStore};

/// Counters for one repair pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Edge flips written back to the store.
    pub applied: usize,
    /// Illegal edges left in place.
    pub rejected: usize,
}

/// Legalizes the edges around `point` after it was inserted.
///
/// `new_triangles` are the fan triangles created for `point`. Every flip
/// replaces the snapshots of both triangles in `store`, so their previous
/// shapes stay in the record history.
///
/// # Errors
///
/// Returns an error if a handle in `new_triangles` is unknown to `store`.
pub fn legalize_edges(
    store: &mut TriangleStore,
    point: &Point2,
    new_triangles: &[TriangleId],
) -> Result<RepairOutcome> {
    let mut outcome = RepairOutcome::default();
    let mut pending = new_triangles.to_vec();
    let flip_limit = store.active_len();

    while let Some(id) = pending.pop() {
        let triangle = store.triangle(id)?;
        let Some(shared) = opposite_edge(triangle, point) else {
            continue;
        };
        let Some((neighbor_id, far)) = find_neighbor(store, id, &shared) else {
            continue;
        };
        if !triangle.is_within_circumcircle(&far)? {
            continue;
        }

        if !shared.crosses_through(&Edge::new(*point, far)) {
            tracing::warn!(%shared, "illegal edge left in place, quadrilateral is not convex");
            outcome.rejected += 1;
            continue;
        }
        if outcome.applied >= flip_limit {
            tracing::warn!(flips = outcome.applied, "edge flip limit reached");
            break;
        }

        let flipped = Triangle::from_vertices(*point, *shared.start(), far).and_then(|first| {
            Triangle::from_vertices(*point, far, *shared.end()).map(|second| (first, second))
        });
        match flipped {
            Ok((first, second)) => {
                tracing::trace!(%shared, x = far.x, y = far.y, "flipped illegal edge");
                store.replace(id, first)?;
                store.replace(neighbor_id, second)?;
                outcome.applied += 1;
                pending.push(id);
                pending.push(neighbor_id);
            }
            Err(err) => {
                tracing::warn!(%shared, %err, "edge flip rejected");
                outcome.rejected += 1;
            }
        }
    }

    Ok(outcome)
}

/// The edge of `triangle` that does not touch `point`.
fn opposite_edge(triangle: &Triangle, point: &Point2) -> Option<Edge> {
    if !triangle.has_vertex(point) {
        return None;
    }
    triangle
        .edges()
        .iter()
        .find(|e| !e.has_endpoint(point))
        .copied()
}

/// The other active triangle holding `shared`, with its vertex off `shared`.
fn find_neighbor(
    store: &TriangleStore,
    id: TriangleId,
    shared: &Edge,
) -> Option<(TriangleId, Point2)> {
    store
        .active()
        .find(|(other, t)| *other != id && t.has_edge(shared))
        .and_then(|(other, t)| {
            t.vertices()
                .into_iter()
                .find(|v| !shared.has_endpoint(v))
                .map(|far| (other, far))
        })
}
