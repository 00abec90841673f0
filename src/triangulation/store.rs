use slotmap::SlotMap;

use crate::error::{Result, TopologyError};
use crate::geometry::Triangle;

slotmap::new_key_type! {
    /// Unique identifier for a triangle in the triangle store.
    pub struct TriangleId;
}

/// Lifecycle state of a stored triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleState {
    /// Part of the working set.
    Active,
    /// Removed because the point with the given insertion index fell inside
    /// its circumcircle.
    Removed { by_point: usize },
}

/// A triangle handle's current snapshot plus the snapshots it replaced.
#[derive(Debug, Clone)]
pub struct TriangleRecord {
    current: Triangle,
    history: Vec<Triangle>,
    state: TriangleState,
}

impl TriangleRecord {
    /// Returns the current snapshot.
    #[must_use]
    pub fn triangle(&self) -> &Triangle {
        &self.current
    }

    /// Returns the earlier snapshots of this handle, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Triangle] {
        &self.history
    }

    /// Returns how many times the snapshot was replaced.
    #[must_use]
    pub fn revision(&self) -> usize {
        self.history.len()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> TriangleState {
        self.state
    }

    /// Returns `true` if the triangle is in the working set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == TriangleState::Active
    }
}

/// Central arena that owns every triangle created during a run.
///
/// Triangles are referenced by typed IDs (generational indices). Removing a
/// triangle from the working set only marks its record, so handles stay
/// valid and two geometrically identical triangles are never confused.
/// Records are never freed, which keeps iteration in creation order.
#[derive(Debug, Default)]
pub struct TriangleStore {
    triangles: SlotMap<TriangleId, TriangleRecord>,
    active_count: usize,
}

impl TriangleStore {
    /// Creates a new, empty triangle store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an active triangle and returns its ID.
    pub fn add(&mut self, triangle: Triangle) -> TriangleId {
        self.active_count += 1;
        self.triangles.insert(TriangleRecord {
            current: triangle,
            history: Vec::new(),
            state: TriangleState::Active,
        })
    }

    /// Returns the record for `id`, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn record(&self, id: TriangleId) -> Result<&TriangleRecord> {
        self.triangles
            .get(id)
            .ok_or_else(|| TopologyError::TriangleNotFound.into())
    }

    /// Returns the current snapshot for `id`, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn triangle(&self, id: TriangleId) -> Result<&Triangle> {
        self.record(id).map(TriangleRecord::triangle)
    }

    /// Returns `true` if `id` exists and is in the working set.
    #[must_use]
    pub fn is_active(&self, id: TriangleId) -> bool {
        self.triangles.get(id).is_some_and(TriangleRecord::is_active)
    }

    /// Removes `id` from the working set.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown or already removed.
    pub fn deactivate(&mut self, id: TriangleId, by_point: usize) -> Result<()> {
        let record = self.active_record_mut(id)?;
        record.state = TriangleState::Removed { by_point };
        self.active_count -= 1;
        Ok(())
    }

    /// Replaces the snapshot of an active triangle, keeping the old one in
    /// the record's history.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown or not active.
    pub fn replace(&mut self, id: TriangleId, triangle: Triangle) -> Result<()> {
        let record = self.active_record_mut(id)?;
        let previous = std::mem::replace(&mut record.current, triangle);
        record.history.push(previous);
        Ok(())
    }

    /// Iterates over the working set in creation order.
    pub fn active(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> {
        self.triangles
            .iter()
            .filter(|(_, r)| r.is_active())
            .map(|(id, r)| (id, &r.current))
    }

    /// Returns the IDs of the working set in creation order.
    #[must_use]
    pub fn active_ids(&self) -> Vec<TriangleId> {
        self.active().map(|(id, _)| id).collect()
    }

    /// Number of triangles in the working set.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active_count
    }

    /// Number of triangles ever created, including removed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if no triangle was ever created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    fn active_record_mut(&mut self, id: TriangleId) -> Result<&mut TriangleRecord> {
        self.triangles
            .get_mut(id)
            .filter(|r| r.is_active())
            .ok_or_else(|| TopologyError::TriangleNotFound.into())
    }
}
