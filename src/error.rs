use thiserror::Error;

/// Top-level error type for the triangulation engine.
#[derive(Debug, Error)]
pub enum BowyerError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Insertion(#[from] InsertionError),
}

impl BowyerError {
    /// Returns `true` if the error stems from degenerate input geometry
    /// (collinear or coincident vertices, parallel lines, duplicate points).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::Geometry(GeometryError::Degenerate(_) | GeometryError::ParallelLines)
                | Self::Insertion(InsertionError::DuplicatePoint { .. })
        )
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("lines are parallel, no unique intersection point")]
    ParallelLines,

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors related to the structure of triangles and the triangle store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("edges do not form a closed loop: {0}")]
    OpenLoop(String),

    #[error("edge index {index} is out of range for a triangle")]
    EdgeIndexOutOfRange { index: usize },

    #[error("triangle not found in store")]
    TriangleNotFound,
}

/// Errors related to driving the insertion engine.
#[derive(Debug, Error)]
pub enum InsertionError {
    #[error("cannot triangulate an empty point set")]
    EmptyInput,

    #[error("invalid triangulation parameters: {0}")]
    InvalidParameters(String),

    #[error("point ({x}, {y}) was already inserted")]
    DuplicatePoint { x: f64, y: f64 },

    #[error("point ({x}, {y}) lies outside the super-triangle")]
    OutsideBounds { x: f64, y: f64 },

    #[error("invalid engine state: {0}")]
    InvalidState(String),
}

/// Convenience type alias for results using [`BowyerError`].
pub type Result<T> = std::result::Result<T, BowyerError>;
