//! Incremental Bowyer-Watson triangulation of planar point sets.
//!
//! ```no_run
//! use bowyer::math::Point2;
//! use bowyer::triangulation::{Triangulate, TriangulationParams};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//! let result = Triangulate::new(points, TriangulationParams::new(5.0)).execute()?;
//! assert_eq!(result.interior_triangles().len(), 2);
//! # Ok::<(), bowyer::BowyerError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod triangulation;

pub use error::{BowyerError, Result};
