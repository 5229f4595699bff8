//! # agl-clearance
//!
//! Above-ground-level (AGL) clearance computation along flight trajectories.
//!
//! This crate composes [`agl_raster`] and [`agl_interp`]: for each
//! trajectory point it samples the elevation raster's 3x3 neighborhood,
//! interpolates the terrain height at the point's exact coordinate, and
//! derives the clearance `max(0, altitude - terrain)`. The result is a
//! per-point sequence plus the maximum clearance and its index.
//!
//! The computation is all-or-nothing: a maximum taken over a partially
//! evaluated trajectory would be misleading, so any per-point failure
//! aborts the whole run with an error naming the stage, index, and
//! coordinate of the offending point.
//!
//! ## Example
//!
//! ```
//! use agl_clearance::{compute_clearance, TrajectoryPoint};
//! use agl_raster::{GeoRaster, GridTransform};
//!
//! let transform = GridTransform::new(7.0, 47.0, 0.001, -0.001);
//! let raster = GeoRaster::new(transform, 16, 16, vec![100.0f32; 256], None)?;
//!
//! let trajectory = vec![
//!     TrajectoryPoint::new(46.995, 7.005, 150.0),
//!     TrajectoryPoint::new(46.994, 7.006, 130.0),
//! ];
//!
//! let summary = compute_clearance(&raster, &trajectory)?;
//! assert!((summary.max_agl_m - 50.0).abs() < 1e-9);
//! assert_eq!(summary.index_of_max, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod pipeline;
mod trajectory;

pub use error::ClearanceError;
pub use pipeline::{compute_clearance, coverage_bounds, DEFAULT_COVERAGE_MARGIN_DEG};
pub use trajectory::{AglResult, GeoBounds, TrajectoryPoint, TrajectorySummary};

/// Result type for clearance operations.
pub type Result<T> = std::result::Result<T, ClearanceError>;
