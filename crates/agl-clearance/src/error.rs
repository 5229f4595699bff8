//! Error types for clearance computation.

use agl_interp::InterpolationError;
use agl_raster::RasterError;
use thiserror::Error;

/// Errors that abort a whole-trajectory clearance computation.
///
/// All failures are structural (bad geometry or data), never transient:
/// retrying an identical input reproduces them, so there are no retry
/// semantics. Partial summaries are never produced.
#[derive(Debug, Error)]
pub enum ClearanceError {
    /// The trajectory has no points, so a maximum is undefined.
    #[error("trajectory is empty")]
    EmptyTrajectory,

    /// Terrain sampling failed at one trajectory point.
    #[error("terrain sampling failed at point {index} ({lat}, {lon}): {source}")]
    Sampling {
        /// Index of the failing trajectory point.
        index: usize,
        /// Latitude of the failing point.
        lat: f64,
        /// Longitude of the failing point.
        lon: f64,
        /// The underlying raster error.
        #[source]
        source: RasterError,
    },

    /// Terrain interpolation failed at one trajectory point.
    #[error("terrain interpolation failed at point {index} ({lat}, {lon}): {source}")]
    Interpolation {
        /// Index of the failing trajectory point.
        index: usize,
        /// Latitude of the failing point.
        lat: f64,
        /// Longitude of the failing point.
        lon: f64,
        /// The underlying interpolation error.
        #[source]
        source: InterpolationError,
    },
}
