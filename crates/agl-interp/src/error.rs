//! Error types for interpolation.

use thiserror::Error;

/// Errors that can occur when interpolating a sample neighborhood.
#[derive(Debug, Error)]
pub enum InterpolationError {
    /// Target lies outside the convex hull of the sample positions, where
    /// the interpolant is undefined.
    #[error("target ({x}, {y}) is outside the convex hull of the sample neighborhood")]
    OutsideHull {
        /// Target x (longitude) coordinate.
        x: f64,
        /// Target y (latitude) coordinate.
        y: f64,
    },

    /// Sample positions do not span a two-dimensional neighborhood
    /// (coincident or collinear points).
    #[error("sample neighborhood is degenerate")]
    DegenerateNeighborhood,

    /// Positions and values differ in length.
    #[error("mismatched neighborhood: {positions} positions vs {values} values")]
    MismatchedSamples {
        /// Number of positions supplied.
        positions: usize,
        /// Number of values supplied.
        values: usize,
    },
}
