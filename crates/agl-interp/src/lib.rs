//! # agl-interp
//!
//! Scattered-data cubic interpolation for small elevation neighborhoods.
//!
//! [`interpolate`] fits a polyharmonic spline with a cubic kernel through a
//! set of positioned samples and evaluates it at a target coordinate. The
//! fit passes exactly through every sample and reproduces affine fields
//! exactly, so a flat or uniformly sloped terrain patch interpolates
//! without error.
//!
//! Targets outside the convex hull of the samples are rejected rather than
//! extrapolated, and there is no fallback to a cheaper method on failure:
//! a terrain height of degraded precision is worse than a hard error for a
//! clearance computation.
//!
//! ## Example
//!
//! ```
//! // 3x3 unit grid carrying the plane z = y.
//! let positions: Vec<(f64, f64)> = (0..3)
//!     .flat_map(|r| (0..3).map(move |c| (c as f64, r as f64)))
//!     .collect();
//! let values = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
//!
//! let z = agl_interp::interpolate(&positions, &values, (1.0, 0.5))?;
//! assert!((z - 0.5).abs() < 1e-9);
//! # Ok::<(), agl_interp::InterpolationError>(())
//! ```

mod cubic;
mod error;
mod hull;

pub use cubic::interpolate;
pub use error::InterpolationError;

/// Result type for interpolation operations.
pub type Result<T> = std::result::Result<T, InterpolationError>;
