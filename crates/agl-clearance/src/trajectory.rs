//! Trajectory and clearance result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vertex of a flight path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryPoint {
    /// Latitude in decimal degrees (WGS84).
    pub lat: f64,
    /// Longitude in decimal degrees (WGS84).
    pub lon: f64,
    /// Altitude in meters above sea level.
    pub altitude_masl: f64,
}

impl TrajectoryPoint {
    /// Create a trajectory point.
    pub fn new(lat: f64, lon: f64, altitude_masl: f64) -> Self {
        Self {
            lat,
            lon,
            altitude_masl,
        }
    }
}

/// Ground clearance at one trajectory point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AglResult {
    /// Height above ground in meters, clamped at zero.
    pub agl_m: f64,
    /// Interpolated terrain height at the point, in meters above sea level.
    pub terrain_masl: f64,
    /// True when the terrain was at or above the point's altitude and the
    /// clearance was clamped to zero. A clamp on a point that should be
    /// airborne usually indicates bad altitude data or a terrain artifact.
    pub clamped: bool,
}

/// Whole-trajectory clearance summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectorySummary {
    /// Per-point results, aligned with the input trajectory order.
    pub results: Vec<AglResult>,
    /// Largest clearance along the trajectory.
    pub max_agl_m: f64,
    /// Index of the first point achieving `max_agl_m`.
    pub index_of_max: usize,
}

/// Geographic bounding box an elevation source must cover.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoBounds {
    /// Minimum latitude (south edge).
    pub min_lat: f64,
    /// Maximum latitude (north edge).
    pub max_lat: f64,
    /// Minimum longitude (west edge).
    pub min_lon: f64,
    /// Maximum longitude (east edge).
    pub max_lon: f64,
}
