//! Clearance derivation along a trajectory.

use agl_interp::interpolate;
use agl_raster::GeoRaster;
use tracing::{trace, warn};

use crate::{
    AglResult, ClearanceError, GeoBounds, Result, TrajectoryPoint, TrajectorySummary,
};

/// Margin in degrees an elevation source should add around the trajectory
/// bounding box so every point keeps a full 3x3 sampling window.
pub const DEFAULT_COVERAGE_MARGIN_DEG: f64 = 0.005;

/// Compute per-point ground clearance and the trajectory maximum.
///
/// Points are evaluated sequentially in input order; result `i` derives only
/// from trajectory point `i`. Clearance is clamped at zero when the
/// interpolated terrain reaches or exceeds the point's altitude; the clamp
/// is surfaced through [`AglResult::clamped`] and a warning rather than
/// silently folded into the maximum. Ties for the maximum resolve to the
/// first index.
///
/// # Errors
/// [`ClearanceError::EmptyTrajectory`] if `trajectory` has no points.
/// [`ClearanceError::Sampling`] or [`ClearanceError::Interpolation`] as soon
/// as any single point fails; the whole computation aborts because a
/// maximum over a subset of the trajectory is not meaningful.
pub fn compute_clearance(
    raster: &GeoRaster,
    trajectory: &[TrajectoryPoint],
) -> Result<TrajectorySummary> {
    if trajectory.is_empty() {
        return Err(ClearanceError::EmptyTrajectory);
    }

    let mut results = Vec::with_capacity(trajectory.len());
    for (index, point) in trajectory.iter().enumerate() {
        let window = raster
            .sample_window(point.lat, point.lon)
            .map_err(|source| ClearanceError::Sampling {
                index,
                lat: point.lat,
                lon: point.lon,
                source,
            })?;

        let terrain_masl = interpolate(&window.positions, &window.values, (point.lon, point.lat))
            .map_err(|source| ClearanceError::Interpolation {
                index,
                lat: point.lat,
                lon: point.lon,
                source,
            })?;

        let clamped = terrain_masl >= point.altitude_masl;
        if terrain_masl > point.altitude_masl {
            warn!(
                index,
                terrain_masl,
                altitude_masl = point.altitude_masl,
                "trajectory point below interpolated terrain, clamping clearance to zero"
            );
        }
        let agl_m = (point.altitude_masl - terrain_masl).max(0.0);
        trace!(
            index,
            lat = point.lat,
            lon = point.lon,
            terrain_masl,
            agl_m,
            "evaluated trajectory point"
        );

        results.push(AglResult {
            agl_m,
            terrain_masl,
            clamped,
        });
    }

    // Strict comparison keeps the first index on ties.
    let mut index_of_max = 0;
    let mut max_agl_m = results[0].agl_m;
    for (i, result) in results.iter().enumerate().skip(1) {
        if result.agl_m > max_agl_m {
            max_agl_m = result.agl_m;
            index_of_max = i;
        }
    }

    Ok(TrajectorySummary {
        results,
        max_agl_m,
        index_of_max,
    })
}

/// Bounding box, expanded by `margin_deg` on every side, that an elevation
/// source must cover for [`compute_clearance`] to keep a full sampling
/// window around each trajectory point.
///
/// # Errors
/// [`ClearanceError::EmptyTrajectory`] if `trajectory` has no points.
pub fn coverage_bounds(trajectory: &[TrajectoryPoint], margin_deg: f64) -> Result<GeoBounds> {
    let first = trajectory.first().ok_or(ClearanceError::EmptyTrajectory)?;

    let mut min_lat = first.lat;
    let mut max_lat = first.lat;
    let mut min_lon = first.lon;
    let mut max_lon = first.lon;
    for point in &trajectory[1..] {
        min_lat = min_lat.min(point.lat);
        max_lat = max_lat.max(point.lat);
        min_lon = min_lon.min(point.lon);
        max_lon = max_lon.max(point.lon);
    }

    Ok(GeoBounds {
        min_lat: min_lat - margin_deg,
        max_lat: max_lat + margin_deg,
        min_lon: min_lon - margin_deg,
        max_lon: max_lon + margin_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coverage_bounds_applies_margin() {
        let trajectory = vec![
            TrajectoryPoint::new(46.995, 7.005, 150.0),
            TrajectoryPoint::new(46.992, 7.008, 160.0),
            TrajectoryPoint::new(46.998, 7.003, 140.0),
        ];

        let bounds = coverage_bounds(&trajectory, 0.005).unwrap();
        assert_relative_eq!(bounds.min_lat, 46.987, epsilon = 1e-9);
        assert_relative_eq!(bounds.max_lat, 47.003, epsilon = 1e-9);
        assert_relative_eq!(bounds.min_lon, 6.998, epsilon = 1e-9);
        assert_relative_eq!(bounds.max_lon, 7.013, epsilon = 1e-9);
    }

    #[test]
    fn test_coverage_bounds_single_point() {
        let trajectory = vec![TrajectoryPoint::new(47.0, 7.0, 100.0)];
        let bounds = coverage_bounds(&trajectory, DEFAULT_COVERAGE_MARGIN_DEG).unwrap();
        assert_relative_eq!(bounds.max_lat - bounds.min_lat, 0.01, epsilon = 1e-9);
        assert_relative_eq!(bounds.max_lon - bounds.min_lon, 0.01, epsilon = 1e-9);
    }

    #[test]
    fn test_coverage_bounds_empty_rejected() {
        let result = coverage_bounds(&[], DEFAULT_COVERAGE_MARGIN_DEG);
        assert!(matches!(result, Err(ClearanceError::EmptyTrajectory)));
    }
}
