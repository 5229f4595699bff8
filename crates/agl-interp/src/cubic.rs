//! Polyharmonic cubic interpolation over a scattered sample neighborhood.

use crate::hull::hull_contains;
use crate::{InterpolationError, Result};
use nalgebra::{DMatrix, DVector};

/// Cubic polyharmonic kernel.
fn kernel(r: f64) -> f64 {
    r * r * r
}

/// Interpolate scattered samples at a target coordinate.
///
/// Fits a polyharmonic spline (cubic kernel `r^3` with a linear polynomial
/// tail) through `positions`/`values` and evaluates it at `target`. The
/// spline passes exactly through every sample, and the polynomial tail makes
/// it reproduce affine fields exactly.
///
/// Coordinates are normalized to a unit-scale frame before the solve; the
/// spline is invariant under similarity transforms, and degree-sized cell
/// spacings would otherwise leave the system badly conditioned.
///
/// # Errors
/// [`InterpolationError::OutsideHull`] if `target` is not inside or on the
/// convex hull of `positions`; the interpolant is undefined there and
/// extrapolation is refused. [`InterpolationError::DegenerateNeighborhood`]
/// if the positions do not span a two-dimensional neighborhood.
/// [`InterpolationError::MismatchedSamples`] if the slice lengths differ.
pub fn interpolate(positions: &[(f64, f64)], values: &[f64], target: (f64, f64)) -> Result<f64> {
    if positions.len() != values.len() {
        return Err(InterpolationError::MismatchedSamples {
            positions: positions.len(),
            values: values.len(),
        });
    }
    if positions.len() < 3 {
        return Err(InterpolationError::DegenerateNeighborhood);
    }
    if !hull_contains(positions, target) {
        return Err(InterpolationError::OutsideHull {
            x: target.0,
            y: target.1,
        });
    }

    let n = positions.len();
    let cx = positions.iter().map(|p| p.0).sum::<f64>() / n as f64;
    let cy = positions.iter().map(|p| p.1).sum::<f64>() / n as f64;
    let scale = positions
        .iter()
        .map(|&(x, y)| (x - cx).hypot(y - cy))
        .fold(0.0, f64::max);
    if scale == 0.0 {
        return Err(InterpolationError::DegenerateNeighborhood);
    }

    let pts: Vec<(f64, f64)> = positions
        .iter()
        .map(|&(x, y)| ((x - cx) / scale, (y - cy) / scale))
        .collect();
    let t = ((target.0 - cx) / scale, (target.1 - cy) / scale);

    // Augmented symmetric system
    //   [ A  P ] [w]   [f]
    //   [ P' 0 ] [c] = [0]
    // with A_ij = kernel(|p_i - p_j|) and P_i = [1, x_i, y_i]. The side
    // conditions P'w = 0 keep the spline well-posed and give exact affine
    // reproduction.
    let dim = n + 3;
    let mut system = DMatrix::<f64>::zeros(dim, dim);
    let mut rhs = DVector::<f64>::zeros(dim);
    for i in 0..n {
        for j in 0..n {
            let dx = pts[i].0 - pts[j].0;
            let dy = pts[i].1 - pts[j].1;
            system[(i, j)] = kernel(dx.hypot(dy));
        }
        system[(i, n)] = 1.0;
        system[(i, n + 1)] = pts[i].0;
        system[(i, n + 2)] = pts[i].1;
        system[(n, i)] = 1.0;
        system[(n + 1, i)] = pts[i].0;
        system[(n + 2, i)] = pts[i].1;
        rhs[i] = values[i];
    }

    let coeffs = system
        .lu()
        .solve(&rhs)
        .ok_or(InterpolationError::DegenerateNeighborhood)?;

    let mut height = coeffs[n] + coeffs[n + 1] * t.0 + coeffs[n + 2] * t.1;
    for i in 0..n {
        let dx = t.0 - pts[i].0;
        let dy = t.1 - pts[i].1;
        height += coeffs[i] * kernel(dx.hypot(dy));
    }
    Ok(height)
}
