//! Convex-hull containment test for sample neighborhoods.

use geo::{ConvexHull, Intersects, MultiPoint, Point};

/// Check whether `target` lies inside or on the convex hull of `points`.
///
/// Boundary points count as contained: a target exactly on a sample
/// position or on a window edge is still a valid interpolation site.
pub(crate) fn hull_contains(points: &[(f64, f64)], target: (f64, f64)) -> bool {
    let multi: MultiPoint<f64> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let hull = multi.convex_hull();
    hull.intersects(&Point::new(target.0, target.1))
}
