//! Example: Maximum ground clearance along a synthetic flight line.
//!
//! Builds a raster with a single terrain hill, flies a constant-altitude
//! line across it, and reports the per-point clearance plus the maximum.
//!
//! Usage: cargo run --example max_clearance

use agl_clearance::{compute_clearance, coverage_bounds, DEFAULT_COVERAGE_MARGIN_DEG, TrajectoryPoint};
use agl_raster::{GeoRaster, GridTransform};

fn main() {
    tracing_subscriber::fmt::init();

    // 64x64 grid at 0.001 degrees per cell, origin corner at (7.0 E, 47.0 N),
    // 300 m base terrain with a 120 m hill near the center.
    let transform = GridTransform::new(7.0, 47.0, 0.001, -0.001);
    let (width, height) = (64usize, 64usize);
    let (hill_col, hill_row, hill_sigma) = (32.0f64, 32.0f64, 8.0f64);
    let samples: Vec<f32> = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| {
                let d2 = (col as f64 - hill_col).powi(2) + (row as f64 - hill_row).powi(2);
                (300.0 + 120.0 * (-d2 / (2.0 * hill_sigma * hill_sigma)).exp()) as f32
            })
        })
        .collect();
    let raster = GeoRaster::new(transform, width, height, samples, None)
        .expect("valid raster parameters");

    // Constant-altitude west-to-east line straight over the hill.
    let trajectory: Vec<TrajectoryPoint> = (0..55)
        .map(|i| TrajectoryPoint::new(46.968, 7.005 + i as f64 * 0.001, 450.0))
        .collect();

    let bounds = coverage_bounds(&trajectory, DEFAULT_COVERAGE_MARGIN_DEG)
        .expect("non-empty trajectory");
    println!(
        "Required raster coverage: lat {:.4} to {:.4}, lon {:.4} to {:.4}",
        bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
    );

    println!("Computing clearance for {} trajectory points...", trajectory.len());
    match compute_clearance(&raster, &trajectory) {
        Ok(summary) => {
            for (i, result) in summary.results.iter().enumerate() {
                println!(
                    "  point {:2}: terrain {:7.2} m, clearance {:7.2} m{}",
                    i,
                    result.terrain_masl,
                    result.agl_m,
                    if result.clamped { "  (clamped)" } else { "" }
                );
            }
            println!(
                "\nMaximum clearance: {:.2} m at point {}",
                summary.max_agl_m, summary.index_of_max
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
