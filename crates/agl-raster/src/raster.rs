//! Single-band georeferenced elevation grid.

use crate::{GridTransform, RasterError, Result};

/// Tolerance when comparing samples against the no-data sentinel.
const NO_DATA_EPSILON: f32 = 1e-3;

/// A single-band, north-up grid of elevation samples.
///
/// Read-only after construction, so shared references can be handed to
/// concurrent readers without locking.
#[derive(Debug)]
pub struct GeoRaster {
    /// Geographic-to-grid affine transform.
    transform: GridTransform,
    /// Grid width in columns.
    width: usize,
    /// Grid height in rows.
    height: usize,
    /// Elevation samples in row-major order (north to south, west to east).
    samples: Vec<f32>,
    /// No-data sentinel; samples equal to this value are treated as missing.
    no_data: Option<f32>,
}

/// Geographic extent of a raster, spanning the outer cell corners.
#[derive(Debug, Clone, Copy)]
pub struct RasterExtent {
    /// Minimum latitude (south edge).
    pub min_lat: f64,
    /// Maximum latitude (north edge).
    pub max_lat: f64,
    /// Minimum longitude (west edge).
    pub min_lon: f64,
    /// Maximum longitude (east edge).
    pub max_lon: f64,
}

/// A 3x3 neighborhood of samples around a query coordinate.
///
/// Entries are in row-major order over the block spanning `anchor - 1` to
/// `anchor + 1` on both axes, where the anchor is the cell containing the
/// query. Positions are the affine transform applied to each sample's
/// integer grid indices, so `values[i]` is the elevation at `positions[i]`.
#[derive(Debug, Clone, Copy)]
pub struct SampleWindow {
    /// Sample coordinates as `(lon, lat)` pairs.
    pub positions: [(f64, f64); 9],
    /// Elevation at each position, in meters.
    pub values: [f64; 9],
}

impl GeoRaster {
    /// Create a raster from a row-major sample buffer.
    ///
    /// # Errors
    /// [`RasterError::InvalidGrid`] if the buffer length does not match the
    /// grid dimensions, the cell sizes violate the north-up convention
    /// (`cell_size_lon > 0`, `cell_size_lat < 0`), or the grid is smaller
    /// than the 3x3 sampling footprint.
    pub fn new(
        transform: GridTransform,
        width: usize,
        height: usize,
        samples: Vec<f32>,
        no_data: Option<f32>,
    ) -> Result<Self> {
        if samples.len() != width * height {
            return Err(RasterError::InvalidGrid(format!(
                "expected {} samples for a {}x{} grid, got {}",
                width * height,
                width,
                height,
                samples.len()
            )));
        }
        if !(transform.cell_size_lon > 0.0) || !(transform.cell_size_lat < 0.0) {
            return Err(RasterError::InvalidGrid(format!(
                "cell sizes ({}, {}) violate the north-up convention",
                transform.cell_size_lon, transform.cell_size_lat
            )));
        }
        if width < 3 || height < 3 {
            return Err(RasterError::InvalidGrid(format!(
                "{}x{} grid is smaller than the 3x3 sampling footprint",
                width, height
            )));
        }

        Ok(Self {
            transform,
            width,
            height,
            samples,
            no_data,
        })
    }

    /// Extract the 3x3 sample neighborhood around a geographic coordinate.
    ///
    /// The query coordinate is converted to fractional grid indices; the
    /// floor of each axis selects the anchor cell and the window spans one
    /// cell on every side of it.
    ///
    /// # Errors
    /// [`RasterError::OutOfBounds`] if the window extends past the grid;
    /// the raster source must supply a margin around the query region (see
    /// the clearance pipeline's coverage bounds). [`RasterError::NoData`] if
    /// any sample in the window carries the no-data sentinel. A truncated
    /// or padded window is never returned.
    pub fn sample_window(&self, lat: f64, lon: f64) -> Result<SampleWindow> {
        let (col, row) = self.transform.to_grid(lon, lat);
        let anchor_col = col.floor() as i64;
        let anchor_row = row.floor() as i64;

        if anchor_col < 1
            || anchor_row < 1
            || anchor_col + 1 >= self.width as i64
            || anchor_row + 1 >= self.height as i64
        {
            return Err(self.out_of_bounds(lat, lon));
        }

        let mut positions = [(0.0, 0.0); 9];
        let mut values = [0.0; 9];
        let mut i = 0;
        for dr in -1..=1i64 {
            for dc in -1..=1i64 {
                let grid_col = anchor_col + dc;
                let grid_row = anchor_row + dr;
                let value = self.samples[grid_row as usize * self.width + grid_col as usize];

                if let Some(no_data) = self.no_data {
                    if (value - no_data).abs() < NO_DATA_EPSILON {
                        return Err(RasterError::NoData { lat, lon });
                    }
                }

                positions[i] = self.transform.to_geo(grid_col as f64, grid_row as f64);
                values[i] = f64::from(value);
                i += 1;
            }
        }

        Ok(SampleWindow { positions, values })
    }

    /// Get the geographic extent of the grid.
    pub fn extent(&self) -> RasterExtent {
        let (max_lon, min_lat) = self
            .transform
            .to_geo(self.width as f64, self.height as f64);
        RasterExtent {
            min_lat,
            max_lat: self.transform.origin_lat,
            min_lon: self.transform.origin_lon,
            max_lon,
        }
    }

    /// Get the grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the affine transform of the grid.
    pub fn transform(&self) -> GridTransform {
        self.transform
    }

    /// Get the no-data sentinel, if one is defined.
    pub fn no_data(&self) -> Option<f32> {
        self.no_data
    }

    fn out_of_bounds(&self, lat: f64, lon: f64) -> RasterError {
        let extent = self.extent();
        RasterError::OutOfBounds {
            lat,
            lon,
            min_lat: extent.min_lat,
            max_lat: extent.max_lat,
            min_lon: extent.min_lon,
            max_lon: extent.max_lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// 10x10 grid over (7.0..7.01 E, 46.99..47.0 N) with 0.001 degree cells.
    fn test_raster(samples: Vec<f32>, no_data: Option<f32>) -> GeoRaster {
        let transform = GridTransform::new(7.0, 47.0, 0.001, -0.001);
        GeoRaster::new(transform, 10, 10, samples, no_data).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_sample_count() {
        let transform = GridTransform::new(7.0, 47.0, 0.001, -0.001);
        let result = GeoRaster::new(transform, 10, 10, vec![0.0; 99], None);
        assert!(matches!(result, Err(RasterError::InvalidGrid(_))));
    }

    #[test]
    fn test_new_rejects_wrong_cell_signs() {
        // Positive latitude step breaks the north-up convention.
        let transform = GridTransform::new(7.0, 47.0, 0.001, 0.001);
        let result = GeoRaster::new(transform, 10, 10, vec![0.0; 100], None);
        assert!(matches!(result, Err(RasterError::InvalidGrid(_))));
    }

    #[test]
    fn test_new_rejects_undersized_grid() {
        let transform = GridTransform::new(7.0, 47.0, 0.001, -0.001);
        let result = GeoRaster::new(transform, 2, 2, vec![0.0; 4], None);
        assert!(matches!(result, Err(RasterError::InvalidGrid(_))));
    }

    #[test]
    fn test_window_values_and_positions() {
        // Distinct value per cell so window placement is visible.
        let samples: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let raster = test_raster(samples, None);

        // Query inside cell (5, 5): col = 5.5, row = 5.5.
        let window = raster.sample_window(46.9945, 7.0055).unwrap();

        // Row-major over rows 4..=6, cols 4..=6.
        let expected = [44.0, 45.0, 46.0, 54.0, 55.0, 56.0, 64.0, 65.0, 66.0];
        assert_eq!(window.values, expected);

        // Center sample sits at grid index (5, 5).
        let (lon, lat) = window.positions[4];
        assert_relative_eq!(lon, 7.005, epsilon = 1e-9);
        assert_relative_eq!(lat, 46.995, epsilon = 1e-9);

        // Corner samples one cell away on each axis.
        let (lon, lat) = window.positions[0];
        assert_relative_eq!(lon, 7.004, epsilon = 1e-9);
        assert_relative_eq!(lat, 46.996, epsilon = 1e-9);
    }

    #[test]
    fn test_window_contains_query() {
        let raster = test_raster(vec![100.0; 100], None);
        let (query_lat, query_lon) = (46.9945, 7.0055);
        let window = raster.sample_window(query_lat, query_lon).unwrap();

        let min_lon = window.positions.iter().map(|p| p.0).fold(f64::MAX, f64::min);
        let max_lon = window.positions.iter().map(|p| p.0).fold(f64::MIN, f64::max);
        let min_lat = window.positions.iter().map(|p| p.1).fold(f64::MAX, f64::min);
        let max_lat = window.positions.iter().map(|p| p.1).fold(f64::MIN, f64::max);
        assert!(query_lon > min_lon && query_lon < max_lon);
        assert!(query_lat > min_lat && query_lat < max_lat);
    }

    #[test]
    fn test_window_out_of_bounds_near_edges() {
        let raster = test_raster(vec![100.0; 100], None);

        // Within half a cell of each edge the 3x3 window cannot fit.
        let near_west = raster.sample_window(46.995, 7.0005);
        let near_east = raster.sample_window(46.995, 7.0095);
        let near_north = raster.sample_window(46.9995, 7.005);
        let near_south = raster.sample_window(46.9905, 7.005);
        for result in [near_west, near_east, near_north, near_south] {
            assert!(matches!(result, Err(RasterError::OutOfBounds { .. })));
        }

        // Far outside the raster entirely.
        let far = raster.sample_window(10.0, 100.0);
        assert!(matches!(far, Err(RasterError::OutOfBounds { .. })));
    }

    #[test]
    fn test_window_interior_ok_one_cell_in() {
        let raster = test_raster(vec![100.0; 100], None);

        // Anchor cell (1, 1) is the closest to the corner that still fits.
        assert!(raster.sample_window(46.9985, 7.0015).is_ok());
    }

    #[test]
    fn test_window_no_data() {
        let mut samples = vec![100.0f32; 100];
        samples[5 * 10 + 5] = -9999.0;
        let raster = test_raster(samples, Some(-9999.0));

        let result = raster.sample_window(46.9945, 7.0055);
        assert!(matches!(result, Err(RasterError::NoData { .. })));

        // A window that avoids the sentinel cell still works.
        assert!(raster.sample_window(46.9975, 7.0025).is_ok());
    }

    #[test]
    fn test_extent() {
        let raster = test_raster(vec![100.0; 100], None);
        let extent = raster.extent();
        assert_relative_eq!(extent.min_lat, 46.99, epsilon = 1e-9);
        assert_relative_eq!(extent.max_lat, 47.0, epsilon = 1e-9);
        assert_relative_eq!(extent.min_lon, 7.0, epsilon = 1e-9);
        assert_relative_eq!(extent.max_lon, 7.01, epsilon = 1e-9);
    }
}
