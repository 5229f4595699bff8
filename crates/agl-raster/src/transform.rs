//! Affine mapping between geographic coordinates and grid indices.

/// Affine transform of a north-up raster grid.
///
/// Maps geographic coordinates (decimal degrees) to fractional grid indices
/// and back. Index (0, 0) is the origin corner of the grid; columns grow
/// eastward with a positive longitude step, rows grow southward with a
/// negative latitude step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    /// Longitude of grid index (0, 0).
    pub origin_lon: f64,
    /// Latitude of grid index (0, 0).
    pub origin_lat: f64,
    /// Longitude step per column in degrees (positive).
    pub cell_size_lon: f64,
    /// Latitude step per row in degrees (negative, north-up).
    pub cell_size_lat: f64,
}

impl GridTransform {
    /// Create a transform from an origin corner and per-axis cell sizes.
    pub fn new(origin_lon: f64, origin_lat: f64, cell_size_lon: f64, cell_size_lat: f64) -> Self {
        Self {
            origin_lon,
            origin_lat,
            cell_size_lon,
            cell_size_lat,
        }
    }

    /// Convert a geographic coordinate to fractional grid indices.
    ///
    /// Returns `(column, row)`. The integer parts select a cell; the
    /// fractional parts give the position within it.
    pub fn to_grid(&self, lon: f64, lat: f64) -> (f64, f64) {
        let col = (lon - self.origin_lon) / self.cell_size_lon;
        let row = (lat - self.origin_lat) / self.cell_size_lat;
        (col, row)
    }

    /// Convert fractional grid indices back to a geographic coordinate.
    ///
    /// Exact inverse of [`GridTransform::to_grid`]. Returns `(lon, lat)`.
    pub fn to_geo(&self, col: f64, row: f64) -> (f64, f64) {
        let lon = self.origin_lon + col * self.cell_size_lon;
        let lat = self.origin_lat + row * self.cell_size_lat;
        (lon, lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_grid_known_values() {
        let t = GridTransform::new(7.0, 47.0, 0.001, -0.001);

        // The origin corner maps to index (0, 0).
        let (col, row) = t.to_grid(7.0, 47.0);
        assert_relative_eq!(col, 0.0);
        assert_relative_eq!(row, 0.0);

        // One cell east and one cell south of the origin.
        let (col, row) = t.to_grid(7.001, 46.999);
        assert_relative_eq!(col, 1.0, epsilon = 1e-9);
        assert_relative_eq!(row, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rows_grow_southward() {
        let t = GridTransform::new(-122.0, 48.0, 0.01, -0.01);

        let (_, row_north) = t.to_grid(-121.5, 47.9);
        let (_, row_south) = t.to_grid(-121.5, 47.5);
        assert!(row_south > row_north);
    }

    #[test]
    fn test_roundtrip() {
        let t = GridTransform::new(-122.731, 47.218, 0.0008, -0.0008);

        for &(lon, lat) in &[(-122.5, 47.1), (-122.0003, 46.75), (-121.9, 47.218)] {
            let (col, row) = t.to_grid(lon, lat);
            let (lon2, lat2) = t.to_geo(col, row);
            assert_relative_eq!(lon, lon2, epsilon = 1e-9);
            assert_relative_eq!(lat, lat2, epsilon = 1e-9);
        }
    }
}
