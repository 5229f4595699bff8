//! Error types for raster access.

use thiserror::Error;

/// Errors that can occur when loading or sampling an elevation raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decoding error.
    #[error("TIFF decode error: {0}")]
    TiffDecode(#[from] tiff::TiffError),

    /// File is not a usable single-band georeferenced GeoTIFF.
    #[error("Invalid GeoTIFF: {0}")]
    InvalidGeoTiff(String),

    /// Grid construction parameters are inconsistent.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// The 3x3 sampling window around a coordinate exceeds the raster extent.
    #[error(
        "Sampling window at ({lat}, {lon}) exceeds raster extent \
         (lat {min_lat} to {max_lat}, lon {min_lon} to {max_lon})"
    )]
    OutOfBounds {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
        /// Raster minimum latitude.
        min_lat: f64,
        /// Raster maximum latitude.
        max_lat: f64,
        /// Raster minimum longitude.
        min_lon: f64,
        /// Raster maximum longitude.
        max_lon: f64,
    },

    /// A sample inside the window carries the no-data sentinel.
    #[error("No elevation data at coordinate ({lat}, {lon})")]
    NoData {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
    },
}
