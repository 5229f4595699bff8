//! # agl-raster
//!
//! Georeferenced elevation raster access for ground-clearance computation.
//!
//! A [`GeoRaster`] wraps a single-band, north-up grid of elevation samples
//! together with the affine [`GridTransform`] that maps geographic
//! coordinates to grid indices. The main operation is
//! [`GeoRaster::sample_window`], which extracts the 3x3 neighborhood of
//! samples around a query coordinate, the footprint needed for a
//! neighborhood-based cubic terrain fit.
//!
//! Rasters can be built directly from a sample buffer or loaded from a
//! local GeoTIFF file (e.g. an SRTM export) via [`GeoRaster::from_geotiff`].
//!
//! ## Example
//!
//! ```
//! use agl_raster::{GeoRaster, GridTransform};
//!
//! // 8x8 grid, 0.001 degree cells, origin corner at (7.0 E, 47.0 N).
//! let transform = GridTransform::new(7.0, 47.0, 0.001, -0.001);
//! let raster = GeoRaster::new(transform, 8, 8, vec![250.0f32; 64], None)?;
//!
//! let window = raster.sample_window(46.9965, 7.0035)?;
//! assert_eq!(window.values[4], 250.0);
//! # Ok::<(), agl_raster::RasterError>(())
//! ```

mod error;
mod geotiff;
mod raster;
mod transform;

pub use error::RasterError;
pub use raster::{GeoRaster, RasterExtent, SampleWindow};
pub use transform::GridTransform;

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
