//! GeoTIFF loading for elevation rasters.

use crate::{GeoRaster, GridTransform, RasterError, Result};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;

/// GeoTIFF ModelTiepoint tag: anchors a pixel coordinate to a geographic one.
const TAG_MODEL_TIEPOINT: u16 = 33922;
/// GeoTIFF ModelPixelScale tag: per-axis pixel size in degrees.
const TAG_MODEL_PIXEL_SCALE: u16 = 33550;
/// GDAL no-data tag, stored as an ASCII string.
const TAG_GDAL_NODATA: u16 = 42113;

impl GeoRaster {
    /// Load a single-band, north-up GeoTIFF from a local file.
    ///
    /// Reads the geotransform from the ModelTiepoint and ModelPixelScale
    /// tags and the no-data sentinel from the GDAL_NODATA tag. Multi-band
    /// and rotated rasters are not supported.
    ///
    /// # Errors
    /// [`RasterError::InvalidGeoTiff`] if the georeferencing tags are
    /// missing or malformed, or the sample format is not an elevation type
    /// this crate understands. I/O and TIFF decode failures are forwarded.
    pub fn from_geotiff<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let mut decoder = Decoder::new(file)?;

        // SRTM-style exports can be large; raise the decoder limits so a
        // whole tile fits in one read.
        let mut limits = Limits::default();
        limits.decoding_buffer_size = 1024 * 1024 * 1024;
        limits.intermediate_buffer_size = 1024 * 1024 * 1024;
        limits.ifd_value_size = 1024 * 1024 * 1024;
        decoder = decoder.with_limits(limits);

        let (width, height) = decoder.dimensions()?;
        let transform = read_transform(&mut decoder)?;
        let samples = decode_samples(&mut decoder)?;
        let no_data = read_no_data(&mut decoder);

        GeoRaster::new(transform, width as usize, height as usize, samples, no_data)
    }
}

/// Build the affine transform from the GeoTIFF tags.
fn read_transform<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
) -> Result<GridTransform> {
    let tiepoint = decoder
        .get_tag_f64_vec(Tag::Unknown(TAG_MODEL_TIEPOINT))
        .map_err(|_| RasterError::InvalidGeoTiff("missing ModelTiepoint tag".into()))?;
    let scale = decoder
        .get_tag_f64_vec(Tag::Unknown(TAG_MODEL_PIXEL_SCALE))
        .map_err(|_| RasterError::InvalidGeoTiff("missing ModelPixelScale tag".into()))?;

    if tiepoint.len() < 6 || scale.len() < 2 {
        return Err(RasterError::InvalidGeoTiff(format!(
            "malformed georeferencing tags (tiepoint len {}, scale len {})",
            tiepoint.len(),
            scale.len()
        )));
    }

    // Tiepoint is [i, j, k, x, y, z]: pixel (i, j) sits at geo (x, y).
    // The tiepoint is usually pixel (0, 0), but back out the origin corner
    // in case it is not.
    let (tie_i, tie_j) = (tiepoint[0], tiepoint[1]);
    let (tie_x, tie_y) = (tiepoint[3], tiepoint[4]);
    let cell_size_lon = scale[0];
    // ModelPixelScale stores magnitudes; rows run southward in a north-up
    // raster, so the latitude step is negative.
    let cell_size_lat = -scale[1];

    Ok(GridTransform::new(
        tie_x - tie_i * cell_size_lon,
        tie_y - tie_j * cell_size_lat,
        cell_size_lon,
        cell_size_lat,
    ))
}

/// Decode the elevation band into `f32` samples.
fn decode_samples<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Result<Vec<f32>> {
    match decoder.read_image()? {
        DecodingResult::F32(data) => Ok(data),
        DecodingResult::F64(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::I16(data) => Ok(data.into_iter().map(f32::from).collect()),
        DecodingResult::I32(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::U16(data) => Ok(data.into_iter().map(f32::from).collect()),
        DecodingResult::U32(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        _ => Err(RasterError::InvalidGeoTiff(
            "unsupported elevation sample format".into(),
        )),
    }
}

/// Read the no-data sentinel, if the file declares one.
fn read_no_data<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Option<f32> {
    decoder
        .get_tag_ascii_string(Tag::Unknown(TAG_GDAL_NODATA))
        .ok()
        .and_then(|s| s.trim().parse().ok())
}
