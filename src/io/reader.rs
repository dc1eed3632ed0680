use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode `path` into an RGBA8 raster.
///
/// The format is sniffed from the file content, falling back to the
/// extension, so a JPEG saved as `.png` still decodes. Grayscale, RGB,
/// palette and 16-bit inputs are all converted to 8-bit RGBA.
pub fn open_raster(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("open_raster: {:?} format={:?}", path, reader.format());
    let decoded = reader.decode().map_err(Error::Decode)?;
    Ok(decoded.to_rgba8())
}
