use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::core::processing::strip::strip_background_in_place;
use crate::error::Result;
use crate::io::reader::open_raster;
use crate::types::StripStats;

/// Strip an already-decoded raster, taking ownership of its buffer.
pub fn strip_raster(mut image: RgbaImage, threshold: u8) -> (RgbaImage, StripStats) {
    let (width, height) = image.dimensions();
    let cleared = strip_background_in_place(&mut image, threshold);
    debug!(
        "strip_raster: {}x{}, cleared {} of {} pixels",
        width,
        height,
        cleared,
        width as usize * height as usize
    );
    (
        image,
        StripStats {
            width,
            height,
            cleared,
        },
    )
}

/// Decode `input` and strip it. Nothing is written.
pub fn load_and_strip(input: &Path, threshold: u8) -> Result<(RgbaImage, StripStats)> {
    let raster = open_raster(input)?;
    Ok(strip_raster(raster, threshold))
}
