use std::io::{Cursor, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Encode an RGBA raster as PNG in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(Error::Encode)?;
    Ok(buf.into_inner())
}

/// Write `image` to `output` as an RGBA PNG, replacing any existing file.
///
/// Bytes go to a temporary file in the same directory, which is then renamed
/// over `output`. Until the rename, `output` keeps its previous content, so a
/// failed write never damages an input that is being stripped in place.
pub fn write_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let bytes = encode_png(image)?;
    write_atomic(output, &bytes)
}

fn write_atomic(output: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(output).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
