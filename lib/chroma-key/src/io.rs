use crate::{ChromaKeyError, ChromaKeyResult};
use image::{ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Decode an image file into an RGBA buffer.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> ChromaKeyResult<RgbaImage> {
    let path = path.as_ref();

    let image = ImageReader::open(path)
        .map_err(|e| ChromaKeyError::Decode(format!("{}: {e}", path.display())))?
        .decode()
        .map_err(|e| ChromaKeyError::Decode(format!("{}: {e}", path.display())))?;

    log::info!(
        "decoded {}: {}x{}",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image.to_rgba8())
}

/// Write an RGBA buffer as a PNG. PNG is the only output format since the
/// whole point of the transform is per-pixel alpha, which PNG preserves
/// exactly.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> ChromaKeyResult<()> {
    let path = path.as_ref();

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ChromaKeyError::Encode(format!("{}: {e}", path.display())))?;

    log::info!("encoded {}", path.display());

    Ok(())
}
