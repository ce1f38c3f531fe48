use crate::{ChromaKeyResult, Effect, io};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Per-channel cutoff below which a pixel counts as near-black.
pub const DEFAULT_THRESHOLD: i32 = 30;

/// Chroma-key effect configuration
///
/// A pixel is classified as near-black when red, green and blue are all
/// strictly below the threshold; alpha plays no part in classification.
/// The threshold is a plain integer: 0 or below matches nothing, anything
/// above 255 matches every pixel.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ChromaKeyConfig {
    #[derivative(Default(value = "DEFAULT_THRESHOLD"))]
    threshold: i32,
}

impl ChromaKeyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }
}

fn is_near_black(pixel: &Rgba<u8>, threshold: i32) -> bool {
    (pixel[0] as i32) < threshold
        && (pixel[1] as i32) < threshold
        && (pixel[2] as i32) < threshold
}

impl Effect for ChromaKeyConfig {
    fn apply(&self, image: &mut RgbaImage) -> ChromaKeyResult<()> {
        for pixel in image.pixels_mut() {
            if is_near_black(pixel, self.threshold) {
                // RGB is irrelevant once alpha is 0; white keeps flattened
                // previews from showing black halos.
                *pixel = Rgba([255, 255, 255, 0]);
            }
        }

        Ok(())
    }
}

/// Decode `input`, zero the alpha of every near-black pixel and write the
/// result to `output` as a PNG.
pub fn remove_black_background<I: AsRef<Path>, O: AsRef<Path>>(
    input: I,
    output: O,
    config: &ChromaKeyConfig,
) -> ChromaKeyResult<()> {
    let mut image = io::load_rgba(input.as_ref())?;
    log::debug!(
        "applying chroma-key, threshold = {}, size = {}x{}",
        config.threshold(),
        image.width(),
        image.height()
    );

    config.apply(&mut image)?;
    io::save_png(&image, output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_near_black_all_channels_strict() {
        assert!(is_near_black(&Rgba([29, 29, 29, 255]), 30));
        assert!(!is_near_black(&Rgba([30, 29, 29, 255]), 30));
        assert!(!is_near_black(&Rgba([29, 30, 29, 255]), 30));
        assert!(!is_near_black(&Rgba([29, 29, 30, 255]), 30));
    }

    #[test]
    fn test_is_near_black_ignores_alpha() {
        assert!(is_near_black(&Rgba([0, 0, 0, 0]), 30));
        assert!(is_near_black(&Rgba([0, 0, 0, 255]), 30));
    }

    #[test]
    fn test_is_near_black_threshold_extremes() {
        assert!(!is_near_black(&Rgba([0, 0, 0, 255]), 0));
        assert!(!is_near_black(&Rgba([0, 0, 0, 255]), -1));
        assert!(is_near_black(&Rgba([255, 255, 255, 255]), 256));
    }
}
