/// Chroma-key threshold sweep demo
/// Builds a horizontal dark-to-light gradient and keys it at several
/// thresholds so the transparent band is easy to compare.
use anyhow::Result;
use chroma_key::{ChromaKeyConfig, Effect, save_png};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let gradient = RgbaImage::from_fn(256, 64, |x, _| {
        let v = x as u8;
        Rgba([v, v, v, 255])
    });

    for threshold in [10, 30, 64, 128] {
        let mut keyed = gradient.clone();
        ChromaKeyConfig::new()
            .with_threshold(threshold)
            .apply(&mut keyed)?;

        let filename = format!("gradient_keyed_{}.png", threshold);
        save_png(&keyed, output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All thresholds applied, images saved to: tmp/");

    Ok(())
}
