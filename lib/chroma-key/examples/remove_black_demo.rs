use anyhow::Result;
use chroma_key::{ChromaKeyConfig, remove_black_background};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let input = Path::new("data/logo.png");
    let output = output_dir.join("logo_transparent.png");

    remove_black_background(input, &output, &ChromaKeyConfig::new())?;
    println!("✓ Saved {}", output.display());

    Ok(())
}
