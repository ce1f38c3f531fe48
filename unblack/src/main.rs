use anyhow::{Result, bail};
use chroma_key::{ChromaKeyConfig, remove_black_background};
use std::env;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let (input, output) = match args.as_slice() {
        [_, input, output] => (input, output),
        _ => bail!("usage: unblack <input-image> <output.png>"),
    };

    remove_black_background(input, output, &ChromaKeyConfig::new())?;
    println!("Successfully saved to {output}");

    Ok(())
}
