pub mod chroma_key;
pub mod io;

pub use chroma_key::{ChromaKeyConfig, remove_black_background};
pub use io::{load_rgba, save_png};

use image::RgbaImage;

pub type ChromaKeyResult<T> = Result<T, ChromaKeyError>;

#[derive(thiserror::Error, Debug)]
pub enum ChromaKeyError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> ChromaKeyResult<()>;
}
