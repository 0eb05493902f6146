use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphAtlasError {
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse font: {0}")]
    FontLoad(String),
    #[error("pixel height must be a positive finite number, got {0}")]
    InvalidPixelHeight(f32),
}
