use crate::core::actions::build_glyph_atlas::errors::GlyphAtlasError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidArguments(#[from] clap::Error),
}

impl ConfigError {
    /// Exit status for the process, following clap's conventions.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments(error) => error.exit_code(),
        }
    }

    /// Prints the diagnostic (or help text) the way clap formats it and
    /// exits the process.
    pub fn exit(&self) -> ! {
        match self {
            Self::InvalidArguments(error) => error.exit(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderBackendError {
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to initialise GPU surface: {0}")]
    Surface(String),
    #[error("shader {name} failed to compile: {message}")]
    Shader { name: String, message: String },
    #[error("failed to read shader {path}: {source}")]
    ShaderIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to render frame: {0}")]
    Frame(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    GlyphAtlas(#[from] GlyphAtlasError),
    #[error(transparent)]
    RenderBackend(#[from] RenderBackendError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_backend_error_carries_backend_message() {
        let error = AppError::from(RenderBackendError::Shader {
            name: "mandelbrot".to_string(),
            message: "expected ';'".to_string(),
        });

        assert_eq!(
            error.to_string(),
            "shader mandelbrot failed to compile: expected ';'"
        );
    }

    #[test]
    fn test_font_errors_convert_into_app_error() {
        let error: AppError = GlyphAtlasError::FontLoad("bad magic".to_string()).into();

        assert!(matches!(error, AppError::GlyphAtlas(GlyphAtlasError::FontLoad(_))));
        assert_eq!(error.to_string(), "failed to parse font: bad magic");
    }
}
