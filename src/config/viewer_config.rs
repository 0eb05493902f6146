use std::path::{Path, PathBuf};

pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 800;
pub const WINDOW_TITLE: &str = "Mandelbrot Set Explorer";

pub const FONT_FILE: &str = "fonts/DejaVuSansMono.ttf";
pub const FRACTAL_SHADER_FILE: &str = "shaders/mandelbrot.wgsl";
pub const TEXT_SHADER_FILE: &str = "shaders/text.wgsl";

/// Startup options for the viewer, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub depth_buffer: bool,
    pub msaa_samples: u32,
    pub vsync: bool,
    pub use_double: bool,
    pub max_iterations: u32,
    pub assets_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            depth_buffer: true,
            msaa_samples: 4,
            vsync: true,
            use_double: false,
            max_iterations: 100,
            assets_dir: default_assets_dir(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn font_path(&self) -> PathBuf {
        self.assets_dir.join(FONT_FILE)
    }

    #[must_use]
    pub fn fractal_shader_path(&self) -> PathBuf {
        self.assets_dir.join(FRACTAL_SHADER_FILE)
    }

    #[must_use]
    pub fn text_shader_path(&self) -> PathBuf {
        self.assets_dir.join(TEXT_SHADER_FILE)
    }
}

#[must_use]
pub fn default_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}
