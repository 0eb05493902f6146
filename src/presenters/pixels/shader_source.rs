use crate::errors::RenderBackendError;
use pixels::wgpu;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_shader_source(path: &Path) -> Result<String, RenderBackendError> {
    fs::read_to_string(path).map_err(|source| RenderBackendError::ShaderIo {
        path: path.to_path_buf(),
        source,
    })
}

/// WGSL has no preprocessor, so the precision switch is injected as a
/// module-scope constant ahead of the shader body.
#[must_use]
pub fn with_precision_flag(source: &str, use_double: bool) -> String {
    format!("const USE_DOUBLE_PRECISION: bool = {use_double};\n{source}")
}

/// Runs `create` inside a validation error scope and turns any error the
/// device reports into a `RenderBackendError::Shader`.
pub fn validated<T>(
    device: &wgpu::Device,
    name: &str,
    create: impl FnOnce() -> T,
) -> Result<T, RenderBackendError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let created = create();

    match pollster::block_on(device.pop_error_scope()) {
        Some(error) => Err(RenderBackendError::Shader {
            name: name.to_string(),
            message: error.to_string(),
        }),
        None => Ok(created),
    }
}

pub fn create_shader_module(
    device: &wgpu::Device,
    name: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderBackendError> {
    let module = validated(device, name, || {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(name),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        })
    })?;

    debug!(name, "shader module created");

    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_flag_is_prepended() {
        let source = with_precision_flag("fn main() {}", true);

        assert_eq!(
            source,
            "const USE_DOUBLE_PRECISION: bool = true;\nfn main() {}"
        );
        assert!(with_precision_flag("", false).starts_with("const USE_DOUBLE_PRECISION: bool = false;"));
    }

    #[test]
    fn missing_shader_is_an_io_error() {
        let result = load_shader_source(Path::new("/nonexistent/shaders/missing.wgsl"));

        assert!(matches!(result, Err(RenderBackendError::ShaderIo { .. })));
    }

    #[test]
    fn bundled_shaders_are_readable() {
        let shaders = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/shaders");

        let fractal = load_shader_source(&shaders.join("mandelbrot.wgsl")).unwrap();
        let text = load_shader_source(&shaders.join("text.wgsl")).unwrap();

        assert!(fractal.contains("fn fs_main"));
        assert!(fractal.contains("USE_DOUBLE_PRECISION"));
        assert!(text.contains("fn vs_main"));
    }
}
