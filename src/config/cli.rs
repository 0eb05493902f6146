use crate::config::viewer_config::{ViewerConfig, default_assets_dir};
use crate::errors::ConfigError;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::warn;

/// Every adapter supports 1x and 4x; other counts are rounded to one of these.
const SUPPORTED_MSAA: u32 = 4;

#[derive(Debug, Parser)]
#[command(name = "viewer")]
#[command(about = "Interactive Mandelbrot set explorer", long_about = None)]
pub struct Cli {
    /// Run without a depth/stencil attachment
    #[arg(long)]
    no_depth: bool,

    /// Anti-aliasing level (MSAA samples)
    #[arg(long, value_name = "0..16", default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=16))]
    aa: u8,

    /// Wait for vertical sync when presenting
    #[arg(long, value_name = "true|false", default_value_t = true, action = ArgAction::Set)]
    vsync: bool,

    /// Emulate double precision in the fractal shader
    #[arg(long)]
    use_double: bool,

    /// Starting iteration cap
    #[arg(long, value_name = "0..1000", default_value_t = 100, value_parser = clap::value_parser!(u32).range(0..=1000))]
    max_iters: u32,

    /// Directory holding fonts/ and shaders/
    #[arg(long, value_name = "DIR", default_value_os_t = default_assets_dir())]
    assets: PathBuf,
}

impl Cli {
    pub fn parse_config<I, T>(args: I) -> Result<ViewerConfig, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?.into_config())
    }

    #[must_use]
    pub fn into_config(self) -> ViewerConfig {
        ViewerConfig {
            depth_buffer: !self.no_depth,
            msaa_samples: msaa_samples(self.aa),
            vsync: self.vsync,
            use_double: self.use_double,
            max_iterations: self.max_iters,
            assets_dir: self.assets,
        }
    }
}

fn msaa_samples(level: u8) -> u32 {
    let requested = u32::from(level);

    let samples = if requested <= 1 { 1 } else { SUPPORTED_MSAA };
    if requested > 1 && requested != samples {
        warn!(requested, samples, "anti-aliasing level not supported, rounding");
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<ViewerConfig, ConfigError> {
        Cli::parse_config(std::iter::once("viewer").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(
            config,
            ViewerConfig {
                depth_buffer: true,
                msaa_samples: 4,
                vsync: true,
                use_double: false,
                max_iterations: 100,
                assets_dir: default_assets_dir(),
            }
        );
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "--no-depth",
            "--aa",
            "0",
            "--vsync",
            "false",
            "--use-double",
            "--max-iters",
            "1000",
            "--assets",
            "/tmp/viewer-assets",
        ])
        .unwrap();

        assert!(!config.depth_buffer);
        assert_eq!(config.msaa_samples, 1);
        assert!(!config.vsync);
        assert!(config.use_double);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(
            config.font_path(),
            PathBuf::from("/tmp/viewer-assets/fonts/DejaVuSansMono.ttf")
        );
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        for args in [
            &["--aa", "17"][..],
            &["--aa", "-1"][..],
            &["--max-iters", "1001"][..],
            &["--max-iters", "ten"][..],
        ] {
            let error = parse(args).unwrap_err();
            assert_eq!(error.exit_code(), 2, "{:?}", args);
        }
    }

    #[test]
    fn test_vsync_requires_boolean() {
        assert_eq!(parse(&["--vsync", "maybe"]).unwrap_err().exit_code(), 2);
        assert!(parse(&["--vsync", "true"]).unwrap().vsync);
    }

    #[test]
    fn test_missing_value_is_rejected() {
        assert!(parse(&["--max-iters"]).is_err());
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        let ConfigError::InvalidArguments(error) = parse(&["--fullscreen"]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_msaa_levels_round_to_supported_counts() {
        assert_eq!(msaa_samples(0), 1);
        assert_eq!(msaa_samples(1), 1);
        assert_eq!(msaa_samples(2), 4);
        assert_eq!(msaa_samples(4), 4);
        assert_eq!(msaa_samples(16), 4);
    }
}
