use mandelbrot_viewer::{Cli, PixelsPresenterFactory, RunGuiCommand};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match Cli::parse_config(std::env::args_os()) {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());

    match command.execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "viewer failed");
            ExitCode::FAILURE
        }
    }
}
