pub mod config;
pub mod controllers;
pub mod core;
pub mod errors;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use config::cli::Cli;
pub use config::viewer_config::ViewerConfig;
pub use errors::AppError;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
