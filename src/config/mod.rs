pub mod cli;
pub mod viewer_config;
