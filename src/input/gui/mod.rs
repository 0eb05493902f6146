//! GUI input adapter for the interactive viewer.
//!
//! winit provides the window and events, `pixels` the GPU surface, and egui
//! the controls panel.

pub mod app;
pub mod commands;
