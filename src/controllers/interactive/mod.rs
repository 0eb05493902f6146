//! Interactive controller for the real-time viewer.
//!
//! Owns the view state and turns host events into state changes, then
//! describes each frame for the presentation layer:
//! - **Input**: `HostEvent`s from the window adapter
//! - **Output**: `FrameData` with shader uniforms and overlay text
//! - **Core**: input mapping and iteration policy from `core/`

mod fps_counter;
mod viewer_controller;
pub mod data;

pub use fps_counter::FpsCounter;
pub use viewer_controller::ViewerController;
