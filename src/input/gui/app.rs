//! Window event loop for the viewer.

mod controls_panel;
mod gui_app;
mod host_events;
pub mod ports;

pub use controls_panel::log_controls;
pub use gui_app::GuiApp;
