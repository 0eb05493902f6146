//! Input adapters for the viewer.
//!
//! This module contains adapters that receive input from the host and
//! translate it into domain events.

#[cfg(feature = "gui")]
pub mod gui;
