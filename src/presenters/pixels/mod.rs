//! Rendering backend built on the `pixels` wgpu context.
//!
//! `pixels` owns the surface and device; the fractal and overlay are drawn
//! by this module's own pipelines, and egui is composited on top.

pub mod factory;
mod fractal_pipeline;
mod glyph_textures;
pub mod presenter;
mod render_targets;
mod shader_source;
mod text_pipeline;
