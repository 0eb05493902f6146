pub mod text_compositor;
