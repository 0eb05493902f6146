pub mod frame_data;
pub mod overlay_line;
