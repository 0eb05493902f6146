pub mod actions;
pub mod data;
pub mod util;
pub mod view;
