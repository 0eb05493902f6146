pub mod drag;
pub mod iteration_policy;
pub mod palette;
pub mod view_state;
