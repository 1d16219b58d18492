pub mod constants;
pub mod input;
pub mod render;
pub mod state;
pub mod terminal_guard;
