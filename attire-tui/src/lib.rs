// attire-tui/src/lib.rs

pub mod commands;
pub mod render;
pub mod route;
pub mod tui_module;

pub use route::Route;
pub use tui_module::TuiModule;
