pub mod commands;
pub mod context;
pub mod dir_watcher;
pub mod logging;
pub mod render;

pub use context::CliContext;
