mod background_tasks;
mod config;
mod error;
mod interner;
mod log_files;
mod parser;
pub mod watcher;

pub use background_tasks::BackgroundTasks;
pub use config::{
    AppConfig, AppConfigExt, Color, LogFormat, class_colors, default_log_directory,
};
pub use error::{ConfigError, WatcherError};
pub use interner::{IStr, intern, resolve};
pub use log_files::{COMBAT_LOG_MARKER, LogFileIndex, LogFileMetaData, find_newest_log, is_combat_log};
pub use parser::{ParseResult, ParsingSession, parse_file, resolve_log_path};
