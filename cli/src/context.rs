use std::path::PathBuf;
use std::sync::Arc;
use tally_core::context::{AppConfig, AppConfigExt, BackgroundTasks, LogFileIndex, ParsingSession};
use tokio::sync::{Mutex, Notify, RwLock};

/// Shared handle to the parsing session.
pub type SessionHandle = Arc<RwLock<ParsingSession>>;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub session: SessionHandle,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
    pub file_index: Arc<RwLock<LogFileIndex>>,
    /// Woken by the directory watcher when a combat log changes
    pub log_changed: Arc<Notify>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let session = ParsingSession::new(&config);
        Self {
            config: Arc::new(RwLock::new(config)),
            session: Arc::new(RwLock::new(session)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
            file_index: Arc::new(RwLock::new(LogFileIndex::default())),
            log_changed: Arc::new(Notify::new()),
        }
    }

    pub async fn log_directory(&self) -> PathBuf {
        PathBuf::from(&self.config.read().await.log_directory)
    }

    /// Newest indexed combat log, if any.
    pub async fn newest_log(&self) -> Option<PathBuf> {
        self.file_index
            .read()
            .await
            .newest_file()
            .map(|f| f.path.clone())
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
