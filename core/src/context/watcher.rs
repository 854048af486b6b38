use super::error::WatcherError;
use super::log_files::{LogFileIndex, is_combat_log};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::{self, Receiver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    NewFile(PathBuf),
    /// The client appended to a log
    FileModified(PathBuf),
    FileRemoved(PathBuf),
    Error(String),
}

pub struct DirectoryWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl DirectoryWatcher {
    pub fn new(path: &Path) -> Result<Self, WatcherError> {
        let (tx, rx) = mpsc::channel(100);

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.blocking_send(res);
            },
            Config::default(),
        )
        .map_err(WatcherError::InitWatcher)?;

        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|source| WatcherError::WatchPath {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    pub async fn next_event(&mut self) -> Option<DirectoryEvent> {
        while let Some(event_result) = self.rx.recv().await {
            match event_result {
                Ok(event) => {
                    if let Some(watcher_event) = classify_event(event) {
                        return Some(watcher_event);
                    }
                }
                Err(e) => {
                    return Some(DirectoryEvent::Error(format!(
                        "Directory watcher error: {}",
                        e
                    )));
                }
            }
        }
        None
    }
}

/// Map a raw notify event to the first combat-log path it touches.
fn classify_event(event: Event) -> Option<DirectoryEvent> {
    let path = event.paths.into_iter().find(|p| is_combat_log(p))?;
    match event.kind {
        EventKind::Create(_) => Some(DirectoryEvent::NewFile(path)),
        EventKind::Modify(_) => {
            tracing::trace!(path = %path.display(), "Log file modified");
            Some(DirectoryEvent::FileModified(path))
        }
        EventKind::Remove(_) => Some(DirectoryEvent::FileRemoved(path)),
        _ => None,
    }
}

pub fn build_index(dir: &Path) -> Result<(LogFileIndex, Option<PathBuf>), WatcherError> {
    let index = LogFileIndex::build_index(dir)?;
    let newest = index.newest_file().map(|f| f.path.clone());
    Ok((index, newest))
}
