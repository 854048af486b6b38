use crate::CliContext;
use tally_core::directory_watcher::{self as core_watcher, DirectoryEvent, DirectoryWatcher};
use tokio::task::JoinHandle;

/// Build the file index and start the watcher. Returns `None` when the log
/// directory cannot be watched; the live loop then rescans on every pass.
pub async fn init_watcher(ctx: &CliContext) -> Option<JoinHandle<()>> {
    let dir = ctx.log_directory().await;

    match core_watcher::build_index(&dir) {
        Ok((index, newest)) => {
            tracing::info!(
                dir = %dir.display(),
                files = index.len(),
                newest = ?newest,
                "Indexed combat logs"
            );
            *ctx.file_index.write().await = index;
        }
        Err(e) => tracing::warn!(error = %e, "Failed to index log directory"),
    }

    if !dir.exists() {
        tracing::warn!(dir = %dir.display(), "Log directory does not exist");
        return None;
    }

    let mut watcher = match DirectoryWatcher::new(&dir) {
        Ok(w) => w,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to start directory watcher");
            return None;
        }
    };

    let watcher_ctx = ctx.clone();
    let handle = tokio::spawn(async move {
        while let Some(event) = watcher.next_event().await {
            handle_watcher_event(event, &watcher_ctx).await;
        }
    });

    Some(handle)
}

async fn handle_watcher_event(event: DirectoryEvent, ctx: &CliContext) {
    match event {
        DirectoryEvent::NewFile(path) => {
            tracing::info!(path = %path.display(), "New combat log detected");
            ctx.file_index.write().await.add_file(&path);
            ctx.log_changed.notify_one();
        }
        DirectoryEvent::FileModified(path) => {
            ctx.file_index.write().await.add_file(&path);
            ctx.log_changed.notify_one();
        }
        DirectoryEvent::FileRemoved(path) => {
            tracing::info!(path = %path.display(), "Combat log removed");
            ctx.file_index.write().await.remove_file(&path);
            ctx.log_changed.notify_one();
        }
        DirectoryEvent::Error(err) => {
            tracing::warn!(error = %err, "Directory watcher error");
        }
    }
}
