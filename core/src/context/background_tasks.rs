use tokio::task::JoinHandle;

/// Tasks spawned alongside the live meter.
#[derive(Default)]
pub struct BackgroundTasks {
    watcher: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    /// Replace the directory watcher task, aborting any previous one.
    pub fn set_watcher(&mut self, handle: Option<JoinHandle<()>>) {
        if let Some(old) = std::mem::replace(&mut self.watcher, handle) {
            old.abort();
        }
    }

    /// True while the watcher task is running. Once it exits the host has to
    /// rescan the log directory itself.
    pub fn is_watching(&self) -> bool {
        self.watcher.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn abort_all(&mut self) {
        if let Some(handle) = self.watcher.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finished_watcher_is_not_watching() {
        let mut tasks = BackgroundTasks::default();
        assert!(!tasks.is_watching());

        let handle = tokio::spawn(async {});
        tasks.set_watcher(Some(handle));
        while tasks.is_watching() {
            tokio::task::yield_now().await;
        }
        assert!(!tasks.is_watching());
    }

    #[tokio::test]
    async fn abort_stops_a_running_watcher() {
        let mut tasks = BackgroundTasks::default();
        tasks.set_watcher(Some(tokio::spawn(std::future::pending::<()>())));
        assert!(tasks.is_watching());

        tasks.abort_all();
        assert!(!tasks.is_watching());
    }
}
