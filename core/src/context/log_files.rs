use super::error::WatcherError;
use hashbrown::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Substring every client-written combat log carries in its file name.
pub const COMBAT_LOG_MARKER: &str = "WoWCombatLog";

pub struct LogFileMetaData {
    pub path: PathBuf,
    pub filename: String,
    pub file_size: u64,
    pub modified: SystemTime,
}

impl LogFileMetaData {
    pub fn from_path(path: &Path) -> Option<Self> {
        let filename = path.file_name()?.to_str()?.to_string();
        let metadata = fs::metadata(path).ok()?;
        if !metadata.is_file() {
            return None;
        }
        Some(LogFileMetaData {
            path: path.to_path_buf(),
            filename,
            file_size: metadata.len(),
            modified: metadata.modified().ok()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.file_size == 0
    }

    /// Local modification time for display
    pub fn formatted_datetime(&self) -> String {
        chrono::DateTime::<chrono::Local>::from(self.modified)
            .format("%Y-%m-%d %-H:%M")
            .to_string()
    }
}

pub fn is_combat_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.contains(COMBAT_LOG_MARKER))
        .unwrap_or(false)
}

/// Combat logs in one directory, keyed by path.
#[derive(Default)]
pub struct LogFileIndex {
    entries: HashMap<PathBuf, LogFileMetaData>,
}

impl LogFileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_index(dir: &Path) -> Result<Self, WatcherError> {
        let mut index = Self::new();

        if !dir.exists() {
            return Ok(index);
        }
        let read_dir = fs::read_dir(dir).map_err(|source| WatcherError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in read_dir.filter_map(|e| e.ok()) {
            index.add_file(&entry.path());
        }
        Ok(index)
    }

    /// Index (or refresh) `path`. Non-log files are ignored.
    pub fn add_file(&mut self, path: &Path) -> Option<()> {
        if !is_combat_log(path) {
            return None;
        }
        let entry = LogFileMetaData::from_path(path)?;
        self.entries.insert(entry.path.clone(), entry);
        Some(())
    }

    pub fn remove_file(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    /// All entries, newest first
    pub fn entries(&self) -> Vec<&LogFileMetaData> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.path.cmp(&b.path)));
        entries
    }

    pub fn newest_file(&self) -> Option<&LogFileMetaData> {
        self.entries().into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total size of all indexed files in bytes
    pub fn total_size(&self) -> u64 {
        self.entries.values().map(|e| e.file_size).sum()
    }
}

/// The combat log the client is most likely writing to: the most recently
/// modified `WoWCombatLog*` file in `dir`.
pub fn find_newest_log(dir: &Path) -> Result<Option<PathBuf>, WatcherError> {
    let index = LogFileIndex::build_index(dir)?;
    Ok(index.newest_file().map(|f| f.path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;

    fn touch(dir: &Path, name: &str, contents: &str, modified: SystemTime) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.set_modified(modified).unwrap();
        path
    }

    #[test]
    fn newest_log_by_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let base = SystemTime::now() - Duration::from_secs(3600);
        touch(dir.path(), "WoWCombatLog-041225_200000.txt", "a\n", base);
        let newest = touch(
            dir.path(),
            "WoWCombatLog-041225_210000.txt",
            "b\n",
            base + Duration::from_secs(60),
        );
        touch(
            dir.path(),
            "notes.txt",
            "ignored\n",
            base + Duration::from_secs(600),
        );

        assert_eq!(find_newest_log(dir.path()).unwrap(), Some(newest));
    }

    #[test]
    fn no_logs_is_none() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Config.wtf", "", SystemTime::now());
        assert_eq!(find_newest_log(dir.path()).unwrap(), None);
    }

    #[test]
    fn missing_directory_is_empty_index() {
        let index = LogFileIndex::build_index(Path::new("/no/such/wow/Logs")).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn index_tracks_additions_and_removals() {
        let dir = tempfile::tempdir().unwrap();
        let first = touch(dir.path(), "WoWCombatLog.txt", "12345", SystemTime::now());
        let mut index = LogFileIndex::build_index(dir.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.total_size(), 5);

        let archived = touch(
            dir.path(),
            "WoWCombatLog-archive.txt",
            "",
            SystemTime::now() - Duration::from_secs(86_400),
        );
        index.add_file(&archived);
        assert_eq!(index.len(), 2);
        assert_eq!(index.newest_file().map(|f| f.path.clone()), Some(first.clone()));
        assert!(index.entries()[1].is_empty());

        index.remove_file(&first);
        assert_eq!(index.newest_file().map(|f| f.path.clone()), Some(archived));
    }

    #[test]
    fn combat_log_detection() {
        assert!(is_combat_log(Path::new("/logs/WoWCombatLog-041225_200000.txt")));
        assert!(!is_combat_log(Path::new("/logs/FrameXML.log")));
        assert!(!is_combat_log(Path::new("/")));
    }
}
