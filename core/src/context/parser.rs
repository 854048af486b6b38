use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Datelike;
use tokio::sync::RwLock;

use crate::combat_log::{CombatRecord, LogParser, LogSchema, ReaderError, Reader};
use crate::context::AppConfig;
use crate::encounter::Leaderboard;
use crate::signal_processor::{EventProcessor, GameSignal};
use crate::state::SessionCache;

/// A parsing session: the line parser plus the attribution engine and the
/// state it accumulates.
///
/// The session is rebuilt from the start of the file on every pass: the
/// host calls [`ParsingSession::reset`] and replays every complete line.
pub struct ParsingSession {
    pub active_file: Option<PathBuf>,
    /// Byte offset reached by the last full pass
    pub current_byte: Option<u64>,
    parser: LogParser,
    processor: EventProcessor,
    session_cache: SessionCache,
}

impl Default for ParsingSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl ParsingSession {
    pub fn new(config: &AppConfig) -> Self {
        let year = config
            .default_year
            .unwrap_or_else(|| chrono::Local::now().year());
        Self::with_parser(
            LogParser::new(LogSchema::for_format(config.log_format), year),
            config.rest_zones.iter().cloned(),
        )
    }

    pub fn with_parser<I>(parser: LogParser, rest_zones: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            active_file: None,
            current_byte: None,
            parser,
            processor: EventProcessor::new(),
            session_cache: SessionCache::with_rest_zones(rest_zones),
        }
    }

    /// Switch to another log. Accumulated state belongs to the old file and
    /// is dropped.
    pub fn set_active_file(&mut self, path: PathBuf) {
        if self.active_file.as_ref() != Some(&path) {
            tracing::info!(path = %path.display(), "Active log file changed");
        }
        self.active_file = Some(path);
        self.current_byte = None;
        self.reset();
    }

    /// Classify, parse and apply one raw line. Returns false when the line
    /// was skipped; skipped lines leave the session untouched.
    pub fn process_line(&mut self, line_number: u64, line: &str) -> bool {
        match self.parser.parse_line(line_number, line) {
            Ok(record) => {
                self.process_record(record);
                true
            }
            Err(err) => {
                tracing::trace!(%err, "skipping line");
                false
            }
        }
    }

    pub fn process_record(&mut self, record: CombatRecord) {
        let signals = self.processor.process_record(record, &mut self.session_cache);
        for signal in &signals {
            log_signal(signal);
        }
    }

    /// Clear all entities and the session window.
    pub fn reset(&mut self) {
        self.session_cache.reset();
    }

    pub fn snapshot(&self) -> Leaderboard {
        self.session_cache.snapshot()
    }

    pub fn session_cache(&self) -> &SessionCache {
        &self.session_cache
    }

    /// Reset, then replay every complete line of the active file.
    pub fn reprocess_active_file(&mut self) -> Result<ParseResult, ReaderError> {
        let timer = std::time::Instant::now();
        let Some(path) = self.active_file.clone() else {
            return Ok(ParseResult::default());
        };

        self.reset();
        let reader = Reader::from(path, self.parser.clone());
        let summary = reader.read_log_file(|record| self.process_record(record))?;
        self.current_byte = Some(summary.end_pos);

        Ok(ParseResult {
            records_applied: summary.records_applied,
            skipped: summary.skipped,
            elapsed_ms: timer.elapsed().as_millis(),
            end_pos: summary.end_pos,
        })
    }
}

fn log_signal(signal: &GameSignal) {
    match signal {
        GameSignal::SessionReset { zone_name } => {
            tracing::debug!(zone = %zone_name, "Session reset")
        }
        GameSignal::RestZoneEntered { zone_name } => {
            tracing::debug!(zone = %zone_name, "Rest zone, session kept")
        }
        GameSignal::PlayerRegistered { spec_id, .. } => {
            tracing::trace!(spec_id, "Player registered")
        }
        GameSignal::PetRegistered { .. } => tracing::trace!("Pet registered"),
    }
}

/// Resolve a log file path, joining with log_directory if relative.
pub fn resolve_log_path(config: &AppConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&config.log_directory).join(path)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Parsing Helper
// ─────────────────────────────────────────────────────────────────────────────

/// Result of parsing a log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub records_applied: u64,
    pub skipped: u64,
    pub elapsed_ms: u128,
    pub end_pos: u64,
}

/// Reprocess the session's active file from the start.
pub async fn parse_file(state: Arc<RwLock<ParsingSession>>) -> Result<ParseResult, ReaderError> {
    let mut session = state.write().await;
    let result = session.reprocess_active_file()?;
    tracing::debug!(
        records = result.records_applied,
        skipped = result.skipped,
        elapsed_ms = result.elapsed_ms as u64,
        "Reprocessed log"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat_log::test_lines::*;
    use crate::context::{LogFormat, intern, resolve};
    use std::io::Write;

    fn session() -> ParsingSession {
        ParsingSession::with_parser(LogParser::new(LogSchema::RETAIL, 2025), Vec::new())
    }

    #[test]
    fn malformed_lines_do_not_mutate() {
        let mut s = session();
        assert!(s.process_line(1, &combatant_info("Player-PS1", 65)));

        let good = spell_damage(TS, "Player-PS1", "Alice", "Holy Light", 100, 0);
        let truncated = &good[..good.len() / 2];
        let bad_number = good.replace(",100,", ",1e,");
        assert!(!s.process_line(2, truncated));
        assert!(!s.process_line(3, &bad_number));
        assert!(!s.process_line(4, "4/12 20:15:33.123  SPELL_HEAL,whatever"));

        let entity = s.session_cache().registry.get(intern("Player-PS1")).unwrap();
        assert_eq!(entity.total_damage, 0);
        assert_eq!(entity.name, None);
        assert_eq!(s.session_cache().window.start(), None);

        assert!(s.process_line(5, &good));
        assert_eq!(
            s.snapshot().rows()[0].total_damage,
            100
        );
    }

    #[test]
    fn rest_zones_come_from_config() {
        let config = AppConfig {
            rest_zones: vec!["Dornogal".to_string()],
            default_year: Some(2025),
            ..AppConfig::default()
        };
        let mut s = ParsingSession::new(&config);
        s.process_line(1, &combatant_info("Player-PS2", 63));
        s.process_line(2, &zone_change("Dornogal"));
        assert!(s.snapshot().is_ready());
        s.process_line(3, &zone_change("The Ringing Deeps"));
        assert!(!s.snapshot().is_ready());
    }

    #[test]
    fn log_format_comes_from_config() {
        let config = AppConfig {
            log_format: LogFormat::PreBaseAmount,
            default_year: Some(2025),
            ..AppConfig::default()
        };
        let mut s = ParsingSession::new(&config);
        assert_eq!(*s.parser.schema(), LogSchema::PRE_BASE_AMOUNT);

        // Column 31 is the retail absorb; the older layout reads column 30
        s.process_line(1, &combatant_info("Player-PS6", 63));
        s.process_line(2, &spell_damage(TS, "Player-PS6", "Mage", "Fireball", 1000, 200));
        assert_eq!(s.snapshot().rows()[0].total_damage, 1000);

        assert_eq!(*ParsingSession::default().parser.schema(), LogSchema::RETAIL);
    }

    #[test]
    fn reprocess_replays_from_scratch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = [
            combatant_info("Player-PS3", 1467),
            spell_damage(TS, "Player-PS3", "Evoker", "Disintegrate", 400, 0),
            spell_damage(TS, "Player-PS3", "Evoker", "Fire Breath", 600, 0),
        ]
        .join("\n")
            + "\n";
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();

        let mut s = session();
        s.set_active_file(file.path().to_path_buf());

        let first = s.reprocess_active_file().unwrap();
        let second = s.reprocess_active_file().unwrap();
        assert_eq!(first.records_applied, 3);
        assert_eq!(second.end_pos, contents.len() as u64);
        assert_eq!(s.current_byte, Some(contents.len() as u64));

        let rows = s.snapshot().rows().to_vec();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_damage, 1000);
        assert_eq!(rows[0].display_name(), "Evoker");
        assert_eq!(resolve(rows[0].abilities[0].ability), "Fire Breath");
    }

    #[test]
    fn switching_files_drops_state() {
        let mut s = session();
        s.process_line(1, &combatant_info("Player-PS4", 62));
        s.set_active_file(PathBuf::from("/logs/WoWCombatLog-next.txt"));
        assert!(!s.snapshot().is_ready());
        assert_eq!(s.current_byte, None);
    }

    #[test]
    fn no_active_file_is_a_noop() {
        let mut s = session();
        assert_eq!(s.reprocess_active_file().unwrap(), ParseResult::default());
    }

    #[test]
    fn relative_paths_join_log_directory() {
        let config = AppConfig::with_log_directory("/wow/Logs".to_string());
        assert_eq!(
            resolve_log_path(&config, Path::new("WoWCombatLog.txt")),
            PathBuf::from("/wow/Logs/WoWCombatLog.txt")
        );
        assert_eq!(
            resolve_log_path(&config, Path::new("/tmp/other.txt")),
            PathBuf::from("/tmp/other.txt")
        );
    }

    #[tokio::test]
    async fn parse_file_through_shared_handle() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", combatant_info("Player-PS5", 70)).unwrap();
        writeln!(file, "{}", swing_damage(TS, "Player-PS5", "0000000000000000", 250, 0)).unwrap();
        file.flush().unwrap();

        let mut s = session();
        s.set_active_file(file.path().to_path_buf());
        let handle = Arc::new(RwLock::new(s));

        let result = parse_file(Arc::clone(&handle)).await.unwrap();
        assert_eq!(result.records_applied, 2);
        assert_eq!(handle.read().await.snapshot().rows()[0].total_damage, 250);
    }
}
