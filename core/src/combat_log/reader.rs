use super::{CombatRecord, LogParser, ReaderError};
use encoding_rs::UTF_8;
use memchr::memchr_iter;
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Outcome of one pass over a log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    /// Complete lines seen
    pub lines: u64,
    pub records_applied: u64,
    /// Lines that were unclassified or malformed
    pub skipped: u64,
    /// Byte offset just past the last complete line
    pub end_pos: u64,
}

pub struct Reader {
    path: PathBuf,
    parser: LogParser,
}

impl Reader {
    pub fn from(file_path: PathBuf, parser: LogParser) -> Self {
        Reader {
            path: file_path,
            parser,
        }
    }

    /// Parse every complete line of the file in parallel, then hand the
    /// records to `apply` in file order. A trailing line without a newline
    /// is still being written by the client and is left for the next pass.
    pub fn read_log_file<F>(&self, mut apply: F) -> Result<ReadSummary, ReaderError>
    where
        F: FnMut(CombatRecord),
    {
        let file = fs::File::open(&self.path).map_err(|source| ReaderError::OpenFile {
            path: self.path.clone(),
            source,
        })?;
        if file
            .metadata()
            .map_err(|source| ReaderError::Metadata {
                path: self.path.clone(),
                source,
            })?
            .len()
            == 0
        {
            return Ok(ReadSummary::default());
        }

        // SAFETY: the game only appends to the log; a concurrent truncate is
        // the one case that could invalidate the mapping and it never happens
        // while a session is live.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| ReaderError::MemoryMap {
            path: self.path.clone(),
            source,
        })?;
        let bytes = mmap.as_ref();

        let mut line_ranges: Vec<(usize, usize)> = Vec::new();
        let mut start = 0;
        for end in memchr_iter(b'\n', bytes) {
            line_ranges.push((start, end));
            start = end + 1;
        }
        let end_pos = start as u64;

        let parser = &self.parser;
        let parsed: Vec<Option<CombatRecord>> = line_ranges
            .par_iter()
            .enumerate()
            .map(|(idx, &(start, end))| {
                let raw = &bytes[start..end];
                if raw.iter().all(u8::is_ascii_whitespace) {
                    return None;
                }
                let (line, _, _) = UTF_8.decode(raw);
                match parser.parse_line(idx as u64 + 1, &line) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        tracing::trace!(%err, "skipping line");
                        None
                    }
                }
            })
            .collect();

        let mut summary = ReadSummary {
            lines: line_ranges.len() as u64,
            end_pos,
            ..Default::default()
        };
        for record in parsed {
            match record {
                Some(record) => {
                    apply(record);
                    summary.records_applied += 1;
                }
                None => summary.skipped += 1,
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            lines = summary.lines,
            applied = summary.records_applied,
            skipped = summary.skipped,
            "Read combat log"
        );
        Ok(summary)
    }
}
