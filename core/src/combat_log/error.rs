//! Error types for combat log parsing

use std::path::PathBuf;
use thiserror::Error;

/// Per-line failures. Recovered by skipping the line; never surfaced to the host.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line_number}: no known event kind")]
    Unclassified { line_number: u64 },

    #[error("line {line_number}: missing column {column} (line has {available})")]
    MissingColumn {
        line_number: u64,
        column: usize,
        available: usize,
    },

    #[error("line {line_number}: column {column} is not a number: {value}")]
    InvalidNumber {
        line_number: u64,
        column: usize,
        value: String,
    },

    #[error("line {line_number}: invalid timestamp: {segment}")]
    InvalidTimestamp { line_number: u64, segment: String },
}

/// Errors during log file reading operations
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to open log file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read metadata for {path}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to memory map file {path}")]
    MemoryMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
