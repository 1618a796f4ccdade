//! Error and Result types for indexing and extraction.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A convenience `Result` type for this crate.
pub type Result<T> = std::result::Result<T, LogExtractError>;

#[derive(Debug, Error)]
pub enum LogExtractError {
    /// The log file does not exist when the index is being built.
    #[error("Log file '{}' not found.", .0.display())]
    MissingLogFile(PathBuf),

    /// The index file does not exist when it is being loaded.
    #[error("Index file '{}' not found.", .0.display())]
    MissingIndexFile(PathBuf),

    /// An index line that is not a `<date> <offset>` pair.
    #[error("Malformed index line {line}: {content:?}")]
    MalformedIndexLine { line: usize, content: String },

    /// No index entry exists for the queried date.
    #[error("No logs found for {0}.")]
    NoMatch(String),

    #[error("Config file '{}' is invalid: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
