//! Paths and tuning knobs shared by the indexer, extractor and search session.

use crate::error::{LogExtractError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "test_logs.log";
pub const DEFAULT_INDEX_FILE: &str = "log_index.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_READ_BUFFER: usize = 10_000_000;
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Where the log, its index and the extracted output live.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The date-sorted log file being queried.
    pub log_file: PathBuf,
    /// Side-car file holding one `<date> <offset>` pair per line.
    pub index_file: PathBuf,
    /// Directory receiving `output_<date>.txt` files.
    pub output_dir: PathBuf,
    /// Buffer size in bytes for sequential reads of the log.
    pub read_buffer_capacity: usize,
    /// Number of dates whose results the search session keeps cached.
    pub search_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            read_buffer_capacity: DEFAULT_READ_BUFFER,
            search_cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| LogExtractError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read buffer size, never below one byte. A zero-sized `BufReader`
    /// reports end-of-file on its first fill.
    pub fn buffer_capacity(&self) -> usize {
        self.read_buffer_capacity.max(1)
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(
        mut self,
        log_file: Option<PathBuf>,
        index_file: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = log_file {
            self.log_file = p;
        }
        if let Some(p) = index_file {
            self.index_file = p;
        }
        if let Some(p) = output_dir {
            self.output_dir = p;
        }
        self
    }
}
