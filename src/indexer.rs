use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{LogExtractError, Result};
use crate::index::{save_index, IndexEntry};

/// Leading whitespace-delimited token of a log line, if it has one.
pub fn date_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Scans `reader` from its start and returns one entry per date change.
pub fn scan_dates<R: BufRead>(mut reader: R) -> Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();
    let mut last_date: Option<String> = None;
    let mut offset: u64 = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        let line_offset = offset;
        offset += read as u64;

        let line = String::from_utf8_lossy(&buf);
        let date = match date_token(&line) {
            Some(d) => d,
            None => continue,
        };

        if last_date.as_deref() != Some(date) {
            entries.push(IndexEntry::new(date, line_offset));
            last_date = Some(date.to_string());
        }
    }

    debug!(bytes = offset, entries = entries.len(), "log scan finished");
    Ok(entries)
}

/// Builds the index for `config.log_file` and writes it to `config.index_file`.
///
/// Fails with [`LogExtractError::MissingLogFile`] before touching the index
/// file if the log is absent.
pub fn build_index(config: &Config) -> Result<Vec<IndexEntry>> {
    let log_path: &Path = &config.log_file;
    if !log_path.exists() {
        return Err(LogExtractError::MissingLogFile(log_path.to_path_buf()));
    }

    let file = File::open(log_path)?;
    let reader = BufReader::with_capacity(config.buffer_capacity(), file);
    let entries = scan_dates(reader)?;

    save_index(&config.index_file, &entries)?;
    info!(
        log = %log_path.display(),
        index = %config.index_file.display(),
        entries = entries.len(),
        "index written"
    );
    Ok(entries)
}
