use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::error::{LogExtractError, Result};
use crate::index::{find_offset, IndexEntry};

/// Reads lines from `reader` while they start with `date`.
pub fn collect_run<R: BufRead>(mut reader: R, date: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if !buf.starts_with(date.as_bytes()) {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).trim().to_string());
    }

    Ok(lines)
}

/// Returns the contiguous run of lines for `date`, or an empty vector when
/// the index has no entry for it.
pub fn extract(
    log_path: &Path,
    index: &[IndexEntry],
    date: &str,
    buffer_capacity: usize,
) -> Result<Vec<String>> {
    let offset = match find_offset(index, date) {
        Some(o) => o,
        None => {
            debug!("{}", LogExtractError::NoMatch(date.to_string()));
            return Ok(Vec::new());
        }
    };

    let mut file = File::open(log_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LogExtractError::MissingLogFile(log_path.to_path_buf()),
        _ => e.into(),
    })?;
    file.seek(SeekFrom::Start(offset))?;
    let reader = BufReader::with_capacity(buffer_capacity.max(1), file);
    let lines = collect_run(reader, date)?;

    debug!(date, offset, lines = lines.len(), "extracted run");
    Ok(lines)
}
