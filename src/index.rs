use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{LogExtractError, Result};

/// Byte offset of the first log line carrying `date`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub date: String,
    pub offset: u64,
}

impl IndexEntry {
    pub fn new(date: impl Into<String>, offset: u64) -> Self {
        IndexEntry { date: date.into(), offset }
    }
}

/// Parses one `<date> <offset>` line. `line_no` is 1-based and only used
/// for the error.
pub fn parse_index_line(line_no: usize, line: &str) -> Result<IndexEntry> {
    let malformed = || LogExtractError::MalformedIndexLine {
        line: line_no,
        content: line.to_string(),
    };

    let mut fields = line.split_whitespace();
    let (date, offset) = match (fields.next(), fields.next(), fields.next()) {
        (Some(d), Some(o), None) => (d, o),
        _ => return Err(malformed()),
    };
    let offset = offset.parse::<u64>().map_err(|_| malformed())?;

    Ok(IndexEntry::new(date, offset))
}

/// Writes the index, truncating whatever was at `path`.
pub fn save_index(path: &Path, entries: &[IndexEntry]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(out, "{} {}", entry.date, entry.offset)?;
    }
    out.flush()?;
    Ok(())
}

/// Loads the index into memory.
///
/// A missing file is not fatal: it is reported and an empty index returned.
/// Lines that do not parse are dropped.
pub fn load_index(path: &Path) -> Result<Vec<IndexEntry>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("{}", LogExtractError::MissingIndexFile(path.to_path_buf()));
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut entries = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        match parse_index_line(i + 1, &line) {
            Ok(entry) => entries.push(entry),
            Err(e) => debug!(error = %e, "skipping index line"),
        }
    }

    debug!(path = %path.display(), entries = entries.len(), "index loaded");
    Ok(entries)
}

/// Offset of the entry whose date equals `date` exactly.
///
/// The index is searched as a sorted sequence (first entry not less than
/// `date`), but a date that is merely bracketed by two indexed dates is
/// not found.
pub fn find_offset(index: &[IndexEntry], date: &str) -> Option<u64> {
    let pos = index.partition_point(|e| e.date.as_str() < date);
    match index.get(pos) {
        Some(entry) if entry.date == date => Some(entry.offset),
        _ => None,
    }
}
