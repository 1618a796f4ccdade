use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::extractor::extract;
use crate::index::load_index;
use crate::output::write_output;

/// Loads the index, extracts `date` and writes its output file.
///
/// Returns the written path, or `None` when nothing matched. No file or
/// directory is created in that case.
pub fn run_query(config: &Config, date: &str) -> Result<Option<PathBuf>> {
    let index = load_index(&config.index_file)?;
    let logs = extract(&config.log_file, &index, date, config.buffer_capacity())?;

    if logs.is_empty() {
        debug!(date, "nothing to write");
        return Ok(None);
    }

    write_output(&config.output_dir, date, &logs).map(Some)
}
