use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub fn output_path(output_dir: &Path, date: &str) -> PathBuf {
    output_dir.join(format!("output_{date}.txt"))
}

/// Writes `lines` to `output_<date>.txt` under `output_dir`, creating the
/// directory if needed and replacing any previous file.
pub fn write_output(output_dir: &Path, date: &str, lines: &[String]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_path(output_dir, date);

    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(&path, body)?;

    debug!(path = %path.display(), lines = lines.len(), "output written");
    Ok(path)
}
