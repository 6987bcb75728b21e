//! File helpers for commands that write result files.

use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it if needed.
///
/// # Example
///
/// ```rust,no_run
/// # use handrank_cli::io_utils::ensure_parent_dir;
/// ensure_parent_dir(std::path::Path::new("data/runs/sim.jsonl")).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

/// Open `path` for appending, creating it and its parent directory.
pub fn open_append(path: &Path) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(path)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(BufWriter::new)
        .map_err(|e| format!("Failed to open output file {}: {}", path.display(), e))
}
