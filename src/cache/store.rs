// Cache store for search results.
// Entries are kept one JSON object per line, in API response order.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Read cached entries, returning None if the file does not exist.
pub fn read_entries(path: &Path) -> Result<Option<Vec<Value>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let entries = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect::<std::result::Result<Vec<Value>, _>>()?;
    Ok(Some(entries))
}

/// Write entries to the cache, replacing any previous contents.
pub fn write_entries(path: &Path, entries: &[Value]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut body = String::new();
    for entry in entries {
        body.push_str(&serde_json::to_string(entry)?);
        body.push('\n');
    }

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(body.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Check if a cache file exists.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Delete a cached file.
pub fn delete(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
