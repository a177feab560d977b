// src/core/scanner.rs
pub mod pattern;

use anyhow::{Error, Result};
use std::path::Path;
use walkdir::WalkDir;

use crate::core::scanner::pattern::Pattern;
use crate::models::CountMap;

/// Walks the tree rooted at `root` and counts, per containing directory,
/// the regular files whose base name matches `pattern`.
///
/// # Arguments
///
/// * `root` - The root directory to scan (must exist; the caller validates)
/// * `pattern` - The compiled filename pattern
///
/// # Returns
///
/// * `Ok(CountMap)` - Per-directory match counts, keyed by the directory
///   that directly contains each matching file, in traversal order.
///   Directories with no matching files never appear.
///
/// # Errors
///
/// This function may return an error if:
/// * A directory cannot be accessed or read during traversal
/// * File system operations fail mid-walk
pub fn traverse_directories(root: &Path, pattern: &Pattern) -> Result<CountMap> {
    let mut counts = CountMap::new();

    // min_depth(1) skips the root entry itself, so a root that happens to
    // be a regular file produces no counts
    for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            Error::new(err).context(format!("Failed to walk: {}", path.display()))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        // Base names that are not valid UTF-8 cannot be tested against the pattern
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }

        if let Some(parent) = entry.path().parent() {
            counts.increment(parent);
        }
    }

    Ok(counts)
}
