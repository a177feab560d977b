// src/models/count_map.rs
use std::path::{Path, PathBuf};

/// Per-directory match counts, ordered by when each directory was first
/// seen during traversal. Only directories with at least one match have
/// an entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountMap {
    entries: Vec<(PathBuf, u64)>,
}

impl CountMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds one to the count for `dir`, inserting an entry on first sight.
    pub fn increment(&mut self, dir: &Path) {
        // The walk yields a directory's files consecutively, so the entry
        // being incremented is almost always the most recent one.
        if let Some(entry) = self
            .entries
            .iter_mut()
            .rev()
            .find(|(path, _)| path.as_path() == dir)
        {
            entry.1 = entry.1.saturating_add(1);
        } else {
            self.entries.push((dir.to_path_buf(), 1));
        }
    }

    #[must_use]
    pub fn get(&self, dir: &Path) -> Option<u64> {
        self.entries
            .iter()
            .find(|(path, _)| path.as_path() == dir)
            .map(|(_, count)| *count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all per-directory counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0, |sum, (_, count)| sum.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, u64)> {
        self.entries
            .iter()
            .map(|(path, count)| (path.as_path(), *count))
    }
}
