// src/utils.rs
use crate::models::CountMap;
use std::fmt::Write as _;

pub fn format_counts(counts: &CountMap) -> String {
    let mut out = String::new();
    for (dir, count) in counts.iter() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{count:8}  {}", dir.display());
    }
    out
}
