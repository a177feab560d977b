// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, "contents")?;
    Ok(())
}

/// Three levels of directories, with "report"-prefixed files at every
/// level and some decoys that must never be counted.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "report_jan.txt")?;
    create_test_file(temp_dir.path(), "report_feb.txt")?;
    create_test_file(temp_dir.path(), "notes.md")?;

    create_test_file(temp_dir.path(), "logs/report_mar.txt")?;
    create_test_file(temp_dir.path(), "logs/trace.out")?;

    create_test_file(temp_dir.path(), "logs/archive/report_apr.txt")?;
    create_test_file(temp_dir.path(), "logs/archive/quarterly_report.txt")?;

    // A directory with no matches at all
    create_test_file(temp_dir.path(), "docs/readme.md")?;

    Ok(temp_dir)
}
