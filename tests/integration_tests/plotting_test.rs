// tests/integration_tests/plotting_test.rs
use super::common::create_test_file;
use anyhow::Result;
use dirtally::{MAX_PLOT_CATEGORIES, Pattern, PlotError, render_bar_chart, traverse_directories};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_scan_results_render_to_a_chart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "report_a.txt")?;
    create_test_file(temp_dir.path(), "logs/report_b.txt")?;
    create_test_file(temp_dir.path(), "logs/report_c.txt")?;

    let pattern = Pattern::compile("report")?;
    let counts = traverse_directories(temp_dir.path(), &pattern)?;

    let output = temp_dir.path().join("chart.png");
    render_bar_chart(&counts, &output)?;

    assert!(fs::metadata(&output)?.len() > 0);
    Ok(())
}

#[test]
fn test_empty_scan_results_are_not_renderable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "notes.md")?;

    let pattern = Pattern::compile("report")?;
    let counts = traverse_directories(temp_dir.path(), &pattern)?;

    let output = temp_dir.path().join("chart.png");
    let err = render_bar_chart(&counts, &output).unwrap_err();
    assert!(matches!(err, PlotError::InvalidData(_)));
    Ok(())
}

#[test]
fn test_too_many_directories_are_not_renderable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for index in 0..=MAX_PLOT_CATEGORIES {
        create_test_file(temp_dir.path(), &format!("sub{index:02}/report.txt"))?;
    }

    let pattern = Pattern::compile("report")?;
    let counts = traverse_directories(temp_dir.path(), &pattern)?;
    assert_eq!(counts.len(), MAX_PLOT_CATEGORIES + 1);

    let output = temp_dir.path().join("chart.png");
    let err = render_bar_chart(&counts, &output).unwrap_err();
    assert!(matches!(err, PlotError::InvalidData(_)));
    Ok(())
}
