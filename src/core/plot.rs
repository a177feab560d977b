// src/core/plot.rs
//! Bar chart rendering for per-directory match counts.
//!
//! Charts are saved as PNG files with a fixed 1200x800 resolution using the
//! [`plotters`] bitmap backend, which works in headless environments.

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;
use thiserror::Error;

use crate::models::CountMap;

/// Rendering is skipped above this many directories because the X-axis
/// tick labels stop being readable.
pub const MAX_PLOT_CATEGORIES: usize = 20;

const PLOT_WIDTH: u32 = 1200;
const PLOT_HEIGHT: u32 = 800;

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = std::result::Result<T, PlotError>;

/// Renders `counts` as a bar chart and saves it to `output_path` as a PNG.
///
/// One bar per `CountMap` entry, in iteration order; X-axis tick labels are
/// the directory path strings, bar heights are the counts, and the axes are
/// titled "Directories" and "Counts".
///
/// # Errors
///
/// * [`PlotError::InvalidData`] when `counts` is empty or holds more than
///   [`MAX_PLOT_CATEGORIES`] entries (callers are expected to have filtered
///   both cases out already)
/// * Other variants when the backend fails to draw or save the chart
pub fn render_bar_chart(counts: &CountMap, output_path: &Path) -> Result<()> {
    if counts.is_empty() {
        return Err(PlotError::InvalidData(String::from("nothing to plot")));
    }
    if counts.len() > MAX_PLOT_CATEGORIES {
        return Err(PlotError::InvalidData(format!(
            "{} directories exceed the plotting limit of {MAX_PLOT_CATEGORIES}",
            counts.len()
        )));
    }

    let labels: Vec<String> = counts
        .iter()
        .map(|(dir, _)| dir.display().to_string())
        .collect();
    let max_count = counts.iter().map(|(_, count)| count).max().unwrap_or(1);
    let bars = i32::try_from(counts.len()).unwrap_or(i32::MAX);

    let root = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(200)
        .y_label_area_size(60)
        .build_cartesian_2d((0..bars).into_segmented(), 0..max_count.saturating_add(1))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Directories")
        .y_desc("Counts")
        .x_labels(counts.len())
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_label_formatter(&|position| {
            let index = match position {
                SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => *index,
                SegmentValue::Last => return String::new(),
            };
            usize::try_from(index)
                .ok()
                .and_then(|index| labels.get(index))
                .cloned()
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(index, (_, count))| {
            let index = i32::try_from(index).unwrap_or(i32::MAX);
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0),
                    (SegmentValue::Exact(index.saturating_add(1)), count),
                ],
                BLUE.filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::FileSave(e.to_string()))?;

    Ok(())
}
