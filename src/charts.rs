//! Chart rendering
//!
//! Draws the distribution histogram and the index-vs-length scatter chart
//! with the [`plotters`] bitmap backend. Charts are saved as fixed 1200x800
//! PNG files. An empty distribution produces a placeholder chart with a
//! "no data" caption instead of failing, so an empty corpus still leaves a
//! visible artifact behind.

use crate::stats::Fence;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

const RESOLUTION: (u32, u32) = (1200, 800);

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),
}

type Result<T> = std::result::Result<T, ChartError>;

/// Frequency histogram of sentence lengths.
pub fn histogram(lengths: &[u32], path: &Path) -> Result<()> {
    render_histogram(lengths, None, &[], "Sentence length distribution", path)
}

/// Histogram annotated with the IQR fence and rug marks for outliers.
///
/// Vertical reference lines mark `lower`, `Q1`, `Q3` and `upper`; each
/// outlier's length gets a short red rug mark at the bottom of the chart.
pub fn fence_histogram(
    lengths: &[u32],
    fence: &Fence,
    outlier_lengths: &[u32],
    path: &Path,
) -> Result<()> {
    render_histogram(
        lengths,
        Some(fence),
        outlier_lengths,
        "Sentence length distribution with IQR bounds",
        path,
    )
}

fn render_histogram(
    lengths: &[u32],
    fence: Option<&Fence>,
    outlier_lengths: &[u32],
    title: &str,
    path: &Path,
) -> Result<()> {
    if lengths.is_empty() {
        return placeholder(title, path);
    }

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for &length in lengths {
        *counts.entry(length).or_insert(0) += 1;
    }

    let min_len = *counts.keys().next().unwrap() as f64;
    let max_len = *counts.keys().next_back().unwrap() as f64;
    let max_count = *counts.values().max().unwrap() as f64;

    // Leave room for the fence lines when they sit outside the data
    let mut x_min = min_len - 1.0;
    let mut x_max = max_len + 1.0;
    if let Some(f) = fence {
        x_min = x_min.min(f.lower - 1.0);
        x_max = x_max.max(f.upper + 1.0);
    }
    let y_max = (max_count * 1.1).max(1.0);

    let root = BitMapBackend::new(path, RESOLUTION).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Words per sentence")
        .y_desc("Sentences")
        .x_label_style(("sans-serif", 25))
        .y_label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(counts.iter().map(|(&length, &count)| {
            let x = length as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, count as f64)], BLUE.filled())
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    if let Some(f) = fence {
        for (x, label) in fence_lines(f) {
            chart
                .draw_series(LineSeries::new([(x, 0.0), (x, y_max)], &BLACK))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            chart
                .draw_series(std::iter::once(Text::new(
                    label,
                    (x, y_max * 0.97),
                    ("sans-serif", 18),
                )))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
        }

        // Rug marks for each outlier's length
        for &length in outlier_lengths {
            let x = length as f64;
            chart
                .draw_series(LineSeries::new([(x, 0.0), (x, y_max * 0.05)], &RED))
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
        }
    }

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))
}

/// Index-vs-length scatter chart with outliers highlighted.
///
/// Horizontal reference lines mark the fence bounds and quartiles; the first
/// ten outliers are annotated with their 1-based sentence index.
pub fn scatter(lengths: &[u32], fence: &Fence, path: &Path) -> Result<()> {
    if lengths.is_empty() {
        return placeholder("Sentence lengths with IQR outliers", path);
    }

    let n = lengths.len() as f64;
    let max_len = *lengths.iter().max().unwrap() as f64;
    let y_max = (max_len * 1.1).max(fence.upper + 1.0);
    let y_min = (fence.lower - 1.0).min(0.0);

    let root = BitMapBackend::new(path, RESOLUTION).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sentence lengths with IQR outliers", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..n + 1.0, y_min..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Sentence index")
        .y_desc("Length (words)")
        .x_label_style(("sans-serif", 25))
        .y_label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    // All sentences as dots, outliers restyled on top
    chart
        .draw_series(lengths.iter().enumerate().map(|(i, &length)| {
            Circle::new(((i + 1) as f64, length as f64), 3, BLUE.filled())
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            lengths
                .iter()
                .enumerate()
                .filter(|(_, &length)| fence.is_outlier(length))
                .map(|(i, &length)| {
                    TriangleMarker::new(((i + 1) as f64, length as f64), 6, RED.filled())
                }),
        )
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    for (y, label) in fence_lines(fence) {
        chart
            .draw_series(LineSeries::new([(0.0, y), (n + 1.0, y)], &BLACK))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
        chart
            .draw_series(std::iter::once(Text::new(
                label,
                ((n + 1.0) * 0.96, y),
                ("sans-serif", 18),
            )))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }

    // Annotate the first ten outliers with their sentence index
    let annotations = lengths
        .iter()
        .enumerate()
        .filter(|(_, &length)| fence.is_outlier(length))
        .take(10)
        .map(|(i, &length)| {
            Text::new(
                format!("#{}", i + 1),
                ((i + 1) as f64 + 0.2, length as f64 + (y_max - y_min) * 0.01),
                ("sans-serif", 18),
            )
        });
    chart
        .draw_series(annotations)
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))
}

fn fence_lines(fence: &Fence) -> [(f64, &'static str); 4] {
    [
        (fence.lower, "lower"),
        (fence.q1, "Q1"),
        (fence.q3, "Q3"),
        (fence.upper, "upper"),
    ]
}

/// Blank captioned chart for the empty-corpus case.
fn placeholder(title: &str, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, RESOLUTION).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;
    root.titled(&format!("{} (no data)", title), ("sans-serif", 40))
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;
    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))
}
