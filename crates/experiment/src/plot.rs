use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use sort_lab::{SortAlgorithm, display_name};

use crate::harness::PatternResults;

/// Floor for plotted times so the log axis never sees zero.
const MIN_SECONDS: f64 = 1e-9;

type Series = Vec<(SortAlgorithm, Vec<(f64, f64)>)>;

/// (size, mean seconds) points per algorithm.
fn series(results: &PatternResults) -> Series {
    results
        .algorithms
        .iter()
        .enumerate()
        .map(|(idx, &algo)| {
            let points = results
                .rows
                .iter()
                .filter_map(|row| {
                    row.measurements
                        .get(idx)
                        .map(|m| (row.size as f64, m.mean_secs().max(MIN_SECONDS)))
                })
                .collect();
            (algo, points)
        })
        .collect()
}

/// Padded log-friendly axis ranges covering every point.
fn axis_ranges(series: &Series) -> Option<(Range<f64>, Range<f64>)> {
    let mut points = series.iter().flat_map(|(_, points)| points.iter());
    let &(x0, y0) = points.next()?;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    Some((x_min * 0.8..x_max * 1.25, y_min * 0.5..y_max * 2.0))
}

fn draw_chart<DB>(
    area: &DrawingArea<DB, Shift>,
    results: &PatternResults,
    caption: &str,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let series = series(results);
    let (x_range, y_range) = axis_ranges(&series)
        .with_context(|| format!("no measurements to plot for {}", results.pattern))?;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 24).into_font())
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Array Size")
        .y_desc("Execution Time (seconds)")
        .x_label_formatter(&|x: &f64| format!("{x:.0}"))
        .y_label_formatter(&|y: &f64| format!("{y:.0e}"))
        .draw()?;

    for (idx, (algo, points)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(display_name(*algo))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

pub fn pattern_chart_path(dir: &Path, results: &PatternResults) -> PathBuf {
    dir.join(format!("sorting_performance_{}.png", results.pattern.label()))
}

pub fn comparison_chart_path(dir: &Path) -> PathBuf {
    dir.join("sorting_performance_comparison.png")
}

fn render_png(
    path: &Path,
    size: (u32, u32),
    draw: impl FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    draw(&root).with_context(|| format!("failed to draw {}", path.display()))?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Writes one chart per pattern plus a combined grid; returns the written paths.
pub fn write_charts(all: &[PatternResults], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let mut written = Vec::with_capacity(all.len() + 1);

    for results in all {
        let path = pattern_chart_path(dir, results);
        let caption = format!(
            "Sorting Algorithm Performance Comparison ({} Arrays)",
            results.pattern.title()
        );
        render_png(&path, (1280, 800), |root| draw_chart(root, results, &caption))?;
        written.push(path);
    }

    if all.is_empty() {
        return Ok(written);
    }

    let path = comparison_chart_path(dir);
    render_png(&path, (1600, 1200), |root| {
        let root = root.titled(
            "Sorting Algorithm Performance Comparison",
            ("sans-serif", 32),
        )?;
        for (area, results) in root.split_evenly((2, 2)).iter().zip(all) {
            let caption = format!("{} Data", results.pattern.title());
            draw_chart(area, results, &caption)?;
        }
        Ok(())
    })?;
    written.push(path);

    Ok(written)
}
