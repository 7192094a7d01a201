use std::io::{self, Write};

use sort_lab::display_name;

use crate::harness::{Measurement, PatternResults, PivotResults};

const SIZE_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 22;

fn rule<W: Write>(out: &mut W, ch: char, width: usize) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(width))
}

fn table_width(results: &PatternResults) -> usize {
    SIZE_WIDTH + (COLUMN_WIDTH + 1) * results.algorithms.len()
}

pub fn write_results_table<W: Write>(out: &mut W, results: &PatternResults) -> io::Result<()> {
    let width = table_width(results);
    writeln!(out)?;
    rule(out, '=', width)?;
    writeln!(
        out,
        "RESULTS TABLE - {} ARRAYS (mean seconds)",
        results.pattern.title().to_uppercase()
    )?;
    rule(out, '=', width)?;

    write!(out, "{:<SIZE_WIDTH$}", "Array Size")?;
    for &algo in &results.algorithms {
        write!(out, " {:<COLUMN_WIDTH$}", display_name(algo))?;
    }
    writeln!(out)?;
    rule(out, '-', width)?;

    for row in &results.rows {
        write!(out, "{:<SIZE_WIDTH$}", row.size)?;
        for m in &row.measurements {
            write!(out, " {:<COLUMN_WIDTH$}", format!("{:.6}s", m.mean_secs()))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Comparisons and swaps per cell, as `comparisons/swaps`.
pub fn write_work_table<W: Write>(out: &mut W, results: &PatternResults) -> io::Result<()> {
    let width = table_width(results);
    writeln!(out)?;
    writeln!(
        out,
        "WORK - {} ARRAYS (comparisons/swaps)",
        results.pattern.title().to_uppercase()
    )?;
    rule(out, '-', width)?;
    for row in &results.rows {
        write!(out, "{:<SIZE_WIDTH$}", row.size)?;
        for m in &row.measurements {
            let cell = format!("{}/{}", m.counters.comparisons, m.counters.swaps);
            write!(out, " {cell:<COLUMN_WIDTH$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Fastest and slowest algorithm per size, with the speedup between them.
pub fn write_analysis<W: Write>(out: &mut W, results: &PatternResults) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "ANALYSIS - {} ARRAYS",
        results.pattern.title().to_uppercase()
    )?;

    for row in &results.rows {
        let timed = results.algorithms.iter().zip(&row.measurements);
        let fastest = timed.clone().min_by_key(|(_, m)| m.mean);
        let slowest = timed.max_by_key(|(_, m)| m.mean);
        let (Some((&fast_algo, fast)), Some((&slow_algo, slow))) = (fastest, slowest) else {
            continue;
        };

        writeln!(out, "Array Size: {}", row.size)?;
        writeln!(
            out,
            "  Fastest: {} ({:.6}s)",
            display_name(fast_algo),
            fast.mean_secs()
        )?;
        writeln!(
            out,
            "  Slowest: {} ({:.6}s)",
            display_name(slow_algo),
            slow.mean_secs()
        )?;
        match speedup(fast, slow) {
            Some(ratio) => writeln!(out, "  Speedup: {ratio:.2}x")?,
            None => writeln!(out, "  Speedup: n/a")?,
        }
    }
    Ok(())
}

fn speedup(fast: &Measurement, slow: &Measurement) -> Option<f64> {
    let fast = fast.mean_secs();
    (fast > 0.0).then(|| slow.mean_secs() / fast)
}

pub fn write_pivot_table<W: Write>(out: &mut W, results: &PivotResults) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} Data ({} elements):",
        results.pattern.title(),
        results.size
    )?;
    rule(out, '-', 62)?;
    writeln!(
        out,
        "{:<12} {:<12} {:<14} {:<12} {:<8}",
        "Strategy", "Time (s)", "Comparisons", "Swaps", "Depth"
    )?;
    rule(out, '-', 62)?;
    for (strategy, m) in &results.entries {
        let depth = m.max_depth.map_or_else(|| "-".to_owned(), |d| d.to_string());
        writeln!(
            out,
            "{:<12} {:<12.6} {:<14} {:<12} {:<8}",
            strategy.label(),
            m.mean_secs(),
            m.counters.comparisons,
            m.counters.swaps,
            depth
        )?;
    }
    Ok(())
}
