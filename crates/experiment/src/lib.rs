pub mod config;
pub mod demo;
pub mod harness;
pub mod plot;
pub mod report;

use std::io::Write;

use anyhow::Result;
use sort_lab::{PivotStrategy, QuickSorter};

pub use config::{Cli, Command, ExperimentConfig};

pub fn run_compare<W: Write>(config: &ExperimentConfig, out: &mut W) -> Result<()> {
    writeln!(out, "Quick Sort Comparative Experiment")?;
    writeln!(
        out,
        "sizes {:?}, {} run(s) each, quick sort pivot: {}",
        config.sizes,
        config.runs,
        config.pivot_strategy()?
    )?;

    let results = harness::run_comparison(config)?;
    for pattern in &results {
        report::write_results_table(out, pattern)?;
        report::write_work_table(out, pattern)?;
        report::write_analysis(out, pattern)?;
    }

    if config.plots {
        let written = plot::write_charts(&results, &config.output_dir)?;
        writeln!(out)?;
        for path in written {
            writeln!(out, "chart saved: {}", path.display())?;
        }
    }
    Ok(())
}

pub fn run_pivots<W: Write>(config: &ExperimentConfig, out: &mut W) -> Result<()> {
    writeln!(out, "PIVOT STRATEGY ANALYSIS")?;
    writeln!(out, "=======================")?;
    for results in harness::run_pivot_analysis(config)? {
        report::write_pivot_table(out, &results)?;
    }
    Ok(())
}

pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    demo::write_partition_trace(out, &demo::DEMO_INPUT)?;
    let mut data = demo::DEMO_INPUT;
    let mut sorter = QuickSorter::with_seed(config::DEFAULT_SEED);
    demo::write_recursion_tree(out, &mut data, PivotStrategy::Last, &mut sorter)
}
