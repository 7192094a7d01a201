use std::io::Write;

use anyhow::{Result, ensure};
use sort_lab::{PivotStrategy, QuickSorter};

pub const DEMO_INPUT: [i64; 8] = [3, 1, 4, 1, 5, 9, 2, 6];

/// Prints every step of one last-pivot Lomuto partition, then checks the
/// layout against [`QuickSorter::partition`].
pub fn write_partition_trace<W: Write>(out: &mut W, input: &[i64]) -> Result<()> {
    ensure!(!input.is_empty(), "partition trace needs at least one element");

    writeln!(out, "PARTITIONING PROCESS DEMONSTRATION")?;
    writeln!(out, "==================================")?;
    let high = input.len() - 1;
    let pivot = input[high];
    let mut data = input.to_vec();
    writeln!(out, "Array: {data:?}")?;
    writeln!(out, "Pivot: {pivot} (last element)")?;
    writeln!(out)?;

    let mut store = 0;
    for j in 0..high {
        writeln!(out, "j = {j}, arr[j] = {}", data[j])?;
        if data[j] <= pivot {
            if store != j {
                data.swap(store, j);
                writeln!(out, "  swap arr[{store}] and arr[{j}]: {data:?}")?;
            } else {
                writeln!(out, "  already in place")?;
            }
            store += 1;
        } else {
            writeln!(out, "  arr[j] > pivot, no action")?;
        }
        writeln!(out, "  boundary: {store} element(s) <= pivot")?;
    }
    data.swap(store, high);
    writeln!(out, "Final step: move pivot to position {store}")?;
    writeln!(out, "Result: {data:?}")?;

    let mut checked = input.to_vec();
    let mut sorter = QuickSorter::with_seed(0);
    let split = sorter.partition(&mut checked, 0, high, PivotStrategy::Last)?;
    ensure!(
        split == store && checked == data,
        "trace disagrees with the sorter: {checked:?} split at {split}"
    );
    let counters = sorter.counters();
    writeln!(
        out,
        "Pivot position: {split} ({} comparisons, {} swaps)",
        counters.comparisons, counters.swaps
    )?;
    writeln!(out)?;
    Ok(())
}

/// Prints the partition tree of a full quick sort of `data`, sorting it.
pub fn write_recursion_tree<W: Write>(
    out: &mut W,
    data: &mut [i64],
    strategy: PivotStrategy,
    sorter: &mut QuickSorter,
) -> Result<()> {
    writeln!(out, "RECURSION TREE ({strategy} pivot)")?;
    writeln!(out, "=====================")?;
    let len = data.len();
    tree_node(out, sorter, data, 0, len, 0, "", "", "leaf", strategy)?;
    writeln!(out, "Sorted: {data:?}")?;
    writeln!(out)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn tree_node<W: Write>(
    out: &mut W,
    sorter: &mut QuickSorter,
    data: &mut [i64],
    start: usize,
    end: usize,
    level: usize,
    prefix: &str,
    branch: &str,
    side: &str,
    strategy: PivotStrategy,
) -> Result<()> {
    let values = &data[start..end];
    if values.len() < 2 {
        writeln!(out, "{prefix}{branch}Level {level}: {values:?} ({side})")?;
        return Ok(());
    }

    let label = format!("{prefix}{branch}Level {level}: {values:?}");
    let split = sorter.partition(data, start, end - 1, strategy)?;
    writeln!(out, "{label} (pivot={})", data[split])?;

    let child_prefix = match branch {
        "" => prefix.to_owned(),
        "├─ " => format!("{prefix}│  "),
        _ => format!("{prefix}   "),
    };
    tree_node(
        out,
        sorter,
        data,
        start,
        split,
        level + 1,
        &child_prefix,
        "├─ ",
        "left",
        strategy,
    )?;
    tree_node(
        out,
        sorter,
        data,
        split + 1,
        end,
        level + 1,
        &child_prefix,
        "└─ ",
        "right",
        strategy,
    )
}
