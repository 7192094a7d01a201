use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sort_lab::patterns::{self, Pattern};
use sort_lab::{
    ALL_STRATEGIES, Counters, PivotStrategy, SortAlgorithm, SortContext, algorithm_name,
    comparison_set, sort_i64_with_ctx,
};

use crate::config::ExperimentConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
    /// Work done by the last run.
    pub counters: Counters,
    /// Deepest partition nesting of the last run, for quick sort only.
    pub max_depth: Option<usize>,
}

impl Measurement {
    pub fn mean_secs(&self) -> f64 {
        self.mean.as_secs_f64()
    }
}

#[derive(Clone, Debug)]
pub struct SizeRow {
    pub size: usize,
    /// One entry per algorithm, in [`PatternResults::algorithms`] order.
    pub measurements: Vec<Measurement>,
}

#[derive(Clone, Debug)]
pub struct PatternResults {
    pub pattern: Pattern,
    pub algorithms: Vec<SortAlgorithm>,
    pub rows: Vec<SizeRow>,
}

#[derive(Clone, Debug)]
pub struct PivotResults {
    pub pattern: Pattern,
    pub size: usize,
    pub entries: Vec<(PivotStrategy, Measurement)>,
}

/// Times `runs` sorts of independent copies of `input`.
pub fn measure(
    algo: SortAlgorithm,
    input: &[i64],
    runs: usize,
    ctx: &mut SortContext,
) -> Result<Measurement> {
    if runs == 0 {
        bail!("runs must be greater than 0");
    }

    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut counters = Counters::default();

    for _ in 0..runs {
        let mut data = input.to_vec();
        let start = Instant::now();
        counters = sort_i64_with_ctx(algo, &mut data, ctx)
            .with_context(|| format!("{} failed", algorithm_name(algo)))?;
        let elapsed = start.elapsed();
        black_box(&data);

        if !data.is_sorted() {
            bail!(
                "{} produced unsorted output for {} elements",
                algorithm_name(algo),
                input.len()
            );
        }

        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);
    }

    let max_depth = matches!(algo, SortAlgorithm::QuickSort(_))
        .then(|| ctx.quick_sorter().depth_stats().max_depth);
    let mean = total.div_f64(runs as f64);

    debug!(
        "{} n={}: mean {:.6}s, {} comparisons, {} swaps",
        algorithm_name(algo),
        input.len(),
        mean.as_secs_f64(),
        counters.comparisons,
        counters.swaps,
    );

    Ok(Measurement {
        mean,
        min,
        max,
        counters,
        max_depth,
    })
}

/// Seed for the input of one (pattern, size) cell, independent of run order.
pub fn input_seed(base: u64, pattern: Pattern, size: usize) -> u64 {
    let tag = match pattern {
        Pattern::Random => 1_u64,
        Pattern::Sorted => 2,
        Pattern::ReverseSorted => 3,
        Pattern::NearlySorted => 4,
    };
    base ^ (tag << 56) ^ size as u64
}

fn generate_input(config: &ExperimentConfig, pattern: Pattern, size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(input_seed(config.seed, pattern, size));
    patterns::generate(pattern, size, config.max_value, &mut rng)
}

pub fn run_comparison(config: &ExperimentConfig) -> Result<Vec<PatternResults>> {
    let algorithms = comparison_set(config.pivot_strategy()?).to_vec();
    let mut ctx = SortContext::with_seed(config.seed);
    let mut results = Vec::new();

    for pattern in config.parsed_patterns()? {
        info!("measuring {pattern} inputs");
        let mut rows = Vec::with_capacity(config.sizes.len());
        for &size in &config.sizes {
            let input = generate_input(config, pattern, size);
            let measurements = algorithms
                .iter()
                .map(|&algo| measure(algo, &input, config.runs, &mut ctx))
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("{pattern} input of size {size}"))?;
            rows.push(SizeRow { size, measurements });
        }
        results.push(PatternResults {
            pattern,
            algorithms: algorithms.clone(),
            rows,
        });
    }

    Ok(results)
}

/// Quick sort with every pivot strategy on random, sorted and reverse sorted input.
pub fn run_pivot_analysis(config: &ExperimentConfig) -> Result<Vec<PivotResults>> {
    let size = config.pivot_size;
    let mut ctx = SortContext::with_seed(config.seed);
    let mut results = Vec::new();

    for pattern in [Pattern::Random, Pattern::Sorted, Pattern::ReverseSorted] {
        info!("comparing pivot strategies on {pattern} input of size {size}");
        let input = generate_input(config, pattern, size);
        let entries = ALL_STRATEGIES
            .iter()
            .map(|&strategy| {
                measure(
                    SortAlgorithm::QuickSort(strategy),
                    &input,
                    config.runs,
                    &mut ctx,
                )
                .map(|m| (strategy, m))
            })
            .collect::<Result<Vec<_>>>()?;
        results.push(PivotResults {
            pattern,
            size,
            entries,
        });
    }

    Ok(results)
}
