mod algorithms;
mod counters;
mod error;
pub mod patterns;
mod pivot;

use std::fmt;
use std::str::FromStr;

pub use algorithms::heap_sort::heap_sort;
pub use algorithms::merge_sort::merge_sort;
pub use algorithms::quick_sort::QuickSorter;
pub use counters::{Counters, DepthStats};
pub use error::SortError;
pub use patterns::{ALL_PATTERNS, Pattern};
pub use pivot::{ALL_STRATEGIES, PivotStrategy, median_of_three};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    QuickSort(PivotStrategy),
    MergeSort,
    HeapSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 7] = [
    SortAlgorithm::QuickSort(PivotStrategy::First),
    SortAlgorithm::QuickSort(PivotStrategy::Last),
    SortAlgorithm::QuickSort(PivotStrategy::Middle),
    SortAlgorithm::QuickSort(PivotStrategy::Random),
    SortAlgorithm::QuickSort(PivotStrategy::MedianOfThree),
    SortAlgorithm::MergeSort,
    SortAlgorithm::HeapSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

/// Quick sort with the given pivot policy against the two baselines.
pub fn comparison_set(strategy: PivotStrategy) -> [SortAlgorithm; 3] {
    [
        SortAlgorithm::QuickSort(strategy),
        SortAlgorithm::MergeSort,
        SortAlgorithm::HeapSort,
    ]
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort(PivotStrategy::First) => "quick_sort_first",
        SortAlgorithm::QuickSort(PivotStrategy::Last) => "quick_sort_last",
        SortAlgorithm::QuickSort(PivotStrategy::Middle) => "quick_sort_middle",
        SortAlgorithm::QuickSort(PivotStrategy::Random) => "quick_sort_random",
        SortAlgorithm::QuickSort(PivotStrategy::MedianOfThree) => "quick_sort_median3",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::HeapSort => "heap_sort",
    }
}

pub fn display_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort(PivotStrategy::First) => "Quick Sort (first)",
        SortAlgorithm::QuickSort(PivotStrategy::Last) => "Quick Sort (last)",
        SortAlgorithm::QuickSort(PivotStrategy::Middle) => "Quick Sort (middle)",
        SortAlgorithm::QuickSort(PivotStrategy::Random) => "Quick Sort (random)",
        SortAlgorithm::QuickSort(PivotStrategy::MedianOfThree) => "Quick Sort (median3)",
        SortAlgorithm::MergeSort => "Merge Sort",
        SortAlgorithm::HeapSort => "Heap Sort",
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(display_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ALL_ALGORITHMS
            .into_iter()
            .find(|&algo| algorithm_name(algo) == normalized)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Reusable state for repeated sorts: merge scratch space and the quick sorter.
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    quick: QuickSorter,
    scratch: Vec<i64>,
}

impl SortContext {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            quick: QuickSorter::with_seed(seed),
            scratch: Vec::new(),
        }
    }

    pub fn quick_sorter(&self) -> &QuickSorter {
        &self.quick
    }
}

pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) -> Result<Counters, SortError> {
    let mut ctx = SortContext::default();
    sort_i64_with_ctx(algo, data, &mut ctx)
}

/// Sorts all of `data` and returns the work done by this call alone.
pub fn sort_i64_with_ctx(
    algo: SortAlgorithm,
    data: &mut [i64],
    ctx: &mut SortContext,
) -> Result<Counters, SortError> {
    match algo {
        SortAlgorithm::QuickSort(strategy) => {
            ctx.quick.reset();
            ctx.quick.sort_all(data, strategy)?;
            Ok(ctx.quick.counters())
        }
        SortAlgorithm::MergeSort => {
            let mut counters = Counters::default();
            merge_sort(data, &mut ctx.scratch, &mut counters);
            Ok(counters)
        }
        SortAlgorithm::HeapSort => {
            let mut counters = Counters::default();
            heap_sort(data, &mut counters);
            Ok(counters)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[i64]) {
        let mut ctx = SortContext::with_seed(0x5EED_2026);
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort_i64_with_ctx(algo, &mut actual, &mut ctx).unwrap();

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        let mut seen_display = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
            assert!(seen_display.insert(display_name(algo)));
        }
    }

    #[test]
    fn algorithm_names_parse_back() {
        for &algo in all_algorithms() {
            assert_eq!(algorithm_name(algo).parse::<SortAlgorithm>(), Ok(algo));
        }
        assert_eq!(
            "bogo_sort".parse::<SortAlgorithm>(),
            Err(SortError::UnknownAlgorithm("bogo_sort".to_owned()))
        );
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random::<i64>());
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random_range(0..16_i64) * 17);
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn every_pattern_sorts() {
        let mut rng = StdRng::seed_from_u64(4);
        for pattern in ALL_PATTERNS {
            let data = patterns::generate(pattern, 300, 1000, &mut rng);
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn quick_merge_and_heap_agree_on_random_permutation() {
        let mut rng = StdRng::seed_from_u64(100);
        let mut permutation = (1..=100).collect::<Vec<i64>>();
        permutation.shuffle(&mut rng);

        let mut ctx = SortContext::with_seed(1);
        let outputs = comparison_set(PivotStrategy::Random).map(|algo| {
            let mut data = permutation.clone();
            sort_i64_with_ctx(algo, &mut data, &mut ctx).unwrap();
            data
        });

        assert_eq!(outputs[0], (1..=100).collect::<Vec<i64>>());
        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[1], outputs[2]);
    }

    #[test]
    fn counters_are_per_call() {
        let mut ctx = SortContext::with_seed(0);
        for &algo in all_algorithms() {
            let mut first = (1..=50).rev().collect::<Vec<i64>>();
            let mut second = first.clone();
            let a = sort_i64_with_ctx(algo, &mut first, &mut ctx).unwrap();
            let b = sort_i64_with_ctx(algo, &mut second, &mut ctx).unwrap();
            assert!(a.comparisons > 0, "algorithm={}", algorithm_name(algo));
            if !matches!(algo, SortAlgorithm::QuickSort(PivotStrategy::Random)) {
                assert_eq!(a, b, "algorithm={}", algorithm_name(algo));
            }
        }
    }

    #[test]
    fn merge_sort_never_swaps() {
        let mut data = (1..=64).rev().collect::<Vec<i64>>();
        let counters = sort_i64(SortAlgorithm::MergeSort, &mut data).unwrap();
        assert_eq!(counters.swaps, 0);
        assert!(counters.comparisons > 0);
    }
}
