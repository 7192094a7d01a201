use std::cmp::Ordering;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pivot::{self, PivotStrategy};
use crate::{Counters, DepthStats, SortError};

/// In-place Lomuto quick sort that counts the work it does.
///
/// Counters accumulate across calls until [`QuickSorter::reset`].
#[derive(Clone, Debug)]
pub struct QuickSorter {
    counters: Counters,
    depth: DepthStats,
    rng: StdRng,
    pending: Vec<(usize, usize, usize)>,
}

impl Default for QuickSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickSorter {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Seeds the generator behind [`PivotStrategy::Random`].
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            counters: Counters::default(),
            depth: DepthStats::default(),
            rng,
            pending: Vec::new(),
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn depth_stats(&self) -> DepthStats {
        self.depth
    }

    pub fn reset(&mut self) {
        self.counters.reset();
        self.depth.reset();
    }

    pub fn sort_all<T: PartialOrd>(
        &mut self,
        data: &mut [T],
        strategy: PivotStrategy,
    ) -> Result<(), SortError> {
        if data.len() < 2 {
            return Ok(());
        }
        self.sort(data, 0, data.len() - 1, strategy)
    }

    /// Sorts `data[low..=high]` in non-decreasing order.
    ///
    /// `low >= high` is a no-op. Ranges are taken from a work stack, left
    /// half first, which visits partitions in the same order as the plain
    /// recursive formulation without growing the call stack.
    pub fn sort<T: PartialOrd>(
        &mut self,
        data: &mut [T],
        low: usize,
        high: usize,
        strategy: PivotStrategy,
    ) -> Result<(), SortError> {
        if low >= high {
            return Ok(());
        }
        check_bounds(data, high)?;

        let before = self.counters;
        let mut pending = std::mem::take(&mut self.pending);
        pending.clear();
        pending.push((low, high, 1));

        let result = self.drain(data, strategy, &mut pending);
        self.pending = pending;
        result?;

        debug!(
            "quick sort ({strategy}) of [{low}, {high}]: {} comparisons, {} swaps, max depth {}",
            self.counters.comparisons - before.comparisons,
            self.counters.swaps - before.swaps,
            self.depth.max_depth,
        );
        Ok(())
    }

    fn drain<T: PartialOrd>(
        &mut self,
        data: &mut [T],
        strategy: PivotStrategy,
        pending: &mut Vec<(usize, usize, usize)>,
    ) -> Result<(), SortError> {
        while let Some((low, high, depth)) = pending.pop() {
            self.depth.record(depth);
            let split = self.partition_range(data, low, high, strategy)?;

            if split + 1 < high {
                pending.push((split + 1, high, depth + 1));
            }
            if split > low + 1 {
                pending.push((low, split - 1, depth + 1));
            }
        }
        Ok(())
    }

    /// Runs one Lomuto partition step over `data[low..=high]` and returns the
    /// final index of the pivot.
    pub fn partition<T: PartialOrd>(
        &mut self,
        data: &mut [T],
        low: usize,
        high: usize,
        strategy: PivotStrategy,
    ) -> Result<usize, SortError> {
        check_bounds(data, high)?;
        if low > high {
            return Ok(low);
        }
        self.depth.record(1);
        self.partition_range(data, low, high, strategy)
    }

    fn partition_range<T: PartialOrd>(
        &mut self,
        data: &mut [T],
        low: usize,
        high: usize,
        strategy: PivotStrategy,
    ) -> Result<usize, SortError> {
        let pivot_index = self.select_pivot(data, low, high, strategy);
        if pivot_index != high {
            data.swap(pivot_index, high);
            self.counters.swaps += 1;
        }

        // `store` is the first slot past the `<= pivot` zone.
        let mut store = low;
        for j in low..high {
            self.counters.comparisons += 1;
            let not_greater = match data[j].partial_cmp(&data[high]) {
                Some(ord) => ord != Ordering::Greater,
                None => return Err(SortError::Incomparable { index: j }),
            };
            if not_greater {
                if store != j {
                    data.swap(store, j);
                    self.counters.swaps += 1;
                }
                store += 1;
            }
        }

        data.swap(store, high);
        self.counters.swaps += 1;
        Ok(store)
    }

    fn select_pivot<T: PartialOrd>(
        &mut self,
        data: &[T],
        low: usize,
        high: usize,
        strategy: PivotStrategy,
    ) -> usize {
        match strategy {
            PivotStrategy::First => low,
            PivotStrategy::Last => high,
            PivotStrategy::Middle => pivot::middle_index(low, high),
            PivotStrategy::Random => self.rng.random_range(low..=high),
            PivotStrategy::MedianOfThree => pivot::median_of_three(data, low, high),
        }
    }
}

#[inline]
fn check_bounds<T>(data: &[T], high: usize) -> Result<(), SortError> {
    if high >= data.len() {
        return Err(SortError::RangeOutOfBounds {
            high,
            len: data.len(),
        });
    }
    Ok(())
}
