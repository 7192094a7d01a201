use std::ops::AddAssign;

/// Element comparisons and exchanges performed by a sorter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Counters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
    }
}

/// Shape of the partition tree walked by the quick sort.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DepthStats {
    pub partitions: u64,
    /// The top-level partition has depth 1.
    pub max_depth: usize,
}

impl DepthStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub(crate) fn record(&mut self, depth: usize) {
        self.partitions += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_reset() {
        let mut total = Counters::default();
        total += Counters {
            comparisons: 3,
            swaps: 1,
        };
        total += Counters {
            comparisons: 4,
            swaps: 2,
        };
        assert_eq!(
            total,
            Counters {
                comparisons: 7,
                swaps: 3
            }
        );

        total.reset();
        assert_eq!(total, Counters::default());
    }

    #[test]
    fn depth_keeps_maximum() {
        let mut stats = DepthStats::default();
        for depth in [1, 2, 3, 2, 1] {
            stats.record(depth);
        }
        assert_eq!(stats.partitions, 5);
        assert_eq!(stats.max_depth, 3);
    }
}
