use std::fmt;
use std::str::FromStr;

use crate::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotStrategy {
    First,
    Last,
    Middle,
    Random,
    MedianOfThree,
}

pub const ALL_STRATEGIES: [PivotStrategy; 5] = [
    PivotStrategy::First,
    PivotStrategy::Last,
    PivotStrategy::Middle,
    PivotStrategy::Random,
    PivotStrategy::MedianOfThree,
];

impl PivotStrategy {
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Middle => "middle",
            Self::Random => "random",
            Self::MedianOfThree => "median3",
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PivotStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "middle" => Ok(Self::Middle),
            "random" => Ok(Self::Random),
            "median3" | "median-of-three" | "median_of_three" => Ok(Self::MedianOfThree),
            _ => Err(SortError::UnknownPivotStrategy(s.to_owned())),
        }
    }
}

#[inline]
pub fn middle_index(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// Picks the index of the median of `data[low]`, `data[mid]` and `data[high]`.
///
/// The checks run in a fixed order so ties resolve to `mid` first, then `low`,
/// then `high`. An all-equal triple therefore yields `mid`.
pub fn median_of_three<T: PartialOrd>(data: &[T], low: usize, high: usize) -> usize {
    let mid = middle_index(low, high);
    let (a, b, c) = (&data[low], &data[mid], &data[high]);

    if (a <= b && b <= c) || (c <= b && b <= a) {
        mid
    } else if (b <= a && a <= c) || (c <= a && a <= b) {
        low
    } else {
        high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_three_known_triples() {
        // (a, b, c) laid out at low = 0, mid = 1, high = 2.
        let cases = [
            ([5, 3, 8], 0),
            ([1, 1, 1], 1),
            ([1, 2, 3], 1),
            ([3, 2, 1], 1),
            ([2, 1, 3], 0),
            ([2, 3, 1], 0),
            ([1, 3, 2], 2),
            ([3, 1, 2], 2),
            ([2, 2, 1], 1),
            ([1, 2, 2], 1),
            ([2, 1, 2], 0),
        ];

        for (triple, expected) in cases {
            assert_eq!(median_of_three(&triple, 0, 2), expected, "triple={triple:?}");
        }
    }

    #[test]
    fn median_of_three_uses_range_midpoint() {
        let data = [100, 9, 7, 5, 8, 100, 100];
        // low = 1, high = 4, mid = 2: values (9, 7, 8) -> median 8 at high.
        assert_eq!(median_of_three(&data, 1, 4), 4);
        // low = 2, high = 4, mid = 3: values (7, 5, 8) -> median 7 at low.
        assert_eq!(median_of_three(&data, 2, 4), 2);
    }

    #[test]
    fn parse_labels_round_trip() {
        for strategy in ALL_STRATEGIES {
            assert_eq!(strategy.label().parse::<PivotStrategy>(), Ok(strategy));
        }
        assert_eq!(
            "Median-Of-Three".parse::<PivotStrategy>(),
            Ok(PivotStrategy::MedianOfThree)
        );
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert_eq!(
            "ninther".parse::<PivotStrategy>(),
            Err(SortError::UnknownPivotStrategy("ninther".to_owned()))
        );
    }
}
