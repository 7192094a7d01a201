use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    Random,
    Sorted,
    ReverseSorted,
    /// Ascending run followed by a tail of `size / 10` random values.
    NearlySorted,
}

pub const ALL_PATTERNS: [Pattern; 4] = [
    Pattern::Random,
    Pattern::Sorted,
    Pattern::ReverseSorted,
    Pattern::NearlySorted,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::ReverseSorted => "reverse_sorted",
            Self::NearlySorted => "nearly_sorted",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Sorted => "Sorted",
            Self::ReverseSorted => "Reverse Sorted",
            Self::NearlySorted => "Nearly Sorted",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pattern {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ALL_PATTERNS
            .into_iter()
            .find(|pattern| pattern.label() == normalized)
            .ok_or_else(|| SortError::UnknownPattern(s.to_owned()))
    }
}

/// Builds an input of `size` elements (plus the tail for
/// [`Pattern::NearlySorted`]). Random values are drawn from `1..=max_value`.
pub fn generate<R: Rng + ?Sized>(
    pattern: Pattern,
    size: usize,
    max_value: i64,
    rng: &mut R,
) -> Vec<i64> {
    let max_value = max_value.max(1);
    match pattern {
        Pattern::Random => (0..size).map(|_| rng.random_range(1..=max_value)).collect(),
        Pattern::Sorted => (1..=size as i64).collect(),
        Pattern::ReverseSorted => (1..=size as i64).rev().collect(),
        Pattern::NearlySorted => {
            let tail = size / 10;
            let mut data = Vec::with_capacity(size + tail);
            data.extend(1..=size as i64);
            data.extend((0..tail).map(|_| rng.random_range(1..=max_value)));
            data
        }
    }
}
