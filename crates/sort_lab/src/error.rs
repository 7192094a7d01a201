use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("unknown pivot strategy `{0}` (expected first, last, middle, random or median3)")]
    UnknownPivotStrategy(String),
    #[error("unknown sort algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("unknown input pattern `{0}`")]
    UnknownPattern(String),
    #[error("range end {high} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { high: usize, len: usize },
    /// An element at `index` could not be ordered against the pivot.
    #[error("element at index {index} is not comparable with the pivot")]
    Incomparable { index: usize },
}
