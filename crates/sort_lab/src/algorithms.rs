pub mod heap_sort;
pub mod merge_sort;
pub mod quick_sort;
