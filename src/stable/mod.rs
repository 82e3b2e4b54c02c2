pub mod insertion;
pub mod merge_sort;
