//! In-place sorting and partitioning over mutable slices.
//!
//! The centerpiece is [`stable::merge_sort`], a fork-join merge sort that hands the left half of
//! every window above a size threshold to an [`executor::Executor`] while the current thread
//! sorts the right half. [`other::partition::stable_partition`] and [`other::rotate::rotate`]
//! share its divide and conquer shape without allocating.

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Send;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Send,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Send,
                F: Fn(&T, &T) -> std::cmp::Ordering + Sync,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod executor;
pub mod other;
pub mod patterns;
pub mod stable;
pub mod unstable;

pub use error::ConfigError;
pub use executor::{Executor, Rayon, Sequential};
pub use stable::merge_sort::{MergeSortConfig, MergeSorter, SortStats, SortStatsSnapshot, Worker};
