//! Stable partitioning without a second buffer.

use crate::other::rotate::rotate;

pub trait Partition {
    fn name() -> String;

    fn partition_by<T, P>(arr: &mut [T], pred: P) -> usize
    where
        P: FnMut(&T) -> bool;
}

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl crate::other::partition::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition_by<T, P>(arr: &mut [T], pred: P) -> usize
            where
                P: FnMut(&T) -> bool,
            {
                stable_partition(arr, pred)
            }
        }
    };
}

partition_impl!("rust_rotate_stable_partition");

/// Re-arranges `v` so that all elements for which `pred` holds come first, followed by all others.
/// Both groups keep their original relative order.
///
/// Returns the number of elements for which `pred` holds, which is the index of the boundary.
///
/// Divide and conquer: both halves are partitioned on their own, then the false group of the
/// left half and the true group of the right half swap places with [`rotate`]. Takes
/// `O(n log n)` swaps, recursion depth `O(log n)` and no heap memory.
///
/// If `pred` panics, `v` is left as some permutation of its input.
pub fn stable_partition<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    partition_recursive(v, &mut pred)
}

fn partition_recursive<T, P>(v: &mut [T], pred: &mut P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let len = v.len();

    match len {
        0 => 0,
        1 => pred(&v[0]) as usize,
        _ => {
            let mid = len / 2;

            let left_true = partition_recursive(&mut v[..mid], pred);
            let right_true = mid + partition_recursive(&mut v[mid..], pred);

            // `v[left_true..mid]` is false, `v[mid..right_true]` is true.
            left_true + rotate(&mut v[left_true..right_true], mid - left_true)
        }
    }
}

/// Returns `true` if every element for which `pred` holds precedes every element for which it
/// doesn't.
pub fn is_partitioned<T, P>(v: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let mut iter = v.iter();
    iter.all(&mut pred) || !iter.any(pred)
}
