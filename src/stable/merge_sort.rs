//! Fork-join merge sort.
//!
//! Every window longer than the configured threshold is split in the middle. The left half is
//! handed to the [`Executor`] together with a fresh [`Worker`], the calling thread keeps its own
//! worker and sorts the right half. After the join both halves are merged through the worker's
//! scratch buffer. Windows of at most `threshold` elements are insertion sorted.
//!
//! Configuration (threshold, comparator, executor) lives in [`MergeSorter`] and is shared by
//! reference across all tasks of one sort. Working state (cursors, scratch buffer) lives in
//! [`Worker`] and is never shared: a task that is forked gets a worker of its own.

use std::cmp::Ordering;
use std::env;
use std::mem;
use std::ptr;
use std::sync::atomic::{self, AtomicUsize};

use crate::error::ConfigError;
use crate::executor::{Executor, Rayon};
use crate::stable::insertion::insertion_sort;

sort_impl!("rust_forkjoin_merge_stable");

/// Windows of at most this many elements are insertion sorted by default.
pub const DEFAULT_THRESHOLD: usize = 25;

/// Environment variable consulted by [`MergeSortConfig::from_env`].
pub const THRESHOLD_ENV_VAR: &str = "FORKJOIN_SORT_THRESHOLD";

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Send,
{
    MergeSorter::new(|a: &T, b: &T| a.lt(b)).sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    MergeSorter::new(move |a: &T, b: &T| compare(a, b) == Ordering::Less).sort(v);
}

/// Sorts `v` with a custom insertion sort threshold.
pub fn sort_by_threshold<T, F>(v: &mut [T], threshold: usize, is_less: F) -> Result<(), ConfigError>
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    let config = MergeSortConfig::new(threshold)?;
    MergeSorter::with_config(config, is_less).sort(v);

    Ok(())
}

// --- Configuration ---

/// Validated merge sort settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSortConfig {
    threshold: usize,
}

impl MergeSortConfig {
    /// Fails with [`ConfigError::ZeroThreshold`] if `threshold` is zero.
    pub fn new(threshold: usize) -> Result<Self, ConfigError> {
        if threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        Ok(Self { threshold })
    }

    /// Reads the threshold from `FORKJOIN_SORT_THRESHOLD`, falling back to the default if the
    /// variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(THRESHOLD_ENV_VAR) {
            Ok(val) => {
                let threshold = val
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidThreshold { value: val.clone() })?;
                Self::new(threshold)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Largest window that is insertion sorted instead of split.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for MergeSortConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

// --- Instrumentation ---

/// Counts what a [`MergeSorter`] did, across all of its tasks.
#[derive(Debug, Default)]
pub struct SortStats {
    forks: AtomicUsize,
    insertion_fallbacks: AtomicUsize,
    merges: AtomicUsize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStatsSnapshot {
    /// Windows that were split and had their left half forked.
    pub forks: usize,
    /// Windows of at most `threshold` elements handed to insertion sort.
    pub insertion_fallbacks: usize,
    /// Completed merges.
    pub merges: usize,
}

impl SortStats {
    pub fn snapshot(&self) -> SortStatsSnapshot {
        SortStatsSnapshot {
            forks: self.forks.load(atomic::Ordering::Relaxed),
            insertion_fallbacks: self.insertion_fallbacks.load(atomic::Ordering::Relaxed),
            merges: self.merges.load(atomic::Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.forks.store(0, atomic::Ordering::Relaxed);
        self.insertion_fallbacks.store(0, atomic::Ordering::Relaxed);
        self.merges.store(0, atomic::Ordering::Relaxed);
    }

    fn record(counter: &AtomicUsize) {
        counter.fetch_add(1, atomic::Ordering::Relaxed);
    }
}

// --- Sorter ---

/// Immutable sort configuration: threshold, comparator and executor.
///
/// A sorter can be reused for any number of sorts. `sort` takes `&self`, the per task state is
/// created inside each call.
pub struct MergeSorter<F, E = Rayon> {
    config: MergeSortConfig,
    is_less: F,
    executor: E,
    stats: SortStats,
}

impl<F> MergeSorter<F, Rayon> {
    pub fn new(is_less: F) -> Self {
        Self::with_config(MergeSortConfig::default(), is_less)
    }

    pub fn with_config(config: MergeSortConfig, is_less: F) -> Self {
        Self {
            config,
            is_less,
            executor: Rayon,
            stats: SortStats::default(),
        }
    }
}

impl<F, E> MergeSorter<F, E> {
    /// Replaces the executor that runs the forked halves.
    pub fn executor<E2: Executor>(self, executor: E2) -> MergeSorter<F, E2> {
        MergeSorter {
            config: self.config,
            is_less: self.is_less,
            executor,
            stats: self.stats,
        }
    }

    pub fn config(&self) -> MergeSortConfig {
        self.config
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    /// Sorts `v` in place, stable.
    ///
    /// If `is_less` panics, the panic reaches the caller after every task of this sort finished
    /// and `v` holds every original element exactly once, in unspecified order.
    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
        E: Executor,
    {
        if mem::size_of::<T>() == 0 {
            // Sorting has no meaningful behavior on zero-sized types. Do nothing.
            return;
        }

        let mut worker = Worker::new();
        self.sort_window(v, &mut worker);
    }

    #[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
    fn sort_window<T>(&self, v: &mut [T], worker: &mut Worker<T>)
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
        E: Executor,
    {
        let len = v.len();

        if len <= self.config.threshold {
            SortStats::record(&self.stats.insertion_fallbacks);
            insertion_sort(v, &mut &self.is_less);
            return;
        }

        let mid = len / 2;
        let (left, right) = v.split_at_mut(mid);
        let mut forked = worker.clone();

        SortStats::record(&self.stats.forks);
        self.executor.join(
            || self.sort_window(right, worker),
            move || self.sort_window(left, &mut forked),
        );

        // Both halves are sorted now, the join above is the only barrier.
        worker.merge(v, mid, &self.is_less);
        SortStats::record(&self.stats.merges);
    }
}

// --- Worker ---

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cursors {
    left: usize,
    right: usize,
    middle: usize,
    len: usize,
}

impl Cursors {
    fn init(&mut self, mid: usize, len: usize) {
        self.left = 0;
        self.right = mid;
        self.middle = mid;
        self.len = len;
    }

    #[inline]
    fn is_left_exhausted(&self) -> bool {
        self.left >= self.middle
    }

    #[inline]
    fn is_right_exhausted(&self) -> bool {
        self.right >= self.len
    }
}

/// Per task merge state: cursors into the active window and the scratch buffer.
///
/// Cloning a worker yields a fresh one. Cursors and buffer are scratch state of the task that
/// owns them and are never carried over.
#[derive(Debug)]
pub struct Worker<T> {
    cursors: Cursors,
    buffer: Vec<T>,
}

impl<T> Worker<T> {
    pub fn new() -> Self {
        Self {
            cursors: Cursors::default(),
            buffer: Vec::new(),
        }
    }

    /// Number of elements currently staged, zero outside of a merge.
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn buffer_capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Merges the sorted runs `v[..mid]` and `v[mid..]` into one sorted run.
    ///
    /// On equal elements the left run wins, which makes the merge stable. Elements are staged in
    /// the scratch buffer in merged order and moved back over `v` at the end. `v` is not written
    /// before that point, so a panic in `is_less` leaves it as it was.
    #[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
    pub fn merge<F>(&mut self, v: &mut [T], mid: usize, is_less: &F)
    where
        F: Fn(&T, &T) -> bool,
    {
        let len = v.len();
        assert!(mid <= len, "mid {mid} out of bounds for window of length {len}");

        let Worker { cursors, buffer } = self;
        cursors.init(mid, len);

        debug_assert!(buffer.is_empty());
        buffer.reserve(len);

        let mut scratch = ClearOnDrop { buffer };

        {
            let src: &[T] = v;

            // One comparison per staged element, so every step advances a cursor even if
            // `is_less` is not a strict weak order.
            while !(cursors.is_left_exhausted() && cursors.is_right_exhausted()) {
                // The right head must be strictly less to be taken first.
                let take_left = if cursors.is_left_exhausted() {
                    false
                } else if cursors.is_right_exhausted() {
                    true
                } else {
                    !is_less(&src[cursors.right], &src[cursors.left])
                };

                if take_left {
                    // SAFETY: `left < middle <= len`, and `v` outlives the staged copy.
                    unsafe { scratch.stage(&src[cursors.left]) };
                    cursors.left += 1;
                } else {
                    // SAFETY: `right < len`, and `v` outlives the staged copy.
                    unsafe { scratch.stage(&src[cursors.right]) };
                    cursors.right += 1;
                }
            }
        }

        debug_assert_eq!(scratch.buffer.len(), len);

        // SAFETY: The buffer holds a bitwise copy of every element of `v` exactly once, in merged
        // order. Copying it over `v` without dropping the old values and then forgetting the
        // buffer contents keeps every element owned exactly once.
        unsafe {
            ptr::copy_nonoverlapping(scratch.buffer.as_ptr(), v.as_mut_ptr(), len);
        }
        // `scratch` gets dropped and empties the buffer.
    }
}

impl<T> Default for Worker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Worker<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// Holds the scratch buffer during a merge. Staged elements are bitwise copies whose originals
/// still live in the window, so when dropped the buffer is emptied without running destructors.
struct ClearOnDrop<'a, T> {
    buffer: &'a mut Vec<T>,
}

impl<T> ClearOnDrop<'_, T> {
    /// Appends a bitwise copy of `elem`.
    ///
    /// # Safety
    ///
    /// The buffer must have spare capacity, and the original must stay alive and untouched until
    /// the guard is dropped or the staged copy was moved back.
    #[inline]
    unsafe fn stage(&mut self, elem: &T) {
        debug_assert!(self.buffer.len() < self.buffer.capacity());

        // SAFETY: see the function contract. With spare capacity `push` does not reallocate and
        // cannot panic.
        unsafe {
            self.buffer.push(ptr::read(elem));
        }
    }
}

impl<T> Drop for ClearOnDrop<'_, T> {
    fn drop(&mut self) {
        // SAFETY: Shrinking the length is always sound. The elements past the new length are
        // duplicates and must not be dropped.
        unsafe {
            self.buffer.set_len(0);
        }
    }
}
