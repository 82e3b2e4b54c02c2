//! Input patterns for testing and benchmarking the sorts and partitions of this crate.
//!
//! All randomness flows from one per process seed, see [`random_init_seed`], so a failing run can
//! be reproduced from the printed seed.

use std::cmp::Reverse;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Random keys in `key_range`, each tagged with its original index.
///
/// Sorting by key only and then checking that equal keys have ascending tags verifies stability.
pub fn random_tagged(size: usize, key_range: Range<i32>) -> Vec<(i32, usize)> {
    random_uniform(size, key_range)
        .into_iter()
        .enumerate()
        .map(|(idx, key)| (key, idx))
        .collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(size, saw_count, |_| true)
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(size, saw_count, |_| false)
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let mut rng = new_rng();
    saw(size, saw_count, |_| rng.gen::<bool>())
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size);
    let (first_half, second_half) = vals.split_at_mut(size / 2);

    first_half.sort();
    second_half.sort_by_key(|&e| Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every call to [`random_init_seed`] return a new seed.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Returns the seed all patterns are derived from. Fixed for the lifetime of the process unless
/// [`disable_fixed_seed`] was called.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Random values cut into `saw_count` chunks, each sorted ascending if `is_ascending(chunk_idx)`
/// and descending otherwise.
fn saw(size: usize, saw_count: usize, mut is_ascending: impl FnMut(usize) -> bool) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let chunk_len = (size / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if is_ascending(i) {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| Reverse(e));
        }
    }

    vals
}
