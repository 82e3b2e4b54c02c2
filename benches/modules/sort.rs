use std::env;
use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{black_box, Criterion};

use forkjoin_sort::{stable, unstable, Sort};

use crate::modules::util;

/// Standard library stable sort as baseline.
struct StdStable;

impl Sort for StdStable {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Send,
    {
        arr.sort();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync,
    {
        arr.sort_by(compare);
    }
}

fn measure_comp_count<S: Sort, T: Ord + std::fmt::Debug + Send>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else if test_len < 1_000_000 {
        100
    } else {
        10
    };

    // The merge sort compares from several threads at once.
    let comp_count = AtomicU64::new(0);

    // Instrument via sort_by to ensure the type properties such as Copy of the type
    // that is being sorted doesn't change. And we get representative numbers.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count.fetch_add(1, Ordering::Relaxed);
            a.cmp(b)
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = comp_count.into_inner() / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

pub fn bench_fn<S: Sort, T: Ord + std::fmt::Debug + Send>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!(
            "{}-comp-{}-{}-{}",
            bench_name, transform_name, pattern_name, test_len
        );

        if util::should_run_benchmark(&name) {
            measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        }
    } else {
        util::bench_fn(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

pub fn bench<T: Ord + std::fmt::Debug + Send>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl:ty) => {{
            bench_fn::<$sort_impl, T>(
                c,
                test_len,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            );
        }};
    }

    bench_inst!(stable::merge_sort::SortImpl);
    bench_inst!(StdStable);

    // Quadratic, only meaningful for short inputs.
    if test_len <= 500 {
        bench_inst!(stable::insertion::SortImpl);
        bench_inst!(unstable::selection::SortImpl);
    }
}
