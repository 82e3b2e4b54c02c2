use std::env;

use criterion::Criterion;

pub mod partition;
pub mod sort;
pub mod util;

pub fn bench_len_type_pattern_combo<T: Ord + std::fmt::Debug + Send>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if let Ok(env_val) = env::var("BENCH_OTHER") {
        match env_val.as_str() {
            "partition" => {
                partition::bench(
                    c,
                    test_len,
                    transform_name,
                    transform,
                    pattern_name,
                    pattern_provider,
                );
            }
            _ => panic!("Unknown BENCH_OTHER value: '{}'.", env_val),
        }
    } else {
        sort::bench(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
        );
    }
}
