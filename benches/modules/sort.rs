use std::env;

use criterion::{black_box, Criterion};

use sort_test_tools::Sort;

use smoothsort_comp::unstable::{
    rust_heapsort, rust_heapsort_floyd, rust_smoothsort, rust_smoothsort_fib,
    rust_smoothsort_pow2, rust_std,
};

use crate::modules::util;

/// Fewer repetitions the longer the input, every run draws a fresh pattern.
fn comp_runs(test_len: usize) -> u64 {
    match test_len {
        0..=20 => 50_000,
        21..=9_999 => 2_000,
        10_000..=99_999 => 200,
        _ => 10,
    }
}

/// Prints the mean number of comparisons and how it relates to `n * log2(n)`. Smoothsort should
/// stay near `n` on ascending and all equal input, and near `n * log2(n)` or above on random and
/// descending input. Moves are not counted, every sort here only ever swaps.
fn report_comp_count<S: Sort, T: Ord>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let runs = comp_runs(test_len);
    let mut comps = 0u64;

    for _ in 0..runs {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comps += 1;
            a.cmp(b)
        });
    }

    let mean = comps / runs;
    let n_log_n = (test_len as f64) * (test_len.max(2) as f64).log2();
    if n_log_n > 0.0 {
        println!(
            "{name}: mean comparisons: {mean} ({:.3} n log2 n)",
            mean as f64 / n_log_n
        );
    } else {
        println!("{name}: mean comparisons: {mean}");
    }
}

fn bench_sort<S: Sort, T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let sort_name = S::name();

    if env::var("MEASURE_COMP").is_err() {
        util::bench_fn(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &sort_name,
            S::sort,
        );
        return;
    }

    let name = format!("{sort_name}-comp-{transform_name}-{pattern_name}-{test_len}");
    if util::should_run_benchmark(&name) {
        report_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
    }
}

pub fn bench<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_sorts {
        ($($sort_module:ident),* $(,)?) => {
            $(
                bench_sort::<$sort_module::SortImpl, T>(
                    c,
                    test_len,
                    transform_name,
                    transform,
                    pattern_name,
                    pattern_provider,
                );
            )*
        };
    }

    bench_sorts!(
        rust_smoothsort,
        rust_smoothsort_fib,
        rust_smoothsort_pow2,
        rust_heapsort,
        rust_heapsort_floyd,
        rust_std,
    );
}
