//! Input generators for the heap sorts.
//!
//! Smoothsort is adaptive, so besides random data the interesting shapes are the ones that are
//! already (close to) sorted, reverse sorted, or made of few distinct values.
//!
//! All random patterns draw from one seed per process. It is printed by the test harness and can
//! be fixed with the `OVERRIDE_SEED` environment variable to reproduce a failure.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

static PROCESS_SEED: OnceCell<u64> = OnceCell::new();
static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

/// The seed every random pattern of this process is derived from.
pub fn random_init_seed() -> u64 {
    *PROCESS_SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => u64::from_str(&seed).unwrap(),
        Err(_) => thread_rng().gen(),
    })
}

/// Makes every call of a random pattern yield new values. Benchmarks want that, tests don't.
pub fn use_random_seed_each_time() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("OVERRIDE_SEED and use_random_seed_each_time exclude each other.");
    }

    FRESH_SEED_PER_CALL.store(true, Ordering::Relaxed);
}

fn rng() -> StdRng {
    if FRESH_SEED_PER_CALL.load(Ordering::Relaxed) {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(random_init_seed())
    }
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Random values drawn from `range`, few distinct values give many equal keys.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let dist: rand::distributions::Uniform<i32> = range.into();
    rng().sample_iter(dist).take(len).collect()
}

/// Floats over many magnitudes and both signs, with repeated values, signed zeros and
/// infinities. Never NaN, so `partial_cmp` is a total order on the output.
pub fn random_f64(len: usize) -> Vec<f64> {
    let mut rng = rng();

    (0..len)
        .map(|_| match rng.gen_range(0..64) {
            0 => 0.0,
            1 => -0.0,
            2 => f64::INFINITY,
            3 => f64::NEG_INFINITY,
            4 => 1.5,
            _ => rng.gen_range(-1.0f64..1.0) * 2f64.powi(rng.gen_range(-40..40)),
        })
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Ascending with `swap_percent` of the positions swapped with a random partner.
pub fn nearly_ascending(len: usize, swap_percent: f64) -> Vec<i32> {
    let mut v = ascending(len);
    if len < 2 {
        return v;
    }

    let mut rng = rng();
    let swaps = ((len as f64) * (swap_percent / 100.0)).round() as usize;
    for _ in 0..swaps {
        v.swap(rng.gen_range(0..len), rng.gen_range(0..len));
    }

    v
}

/// Random values cut into runs of `run_len`, sorted alternately ascending and descending.
pub fn saws(len: usize, run_len: usize) -> Vec<i32> {
    let mut v = random(len);

    for (i, run) in v.chunks_mut(run_len.max(1)).enumerate() {
        if i % 2 == 0 {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}
