//! Input shapes for testing and benchmarking the sort engines. i32 only.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Fully random values.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Random values drawn uniformly from `range`. Narrow ranges produce
/// duplicate-heavy inputs.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zipf-distributed values, a handful of hot keys and a long tail.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Random values where the first `sorted_percent` of the input is already
/// sorted, mimicking an append-then-resort workload.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len].sort_unstable();
    v
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

/// Random values arranged into `saw_count` ascending runs.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saw(len, saw_count, |chunk| chunk.sort_unstable())
}

/// Random values arranged into `saw_count` descending runs.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saw(len, saw_count, |chunk| {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e))
    })
}

/// Random values arranged into `saw_count` runs of randomly picked direction.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = seeded_rng();
    saw(len, saw_count, |chunk| {
        if rng.gen::<bool>() {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    })
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let mid = len / 2;
    v[..mid].sort_unstable();
    v[mid..].sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    v
}

fn saw(len: usize, saw_count: usize, mut sort_run: impl FnMut(&mut [i32])) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let run_len = (len / saw_count.max(1)).max(1);
    for chunk in v.chunks_mut(run_len) {
        sort_run(chunk);
    }
    v
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every pattern call draw fresh random values instead of repeating the
/// per-process sequence. Benchmarks want this, tests do not.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed all patterns derive from. Fixed per process (or taken from the
/// `OVERRIDE_SEED` env var) so failures reproduce, unless
/// [`disable_fixed_seed`] was called.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
            Ok(seed) => u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"),
            Err(_) => thread_rng().gen(),
        })
    } else {
        thread_rng().gen()
    }
}

fn seeded_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
