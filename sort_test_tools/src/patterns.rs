//! Input patterns for testing and benchmarking sorts. Limited to `i32` values, tests map them to
//! other types as needed.
//!
//! All random patterns draw from a `StdRng` seeded with one seed per process, so a failing run can
//! be repeated by setting `OVERRIDE_SEED` to the seed it printed.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

/// Ascending, except for one element that was moved to a random position.
pub fn one_misplaced(len: usize) -> Vec<i32> {
    //      :
    //   .: : .:
    // .::: :.::

    let mut v = ascending(len);
    if len < 2 {
        return v;
    }

    let mut rng = new_rng();
    let from = rng.gen_range(0..len);
    let to = rng.gen_range(0..len);

    let val = v.remove(from);
    v.insert(to, val);

    v
}

/// Ascending with `noise_percent` percent of the elements replaced by random values.
pub fn ascending_with_noise(len: usize, noise_percent: f64) -> Vec<i32> {
    //     . .:
    //   .:::::
    // .:::.:::

    let mut v = ascending(len);
    let mut rng = new_rng();
    let noise_len = ((len as f64) * (noise_percent / 100.0)).round() as usize;

    for _ in 0..noise_len {
        let idx = rng.gen_range(0..len);
        v[idx] = rng.gen_range(0..len as i32);
    }

    v
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| false)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| true)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let mut rng = new_rng();
    saw(len, saw_count, |_| rng.gen::<bool>())
}

/// Alternating ascending and descending runs of equal length.
pub fn zigzag(len: usize, run_count: usize) -> Vec<i32> {
    //   .::.  .::.
    // .::::::.::::

    saw(len, run_count, |i| i % 2 != 0)
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    vals[..len / 2].sort_unstable();
    vals[len / 2..].sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    if PROCESS_SEED.0 == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Relaxed);
}

pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Relaxed) {
        thread_rng().gen()
    } else {
        PROCESS_SEED.1
    }
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomOncePerProcess,
    ExternalOverride,
}

static PROCESS_SEED: Lazy<(SeedType, u64)> = Lazy::new(|| {
    if let Ok(seed) = env::var("OVERRIDE_SEED") {
        let seed = seed
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed}"));
        (SeedType::ExternalOverride, seed)
    } else {
        (SeedType::RandomOncePerProcess, thread_rng().gen())
    }
});

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values cut into `saw_count` chunks, each sorted descending if `is_descending(chunk_idx)`
/// and ascending otherwise.
fn saw(len: usize, saw_count: usize, mut is_descending: impl FnMut(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_size = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if is_descending(i) {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        } else {
            chunk.sort_unstable();
        }
    }

    vals
}
