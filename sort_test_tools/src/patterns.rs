use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every generator in one process. Set `OVERRIDE_SEED` to reproduce a failure.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly distributed over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Few very common values and a long tail, `exponent` around 1.0 is typical.
#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // Zipf needs at least one element to draw from.
    let Ok(dist) = ZipfDistribution::new(len.max(1), exponent) else {
        panic!("invalid zipf exponent {exponent}");
    };

    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_binary(len: usize) -> Vec<i32> {
    random_uniform(len, 0..2)
}

/// Sorted input with duplicates, suitable for the searchers that need ordering.
pub fn random_sorted(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut v = random_uniform(len, range);
    v.sort_unstable();
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

/// Alternating ascending and descending runs of random length.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let mut rng = new_rng();

    let mut start = 0;
    let mut ascending = true;
    while start < len {
        let max_chunk = (len / saw_count.max(1)).max(1);
        let chunk_len = rng.gen_range(1..=max_chunk).min(len - start);
        let chunk = &mut v[start..start + chunk_len];
        if ascending {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }

        ascending = !ascending;
        start += chunk_len;
    }

    v
}

/// Ascending first half followed by the mirrored second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let mid = len / 2;
    v[..mid].sort_unstable();
    v[mid..].sort_unstable_by(|a, b| b.cmp(a));
    v
}
