//! Random arrays and operation sequences for the stateful structures.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::GeneratorConfig;

/// `config.size` values drawn uniformly from `-1000..1000`.
pub fn random_values(config: &GeneratorConfig) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.size).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

/// `config.operations` random `(i, j)` pairs for union-find merges.
pub fn random_unions(config: &GeneratorConfig) -> Vec<(usize, usize)> {
    if config.size == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(config.seed ^ 0x5eed);
    (0..config.operations)
        .map(|_| (rng.gen_range(0..config.size), rng.gen_range(0..config.size)))
        .collect()
}

/// `config.operations` random point updates `(index, value)` with
/// `index < config.size` and `value` drawn from `-1000..1000`.
pub fn random_updates(config: &GeneratorConfig) -> Vec<(usize, i64)> {
    if config.size == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(config.seed ^ 0xabba);
    (0..config.operations)
        .map(|_| (rng.gen_range(0..config.size), rng.gen_range(-1_000..1_000)))
        .collect()
}

/// `config.operations` random closed ranges `(left, right)` with
/// `left <= right < config.size`.
pub fn random_queries(config: &GeneratorConfig) -> Vec<(usize, usize)> {
    if config.size == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(config.seed ^ 0xc0ffee);
    (0..config.operations)
        .map(|_| {
            let a = rng.gen_range(0..config.size);
            let b = rng.gen_range(0..config.size);
            (a.min(b), a.max(b))
        })
        .collect()
}
