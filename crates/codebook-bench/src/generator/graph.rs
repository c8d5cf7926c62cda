//! Random weighted undirected graphs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::GeneratorConfig;

/// Generates `(u, v, w)` edges over vertices `0..config.size`.
///
/// When `config.connected` is set, the first `size - 1` edges form a path
/// through a shuffled vertex order, so the graph has a single component. The
/// remaining edges (up to `config.operations` in total) join uniformly random
/// endpoints and may repeat pairs or form self-loops.
pub fn random_weighted_graph(config: &GeneratorConfig) -> Vec<(usize, usize, u32)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.size;
    let max_weight = config.max_weight.max(1);
    let mut edges = Vec::with_capacity(config.operations.max(n));

    if n == 0 {
        return edges;
    }

    if config.connected {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        for pair in order.windows(2) {
            edges.push((pair[0], pair[1], rng.gen_range(0..max_weight)));
        }
    }

    while edges.len() < config.operations {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        edges.push((u, v, rng.gen_range(0..max_weight)));
    }
    edges
}
