//! Seeded generators for graphs, value arrays and operation sequences.

pub mod graph;
pub mod sequences;

pub use graph::random_weighted_graph;
pub use sequences::{random_queries, random_unions, random_updates, random_values};

/// Configuration shared by all generators.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices, array elements or union-find elements.
    pub size: usize,
    /// Number of edges, updates or union operations.
    pub operations: usize,
    /// Exclusive upper bound on edge weights.
    pub max_weight: u32,
    /// Whether generated graphs contain a spanning path, making them connected.
    pub connected: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 elements, 400 operations.
    Small,
    /// 2 000 elements, 10 000 operations.
    Medium,
    /// 20 000 elements, 100 000 operations.
    Large,
    /// 200 000 elements, 1 000 000 operations.
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (size, operations) = match self {
            SizeTier::Small => (100, 400),
            SizeTier::Medium => (2_000, 10_000),
            SizeTier::Large => (20_000, 100_000),
            SizeTier::XLarge => (200_000, 1_000_000),
        };
        GeneratorConfig {
            seed,
            size,
            operations,
            max_weight: 1_000,
            connected: true,
        }
    }

    /// Short label used in benchmark IDs.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
            SizeTier::XLarge => "XL",
        }
    }
}
