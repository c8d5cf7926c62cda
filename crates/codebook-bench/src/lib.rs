//! Input generators and benchmark utilities for `codebook-core`.
//!
//! Every generator is seeded, so benchmark inputs and invariant tests are
//! reproducible across runs.

pub mod correctness;
pub mod generator;

pub use generator::{
    GeneratorConfig, SizeTier, random_queries, random_unions, random_updates, random_values,
    random_weighted_graph,
};
