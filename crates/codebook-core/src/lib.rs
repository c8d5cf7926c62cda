//! Reference implementations of classic algorithms and data structures.
//!
//! The stateful structures are [`UnionFind`] and the generic [`SegmentTree`];
//! [`kruskals`] builds a minimum spanning forest on top of the former. The
//! remaining modules are independent pure functions: number theory, ternary
//! search, KMP string matching and permutation generation.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod combinatorics;
pub mod error;
pub mod mst;
pub mod number_theory;
pub mod search;
pub mod segment_tree;
pub mod strings;
pub mod union_find;

pub use combinatorics::{LexicographicPermutations, lexicographic_permutations, next_permutation};
pub use error::CodebookError;
pub use mst::{SpanningForest, Weight, kruskals};
pub use number_theory::{
    Cycle, FactorConfig, binary_power, eratosthenes, extended_euclid, factor_integer,
    factor_integer_with, fermat_prime_test, fermat_prime_test_with_rng, floyd_cycle, gcd,
    inverse_mod, mod_pow, pollard_rho, primes_up_to,
};
pub use search::{Extremum, TernarySearchConfig, ternary_search};
pub use segment_tree::SegmentTree;
pub use strings::{Pattern, find_ignore_ascii_case, knuth_morris_pratt, knuth_morris_pratt_many};
pub use union_find::UnionFind;

/// Returns the current version of the codebook-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
