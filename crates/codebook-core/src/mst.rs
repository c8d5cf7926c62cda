//! Kruskal's minimum spanning tree over a weighted, undirected edge list.
//!
//! Edges are sorted by weight (stable, so equal weights keep their input
//! order) and accepted greedily whenever their endpoints lie in different
//! [`UnionFind`] sets. A disconnected input produces a minimum spanning
//! **forest**: one tree per connected component, with the cost covering only
//! the accepted edges. That is the intended result, not an error.

use std::collections::BTreeMap;

use num_traits::CheckedAdd;
use serde::{Deserialize, Serialize};

use crate::error::CodebookError;
use crate::union_find::UnionFind;

/// An edge weight whose running total can be checked for overflow.
///
/// Implemented for every primitive integer and float type. Integer totals
/// fail once they leave the type's range; float totals fail when finite
/// weights sum to an infinity.
pub trait Weight: Copy + PartialOrd + Default {
    /// Returns `self + other`, or `None` if the sum is not representable.
    fn checked_total(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn checked_total(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                fn checked_total(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.is_infinite() && self.is_finite() && other.is_finite() {
                        None
                    } else {
                        Some(sum)
                    }
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// A minimum spanning forest in adjacency-list form.
///
/// Every vertex `0..n` has an entry, empty when the vertex is isolated.
/// Each accepted edge `(u, v, w)` appears twice: as `(v, w)` under `u` and as
/// `(u, w)` under `v`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningForest<W> {
    adjacency: BTreeMap<usize, Vec<(usize, W)>>,
    cost: W,
}

impl<W: Copy> SpanningForest<W> {
    /// Returns the full adjacency mapping.
    pub fn adjacency(&self) -> &BTreeMap<usize, Vec<(usize, W)>> {
        &self.adjacency
    }

    /// Returns the `(neighbor, weight)` pairs adjacent to `vertex`, or `None`
    /// if the vertex is outside the graph.
    pub fn neighbors(&self, vertex: usize) -> Option<&[(usize, W)]> {
        self.adjacency.get(&vertex).map(Vec::as_slice)
    }

    /// Returns the sum of the weights of all accepted edges.
    pub fn cost(&self) -> W {
        self.cost
    }

    /// Returns the number of undirected edges in the forest.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns every accepted edge once, as `(u, v, w)` with `u < v`, ordered
    /// by `u` then by acceptance order.
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        self.adjacency
            .iter()
            .flat_map(|(&u, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(v, _)| u < *v)
                    .map(move |&(v, w)| (u, v, w))
            })
            .collect()
    }
}

/// Computes a minimum spanning forest of the graph on vertices `0..n`.
///
/// `edges` holds undirected edges `(u, v, w)`; listing an edge in both
/// directions is redundant but harmless. Self-loops are never accepted. The
/// input slice is not modified.
///
/// # Errors
///
/// - [`CodebookError::InvalidArgument`] if a weight does not compare equal to
///   itself (a floating-point NaN).
/// - [`CodebookError::IndexOutOfRange`] if an endpoint is `>= n`.
/// - [`CodebookError::InvalidArgument`] if the total cost of the accepted
///   edges overflows `W`.
///
/// # Examples
///
/// ```
/// use codebook_core::kruskals;
///
/// let edges = [(0, 1, 4), (1, 2, 1), (0, 2, 2)];
/// let forest = kruskals(&edges, 3)?;
/// assert_eq!(forest.cost(), 3);
/// assert_eq!(forest.edge_count(), 2);
/// # Ok::<(), codebook_core::CodebookError>(())
/// ```
pub fn kruskals<W>(
    edges: &[(usize, usize, W)],
    n: usize,
) -> Result<SpanningForest<W>, CodebookError>
where
    W: Weight,
{
    for &(u, v, w) in edges {
        if w.partial_cmp(&w).is_none() {
            return Err(CodebookError::invalid("edge weight is not comparable"));
        }
        CodebookError::check_index(u, n)?;
        CodebookError::check_index(v, n)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    let mut forest = UnionFind::new(n);
    let mut adjacency: BTreeMap<usize, Vec<(usize, W)>> =
        (0..n).map(|v| (v, Vec::new())).collect();
    let mut cost = W::default();

    for (u, v, w) in sorted {
        if !forest.union(u, v)? {
            continue;
        }
        adjacency.entry(u).or_default().push((v, w));
        adjacency.entry(v).or_default().push((u, w));
        cost = cost
            .checked_total(w)
            .ok_or_else(|| CodebookError::invalid("total cost overflows the weight type"))?;
    }

    Ok(SpanningForest { adjacency, cost })
}
