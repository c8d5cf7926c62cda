//! Property-based tests for the stateful structures.
//!
//! Union-find is checked against naive label propagation, the segment tree
//! against a left-to-right fold with a non-commutative operation, and Kruskal
//! against `petgraph`'s minimum spanning tree.
#![allow(clippy::expect_used)]

use codebook_core::{SegmentTree, UnionFind, kruskals};
use petgraph::algo::{connected_components, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;

const MODULUS: u64 = 1_000_003;

/// An affine map `x -> a * x + b (mod MODULUS)`.
type Affine = (u64, u64);

/// Applies `f` first, then `g`. Associative but not commutative.
fn then(f: &Affine, g: &Affine) -> Affine {
    ((g.0 * f.0) % MODULUS, (g.0 * f.1 + g.1) % MODULUS)
}

const IDENTITY: Affine = (1, 0);

fn affine() -> impl Strategy<Value = Affine> {
    (0..MODULUS, 0..MODULUS)
}

fn union_ops() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..20).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..40)))
}

fn weighted_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u32..50), 0..30),
        )
    })
}

fn petgraph_of(n: usize, edges: &[(usize, usize, u32)]) -> UnGraph<(), u32> {
    let mut graph = UnGraph::new_undirected();
    for _ in 0..n {
        graph.add_node(());
    }
    for &(u, v, w) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }
    graph
}

proptest! {
    #[test]
    fn union_find_matches_naive_connectivity((n, ops) in union_ops()) {
        let mut uf = UnionFind::new(n);
        let mut labels: Vec<usize> = (0..n).collect();
        for &(a, b) in &ops {
            uf.union(a, b).expect("in range");
            let (from, to) = (labels[a], labels[b]);
            for label in &mut labels {
                if *label == from {
                    *label = to;
                }
            }
        }

        for i in 0..n {
            let root = uf.find(i).expect("in range");
            prop_assert_eq!(uf.find(root).expect("in range"), root);
            let expected_size = labels.iter().filter(|&&l| l == labels[i]).count();
            prop_assert_eq!(uf.size_set(i).expect("in range"), expected_size);
            for j in 0..n {
                prop_assert_eq!(uf.same_set(i, j).expect("in range"), labels[i] == labels[j]);
            }
        }

        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(uf.set_count(), distinct.len());
    }

    #[test]
    fn segment_tree_matches_ordered_fold(
        values in prop::collection::vec(affine(), 1..40),
        updates in prop::collection::vec((any::<prop::sample::Index>(), affine()), 0..10),
    ) {
        let mut tree = SegmentTree::new(&values, then, IDENTITY).expect("non-empty");
        let mut model = values;

        for (index, value) in updates {
            let i = index.index(model.len());
            tree.update(i, value).expect("in range");
            model[i] = value;
            prop_assert_eq!(tree.range_query(i, i).expect("in range"), value);
        }

        for l in 0..model.len() {
            for r in l..model.len() {
                let expected = model[l..=r].iter().fold(IDENTITY, |acc, f| then(&acc, f));
                prop_assert_eq!(tree.range_query(l, r).expect("in range"), expected);
            }
        }
    }

    #[test]
    fn kruskal_is_minimal_acyclic_and_spanning((n, edges) in weighted_graph()) {
        let forest = kruskals(&edges, n).expect("valid graph");
        let graph = petgraph_of(n, &edges);

        let reference_cost: u32 = min_spanning_tree(&graph)
            .filter_map(|element| {
                if let Element::Edge { weight, .. } = element {
                    Some(weight)
                } else {
                    None
                }
            })
            .sum();
        prop_assert_eq!(forest.cost(), reference_cost);

        let components = connected_components(&graph);
        prop_assert_eq!(forest.edge_count(), n - components);

        let mut check = UnionFind::new(n);
        for (u, v, _) in forest.edges() {
            prop_assert!(check.union(u, v).expect("in range"), "edge {}-{} closes a cycle", u, v);
        }
        prop_assert_eq!(check.set_count(), components);
    }
}
