//! Post-operation invariant checkers for correctness validation.

use codebook_core::{SegmentTree, SpanningForest, UnionFind};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

/// Verifies that `forest` is a spanning forest of the graph `(n, edges)`:
/// every accepted edge exists in the input, no edge closes a cycle, the edge
/// count is `n - components` and the cost is the sum of the accepted weights.
pub fn check_forest_invariants(
    n: usize,
    edges: &[(usize, usize, u32)],
    forest: &SpanningForest<u32>,
) -> Result<(), String> {
    let mut graph: UnGraph<(), u32> = UnGraph::new_undirected();
    for _ in 0..n {
        graph.add_node(());
    }
    for &(u, v, w) in edges {
        if u >= n || v >= n {
            return Err(format!("input edge {u}-{v} has an endpoint outside 0..{n}"));
        }
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }
    let components = connected_components(&graph);

    let accepted = forest.edges();
    if accepted.len() != n - components {
        return Err(format!(
            "edge count mismatch: forest={}, expected n - components = {}",
            accepted.len(),
            n - components
        ));
    }

    let mut cycles = UnionFind::new(n);
    let mut cost = 0u32;
    for &(u, v, w) in &accepted {
        let present = edges
            .iter()
            .any(|&(a, b, weight)| weight == w && ((a, b) == (u, v) || (a, b) == (v, u)));
        if !present {
            return Err(format!("edge {u}-{v} ({w}) is not in the input"));
        }
        let merged = cycles.union(u, v).map_err(|e| e.to_string())?;
        if !merged {
            return Err(format!("edge {u}-{v} closes a cycle"));
        }
        cost = cost
            .checked_add(w)
            .ok_or_else(|| format!("summed cost overflows u32 at edge {u}-{v}"))?;
    }

    if cost != forest.cost() {
        return Err(format!(
            "cost mismatch: reported={}, summed={cost}",
            forest.cost()
        ));
    }
    Ok(())
}

/// Verifies that every query in `queries` agrees with a direct sum over
/// `values`.
pub fn check_segment_tree_sums<F>(
    tree: &SegmentTree<i64, F>,
    values: &[i64],
    queries: &[(usize, usize)],
) -> Result<(), String>
where
    F: Fn(&i64, &i64) -> i64,
{
    for &(l, r) in queries {
        let got = tree.range_query(l, r).map_err(|e| e.to_string())?;
        let Some(window) = values.get(l..=r) else {
            return Err(format!(
                "range [{l}, {r}] is outside the {} reference values",
                values.len()
            ));
        };
        let expected: i64 = window.iter().sum();
        if got != expected {
            return Err(format!("range [{l}, {r}]: tree={got}, naive={expected}"));
        }
    }
    Ok(())
}

/// Verifies that `uf` agrees with naive label propagation over `unions`.
pub fn check_union_find_against_labels(
    uf: &mut UnionFind,
    unions: &[(usize, usize)],
) -> Result<(), String> {
    let mut labels: Vec<usize> = (0..uf.len()).collect();
    for &(a, b) in unions {
        let (Some(&from), Some(&to)) = (labels.get(a), labels.get(b)) else {
            return Err(format!("union ({a}, {b}) is outside 0..{}", labels.len()));
        };
        for label in &mut labels {
            if *label == from {
                *label = to;
            }
        }
    }

    let mut sizes = vec![0usize; labels.len()];
    for &label in &labels {
        sizes[label] += 1;
    }

    let mut representatives: Vec<Option<usize>> = vec![None; labels.len()];
    for (i, &label) in labels.iter().enumerate() {
        let representative = *representatives[label].get_or_insert(i);
        if !uf.same_set(i, representative).map_err(|e| e.to_string())? {
            return Err(format!("element {i} is not joined with {representative}"));
        }
        let size = uf.size_set(i).map_err(|e| e.to_string())?;
        if size != sizes[label] {
            return Err(format!("element {i}: size={size}, expected {}", sizes[label]));
        }
    }

    let distinct = sizes.iter().filter(|&&s| s > 0).count();
    if uf.set_count() != distinct {
        return Err(format!(
            "set count mismatch: uf={}, expected {distinct}",
            uf.set_count()
        ));
    }
    Ok(())
}
