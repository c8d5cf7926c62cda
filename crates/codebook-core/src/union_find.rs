//! Union-Find (disjoint set forest) with union-by-rank, path-halving and set
//! sizes.
//!
//! Path compression uses iterative path-halving: during [`UnionFind::find`] each
//! visited node is pointed directly at its grandparent, halving the path length
//! without needing a second pass or recursion. Union-by-rank keeps trees shallow;
//! when ranks are equal the root of the **second** argument's set becomes the
//! parent and its rank grows by one.
//!
//! Set sizes are only maintained on roots. The size slot of an absorbed root is
//! stale after a merge, so sizes are always read through the root returned by
//! `find` (see [`UnionFind::size_set`]).

use crate::error::CodebookError;

/// A union-find (disjoint set) structure with path-halving and union-by-rank.
///
/// Each element is identified by a `usize` ordinal in `[0, n)` where `n` is
/// the number of elements supplied at construction time. Elements are
/// never added or removed after construction.
///
/// # Examples
///
/// ```
/// use codebook_core::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// uf.union(0, 1)?;
/// uf.union(1, 2)?;
/// assert!(uf.same_set(0, 2)?);
/// assert_eq!(uf.size_set(0)?, 3);
/// assert!(!uf.same_set(0, 3)?);
/// # Ok::<(), codebook_core::CodebookError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parents: Vec<usize>,
    ranks: Vec<u8>,
    sizes: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// Creates a new `UnionFind` with `size` singleton sets.
    ///
    /// Each element `i` is initially its own representative (`parents[i] == i`,
    /// `ranks[i] == 0`, `sizes[i] == 1`).
    pub fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
            ranks: vec![0u8; size],
            sizes: vec![1; size],
            sets: size,
        }
    }

    /// Returns the representative of the set containing `i`.
    ///
    /// Uses iterative path-halving: each node visited during the traversal is
    /// linked directly to its grandparent. This achieves the inverse-Ackermann
    /// amortized bound without recursion.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::IndexOutOfRange`] if `i >= self.len()`.
    pub fn find(&mut self, i: usize) -> Result<usize, CodebookError> {
        CodebookError::check_index(i, self.len())?;
        Ok(self.find_root(i))
    }

    fn find_root(&mut self, mut x: usize) -> usize {
        while self.parents[x] != x {
            let grandparent = self.parents[self.parents[x]];
            self.parents[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `i` and `j`.
    ///
    /// Returns `Ok(true)` if two distinct sets were merged and `Ok(false)` if
    /// `i` and `j` already shared a set (in which case nothing changes).
    ///
    /// The lower-rank root is attached under the higher-rank root. On a rank
    /// tie the root of `j`'s set becomes the parent and its rank is
    /// incremented.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::IndexOutOfRange`] if either index is out of
    /// bounds. No mutation happens in that case.
    pub fn union(&mut self, i: usize, j: usize) -> Result<bool, CodebookError> {
        CodebookError::check_index(i, self.len())?;
        CodebookError::check_index(j, self.len())?;

        let x = self.find_root(i);
        let y = self.find_root(j);

        if x == y {
            return Ok(false);
        }

        let (child, root) = match self.ranks[x].cmp(&self.ranks[y]) {
            std::cmp::Ordering::Less => (x, y),
            std::cmp::Ordering::Greater => (y, x),
            std::cmp::Ordering::Equal => {
                self.ranks[y] = self.ranks[y].saturating_add(1);
                (x, y)
            }
        };

        self.parents[child] = root;
        self.sizes[root] += self.sizes[child];
        self.sets -= 1;
        Ok(true)
    }

    /// Returns `true` if `i` and `j` belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn same_set(&mut self, i: usize, j: usize) -> Result<bool, CodebookError> {
        Ok(self.find(i)? == self.find(j)?)
    }

    /// Returns the number of elements in the set containing `i`.
    ///
    /// The size is read through the current root of `i`'s set; the size slot
    /// of a non-root element carries no meaning.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::IndexOutOfRange`] if `i >= self.len()`.
    pub fn size_set(&mut self, i: usize) -> Result<usize, CodebookError> {
        let root = self.find(i)?;
        Ok(self.sizes[root])
    }

    /// Returns the number of disjoint sets currently in the structure.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of elements in this `UnionFind`.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if this `UnionFind` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
