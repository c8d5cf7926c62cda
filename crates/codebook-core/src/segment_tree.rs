//! Generic segment tree over an associative combine operation.
//!
//! The tree is stored as an implicit binary heap in a flat `Vec`: the root is
//! node `1` and node `v` has children `2v` and `2v + 1`. Each leaf holds one
//! input element and every internal node holds `combine(left, right)` of its
//! children, so the value at a node covering `[l, r]` is the left-to-right fold
//! of the leaves in that range.
//!
//! `combine` must be associative but need not be commutative: queries always
//! combine the left partial result with the right one.

use std::fmt;

use crate::error::CodebookError;

/// Array-backed segment tree answering range folds and point updates in
/// `O(log n)`.
///
/// # Examples
///
/// ```
/// use codebook_core::SegmentTree;
///
/// let mut tree = SegmentTree::new(&[1, 2, 3, 4], |a: &i32, b: &i32| a + b, 0)?;
/// assert_eq!(tree.range_query(0, 3)?, 10);
/// tree.update(1, 10)?;
/// assert_eq!(tree.range_query(0, 1)?, 11);
/// # Ok::<(), codebook_core::CodebookError>(())
/// ```
pub struct SegmentTree<T, F> {
    tree: Vec<T>,
    len: usize,
    combine: F,
    identity: T,
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds a segment tree over `array` in `O(n)`.
    ///
    /// `identity` must be neutral for `combine`; it is returned by empty range
    /// queries and fills the unused slots of the backing array.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::InvalidArgument`] if `array` is empty.
    pub fn new(array: &[T], combine: F, identity: T) -> Result<Self, CodebookError> {
        if array.is_empty() {
            return Err(CodebookError::invalid(
                "segment tree requires a non-empty array",
            ));
        }
        let len = array.len();
        let mut tree = Self {
            tree: vec![identity.clone(); 4 * len],
            len,
            combine,
            identity,
        };
        tree.build(array, 1, 0, len - 1);
        Ok(tree)
    }

    fn build(&mut self, array: &[T], vertex: usize, left: usize, right: usize) {
        if left == right {
            self.tree[vertex] = array[left].clone();
            return;
        }
        let middle = left + (right - left) / 2;
        self.build(array, 2 * vertex, left, middle);
        self.build(array, 2 * vertex + 1, middle + 1, right);
        self.pull(vertex);
    }

    fn pull(&mut self, vertex: usize) {
        self.tree[vertex] = (self.combine)(&self.tree[2 * vertex], &self.tree[2 * vertex + 1]);
    }

    /// Returns the fold of `combine` over the closed range `[left, right]`.
    ///
    /// An empty range (`left > right`) yields the identity without any bounds
    /// check.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::IndexOutOfRange`] if `left <= right` and
    /// `right >= self.len()`.
    pub fn range_query(&self, left: usize, right: usize) -> Result<T, CodebookError> {
        if left > right {
            return Ok(self.identity.clone());
        }
        CodebookError::check_index(right, self.len)?;
        Ok(self.query(1, 0, self.len - 1, left, right))
    }

    fn query(
        &self,
        vertex: usize,
        left_bound: usize,
        right_bound: usize,
        left: usize,
        right: usize,
    ) -> T {
        if left > right {
            return self.identity.clone();
        }
        if left == left_bound && right == right_bound {
            return self.tree[vertex].clone();
        }
        let middle = left_bound + (right_bound - left_bound) / 2;
        let from_left = self.query(2 * vertex, left_bound, middle, left, right.min(middle));
        let from_right = self.query(
            2 * vertex + 1,
            middle + 1,
            right_bound,
            left.max(middle + 1),
            right,
        );
        (self.combine)(&from_left, &from_right)
    }

    /// Replaces the element at `index` with `value` and recombines every
    /// ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn update(&mut self, index: usize, value: T) -> Result<(), CodebookError> {
        CodebookError::check_index(index, self.len)?;
        self.assign(1, 0, self.len - 1, index, value);
        Ok(())
    }

    fn assign(&mut self, vertex: usize, left: usize, right: usize, index: usize, value: T) {
        if left == right {
            self.tree[vertex] = value;
            return;
        }
        let middle = left + (right - left) / 2;
        if index <= middle {
            self.assign(2 * vertex, left, middle, index, value);
        } else {
            self.assign(2 * vertex + 1, middle + 1, right, index, value);
        }
        self.pull(vertex);
    }

    /// Returns the element currently stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CodebookError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<T, CodebookError> {
        self.range_query(index, index)
    }

    /// Returns the number of elements the tree was built over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects empty arrays.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the identity element supplied at construction.
    pub fn identity(&self) -> &T {
        &self.identity
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len)
            .field("identity", &self.identity)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}
