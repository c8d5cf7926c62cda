//! Lexicographic permutation generation (Knuth, TAOCP 4A, Algorithm L).

use std::iter::FusedIterator;

/// Rearranges `items` into the next permutation in lexicographic order.
///
/// Returns `false`, leaving `items` untouched, when `items` is already the
/// last (non-increasing) arrangement. Equal elements are treated as
/// indistinguishable, so repeated values never produce duplicate
/// arrangements.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut j = items.len() - 2;
    while items[j] >= items[j + 1] {
        if j == 0 {
            return false;
        }
        j -= 1;
    }

    let mut l = items.len() - 1;
    while items[j] >= items[l] {
        l -= 1;
    }
    items.swap(j, l);
    items[j + 1..].reverse();
    true
}

/// Iterator over the distinct permutations of a sequence, in lexicographic
/// order. Created by [`lexicographic_permutations`].
#[derive(Debug, Clone)]
pub struct LexicographicPermutations<T> {
    current: Vec<T>,
    exhausted: bool,
}

impl<T: Ord + Clone> Iterator for LexicographicPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.current.clone();
        self.exhausted = !next_permutation(&mut self.current);
        Some(item)
    }
}

impl<T: Ord + Clone> FusedIterator for LexicographicPermutations<T> {}

/// Returns an iterator over every distinct permutation of `items`, starting
/// from the sorted arrangement.
///
/// An empty input yields a single empty permutation.
///
/// # Examples
///
/// ```
/// use codebook_core::lexicographic_permutations;
///
/// let perms: Vec<Vec<u8>> = lexicographic_permutations(&[2, 1, 1]).collect();
/// assert_eq!(perms, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
/// ```
pub fn lexicographic_permutations<T: Ord + Clone>(items: &[T]) -> LexicographicPermutations<T> {
    let mut current = items.to_vec();
    current.sort();
    LexicographicPermutations {
        current,
        exhausted: false,
    }
}
