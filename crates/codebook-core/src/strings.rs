//! Knuth-Morris-Pratt substring search over arbitrary sequences.
//!
//! The back table for a needle of length `n` has `n + 1` slots. Slot `i` holds
//! the length of the longest proper border of `needle[..i]`, and slot `0` is
//! `None`: the sentinel that advances the haystack cursor.

/// A needle together with its precomputed back table, reusable across
/// haystacks.
#[derive(Debug, Clone)]
pub struct Pattern<'a, T> {
    needle: &'a [T],
    back_table: Vec<Option<usize>>,
}

impl<'a, T: PartialEq> Pattern<'a, T> {
    /// Precomputes the back table for `needle` in `O(n)`.
    pub fn new(needle: &'a [T]) -> Self {
        let n = needle.len();
        let mut back_table = vec![None; n + 1];
        for i in 1..=n {
            let mut position = back_table[i - 1];
            while let Some(p) = position {
                if needle[p] == needle[i - 1] {
                    break;
                }
                position = back_table[p];
            }
            back_table[i] = Some(position.map_or(0, |p| p + 1));
        }
        Self { needle, back_table }
    }

    /// Returns the back table.
    pub fn back_table(&self) -> &[Option<usize>] {
        &self.back_table
    }

    /// Returns the start offset of every match of the needle in `haystack`,
    /// overlapping matches included, in `O(haystack.len())`.
    ///
    /// An empty needle matches nowhere.
    pub fn find_in(&self, haystack: &[T]) -> Vec<usize> {
        let n = self.needle.len();
        let mut matches = Vec::new();
        if n == 0 {
            return matches;
        }

        let mut j = Some(0);
        for (i, item) in haystack.iter().enumerate() {
            while let Some(k) = j {
                if k != n && *item == self.needle[k] {
                    break;
                }
                j = self.back_table[k];
            }
            let matched = j.map_or(0, |k| k + 1);
            if matched == n {
                matches.push(i + 1 - n);
            }
            j = Some(matched);
        }
        matches
    }
}

/// Returns the start offset of every match of `needle` in `haystack`.
///
/// Arguments follow the module-wide order: haystack first, then needle.
///
/// # Examples
///
/// ```
/// use codebook_core::knuth_morris_pratt;
///
/// assert_eq!(knuth_morris_pratt(b"abababa", b"aba"), vec![0, 2, 4]);
/// ```
pub fn knuth_morris_pratt<T: PartialEq>(haystack: &[T], needle: &[T]) -> Vec<usize> {
    Pattern::new(needle).find_in(haystack)
}

/// Searches `haystack` for each of `needles`, returning one match list per
/// needle in the same order.
pub fn knuth_morris_pratt_many<T, N>(haystack: &[T], needles: &[N]) -> Vec<Vec<usize>>
where
    T: PartialEq,
    N: AsRef<[T]>,
{
    needles
        .iter()
        .map(|needle| Pattern::new(needle.as_ref()).find_in(haystack))
        .collect()
}

/// Multi-needle search over text, ignoring ASCII case. Offsets are byte
/// offsets into `haystack`.
pub fn find_ignore_ascii_case(haystack: &str, needles: &[&str]) -> Vec<Vec<usize>> {
    let folded = haystack.to_ascii_lowercase();
    let folded_needles: Vec<String> = needles.iter().map(|n| n.to_ascii_lowercase()).collect();
    let needle_bytes: Vec<&[u8]> = folded_needles.iter().map(String::as_bytes).collect();
    knuth_morris_pratt_many(folded.as_bytes(), &needle_bytes)
}
