//! Floyd's tortoise-and-hare cycle detection.

/// Shape of the eventually periodic sequence `x0, f(x0), f(f(x0)), ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Index of the first element that lies on the cycle.
    pub start: usize,
    /// Number of distinct elements on the cycle.
    pub length: usize,
}

/// Finds where the iteration of `f` from `x0` enters its cycle, and how long
/// that cycle is, using `O(1)` extra values.
///
/// The sequence must be eventually periodic, which holds for any `f` over a
/// finite domain; otherwise this does not terminate.
pub fn floyd_cycle<T, F>(f: F, x0: T) -> Cycle
where
    T: Clone + PartialEq,
    F: Fn(&T) -> T,
{
    let mut tortoise = f(&x0);
    let mut hare = f(&tortoise);
    while tortoise != hare {
        tortoise = f(&tortoise);
        hare = f(&f(&hare));
    }

    let mut start = 0;
    tortoise = x0;
    while tortoise != hare {
        tortoise = f(&tortoise);
        hare = f(&hare);
        start += 1;
    }

    let mut length = 1;
    hare = f(&tortoise);
    while tortoise != hare {
        hare = f(&hare);
        length += 1;
    }

    Cycle { start, length }
}
