//! Sieve of Eratosthenes.

/// Returns a table of length `n + 1` where entry `i` is `true` iff `i` is
/// prime. Runs in `O(n log log n)`.
///
/// Even numbers are cleared in one pass; only odd candidates up to `sqrt(n)`
/// are then used to sieve.
pub fn eratosthenes(n: usize) -> Vec<bool> {
    let mut primes = vec![true; n + 1];
    primes[0] = false;
    if n >= 1 {
        primes[1] = false;
    }
    for slot in primes.iter_mut().skip(4).step_by(2) {
        *slot = false;
    }

    let mut i = 3;
    while i * i <= n {
        if primes[i] {
            for slot in primes.iter_mut().skip(i * i).step_by(i) {
                *slot = false;
            }
        }
        i += 2;
    }
    primes
}

/// Returns every prime `<= n` in ascending order.
pub fn primes_up_to(n: usize) -> Vec<usize> {
    eratosthenes(n)
        .into_iter()
        .enumerate()
        .filter_map(|(i, is_prime)| is_prime.then_some(i))
        .collect()
}
