//! Probabilistic primality testing based on Fermat's little theorem.

use rand::Rng;

use super::binary_exponentiation::mod_pow;

/// Fermat primality test with `iterations` random witnesses drawn from the
/// thread-local generator.
///
/// A `false` answer is always correct. A `true` answer may be wrong, most
/// notably for Carmichael numbers such as 561, for which every coprime
/// witness passes.
pub fn fermat_prime_test(n: u64, iterations: u32) -> bool {
    fermat_prime_test_with_rng(n, iterations, &mut rand::thread_rng())
}

/// Fermat primality test drawing witnesses from `rng`.
///
/// Values below 4 are answered exactly. Otherwise each witness `a` is drawn
/// uniformly from `[2, n - 2]` and `n` is rejected as soon as
/// `a^(n-1) mod n != 1`.
pub fn fermat_prime_test_with_rng<R>(n: u64, iterations: u32, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    if n < 4 {
        return n == 2 || n == 3;
    }
    (0..iterations).all(|_| {
        let witness = rng.gen_range(2..=n - 2);
        mod_pow(witness, n - 1, n) == Ok(1)
    })
}
