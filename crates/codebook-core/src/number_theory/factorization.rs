//! Integer factorization with Pollard's rho.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::euclid::gcd;
use super::primality::fermat_prime_test_with_rng;

/// Configuration for [`factor_integer_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorConfig {
    /// Fermat witnesses used to decide whether a cofactor is prime.
    ///
    /// Default: 5.
    pub primality_iterations: u32,
    /// `(x0, c)` pairs tried in order when splitting a composite with
    /// [`pollard_rho`]. Trial division is used if every pair fails.
    ///
    /// Default: every pair in `(2..=5) x (1..=3)`.
    pub rho_seeds: Vec<(u64, u64)>,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            primality_iterations: 5,
            rho_seeds: (2..=5)
                .flat_map(|x0| (1..=3).map(move |c| (x0, c)))
                .collect(),
        }
    }
}

fn step(x: u64, c: u64, n: u64) -> u64 {
    let next = (u128::from(x) * u128::from(x) + u128::from(c)) % u128::from(n);
    // Reduced modulo a u64, so the narrowing is lossless.
    u64::try_from(next).unwrap_or(0)
}

/// Pollard's rho over `x -> x^2 + c (mod n)` starting at `x0`, with Floyd
/// cycle detection.
///
/// Returns a divisor of `n` greater than one. When the walk closes its cycle
/// before exposing a proper factor the result is `n` itself, and the caller
/// should retry with different `x0` or `c`. Values below 2 are returned
/// unchanged.
pub fn pollard_rho(n: u64, x0: u64, c: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut tortoise = x0 % n;
    let mut hare = tortoise;
    let mut factor = 1;
    while factor == 1 {
        tortoise = step(tortoise, c, n);
        hare = step(step(hare, c, n), c, n);
        factor = gcd(tortoise.abs_diff(hare), n);
    }
    factor
}

fn smallest_odd_factor(n: u64) -> u64 {
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return d;
        }
        d += 2;
    }
    n
}

/// Prime factorization of `n` with multiplicity, in ascending order, using
/// [`FactorConfig::default`] and the thread-local generator.
///
/// `0` and `1` have no prime factors and yield an empty list.
///
/// # Examples
///
/// ```
/// use codebook_core::number_theory::factor_integer;
///
/// assert_eq!(factor_integer(360), vec![2, 2, 2, 3, 3, 5]);
/// ```
pub fn factor_integer(n: u64) -> Vec<u64> {
    factor_integer_with(n, &FactorConfig::default(), &mut rand::thread_rng())
}

/// Prime factorization of `n` under an explicit configuration and random
/// source.
///
/// Factors of two are removed first. Each remaining cofactor is either
/// accepted as prime by the Fermat test or split by Pollard's rho, falling
/// back to trial division when every configured seed fails. A composite that
/// fools the Fermat test (a Carmichael number) is reported as a single factor.
pub fn factor_integer_with<R>(n: u64, config: &FactorConfig, rng: &mut R) -> Vec<u64>
where
    R: Rng + ?Sized,
{
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }

    let odd = n >> n.trailing_zeros();
    factors.extend(std::iter::repeat_n(2, n.trailing_zeros() as usize));

    let mut pending = vec![odd];
    while let Some(m) = pending.pop() {
        if m == 1 {
            continue;
        }
        if fermat_prime_test_with_rng(m, config.primality_iterations, rng) {
            factors.push(m);
            continue;
        }
        let divisor = config
            .rho_seeds
            .iter()
            .map(|&(x0, c)| pollard_rho(m, x0, c))
            .find(|&d| d != 1 && d != m)
            .unwrap_or_else(|| smallest_odd_factor(m));
        if divisor == m {
            factors.push(m);
            continue;
        }
        pending.push(divisor);
        pending.push(m / divisor);
    }

    factors.sort_unstable();
    factors
}
