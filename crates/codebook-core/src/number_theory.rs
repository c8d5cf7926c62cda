//! Number-theoretic algorithms over machine integers.
//!
//! Every function here is a pure computation over its arguments. Modular
//! arithmetic widens to `u128` for intermediate products, so any `u64`
//! modulus is supported without overflow.

pub mod binary_exponentiation;
pub mod cycles;
pub mod euclid;
pub mod factorization;
pub mod primality;
pub mod sieve;

pub use binary_exponentiation::{binary_power, mod_pow};
pub use cycles::{Cycle, floyd_cycle};
pub use euclid::{extended_euclid, gcd, inverse_mod};
pub use factorization::{FactorConfig, factor_integer, factor_integer_with, pollard_rho};
pub use primality::{fermat_prime_test, fermat_prime_test_with_rng};
pub use sieve::{eratosthenes, primes_up_to};
