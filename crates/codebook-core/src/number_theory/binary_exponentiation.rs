//! Exponentiation by squaring over an arbitrary monoid.

use crate::error::CodebookError;

/// Applies `op` to `base` and itself `exponent` times, in `O(log exponent)`
/// applications of `op`.
///
/// `identity` must be neutral for `op` and is returned when `exponent == 0`.
/// `op` must be associative; it does not need to be commutative, since every
/// factor is a power of the same `base`.
///
/// # Examples
///
/// ```
/// use codebook_core::number_theory::binary_power;
///
/// assert_eq!(binary_power(3u64, 5, 1, |a, b| a * b), 243);
/// let repeated = binary_power("ab".to_owned(), 3, String::new(), |a, b| format!("{a}{b}"));
/// assert_eq!(repeated, "ababab");
/// ```
pub fn binary_power<T, F>(base: T, exponent: u64, identity: T, op: F) -> T
where
    F: Fn(&T, &T) -> T,
{
    let mut result = identity;
    let mut base = base;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = op(&result, &base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = op(&base, &base);
        }
    }
    result
}

/// Computes `base^exponent mod modulus`.
///
/// # Errors
///
/// Returns [`CodebookError::InvalidArgument`] if `modulus` is zero.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> Result<u64, CodebookError> {
    if modulus == 0 {
        return Err(CodebookError::invalid("modulus must be non-zero"));
    }
    let m = u128::from(modulus);
    let reduced = u128::from(base) % m;
    let value = binary_power(reduced, exponent, 1 % m, |a, b| (a * b) % m);
    // `value < modulus`, so the narrowing is lossless.
    Ok(u64::try_from(value).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    type Matrix = [[u64; 2]; 2];

    fn mat_mul(a: &Matrix, b: &Matrix) -> Matrix {
        let mut out = [[0; 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
        }
        out
    }

    #[test]
    fn zero_exponent_returns_identity() {
        assert_eq!(binary_power(7i64, 0, 1, |a, b| a * b), 1);
        assert_eq!(binary_power(7i64, 0, 0, |a, b| a + b), 0);
    }

    #[test]
    fn additive_monoid_multiplies() {
        assert_eq!(binary_power(7i64, 13, 0, |a, b| a + b), 91);
    }

    #[test]
    fn matrix_power_yields_fibonacci() {
        let step: Matrix = [[1, 1], [1, 0]];
        let identity: Matrix = [[1, 0], [0, 1]];
        let power = binary_power(step, 50, identity, mat_mul);
        assert_eq!(power[0][1], 12_586_269_025, "F(50)");
    }

    #[test]
    fn mod_pow_small_values() {
        assert_eq!(mod_pow(2, 10, 1000).expect("non-zero modulus"), 24);
        assert_eq!(mod_pow(3, 200, 13).expect("non-zero modulus"), 9);
        assert_eq!(mod_pow(5, 0, 7).expect("non-zero modulus"), 1);
        assert_eq!(mod_pow(5, 3, 1).expect("non-zero modulus"), 0);
    }

    #[test]
    fn mod_pow_does_not_overflow() {
        // 2^64 = (2^64 - 1) + 1
        assert_eq!(mod_pow(2, 64, u64::MAX).expect("non-zero modulus"), 1);
        assert_eq!(
            mod_pow(u64::MAX - 1, 2, u64::MAX).expect("non-zero modulus"),
            1
        );
    }

    #[test]
    fn mod_pow_rejects_zero_modulus() {
        assert!(matches!(
            mod_pow(2, 3, 0),
            Err(CodebookError::InvalidArgument { .. })
        ));
    }
}
