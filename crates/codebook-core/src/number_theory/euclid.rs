//! Greatest common divisors, Bézout coefficients and modular inverses.

/// Greatest common divisor of `a` and `b`; `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns `(d, x, y)` with `d = gcd(a, b)` and `a * x + b * y == d`.
///
/// `d` is non-negative. With `b == 0` the result is `(|a|, sign(a), 0)`.
pub fn extended_euclid(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1, 0);
    let (mut old_y, mut y) = (0, 1);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }
    if old_r < 0 {
        (-old_r, -old_x, -old_y)
    } else {
        (old_r, old_x, old_y)
    }
}

/// Returns the inverse of `a` modulo `m`, normalised to `[0, m)`.
///
/// `None` when `m < 1` or when `a` and `m` are not coprime.
pub fn inverse_mod(a: i64, m: i64) -> Option<i64> {
    if m < 1 {
        return None;
    }
    let (d, x, _) = extended_euclid(a.rem_euclid(m), m);
    (d == 1).then(|| x.rem_euclid(m))
}
