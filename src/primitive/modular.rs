// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains scalar arithmetic over `Z_q` for moduli `q` that
//! fit into an [`u64`].
//!
//! All values are represented by [`u64`] in `[0, q)`. Intermediate results
//! are computed in [`u128`] or [`i128`] and only then reduced, such that no
//! operation overflows for any `q < 2^64`.

/// Reduces a signed value into the representative in `[0, q)`.
///
/// Parameters:
/// - `x`: specifies the value to reduce
/// - `q`: specifies the modulus
///
/// Returns `x mod q` in `[0, q)`.
///
/// # Examples
/// ```
/// use pq_lwe::primitive::modular::reduce;
///
/// assert_eq!(95, reduce(-2, 97));
/// assert_eq!(3, reduce(100, 97));
/// ```
///
/// # Panics ...
/// - if `q == 0`.
pub fn reduce(x: i128, q: u64) -> u64 {
    x.rem_euclid(q as i128) as u64
}

/// Computes `a + b mod q` for `a, b` in `[0, q)`.
pub fn add_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 + b as u128) % q as u128) as u64
}

/// Computes `a - b mod q` for `a, b` in `[0, q)`.
pub fn sub_mod(a: u64, b: u64, q: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        q - (b - a)
    }
}

/// Computes `a * b mod q` with a [`u128`] intermediate product.
pub fn mul_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 * b as u128) % q as u128) as u64
}

/// Computes `base^exp mod q` by square-and-multiply.
///
/// Parameters:
/// - `base`: specifies the base, which does not need to be reduced
/// - `exp`: specifies the exponent
/// - `q`: specifies the modulus
///
/// Returns `base^exp mod q` in `[0, q)`.
///
/// # Examples
/// ```
/// use pq_lwe::primitive::modular::pow_mod;
///
/// assert_eq!(2790, pow_mod(65, 17, 3233));
/// ```
///
/// # Panics ...
/// - if `q == 0`.
pub fn pow_mod(base: u64, mut exp: u64, q: u64) -> u64 {
    let mut result = 1 % q;
    let mut base = base % q;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, q);
        }
        base = mul_mod(base, base, q);
        exp >>= 1;
    }
    result
}

/// Computes the inner product of two slices over `Z_q`.
///
/// The sum is accumulated in [`u128`] and reduced after every product,
/// which keeps `acc + a_i * b_i` below `q^2 <= 2^128`.
///
/// Parameters:
/// - `a`: specifies the first vector with entries in `[0, q)`
/// - `b`: specifies the second vector with entries in `[0, q)`
/// - `q`: specifies the modulus
///
/// Returns `sum_i a_i * b_i mod q`.
///
/// # Examples
/// ```
/// use pq_lwe::primitive::modular::dot;
///
/// assert_eq!(4, dot(&[1, 2, 3], &[4, 5, 6], 7));
/// ```
///
/// # Panics ...
/// - if `a` and `b` have different lengths.
pub fn dot(a: &[u64], b: &[u64], q: u64) -> u64 {
    assert_eq!(
        a.len(),
        b.len(),
        "the inner product requires vectors of equal length"
    );
    let q = q as u128;
    a.iter().zip(b).fold(0u128, |acc, (&x, &y)| {
        (acc + x as u128 * y as u128) % q
    }) as u64
}

/// Computes the circular distance between `x` and `target` on `Z_q`.
///
/// Plain subtraction modulo `q` does not respect the wrap-around of the
/// ring, e.g. `q - 1` is at distance `1` of `0`. Hence, the distance is
/// `min(|x - target|, q - |x - target|)`.
///
/// Parameters:
/// - `x`: specifies a value in `[0, q)`
/// - `target`: specifies a value in `[0, q)`
/// - `q`: specifies the modulus
///
/// Returns the distance of `x` and `target` on the ring, which is at most `q / 2`.
///
/// # Examples
/// ```
/// use pq_lwe::primitive::modular::centered_distance;
///
/// assert_eq!(1, centered_distance(96, 0, 97));
/// assert_eq!(5, centered_distance(43, 48, 97));
/// ```
pub fn centered_distance(x: u64, target: u64, q: u64) -> u64 {
    let diff = x.abs_diff(target);
    diff.min(q - diff)
}

#[cfg(test)]
mod test_reduce {
    use super::reduce;

    /// Ensures that negative values are mapped into `[0, q)`.
    #[test]
    fn negative() {
        assert_eq!(95, reduce(-2, 97));
        assert_eq!(0, reduce(-97, 97));
        assert_eq!(96, reduce(-98, 97));
    }

    /// Ensures that values beyond the modulus are reduced.
    #[test]
    fn positive() {
        assert_eq!(0, reduce(0, 97));
        assert_eq!(96, reduce(96, 97));
        assert_eq!(1, reduce(98, 97));
    }

    /// Ensures that the largest moduli are supported.
    #[test]
    fn large_modulus() {
        assert_eq!(u64::MAX - 1, reduce(-1, u64::MAX));
        assert_eq!(1, reduce(u64::MAX as i128 + 1, u64::MAX));
    }
}


#[cfg(test)]
mod test_dot {
    use super::dot;

    /// Checks the inner product on a small example.
    #[test]
    fn small() {
        assert_eq!(32, dot(&[1, 2, 3], &[4, 5, 6], 97));
        assert_eq!(4, dot(&[1, 2, 3], &[4, 5, 6], 7));
    }

    /// Ensures that the inner product of empty vectors is zero.
    #[test]
    fn empty() {
        assert_eq!(0, dot(&[], &[], 97));
    }

    /// Ensures that the accumulation does not overflow for large moduli.
    #[test]
    fn large_modulus() {
        let q = u64::MAX;
        let a = vec![q - 1; 16];
        // 16 * (q - 1)^2 = 16 mod q
        assert_eq!(16, dot(&a, &a, q));
    }

    /// Ensures that vectors of different length are rejected.
    #[test]
    #[should_panic]
    fn mismatching_length() {
        let _ = dot(&[1, 2], &[1], 97);
    }
}
