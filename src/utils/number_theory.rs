// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains number-theoretic helpers used by the classical
//! constructions, i.e. textbook RSA and its factoring attack.

use crate::error::CryptoError;

/// Computes the greatest common divisor of `a` and `b`.
///
/// # Examples
/// ```
/// use pq_lwe::utils::number_theory::gcd;
///
/// assert_eq!(6, gcd(48, 18));
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Runs the extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `g = gcd(a, b) = a * x + b * y`.
///
/// # Examples
/// ```
/// use pq_lwe::utils::number_theory::extended_gcd;
///
/// let (g, x, y) = extended_gcd(17, 3120);
///
/// assert_eq!(1, g);
/// assert_eq!(1, 17 * x + 3120 * y);
/// ```
pub fn extended_gcd(a: u64, b: u64) -> (u64, i128, i128) {
    let (mut old_r, mut r) = (a as i128, b as i128);
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_x, x) = (x, old_x - quotient * x);
        (old_y, y) = (y, old_y - quotient * y);
    }

    (old_r as u64, old_x, old_y)
}

/// Computes the inverse of `value` modulo `modulus`.
///
/// Parameters:
/// - `value`: specifies the value to invert
/// - `modulus`: specifies the modulus
///
/// Returns `x` in `[0, modulus)` with `value * x = 1 mod modulus` or a
/// [`CryptoError`] if no such `x` exists.
///
/// # Examples
/// ```
/// use pq_lwe::utils::number_theory::modular_inverse;
///
/// assert_eq!(2753, modular_inverse(17, 3120).unwrap());
/// ```
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type [`NoInverse`](CryptoError::NoInverse)
///   if `gcd(value, modulus) != 1` or `modulus < 2`.
pub fn modular_inverse(value: u64, modulus: u64) -> Result<u64, CryptoError> {
    let (g, x, _) = extended_gcd(value, modulus);
    if g != 1 || modulus < 2 {
        return Err(CryptoError::NoInverse { value, modulus });
    }
    Ok(x.rem_euclid(modulus as i128) as u64)
}

/// Checks whether `n` is prime by trial division.
///
/// The running time is in `O(sqrt(n))`, which is only suitable for the
/// toy sizes of the classical constructions.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3u64;
    while divisor.saturating_mul(divisor) <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod test_gcd {
    use super::{extended_gcd, gcd};

    /// Checks the greatest common divisor on small examples.
    #[test]
    fn small() {
        assert_eq!(6, gcd(48, 18));
        assert_eq!(1, gcd(17, 3120));
        assert_eq!(5, gcd(0, 5));
        assert_eq!(5, gcd(5, 0));
    }

    /// Ensures that the Bézout coefficients are correct.
    #[test]
    fn bezout() {
        for (a, b) in [(240, 46), (17, 3120), (3120, 17), (0, 7), (1, 1), (u64::MAX, 3)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(gcd(a, b), g);
            assert_eq!(g as i128, a as i128 * x + b as i128 * y);
        }
    }
}
