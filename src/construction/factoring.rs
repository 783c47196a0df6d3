// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the classical reduction from factoring to
//! period finding, which is the core of Shor's algorithm.
//!
//! The period is found by exhaustive search, i.e. in time linear in `n`.
//! Hence, this module only factors toy moduli, which suffices to break
//! [`Rsa`](super::rsa::Rsa) for the sizes used in this crate.
//!
//! The main references are listed in the following:
//! - \[1\] Shor, Peter W. (1997).
//! Polynomial-Time Algorithms for Prime Factorization and Discrete Logarithms
//! on a Quantum Computer.
//! In: SIAM Journal on Computing 26.5.
//! <https://doi.org/10.1137/S0097539795293172>

use super::rsa::{RsaPublicKey, RsaSecretKey};
use crate::{
    error::CryptoError,
    primitive::modular::{mul_mod, pow_mod},
    sample::random_source::RandomSource,
    utils::number_theory::{gcd, is_prime, modular_inverse},
};
use tracing::{debug, trace};

/// The number of bases tried by [`factor`] before giving up.
const MAX_ATTEMPTS: usize = 1000;

/// Computes the multiplicative order of `a` modulo `n`.
///
/// Parameters:
/// - `a`: specifies the base
/// - `n`: specifies the modulus
///
/// Returns the smallest `r >= 1` with `a^r = 1 mod n` or `None` if no such
/// `r` exists, which is the case if `gcd(a, n) != 1`.
///
/// # Examples
/// ```
/// use pq_lwe::construction::factoring::find_period;
///
/// assert_eq!(Some(4), find_period(2, 15));
/// assert_eq!(None, find_period(3, 15));
/// ```
///
/// # Panics ...
/// - if `n == 0`.
pub fn find_period(a: u64, n: u64) -> Option<u64> {
    assert!(n > 0, "The modulus must be positive.");
    let one = 1 % n;
    let a = a % n;

    let mut x = a;
    let mut r = 1;
    while x != one {
        // the order divides phi(n) < n, if it exists
        if r >= n {
            return None;
        }
        x = mul_mod(x, a, n);
        r += 1;
    }
    Some(r)
}

/// Splits `n` into two non-trivial factors.
///
/// Even `n` are split as `(2, n / 2)`. Otherwise, random bases `a` in `[2, n-1]`
/// are drawn. A base sharing a factor with `n` directly reveals it.
/// Else, the period `r` of `a` is computed. If `r` is even and
/// `x = a^{r/2} != -1 mod n`, then `gcd(x + 1, n)` and `gcd(x - 1, n)` are
/// factors of `n`.
///
/// Parameters:
/// - `n`: specifies the integer to factor
/// - `rng`: specifies the source of the bases
///
/// Returns a pair `(p, q)` with `p * q = n` and `1 < p, q < n` or a
/// [`CryptoError`] if no such pair was found.
///
/// # Examples
/// ```
/// use pq_lwe::construction::factoring::factor;
/// use pq_lwe::sample::random_source::ChaChaSource;
/// let mut rng = ChaChaSource::seed_from_u64(0);
///
/// let (p, q) = factor(3233, &mut rng).unwrap();
///
/// assert_eq!(3233, p * q);
/// ```
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type [`FactoringFailed`](CryptoError::FactoringFailed)
///   if `n < 4`, `n` is prime, or no factors were found within a bounded
///   number of bases.
pub fn factor(n: u64, rng: &mut impl RandomSource) -> Result<(u64, u64), CryptoError> {
    if n < 4 || is_prime(n) {
        return Err(CryptoError::FactoringFailed(n));
    }
    if n % 2 == 0 {
        return Ok((2, n / 2));
    }
    debug!(n, "factoring by period finding");

    for attempt in 0..MAX_ATTEMPTS {
        let a = 2 + rng.uniform(n - 2);
        let g = gcd(a, n);
        if g > 1 {
            debug!(n, a, attempt, "base shares a factor");
            return Ok((g, n / g));
        }

        let r = match find_period(a, n) {
            Some(r) if r % 2 == 0 => r,
            _ => {
                trace!(a, "no even period");
                continue;
            }
        };
        let x = pow_mod(a, r / 2, n);
        if x == n - 1 {
            trace!(a, r, "trivial square root");
            continue;
        }

        let p = gcd(x + 1, n);
        let q = gcd(x - 1, n);
        if p > 1 && q > 1 && p as u128 * q as u128 == n as u128 {
            debug!(n, a, r, attempt, "found factors");
            return Ok((p, q));
        }
    }

    Err(CryptoError::FactoringFailed(n))
}

/// Recovers the secret key of `pk` by factoring its modulus.
///
/// Parameters:
/// - `pk`: specifies the public key to break
/// - `rng`: specifies the source of randomness for [`factor`]
///
/// Returns the secret key `(d, n)` with `d = e^{-1} mod (p-1)(q-1)`.
///
/// # Examples
/// ```
/// use pq_lwe::construction::{factoring::break_rsa, rsa::Rsa};
/// use pq_lwe::sample::random_source::ChaChaSource;
/// let (pk, _) = Rsa::default().gen();
/// let cipher = pk.encrypt("A").unwrap();
///
/// let sk = break_rsa(&pk, &mut ChaChaSource::seed_from_u64(1)).unwrap();
///
/// assert_eq!("A", sk.decrypt(cipher));
/// ```
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type [`FactoringFailed`](CryptoError::FactoringFailed)
///   if the modulus could not be factored.
/// - Returns a [`CryptoError`] of type [`NoInverse`](CryptoError::NoInverse)
///   if `e` is not invertible modulo `(p-1)(q-1)`.
pub fn break_rsa(
    pk: &RsaPublicKey,
    rng: &mut impl RandomSource,
) -> Result<RsaSecretKey, CryptoError> {
    let (p, q) = factor(pk.n(), rng)?;
    let phi = (p - 1) * (q - 1);
    let d = modular_inverse(pk.e(), phi)?;

    RsaSecretKey::new(d, pk.n())
}

#[cfg(test)]
mod test_find_period {
    use super::find_period;

    /// Checks the period for several small bases and moduli.
    #[test]
    fn known_periods() {
        assert_eq!(Some(4), find_period(2, 15));
        assert_eq!(Some(4), find_period(7, 15));
        assert_eq!(Some(2), find_period(14, 15));
        assert_eq!(Some(1), find_period(1, 15));
        assert_eq!(Some(6), find_period(2, 9));
        assert_eq!(Some(4), find_period(17, 15));
    }

    /// Ensures that bases sharing a factor with the modulus have no period.
    #[test]
    fn no_period() {
        assert_eq!(None, find_period(3, 9));
        assert_eq!(None, find_period(0, 7));
        assert_eq!(None, find_period(15, 15));
    }

    /// Ensures that every base has period 1 modulo 1.
    #[test]
    fn modulus_one() {
        assert_eq!(Some(1), find_period(5, 1));
    }

    /// Ensures that a modulus of 0 results in a panic.
    #[test]
    #[should_panic]
    fn modulus_zero() {
        let _ = find_period(2, 0);
    }
}

#[cfg(test)]
mod test_factor {
    use super::factor;
    use crate::error::CryptoError;
    use crate::sample::random_source::{ChaChaSource, FixedSequence};

    fn sorted((p, q): (u64, u64)) -> (u64, u64) {
        (p.min(q), p.max(q))
    }

    /// Factors the textbook RSA modulus `3233 = 53 * 61`.
    #[test]
    fn textbook_modulus() {
        let mut rng = ChaChaSource::seed_from_u64(42);

        assert_eq!((53, 61), sorted(factor(3233, &mut rng).unwrap()));
    }

    /// Ensures that the period path is taken for base 7 modulo 15.
    #[test]
    fn period_path() {
        // a = 2 + 5 mod 13 = 7, r = 4, x = 49 mod 15 = 4
        let mut rng = FixedSequence::new(vec![5]);

        assert_eq!((5, 3), factor(15, &mut rng).unwrap());
    }

    /// Ensures that a base sharing a factor returns the factor directly.
    #[test]
    fn shared_factor() {
        // a = 2 + 1 mod 7 = 3
        let mut rng = FixedSequence::new(vec![1]);

        assert_eq!((3, 3), factor(9, &mut rng).unwrap());
    }

    /// Ensures that even inputs are split off without randomness.
    #[test]
    fn even() {
        let mut rng = FixedSequence::new(vec![0]);

        assert_eq!((2, 50), factor(100, &mut rng).unwrap());
        assert_eq!((2, 2), factor(4, &mut rng).unwrap());
    }

    /// Ensures that several odd composites are factored.
    #[test]
    fn odd_composites() {
        let mut rng = ChaChaSource::seed_from_u64(7);

        for n in [15, 21, 35, 77, 143, 323, 1147, 9991] {
            let (p, q) = factor(n, &mut rng).unwrap();
            assert_eq!(n, p * q);
            assert!(p > 1 && q > 1);
        }
    }

    /// Ensures that primes and inputs smaller than 4 are rejected.
    #[test]
    fn not_composite() {
        let mut rng = ChaChaSource::seed_from_u64(0);

        for n in [0, 1, 2, 3, 5, 13, 3229] {
            assert!(matches!(
                factor(n, &mut rng),
                Err(CryptoError::FactoringFailed(value)) if value == n
            ));
        }
    }

    /// Ensures that the search gives up if every base fails.
    #[test]
    fn attempts_exhausted() {
        // a = 2 always, 2^3 = -1 mod 9
        let mut rng = FixedSequence::new(vec![0]);

        assert!(matches!(
            factor(9, &mut rng),
            Err(CryptoError::FactoringFailed(9))
        ));
    }
}
