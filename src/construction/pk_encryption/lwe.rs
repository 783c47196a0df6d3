// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the bit-wise LWE
//! public key encryption scheme with binary secret and bounded uniform noise.
//!
//! The main references are listed in the following:
//! - \[1\] Regev, Oded (2009).
//! On lattices, learning with errors, random linear codes, and cryptography.
//! In: Journal of the ACM 6.
//! <https://dl.acm.org/doi/pdf/10.1145/1568318.1568324>

use super::PKEncryption;
use crate::{
    error::CryptoError,
    primitive::{
        modular::{add_mod, centered_distance, sub_mod},
        MatZq, VecZq,
    },
    sample::{distribution::uniform::sample_bounded, random_source::RandomSource},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// This struct manages and stores the public parameters of a [`Lwe`]
/// public key encryption instance.
///
/// Attributes:
/// - `n`: specifies the dimension of the secret vector
/// - `m`: specifies the number of LWE samples, i.e. rows of `A`
/// - `q`: specifies the modulus over which the encryption is computed
/// - `bound`: specifies the largest absolute value of an error entry
///
/// # Examples
/// ```
/// use pq_lwe::construction::pk_encryption::{Lwe, PKEncryption};
/// use pq_lwe::sample::random_source::ChaChaSource;
/// let mut rng = ChaChaSource::seed_from_u64(42);
///
/// // setup public parameters and key pair
/// let lwe = Lwe::default();
/// let (pk, sk) = lwe.gen(&mut rng);
///
/// // encrypt a bit
/// let msg = 1;
/// let cipher = lwe.enc(&pk, msg, &mut rng);
///
/// // decrypt
/// let m = lwe.dec(&sk, &cipher);
///
/// assert_eq!(msg, m);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LweParameters")]
pub struct Lwe {
    n: usize,   // dimension of the secret
    m: usize,   // number of rows of matrix A
    q: u64,     // modulus
    bound: u64, // error entries are in [-bound, bound]
}

/// The unchecked serialized form of a [`Lwe`] instance.
#[derive(Deserialize)]
struct LweParameters {
    n: usize,
    m: usize,
    q: u64,
    bound: u64,
}

impl TryFrom<LweParameters> for Lwe {
    type Error = CryptoError;

    fn try_from(params: LweParameters) -> Result<Self, Self::Error> {
        Self::new(params.n, params.m, params.q, params.bound)
    }
}

impl Lwe {
    /// Instantiates a [`Lwe`] PK encryption instance with the
    /// specified parameters.
    ///
    /// **WARNING:** The given parameters are only checked for validity, not
    /// for security nor correctness of the scheme. If `q` is too small
    /// compared to `m * bound`, decryption fails more often.
    /// Use [`Lwe::check_correctness`] to check whether decryption never fails.
    ///
    /// Parameters:
    /// - `n`: specifies the dimension of the secret vector
    /// - `m`: specifies the number of rows of the uniform at random
    ///   instantiated matrix `A`
    /// - `q`: specifies the modulus
    /// - `bound`: specifies the largest absolute value of an error entry
    ///
    /// Returns a [`Lwe`] PK encryption instance or a [`CryptoError`]
    /// if the parameters are invalid.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::construction::pk_encryption::Lwe;
    ///
    /// let lwe = Lwe::new(10, 20, 97, 2).unwrap();
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type [`InvalidParameter`](CryptoError::InvalidParameter)
    ///   if `n`, `m`, or `q` is `0`, or `bound >= q`.
    pub fn new(n: usize, m: usize, q: u64, bound: u64) -> Result<Self, CryptoError> {
        let out = Self { n, m, q, bound };
        out.check_validity()?;
        Ok(out)
    }

    /// Loads a [`Lwe`] instance from a JSON document of the form
    /// `{"n": 10, "m": 20, "q": 97, "bound": 2}` and checks its validity.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::construction::pk_encryption::Lwe;
    ///
    /// let lwe = Lwe::from_json(r#"{"n": 10, "m": 20, "q": 97, "bound": 2}"#).unwrap();
    ///
    /// assert_eq!(Lwe::default(), lwe);
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type [`Serialization`](CryptoError::Serialization)
    ///   if the document is malformed.
    /// - Returns a [`CryptoError`] of type [`InvalidParameter`](CryptoError::InvalidParameter)
    ///   if the contained parameters are invalid.
    pub fn from_json(json: &str) -> Result<Self, CryptoError> {
        let params: LweParameters = serde_json::from_str(json)?;
        Self::try_from(params)
    }

    /// Checks whether the parameters describe a well-defined instance, i.e.
    /// `n, m, q > 0` and `bound < q`.
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type [`InvalidParameter`](CryptoError::InvalidParameter)
    ///   if at least one parameter is invalid.
    pub fn check_validity(&self) -> Result<(), CryptoError> {
        if self.n == 0 {
            return Err(CryptoError::InvalidParameter(String::from(
                "n must be chosen bigger than 0.",
            )));
        }
        if self.m == 0 {
            return Err(CryptoError::InvalidParameter(String::from(
                "m must be chosen bigger than 0.",
            )));
        }
        if self.q == 0 {
            return Err(CryptoError::InvalidParameter(String::from(
                "q must be chosen bigger than 0.",
            )));
        }
        if self.bound >= self.q {
            return Err(CryptoError::InvalidParameter(format!(
                "The error bound {} must be smaller than q = {}.",
                self.bound, self.q
            )));
        }

        Ok(())
    }

    /// Checks whether decryption is guaranteed to succeed.
    ///
    /// The noise of a decryption is `r^t * e` for a binary `r`, whose absolute
    /// value is at most `m * bound`. If it stays below `⌊q/4⌋`, the threshold
    /// decoder always outputs the encrypted bit.
    ///
    /// Returns an empty result or a [`CryptoError`] if decryption
    /// may fail. Decryption may still succeed with high probability then,
    /// e.g. for the [`Default`] parameters.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::construction::pk_encryption::Lwe;
    ///
    /// assert!(Lwe::new(10, 20, 167, 2).unwrap().check_correctness().is_ok());
    /// assert!(Lwe::default().check_correctness().is_err());
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type [`InvalidParameter`](CryptoError::InvalidParameter)
    ///   if `m * bound >= ⌊q/4⌋`.
    pub fn check_correctness(&self) -> Result<(), CryptoError> {
        let max_noise = self.m as u128 * self.bound as u128;
        if max_noise >= (self.q / 4) as u128 {
            return Err(CryptoError::InvalidParameter(format!(
                "Correctness is not guaranteed as m * bound = {max_noise} >= ⌊q/4⌋ = {}.",
                self.q / 4
            )));
        }

        Ok(())
    }

    /// Returns the dimension `n` of the secret vector.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number `m` of LWE samples in a public key.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Returns the modulus `q`.
    pub fn q(&self) -> u64 {
        self.q
    }

    /// Returns the error bound.
    pub fn bound(&self) -> u64 {
        self.bound
    }
}

impl Default for Lwe {
    /// Initializes a [`Lwe`] struct with parameters `n = 10`, `m = 20`,
    /// `q = 97`, and `bound = 2`.
    /// This parameter choice is not secure as the dimension of the lattice is too small,
    /// and decryption is only correct with high probability,
    /// but it provides an efficient working example.
    fn default() -> Self {
        Self {
            n: 10,
            m: 20,
            q: 97,
            bound: 2,
        }
    }
}

/// The public key `(A, b)` of a [`Lwe`] instance with `b = A * s + e`.
///
/// Deserialization rejects keys whose `b` does not have one entry per row
/// of `A` or uses another modulus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPublicKey")]
pub struct PublicKey {
    mat_a: MatZq,
    vec_b: VecZq,
}

#[derive(Deserialize)]
struct RawPublicKey {
    mat_a: MatZq,
    vec_b: VecZq,
}

impl TryFrom<RawPublicKey> for PublicKey {
    type Error = CryptoError;

    fn try_from(raw: RawPublicKey) -> Result<Self, Self::Error> {
        if raw.mat_a.get_num_rows() != raw.vec_b.len() {
            return Err(CryptoError::InvalidParameter(format!(
                "A has {} rows, but b has dimension {}.",
                raw.mat_a.get_num_rows(),
                raw.vec_b.len()
            )));
        }
        if raw.mat_a.get_mod() != raw.vec_b.get_mod() {
            return Err(CryptoError::InvalidParameter(String::from(
                "A and b must use the same modulus.",
            )));
        }

        Ok(Self {
            mat_a: raw.mat_a,
            vec_b: raw.vec_b,
        })
    }
}

impl PublicKey {
    /// Returns the uniform `m x n` matrix `A`.
    pub fn mat_a(&self) -> &MatZq {
        &self.mat_a
    }

    /// Returns the vector `b = A * s + e` of dimension `m`.
    pub fn vec_b(&self) -> &VecZq {
        &self.vec_b
    }
}

/// The secret key `s` of a [`Lwe`] instance, a binary vector of dimension `n`.
///
/// The secret key can not be serialized and its [`Debug`] output does
/// not reveal its entries.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    vec_s: VecZq,
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("dimension", &self.vec_s.len())
            .finish_non_exhaustive()
    }
}

/// The encryption `(u, v)` of a single bit.
///
/// Deserialization rejects a `v` not reduced modulo the modulus of `u`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCiphertext")]
pub struct Ciphertext {
    vec_u: VecZq,
    v: u64,
}

#[derive(Deserialize)]
struct RawCiphertext {
    vec_u: VecZq,
    v: u64,
}

impl TryFrom<RawCiphertext> for Ciphertext {
    type Error = CryptoError;

    fn try_from(raw: RawCiphertext) -> Result<Self, Self::Error> {
        if raw.v >= raw.vec_u.get_mod() {
            return Err(CryptoError::InvalidParameter(format!(
                "v = {} must be reduced modulo {}.",
                raw.v,
                raw.vec_u.get_mod()
            )));
        }

        Ok(Self {
            vec_u: raw.vec_u,
            v: raw.v,
        })
    }
}

impl Ciphertext {
    /// Returns the vector `u = r^t * A` of dimension `n`.
    pub fn vec_u(&self) -> &VecZq {
        &self.vec_u
    }

    /// Returns the scalar `v = r^t * b + msg * ⌊q/2⌋`.
    pub fn v(&self) -> u64 {
        self.v
    }
}

impl PKEncryption for Lwe {
    type Cipher = Ciphertext;
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;

    /// Generates a (pk, sk) pair for the LWE public key encryption scheme
    /// by following these steps:
    /// - A <- Z_q^{m x n}
    /// - s <- {0,1}^n
    /// - e <- [-bound, bound]^m
    /// - b = A * s + e
    ///
    /// Then, `pk = (A, b)` and `sk = s` is output.
    /// Exactly `m * n + n + m` values are drawn from `rng` in this order.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::construction::pk_encryption::{Lwe, PKEncryption};
    /// use pq_lwe::sample::random_source::ChaChaSource;
    /// let lwe = Lwe::default();
    ///
    /// let (pk, sk) = lwe.gen(&mut ChaChaSource::from_entropy());
    /// ```
    fn gen(&self, rng: &mut impl RandomSource) -> (Self::PublicKey, Self::SecretKey) {
        // A <- Z_q^{m x n}
        let mat_a = MatZq::sample_uniform(self.m, self.n, self.q, rng);
        // s <- {0,1}^n
        let vec_s = VecZq::sample_binary(self.n, self.q, rng);
        // e <- [-bound, bound]^m
        let vec_e = sample_bounded(self.m, self.bound, rng);

        // b = A * s + e
        let vec_b = mat_a.mul_vec(&vec_s).add_signed(&vec_e);

        debug!(
            n = self.n,
            m = self.m,
            q = self.q,
            bound = self.bound,
            "generated LWE key pair"
        );

        (PublicKey { mat_a, vec_b }, SecretKey { vec_s })
    }

    /// Generates an encryption of `message mod 2` for the provided public key
    /// by following these steps:
    /// - r <- {0,1}^m
    /// - u = r^t * A
    /// - v = r^t * b + msg * ⌊q/2⌋
    ///
    /// Then, cipher `(u, v)` is output.
    ///
    /// Parameters:
    /// - `pk`: specifies the public key `pk = (A, b)`
    /// - `message`: specifies the message that should be encrypted
    /// - `rng`: specifies the source of the fresh vector `r`
    ///
    /// Returns a cipher of type [`Ciphertext`].
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::construction::pk_encryption::{Lwe, PKEncryption};
    /// use pq_lwe::sample::random_source::ChaChaSource;
    /// let mut rng = ChaChaSource::from_entropy();
    /// let lwe = Lwe::default();
    /// let (pk, sk) = lwe.gen(&mut rng);
    ///
    /// let cipher = lwe.enc(&pk, 1, &mut rng);
    /// ```
    ///
    /// # Panics ...
    /// - if the dimensions or the modulus of `pk` do not match `self`.
    fn enc(&self, pk: &Self::PublicKey, message: u8, rng: &mut impl RandomSource) -> Self::Cipher {
        assert_eq!(
            (self.m, self.n),
            (pk.mat_a.get_num_rows(), pk.mat_a.get_num_columns()),
            "the public key does not match the dimensions of this instance"
        );
        assert_eq!(self.q, pk.mat_a.get_mod(), "the public key uses another modulus");

        let message = (message % 2) as u64;

        // r <- {0,1}^m
        let vec_r = VecZq::sample_binary(self.m, self.q, rng);

        // u = r^t * A
        let vec_u = vec_r.mul_mat(&pk.mat_a);
        // v = r^t * b + msg * ⌊q/2⌋
        let v = add_mod(vec_r.dot_product(&pk.vec_b), message * (self.q / 2), self.q);

        Ciphertext { vec_u, v }
    }

    /// Decrypts the provided `cipher` using the secret key `sk` by following these steps:
    /// - x = v - u^t * s
    /// - if the distance of x mod q to ⌊q/2⌋ is smaller than ⌊q/4⌋, output 1. Otherwise, output 0.
    ///
    /// A wrong output is not reported. Its probability depends on the chosen
    /// parameters, see [`Lwe::check_correctness`].
    ///
    /// Parameters:
    /// - `sk`: specifies the secret key `sk = s`
    /// - `cipher`: specifies the cipher containing `cipher = (u, v)`
    ///
    /// Returns the decryption of `cipher` as a bit.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::construction::pk_encryption::{Lwe, PKEncryption};
    /// use pq_lwe::sample::random_source::ChaChaSource;
    /// let mut rng = ChaChaSource::seed_from_u64(1);
    /// let lwe = Lwe::default();
    /// let (pk, sk) = lwe.gen(&mut rng);
    /// let cipher = lwe.enc(&pk, 1, &mut rng);
    ///
    /// let m = lwe.dec(&sk, &cipher);
    ///
    /// assert_eq!(1, m);
    /// ```
    ///
    /// # Panics ...
    /// - if the dimension or the modulus of `cipher` and `sk` do not match.
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> u8 {
        let result = sub_mod(
            cipher.v % self.q,
            cipher.vec_u.dot_product(&sk.vec_s),
            self.q,
        );

        if centered_distance(result, self.q / 2, self.q) < self.q / 4 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod test_pp_generation {
    use super::Lwe;
    use crate::error::CryptoError;

    /// Ensures that valid parameters are accepted.
    #[test]
    fn valid() {
        assert!(Lwe::new(10, 20, 97, 2).is_ok());
        assert!(Lwe::new(1, 1, 1, 0).is_ok());
        assert!(Lwe::new(230, 5313, u64::MAX, 1 << 20).is_ok());
        assert!(Lwe::new(10, 20, u64::MAX, 1 << 63).is_ok());
        assert!(Lwe::new(10, 20, u64::MAX, u64::MAX - 1).is_ok());
    }

    /// Ensures that non-positive dimensions or moduli are rejected.
    #[test]
    fn invalid_zero() {
        assert!(matches!(
            Lwe::new(0, 20, 97, 2),
            Err(CryptoError::InvalidParameter(_))
        ));
        assert!(Lwe::new(10, 0, 97, 2).is_err());
        assert!(Lwe::new(10, 20, 0, 0).is_err());
    }

    /// Ensures that error bounds not below `q` are rejected.
    #[test]
    fn invalid_bound() {
        assert!(Lwe::new(10, 20, 97, 97).is_err());
        assert!(Lwe::new(10, 20, 97, 200).is_err());
    }

    /// Checks the [`Default`] parameter choice.
    #[test]
    fn default() {
        let lwe = Lwe::default();

        assert_eq!(Lwe::new(10, 20, 97, 2).unwrap(), lwe);
        assert!(lwe.check_validity().is_ok());
        assert_eq!((10, 20, 97, 2), (lwe.n(), lwe.m(), lwe.q(), lwe.bound()));
    }

    /// Ensures that the worst-case noise is compared to `⌊q/4⌋`.
    #[test]
    fn correctness_check() {
        // 20 * 2 = 40 >= 24
        assert!(Lwe::default().check_correctness().is_err());
        // 20 * 2 = 40 < 41
        assert!(Lwe::new(10, 20, 167, 2).unwrap().check_correctness().is_ok());
        // 20 * 2 = 40 >= 40
        assert!(Lwe::new(10, 20, 163, 2).unwrap().check_correctness().is_err());
        assert!(Lwe::new(10, 20, 97, 0).unwrap().check_correctness().is_ok());
    }

    /// Ensures that parameters are loaded from JSON and validated.
    #[test]
    fn from_json() {
        let lwe = Lwe::from_json(r#"{"n": 16, "m": 32, "q": 257, "bound": 1}"#).unwrap();
        assert_eq!(Lwe::new(16, 32, 257, 1).unwrap(), lwe);

        assert!(matches!(
            Lwe::from_json(r#"{"n": 16, "m": 32, "q": 7, "bound": 7}"#),
            Err(CryptoError::InvalidParameter(_))
        ));
        assert!(matches!(
            Lwe::from_json(r#"{"n": 16, "m": 32}"#),
            Err(CryptoError::Serialization(_))
        ));
    }

    /// Ensures that serialized parameters can be loaded again.
    #[test]
    fn serialize() {
        let lwe = Lwe::new(12, 24, 193, 3).unwrap();

        let json = serde_json::to_string(&lwe).expect("Unable to create a json object");

        assert_eq!(lwe, Lwe::from_json(&json).unwrap());
    }

    /// Ensures that deserializing directly also validates the parameters.
    #[test]
    fn deserialize_invalid() {
        let invalid = [
            r#"{"n": 10, "m": 20, "q": 0, "bound": 0}"#,
            r#"{"n": 0, "m": 20, "q": 97, "bound": 2}"#,
            r#"{"n": 10, "m": 20, "q": 97, "bound": 97}"#,
        ];
        let valid = r#"{"n": 10, "m": 20, "q": 97, "bound": 2}"#;

        for json in invalid {
            assert!(serde_json::from_str::<Lwe>(json).is_err());
        }
        assert_eq!(Lwe::default(), serde_json::from_str::<Lwe>(valid).unwrap());
    }
}
