// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains textbook RSA over moduli fitting into an [`u64`].
//!
//! Textbook RSA is deterministic and insecure. It is contained as the
//! classical counterpart, which is broken by factoring the modulus, see
//! [`break_rsa`](super::factoring::break_rsa).

use crate::{
    error::CryptoError,
    primitive::modular::pow_mod,
    utils::number_theory::{is_prime, modular_inverse},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// This struct stores a textbook RSA key pair derived from two primes.
///
/// Attributes:
/// - `n`: specifies the modulus `n = p * q`
/// - `e`: specifies the public exponent
/// - `d`: specifies the secret exponent `d = e^{-1} mod (p-1)(q-1)`
///
/// # Examples
/// ```
/// use pq_lwe::construction::rsa::Rsa;
/// let rsa = Rsa::new(61, 53, 17).unwrap();
/// let (pk, sk) = rsa.gen();
///
/// let cipher = pk.encrypt("A").unwrap();
///
/// assert_eq!(2790, cipher);
/// assert_eq!("A", sk.decrypt(cipher));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rsa {
    n: u64,
    e: u64,
    d: u64,
}

impl Rsa {
    /// Derives a textbook RSA key pair from the primes `p` and `q` and the
    /// public exponent `e`.
    ///
    /// Parameters:
    /// - `p`: specifies the first prime
    /// - `q`: specifies the second prime, which has to differ from `p`
    /// - `e`: specifies the public exponent in `(1, (p-1)(q-1))`
    ///
    /// Returns the key pair or a [`CryptoError`] if the parameters are invalid.
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type [`InvalidParameter`](CryptoError::InvalidParameter)
    ///   if `p` or `q` is not prime, `p == q`, `p * q` does not fit into an [`u64`],
    ///   or `e` is not in `(1, (p-1)(q-1))`.
    /// - Returns a [`CryptoError`] of type [`NoInverse`](CryptoError::NoInverse)
    ///   if `e` is not coprime to `(p-1)(q-1)`.
    pub fn new(p: u64, q: u64, e: u64) -> Result<Self, CryptoError> {
        if !is_prime(p) || !is_prime(q) {
            return Err(CryptoError::InvalidParameter(String::from(
                "p and q must be prime.",
            )));
        }
        if p == q {
            return Err(CryptoError::InvalidParameter(String::from(
                "p and q must be distinct.",
            )));
        }
        let n = p.checked_mul(q).ok_or_else(|| {
            CryptoError::InvalidParameter(String::from("p * q must fit into an u64."))
        })?;
        let phi = (p - 1) * (q - 1);
        if e <= 1 || e >= phi {
            return Err(CryptoError::InvalidParameter(format!(
                "e must be chosen in (1, {phi})."
            )));
        }

        let d = modular_inverse(e, phi)?;

        Ok(Self { n, e, d })
    }

    /// Splits the key pair into the public key `(e, n)` and the secret key `(d, n)`.
    pub fn gen(&self) -> (RsaPublicKey, RsaSecretKey) {
        (
            RsaPublicKey {
                e: self.e,
                n: self.n,
            },
            RsaSecretKey {
                d: self.d,
                n: self.n,
            },
        )
    }
}

impl Default for Rsa {
    /// Initializes the key pair for `p = 61`, `q = 53`, and `e = 17`,
    /// i.e. `n = 3233` and `d = 2753`.
    fn default() -> Self {
        Self {
            n: 3233,
            e: 17,
            d: 2753,
        }
    }
}

impl fmt::Debug for Rsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rsa")
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

/// The public key `(e, n)` of textbook RSA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRsaPublicKey")]
pub struct RsaPublicKey {
    e: u64,
    n: u64,
}

#[derive(Deserialize)]
struct RawRsaPublicKey {
    e: u64,
    n: u64,
}

impl TryFrom<RawRsaPublicKey> for RsaPublicKey {
    type Error = CryptoError;

    fn try_from(raw: RawRsaPublicKey) -> Result<Self, Self::Error> {
        Self::new(raw.e, raw.n)
    }
}

impl RsaPublicKey {
    /// Creates a public key from its exponent `e` and modulus `n`.
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type [`InvalidParameter`](CryptoError::InvalidParameter)
    ///   if `n < 2`.
    pub fn new(e: u64, n: u64) -> Result<Self, CryptoError> {
        check_modulus(n)?;
        Ok(Self { e, n })
    }

    /// Returns the public exponent `e`.
    pub fn e(&self) -> u64 {
        self.e
    }

    /// Returns the modulus `n`.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Encrypts `message` by computing `message^e mod n`, where `message`
    /// is read as a big-endian integer in base `256`.
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type
    ///   [`UnrepresentableCharacter`](CryptoError::UnrepresentableCharacter)
    ///   if a character can not be represented by a single byte.
    /// - Returns a [`CryptoError`] of type [`MessageTooLarge`](CryptoError::MessageTooLarge)
    ///   if the encoded message is not smaller than `n`.
    pub fn encrypt(&self, message: &str) -> Result<u64, CryptoError> {
        let m = text_to_int(message, self.n)?;
        Ok(pow_mod(m, self.e, self.n))
    }
}

/// The secret key `(d, n)` of textbook RSA.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RsaSecretKey {
    d: u64,
    n: u64,
}

impl RsaSecretKey {
    /// Creates a secret key from its exponent `d` and modulus `n`.
    ///
    /// # Errors and Failures
    /// - Returns a [`CryptoError`] of type [`InvalidParameter`](CryptoError::InvalidParameter)
    ///   if `n < 2`.
    pub fn new(d: u64, n: u64) -> Result<Self, CryptoError> {
        check_modulus(n)?;
        Ok(Self { d, n })
    }

    /// Decrypts `cipher` by computing `cipher^d mod n` and reading the
    /// result as a big-endian text in base `256`.
    pub fn decrypt(&self, cipher: u64) -> String {
        int_to_text(pow_mod(cipher, self.d, self.n))
    }
}

impl fmt::Debug for RsaSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSecretKey")
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

fn check_modulus(n: u64) -> Result<(), CryptoError> {
    if n < 2 {
        return Err(CryptoError::InvalidParameter(format!(
            "The RSA modulus must be at least 2, but is {n}."
        )));
    }
    Ok(())
}

/// Reads `text` as a big-endian integer in base `256`, which has to be
/// smaller than `modulus`.
fn text_to_int(text: &str, modulus: u64) -> Result<u64, CryptoError> {
    let mut value = 0u64;
    for c in text.chars() {
        let byte = u8::try_from(c).map_err(|_| CryptoError::UnrepresentableCharacter(c))?;
        value = value
            .checked_mul(256)
            .and_then(|value| value.checked_add(byte as u64))
            .ok_or(CryptoError::MessageTooLarge { modulus })?;
    }
    if value >= modulus {
        return Err(CryptoError::MessageTooLarge { modulus });
    }
    Ok(value)
}

/// Writes `value` as text of its base `256` digits, most-significant first.
fn int_to_text(mut value: u64) -> String {
    let mut bytes = Vec::new();
    while value > 0 {
        bytes.push((value % 256) as u8);
        value /= 256;
    }
    bytes.into_iter().rev().map(char::from).collect()
}

#[cfg(test)]
mod test_rsa {
    use super::{int_to_text, text_to_int, Rsa, RsaPublicKey, RsaSecretKey};
    use crate::error::CryptoError;

    /// Checks the key derivation for the default primes.
    #[test]
    fn default_keys() {
        assert_eq!(Rsa::default(), Rsa::new(61, 53, 17).unwrap());
    }

    /// Checks the textbook example `65^17 mod 3233 = 2790`.
    #[test]
    fn known_cipher() {
        let (pk, sk) = Rsa::default().gen();

        let cipher = pk.encrypt("A").unwrap();

        assert_eq!(2790, cipher);
        assert_eq!("A", sk.decrypt(cipher));
        assert_eq!((17, 3233), (pk.e(), pk.n()));
    }

    /// Ensures that multi-character messages below the modulus survive a cycle.
    #[test]
    fn cycle_larger_modulus() {
        // 65521 and 65519 are prime
        let (pk, sk) = Rsa::new(65521, 65519, 65537).unwrap().gen();

        for message in ["Hi", "RSA", "\u{ff}\u{ff}\u{ff}"] {
            let cipher = pk.encrypt(message).unwrap();
            assert_eq!(message, sk.decrypt(cipher));
        }
    }

    /// Ensures that messages not below the modulus are rejected.
    #[test]
    fn message_too_large() {
        let (pk, _) = Rsa::default().gen();

        assert!(matches!(
            pk.encrypt("AB"),
            Err(CryptoError::MessageTooLarge { modulus: 3233 })
        ));
        assert!(pk.encrypt("more than eight bytes").is_err());
    }

    /// Ensures that invalid primes or exponents are rejected.
    #[test]
    fn invalid_parameters() {
        assert!(matches!(
            Rsa::new(60, 53, 17),
            Err(CryptoError::InvalidParameter(_))
        ));
        assert!(Rsa::new(61, 61, 17).is_err());
        assert!(Rsa::new(61, 53, 1).is_err());
        assert!(Rsa::new(61, 53, 3120).is_err());
        assert!(Rsa::new(4_294_967_311, 4_294_967_357, 17).is_err());
    }

    /// Ensures that an exponent sharing a factor with `phi` has no inverse.
    #[test]
    fn exponent_not_coprime() {
        // phi = 60 * 52 = 3120 = 2^4 * 3 * 5 * 13
        assert!(matches!(
            Rsa::new(61, 53, 13),
            Err(CryptoError::NoInverse {
                value: 13,
                modulus: 3120
            })
        ));
    }

    /// Ensures that keys with a modulus below 2 are rejected.
    #[test]
    fn degenerate_modulus() {
        for n in [0, 1] {
            assert!(matches!(
                RsaPublicKey::new(17, n),
                Err(CryptoError::InvalidParameter(_))
            ));
            assert!(matches!(
                RsaSecretKey::new(2753, n),
                Err(CryptoError::InvalidParameter(_))
            ));
        }
        assert_eq!(
            Rsa::default().gen().1,
            RsaSecretKey::new(2753, 3233).unwrap()
        );
    }

    /// Ensures that deserialized public keys are validated.
    #[test]
    fn deserialize_public_key() {
        let (pk, _) = Rsa::default().gen();
        let json = serde_json::to_string(&pk).expect("Unable to create a json object");

        assert_eq!(pk, serde_json::from_str::<RsaPublicKey>(&json).unwrap());
        assert!(serde_json::from_str::<RsaPublicKey>(r#"{"e": 17, "n": 0}"#).is_err());
    }

    /// Checks the conversion between text and integers.
    #[test]
    fn text_int_conversion() {
        assert_eq!(65, text_to_int("A", 3233).unwrap());
        assert_eq!(0x4142, text_to_int("AB", u64::MAX).unwrap());
        assert_eq!(0, text_to_int("", 2).unwrap());
        assert_eq!("AB", int_to_text(0x4142));
        assert_eq!("", int_to_text(0));
    }

    /// Ensures that the secret exponent is not revealed by debug output.
    #[test]
    fn secret_redacted() {
        let (_, sk) = Rsa::default().gen();

        assert_eq!("RsaSecretKey { n: 3233, .. }", format!("{sk:?}"));
        assert_eq!("Rsa { n: 3233, e: 17, .. }", format!("{:?}", Rsa::default()));
    }
}
