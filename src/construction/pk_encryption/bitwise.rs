// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains functions encrypting and decrypting messages of
//! several bits with any bit-wise [`PKEncryption`] scheme.
//!
//! Every bit is encrypted independently with fresh randomness. The ciphers
//! are not linked to each other, i.e. there is no chaining nor authentication.

use super::PKEncryption;
use crate::{
    error::CryptoError,
    sample::random_source::{ChaChaSource, RandomSource},
    utils::bit_codec::{bits_to_text, text_to_bits},
};
use rayon::prelude::*;
use tracing::debug;

/// Encrypts every bit of `bits` separately and in order.
///
/// Parameters:
/// - `scheme`: specifies the bit-wise encryption scheme
/// - `pk`: specifies the public key
/// - `bits`: specifies the bits to encrypt
/// - `rng`: specifies the source of randomness shared by all encryptions
///
/// Returns one cipher per bit.
pub fn enc_bits<S: PKEncryption>(
    scheme: &S,
    pk: &S::PublicKey,
    bits: &[u8],
    rng: &mut impl RandomSource,
) -> Vec<S::Cipher> {
    bits.iter().map(|bit| scheme.enc(pk, *bit, rng)).collect()
}

/// Decrypts every cipher of `ciphers` separately and in order.
///
/// Returns one bit per cipher.
pub fn dec_bits<S: PKEncryption>(
    scheme: &S,
    sk: &S::SecretKey,
    ciphers: &[S::Cipher],
) -> Vec<u8> {
    ciphers.iter().map(|cipher| scheme.dec(sk, cipher)).collect()
}

/// Encrypts `text` bit by bit, `8` bits per character.
///
/// Parameters:
/// - `scheme`: specifies the bit-wise encryption scheme
/// - `pk`: specifies the public key
/// - `text`: specifies the text, whose characters are all at most `U+00FF`
/// - `rng`: specifies the source of randomness
///
/// Returns `8 * text.chars().count()` ciphers or a [`CryptoError`] if
/// `text` can not be encoded.
///
/// # Examples
/// ```
/// use pq_lwe::construction::pk_encryption::{dec_text, enc_text, Lwe, PKEncryption};
/// use pq_lwe::sample::random_source::ChaChaSource;
/// let mut rng = ChaChaSource::seed_from_u64(7);
/// let lwe = Lwe::default();
/// let (pk, sk) = lwe.gen(&mut rng);
///
/// let ciphers = enc_text(&lwe, &pk, "A", &mut rng).unwrap();
/// let text = dec_text(&lwe, &sk, &ciphers).unwrap();
///
/// assert_eq!(8, ciphers.len());
/// assert_eq!("A", text);
/// ```
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type
///   [`UnrepresentableCharacter`](CryptoError::UnrepresentableCharacter)
///   if a character can not be represented by a single byte.
pub fn enc_text<S: PKEncryption>(
    scheme: &S,
    pk: &S::PublicKey,
    text: &str,
    rng: &mut impl RandomSource,
) -> Result<Vec<S::Cipher>, CryptoError> {
    let bits = text_to_bits(text)?;
    Ok(enc_bits(scheme, pk, &bits, rng))
}

/// Decrypts `ciphers` bit by bit and decodes the bits as text.
///
/// A wrongly decrypted bit is not detected and changes a character.
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type [`InvalidBitLength`](CryptoError::InvalidBitLength)
///   if the number of ciphers is not a multiple of `8`.
pub fn dec_text<S: PKEncryption>(
    scheme: &S,
    sk: &S::SecretKey,
    ciphers: &[S::Cipher],
) -> Result<String, CryptoError> {
    bits_to_text(&dec_bits(scheme, sk, ciphers))
}

/// Encrypts every bit of `bits` in parallel.
///
/// A single seed is drawn from `rng`. The `i`-th bit is encrypted with
/// randomness from the `i`-th stream of a [`ChaChaSource`] seeded with it,
/// such that no two encryptions share randomness and the output does not
/// depend on the scheduling of the threads.
///
/// Parameters:
/// - `scheme`: specifies the bit-wise encryption scheme
/// - `pk`: specifies the public key
/// - `bits`: specifies the bits to encrypt
/// - `rng`: specifies the source of the seed
///
/// Returns one cipher per bit.
///
/// # Examples
/// ```
/// use pq_lwe::construction::pk_encryption::{par_dec_bits, par_enc_bits, Lwe, PKEncryption};
/// use pq_lwe::sample::random_source::ChaChaSource;
/// let mut rng = ChaChaSource::seed_from_u64(3);
/// let lwe = Lwe::new(10, 20, 167, 2).unwrap();
/// let (pk, sk) = lwe.gen(&mut rng);
/// let bits = vec![1, 0, 1, 1, 0, 0, 1, 0];
///
/// let ciphers = par_enc_bits(&lwe, &pk, &bits, &mut rng);
///
/// assert_eq!(bits, par_dec_bits(&lwe, &sk, &ciphers));
/// ```
pub fn par_enc_bits<S>(
    scheme: &S,
    pk: &S::PublicKey,
    bits: &[u8],
    rng: &mut impl RandomSource,
) -> Vec<S::Cipher>
where
    S: PKEncryption + Sync,
    S::PublicKey: Sync,
    S::Cipher: Send,
{
    let seed = rng.uniform(u64::MAX);
    debug!(bits = bits.len(), "encrypting bits in parallel");

    bits.par_iter()
        .enumerate()
        .map(|(i, bit)| {
            let mut stream = ChaChaSource::from_stream(seed, i as u64);
            scheme.enc(pk, *bit, &mut stream)
        })
        .collect()
}

/// Decrypts every cipher of `ciphers` in parallel.
///
/// Returns one bit per cipher in the order of `ciphers`.
pub fn par_dec_bits<S>(scheme: &S, sk: &S::SecretKey, ciphers: &[S::Cipher]) -> Vec<u8>
where
    S: PKEncryption + Sync,
    S::SecretKey: Sync,
    S::Cipher: Sync,
{
    debug!(ciphers = ciphers.len(), "decrypting ciphers in parallel");

    ciphers
        .par_iter()
        .map(|cipher| scheme.dec(sk, cipher))
        .collect()
}
