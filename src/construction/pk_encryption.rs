// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module provides the trait a struct should implement if it is an
//! instance of a bit-wise public key encryption scheme. Furthermore, it
//! contains cryptographic schemes implementing the `PKEncryption` trait and
//! functions encrypting whole messages bit by bit.
//!
//! The main references are listed in the following:
//! - \[1\] Regev, Oded (2009).
//! On lattices, learning with errors, random linear codes, and cryptography.
//! In: Journal of the ACM 6.
//! <https://dl.acm.org/doi/pdf/10.1145/1568318.1568324>
//! - \[2\] Peikert, Chris (2016).
//! A decade of lattice cryptography.
//! In: Theoretical Computer Science 10.4.
//! <https://web.eecs.umich.edu/~cpeikert/pubs/lattice-survey.pdf>

mod bitwise;
mod lwe;

pub use bitwise::{dec_bits, dec_text, enc_bits, enc_text, par_dec_bits, par_enc_bits};
pub use lwe::{Ciphertext, Lwe, PublicKey, SecretKey};

use crate::sample::random_source::RandomSource;

/// This trait should be implemented by every public key encryption scheme
/// encrypting a single bit per cipher.
///
/// All randomness is drawn from the explicitly provided [`RandomSource`].
/// Hence, fixing the source makes every operation reproducible.
pub trait PKEncryption {
    type PublicKey;
    type SecretKey;
    type Cipher;

    /// Generates a fresh key pair.
    fn gen(&self, rng: &mut impl RandomSource) -> (Self::PublicKey, Self::SecretKey);

    /// Encrypts `message mod 2` with fresh randomness drawn from `rng`.
    fn enc(&self, pk: &Self::PublicKey, message: u8, rng: &mut impl RandomSource) -> Self::Cipher;

    /// Decrypts `cipher` into a bit.
    fn dec(&self, sk: &Self::SecretKey, cipher: &Self::Cipher) -> u8;
}
