// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the error type [`CryptoError`] returned by all
//! fallible functions of this crate.

use thiserror::Error;

/// Errors that may occur.
///
/// A wrong bit returned by a decryption is not an error. It is an
/// inherent, rare event of the LWE scheme whose probability depends on the
/// chosen parameters.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Error that occurs when a parameter set is invalid, e.g. `n = 0`
    /// or `bound >= q`.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Error that occurs when a bit sequence can not be split into bytes.
    #[error("a bit sequence of length {0} is not a multiple of 8")]
    InvalidBitLength(usize),
    /// Error that occurs when a bit sequence contains a value other than `0` or `1`.
    #[error("entry {index} of the bit sequence is {value}, but only 0 and 1 are bits")]
    InvalidBit {
        /// Position of the invalid entry.
        index: usize,
        /// The invalid entry.
        value: u8,
    },
    /// Error that occurs when a character does not fit into a single byte.
    #[error("the character {0:?} can not be represented by a single byte")]
    UnrepresentableCharacter(char),
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("value {value} has no inverse element with the modulus {modulus}")]
    NoInverse {
        /// The value being inverted.
        value: u64,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when an RSA message does not fit below the modulus.
    #[error("the message is too large for the RSA modulus {modulus}")]
    MessageTooLarge {
        /// The RSA modulus `n`.
        modulus: u64,
    },
    /// Error that occurs when no non-trivial factorization could be found.
    #[error("no non-trivial factorization of {0} could be found")]
    FactoringFailed(u64),
    /// Error that occurs when (de-)serializing a JSON document fails.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
