// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the conversion between byte-oriented text and
//! sequences of bits.
//!
//! Every byte is encoded by `8` bits, the most-significant bit first.
//! Text is interpreted character-wise, where every character has to be
//! representable by a single byte, i.e. its code point is at most `U+00FF`.

use crate::error::CryptoError;

/// Converts bytes into a sequence of bits, most-significant bit first.
///
/// # Examples
/// ```
/// use pq_lwe::utils::bit_codec::bytes_to_bits;
///
/// assert_eq!(vec![0, 1, 0, 0, 0, 0, 0, 1], bytes_to_bits(b"A"));
/// ```
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// Converts a sequence of bits into bytes, most-significant bit first.
///
/// Parameters:
/// - `bits`: specifies the bits, whose length has to be a multiple of `8`
///
/// Returns the encoded bytes or a [`CryptoError`] if the sequence can not
/// be split into bytes.
///
/// # Examples
/// ```
/// use pq_lwe::utils::bit_codec::bits_to_bytes;
///
/// assert_eq!(vec![65], bits_to_bytes(&[0, 1, 0, 0, 0, 0, 0, 1]).unwrap());
/// ```
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type [`InvalidBitLength`](CryptoError::InvalidBitLength)
///   if the length of `bits` is not a multiple of `8`.
/// - Returns a [`CryptoError`] of type [`InvalidBit`](CryptoError::InvalidBit)
///   if an entry is neither `0` nor `1`.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if bits.len() % 8 != 0 {
        return Err(CryptoError::InvalidBitLength(bits.len()));
    }
    if let Some((index, &value)) = bits.iter().enumerate().find(|(_, &bit)| bit > 1) {
        return Err(CryptoError::InvalidBit { index, value });
    }

    Ok(bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
        .collect())
}

/// Converts text into a sequence of bits, `8` per character.
///
/// Parameters:
/// - `text`: specifies the text, whose characters are all at most `U+00FF`
///
/// Returns the bits of all characters in order or a [`CryptoError`]
/// if a character does not fit into a single byte.
///
/// # Examples
/// ```
/// use pq_lwe::utils::bit_codec::text_to_bits;
///
/// let bits = text_to_bits("A").unwrap();
///
/// assert_eq!(vec![0, 1, 0, 0, 0, 0, 0, 1], bits);
/// ```
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type
///   [`UnrepresentableCharacter`](CryptoError::UnrepresentableCharacter)
///   if a character can not be represented by a single byte.
pub fn text_to_bits(text: &str) -> Result<Vec<u8>, CryptoError> {
    let bytes = text
        .chars()
        .map(|c| u8::try_from(c).map_err(|_| CryptoError::UnrepresentableCharacter(c)))
        .collect::<Result<Vec<u8>, CryptoError>>()?;
    Ok(bytes_to_bits(&bytes))
}

/// Converts a sequence of bits into text, one character per `8` bits.
///
/// Parameters:
/// - `bits`: specifies the bits, whose length has to be a multiple of `8`
///
/// Returns the decoded text, where every byte is read as the character
/// with the same code point, or a [`CryptoError`] if the sequence can not
/// be split into bytes.
///
/// # Examples
/// ```
/// use pq_lwe::utils::bit_codec::{bits_to_text, text_to_bits};
///
/// let bits = text_to_bits("Hello!").unwrap();
///
/// assert_eq!("Hello!", bits_to_text(&bits).unwrap());
/// ```
///
/// # Errors and Failures
/// - Returns a [`CryptoError`] of type [`InvalidBitLength`](CryptoError::InvalidBitLength)
///   if the length of `bits` is not a multiple of `8`.
/// - Returns a [`CryptoError`] of type [`InvalidBit`](CryptoError::InvalidBit)
///   if an entry is neither `0` nor `1`.
pub fn bits_to_text(bits: &[u8]) -> Result<String, CryptoError> {
    Ok(bits_to_bytes(bits)?.into_iter().map(char::from).collect())
}


#[cfg(test)]
mod test_bits_to_text {
    use super::{bits_to_bytes, bits_to_text, text_to_bits};
    use crate::error::CryptoError;

    /// Ensures that text is restored after encoding it.
    #[test]
    fn round_trip() {
        let texts = ["", "A", "Hello, World!", "post-quantum", "\0\u{7f}\u{80}äöü\u{ff}"];

        for text in texts {
            let bits = text_to_bits(text).unwrap();
            assert_eq!(text, bits_to_text(&bits).unwrap());
        }
    }

    /// Ensures that every single byte value survives the round trip.
    #[test]
    fn all_bytes() {
        let text: String = (0..=255u8).map(char::from).collect();

        let bits = text_to_bits(&text).unwrap();

        assert_eq!(text, bits_to_text(&bits).unwrap());
    }

    /// Ensures that lengths which are no multiple of 8 are rejected.
    #[test]
    fn invalid_length() {
        for length in [1, 3, 7, 9, 15, 17] {
            let bits = vec![0; length];
            assert!(matches!(
                bits_to_text(&bits),
                Err(CryptoError::InvalidBitLength(l)) if l == length
            ));
        }
    }

    /// Ensures that entries other than bits are rejected.
    #[test]
    fn invalid_bit() {
        let bits = [0, 1, 0, 0, 0, 0, 2, 1];

        assert!(matches!(
            bits_to_bytes(&bits),
            Err(CryptoError::InvalidBit { index: 6, value: 2 })
        ));
    }
}
