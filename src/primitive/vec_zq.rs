// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the type [`VecZq`] of vectors over `Z_q`.

use super::{
    modular::{self, reduce},
    MatZq,
};
use crate::{
    error::CryptoError,
    sample::{
        distribution::uniform::{sample_binary, sample_uniform},
        random_source::RandomSource,
    },
};
use serde::{Deserialize, Serialize};

/// A vector over `Z_q` carrying its dimension and modulus.
///
/// Attributes:
/// - `entries`: holds the entries, each in `[0, modulus)`
/// - `modulus`: specifies the modulus `q`
///
/// Deserialization rejects a zero modulus and unreduced entries.
///
/// # Examples
/// ```
/// use pq_lwe::primitive::VecZq;
///
/// let vec_a = VecZq::new(vec![1, 2, 3], 7);
/// let vec_b = VecZq::new(vec![4, 5, 6], 7);
///
/// assert_eq!(4, vec_a.dot_product(&vec_b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVecZq")]
pub struct VecZq {
    entries: Vec<u64>,
    modulus: u64,
}

/// The unchecked serialized form of a [`VecZq`].
#[derive(Deserialize)]
struct RawVecZq {
    entries: Vec<u64>,
    modulus: u64,
}

impl TryFrom<RawVecZq> for VecZq {
    type Error = CryptoError;

    fn try_from(raw: RawVecZq) -> Result<Self, Self::Error> {
        if raw.modulus == 0 {
            return Err(CryptoError::InvalidParameter(String::from(
                "The modulus of a vector must be positive.",
            )));
        }
        if raw.entries.iter().any(|entry| *entry >= raw.modulus) {
            return Err(CryptoError::InvalidParameter(format!(
                "The entries of a vector must be reduced modulo {}.",
                raw.modulus
            )));
        }

        Ok(Self {
            entries: raw.entries,
            modulus: raw.modulus,
        })
    }
}

impl VecZq {
    /// Creates a new [`VecZq`] and reduces all `entries` modulo `modulus`.
    ///
    /// # Panics ...
    /// - if `modulus == 0`.
    pub fn new(entries: Vec<u64>, modulus: u64) -> Self {
        assert!(modulus > 0, "the modulus must be positive");
        let entries = entries.into_iter().map(|entry| entry % modulus).collect();
        Self { entries, modulus }
    }

    /// Creates the zero vector of dimension `length`.
    pub fn zero(length: usize, modulus: u64) -> Self {
        Self::new(vec![0; length], modulus)
    }

    /// Samples a vector of dimension `length` with entries chosen
    /// uniformly at random from `[0, modulus)`.
    pub fn sample_uniform(length: usize, modulus: u64, rng: &mut impl RandomSource) -> Self {
        Self::new(sample_uniform(length, modulus, rng), modulus)
    }

    /// Samples a vector of dimension `length` with entries chosen
    /// uniformly at random from `{0, 1}`.
    pub fn sample_binary(length: usize, modulus: u64, rng: &mut impl RandomSource) -> Self {
        Self::new(sample_binary(length, rng), modulus)
    }

    /// Returns the dimension of the vector.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vector has dimension `0`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the modulus `q` of the vector.
    pub fn get_mod(&self) -> u64 {
        self.modulus
    }

    /// Returns the entries of the vector.
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// Returns the entry at position `index`.
    ///
    /// # Panics ...
    /// - if `index` is out of bounds.
    pub fn get_entry(&self, index: usize) -> u64 {
        self.entries[index]
    }

    /// Computes the inner product `self^t * other mod q`.
    ///
    /// # Panics ...
    /// - if the dimensions or moduli of both vectors differ.
    pub fn dot_product(&self, other: &Self) -> u64 {
        assert_eq!(self.modulus, other.modulus, "the moduli do not match");
        modular::dot(&self.entries, &other.entries, self.modulus)
    }

    /// Computes the row vector times matrix product `self^t * matrix mod q`.
    ///
    /// Parameters:
    /// - `matrix`: specifies a matrix with `self.len()` rows
    ///
    /// Returns a vector of dimension `matrix.get_num_columns()`.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::primitive::{MatZq, VecZq};
    ///
    /// let mat = MatZq::new(2, 3, vec![1, 2, 3, 4, 5, 6], 97);
    /// let vec = VecZq::new(vec![1, 1], 97);
    ///
    /// assert_eq!(&[5, 7, 9], vec.mul_mat(&mat).entries());
    /// ```
    ///
    /// # Panics ...
    /// - if the number of rows of `matrix` does not match `self.len()`.
    /// - if the moduli differ.
    pub fn mul_mat(&self, matrix: &MatZq) -> Self {
        assert_eq!(
            self.len(),
            matrix.get_num_rows(),
            "the dimension of the vector does not match the number of rows"
        );
        assert_eq!(self.modulus, matrix.get_mod(), "the moduli do not match");

        let q = self.modulus as u128;
        let mut acc = vec![0u128; matrix.get_num_columns()];
        for (row, &factor) in self.entries.iter().enumerate() {
            if factor == 0 {
                continue;
            }
            for (sum, &entry) in acc.iter_mut().zip(matrix.row(row)) {
                *sum = (*sum + factor as u128 * entry as u128) % q;
            }
        }

        Self {
            entries: acc.into_iter().map(|sum| sum as u64).collect(),
            modulus: self.modulus,
        }
    }

    /// Adds a vector of signed values in `[-q, q]` entrywise and reduces the result.
    ///
    /// # Panics ...
    /// - if `other` does not have dimension `self.len()`.
    pub fn add_signed(&self, other: &[i128]) -> Self {
        assert_eq!(self.len(), other.len(), "the dimensions do not match");
        let entries = self
            .entries
            .iter()
            .zip(other)
            .map(|(&x, &y)| reduce(x as i128 + y, self.modulus))
            .collect();
        Self {
            entries,
            modulus: self.modulus,
        }
    }
}
