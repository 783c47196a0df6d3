// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the type [`MatZq`] of matrices over `Z_q`.

use super::{modular, VecZq};
use crate::{
    error::CryptoError,
    sample::{distribution::uniform::sample_uniform, random_source::RandomSource},
};
use serde::{Deserialize, Serialize};

/// A matrix over `Z_q` carrying its dimensions and modulus.
///
/// Attributes:
/// - `num_rows`: number of rows
/// - `num_cols`: number of columns
/// - `entries`: holds the entries in row-major order, each in `[0, modulus)`
/// - `modulus`: specifies the modulus `q`
///
/// Deserialization checks the same invariants as [`MatZq::new`], but rejects
/// unreduced entries instead of reducing them.
///
/// # Examples
/// ```
/// use pq_lwe::primitive::{MatZq, VecZq};
///
/// let mat = MatZq::new(2, 2, vec![1, 2, 3, 4], 97);
/// let vec = VecZq::new(vec![1, 1], 97);
///
/// assert_eq!(&[3, 7], mat.mul_vec(&vec).entries());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatZq")]
pub struct MatZq {
    num_rows: usize,
    num_cols: usize,
    entries: Vec<u64>,
    modulus: u64,
}

/// The unchecked serialized form of a [`MatZq`].
#[derive(Deserialize)]
struct RawMatZq {
    num_rows: usize,
    num_cols: usize,
    entries: Vec<u64>,
    modulus: u64,
}

impl TryFrom<RawMatZq> for MatZq {
    type Error = CryptoError;

    fn try_from(raw: RawMatZq) -> Result<Self, Self::Error> {
        if raw.modulus == 0 {
            return Err(CryptoError::InvalidParameter(String::from(
                "The modulus of a matrix must be positive.",
            )));
        }
        if raw.num_rows.checked_mul(raw.num_cols) != Some(raw.entries.len()) {
            return Err(CryptoError::InvalidParameter(format!(
                "A {}x{} matrix can not hold {} entries.",
                raw.num_rows,
                raw.num_cols,
                raw.entries.len()
            )));
        }
        if raw.entries.iter().any(|entry| *entry >= raw.modulus) {
            return Err(CryptoError::InvalidParameter(format!(
                "The entries of a matrix must be reduced modulo {}.",
                raw.modulus
            )));
        }

        Ok(Self {
            num_rows: raw.num_rows,
            num_cols: raw.num_cols,
            entries: raw.entries,
            modulus: raw.modulus,
        })
    }
}

impl MatZq {
    /// Creates a new [`MatZq`] from its entries in row-major order and reduces
    /// them modulo `modulus`.
    ///
    /// # Panics ...
    /// - if `entries.len() != num_rows * num_cols`.
    /// - if `modulus == 0`.
    pub fn new(num_rows: usize, num_cols: usize, entries: Vec<u64>, modulus: u64) -> Self {
        assert!(modulus > 0, "the modulus must be positive");
        assert_eq!(
            num_rows * num_cols,
            entries.len(),
            "the number of entries does not match the dimensions"
        );
        let entries = entries.into_iter().map(|entry| entry % modulus).collect();
        Self {
            num_rows,
            num_cols,
            entries,
            modulus,
        }
    }

    /// Creates the `dimension x dimension` identity matrix.
    pub fn identity(dimension: usize, modulus: u64) -> Self {
        let mut entries = vec![0; dimension * dimension];
        for i in 0..dimension {
            entries[i * dimension + i] = 1;
        }
        Self::new(dimension, dimension, entries, modulus)
    }

    /// Samples a `num_rows x num_cols` matrix with entries chosen uniformly
    /// at random from `[0, modulus)`. The entries are drawn row by row.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::primitive::MatZq;
    /// use pq_lwe::sample::random_source::ChaChaSource;
    ///
    /// let mut rng = ChaChaSource::seed_from_u64(0);
    /// let mat_a = MatZq::sample_uniform(20, 10, 97, &mut rng);
    ///
    /// assert_eq!(20, mat_a.get_num_rows());
    /// assert_eq!(10, mat_a.get_num_columns());
    /// ```
    pub fn sample_uniform(
        num_rows: usize,
        num_cols: usize,
        modulus: u64,
        rng: &mut impl RandomSource,
    ) -> Self {
        let entries = sample_uniform(num_rows * num_cols, modulus, rng);
        Self::new(num_rows, num_cols, entries, modulus)
    }

    /// Returns the number of rows of the matrix.
    pub fn get_num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns of the matrix.
    pub fn get_num_columns(&self) -> usize {
        self.num_cols
    }

    /// Returns the modulus `q` of the matrix.
    pub fn get_mod(&self) -> u64 {
        self.modulus
    }

    /// Returns the entry in row `row` and column `column`.
    ///
    /// # Panics ...
    /// - if `row` or `column` is out of bounds.
    pub fn get_entry(&self, row: usize, column: usize) -> u64 {
        assert!(column < self.num_cols, "the column index is out of bounds");
        self.entries[row * self.num_cols + column]
    }

    /// Returns the row with index `row`.
    ///
    /// # Panics ...
    /// - if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[u64] {
        &self.entries[row * self.num_cols..(row + 1) * self.num_cols]
    }

    /// Computes the matrix times column vector product `self * vector mod q`.
    ///
    /// Parameters:
    /// - `vector`: specifies a vector of dimension `self.get_num_columns()`
    ///
    /// Returns a vector of dimension `self.get_num_rows()`.
    ///
    /// # Panics ...
    /// - if the dimension of `vector` does not match the number of columns.
    /// - if the moduli differ.
    pub fn mul_vec(&self, vector: &VecZq) -> VecZq {
        assert_eq!(
            self.num_cols,
            vector.len(),
            "the number of columns does not match the dimension of the vector"
        );
        assert_eq!(self.modulus, vector.get_mod(), "the moduli do not match");

        let entries = (0..self.num_rows)
            .map(|row| modular::dot(self.row(row), vector.entries(), self.modulus))
            .collect();
        VecZq::new(entries, self.modulus)
    }
}
