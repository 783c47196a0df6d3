// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains functions drawing vectors of independent, uniformly
//! distributed entries from a [`RandomSource`].

use crate::sample::random_source::RandomSource;

/// Samples `length` entries uniformly at random from `[0, q)`.
///
/// Parameters:
/// - `length`: specifies the number of entries
/// - `q`: specifies the exclusive upper bound of each entry
/// - `rng`: specifies the source of randomness
///
/// Returns a vector of `length` entries in `[0, q)`.
///
/// # Examples
/// ```
/// use pq_lwe::sample::distribution::uniform::sample_uniform;
/// use pq_lwe::sample::random_source::ChaChaSource;
///
/// let mut rng = ChaChaSource::seed_from_u64(0);
/// let vec = sample_uniform(10, 97, &mut rng);
///
/// assert!(vec.iter().all(|entry| *entry < 97));
/// ```
///
/// # Panics ...
/// - if `q == 0`.
pub fn sample_uniform(length: usize, q: u64, rng: &mut impl RandomSource) -> Vec<u64> {
    (0..length).map(|_| rng.uniform(q)).collect()
}

/// Samples `length` bits uniformly at random.
///
/// Parameters:
/// - `length`: specifies the number of entries
/// - `rng`: specifies the source of randomness
///
/// Returns a vector of `length` entries in `{0, 1}`.
pub fn sample_binary(length: usize, rng: &mut impl RandomSource) -> Vec<u64> {
    (0..length).map(|_| rng.bit()).collect()
}

/// Samples `length` entries uniformly at random from `[-bound, bound]`.
///
/// Parameters:
/// - `length`: specifies the number of entries
/// - `bound`: specifies the largest absolute value of an entry
/// - `rng`: specifies the source of randomness
///
/// Returns a vector of `length` entries in `[-bound, bound]`.
///
/// # Examples
/// ```
/// use pq_lwe::sample::distribution::uniform::sample_bounded;
/// use pq_lwe::sample::random_source::ChaChaSource;
///
/// let mut rng = ChaChaSource::seed_from_u64(0);
/// let vec_e = sample_bounded(20, 2, &mut rng);
///
/// assert!(vec_e.iter().all(|entry| entry.abs() <= 2));
/// ```
pub fn sample_bounded(
    length: usize,
    bound: u64,
    rng: &mut impl RandomSource,
) -> Vec<i128> {
    (0..length).map(|_| rng.bounded(bound)).collect()
}

#[cfg(test)]
mod test_sample {
    use super::{sample_binary, sample_bounded, sample_uniform};
    use crate::sample::random_source::{ChaChaSource, FixedSequence};

    /// Ensures that the requested number of entries is drawn.
    #[test]
    fn correct_length() {
        let mut rng = ChaChaSource::seed_from_u64(3);

        assert_eq!(0, sample_uniform(0, 97, &mut rng).len());
        assert_eq!(13, sample_uniform(13, 97, &mut rng).len());
        assert_eq!(7, sample_binary(7, &mut rng).len());
        assert_eq!(20, sample_bounded(20, 2, &mut rng).len());
    }

    /// Ensures that binary vectors only contain bits and both of them.
    #[test]
    fn binary_range() {
        let mut rng = ChaChaSource::seed_from_u64(4);

        let vec = sample_binary(256, &mut rng);

        assert!(vec.iter().all(|bit| *bit <= 1));
        assert!(vec.contains(&0));
        assert!(vec.contains(&1));
    }

    /// Ensures that the draws are consumed in order.
    #[test]
    fn draw_order() {
        let mut rng = FixedSequence::new(vec![1, 2, 3, 4]);

        assert_eq!(vec![1, 2, 3], sample_uniform(3, 97, &mut rng));
        assert_eq!(vec![0], sample_binary(1, &mut rng));
    }
}
