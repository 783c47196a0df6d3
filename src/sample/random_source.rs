// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the [`RandomSource`] trait, which every function
//! consuming randomness takes as an explicit parameter, and its
//! implementations.
//!
//! - [`ChaChaSource`] draws from a seedable `ChaCha20` stream cipher.
//! - [`FixedSequence`] replays a fixed list of values, e.g. for tests.
//! - [`Recording`] wraps another source and records its bounded draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// This trait should be implemented by every source of randomness
/// consumed by the constructions of this crate.
///
/// Implementations must produce fresh values on every call. Replaying
/// values across two encryptions breaks the secrecy of the scheme.
pub trait RandomSource {
    /// Draws an integer uniformly at random from `[0, upper)`.
    ///
    /// # Panics ...
    /// - if `upper == 0`.
    fn uniform(&mut self, upper: u64) -> u64;

    /// Draws an integer uniformly at random from `[-bound, bound]`.
    fn bounded(&mut self, bound: u64) -> i128;

    /// Draws a bit uniformly at random.
    fn bit(&mut self) -> u64 {
        self.uniform(2)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform(&mut self, upper: u64) -> u64 {
        (**self).uniform(upper)
    }

    fn bounded(&mut self, bound: u64) -> i128 {
        (**self).bounded(bound)
    }

    fn bit(&mut self) -> u64 {
        (**self).bit()
    }
}

/// A [`RandomSource`] backed by [`ChaCha20Rng`].
///
/// # Examples
/// ```
/// use pq_lwe::sample::random_source::{ChaChaSource, RandomSource};
///
/// let mut rng = ChaChaSource::seed_from_u64(42);
/// let value = rng.uniform(97);
///
/// assert!(value < 97);
/// ```
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha20Rng,
}

impl ChaChaSource {
    /// Seeds a new source from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Seeds a new source deterministically, e.g. for reproducible tests.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Creates the source for stream `stream` of the key derived from `seed`.
    ///
    /// Different streams of the same seed yield independent,
    /// non-overlapping sequences. This allows to hand out one source per
    /// thread without any synchronization.
    ///
    /// # Examples
    /// ```
    /// use pq_lwe::sample::random_source::{ChaChaSource, RandomSource};
    ///
    /// let mut first = ChaChaSource::from_stream(7, 0);
    /// let mut second = ChaChaSource::from_stream(7, 1);
    ///
    /// let a: Vec<u64> = (0..8).map(|_| first.uniform(u64::MAX)).collect();
    /// let b: Vec<u64> = (0..8).map(|_| second.uniform(u64::MAX)).collect();
    /// assert_ne!(a, b);
    /// ```
    pub fn from_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { rng }
    }
}

impl RandomSource for ChaChaSource {
    fn uniform(&mut self, upper: u64) -> u64 {
        self.rng.gen_range(0..upper)
    }

    fn bounded(&mut self, bound: u64) -> i128 {
        let bound = bound as i128;
        self.rng.gen_range(-bound..=bound)
    }
}

/// A deterministic [`RandomSource`] replaying a fixed list of values.
///
/// The values are returned cyclically. A drawn value `x` is mapped to
/// `x mod upper` for [`RandomSource::uniform`] and to
/// `x mod (2 * bound + 1) - bound` for [`RandomSource::bounded`].
/// Hence, choosing values below the requested range returns them
/// unchanged for `uniform`.
///
/// **WARNING:** This source is predictable and only meant to reproduce
/// exact computations in tests.
///
/// # Examples
/// ```
/// use pq_lwe::sample::random_source::{FixedSequence, RandomSource};
///
/// let mut rng = FixedSequence::new(vec![5, 1, 2]);
///
/// assert_eq!(5, rng.uniform(97));
/// assert_eq!(1, rng.bit());
/// assert_eq!(0, rng.bounded(2));
/// ```
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<u64>,
    position: usize,
}

impl FixedSequence {
    /// Creates a new [`FixedSequence`] replaying `values`.
    ///
    /// # Panics ...
    /// - if `values` is empty.
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "a fixed sequence needs at least one value");
        Self {
            values,
            position: 0,
        }
    }

    fn next_value(&mut self) -> u64 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}

impl RandomSource for FixedSequence {
    fn uniform(&mut self, upper: u64) -> u64 {
        self.next_value() % upper
    }

    fn bounded(&mut self, bound: u64) -> i128 {
        let width = 2 * bound as u128 + 1;
        (self.next_value() as u128 % width) as i128 - bound as i128
    }
}

/// A [`RandomSource`] wrapping another source, which records every value
/// returned by [`RandomSource::bounded`].
///
/// During key generation the only bounded draws are the entries of the
/// error vector, which is otherwise discarded. This makes the relation
/// `b = A * s + e` verifiable.
///
/// # Examples
/// ```
/// use pq_lwe::sample::random_source::{ChaChaSource, RandomSource, Recording};
///
/// let mut rng = Recording::new(ChaChaSource::seed_from_u64(1));
/// let e = rng.bounded(2);
///
/// assert_eq!(&[e], rng.bounded_draws());
/// ```
#[derive(Debug, Clone)]
pub struct Recording<S> {
    inner: S,
    bounded_draws: Vec<i128>,
}

impl<S: RandomSource> Recording<S> {
    /// Wraps `inner` with an empty record.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            bounded_draws: Vec::new(),
        }
    }

    /// Returns all bounded values drawn so far in order.
    pub fn bounded_draws(&self) -> &[i128] {
        &self.bounded_draws
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RandomSource> RandomSource for Recording<S> {
    fn uniform(&mut self, upper: u64) -> u64 {
        self.inner.uniform(upper)
    }

    fn bounded(&mut self, bound: u64) -> i128 {
        let value = self.inner.bounded(bound);
        self.bounded_draws.push(value);
        value
    }

    fn bit(&mut self) -> u64 {
        self.inner.bit()
    }
}
