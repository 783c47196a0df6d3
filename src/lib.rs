// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides a bit-wise public key encryption scheme based on the
//! Learning With Errors (LWE) problem together with the modular arithmetic,
//! samplers, and encodings it is built from.
//!
//! For comparison, it contains textbook RSA and the classical reduction from
//! factoring to period finding, which breaks RSA once periods can be found
//! efficiently.
//!
//! All randomness is drawn from an explicitly provided
//! [`RandomSource`](sample::random_source::RandomSource), which makes every
//! operation reproducible for a fixed source.
//!
//! # Examples
//! ```
//! use pq_lwe::construction::pk_encryption::{Lwe, PKEncryption};
//! use pq_lwe::sample::random_source::ChaChaSource;
//! let mut rng = ChaChaSource::seed_from_u64(0);
//! let lwe = Lwe::new(16, 32, 257, 1).unwrap();
//!
//! let (pk, sk) = lwe.gen(&mut rng);
//! let cipher = lwe.enc(&pk, 1, &mut rng);
//!
//! assert_eq!(1, lwe.dec(&sk, &cipher));
//! ```

pub mod construction;
pub mod error;
pub mod primitive;
pub mod sample;
pub mod utils;
