// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the cryptographic constructions of this crate.
//!
//! The post-quantum construction is built the same way as any further one
//! should be:
//!
//! 1. A trait that combines the common feature, e.g.
//! [`public key encryption`](pk_encryption::PKEncryption).
//! 2. Explicit implementations of the trait, e.g.
//! [`Lwe`](pk_encryption::Lwe).
//!
//! Next to it, [`rsa`] contains textbook RSA and [`factoring`] the classical
//! period-finding reduction breaking it.

pub mod factoring;
pub mod pk_encryption;
pub mod rsa;
