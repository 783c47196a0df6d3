// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains mathematical primitives that are useful for cryptographic
//! constructions/purposes, but themselves do not provide security guarantees like
//! confidentiality, integrity, ...
//!
//! This includes arithmetic over `Z_q` and vectors and matrices over `Z_q`.

mod mat_zq;
pub mod modular;
mod vec_zq;

pub use mat_zq::MatZq;
pub use vec_zq::VecZq;
