// Copyright © 2024 The pq-lwe Authors
//
// This file is part of pq-lwe.
//
// pq-lwe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains anything related to drawing randomness. This includes
//! the injectable [`RandomSource`](random_source::RandomSource) and
//! distributions built on top of it.

pub mod distribution;
pub mod random_source;
