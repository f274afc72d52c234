// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternative [`Backend`](crate::Backend) implementations.
//!
//! - `linear`: flat vector with linear scans. The brute-force baseline the
//!   quadtree is measured and tested against.

pub mod linear;
