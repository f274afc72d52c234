// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a static, fixed-depth 2D quadtree for range queries.
//!
//! Understory Quadtree accelerates "which rectangles touch this rectangle?" over a large,
//! bulk-loaded set of axis-aligned rectangles.
//!
//! - Insert rectangles with user payloads, then query by intersecting rectangle.
//! - Payloads live in a [`Container`] and are addressed by generational [`Handle`]s;
//!   the tree itself only holds `(bounds, handle)` pairs.
//! - There is no per-item removal or update. [`Container::clear`] and [`Container::resize`]
//!   discard everything and invalidate every handle.
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Container, Rect};
//!
//! // Index a 100×100 world, at most 8 levels deep.
//! let mut objects: Container<f32, &str> = Container::new(Rect::new(0.0, 0.0, 100.0, 100.0), 8)?;
//! let tree = objects.insert("tree", Rect::new(10.0, 10.0, 5.0, 5.0));
//! let _rock = objects.insert("rock", Rect::new(80.0, 60.0, 4.0, 4.0));
//!
//! // Query the top-left quadrant.
//! let hits: Vec<_> = objects.search_values(&Rect::new(0.0, 0.0, 50.0, 50.0)).collect();
//! assert_eq!(hits, [(tree, &"tree")]);
//!
//! // Clearing invalidates handles.
//! objects.clear();
//! assert!(objects.try_get(tree).is_err());
//! # Ok::<(), understory_quadtree::ConfigError<f32>>(())
//! ```
//!
//! ## Placement
//!
//! Each rectangle is pushed down through the quadrants (top-left, top-right, bottom-left,
//! bottom-right) that strictly contain it, and stored at the first node where none does or
//! where the depth limit is reached. Rectangles that straddle a split stay at that level.
//!
//! ## Queries
//!
//! At every node the local bucket is tested item by item. For each child quadrant the query
//! is classified as covering it fully (the whole subtree is reported without tests),
//! overlapping it (recurse) or missing it (skip). Every match is reported exactly once.
//!
//! ## Choosing a backend
//!
//! - [`QuadTree`]: fixed-depth quadtree. Best when the set is loaded once and
//!   queried many times with windows much smaller than the extent.
//! - [`LinearScan`]: flat vector. The brute-force baseline; both implement [`Backend`].
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. NaN compares false everywhere.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod container;
pub mod error;
pub mod tree;
pub mod types;

pub use backend::Backend;
pub use backends::linear::LinearScan;
pub use container::{Container, Handle, Iter};
pub use error::{ConfigError, StaleHandle};
pub use tree::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, QuadTree, QuadTreeConfig, TreeStats};
pub use types::{Rect, Scalar};
