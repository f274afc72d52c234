// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt::Debug;

use thiserror::Error;

use crate::container::Handle;

/// Rejected quadtree configuration.
///
/// Returned by [`QuadTree::new`](crate::QuadTree::new),
/// [`QuadTree::resize`](crate::QuadTree::resize) and the matching
/// [`Container`](crate::Container) operations before any tree state is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError<T: Debug> {
    /// The extent must have a strictly positive width and height.
    #[error("invalid extent: size {width:?} x {height:?} must be positive")]
    InvalidExtent {
        /// Offending width.
        width: T,
        /// Offending height.
        height: T,
    },

    /// The maximum depth is above [`MAX_DEPTH_LIMIT`](crate::MAX_DEPTH_LIMIT).
    #[error("max depth {depth} exceeds limit {limit}")]
    DepthTooLarge {
        /// Requested depth.
        depth: usize,
        /// Largest accepted depth.
        limit: usize,
    },
}

/// A [`Handle`] was used after the container it came from was cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("stale handle {handle:?}")]
pub struct StaleHandle {
    /// The rejected handle.
    pub handle: Handle,
}
