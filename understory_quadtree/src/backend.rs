// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for range query strategies.

use alloc::vec::Vec;

use crate::types::{Rect, Scalar};

/// A bulk-loaded store of `(bounds, item)` pairs answering rectangle queries.
///
/// Implemented by [`QuadTree`](crate::QuadTree) and the
/// [`LinearScan`](crate::LinearScan) baseline so callers can swap strategies.
/// Both report an item when `bounds.overlaps(&query)`.
pub trait Backend<T: Scalar, I: Copy> {
    /// Insert an item with its bounds.
    fn insert(&mut self, bounds: Rect<T>, item: I);

    /// Append every item whose bounds overlap `query` to `out`.
    fn query_rect_into(&self, query: &Rect<T>, out: &mut Vec<I>);

    /// Remove every item.
    fn clear(&mut self);

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Whether no items are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
