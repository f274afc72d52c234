// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scan backend. Tests every item against every query.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::{Rect, Scalar};

/// Brute-force baseline: a flat vector scanned on every query.
#[derive(Clone)]
pub struct LinearScan<T: Scalar, I: Copy> {
    entries: Vec<(Rect<T>, I)>,
}

impl<T: Scalar, I: Copy> LinearScan<T, I> {
    /// Create an empty scan list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty scan list with room for `n` items.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    /// Collect every item whose bounds overlap `query`.
    pub fn search(&self, query: &Rect<T>) -> Vec<I> {
        let mut out = Vec::new();
        self.query_rect_into(query, &mut out);
        out
    }
}

impl<T: Scalar, I: Copy> Default for LinearScan<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, I: Copy> Debug for LinearScan<T, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScan")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, I: Copy> Backend<T, I> for LinearScan<T, I> {
    fn insert(&mut self, bounds: Rect<T>, item: I) {
        self.entries.push((bounds, item));
    }

    fn query_rect_into(&self, query: &Rect<T>, out: &mut Vec<I>) {
        out.extend(
            self.entries
                .iter()
                .filter(|(b, _)| b.overlaps(query))
                .map(|&(_, item)| item),
        );
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_reports_overlapping_items() {
        let mut scan: LinearScan<f64, u32> = LinearScan::new();
        scan.insert(Rect::new(0.0, 0.0, 10.0, 10.0), 1);
        scan.insert(Rect::new(20.0, 20.0, 5.0, 5.0), 2);
        scan.insert(Rect::new(5.0, 5.0, 20.0, 20.0), 3);
        assert_eq!(scan.len(), 3);

        let mut hits = scan.search(&Rect::new(8.0, 8.0, 4.0, 4.0));
        hits.sort_unstable();
        assert_eq!(hits, [1, 3]);

        scan.clear();
        assert!(scan.is_empty());
        assert!(scan.search(&Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
    }
}
