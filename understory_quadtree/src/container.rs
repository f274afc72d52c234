// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value storage addressed by stable handles, spatially indexed by a [`QuadTree`].

use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::Enumerate;
use core::slice;

use log::debug;

use crate::error::{ConfigError, StaleHandle};
use crate::tree::{QuadTree, QuadTreeConfig};
use crate::types::{Rect, Scalar};

/// Stable reference to a value stored in a [`Container`].
///
/// A handle is a slot index plus the container generation it was issued in.
///
/// ## Semantics
///
/// - Slots are assigned in insertion order and never reused within a generation.
/// - [`Container::clear`] and [`Container::resize`] start a new generation;
///   every handle issued before is stale from then on.
/// - Stale handles never resolve: [`Container::get`] returns `None` and
///   [`Container::try_get`] returns [`StaleHandle`].
///
/// `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u32, u32);

impl Handle {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Handles use 32-bit slot indices by design."
    )]
    const fn new(slot: usize, generation: u32) -> Self {
        Self(slot as u32, generation)
    }

    const fn slot(self) -> usize {
        self.0 as usize
    }

    const fn generation(self) -> u32 {
        self.1
    }
}

#[derive(Clone, Debug)]
struct Entry<T, V> {
    bounds: Rect<T>,
    value: V,
}

/// Append-only storage of values plus a [`QuadTree`] over their handles.
///
/// The tree holds `(bounds, Handle)` pairs only, so payloads are never copied
/// into nodes and searches hand back references into this container. Values
/// are kept in insertion order and can only be removed all at once.
pub struct Container<T: Scalar, V> {
    generation: u32,
    storage: Vec<Entry<T, V>>,
    index: QuadTree<T, Handle>,
}

impl<T: Scalar, V> Container<T, V> {
    /// Create an empty container indexed over `extent`.
    pub fn new(extent: Rect<T>, max_depth: usize) -> Result<Self, ConfigError<T>> {
        Self::with_config(QuadTreeConfig::new(extent, max_depth))
    }

    /// Create an empty container from a quadtree configuration.
    pub fn with_config(config: QuadTreeConfig<T>) -> Result<Self, ConfigError<T>> {
        Ok(Self {
            generation: 1,
            storage: Vec::new(),
            index: QuadTree::with_config(config)?,
        })
    }

    /// Reserve space for at least `n` more values.
    pub fn reserve(&mut self, n: usize) {
        self.storage.reserve(n);
    }

    /// Store `value` under `bounds` and return its handle.
    ///
    /// Previously issued handles stay valid.
    pub fn insert(&mut self, value: V, bounds: Rect<T>) -> Handle {
        let handle = Handle::new(self.storage.len(), self.generation);
        self.storage.push(Entry { bounds, value });
        self.index.insert(bounds, handle);
        handle
    }

    /// Handles of every value whose bounds overlap `query`, via the quadtree.
    pub fn search(&self, query: &Rect<T>) -> Vec<Handle> {
        self.index.search(query)
    }

    /// Append handles of every value whose bounds overlap `query` to `out`.
    pub fn search_into(&self, query: &Rect<T>, out: &mut Vec<Handle>) {
        self.index.search_into(query, out);
    }

    /// Values whose bounds overlap `query`, with their handles.
    pub fn search_values(&self, query: &Rect<T>) -> impl Iterator<Item = (Handle, &V)> + '_ {
        self.search(query)
            .into_iter()
            .filter_map(move |h| self.get(h).map(|v| (h, v)))
    }

    /// Handles of every value whose bounds overlap `query`, by linear scan.
    ///
    /// Same result set as [`search`](Self::search), in insertion order.
    pub fn scan(&self, query: &Rect<T>) -> Vec<Handle> {
        self.iter()
            .filter(|(_, bounds, _)| bounds.overlaps(query))
            .map(|(h, _, _)| h)
            .collect()
    }

    /// Resolve a handle, or `None` if it is stale.
    pub fn get(&self, handle: Handle) -> Option<&V> {
        self.entry(handle).map(|e| &e.value)
    }

    /// Resolve a handle, failing with [`StaleHandle`] if it is stale.
    pub fn try_get(&self, handle: Handle) -> Result<&V, StaleHandle> {
        self.get(handle).ok_or(StaleHandle { handle })
    }

    /// Bounds a live handle was inserted with.
    pub fn bounds_of(&self, handle: Handle) -> Option<&Rect<T>> {
        self.entry(handle).map(|e| &e.bounds)
    }

    /// Whether `handle` refers to a live value.
    pub fn contains(&self, handle: Handle) -> bool {
        self.entry(handle).is_some()
    }

    /// Iterate `(handle, bounds, value)` in insertion order.
    pub fn iter(&self) -> Iter<'_, T, V> {
        Iter {
            generation: self.generation,
            inner: self.storage.iter().enumerate(),
        }
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.storage.iter().map(|e| &e.value)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The extent covered by the index.
    pub fn extent(&self) -> Rect<T> {
        self.index.extent()
    }

    /// Read-only view of the spatial index.
    pub fn index(&self) -> &QuadTree<T, Handle> {
        &self.index
    }

    /// Drop every value and empty the index. All issued handles become stale.
    pub fn clear(&mut self) {
        debug!("container cleared: dropped {} values", self.storage.len());
        self.storage.clear();
        self.index.clear();
        self.generation = self.generation.saturating_add(1);
    }

    /// Rebuild the index over `extent`, dropping every value.
    ///
    /// All issued handles become stale. On error nothing changes.
    pub fn resize(&mut self, extent: Rect<T>) -> Result<(), ConfigError<T>> {
        self.index.resize(extent)?;
        self.storage.clear();
        self.generation = self.generation.saturating_add(1);
        Ok(())
    }

    fn entry(&self, handle: Handle) -> Option<&Entry<T, V>> {
        if handle.generation() != self.generation {
            return None;
        }
        self.storage.get(handle.slot())
    }
}

impl<T: Scalar, V: Debug> Debug for Container<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Container")
            .field("generation", &self.generation)
            .field("len", &self.storage.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, V> Extend<(V, Rect<T>)> for Container<T, V> {
    fn extend<It: IntoIterator<Item = (V, Rect<T>)>>(&mut self, iter: It) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (value, bounds) in iter {
            self.insert(value, bounds);
        }
    }
}

impl<'a, T: Scalar, V> IntoIterator for &'a Container<T, V> {
    type Item = (Handle, &'a Rect<T>, &'a V);
    type IntoIter = Iter<'a, T, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Insertion-order iterator over a [`Container`], from [`Container::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T, V> {
    generation: u32,
    inner: Enumerate<slice::Iter<'a, Entry<T, V>>>,
}

impl<'a, T, V> Iterator for Iter<'a, T, V> {
    type Item = (Handle, &'a Rect<T>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, e) = self.inner.next()?;
        Some((Handle::new(slot, self.generation), &e.bounds, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, V> ExactSizeIterator for Iter<'_, T, V> {}
