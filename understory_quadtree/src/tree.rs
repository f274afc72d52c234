// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-depth quadtree over an arena of partition nodes.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use log::{debug, trace};

use crate::backend::Backend;
use crate::error::ConfigError;
use crate::types::{Rect, Scalar};

/// Depth used by [`QuadTreeConfig::with_extent`].
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Largest `max_depth` accepted by [`QuadTreeConfig::validate`].
pub const MAX_DEPTH_LIMIT: usize = 32;

/// Construction parameters for a [`QuadTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadTreeConfig<T> {
    /// World extent covered by the root node.
    pub extent: Rect<T>,
    /// Number of levels, root included. Children are only created while
    /// `depth + 1 < max_depth`, so `0` and `1` both mean "root only".
    pub max_depth: usize,
}

impl<T: Scalar> QuadTreeConfig<T> {
    /// Create a configuration.
    pub const fn new(extent: Rect<T>, max_depth: usize) -> Self {
        Self { extent, max_depth }
    }

    /// Create a configuration with [`DEFAULT_MAX_DEPTH`].
    pub const fn with_extent(extent: Rect<T>) -> Self {
        Self::new(extent, DEFAULT_MAX_DEPTH)
    }

    /// Check the extent has area and the depth is within [`MAX_DEPTH_LIMIT`].
    pub fn validate(&self) -> Result<(), ConfigError<T>> {
        validate_extent(&self.extent)?;
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::DepthTooLarge {
                depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }
}

fn validate_extent<T: Scalar>(extent: &Rect<T>) -> Result<(), ConfigError<T>> {
    if extent.has_area() {
        Ok(())
    } else {
        Err(ConfigError::InvalidExtent {
            width: extent.w,
            height: extent.h,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Node<T, I> {
    depth: usize,
    bounds: Rect<T>,
    child_bounds: [Rect<T>; 4],
    children: [Option<NodeIdx>; 4],
    // Items that straddle a quadrant split, or that hit the depth limit here.
    bucket: Vec<(Rect<T>, I)>,
}

impl<T: Scalar, I> Node<T, I> {
    fn new(depth: usize, bounds: Rect<T>) -> Self {
        Self {
            depth,
            bounds,
            child_bounds: bounds.quadrants(),
            children: [None; 4],
            bucket: Vec::new(),
        }
    }
}

/// How a query rectangle relates to a child quadrant.
enum Coverage {
    /// The query contains the whole quadrant; take its subtree unfiltered.
    Full,
    /// The query touches the quadrant; recurse with per-item tests.
    Partial,
    Disjoint,
}

impl Coverage {
    fn of<T: Scalar>(query: &Rect<T>, region: &Rect<T>) -> Self {
        if query.contains_rect(region) {
            Self::Full
        } else if region.overlaps(query) {
            Self::Partial
        } else {
            Self::Disjoint
        }
    }
}

/// Summary of a tree's shape, from [`QuadTree::stats`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of allocated nodes, root included.
    pub nodes: usize,
    /// Total stored items.
    pub items: usize,
    /// Deepest allocated node (the root is depth 0).
    pub deepest: usize,
    /// Items stored at each depth; index `d` counts the buckets at depth `d`.
    pub items_per_depth: Vec<usize>,
}

/// A static quadtree of fixed maximum depth.
///
/// Each inserted rectangle is stored once, in the bucket of the deepest node
/// whose quadrant strictly contains it. Nodes are created lazily on the first
/// insert that descends into them and are never split, merged or rebalanced;
/// the whole tree is discarded by [`clear`](Self::clear) or
/// [`resize`](Self::resize).
///
/// Items are small `Copy` values (typically handles into a
/// [`Container`](crate::Container)); the tree keeps one `(bounds, item)` pair
/// per insert.
///
/// Bounds are not validated. Negative or NaN sizes give unspecified results.
/// Bounds outside the extent fit no quadrant and stay in the root bucket.
pub struct QuadTree<T: Scalar, I: Copy> {
    max_depth: usize,
    // arena[0] is the root.
    arena: Vec<Node<T, I>>,
}

impl<T: Scalar, I: Copy> QuadTree<T, I> {
    /// Create an empty tree covering `extent`.
    pub fn new(extent: Rect<T>, max_depth: usize) -> Result<Self, ConfigError<T>> {
        Self::with_config(QuadTreeConfig::new(extent, max_depth))
    }

    /// Create an empty tree from a validated configuration.
    pub fn with_config(config: QuadTreeConfig<T>) -> Result<Self, ConfigError<T>> {
        config.validate()?;
        debug!(
            "quadtree configured: extent={:?} max_depth={}",
            config.extent, config.max_depth
        );
        Ok(Self {
            max_depth: config.max_depth,
            arena: vec![Node::new(0, config.extent)],
        })
    }

    /// The extent covered by the root node.
    pub fn extent(&self) -> Rect<T> {
        self.root().bounds
    }

    /// Configured maximum depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Current configuration.
    pub fn config(&self) -> QuadTreeConfig<T> {
        QuadTreeConfig::new(self.extent(), self.max_depth)
    }

    /// Discard every node and item, then rebuild the root over `extent`.
    ///
    /// On error the tree is left untouched.
    pub fn resize(&mut self, extent: Rect<T>) -> Result<(), ConfigError<T>> {
        validate_extent(&extent)?;
        debug!(
            "quadtree resized: extent={:?} dropped {} items",
            extent,
            self.len()
        );
        self.arena.clear();
        self.arena.push(Node::new(0, extent));
        Ok(())
    }

    /// Drop every node below the root and empty the root bucket.
    pub fn clear(&mut self) {
        debug!("quadtree cleared: dropped {} items", self.len());
        self.arena.truncate(1);
        let root = &mut self.arena[NodeIdx::ROOT.get()];
        root.children = [None; 4];
        root.bucket.clear();
    }

    /// Total number of stored items across all buckets.
    pub fn len(&self) -> usize {
        self.arena.iter().map(|n| n.bucket.len()).sum()
    }

    /// Whether the tree stores no items.
    pub fn is_empty(&self) -> bool {
        self.arena.iter().all(|n| n.bucket.is_empty())
    }

    /// Insert `item` under `bounds`.
    ///
    /// Quadrants are tried in order top-left, top-right, bottom-left,
    /// bottom-right; the first that contains `bounds` is entered. The item is
    /// stored at the first node where none does, or where the depth limit is
    /// reached. Placed items never move.
    pub fn insert(&mut self, bounds: Rect<T>, item: I) {
        let mut at = NodeIdx::ROOT;
        loop {
            let node = &self.arena[at.get()];
            let quadrant = if node.depth + 1 < self.max_depth {
                node.child_bounds
                    .iter()
                    .position(|cb| cb.contains_rect(&bounds))
            } else {
                None
            };
            let Some(q) = quadrant else {
                self.arena[at.get()].bucket.push((bounds, item));
                return;
            };
            let existing = node.children[q];
            at = match existing {
                Some(child) => child,
                None => self.spawn_child(at, q),
            };
        }
    }

    /// Collect every item whose bounds overlap `query`.
    pub fn search(&self, query: &Rect<T>) -> Vec<I> {
        let mut out = Vec::new();
        self.search_into(query, &mut out);
        out
    }

    /// Append every item whose bounds overlap `query` to `out`.
    ///
    /// Each match is reported exactly once. A node's bucket is reported
    /// before its children; the order is otherwise unspecified. Children whose
    /// quadrant lies inside `query` are copied out without per-item tests.
    pub fn search_into(&self, query: &Rect<T>, out: &mut Vec<I>) {
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(at) = stack.pop() {
            let node = &self.arena[at.get()];
            out.extend(
                node.bucket
                    .iter()
                    .filter(|(b, _)| b.overlaps(query))
                    .map(|&(_, item)| item),
            );
            for (region, child) in node.child_bounds.iter().zip(node.children) {
                let Some(child) = child else {
                    continue;
                };
                match Coverage::of(query, region) {
                    Coverage::Full => self.collect_subtree(child, out),
                    Coverage::Partial => stack.push(child),
                    Coverage::Disjoint => {}
                }
            }
        }
    }

    /// Visit every stored item with its bounds, in tree order.
    pub fn items(&self) -> impl Iterator<Item = (&Rect<T>, I)> + '_ {
        self.arena
            .iter()
            .flat_map(|n| n.bucket.iter().map(|(b, item)| (b, *item)))
    }

    /// Node and per-depth item counts.
    pub fn stats(&self) -> TreeStats {
        let mut items_per_depth = vec![0; self.max_depth.max(1)];
        let mut deepest = 0;
        for node in &self.arena {
            items_per_depth[node.depth] += node.bucket.len();
            deepest = deepest.max(node.depth);
        }
        TreeStats {
            nodes: self.arena.len(),
            items: items_per_depth.iter().sum(),
            deepest,
            items_per_depth,
        }
    }

    fn root(&self) -> &Node<T, I> {
        &self.arena[NodeIdx::ROOT.get()]
    }

    fn spawn_child(&mut self, parent: NodeIdx, quadrant: usize) -> NodeIdx {
        let p = &self.arena[parent.get()];
        let node = Node::new(p.depth + 1, p.child_bounds[quadrant]);
        let idx = NodeIdx::new(self.arena.len());
        trace!(
            "quadtree node {} created at depth {} for {:?}",
            idx.get(),
            node.depth,
            node.bounds
        );
        self.arena.push(node);
        self.arena[parent.get()].children[quadrant] = Some(idx);
        idx
    }

    fn collect_subtree(&self, from: NodeIdx, out: &mut Vec<I>) {
        let mut stack = vec![from];
        while let Some(at) = stack.pop() {
            let node = &self.arena[at.get()];
            out.extend(node.bucket.iter().map(|&(_, item)| item));
            stack.extend(node.children.iter().flatten().copied());
        }
    }
}

impl<T: Scalar, I: Copy> Debug for QuadTree<T, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("extent", &self.extent())
            .field("max_depth", &self.max_depth)
            .field("nodes", &self.arena.len())
            .field("items", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, I: Copy> Backend<T, I> for QuadTree<T, I> {
    fn insert(&mut self, bounds: Rect<T>, item: I) {
        Self::insert(self, bounds, item);
    }

    fn query_rect_into(&self, query: &Rect<T>, out: &mut Vec<I>) {
        self.search_into(query, out);
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}
