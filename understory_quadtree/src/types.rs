// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Numeric scalar abstraction for rectangle coordinates.
///
/// This is the minimal set of operations the quadtree needs to place items
/// and quarter node bounds.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Half of the value (rounded toward zero for integers).
    fn half(v: Self) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        0.5 * v
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        0.5 * v
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2
    }
}

/// Axis-aligned rectangle in 2D, stored as origin and size.
///
/// The size components are expected to be non-negative. Nothing checks this;
/// a negative or NaN size makes every predicate below meaningless.
///
/// The three predicates deliberately disagree about edges:
///
/// - [`contains_point`](Self::contains_point) is half-open, `[x, x + w)`.
/// - [`contains_rect`](Self::contains_rect) requires the inner far edge to be
///   strictly inside the outer far edge, so a rectangle flush against the far
///   edge of another is *not* contained by it.
/// - [`overlaps`](Self::overlaps) treats `self`'s far edge as closed, so a
///   rectangle whose far edge touches the start of the other overlaps it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Minimum x (left)
    pub x: T,
    /// Minimum y (top)
    pub y: T,
    /// Width
    pub w: T,
    /// Height
    pub h: T,
}

impl<T> Rect<T> {
    /// Create a new rectangle from origin and size.
    pub const fn new(x: T, y: T, w: T, h: T) -> Self {
        Self { x, y, w, h }
    }
}

impl<T: Scalar> Rect<T> {
    /// Create a rectangle from its min and max corners.
    pub fn from_min_max(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            x: min_x,
            y: min_y,
            w: T::sub(max_x, min_x),
            h: T::sub(max_y, min_y),
        }
    }

    /// Right edge, `x + w`.
    #[inline]
    pub fn max_x(&self) -> T {
        T::add(self.x, self.w)
    }

    /// Bottom edge, `y + h`.
    #[inline]
    pub fn max_y(&self) -> T {
        T::add(self.y, self.h)
    }

    /// Whether both size components are strictly positive.
    pub fn has_area(&self) -> bool {
        lt(T::zero(), self.w) && lt(T::zero(), self.h)
    }

    /// Whether the point lies inside this rectangle (half-open on both axes).
    #[inline]
    pub fn contains_point(&self, px: T, py: T) -> bool {
        le(self.x, px) && le(self.y, py) && lt(px, self.max_x()) && lt(py, self.max_y())
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// The far edges compare strictly: `other.max_x() < self.max_x()`.
    #[inline]
    pub fn contains_rect(&self, other: &Self) -> bool {
        le(self.x, other.x)
            && lt(other.max_x(), self.max_x())
            && le(self.y, other.y)
            && lt(other.max_y(), self.max_y())
    }

    /// Whether the projections of the two rectangles intersect on both axes.
    ///
    /// `self.x < other.max_x() && self.max_x() >= other.x`, and likewise for y.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        lt(self.x, other.max_x())
            && le(other.x, self.max_x())
            && lt(self.y, other.max_y())
            && le(other.y, self.max_y())
    }

    /// Split into four quadrants: top-left, top-right, bottom-left, bottom-right.
    ///
    /// The right and bottom quadrants take the remainder so that the four
    /// quadrants tile `self` exactly, even for integer scalars with odd sizes.
    pub fn quadrants(&self) -> [Self; 4] {
        let hw = T::half(self.w);
        let hh = T::half(self.h);
        let rw = T::sub(self.w, hw);
        let bh = T::sub(self.h, hh);
        let mx = T::add(self.x, hw);
        let my = T::add(self.y, hh);
        [
            Self::new(self.x, self.y, hw, hh),
            Self::new(mx, self.y, rw, hh),
            Self::new(self.x, my, hw, bh),
            Self::new(mx, my, rw, bh),
        ]
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect<f64> {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::from_min_max(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect<f64>> for kurbo::Rect {
    fn from(r: Rect<f64>) -> Self {
        Self::new(r.x, r.y, r.max_x(), r.max_y())
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
