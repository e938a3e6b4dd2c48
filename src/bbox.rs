// Copyright 2026 the Pspath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An axis-aligned bounding box with a distinguished empty value.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::{Point, Rect};

/// An axis-aligned bounding box, or "empty".
///
/// Merging is exposed as `+` and forms a monoid: it is associative and
/// commutative, with [`BBox::EMPTY`] as the identity. A non-empty box
/// always satisfies `x0 <= x1` and `y0 <= y1`, because the only ways to
/// construct one go through [`Rect::from_points`] or [`Rect::abs`].
///
/// All coordinates fed into a `BBox` must already be in output points;
/// the box never performs unit conversion itself.
///
/// ```
/// use pspath::{BBox, Rect};
///
/// let a = BBox::from_points((0., 0.), (1., 1.));
/// let b = BBox::from_points((2., -1.), (3., 0.5));
/// assert_eq!((a + b).rect(), Some(Rect::new(0., -1., 3., 1.)));
/// assert_eq!(BBox::EMPTY + a, a);
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox(Option<Rect>);

impl BBox {
    /// The empty bounding box, the identity of merging.
    pub const EMPTY: BBox = BBox(None);

    /// A bounding box covering the given rectangle.
    ///
    /// The rectangle is normalized so the invariant `x0 <= x1`,
    /// `y0 <= y1` holds.
    #[inline]
    pub fn from_rect(rect: Rect) -> BBox {
        BBox(Some(rect.abs()))
    }

    /// The bounding box spanning two points.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> BBox {
        BBox(Some(Rect::from_points(p0, p1)))
    }

    /// The degenerate bounding box covering a single point.
    #[inline]
    pub fn from_point(p: impl Into<Point>) -> BBox {
        let p = p.into();
        BBox(Some(Rect::new(p.x, p.y, p.x, p.y)))
    }

    /// Whether this is the empty box.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The enclosed rectangle, or `None` for the empty box.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.0
    }

    /// Merge two bounding boxes.
    ///
    /// Empty acts as the identity; otherwise the result is the
    /// componentwise min/max of the two boxes.
    #[inline]
    pub fn union(&self, other: BBox) -> BBox {
        match (self.0, other.0) {
            (Some(a), Some(b)) => BBox(Some(a.union(b))),
            (Some(a), None) => BBox(Some(a)),
            (None, b) => BBox(b),
        }
    }

    /// Extend the box to cover one more point.
    #[inline]
    pub fn union_pt(&self, pt: Point) -> BBox {
        match self.0 {
            Some(r) => BBox(Some(r.union_pt(pt))),
            None => BBox::from_point(pt),
        }
    }
}

impl Add for BBox {
    type Output = BBox;

    #[inline]
    fn add(self, other: BBox) -> BBox {
        self.union(other)
    }
}

impl AddAssign for BBox {
    #[inline]
    fn add_assign(&mut self, other: BBox) {
        *self = self.union(other);
    }
}

impl From<Rect> for BBox {
    #[inline]
    fn from(rect: Rect) -> BBox {
        BBox::from_rect(rect)
    }
}

impl fmt::Debug for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(r) => write!(f, "BBox({r:?})"),
            None => write!(f, "BBox(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_identity() {
        let b = BBox::from_points((1., 2.), (3., 4.));
        assert_eq!(BBox::EMPTY + b, b);
        assert_eq!(b + BBox::EMPTY, b);
        assert_eq!(BBox::EMPTY + BBox::EMPTY, BBox::EMPTY);
    }

    #[test]
    fn merge_commutative_associative() {
        let a = BBox::from_points((0., 0.), (1., 1.));
        let b = BBox::from_points((-2., 3.), (0.5, 5.));
        let c = BBox::from_points((10., -1.), (11., 0.));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn point_box_has_zero_extent() {
        let b = BBox::from_point((2., 3.));
        let r = b.rect().unwrap();
        assert_eq!((r.width(), r.height()), (0., 0.));
    }

    #[test]
    fn union_pt_grows() {
        let b = BBox::EMPTY.union_pt(Point::new(1., 1.)).union_pt(Point::new(-1., 4.));
        assert_eq!(b.rect(), Some(Rect::new(-1., 1., 1., 4.)));
    }
}
