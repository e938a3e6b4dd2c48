// Copyright 2026 the Pspath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single cubic Bézier segment.

use std::fmt;

use crate::Point;

/// A single cubic Bézier segment.
///
/// Produced by converting a path element or by subdividing another
/// segment; immutable once constructed. Control points are stored in
/// the path's native length unit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezSeg {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl BezSeg {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> BezSeg {
        BezSeg {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Represent the straight line from `p0` to `p1` as a cubic.
    ///
    /// The control points lie at 1/3 and 2/3 along the line, so the
    /// degenerate cubic traces the line exactly and uniformly.
    pub fn from_line(p0: impl Into<Point>, p1: impl Into<Point>) -> BezSeg {
        let p0 = p0.into();
        let p1 = p1.into();
        let d = (p1 - p0) * (1.0 / 3.0);
        BezSeg {
            p0,
            p1: p0 + d,
            p2: p0 + d * 2.0,
            p3: p1,
        }
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.p0
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.p3
    }

    /// Split the segment at its curve-parameter midpoint.
    ///
    /// This is de Casteljau's algorithm at t = 0.5: pairwise midpoints
    /// of adjacent control points, repeated until a single point
    /// remains. That point lies on the curve and becomes the shared
    /// endpoint of the two halves, which together trace exactly the
    /// original curve.
    pub fn subdivide(&self) -> (BezSeg, BezSeg) {
        // Midpoints between adjacent control points.
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        // Second and third iteration.
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let pm = p012.midpoint(p123);
        (
            BezSeg::new(self.p0, p01, p012, pm),
            BezSeg::new(pm, p123, p23, self.p3),
        )
    }

    /// Is this segment finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

/// PostScript tokens for the segment, fixed-point with six fractional
/// digits: `x0 y0 moveto x1 y1 x2 y2 x3 y3 curveto`.
impl fmt::Display for BezSeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} {:.6} moveto {:.6} {:.6} {:.6} {:.6} {:.6} {:.6} curveto",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_control_points_at_thirds() {
        let p0 = Point::new(1.0, 2.0);
        let p1 = Point::new(7.0, -4.0);
        let seg = BezSeg::from_line(p0, p1);
        assert_eq!(seg.p1, p0.lerp(p1, 1.0 / 3.0));
        assert_eq!(seg.p2, p0.lerp(p1, 2.0 / 3.0));
        assert_eq!(seg.eval(0.0), p0);
        assert_eq!(seg.eval(1.0), p1);
        // A degree-1 curve embedded in a cubic stays uniform.
        let mid = seg.eval(0.5);
        assert!(mid.distance(p0.midpoint(p1)) < 1e-12);
    }

    #[test]
    fn subdivide_matches_eval() {
        let seg = BezSeg::new((0.0, 0.0), (1.0, 3.0), (4.0, 3.0), (5.0, 0.0));
        let (left, right) = seg.subdivide();
        assert_eq!(left.p0, seg.p0);
        assert_eq!(right.p3, seg.p3);
        assert_eq!(left.p3, right.p0);
        let n = 16;
        for i in 0..=n {
            let t = f64::from(i) / f64::from(n);
            let on_left = left.eval(t);
            let on_right = right.eval(t);
            assert!(on_left.distance(seg.eval(t * 0.5)) < 1e-12);
            assert!(on_right.distance(seg.eval((t + 1.0) * 0.5)) < 1e-12);
        }
    }

    #[test]
    fn display_tokens() {
        let seg = BezSeg::from_line((0.0, 0.0), (3.0, 0.0));
        assert_eq!(
            seg.to_string(),
            "0.000000 0.000000 moveto 1.000000 0.000000 2.000000 0.000000 3.000000 0.000000 curveto"
        );
    }
}
