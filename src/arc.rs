// Copyright 2026 the Pspath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of circular arcs into cubic Bézier segments.

use std::f64::consts::PI;

use crate::{BezSeg, Point, Vec2};

/// Default cap on the angular span of a single emitted segment: 45°.
pub const MAX_SEG_SWEEP: f64 = PI / 4.0;

/// Approximate a circular arc by cubic Bézier segments.
///
/// The arc is centered at `center` with radius `radius` and sweeps
/// counterclockwise from `angle1` to `angle2` (degrees). The sweep is
/// normalized so it is positive and at most one full turn, then split
/// into equal sub-sweeps of at most [`MAX_SEG_SWEEP`] each. A zero
/// radius or zero sweep produces no segments.
///
/// Each segment starts and ends exactly on the circle and is tangent to
/// it there; the radial error in between shrinks rapidly with the
/// sub-sweep, which is why the span is capped.
///
/// ```
/// use pspath::{arc_to_beziers, BezPath, Point};
///
/// let quarter: BezPath = arc_to_beziers(Point::ZERO, 10.0, 0.0, 90.0).collect();
/// assert_eq!(quarter.len(), 3);
/// assert!(quarter.segments()[0].start().distance(Point::new(10.0, 0.0)) < 1e-12);
/// ```
pub fn arc_to_beziers(center: Point, radius: f64, angle1: f64, angle2: f64) -> ArcBezIter {
    arc_to_beziers_max_sweep(center, radius, angle1, angle2, MAX_SEG_SWEEP)
}

/// Like [`arc_to_beziers`], with an explicit cap on the angular span of
/// each emitted segment (radians).
pub fn arc_to_beziers_max_sweep(
    center: Point,
    radius: f64,
    angle1: f64,
    angle2: f64,
    max_sweep: f64,
) -> ArcBezIter {
    let two_pi = 2.0 * PI;
    let phi1 = angle1.to_radians();
    let mut phi2 = angle2.to_radians();
    if phi2 < phi1 {
        // Guarantee that phi2 > phi1 ...
        phi2 += (((phi1 - phi2) / two_pi).floor() + 1.0) * two_pi;
    } else if phi2 > phi1 + two_pi {
        // ... or remove unnecessary multiples of 2*pi.
        phi2 -= (((phi2 - phi1) / two_pi).floor() - 1.0) * two_pi;
    }

    if radius == 0.0 || phi1 == phi2 {
        return ArcBezIter {
            idx: 0,
            n: 0,
            center,
            radius,
            arm_len: 0.0,
            dphi: 0.0,
            angle0: phi1,
            p0: center,
        };
    }

    #[allow(clippy::cast_possible_truncation)]
    let n = (((phi2 - phi1).abs() / max_sweep).floor() as usize) + 1;
    let dphi = (phi2 - phi1) / n as f64;
    // Optimal distance along the tangents for the inner control points.
    let arm_len = radius * 4.0 * (1.0 - (dphi / 2.0).cos()) / (3.0 * (dphi / 2.0).sin());

    ArcBezIter {
        idx: 0,
        n,
        center,
        radius,
        arm_len,
        dphi,
        angle0: phi1,
        p0: center + radius * Vec2::from_angle(phi1),
    }
}

/// Iterator generating the Bézier segments of an arc.
///
/// Returned by [`arc_to_beziers`]; yields segments in sweep order.
#[derive(Clone, Debug)]
pub struct ArcBezIter {
    idx: usize,
    n: usize,

    center: Point,
    radius: f64,
    arm_len: f64,
    dphi: f64,

    angle0: f64,
    p0: Point,
}

impl Iterator for ArcBezIter {
    type Item = BezSeg;

    fn next(&mut self) -> Option<BezSeg> {
        if self.idx >= self.n {
            return None;
        }

        let a = self.angle0;
        let b = a + self.dphi;
        let p0 = self.p0;
        let p1 = p0 + self.arm_len * Vec2::new(-a.sin(), a.cos());
        let p3 = self.center + self.radius * Vec2::from_angle(b);
        let p2 = p3 + self.arm_len * Vec2::new(b.sin(), -b.cos());

        self.angle0 = b;
        self.p0 = p3;
        self.idx += 1;

        Some(BezSeg::new(p0, p1, p2, p3))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcBezIter {}
