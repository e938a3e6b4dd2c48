// Copyright 2026 the Pspath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered sequence of cubic Bézier segments.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::BezSeg;

/// A path made of cubic Bézier segments.
///
/// This is the canonical piecewise-cubic form of a [`Path`]: every
/// command, including lines and circular arcs, becomes one or more
/// cubics. The segment order is the drawing order. Concatenation is
/// `+`, and [`subdivide`] splits every segment once at its midpoint,
/// so repeated application refines the path toward a polyline.
///
/// [`Path`]: crate::Path
/// [`subdivide`]: BezPath::subdivide
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezPath(Vec<BezSeg>);

impl BezPath {
    /// Create a new, empty path.
    pub fn new() -> BezPath {
        Default::default()
    }

    /// Create a path from a vector of segments.
    pub fn from_vec(v: Vec<BezSeg>) -> BezPath {
        BezPath(v)
    }

    /// Push a segment onto the end of the path.
    pub fn push(&mut self, seg: BezSeg) {
        self.0.push(seg);
    }

    /// The segments, in drawing order.
    pub fn segments(&self) -> &[BezSeg] {
        &self.0
    }

    /// The number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path contains no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split every segment once at its curve-parameter midpoint.
    ///
    /// The result traces the same geometry with twice the segment
    /// count.
    pub fn subdivide(&self) -> BezPath {
        let mut result = Vec::with_capacity(self.0.len() * 2);
        for seg in &self.0 {
            let (left, right) = seg.subdivide();
            result.push(left);
            result.push(right);
        }
        BezPath(result)
    }
}

impl Add for BezPath {
    type Output = BezPath;

    fn add(mut self, other: BezPath) -> BezPath {
        self.0.extend(other.0);
        self
    }
}

impl AddAssign for BezPath {
    fn add_assign(&mut self, other: BezPath) {
        self.0.extend(other.0);
    }
}

impl Extend<BezSeg> for BezPath {
    fn extend<I: IntoIterator<Item = BezSeg>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<BezSeg> for BezPath {
    fn from_iter<I: IntoIterator<Item = BezSeg>>(iter: I) -> BezPath {
        BezPath(iter.into_iter().collect())
    }
}

impl IntoIterator for BezPath {
    type Item = BezSeg;
    type IntoIter = std::vec::IntoIter<BezSeg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BezPath {
    type Item = BezSeg;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, BezSeg>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// One segment's PostScript tokens per line.
impl fmt::Display for BezPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.0 {
            writeln!(f, "{seg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn concat_preserves_order() {
        let a = BezPath::from_vec(vec![BezSeg::from_line((0., 0.), (1., 0.))]);
        let b = BezPath::from_vec(vec![BezSeg::from_line((1., 0.), (1., 1.))]);
        let joined = a.clone() + b;
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.segments()[0], a.segments()[0]);
        assert_eq!(joined.segments()[1].end(), Point::new(1., 1.));
    }

    #[test]
    fn subdivide_doubles_segments() {
        let path = BezPath::from_vec(vec![
            BezSeg::new((0., 0.), (1., 2.), (3., 2.), (4., 0.)),
            BezSeg::from_line((4., 0.), (8., 0.)),
        ]);
        let split = path.subdivide();
        assert_eq!(split.len(), 4);
        // Shared endpoints at the former midpoints.
        for (orig, pair) in path.segments().iter().zip(split.segments().chunks(2)) {
            assert_eq!(pair[0].start(), orig.start());
            assert_eq!(pair[1].end(), orig.end());
            assert!(pair[0].end().distance(orig.eval(0.5)) < 1e-12);
        }
    }

    #[test]
    fn display_one_line_per_segment() {
        let path = BezPath::from_vec(vec![
            BezSeg::from_line((0., 0.), (1., 0.)),
            BezSeg::from_line((1., 0.), (1., 1.)),
        ]);
        let text = path.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|line| line.ends_with("curveto")));
    }
}
