// Copyright 2026 the Pspath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PostScript-style paths: drawing commands, bounding boxes, and
//! Bézier conversion.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign};

use smallvec::{smallvec, SmallVec};

use crate::arc::arc_to_beziers;
use crate::{BBox, BezPath, BezSeg, Point, Rect, UnitMap, Vec2};

/// One drawing command of a PostScript-style path.
///
/// Coordinates are stored in the path's native length unit; conversion
/// to output points happens when a bounding box is computed or the path
/// is serialized. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Connect the subpath back to its starting point.
    ClosePath,
    /// Set the current point, starting a new subpath.
    MoveTo(Point),
    /// Like `MoveTo`, relative to the current point.
    RMoveTo(Vec2),
    /// Append a straight line to the given point.
    LineTo(Point),
    /// Like `LineTo`, relative to the current point.
    RLineTo(Vec2),
    /// Append a counterclockwise circular arc.
    Arc {
        /// The center of the circle.
        center: Point,
        /// The radius of the circle.
        radius: f64,
        /// The start angle, in degrees.
        angle1: f64,
        /// The end angle, in degrees.
        angle2: f64,
    },
    /// Append a clockwise circular arc.
    ///
    /// Defined as [`Arc`](PathEl::Arc) with the angles swapped; every
    /// geometric query delegates accordingly.
    Arcn {
        /// The center of the circle.
        center: Point,
        /// The radius of the circle.
        radius: f64,
        /// The start angle, in degrees.
        angle1: f64,
        /// The end angle, in degrees.
        angle2: f64,
    },
    /// Append a tangent arc.
    ///
    /// Only serialization is implemented; bounding box and Bézier
    /// conversion fail with [`PathError::Unsupported`].
    Arct {
        /// The first tangent line endpoint.
        p1: Point,
        /// The second tangent line endpoint.
        p2: Point,
        /// The radius of the circle.
        radius: f64,
    },
    /// Append a cubic Bézier with the given absolute control points,
    /// ending at the last of them.
    CurveTo(Point, Point, Point),
    /// Like `CurveTo`, control points relative to the current point.
    RCurveTo(Vec2, Vec2, Vec2),
}

/// The running state threaded through a path, element by element.
///
/// `current` is the pen position after an element; `subpath_start` is
/// the point established by the most recent `MoveTo`/`Arc`/`Arcn`,
/// which anchors `ClosePath`. Both are `None` before the first element.
/// In bounding box queries the points are in output points; in Bézier
/// conversion they stay in the native unit.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct PathState {
    /// The pen position, if established.
    pub current: Option<Point>,
    /// The starting point of the current subpath, if established.
    pub subpath_start: Option<Point>,
}

impl PathState {
    fn require_current(&self) -> Result<Point, PathError> {
        self.current.ok_or(PathError::MissingCurrentPoint)
    }
}

/// Errors arising from path queries and serialization.
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    /// Serialization was attempted on a path whose first element is not
    /// `MoveTo`, `Arc`, or `Arcn`.
    InvalidStart,
    /// An element was evaluated with no established current point or
    /// subpath anchor.
    MissingCurrentPoint,
    /// The operation is not implemented for this element.
    Unsupported(&'static str),
    /// The underlying writer failed.
    Format(fmt::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidStart => {
                write!(f, "first path element must be moveto, arc, or arcn")
            }
            PathError::MissingCurrentPoint => write!(f, "no current point established"),
            PathError::Unsupported(op) => write!(f, "unsupported operation: {op}"),
            PathError::Format(_) => write!(f, "error writing path output"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<fmt::Error> for PathError {
    fn from(e: fmt::Error) -> PathError {
        PathError::Format(e)
    }
}

fn convert(unit: &impl UnitMap, p: Point) -> Point {
    Point::new(unit.pt(p.x), unit.pt(p.y))
}

fn convert_vec(unit: &impl UnitMap, v: Vec2) -> Vec2 {
    Vec2::new(unit.pt(v.x), unit.pt(v.y))
}

impl PathEl {
    /// Compute the pen state after this element and the bounding box it
    /// contributes on its own.
    ///
    /// All coordinates in the result and in `state` are in output
    /// points; every stored coordinate goes through `unit` before it is
    /// compared or combined.
    pub fn bbox(
        &self,
        unit: &impl UnitMap,
        state: PathState,
    ) -> Result<(PathState, BBox), PathError> {
        match *self {
            PathEl::ClosePath => {
                let cur = state.require_current()?;
                let anchor = state.subpath_start.ok_or(PathError::MissingCurrentPoint)?;
                // The implicit closing line; the pen state resets.
                Ok((PathState::default(), BBox::from_points(cur, anchor)))
            }
            PathEl::MoveTo(p) => {
                let p = convert(unit, p);
                let state = PathState {
                    current: Some(p),
                    subpath_start: Some(p),
                };
                Ok((state, BBox::from_point(p)))
            }
            PathEl::RMoveTo(d) => {
                let p = state.require_current()? + convert_vec(unit, d);
                let state = PathState {
                    current: Some(p),
                    subpath_start: Some(p),
                };
                Ok((state, BBox::from_point(p)))
            }
            PathEl::LineTo(p) => {
                let cur = state.require_current()?;
                let p = convert(unit, p);
                let state = PathState {
                    current: Some(p),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                Ok((state, BBox::from_points(cur, p)))
            }
            PathEl::RLineTo(d) => {
                let cur = state.require_current()?;
                let p = cur + convert_vec(unit, d);
                let state = PathState {
                    current: Some(p),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                Ok((state, BBox::from_points(cur, p)))
            }
            PathEl::Arc {
                center,
                radius,
                angle1,
                angle2,
            } => Ok(arc_bbox(unit, center, radius, angle1, angle2, state)),
            PathEl::Arcn {
                center,
                radius,
                angle1,
                angle2,
            } => Ok(arc_bbox(unit, center, radius, angle2, angle1, state)),
            PathEl::Arct { .. } => Err(PathError::Unsupported("arct")),
            PathEl::CurveTo(p1, p2, p3) => {
                let cur = state.require_current()?;
                let p1 = convert(unit, p1);
                let p2 = convert(unit, p2);
                let p3 = convert(unit, p3);
                let state = PathState {
                    current: Some(p3),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                // Conservative: the hull of the raw control points, not
                // the curve's tight extent.
                let rect = Rect::from_points(cur, p1).union_pt(p2).union_pt(p3);
                Ok((state, BBox::from_rect(rect)))
            }
            PathEl::RCurveTo(d1, d2, d3) => {
                let cur = state.require_current()?;
                let p1 = cur + convert_vec(unit, d1);
                let p2 = cur + convert_vec(unit, d2);
                let p3 = cur + convert_vec(unit, d3);
                let state = PathState {
                    current: Some(p3),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                let rect = Rect::from_points(cur, p1).union_pt(p2).union_pt(p3);
                Ok((state, BBox::from_rect(rect)))
            }
        }
    }

    /// Compute the pen state after this element and the Bézier segments
    /// it emits.
    ///
    /// Unlike [`bbox`](PathEl::bbox) this works entirely in the path's
    /// native length unit; conversion, if any, is a later stage's
    /// concern.
    pub fn to_beziers(
        &self,
        state: PathState,
    ) -> Result<(PathState, SmallVec<[BezSeg; 2]>), PathError> {
        match *self {
            PathEl::ClosePath => {
                let cur = state.require_current()?;
                let anchor = state.subpath_start.ok_or(PathError::MissingCurrentPoint)?;
                Ok((
                    PathState::default(),
                    smallvec![BezSeg::from_line(cur, anchor)],
                ))
            }
            PathEl::MoveTo(p) => {
                let state = PathState {
                    current: Some(p),
                    subpath_start: Some(p),
                };
                Ok((state, SmallVec::new()))
            }
            PathEl::RMoveTo(d) => {
                let p = state.require_current()? + d;
                let state = PathState {
                    current: Some(p),
                    subpath_start: Some(p),
                };
                Ok((state, SmallVec::new()))
            }
            PathEl::LineTo(p) => {
                let cur = state.require_current()?;
                let state = PathState {
                    current: Some(p),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                Ok((state, smallvec![BezSeg::from_line(cur, p)]))
            }
            PathEl::RLineTo(d) => {
                let cur = state.require_current()?;
                let p = cur + d;
                let state = PathState {
                    current: Some(p),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                Ok((state, smallvec![BezSeg::from_line(cur, p)]))
            }
            PathEl::Arc {
                center,
                radius,
                angle1,
                angle2,
            } => Ok(arc_beziers(center, radius, angle1, angle2, state)),
            PathEl::Arcn {
                center,
                radius,
                angle1,
                angle2,
            } => Ok(arc_beziers(center, radius, angle2, angle1, state)),
            PathEl::Arct { .. } => Err(PathError::Unsupported("arct")),
            PathEl::CurveTo(p1, p2, p3) => {
                let cur = state.require_current()?;
                let state = PathState {
                    current: Some(p3),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                Ok((state, smallvec![BezSeg::new(cur, p1, p2, p3)]))
            }
            PathEl::RCurveTo(d1, d2, d3) => {
                let cur = state.require_current()?;
                let p3 = cur + d3;
                let state = PathState {
                    current: Some(p3),
                    subpath_start: state.subpath_start.or(Some(cur)),
                };
                Ok((
                    state,
                    smallvec![BezSeg::new(cur, cur + d1, cur + d2, p3)],
                ))
            }
        }
    }

    /// Write the element's textual form: fixed-point coordinates in
    /// output points followed by the command keyword.
    ///
    /// Arc angles are written untouched; only lengths go through the
    /// unit conversion.
    pub fn write<W: fmt::Write>(&self, unit: &impl UnitMap, w: &mut W) -> fmt::Result {
        match *self {
            PathEl::ClosePath => w.write_str("closepath"),
            PathEl::MoveTo(p) => {
                write!(w, "{:.6} {:.6} moveto", unit.pt(p.x), unit.pt(p.y))
            }
            PathEl::RMoveTo(d) => {
                write!(w, "{:.6} {:.6} rmoveto", unit.pt(d.x), unit.pt(d.y))
            }
            PathEl::LineTo(p) => {
                write!(w, "{:.6} {:.6} lineto", unit.pt(p.x), unit.pt(p.y))
            }
            PathEl::RLineTo(d) => {
                write!(w, "{:.6} {:.6} rlineto", unit.pt(d.x), unit.pt(d.y))
            }
            PathEl::Arc {
                center,
                radius,
                angle1,
                angle2,
            } => write!(
                w,
                "{:.6} {:.6} {:.6} {:.6} {:.6} arc",
                unit.pt(center.x),
                unit.pt(center.y),
                unit.pt(radius),
                angle1,
                angle2
            ),
            PathEl::Arcn {
                center,
                radius,
                angle1,
                angle2,
            } => write!(
                w,
                "{:.6} {:.6} {:.6} {:.6} {:.6} arcn",
                unit.pt(center.x),
                unit.pt(center.y),
                unit.pt(radius),
                angle1,
                angle2
            ),
            PathEl::Arct { p1, p2, radius } => write!(
                w,
                "{:.6} {:.6} {:.6} {:.6} {:.6} arct",
                unit.pt(p1.x),
                unit.pt(p1.y),
                unit.pt(p2.x),
                unit.pt(p2.y),
                unit.pt(radius)
            ),
            PathEl::CurveTo(p1, p2, p3) => write!(
                w,
                "{:.6} {:.6} {:.6} {:.6} {:.6} {:.6} curveto",
                unit.pt(p1.x),
                unit.pt(p1.y),
                unit.pt(p2.x),
                unit.pt(p2.y),
                unit.pt(p3.x),
                unit.pt(p3.y)
            ),
            PathEl::RCurveTo(d1, d2, d3) => write!(
                w,
                "{:.6} {:.6} {:.6} {:.6} {:.6} {:.6} rcurveto",
                unit.pt(d1.x),
                unit.pt(d1.y),
                unit.pt(d2.x),
                unit.pt(d2.y),
                unit.pt(d3.x),
                unit.pt(d3.y)
            ),
        }
    }
}

/// Arc bounding box in output points, including the implicit line from
/// the current point to the arc's start when one exists.
fn arc_bbox(
    unit: &impl UnitMap,
    center: Point,
    radius: f64,
    angle1: f64,
    angle2: f64,
    state: PathState,
) -> (PathState, BBox) {
    let two_pi = 2.0 * PI;
    let phi1 = angle1.to_radians();
    let mut phi2 = angle2.to_radians();

    let start = Point::new(
        unit.pt(center.x + radius * phi1.cos()),
        unit.pt(center.y + radius * phi1.sin()),
    );
    let end = Point::new(
        unit.pt(center.x + radius * phi2.cos()),
        unit.pt(center.y + radius * phi2.sin()),
    );

    if phi2 < phi1 {
        // Guarantee that phi2 > phi1.
        phi2 += (((phi1 - phi2) / two_pi).floor() + 1.0) * two_pi;
    }

    // The extrema of cos/sin over [phi1, phi2] lie either at the
    // interval borders or at a cardinal direction inside it. `next`
    // gives the first crossing of a cardinal angle past phi1; the
    // sweep reaches the circle's extremum on that axis iff phi2 does
    // not stop short of it.
    let next = |cardinal: f64| cardinal + (((phi1 - cardinal) / two_pi).floor() + 1.0) * two_pi;

    let min_x = if phi2 < next(PI) {
        start.x.min(end.x)
    } else {
        unit.pt(center.x - radius)
    };
    let min_y = if phi2 < next(1.5 * PI) {
        start.y.min(end.y)
    } else {
        unit.pt(center.y - radius)
    };
    let max_x = if phi2 < next(0.0) {
        start.x.max(end.x)
    } else {
        unit.pt(center.x + radius)
    };
    let max_y = if phi2 < next(0.5 * PI) {
        start.y.max(end.y)
    } else {
        unit.pt(center.y + radius)
    };
    let arc_box = BBox::from_rect(Rect::new(min_x, min_y, max_x, max_y));

    match state.current {
        // The pen implicitly lines to the arc's start point.
        Some(cur) => (
            PathState {
                current: Some(end),
                subpath_start: state.subpath_start.or(Some(cur)),
            },
            BBox::from_points(cur, start) + arc_box,
        ),
        // The arc opens a new subpath.
        None => (
            PathState {
                current: Some(end),
                subpath_start: Some(start),
            },
            arc_box,
        ),
    }
}

/// Arc Bézier emission in native units, with the implicit connecting
/// line when a current point exists.
fn arc_beziers(
    center: Point,
    radius: f64,
    angle1: f64,
    angle2: f64,
    state: PathState,
) -> (PathState, SmallVec<[BezSeg; 2]>) {
    let start = center + radius * Vec2::from_angle(angle1.to_radians());
    let end = center + radius * Vec2::from_angle(angle2.to_radians());

    let mut segs = SmallVec::new();
    let state = match state.current {
        Some(cur) => {
            segs.push(BezSeg::from_line(cur, start));
            PathState {
                current: Some(end),
                subpath_start: state.subpath_start.or(Some(cur)),
            }
        }
        None => PathState {
            current: Some(end),
            subpath_start: Some(start),
        },
    };
    segs.extend(arc_to_beziers(center, radius, angle1, angle2));
    (state, segs)
}

/// A PostScript-style path: an ordered sequence of drawing commands.
///
/// Mutated only by appending; the drawing order is the element order.
/// The only structural validation happens at serialization time, when
/// the first element must be `MoveTo`, `Arc`, or `Arcn`.
///
/// ```
/// use pspath::{Path, Rect, Scale};
///
/// let mut path = Path::new();
/// path.move_to((0.0, 0.0));
/// path.line_to((72.0, 0.0));
/// path.line_to((72.0, 72.0));
/// path.close_path();
///
/// let bbox = path.bbox(&Scale::IDENTITY).unwrap();
/// assert_eq!(bbox.rect(), Some(Rect::new(0.0, 0.0, 72.0, 72.0)));
///
/// let beziers = path.to_bezier().unwrap();
/// assert_eq!(beziers.len(), 3);
/// ```
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<PathEl>);

impl Path {
    /// Create a new, empty path.
    pub fn new() -> Path {
        Default::default()
    }

    /// Create a path from a vector of elements.
    pub fn from_vec(v: Vec<PathEl>) -> Path {
        Path(v)
    }

    /// A straight line between two points.
    pub fn line(p0: impl Into<Point>, p1: impl Into<Point>) -> Path {
        Path(vec![PathEl::MoveTo(p0.into()), PathEl::LineTo(p1.into())])
    }

    /// An axis-aligned rectangle with the given origin and extent.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Path {
        Path(vec![
            PathEl::MoveTo(Point::new(x, y)),
            PathEl::RLineTo(Vec2::new(width, 0.0)),
            PathEl::RLineTo(Vec2::new(0.0, height)),
            PathEl::RLineTo(Vec2::new(-width, 0.0)),
            PathEl::ClosePath,
        ])
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a relative "move to" element onto the path.
    pub fn rel_move_to<V: Into<Vec2>>(&mut self, d: V) {
        self.push(PathEl::RMoveTo(d.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a relative "line to" element onto the path.
    pub fn rel_line_to<V: Into<Vec2>>(&mut self, d: V) {
        self.push(PathEl::RLineTo(d.into()));
    }

    /// Push a counterclockwise arc element onto the path.
    pub fn arc(&mut self, center: impl Into<Point>, radius: f64, angle1: f64, angle2: f64) {
        self.push(PathEl::Arc {
            center: center.into(),
            radius,
            angle1,
            angle2,
        });
    }

    /// Push a clockwise arc element onto the path.
    pub fn arcn(&mut self, center: impl Into<Point>, radius: f64, angle1: f64, angle2: f64) {
        self.push(PathEl::Arcn {
            center: center.into(),
            radius,
            angle1,
            angle2,
        });
    }

    /// Push a tangent arc element onto the path.
    pub fn arct(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, radius: f64) {
        self.push(PathEl::Arct {
            p1: p1.into(),
            p2: p2.into(),
            radius,
        });
    }

    /// Push a "curve to" element onto the path.
    pub fn curve_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Push a relative "curve to" element onto the path.
    pub fn rel_curve_to<V: Into<Vec2>>(&mut self, d1: V, d2: V, d3: V) {
        self.push(PathEl::RCurveTo(d1.into(), d2.into(), d3.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// The path elements, in drawing order.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bounding box of the whole path, in output points.
    ///
    /// Folds over the elements from undefined pen state, merging each
    /// element's own box. An empty path yields [`BBox::EMPTY`].
    ///
    /// # Errors
    ///
    /// Fails if an element needs a current point none of its
    /// predecessors established, or on an [`Arct`](PathEl::Arct)
    /// element.
    pub fn bbox(&self, unit: &impl UnitMap) -> Result<BBox, PathError> {
        let mut state = PathState::default();
        let mut total = BBox::EMPTY;
        for el in &self.0 {
            let (next, bbox) = el.bbox(unit, state)?;
            state = next;
            total += bbox;
        }
        Ok(total)
    }

    /// Convert the whole path into a fresh [`BezPath`], in native
    /// units.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`bbox`](Path::bbox).
    pub fn to_bezier(&self) -> Result<BezPath, PathError> {
        let mut state = PathState::default();
        let mut bpath = BezPath::new();
        for el in &self.0 {
            let (next, segs) = el.to_beziers(state)?;
            state = next;
            bpath.extend(segs);
        }
        Ok(bpath)
    }

    /// Serialize the path, one command per line.
    ///
    /// # Errors
    ///
    /// Fails with [`PathError::InvalidStart`] unless the first element
    /// is `MoveTo`, `Arc`, or `Arcn`, and with [`PathError::Format`]
    /// if the writer fails.
    pub fn write_ps<W: fmt::Write>(
        &self,
        unit: &impl UnitMap,
        writer: &mut W,
    ) -> Result<(), PathError> {
        match self.0.first() {
            Some(PathEl::MoveTo(_) | PathEl::Arc { .. } | PathEl::Arcn { .. }) => {}
            _ => return Err(PathError::InvalidStart),
        }
        for el in &self.0 {
            el.write(unit, writer)?;
            writer.write_char('\n')?;
        }
        Ok(())
    }

    /// Serialize the path to a `String`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`write_ps`](Path::write_ps).
    pub fn to_ps(&self, unit: &impl UnitMap) -> Result<String, PathError> {
        let mut out = String::new();
        self.write_ps(unit, &mut out)?;
        Ok(out)
    }
}

impl Add for Path {
    type Output = Path;

    fn add(mut self, other: Path) -> Path {
        self.0.extend(other.0);
        self
    }
}

impl AddAssign for Path {
    fn add_assign(&mut self, other: Path) {
        self.0.extend(other.0);
    }
}

impl Extend<PathEl> for Path {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<PathEl> for Path {
    fn from_iter<I: IntoIterator<Item = PathEl>>(iter: I) -> Path {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathEl;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scale;

    const ID: Scale = Scale::IDENTITY;

    fn rect_of(path: &Path) -> Rect {
        path.bbox(&ID).unwrap().rect().unwrap()
    }

    fn assert_rect_near(actual: Rect, expected: Rect) {
        assert!(
            (actual.x0 - expected.x0).abs() < 1e-9
                && (actual.y0 - expected.y0).abs() < 1e-9
                && (actual.x1 - expected.x1).abs() < 1e-9
                && (actual.y1 - expected.y1).abs() < 1e-9,
            "got {actual:?}, expected {expected:?}"
        );
    }

    #[test]
    fn polyline_bbox() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.line_to((4.0, -2.0));
        path.rel_line_to((0.0, 5.0));
        path.close_path();
        assert_eq!(rect_of(&path), Rect::new(1.0, -2.0, 4.0, 3.0));
    }

    #[test]
    fn bbox_applies_unit_conversion() {
        let path = Path::rect(1.0, 1.0, 2.0, 3.0);
        let bbox = path.bbox(&Scale(10.0)).unwrap();
        assert_eq!(bbox.rect(), Some(Rect::new(10.0, 10.0, 30.0, 40.0)));
    }

    #[test]
    fn lone_moveto_has_point_bbox() {
        let mut path = Path::new();
        path.move_to((3.0, 4.0));
        assert_eq!(rect_of(&path), Rect::new(3.0, 4.0, 3.0, 4.0));
    }

    #[test]
    fn empty_path_bbox_is_empty() {
        assert_eq!(Path::new().bbox(&ID).unwrap(), BBox::EMPTY);
    }

    #[test]
    fn arc_bbox_crosses_cardinals() {
        // Sweep 0..180 crosses 90°, so the top is the circle's y
        // extremum; left and right come from the sweep limits.
        let mut path = Path::new();
        path.arc((0.0, 0.0), 10.0, 0.0, 180.0);
        assert_rect_near(rect_of(&path), Rect::new(-10.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn arc_bbox_across_zero_degrees() {
        // 350..10 crosses 0° but never 180°: the right edge is the
        // circle's x extremum, the left edge stays near the endpoints.
        let mut path = Path::new();
        path.arc((0.0, 0.0), 10.0, 350.0, 10.0);
        let rect = rect_of(&path);
        assert!((rect.x1 - 10.0).abs() < 1e-9);
        assert!(rect.x0 > 9.0);
        let sin10 = 10f64.to_radians().sin() * 10.0;
        assert!((rect.y0 - -sin10).abs() < 1e-9);
        assert!((rect.y1 - sin10).abs() < 1e-9);
    }

    #[test]
    fn arc_bbox_includes_connecting_line() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.arc((5.0, 0.0), 1.0, 0.0, 90.0);
        let rect = rect_of(&path);
        // The implicit line from (0,0) to the arc start (6,0).
        assert!((rect.x0 - 0.0).abs() < 1e-9);
        assert!((rect.x1 - 6.0).abs() < 1e-9);
    }

    #[test]
    fn arcn_matches_swapped_arc() {
        let mut cw = Path::new();
        cw.arcn((1.0, 2.0), 4.0, 90.0, 0.0);
        let mut ccw = Path::new();
        ccw.arc((1.0, 2.0), 4.0, 0.0, 90.0);
        assert_eq!(cw.bbox(&ID), ccw.bbox(&ID));
        assert_eq!(cw.to_bezier(), ccw.to_bezier());
    }

    #[test]
    fn missing_current_point_errors() {
        let mut path = Path::new();
        path.rel_move_to((1.0, 1.0));
        assert_eq!(path.bbox(&ID), Err(PathError::MissingCurrentPoint));

        let mut path = Path::new();
        path.line_to((1.0, 1.0));
        assert_eq!(path.to_bezier(), Err(PathError::MissingCurrentPoint));

        // ClosePath resets the pen; a relative move after it fails too.
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.close_path();
        path.rel_line_to((1.0, 1.0));
        assert_eq!(path.bbox(&ID), Err(PathError::MissingCurrentPoint));
    }

    #[test]
    fn arct_is_unsupported() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.arct((1.0, 0.0), (1.0, 1.0), 0.5);
        assert_eq!(path.bbox(&ID), Err(PathError::Unsupported("arct")));
        assert_eq!(path.to_bezier(), Err(PathError::Unsupported("arct")));
        // Serialization still works.
        let ps = path.to_ps(&ID).unwrap();
        assert!(ps.lines().nth(1).unwrap().ends_with("arct"));
    }

    #[test]
    fn serialize_requires_valid_start() {
        let mut path = Path::new();
        path.line_to((1.0, 1.0));
        assert_eq!(path.to_ps(&ID), Err(PathError::InvalidStart));
        assert_eq!(Path::new().to_ps(&ID), Err(PathError::InvalidStart));

        let mut path = Path::new();
        path.arc((0.0, 0.0), 1.0, 0.0, 90.0);
        assert!(path.to_ps(&ID).is_ok());
    }

    #[test]
    fn serialize_output() {
        let mut path = Path::new();
        path.move_to((10.0, 20.0));
        path.rel_line_to((5.0, 0.0));
        path.close_path();
        let ps = path.to_ps(&ID).unwrap();
        assert_eq!(
            ps,
            "10.000000 20.000000 moveto\n5.000000 0.000000 rlineto\nclosepath\n"
        );
    }

    #[test]
    fn serialize_converts_lengths_not_angles() {
        let mut path = Path::new();
        path.arc((1.0, 2.0), 3.0, 45.0, 90.0);
        let ps = path.to_ps(&Scale(2.0)).unwrap();
        assert_eq!(
            ps,
            "2.000000 4.000000 6.000000 45.000000 90.000000 arc\n"
        );
    }

    #[test]
    fn polyline_round_trip_through_beziers() {
        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(2.0, 7.0),
        ];
        let mut path = Path::new();
        path.move_to(vertices[0]);
        for &v in &vertices[1..] {
            path.line_to(v);
        }
        path.close_path();

        let bpath = path.to_bezier().unwrap();
        assert_eq!(bpath.len(), vertices.len());
        for (seg, pair) in bpath.segments().iter().zip(vertices.windows(2)) {
            assert_eq!(seg.eval(0.0), pair[0]);
            assert_eq!(seg.eval(1.0), pair[1]);
        }
        // The closing segment returns to the subpath start.
        let last = bpath.segments().last().unwrap();
        assert_eq!(last.start(), vertices[3]);
        assert_eq!(last.end(), vertices[0]);
    }

    #[test]
    fn moveto_emits_no_geometry() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.rel_move_to((2.0, 0.0));
        assert!(path.to_bezier().unwrap().is_empty());
    }

    #[test]
    fn arc_without_current_point_opens_subpath() {
        let mut path = Path::new();
        path.arc((0.0, 0.0), 10.0, 30.0, 300.0);
        path.close_path();
        let bpath = path.to_bezier().unwrap();
        // No connecting line: the first segment starts on the circle.
        let arc_start = Point::new(0.0, 0.0) + 10.0 * Vec2::from_angle(30f64.to_radians());
        assert!(bpath.segments()[0].start().distance(arc_start) < 1e-12);
        // ClosePath lines back to the arc's start point.
        let last = bpath.segments().last().unwrap();
        assert!(last.end().distance(arc_start) < 1e-12);
    }

    #[test]
    fn arc_with_current_point_emits_connecting_line() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.arc((5.0, 0.0), 1.0, 0.0, 45.0);
        let bpath = path.to_bezier().unwrap();
        let first = bpath.segments()[0];
        assert_eq!(first.start(), Point::new(0.0, 0.0));
        assert!(first.end().distance(Point::new(6.0, 0.0)) < 1e-12);
    }

    #[test]
    fn rel_curve_matches_absolute() {
        let mut rel = Path::new();
        rel.move_to((1.0, 1.0));
        rel.rel_curve_to((1.0, 2.0), (3.0, 2.0), (4.0, 0.0));
        let mut abs = Path::new();
        abs.move_to((1.0, 1.0));
        abs.curve_to((2.0, 3.0), (4.0, 3.0), (5.0, 1.0));
        assert_eq!(rel.to_bezier(), abs.to_bezier());
        assert_eq!(rel.bbox(&ID), abs.bbox(&ID));
    }

    #[test]
    fn curve_bbox_is_control_point_hull() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.curve_to((1.0, 3.0), (2.0, 3.0), (3.0, 0.0));
        // The curve itself peaks at y = 2.25; the reported box uses the
        // raw control points.
        assert_eq!(rect_of(&path), Rect::new(0.0, 0.0, 3.0, 3.0));
    }

    #[test]
    fn path_concat() {
        let joined = Path::line((0.0, 0.0), (1.0, 0.0)) + Path::line((1.0, 0.0), (1.0, 1.0));
        assert_eq!(joined.len(), 4);
        assert_eq!(rect_of(&joined), Rect::new(0.0, 0.0, 1.0, 1.0));
    }
}
