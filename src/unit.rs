// Copyright 2026 the Pspath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit conversion from native lengths to output points.

/// Conversion from the path's native length unit to output points.
///
/// Bounding box and serialization queries call [`pt`] for every stored
/// coordinate before comparing or combining it with other converted
/// coordinates; lengths are never compared across units. The conversion
/// must be a linear scaling (`pt(a + b) == pt(a) + pt(b)` and
/// `pt(s * a) == s * pt(a)`), since derived coordinates such as arc
/// extrema are converted after arithmetic in native units.
///
/// The trait is implemented for any `Fn(f64) -> f64`, so a closure works
/// wherever a converter is expected:
///
/// ```
/// use pspath::UnitMap;
///
/// let mm = |len: f64| len * 72.0 / 25.4;
/// assert!((mm.pt(25.4) - 72.0).abs() < 1e-12);
/// ```
///
/// [`pt`]: UnitMap::pt
pub trait UnitMap {
    /// Convert a length in the native unit to output points.
    fn pt(&self, len: f64) -> f64;
}

impl<F: Fn(f64) -> f64> UnitMap for F {
    #[inline]
    fn pt(&self, len: f64) -> f64 {
        self(len)
    }
}

/// A unit map multiplying every length by a fixed factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(pub f64);

impl Scale {
    /// The identity conversion: native lengths already are points.
    pub const IDENTITY: Scale = Scale(1.0);
}

impl UnitMap for Scale {
    #[inline]
    fn pt(&self, len: f64) -> f64 {
        self.0 * len
    }
}
