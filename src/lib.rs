// Copyright 2026 the Pspath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PostScript-style vector paths, with a focus on precise geometry.
//!
//! The pspath library contains data structures and algorithms for paths
//! built from PostScript drawing commands. A [`Path`] is an ordered
//! sequence of [`PathEl`] commands (`moveto`, `lineto`, `arc`,
//! `curveto` and their relative forms); from it you can compute a
//! precise axis-aligned [`BBox`], serialize the commands as text, or
//! convert the whole path into a canonical piecewise-cubic [`BezPath`]
//! for processing that wants a single segment type.
//!
//! # Examples
//!
//! Building a path and taking its bounding box:
//! ```
//! use pspath::{Path, Rect, Scale};
//!
//! let mut path = Path::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((30.0, 0.0));
//! path.arc((30.0, 10.0), 10.0, 270.0, 90.0);
//! path.line_to((0.0, 20.0));
//! path.close_path();
//!
//! let bbox = path.bbox(&Scale::IDENTITY)?;
//! assert_eq!(bbox.rect(), Some(Rect::new(0.0, 0.0, 40.0, 20.0)));
//! # Ok::<(), pspath::PathError>(())
//! ```
//!
//! Converting to cubic Béziers and refining them by subdivision:
//! ```
//! use pspath::Path;
//!
//! let path = Path::line((0.0, 0.0), (8.0, 6.0));
//! let beziers = path.to_bezier()?;
//! let halves = beziers.subdivide();
//! assert_eq!(halves.len(), 2 * beziers.len());
//! # Ok::<(), pspath::PathError>(())
//! ```
//!
//! Length units are abstracted by the [`UnitMap`] trait: a path stores
//! its coordinates in whatever unit the caller works in, and bounding
//! boxes and serialized output are produced in printer's points by
//! passing a converter. [`Scale`] covers the common linear case.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod arc;
mod bbox;
mod bezpath;
mod bezseg;
mod path;
mod point;
mod rect;
mod unit;
mod vec2;

pub use crate::arc::*;
pub use crate::bbox::*;
pub use crate::bezpath::*;
pub use crate::bezseg::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::unit::*;
pub use crate::vec2::*;
