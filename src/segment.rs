// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segments and subpaths.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{Point, Vec2};

/// One drawing directive of a subpath.
///
/// A segment carries no start point: it starts wherever the previous segment
/// of its [`SubPath`] ended, or at [`SubPath::start`] for the first one. All
/// coordinates are absolute.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A straight line to `to`.
    Line {
        /// The end point.
        to: Point,
    },
    /// A quadratic Bézier curve.
    Quad {
        /// The control point.
        ctrl: Point,
        /// The end point.
        to: Point,
    },
    /// A cubic Bézier curve.
    Cubic {
        /// The control point nearest to the start.
        ctrl1: Point,
        /// The control point nearest to `to`.
        ctrl2: Point,
        /// The end point.
        to: Point,
    },
    /// An elliptical arc.
    Arc(ArcSegment),
}

/// The parameters of an elliptical arc, as path data spells them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcSegment {
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation_deg`.
    pub radii: Vec2,
    /// How much the ellipse is rotated, in degrees.
    pub x_rotation_deg: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
    /// The arc's end point.
    pub to: Point,
}

impl Segment {
    /// The point this segment ends at, which becomes the current point.
    #[inline]
    pub fn to_point(&self) -> Point {
        match self {
            Segment::Line { to }
            | Segment::Quad { to, .. }
            | Segment::Cubic { to, .. }
            | Segment::Arc(ArcSegment { to, .. }) => *to,
        }
    }

    /// Is every number in this segment finite?
    pub fn is_finite(&self) -> bool {
        match self {
            Segment::Line { to } => to.is_finite(),
            Segment::Quad { ctrl, to } => ctrl.is_finite() && to.is_finite(),
            Segment::Cubic { ctrl1, ctrl2, to } => {
                ctrl1.is_finite() && ctrl2.is_finite() && to.is_finite()
            }
            Segment::Arc(arc) => {
                arc.radii.is_finite() && arc.x_rotation_deg.is_finite() && arc.to.is_finite()
            }
        }
    }
}

/// One contiguous traversal, beginning at a move directive.
///
/// A closed subpath has an implicit final line back to `start`; that line is
/// not stored in `segments`. A subpath with no segments is a single point.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubPath {
    /// Where the subpath begins.
    pub start: Point,
    /// The drawing directives, in order.
    pub segments: Vec<Segment>,
    /// Whether the subpath returns to `start` at the end.
    pub closed: bool,
    /// An already known text form of this subpath.
    ///
    /// When present, the serializer writes it verbatim instead of generating
    /// text from the other fields. Nothing checks that it agrees with them.
    pub cached_text: Option<String>,
}

/// An error returned by [`SubPath::transform_points`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransformError {
    /// The subpath still contains an arc, which can't be mapped point-wise.
    ///
    /// Run [`SubPath::normalize_arcs`] first.
    UnnormalizedArc {
        /// Index of the offending segment.
        index: usize,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::UnnormalizedArc { index } => write!(
                f,
                "segment {index} is an arc; normalize arcs before transforming points"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransformError {}

impl SubPath {
    /// Create an empty, open subpath starting at `start`.
    pub fn new(start: impl Into<Point>) -> SubPath {
        SubPath {
            start: start.into(),
            ..Default::default()
        }
    }

    /// Push a "line to" segment onto the subpath.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.segments.push(Segment::Line { to: p.into() });
    }

    /// Push a "quad to" segment onto the subpath.
    pub fn quad_to(&mut self, ctrl: impl Into<Point>, to: impl Into<Point>) {
        self.segments.push(Segment::Quad {
            ctrl: ctrl.into(),
            to: to.into(),
        });
    }

    /// Push a "curve to" segment onto the subpath.
    pub fn curve_to(&mut self, ctrl1: impl Into<Point>, ctrl2: impl Into<Point>, to: impl Into<Point>) {
        self.segments.push(Segment::Cubic {
            ctrl1: ctrl1.into(),
            ctrl2: ctrl2.into(),
            to: to.into(),
        });
    }

    /// Push an elliptical arc onto the subpath.
    pub fn arc_to(&mut self, arc: ArcSegment) {
        self.segments.push(Segment::Arc(arc));
    }

    /// Mark the subpath as closed.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Attach a known text form, to be emitted verbatim by the serializer.
    #[must_use]
    pub fn with_cached_text(mut self, text: impl Into<String>) -> SubPath {
        self.cached_text = Some(text.into());
        self
    }

    /// Does the subpath have no segments?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The end point of the last segment, or `start` if there are none.
    ///
    /// This ignores `closed`: the implicit closing line is not a segment.
    pub fn end_point(&self) -> Point {
        self.segments
            .last()
            .map(Segment::to_point)
            .unwrap_or(self.start)
    }

    /// Does any segment need [`normalize_arcs`][SubPath::normalize_arcs]?
    pub fn has_arcs(&self) -> bool {
        self.segments.iter().any(|seg| matches!(seg, Segment::Arc(_)))
    }

    /// Map every point of the subpath (start, control and end points).
    ///
    /// Arcs can't be mapped this way under a general transform, so their
    /// presence is an error. The result never carries `cached_text`.
    pub fn transform_points(
        &self,
        mut f: impl FnMut(Point) -> Point,
    ) -> Result<SubPath, TransformError> {
        let start = f(self.start);
        let segments = self
            .segments
            .iter()
            .enumerate()
            .map(|(index, seg)| match *seg {
                Segment::Line { to } => Ok(Segment::Line { to: f(to) }),
                Segment::Quad { ctrl, to } => Ok(Segment::Quad {
                    ctrl: f(ctrl),
                    to: f(to),
                }),
                Segment::Cubic { ctrl1, ctrl2, to } => Ok(Segment::Cubic {
                    ctrl1: f(ctrl1),
                    ctrl2: f(ctrl2),
                    to: f(to),
                }),
                Segment::Arc(_) => Err(TransformError::UnnormalizedArc { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SubPath {
            start,
            segments,
            closed: self.closed,
            cached_text: None,
        })
    }
}

/// Map every point of `subpath`; see [`SubPath::transform_points`].
pub fn transform_points(
    subpath: &SubPath,
    f: impl FnMut(Point) -> Point,
) -> Result<SubPath, TransformError> {
    subpath.transform_points(f)
}
