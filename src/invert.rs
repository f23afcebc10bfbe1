// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reversing the direction of subpaths.

use alloc::vec::Vec;

use crate::{ArcSegment, Point, Segment, SubPath};

impl Segment {
    /// This segment traversed backwards, ending at `to` (its old start point).
    fn reversed(self, to: Point) -> Segment {
        match self {
            Segment::Line { .. } => Segment::Line { to },
            Segment::Quad { ctrl, .. } => Segment::Quad { ctrl, to },
            Segment::Cubic { ctrl1, ctrl2, .. } => Segment::Cubic {
                ctrl1: ctrl2,
                ctrl2: ctrl1,
                to,
            },
            Segment::Arc(arc) => Segment::Arc(ArcSegment {
                sweep: !arc.sweep,
                to,
                ..arc
            }),
        }
    }
}

impl SubPath {
    /// The same shape, traced in the opposite direction.
    ///
    /// The new start point is the old end point. For a closed subpath, the
    /// implicit closing edge is reversed along with the rest, and a final
    /// straight edge back to the start is left implicit again.
    ///
    /// ```
    /// use pathdata::{Point, Segment, SubPath};
    ///
    /// let mut p = SubPath::new((0., 0.));
    /// p.line_to((100., 100.));
    /// p.line_to((0., 100.));
    /// p.close();
    ///
    /// let r = p.invert();
    /// assert_eq!(r.start, Point::new(0., 0.));
    /// assert_eq!(r.segments[0], Segment::Line { to: Point::new(0., 100.) });
    /// assert_eq!(r.segments[1], Segment::Line { to: Point::new(100., 100.) });
    /// assert!(r.closed);
    /// ```
    pub fn invert(&self) -> SubPath {
        if self.segments.is_empty() {
            return self.clone();
        }
        let mut path = self.segments.clone();
        if self.closed && self.end_point() != self.start {
            path.push(Segment::Line { to: self.start });
        }
        let new_start = path.last().map_or(self.start, Segment::to_point);

        let mut segments = Vec::with_capacity(path.len());
        for (ix, seg) in path.iter().enumerate().rev() {
            let prev_end = match ix {
                0 => self.start,
                _ => path[ix - 1].to_point(),
            };
            segments.push(seg.reversed(prev_end));
        }
        if self.closed && segments.last() == Some(&Segment::Line { to: new_start }) {
            segments.pop();
        }

        SubPath {
            start: new_start,
            segments,
            closed: self.closed,
            cached_text: None,
        }
    }
}

/// Reverse the direction of `subpath`.
///
/// See [`SubPath::invert`].
pub fn invert(subpath: &SubPath) -> SubPath {
    subpath.invert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;
    use alloc::vec;

    fn line(x: f64, y: f64) -> Segment {
        Segment::Line {
            to: Point::new(x, y),
        }
    }

    #[test]
    fn closed_triangle() {
        let mut p = SubPath::new((0., 0.));
        p.line_to((100., 100.));
        p.line_to((0., 100.));
        p.close();
        let r = invert(&p);
        assert_eq!(r.start, Point::ZERO);
        assert_eq!(r.segments, vec![line(0., 100.), line(100., 100.)]);
        assert!(r.closed);
    }

    #[test]
    fn open_mixed_segments() {
        let mut p = SubPath::new((0., 0.));
        p.line_to((1., 0.));
        p.quad_to((2., 1.), (3., 0.));
        p.curve_to((4., 1.), (5., 2.), (6., 0.));
        let r = p.invert();
        assert_eq!(r.start, Point::new(6., 0.));
        assert_eq!(
            r.segments,
            vec![
                Segment::Cubic {
                    ctrl1: Point::new(5., 2.),
                    ctrl2: Point::new(4., 1.),
                    to: Point::new(3., 0.)
                },
                Segment::Quad {
                    ctrl: Point::new(2., 1.),
                    to: Point::new(1., 0.)
                },
                line(0., 0.),
            ]
        );
        assert!(!r.closed);
        assert_eq!(r.invert(), p);
    }

    #[test]
    fn closed_involution() {
        let mut p = SubPath::new((0., 0.));
        p.line_to((10., 0.));
        p.curve_to((12., 3.), (12., 7.), (10., 10.));
        p.close();
        let r = p.invert();
        assert_eq!(r.start, Point::ZERO);
        assert_eq!(r.segments[0], line(10., 10.));
        assert_eq!(r.segments.len(), 2);
        assert_eq!(r.invert(), p);
    }

    #[test]
    fn explicit_closing_line_becomes_implicit() {
        let mut p = SubPath::new((0., 0.));
        p.line_to((5., 0.));
        p.line_to((0., 0.));
        p.close();
        let r = p.invert();
        assert_eq!(r.start, Point::ZERO);
        assert_eq!(r.segments, vec![line(5., 0.)]);
        // Stable from here on.
        assert_eq!(r.invert(), r);
    }

    #[test]
    fn arcs_flip_sweep() {
        let arc = ArcSegment {
            radii: Vec2::new(5., 3.),
            x_rotation_deg: 20.,
            large_arc: true,
            sweep: false,
            to: Point::new(8., 1.),
        };
        let mut p = SubPath::new((1., 1.));
        p.arc_to(arc);
        let r = p.invert();
        assert_eq!(r.start, Point::new(8., 1.));
        assert_eq!(
            r.segments,
            vec![Segment::Arc(ArcSegment {
                sweep: true,
                to: Point::new(1., 1.),
                ..arc
            })]
        );
        assert_eq!(r.invert(), p);
    }

    #[test]
    fn empty_is_unchanged() {
        let p = SubPath::new((3., 4.));
        assert_eq!(p.invert(), p);
        let mut closed = SubPath::new((3., 4.)).with_cached_text("M3 4z");
        closed.close();
        assert_eq!(closed.invert(), closed);
    }

    #[test]
    fn cached_text_is_dropped() {
        let mut p = SubPath::new((0., 0.));
        p.line_to((1., 1.));
        let p = p.with_cached_text("M0 0 1 1");
        assert_eq!(p.invert().cached_text, None);
    }
}
