// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converting elliptical arcs into cubic Béziers.

use arrayvec::ArrayVec;
use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{ArcSegment, Point, Segment, SubPath, Vec2};

/// Control arm length, relative to the radius, of a cubic approximating a
/// quarter circle.
const QUARTER_ARC_ARM: f64 = 0.552_284_749_830_793_6;

/// Sweeps within this many quarter turns above a whole number of quarter
/// turns are rounded down, so floating point error doesn't add a piece.
const QUARTER_SLACK: f64 = 1e-7;

/// An ellipse in center parameterization, as needed to sample an arc.
struct Ellipse {
    center: Point,
    radii: Vec2,
    sin_phi: f64,
    cos_phi: f64,
}

impl Ellipse {
    /// Map a vector from the ellipse's axis-aligned frame to the drawing.
    fn unrotate(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.cos_phi * v.x - self.sin_phi * v.y,
            self.sin_phi * v.x + self.cos_phi * v.y,
        )
    }

    /// The point at parameter `angle`, and the derivative there.
    fn sample(&self, angle: f64) -> (Point, Vec2) {
        let (sin, cos) = angle.sin_cos();
        let pos = self.unrotate(Vec2::new(self.radii.x * cos, self.radii.y * sin));
        let deriv = self.unrotate(Vec2::new(-self.radii.x * sin, self.radii.y * cos));
        (self.center + pos, deriv)
    }
}

impl ArcSegment {
    /// Approximate this arc, drawn from `from`, with cubic Béziers.
    ///
    /// The sweep is cut into the fewest equal pieces of at most a quarter
    /// turn each, so at most four cubics are returned. The last one ends
    /// exactly at [`to`][ArcSegment::to].
    ///
    /// An arc with a zero radius, or whose endpoints coincide, is a straight
    /// traversal and comes back as a single [`Segment::Line`]. Radii too
    /// small to connect the endpoints are scaled up uniformly until they do.
    ///
    /// ```
    /// use pathdata::{ArcSegment, Point, Segment, Vec2};
    ///
    /// let arc = ArcSegment {
    ///     radii: Vec2::new(100., 100.),
    ///     x_rotation_deg: 0.,
    ///     large_arc: false,
    ///     sweep: false,
    ///     to: Point::new(50., 0.),
    /// };
    /// let cubics = arc.to_cubics(Point::ZERO);
    /// assert_eq!(cubics.len(), 1);
    /// assert_eq!(cubics[0].to_point(), Point::new(50., 0.));
    /// ```
    pub fn to_cubics(&self, from: Point) -> ArrayVec<Segment, 4> {
        let mut out = ArrayVec::new();
        let to = self.to;
        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();
        let (sin_phi, cos_phi) = self.x_rotation_deg.to_radians().sin_cos();

        // Half the chord, in the ellipse's axis-aligned frame.
        let half = (from - to) * 0.5;
        let p = Vec2::new(
            cos_phi * half.x + sin_phi * half.y,
            -sin_phi * half.x + cos_phi * half.y,
        );
        if rx == 0. || ry == 0. || p == Vec2::ZERO {
            out.push(Segment::Line { to });
            return out;
        }

        let reach = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
        if reach > 1. {
            let scale = reach.sqrt();
            log::debug!("arc radii ({rx}, {ry}) can't span the chord, scaling by {scale}");
            rx *= scale;
            ry *= scale;
        }

        // The center, in the axis-aligned frame, then in the drawing.
        let rx_py = rx * p.y;
        let ry_px = ry * p.x;
        let sum_sq = rx_py * rx_py + ry_px * ry_px;
        let rxry = rx * ry;
        let sign = if self.large_arc == self.sweep { -1. } else { 1. };
        let coef = sign * ((rxry * rxry - sum_sq) / sum_sq).abs().sqrt();
        let c = Vec2::new(coef * rx_py / ry, -coef * ry_px / rx);
        let mut ellipse = Ellipse {
            center: from.midpoint(to),
            radii: Vec2::new(rx, ry),
            sin_phi,
            cos_phi,
        };
        ellipse.center += ellipse.unrotate(c);

        let start_angle = Vec2::new((p.x - c.x) / rx, (p.y - c.y) / ry).atan2();
        let end_angle = Vec2::new((-p.x - c.x) / rx, (-p.y - c.y) / ry).atan2();
        let mut sweep_angle = (end_angle - start_angle) % TAU;
        if self.sweep && sweep_angle < 0. {
            sweep_angle += TAU;
        } else if !self.sweep && sweep_angle > 0. {
            sweep_angle -= TAU;
        }

        let quarters = sweep_angle.abs() / FRAC_PI_2;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the piece count is clamped to 1..=4"
        )]
        let n = (quarters - QUARTER_SLACK).ceil().clamp(1., 4.) as usize;
        let step = sweep_angle / n as f64;
        let arm = if step.abs() == FRAC_PI_2 {
            if step < 0. {
                -QUARTER_ARC_ARM
            } else {
                QUARTER_ARC_ARM
            }
        } else {
            (4. / 3.) * (step / 4.).tan()
        };

        let mut angle = start_angle;
        let (_, mut d0) = ellipse.sample(angle);
        let mut p0 = from;
        for i in 0..n {
            angle += step;
            let (p1, d1) = ellipse.sample(angle);
            let end = if i + 1 == n { to } else { p1 };
            out.push(Segment::Cubic {
                ctrl1: p0 + arm * d0,
                ctrl2: p1 - arm * d1,
                to: end,
            });
            p0 = end;
            d0 = d1;
        }
        out
    }
}

impl SubPath {
    /// Replace every arc with the cubic Béziers approximating it.
    ///
    /// See [`ArcSegment::to_cubics`]. Other segments are kept as they are.
    /// If an arc was replaced, the result has no cached text.
    pub fn normalize_arcs(&self) -> SubPath {
        if !self.has_arcs() {
            return self.clone();
        }
        let mut current = self.start;
        let mut segments = alloc::vec::Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            match seg {
                Segment::Arc(arc) => segments.extend(arc.to_cubics(current)),
                _ => segments.push(*seg),
            }
            current = seg.to_point();
        }
        SubPath {
            start: self.start,
            segments,
            closed: self.closed,
            cached_text: None,
        }
    }
}

/// Replace every arc of `subpath` with cubic Béziers.
///
/// See [`SubPath::normalize_arcs`].
pub fn normalize_arcs(subpath: &SubPath) -> SubPath {
    subpath.normalize_arcs()
}
