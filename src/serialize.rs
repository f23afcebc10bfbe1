// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing subpaths back out as path data.

use alloc::format;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::{ArcSegment, Segment, SubPath};

/// A segment in its absolute, canonical form, such as `C1,1 2,2 3,0`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Line { to } => write!(f, "L{to}"),
            Segment::Quad { ctrl, to } => write!(f, "Q{ctrl} {to}"),
            Segment::Cubic { ctrl1, ctrl2, to } => write!(f, "C{ctrl1} {ctrl2} {to}"),
            Segment::Arc(ArcSegment {
                radii,
                x_rotation_deg,
                large_arc,
                sweep,
                to,
            }) => write!(
                f,
                "A{} {} {} {} {} {to}",
                radii.x,
                radii.y,
                x_rotation_deg,
                u8::from(*large_arc),
                u8::from(*sweep),
            ),
        }
    }
}

/// Where a [`Serializer`] is within the current subpath.
#[derive(Clone, Copy, Debug)]
enum Stage {
    Move,
    Segment(usize),
}

/// An iterator over the text fragments of a sequence of subpaths.
///
/// Created by [`serialize`]. The fragments concatenate to path data that
/// uses only the absolute `M`, `L`, `Q`, `C`, `A` and `Z` commands.
#[derive(Debug)]
pub struct Serializer<I: Iterator> {
    subpaths: I,
    current: Option<(I::Item, Stage)>,
    /// Nothing has been written yet, so no separator is needed.
    first: bool,
}

impl<I> Serializer<I>
where
    I: Iterator,
    I::Item: Borrow<SubPath>,
{
    fn separated(&mut self, mut fragment: String) -> String {
        if !self.first {
            fragment.insert(0, ' ');
        }
        self.first = false;
        fragment
    }
}

impl<I> Iterator for Serializer<I>
where
    I: Iterator,
    I::Item: Borrow<SubPath>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let Some((item, stage)) = self.current.take() else {
                self.current = Some((self.subpaths.next()?, Stage::Move));
                continue;
            };
            let subpath = item.borrow();
            let (fragment, next_stage) = match stage {
                Stage::Move => {
                    if let Some(text) = &subpath.cached_text {
                        (text.clone(), None)
                    } else {
                        (format!("M{}", subpath.start), Some(Stage::Segment(0)))
                    }
                }
                Stage::Segment(ix) if ix < subpath.segments.len() => (
                    format!("{}", subpath.segments[ix]),
                    Some(Stage::Segment(ix + 1)),
                ),
                Stage::Segment(_) => {
                    if !subpath.closed {
                        continue;
                    }
                    (String::from("Z"), None)
                }
            };
            if let Some(next_stage) = next_stage {
                self.current = Some((item, next_stage));
            }
            return Some(self.separated(fragment));
        }
    }
}

impl<I> FusedIterator for Serializer<I>
where
    I: FusedIterator,
    I::Item: Borrow<SubPath>,
{
}

/// Turn subpaths into path-data text fragments.
///
/// The subpaths may be owned or borrowed. A subpath carrying
/// [`cached_text`][SubPath::cached_text] is written as that text, verbatim.
///
/// ```
/// use pathdata::{parse_str, serialize};
///
/// let subpaths = parse_str("M0,0L100,100Z").collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(serialize(&subpaths).collect::<String>(), "M0,0 L100,100 Z");
/// ```
pub fn serialize<I>(subpaths: I) -> Serializer<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Borrow<SubPath>,
{
    Serializer {
        subpaths: subpaths.into_iter(),
        current: None,
        first: true,
    }
}

/// Serialize subpaths into one string of path data.
pub fn to_svg<I>(subpaths: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<SubPath>,
{
    serialize(subpaths).collect()
}

impl fmt::Display for SubPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in serialize(core::iter::once(self)) {
            f.write_str(&fragment)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl SubPath {
    /// Write out the text representation of this subpath to anything
    /// implementing `io::Write`.
    ///
    /// `SubPath` also implements [`Display`][fmt::Display], which can be
    /// used when you need an in-memory string.
    pub fn write_to(&self, mut w: impl std::io::Write) -> std::io::Result<()> {
        write!(w, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_str, Point, Vec2};
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    fn parse_all(data: &str) -> Vec<SubPath> {
        parse_str(data).collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn close_round_trip() {
        assert_eq!(to_svg(parse_all("M0,0L100,100Z")), "M0,0 L100,100 Z");
    }

    #[test]
    fn only_absolute_canonical_commands() {
        let text = to_svg(parse_all(
            "m1 1 h2 v2 q1 1 2 0 t2 0 c1 1 2 1 3 0 s1 1 2 0 a5 5 30 1 0 3 3",
        ));
        assert_eq!(
            text,
            "M1,1 L3,1 L3,3 Q4,4 5,3 Q6,2 7,3 C8,4 9,4 10,3 C11,2 11,4 12,3 A5 5 30 1 0 15,6"
        );
    }

    #[test]
    fn fragments_are_separated() {
        let paths = parse_all("M0 0 L1 1 Z M5 5");
        let fragments: Vec<String> = serialize(&paths).collect();
        assert_eq!(fragments, vec!["M0,0", " L1,1", " Z", " M5,5"]);
    }

    #[test]
    fn cached_text_is_verbatim() {
        let mut p = SubPath::new((0., 0.));
        p.line_to((1., 1.));
        let cached = p.clone().with_cached_text("m0 0 l1 1");
        assert_eq!(to_svg([&p, &cached, &p]), "M0,0 L1,1 m0 0 l1 1 M0,0 L1,1");
        assert_eq!(cached.to_string(), "m0 0 l1 1");
    }

    #[test]
    fn display_and_write_to() {
        let mut p = SubPath::new((0.5, -1.));
        p.arc_to(ArcSegment {
            radii: Vec2::new(2., 3.),
            x_rotation_deg: 0.,
            large_arc: false,
            sweep: true,
            to: Point::new(4., 0.),
        });
        p.close();
        assert_eq!(p.to_string(), "M0.5,-1 A2 3 0 0 1 4,0 Z");
        let mut buf = Vec::new();
        p.write_to(&mut buf).unwrap();
        assert_eq!(buf, b"M0.5,-1 A2 3 0 0 1 4,0 Z");
    }

    #[test]
    fn segment_display() {
        let cubic = Segment::Cubic {
            ctrl1: Point::new(1., 1.),
            ctrl2: Point::new(2., 2.5),
            to: Point::new(3., 0.),
        };
        assert_eq!(cubic.to_string(), "C1,1 2,2.5 3,0");
        let quad = Segment::Quad {
            ctrl: Point::new(-1., 0.),
            to: Point::new(0., 1e-7),
        };
        assert_eq!(quad.to_string(), "Q-1,0 0,0.0000001");
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_svg(Vec::<SubPath>::new()), "");
        assert_eq!(SubPath::new((2., 3.)).to_string(), "M2,3");
    }

    #[test]
    fn round_trip_reparses_to_the_same_segments() {
        let docs = [
            "M0,0 L100,100 l50,25",
            "M0,0 Q65,75 90,110 T200,300",
            "M10 10 h5 v5 H0 z m2 2 c1 1 2 2 3 3 s4 4 5 5",
            "M0.1 0.2 A10 20 45 1 1 30 40 a1e-3 2 0 0 0 -1 -1 Z M3 3",
            "M-1.5-2.25l.5.5",
        ];
        for doc in docs {
            let first = parse_all(doc);
            let second = parse_all(&to_svg(&first));
            assert_eq!(first, second, "{doc}");
        }
    }
}
