// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing path data into subpaths.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::{self, FusedIterator};

use crate::param::{lex_params, ParamKind};
use crate::split::{is_move, is_wsp};
use crate::tokenize::is_command_letter;
use crate::{ArcSegment, CommandTokenizer, Point, Segment, SubPath, SubPathSplitter, Vec2};

/// How much of the offending input a [`ParseError::MalformedDocument`] keeps.
const MALFORMED_EXCERPT_CHARS: usize = 32;

/// An error which can be returned when parsing path data.
///
/// Every error ends the parse: the items produced before it are a prefix of
/// an invalid document and should be discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The text of a subpath does not begin with a move directive, or a
    /// directive appears where the grammar forbids it.
    MalformedDocument {
        /// The start of the offending text.
        text: String,
    },
    /// Encountered an unknown command letter.
    UnknownCommand {
        /// The letter.
        command: char,
        /// The whole command token.
        token: String,
    },
    /// A command's parameters are empty or not a whole number of groups.
    InvalidParameterCount {
        /// The command letter.
        command: char,
        /// The size of one parameter group.
        expected: usize,
        /// How many parameters were given.
        found: usize,
        /// The whole command token.
        token: String,
    },
    /// A parameter is not a valid finite number.
    InvalidNumber {
        /// The offending text.
        token: String,
    },
}

impl ParseError {
    pub(crate) fn malformed(text: &str) -> ParseError {
        ParseError::MalformedDocument {
            text: text.trim().chars().take(MALFORMED_EXCERPT_CHARS).collect(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedDocument { text } => {
                write!(f, "Malformed path data near \"{text}\"")
            }
            ParseError::UnknownCommand { command, token } => {
                write!(f, "Unknown command \"{command}\" in \"{}\"", token.trim())
            }
            ParseError::InvalidParameterCount {
                command,
                expected,
                found,
                token,
            } => write!(
                f,
                "Command \"{command}\" takes groups of {expected} parameters, found {found} in \"{}\"",
                token.trim()
            ),
            ParseError::InvalidNumber { token } => {
                write!(f, "Unable to parse a number from \"{token}\"")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// The drawing commands, without their absolute/relative distinction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Line,
    Horizontal,
    Vertical,
    Quad,
    SmoothQuad,
    Cubic,
    SmoothCubic,
    Arc,
}

impl Command {
    fn from_letter(letter: u8) -> Option<Command> {
        Some(match letter.to_ascii_uppercase() {
            b'L' => Command::Line,
            b'H' => Command::Horizontal,
            b'V' => Command::Vertical,
            b'Q' => Command::Quad,
            b'T' => Command::SmoothQuad,
            b'C' => Command::Cubic,
            b'S' => Command::SmoothCubic,
            b'A' => Command::Arc,
            _ => return None,
        })
    }

    fn group_size(self) -> usize {
        match self {
            Command::Horizontal | Command::Vertical => 1,
            Command::Line | Command::SmoothQuad => 2,
            Command::Quad | Command::SmoothCubic => 4,
            Command::Cubic => 6,
            Command::Arc => 7,
        }
    }

    fn param_kind(self) -> ParamKind {
        if self == Command::Arc {
            ParamKind::Arc
        } else {
            ParamKind::Numbers
        }
    }
}

/// The running state of one subpath's parse.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    /// The end point of the previous segment.
    current: Point,
    /// The control point a `T` reflects through `current`.
    quad_mirror: Point,
    /// The control point an `S` reflects through `current`.
    cubic_mirror: Point,
}

impl Cursor {
    fn new(start: Point) -> Cursor {
        Cursor {
            current: start,
            quad_mirror: start,
            cubic_mirror: start,
        }
    }

    /// Move to `to`, with no curve to continue smoothly from.
    fn advance(&mut self, to: Point) {
        self.current = to;
        self.quad_mirror = to;
        self.cubic_mirror = to;
    }

    /// Apply one parameter group of `command`, returning the segment it draws.
    ///
    /// `group` must hold exactly `command.group_size()` numbers.
    fn step(&mut self, command: Command, relative: bool, group: &[f64]) -> Segment {
        let origin = if relative {
            self.current.to_vec2()
        } else {
            Vec2::ZERO
        };
        let pt = |i: usize| Point::new(group[i], group[i + 1]) + origin;
        match command {
            Command::Line => {
                let to = pt(0);
                self.advance(to);
                Segment::Line { to }
            }
            Command::Horizontal => {
                let to = Point::new(group[0] + origin.x, self.current.y);
                self.advance(to);
                Segment::Line { to }
            }
            Command::Vertical => {
                let to = Point::new(self.current.x, group[0] + origin.y);
                self.advance(to);
                Segment::Line { to }
            }
            Command::Quad => {
                let (ctrl, to) = (pt(0), pt(2));
                self.current = to;
                self.quad_mirror = ctrl;
                self.cubic_mirror = to;
                Segment::Quad { ctrl, to }
            }
            Command::SmoothQuad => {
                let ctrl = self.quad_mirror.reflect_through(self.current);
                let to = pt(0);
                self.current = to;
                self.quad_mirror = ctrl;
                self.cubic_mirror = to;
                Segment::Quad { ctrl, to }
            }
            Command::Cubic => {
                let (ctrl1, ctrl2, to) = (pt(0), pt(2), pt(4));
                self.current = to;
                self.quad_mirror = to;
                self.cubic_mirror = ctrl2;
                Segment::Cubic { ctrl1, ctrl2, to }
            }
            Command::SmoothCubic => {
                let ctrl1 = self.cubic_mirror.reflect_through(self.current);
                let (ctrl2, to) = (pt(0), pt(2));
                self.current = to;
                self.quad_mirror = to;
                self.cubic_mirror = ctrl2;
                Segment::Cubic { ctrl1, ctrl2, to }
            }
            Command::Arc => {
                let to = pt(5);
                self.advance(to);
                Segment::Arc(ArcSegment {
                    radii: Vec2::new(group[0], group[1]),
                    x_rotation_deg: group[2],
                    large_arc: group[3] != 0.,
                    sweep: group[4] != 0.,
                    to,
                })
            }
        }
    }
}

/// Check that `found` parameters make a positive whole number of groups.
fn check_count(letter: u8, expected: usize, found: usize, token: &str) -> Result<(), ParseError> {
    if found == 0 || found % expected != 0 {
        return Err(ParseError::InvalidParameterCount {
            command: char::from(letter),
            expected,
            found,
            token: String::from(token),
        });
    }
    Ok(())
}

/// An iterator turning command tokens into segments.
///
/// Tokens are the strings a [`CommandTokenizer`] yields. Commands with
/// several parameter groups are expanded one segment at a time, relative
/// coordinates are resolved, and the smooth curve commands get their implicit
/// control point. A close directive must be the last token.
///
/// After the first error the iterator yields nothing more.
#[derive(Debug)]
pub struct SegmentParser<I> {
    tokens: I,
    cursor: Cursor,
    /// Segments of the current command that have not been yielded yet.
    pending: VecDeque<Segment>,
    closed: bool,
    done: bool,
}

impl<I: Iterator<Item = String>> SegmentParser<I> {
    /// Create a parser for the tokens of a subpath starting at `start`.
    pub fn new(start: Point, tokens: impl IntoIterator<IntoIter = I>) -> Self {
        SegmentParser {
            tokens: tokens.into_iter(),
            cursor: Cursor::new(start),
            pending: VecDeque::new(),
            closed: false,
            done: false,
        }
    }

    /// The current point after the most recently expanded command.
    pub fn current_point(&self) -> Point {
        self.cursor.current
    }

    /// Has a close directive been seen?
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Queue the segments of `params`, read as groups of `command`.
    ///
    /// On error nothing of this command stays queued.
    fn expand(
        &mut self,
        command: Command,
        relative: bool,
        params: &[f64],
        token: &str,
    ) -> Result<(), ParseError> {
        let queued = self.pending.len();
        for group in params.chunks_exact(command.group_size()) {
            let seg = self.cursor.step(command, relative, group);
            if !seg.is_finite() {
                self.pending.truncate(queued);
                return Err(ParseError::InvalidNumber {
                    token: String::from(token.trim()),
                });
            }
            self.pending.push_back(seg);
        }
        Ok(())
    }

    fn handle_token(&mut self, token: &str) -> Result<(), ParseError> {
        let token = token.trim_start_matches(|c: char| c.is_ascii() && is_wsp(c as u8));
        let Some(&letter) = token.as_bytes().first() else {
            return Ok(());
        };
        if !is_command_letter(letter) {
            return Err(ParseError::UnknownCommand {
                command: token.chars().next().unwrap_or_default(),
                token: String::from(token),
            });
        }
        if self.closed {
            return Err(ParseError::malformed(token));
        }
        let args = &token[1..];
        if letter == b'z' || letter == b'Z' {
            let found = lex_params(args, ParamKind::Numbers)?.len();
            if found != 0 {
                return Err(ParseError::InvalidParameterCount {
                    command: char::from(letter),
                    expected: 0,
                    found,
                    token: String::from(token),
                });
            }
            self.closed = true;
            return Ok(());
        }
        if is_move(letter) {
            return Err(ParseError::malformed(token));
        }
        let Some(command) = Command::from_letter(letter) else {
            return Err(ParseError::UnknownCommand {
                command: char::from(letter),
                token: String::from(token),
            });
        };
        let params = lex_params(args, command.param_kind())?;
        check_count(letter, command.group_size(), params.len(), token)?;
        self.expand(command, letter.is_ascii_lowercase(), &params, token)
    }
}

impl<I: Iterator<Item = String>> Iterator for SegmentParser<I> {
    type Item = Result<Segment, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(seg) = self.pending.pop_front() {
                return Some(Ok(seg));
            }
            if self.done {
                return None;
            }
            let Some(token) = self.tokens.next() else {
                self.done = true;
                return None;
            };
            if let Err(e) = self.handle_token(&token) {
                self.done = true;
                self.pending.clear();
                return Some(Err(e));
            }
        }
    }
}

impl<I: Iterator<Item = String>> FusedIterator for SegmentParser<I> {}

/// Parse the text of one subpath.
///
/// `origin` is what a relative move is relative to: the end of the previous
/// subpath, or its start if that one was closed.
fn parse_subpath(text: &str, origin: Point) -> Result<SubPath, ParseError> {
    let mut tokens = CommandTokenizer::new(iter::once(text));
    let first = tokens.next().unwrap_or_default();
    let letter = first.as_bytes().first().copied().unwrap_or_default();
    if !is_move(letter) {
        return Err(ParseError::malformed(text));
    }
    let relative = letter == b'm';
    let params = lex_params(&first[1..], ParamKind::Numbers)?;
    check_count(letter, 2, params.len(), &first)?;
    let mut start = Point::new(params[0], params[1]);
    if relative {
        start += origin.to_vec2();
    }
    if !start.is_finite() {
        return Err(ParseError::InvalidNumber {
            token: String::from(first.trim()),
        });
    }

    let mut parser = SegmentParser::new(start, tokens);
    // Extra coordinate pairs of a move are implicit line commands.
    parser.expand(Command::Line, relative, &params[2..], &first)?;
    let segments = parser.by_ref().collect::<Result<Vec<_>, _>>()?;
    Ok(SubPath {
        start,
        segments,
        closed: parser.is_closed(),
        cached_text: None,
    })
}

/// An iterator over the subpaths of chunked path data.
///
/// Created by [`parse`] and [`parse_str`].
#[derive(Debug)]
pub struct Parse<I> {
    subpaths: SubPathSplitter<I>,
    /// Where the next relative move is relative to.
    last_point: Point,
    failed: bool,
}

impl<I> Parse<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    fn fail(&mut self, e: ParseError) -> Option<Result<SubPath, ParseError>> {
        log::debug!("path data rejected: {e}");
        self.failed = true;
        Some(Err(e))
    }
}

impl<I> Iterator for Parse<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<SubPath, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let text = match self.subpaths.next()? {
            Ok(text) => text,
            Err(e) => return self.fail(e),
        };
        match parse_subpath(&text, self.last_point) {
            Ok(subpath) => {
                self.last_point = if subpath.closed {
                    subpath.start
                } else {
                    subpath.end_point()
                };
                log::trace!(
                    "parsed subpath at {:?} with {} segments",
                    subpath.start,
                    subpath.segments.len()
                );
                Some(Ok(subpath))
            }
            Err(e) => self.fail(e),
        }
    }
}

impl<I> FusedIterator for Parse<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

/// Parse path data delivered in chunks.
///
/// The chunks may be split anywhere; the result is the same as parsing their
/// concatenation. Subpaths are produced as soon as the text of the next one
/// begins.
///
/// ```
/// use pathdata::{parse, Point, Segment};
///
/// let chunks = ["M0,0 L100,1", "00 l50,25"];
/// let subpaths = parse(chunks).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(subpaths[0].segments[1], Segment::Line { to: Point::new(150., 125.) });
/// ```
pub fn parse<I>(chunks: I) -> Parse<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Parse {
        subpaths: SubPathSplitter::new(chunks),
        last_point: Point::ZERO,
        failed: false,
    }
}

/// Parse path data held in a single string.
pub fn parse_str(data: &str) -> Parse<iter::Once<&str>> {
    parse(iter::once(data))
}
