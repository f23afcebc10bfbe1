// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting a chunked path-data document into subpath texts.

use alloc::string::String;

use crate::ParseError;

/// Is `c` a move directive?
#[inline]
pub(crate) fn is_move(c: u8) -> bool {
    c == b'm' || c == b'M'
}

/// Is `c` path-data whitespace?
#[inline]
pub(crate) fn is_wsp(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r')
}

/// Text buffered from a stream of chunks, handed out in pieces that end
/// just before a delimiter byte.
///
/// Consumed text is only dropped when more is appended, and each byte is
/// searched for a delimiter once, so feeding a long piece in small chunks
/// stays linear.
#[derive(Debug, Default)]
pub(crate) struct ChunkBuffer {
    buf: String,
    /// Start of the text not handed out yet.
    head: usize,
    /// Bytes before this hold no delimiter, except possibly at `head`.
    scanned: usize,
}

impl ChunkBuffer {
    /// Append a chunk, first dropping the text already handed out.
    pub(crate) fn push(&mut self, chunk: &str) {
        if self.head > 0 {
            self.buf.drain(..self.head);
            self.scanned -= self.head;
            self.head = 0;
        }
        self.buf.push_str(chunk);
    }

    /// Skip whitespace at the start of the pending text.
    pub(crate) fn skip_wsp(&mut self) {
        self.head += self.buf.as_bytes()[self.head..]
            .iter()
            .take_while(|&&c| is_wsp(c))
            .count();
        self.scanned = self.scanned.max(self.head);
    }

    /// The first byte of the pending text.
    pub(crate) fn first(&self) -> Option<u8> {
        self.buf.as_bytes().get(self.head).copied()
    }

    /// The pending text.
    pub(crate) fn pending(&self) -> &str {
        &self.buf[self.head..]
    }

    /// Hand out the pending text up to the first delimiter after its first
    /// byte, if the buffer holds one.
    pub(crate) fn cut_before(&mut self, is_delim: impl Fn(u8) -> bool) -> Option<String> {
        if self.head >= self.buf.len() {
            return None;
        }
        let from = self.scanned.max(self.head + 1);
        let Some(offset) = self.buf.as_bytes()[from..].iter().position(|&c| is_delim(c)) else {
            self.scanned = self.buf.len();
            return None;
        };
        let end = from + offset;
        let piece = String::from(&self.buf[self.head..end]);
        self.head = end;
        self.scanned = end;
        Some(piece)
    }

    /// Hand out everything that is left.
    pub(crate) fn take_rest(&mut self) -> String {
        let rest = String::from(self.pending());
        self.clear();
        rest
    }

    pub(crate) fn clear(&mut self) {
        self.buf = String::new();
        self.head = 0;
        self.scanned = 0;
    }
}

/// An iterator that cuts a path-data document into the texts of its subpaths.
///
/// The document arrives as a sequence of chunks which may be split anywhere,
/// even in the middle of a number. Each yielded string runs from one move
/// directive up to the next one (or the end of the input), so it includes
/// any close directive and trailing whitespace.
///
/// The first non-whitespace character of the document must be a move
/// directive; otherwise the splitter yields
/// [`ParseError::MalformedDocument`] and stops.
#[derive(Debug)]
pub struct SubPathSplitter<I> {
    chunks: I,
    buf: ChunkBuffer,
    /// The input is exhausted, or an error was reported.
    done: bool,
}

impl<I> SubPathSplitter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Create a splitter over the chunks of a document.
    pub fn new(chunks: impl IntoIterator<IntoIter = I>) -> Self {
        SubPathSplitter {
            chunks: chunks.into_iter(),
            buf: ChunkBuffer::default(),
            done: false,
        }
    }

    /// Drop leading whitespace and check that a move directive follows.
    fn check_head(&mut self) -> Result<(), ParseError> {
        self.buf.skip_wsp();
        match self.buf.first() {
            Some(c) if !is_move(c) => Err(ParseError::malformed(self.buf.pending())),
            _ => Ok(()),
        }
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<String, ParseError>> {
        self.done = true;
        self.buf.clear();
        Some(Err(err))
    }
}

impl<I> Iterator for SubPathSplitter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<String, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Err(e) = self.check_head() {
                return self.fail(e);
            }
            if let Some(subpath) = self.buf.cut_before(is_move) {
                return Some(Ok(subpath));
            }
            match self.chunks.next() {
                Some(chunk) => self.buf.push(chunk.as_ref()),
                None => {
                    self.done = true;
                    let rest = self.buf.take_rest();
                    return if rest.is_empty() { None } else { Some(Ok(rest)) };
                }
            }
        }
    }
}

impl<I> core::iter::FusedIterator for SubPathSplitter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn split(chunks: &[&str]) -> Result<Vec<String>, ParseError> {
        SubPathSplitter::new(chunks.iter()).collect()
    }

    #[test]
    fn splits_at_move_directives() {
        assert_eq!(
            split(&["M0,0 L1,1 Z m5,5 l1,1"]).unwrap(),
            vec!["M0,0 L1,1 Z ", "m5,5 l1,1"]
        );
    }

    #[test]
    fn leading_and_trailing_whitespace() {
        assert_eq!(split(&["  \n M1 2  "]).unwrap(), vec!["M1 2  "]);
        assert_eq!(split(&[" ", "\t", "", " "]).unwrap(), Vec::<String>::new());
        assert_eq!(split(&[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn chunk_boundaries_are_invisible() {
        let whole = split(&["M10 20L30 40M50 60 70 80z"]).unwrap();
        assert_eq!(split(&["M1", "0 20L30 40", "M", "50 60 70 80z"]).unwrap(), whole);
        assert_eq!(split(&["M10 20L30 40M50 60 70 80", "z"]).unwrap(), whole);
    }

    #[test]
    fn must_start_with_move() {
        let mut it = SubPathSplitter::new(["  L1 1 M0 0"]);
        assert!(matches!(
            it.next(),
            Some(Err(ParseError::MalformedDocument { .. }))
        ));
        assert!(it.next().is_none());
    }

    #[test]
    fn each_byte_is_searched_once() {
        let mut buf = ChunkBuffer::default();
        buf.push("M0 0");
        assert_eq!(buf.cut_before(is_move), None);
        assert_eq!(buf.scanned, 4);
        buf.push(" L1 1");
        assert_eq!(buf.cut_before(is_move), None);
        assert_eq!(buf.scanned, 9);
        buf.push(" m2 2 L3 3");
        assert_eq!(buf.cut_before(is_move).as_deref(), Some("M0 0 L1 1 "));
        assert_eq!(buf.cut_before(is_move), None);
        assert_eq!(buf.scanned, 19);
        // Handed-out text is dropped on the next push.
        buf.push(" M");
        assert_eq!(buf.buf, "m2 2 L3 3 M");
        assert_eq!(buf.cut_before(is_move).as_deref(), Some("m2 2 L3 3 "));
        assert_eq!(buf.take_rest(), "M");
    }

    #[test]
    fn long_subpath_in_single_bytes() {
        let mut doc = String::from("M0 0");
        for _ in 0..20_000 {
            doc.push_str(" L1 1");
        }
        doc.push_str(" M5 5");
        let chunks = (0..doc.len()).map(|i| &doc[i..i + 1]);
        let got = SubPathSplitter::new(chunks).collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].len(), doc.len() - 4);
        assert_eq!(got[1], "M5 5");
    }

    #[test]
    fn error_after_chunk_of_whitespace() {
        let got = split(&["   ", "  10 10"]);
        assert!(matches!(got, Err(ParseError::MalformedDocument { .. })));
    }
}
