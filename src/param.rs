// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lexing the numeric parameters of one command.

use alloc::string::String;
use smallvec::SmallVec;

use crate::split::is_wsp;
use crate::ParseError;

/// Parameters of one command. Eight covers every single-group command
/// without spilling to the heap.
pub(crate) type Params = SmallVec<[f64; 8]>;

/// How the numbers of a parameter list are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParamKind {
    /// Every parameter is a number.
    Numbers,
    /// Groups of seven, where the 4th and 5th are single-digit flags that
    /// may be packed together without separators.
    Arc,
}

struct ParamLexer<'a> {
    data: &'a str,
    ix: usize,
}

impl<'a> ParamLexer<'a> {
    fn new(data: &'a str) -> ParamLexer<'a> {
        ParamLexer { data, ix: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().map_or(false, is_wsp) {
            self.ix += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.ix >= self.data.len()
    }

    /// Skip whitespace with at most one comma in it. Returns whether a comma
    /// was seen.
    fn separator(&mut self) -> bool {
        self.skip_ws();
        if self.peek() == Some(b',') {
            self.ix += 1;
            self.skip_ws();
            true
        } else {
            false
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.ix;
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.ix += 1;
        }
        self.ix - start
    }

    /// The text from `start` to the next separator, for error messages.
    fn bad_token(&self, start: usize) -> ParseError {
        let len = self.data[start..]
            .bytes()
            .take_while(|&c| !is_wsp(c) && c != b',')
            .count()
            .max(1);
        let end = (start + len).min(self.data.len());
        // Only ASCII has been consumed, but the offending byte may start a
        // multi-byte character.
        let token = self
            .data
            .get(start..end)
            .map_or_else(|| String::from(&self.data[start..]), String::from);
        ParseError::InvalidNumber { token }
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        let start = self.ix;
        if matches!(self.peek(), Some(b'-' | b'+')) {
            self.ix += 1;
        }
        let mut digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.ix += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            self.ix = start;
            return Err(self.bad_token(start));
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mantissa_end = self.ix;
            self.ix += 1;
            if matches!(self.peek(), Some(b'-' | b'+')) {
                self.ix += 1;
            }
            if self.skip_digits() == 0 {
                self.ix = mantissa_end;
                return Err(self.bad_token(start));
            }
        }
        match self.data[start..self.ix].parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(self.bad_token(start)),
        }
    }

    fn flag(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Some(b'0') => {
                self.ix += 1;
                Ok(0.)
            }
            Some(b'1') => {
                self.ix += 1;
                Ok(1.)
            }
            _ => Err(self.bad_token(self.ix)),
        }
    }
}

/// Lex the parameter text of a command into numbers.
///
/// Numbers are separated by whitespace and/or a single comma; a separator may
/// be left out where the next number starts with a sign or a second decimal
/// point. Empty text gives an empty list.
pub(crate) fn lex_params(text: &str, kind: ParamKind) -> Result<Params, ParseError> {
    let mut out = Params::new();
    let mut lexer = ParamLexer::new(text);
    lexer.skip_ws();
    while !lexer.at_end() {
        let is_flag = kind == ParamKind::Arc && matches!(out.len() % 7, 3 | 4);
        let value = if is_flag { lexer.flag()? } else { lexer.number()? };
        out.push(value);
        let comma = lexer.separator();
        if comma && lexer.at_end() {
            return Err(ParseError::InvalidNumber {
                token: String::from(","),
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(text: &str) -> Result<alloc::vec::Vec<f64>, ParseError> {
        lex_params(text, ParamKind::Numbers).map(|p| p.to_vec())
    }

    #[test]
    fn separators() {
        assert_eq!(nums("1 2,3 , 4\t\n5").unwrap(), [1., 2., 3., 4., 5.]);
        assert!(nums("  ").unwrap().is_empty());
        assert!(nums("").unwrap().is_empty());
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(nums("10-20").unwrap(), [10., -20.]);
        assert_eq!(nums("0.5.5").unwrap(), [0.5, 0.5]);
        assert_eq!(nums("-.5+3").unwrap(), [-0.5, 3.]);
        assert_eq!(nums("1e2 2.5E-1").unwrap(), [100., 0.25]);
    }

    #[test]
    fn bad_numbers() {
        assert_eq!(
            nums("1 x2"),
            Err(ParseError::InvalidNumber {
                token: String::from("x2")
            })
        );
        assert!(matches!(nums("1,,2"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(nums(",1"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(nums("1,"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(nums("1e"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(nums("-"), Err(ParseError::InvalidNumber { .. })));
        assert_eq!(
            nums("1e999"),
            Err(ParseError::InvalidNumber {
                token: String::from("1e999")
            })
        );
    }

    #[test]
    fn packed_arc_flags() {
        let p = lex_params("10 10 0 1150 50", ParamKind::Arc).unwrap();
        assert_eq!(p.as_slice(), [10., 10., 0., 1., 1., 50., 50.]);
        let p = lex_params("1,1,0,0,1,2,2 3 3 0 1 0 4 4", ParamKind::Arc).unwrap();
        assert_eq!(p.len(), 14);
        assert_eq!(p[10], 1.);
        assert!(matches!(
            lex_params("1 1 0 2 0 5 5", ParamKind::Arc),
            Err(ParseError::InvalidNumber { .. })
        ));
    }
}
