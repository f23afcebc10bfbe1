// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting path data into single-command tokens.

use alloc::string::String;

use crate::split::ChunkBuffer;

/// Does `c` start a new command?
///
/// Every ASCII letter does, except the exponent markers of numbers. Letters
/// that are not path commands still start a token, so that the parser can
/// report them.
#[inline]
pub(crate) fn is_command_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() && c != b'e' && c != b'E'
}

/// An iterator that cuts chunked path data into command tokens.
///
/// Each token is one command letter followed by its raw, unparsed parameter
/// text, up to the next command letter. Text is buffered until the next
/// letter shows up, so the tokens do not depend on where the chunks were
/// split.
#[derive(Debug)]
pub struct CommandTokenizer<I> {
    chunks: I,
    buf: ChunkBuffer,
    done: bool,
}

impl<I> CommandTokenizer<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Create a tokenizer over chunks of path data.
    pub fn new(chunks: impl IntoIterator<IntoIter = I>) -> Self {
        CommandTokenizer {
            chunks: chunks.into_iter(),
            buf: ChunkBuffer::default(),
            done: false,
        }
    }
}

impl<I> Iterator for CommandTokenizer<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        loop {
            self.buf.skip_wsp();
            if let Some(token) = self.buf.cut_before(is_command_letter) {
                return Some(token);
            }
            match self.chunks.next() {
                Some(chunk) => self.buf.push(chunk.as_ref()),
                None => {
                    self.done = true;
                    let rest = self.buf.take_rest();
                    return if rest.is_empty() { None } else { Some(rest) };
                }
            }
        }
    }
}

impl<I> core::iter::FusedIterator for CommandTokenizer<I>
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

    fn tokens(chunks: &[&str]) -> Vec<String> {
        CommandTokenizer::new(chunks.iter()).collect()
    }

    #[test]
    fn one_token_per_command() {
        assert_eq!(
            tokens(&["M0,0 L100,100 l50,25z"]),
            vec!["M0,0 ", "L100,100 ", "l50,25", "z"]
        );
    }

    #[test]
    fn exponents_stay_inside_numbers() {
        assert_eq!(tokens(&["L1e2 3E-1h4"]), vec!["L1e2 3E-1", "h4"]);
    }

    #[test]
    fn unterminated_final_command() {
        assert_eq!(tokens(&["C1 2 3", " 4 5"]), vec!["C1 2 3 4 5"]);
        assert_eq!(tokens(&["  ", "\n"]), Vec::<String>::new());
    }

    #[test]
    fn unknown_letters_are_tokens_too() {
        assert_eq!(tokens(&["L1 1X2 2"]), vec!["L1 1", "X2 2"]);
    }

    #[test]
    fn long_command_in_single_bytes() {
        let mut text = String::from("L");
        for _ in 0..20_000 {
            text.push_str(" 1,1");
        }
        text.push('Z');
        let chunks = (0..text.len()).map(|i| &text[i..i + 1]);
        let got: Vec<String> = CommandTokenizer::new(chunks).collect();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].len(), text.len() - 1);
        assert_eq!(got[1], "Z");
    }

    #[test]
    fn every_two_way_split_agrees() {
        let text = "M10,20 q 1 2 3 4 T5,6 a1 1 0 0 1 2 2 Z";
        let whole = tokens(&[text]);
        for i in 0..=text.len() {
            let (a, b) = text.split_at(i);
            assert_eq!(tokens(&[a, b]), whole, "split at {i}");
        }
    }
}
