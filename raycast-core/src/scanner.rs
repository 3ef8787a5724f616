//! Byte-level scanner with line tracking and one byte of pushback.
//!
//! The scanner owns its line counter; nothing about the position is global.
//! Every read that can fail reports the line it failed on.

use memchr::memchr_iter;

use crate::error::{ErrorKind, Expected, ParseError, Result};
use crate::options::MAX_STRING_LEN;

/// Cursor over an in-memory scene file.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    /// 1-based; bumped whenever a newline is consumed.
    line: u32,
    /// Set by a read, cleared by `push_back`. Only one byte may be pushed back.
    can_push_back: bool,
    pub(crate) max_string_len: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            can_push_back: false,
            max_string_len: MAX_STRING_LEN,
        }
    }

    /// Override the longest string literal `next_string` accepts.
    pub fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte offset of the next read.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Look at the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Unconsumed input.
    #[inline]
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Consume `n` bytes at once, keeping the line count exact.
    pub(crate) fn advance(&mut self, n: usize) {
        let end = (self.pos + n).min(self.input.len());
        let newlines = memchr_iter(b'\n', &self.input[self.pos..end]).count();
        self.line += newlines as u32;
        self.pos = end;
        self.can_push_back = false;
    }

    /// Build an error tagged with the current line.
    #[inline]
    pub fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.line)
    }

    /// Consume one byte. End of input is an error: no production of the
    /// grammar can finish there.
    pub fn next_char(&mut self) -> Result<u8> {
        let Some(c) = self.peek() else {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput));
        };
        self.pos += 1;
        if c == b'\n' {
            self.line += 1;
        }
        self.can_push_back = true;
        Ok(c)
    }

    /// Un-read the byte just returned by `next_char`.
    ///
    /// Only one byte can be pushed back; a second call, or a call before any
    /// read, does nothing.
    pub(crate) fn push_back(&mut self, c: u8) {
        if !self.can_push_back || self.pos == 0 {
            return;
        }
        debug_assert_eq!(self.input[self.pos - 1], c);
        self.pos -= 1;
        if c == b'\n' {
            self.line -= 1;
        }
        self.can_push_back = false;
    }

    /// Consume one byte and fail unless it is `expected`.
    pub fn expect_char(&mut self, expected: u8) -> Result<()> {
        self.expect(Expected::Char(expected)).map(|_| ())
    }

    /// Consume one byte and fail unless it satisfies `expected`.
    pub fn expect(&mut self, expected: Expected) -> Result<u8> {
        let found = self.next_char()?;
        if expected.matches(found) {
            Ok(found)
        } else {
            Err(self.error(ErrorKind::Syntax { expected, found }))
        }
    }

    /// Consume a run of whitespace and leave the first other byte unread.
    /// Running out of input while skipping is an error.
    pub fn skip_whitespace(&mut self) -> Result<()> {
        loop {
            let c = self.next_char()?;
            if !is_whitespace(c) {
                self.push_back(c);
                return Ok(());
            }
        }
    }
}

/// C `isspace`: space, \t, \n, \v, \f, \r.
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
