//! Lexical primitives: string, number and vector literals.
//!
//! These read directly off the [`Scanner`] and leave it positioned on the
//! first byte after the literal.

use memchr::memchr;

use crate::error::{ErrorKind, Result};
use crate::scanner::Scanner;
use crate::scene::Vector3;

/// Bytes that may appear in a numeric literal.
#[inline]
fn is_number_byte(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
}

impl<'a> Scanner<'a> {
    /// Read a double-quoted string literal.
    ///
    /// Escapes are not supported and only printable ASCII is allowed, so the
    /// literal ends at the first `"` after the opening one.
    pub fn next_string(&mut self) -> Result<String> {
        self.expect_char(b'"')?;

        let rest = self.remaining();
        let close = memchr(b'"', rest);
        let body = &rest[..close.unwrap_or(rest.len())];

        for (i, &c) in body.iter().enumerate() {
            let kind = if i >= self.max_string_len {
                ErrorKind::StringTooLong { max: self.max_string_len }
            } else if c == b'\\' {
                ErrorKind::UnsupportedEscape
            } else if !(32..=126).contains(&c) {
                ErrorKind::NonAsciiCharacter { byte: c }
            } else {
                continue;
            };
            // Consume through the offending byte so the line is exact.
            self.advance(i + 1);
            return Err(self.error(kind));
        }

        match close {
            Some(end) => {
                self.advance(end + 1);
                Ok(body.iter().map(|&b| b as char).collect())
            }
            None => {
                self.advance(rest.len());
                Err(self.error(ErrorKind::UnexpectedEndOfInput))
            }
        }
    }

    /// Read a decimal floating-point literal (`1`, `-0.5`, `2.5e-3`, `.5`).
    ///
    /// The literal is the longest run of digits, signs, `.`, `e` and `E`;
    /// if that run is not a valid float the whole run is reported.
    pub fn next_number(&mut self) -> Result<f64> {
        let rest = self.remaining();
        let len = rest.iter().position(|&c| !is_number_byte(c)).unwrap_or(rest.len());

        if len == 0 {
            return match self.peek() {
                None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
                Some(c) => {
                    let kind = ErrorKind::NumberFormat { text: (c as char).to_string() };
                    self.advance(1);
                    Err(self.error(kind))
                }
            };
        }

        let text = &rest[..len];
        self.advance(len);
        // Out-of-range literals parse to infinity; they are not valid scene numbers.
        match lexical_core::parse::<f64>(text) {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.error(ErrorKind::NumberFormat {
                text: String::from_utf8_lossy(text).into_owned(),
            })),
        }
    }

    /// Read a `[x, y, z]` vector literal. Whitespace is allowed around every
    /// element and separator.
    pub fn next_vector(&mut self) -> Result<Vector3> {
        self.expect_char(b'[')?;
        self.skip_whitespace()?;
        let x = self.next_number()?;
        self.skip_whitespace()?;
        self.expect_char(b',')?;
        self.skip_whitespace()?;
        let y = self.next_number()?;
        self.skip_whitespace()?;
        self.expect_char(b',')?;
        self.skip_whitespace()?;
        let z = self.next_number()?;
        self.skip_whitespace()?;
        self.expect_char(b']')?;
        Ok(Vector3::new(x, y, z))
    }

    /// Consume and discard the value of a property nobody asked for: a
    /// string, a vector literal, or a number.
    pub fn skip_value(&mut self) -> Result<()> {
        match self.peek() {
            Some(b'"') => self.next_string().map(drop),
            Some(b'[') => self.next_vector().map(drop),
            _ => self.next_number().map(drop),
        }
    }
}
