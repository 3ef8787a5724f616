//! Line-tagged diagnostics.
//!
//! Every failure the parser can produce is an [`ErrorKind`] paired with the
//! 1-based line on which it was detected. There is no column tracking: the
//! line counter is the only position the scanner maintains.

use std::fmt;
use std::path::PathBuf;

use crate::scene::{ObjectKind, Property};

/// The character(s) a syntax error was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Exactly this byte.
    Char(u8),
    /// Any one of these bytes.
    OneOf(&'static [u8]),
}

impl Expected {
    /// Check whether `byte` would have satisfied this expectation.
    pub fn matches(self, byte: u8) -> bool {
        match self {
            Expected::Char(c) => c == byte,
            Expected::OneOf(set) => set.contains(&byte),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Char(c) => write!(f, "'{}'", *c as char),
            Expected::OneOf(set) => {
                for (i, c) in set.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "'{}'", *c as char)?;
                }
                Ok(())
            }
        }
    }
}

/// Render a raw input byte for a diagnostic (`'x'`, `'\n'`, `'\xff'`).
struct ByteDisplay<'a>(&'a u8);

impl fmt::Display for ByteDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0.escape_ascii())
    }
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    /// Input ended where the grammar requires more.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A structural character was not the one the grammar requires.
    #[error("expected {expected}, found {}", ByteDisplay(.found))]
    Syntax { expected: Expected, found: u8 },

    /// String literal exceeds the configured maximum length.
    #[error("strings longer than {max} characters are not supported")]
    StringTooLong { max: usize },

    /// A backslash inside a string literal.
    #[error("strings with escape codes are not supported")]
    UnsupportedEscape,

    /// A byte outside printable ASCII (32..=126) inside a string literal.
    #[error("strings may contain only printable ascii characters, found {}", ByteDisplay(.byte))]
    NonAsciiCharacter { byte: u8 },

    /// The first key of an object was not `"type"`.
    #[error("expected \"type\" key, found \"{key}\"")]
    MissingTypeKey { key: String },

    /// The `type` value is not a known object kind.
    #[error("unknown type \"{value}\"")]
    UnknownType { value: String },

    /// Malformed numeric literal.
    #[error("malformed number \"{text}\"")]
    NumberFormat { text: String },

    /// A property key that no object kind knows about.
    #[error("unknown property \"{key}\"")]
    UnknownProperty { key: String },

    /// A known property used on an object kind that does not own it.
    #[error("property \"{property}\" is not valid for a {kind}")]
    InvalidPropertyForType { property: Property, kind: ObjectKind },

    /// The top-level array holds no objects and empty scenes are disallowed.
    #[error("no objects in scene")]
    EmptyScene,

    /// Non-whitespace after the closing `]` of the scene.
    #[error("unexpected {} after end of scene", ByteDisplay(.found))]
    TrailingCharacters { found: u8 },
}

/// A parse failure (or warning) and the line it was detected on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} on line {line}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// 1-based line number.
    pub line: u32,
}

impl ParseError {
    pub fn new(kind: ErrorKind, line: u32) -> Self {
        Self { kind, line }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Errors from the file-level entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The scene file could not be opened or read.
    #[error("could not read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A caller-supplied reader failed.
    #[error("could not read scene input: {0}")]
    Read(#[source] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// The line number, when the failure came from parsing.
    pub fn line(&self) -> Option<u32> {
        match self {
            Error::Io { .. } | Error::Read(_) => None,
            Error::Parse(err) => Some(err.line),
        }
    }
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
