//! Object and scene parsers.
//!
//! A scene is a top-level array of objects:
//!
//! ```text
//! document ::= '[' ws (object (ws ',' ws object)*)? ws ']'
//! object   ::= '{' ws '"type"' ws ':' ws type_value (ws ',' ws property)* ws '}'
//! property ::= key ws ':' ws (number | vector)
//! ```
//!
//! Parsing is single pass with no backtracking beyond the scanner's one byte
//! of pushback. The first error ends the parse; a partial document is never
//! returned.

use log::{debug, trace};

use crate::error::{ErrorKind, Expected, ParseError, Result};
use crate::options::{ParseOptions, UnknownPropertyPolicy};
use crate::scanner::{is_whitespace, Scanner};
use crate::scene::{ObjectKind, Property, PropertyValue, SceneDocument, SceneObject};

/// Where the object parser is within one `{ ... }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectState {
    ExpectOpenBrace,
    ExpectTypeKey,
    ExpectTypeValue,
    ReadingProperties(SceneObject),
    Done(SceneObject),
}

/// Recursive-descent parser for one scene file.
#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    options: ParseOptions,
    warnings: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a [u8], options: ParseOptions) -> Self {
        let scanner = Scanner::new(input).with_max_string_len(options.max_string_len);
        Self {
            scanner,
            options,
            warnings: Vec::new(),
        }
    }

    /// Current line of the underlying scanner.
    #[inline]
    pub fn line(&self) -> u32 {
        self.scanner.line()
    }

    /// Parse the whole input as a scene document.
    pub fn parse_scene(mut self) -> Result<SceneDocument> {
        self.scanner.skip_whitespace()?;
        self.scanner.expect_char(b'[')?;

        let mut objects = Vec::new();
        loop {
            self.scanner.skip_whitespace()?;
            match self.scanner.peek() {
                Some(b']') if objects.is_empty() => {
                    self.scanner.next_char()?;
                    if !self.options.allow_empty_scene {
                        return Err(self.scanner.error(ErrorKind::EmptyScene));
                    }
                    break;
                }
                Some(b'{') => {
                    let object = self.parse_object()?;
                    debug!("line {}: parsed {:?}", self.line(), object);
                    objects.push(object);

                    self.scanner.skip_whitespace()?;
                    if self.scanner.expect(Expected::OneOf(b",]"))? == b']' {
                        break;
                    }
                }
                _ => {
                    let expected = if objects.is_empty() {
                        Expected::OneOf(b"{]")
                    } else {
                        Expected::Char(b'{')
                    };
                    let found = self.scanner.next_char()?;
                    return Err(self.scanner.error(ErrorKind::Syntax { expected, found }));
                }
            }
        }

        self.finish()?;
        debug!(
            "scene complete: {} objects, {} warnings over {} lines",
            objects.len(),
            self.warnings.len(),
            self.line()
        );
        Ok(SceneDocument::new(objects, self.warnings))
    }

    /// Only whitespace may follow the closing `]`.
    fn finish(&mut self) -> Result<()> {
        while let Some(c) = self.scanner.peek() {
            self.scanner.next_char()?;
            if !is_whitespace(c) {
                return Err(self.scanner.error(ErrorKind::TrailingCharacters { found: c }));
            }
        }
        Ok(())
    }

    /// Parse one `{ ... }` object, leaving the scanner after its `}`.
    pub fn parse_object(&mut self) -> Result<SceneObject> {
        let mut state = ObjectState::ExpectOpenBrace;
        loop {
            state = match state {
                ObjectState::ExpectOpenBrace => {
                    self.scanner.expect_char(b'{')?;
                    self.scanner.skip_whitespace()?;
                    ObjectState::ExpectTypeKey
                }
                ObjectState::ExpectTypeKey => {
                    let key = self.scanner.next_string()?;
                    if key != "type" {
                        return Err(self.scanner.error(ErrorKind::MissingTypeKey { key }));
                    }
                    self.expect_colon()?;
                    ObjectState::ExpectTypeValue
                }
                ObjectState::ExpectTypeValue => {
                    let value = self.scanner.next_string()?;
                    let Some(kind) = ObjectKind::from_name(&value) else {
                        return Err(self.scanner.error(ErrorKind::UnknownType { value }));
                    };
                    self.scanner.skip_whitespace()?;
                    ObjectState::ReadingProperties(SceneObject::empty(kind))
                }
                ObjectState::ReadingProperties(mut object) => {
                    if self.scanner.expect(Expected::OneOf(b",}"))? == b'}' {
                        ObjectState::Done(object)
                    } else {
                        self.scanner.skip_whitespace()?;
                        self.parse_property(&mut object)?;
                        self.scanner.skip_whitespace()?;
                        ObjectState::ReadingProperties(object)
                    }
                }
                ObjectState::Done(object) => return Ok(object),
            };
        }
    }

    /// Parse `key: value` and store it into `object`.
    fn parse_property(&mut self, object: &mut SceneObject) -> Result<()> {
        let key = self.scanner.next_string()?;
        let key_line = self.scanner.line();
        self.expect_colon()?;

        let Some(property) = Property::from_name(&key) else {
            return self.unknown_property(key, key_line);
        };

        let kind = object.kind();
        if !kind.accepts(property) {
            return Err(ParseError::new(
                ErrorKind::InvalidPropertyForType { property, kind },
                key_line,
            ));
        }

        let value = if property.is_scalar() {
            PropertyValue::Scalar(self.scanner.next_number()?)
        } else {
            PropertyValue::Vector(self.scanner.next_vector()?)
        };
        trace!("{}.{} = {:?}", kind, property, value);

        object.set(property, value).map_err(|property| {
            ParseError::new(ErrorKind::InvalidPropertyForType { property, kind }, key_line)
        })
    }

    /// Apply the unknown-property policy. The value is still pending.
    fn unknown_property(&mut self, key: String, line: u32) -> Result<()> {
        let error = ParseError::new(ErrorKind::UnknownProperty { key }, line);
        match self.options.unknown_properties {
            UnknownPropertyPolicy::Reject => Err(error),
            UnknownPropertyPolicy::Skip => {
                debug!("skipping {}", error);
                self.scanner.skip_value()?;
                self.warnings.push(error);
                Ok(())
            }
        }
    }

    fn expect_colon(&mut self) -> Result<()> {
        self.scanner.skip_whitespace()?;
        self.scanner.expect_char(b':')?;
        self.scanner.skip_whitespace()
    }
}
