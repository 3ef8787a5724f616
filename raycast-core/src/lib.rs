//! Raycast Scene Parser
//!
//! Parses the raycast scene description format: a JSON-like top-level array
//! of camera, sphere and plane objects, each tagged by a `"type"` key.
//!
//! ```
//! use raycast_core::{parse, SceneObject};
//!
//! let doc = parse(br#"[ { "type": "camera", "width": 1, "height": 1 } ]"#).unwrap();
//! assert_eq!(doc.len(), 1);
//! assert!(matches!(doc.objects()[0], SceneObject::Camera(_)));
//! ```
//!
//! # Architecture
//!
//! - **scanner.rs** - Byte scanner with line tracking and one byte of pushback
//! - **lexer.rs** - String, number and vector literals
//! - **parser.rs** - Object state machine and top-level scene parser
//! - **scene.rs** - Scene data model
//! - **error.rs** - Line-tagged diagnostics
//! - **options.rs** - Parser configuration

pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod scene;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use error::{Error, ErrorKind, Expected, ParseError};
pub use options::{ParseOptions, UnknownPropertyPolicy, MAX_STRING_LEN};
pub use parser::{ObjectState, Parser};
pub use scanner::Scanner;
pub use scene::{
    Camera, ObjectKind, Plane, Property, PropertyValue, SceneDocument, SceneObject, Sphere,
    Vector3,
};

/// Parse a scene held in memory with default options.
pub fn parse(input: &[u8]) -> Result<SceneDocument, ParseError> {
    Parser::new(input).parse_scene()
}

/// Parse a scene held in memory.
pub fn parse_with(input: &[u8], options: &ParseOptions) -> Result<SceneDocument, ParseError> {
    Parser::with_options(input, options.clone()).parse_scene()
}

/// Read `reader` to the end, then parse it.
pub fn parse_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<SceneDocument, Error> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(Error::Read)?;
    Ok(parse_with(&input, options)?)
}

/// Parse the scene file at `path`.
///
/// The file is read in full and closed before parsing starts, so the handle
/// is released whether or not the parse succeeds.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<SceneDocument, Error> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let input = {
        let mut file = File::open(path).map_err(io_error)?;
        let mut input = Vec::new();
        file.read_to_end(&mut input).map_err(io_error)?;
        input
    };
    log::debug!("read {} bytes from {}", input.len(), path.display());

    Ok(parse_with(&input, options)?)
}
