//! Test harness for running fixture cases, canonically and with variations

use crate::common::{Expectation, Gen, TestCase};
use raycast_core::{parse, ErrorKind, ParseError, SceneDocument};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: Vec<u8>,
    pub seed: u64,
    pub errors: Vec<String>,
}

/// Variant name of an error kind (`UnknownType`, `Syntax`, ...)
pub fn kind_name(kind: &ErrorKind) -> String {
    let debug = format!("{:?}", kind);
    debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}

fn check_document(case: &TestCase, result: Result<SceneDocument, ParseError>, errors: &mut Vec<String>) {
    match (&case.expect, result) {
        (Expectation::Objects { objects, warnings }, Ok(doc)) => {
            let expected: Vec<_> = objects.iter().map(|o| o.to_object()).collect();
            if doc.objects() != expected.as_slice() {
                errors.push(format!("objects: expected {:?}, got {:?}", expected, doc.objects()));
            }
            let actual: Vec<String> = doc.warnings().iter().map(|w| kind_name(&w.kind)).collect();
            if &actual != warnings {
                errors.push(format!("warnings: expected {:?}, got {:?}", warnings, actual));
            }
        }
        (Expectation::Objects { .. }, Err(err)) => {
            errors.push(format!("unexpected error: {}", err));
        }
        (Expectation::Error { error, line }, Err(err)) => {
            let actual = kind_name(&err.kind);
            if &actual != error || err.line != *line {
                errors.push(format!(
                    "error: expected {} on line {}, got {:?} on line {}",
                    error, line, err.kind, err.line
                ));
            }
        }
        (Expectation::Error { error, line }, Ok(doc)) => {
            errors.push(format!(
                "expected {} on line {}, but parsed {} objects",
                error,
                line,
                doc.len()
            ));
        }
    }
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    let input = case.scene.as_bytes();
    let mut errors = Vec::new();
    check_document(case, parse(input), &mut errors);

    TestResult {
        passed: errors.is_empty(),
        input: input.to_vec(),
        seed: 0,
        errors,
    }
}

/// Run a valid case with random whitespace injected after every structural
/// character outside string literals. The objects must not change.
///
/// Error cases are skipped: extra newlines move the reported line.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> Option<TestResult> {
    if matches!(case.expect, Expectation::Error { .. }) {
        return None;
    }

    let mut input = gen.whitespace();
    let mut in_string = false;
    for &c in case.scene.as_bytes() {
        input.push(c);
        match c {
            b'"' => in_string = !in_string,
            b'[' | b']' | b'{' | b'}' | b',' | b':' if !in_string => input.extend(gen.whitespace()),
            _ => {}
        }
    }

    let mut errors = Vec::new();
    check_document(case, parse(&input), &mut errors);

    Some(TestResult {
        passed: errors.is_empty(),
        input,
        seed: gen.seed,
        errors,
    })
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set RAYCAST_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput:");
        eprintln!("{}", String::from_utf8_lossy(&self.input));
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
