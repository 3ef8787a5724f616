//! Fixture loading from YAML files

use raycast_core::{Camera, Plane, SceneObject, Sphere, Vector3};
use serde::Deserialize;
use std::path::Path;

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    pub scene: String,
    #[serde(flatten)]
    pub expect: Expectation,
}

/// Either the objects a scene parses to, or the error it fails with
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Expectation {
    Objects {
        objects: Vec<ExpectedObject>,
        #[serde(default)]
        warnings: Vec<String>,
    },
    Error {
        /// ErrorKind variant name, e.g. `UnknownType`
        error: String,
        line: u32,
    },
}

/// Expected object, mirroring the scene format itself
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum ExpectedObject {
    Camera {
        #[serde(default)]
        width: f64,
        #[serde(default)]
        height: f64,
    },
    Sphere {
        #[serde(default)]
        color: [f64; 3],
        #[serde(default)]
        position: [f64; 3],
        #[serde(default)]
        radius: f64,
    },
    Plane {
        #[serde(default)]
        color: [f64; 3],
        #[serde(default)]
        position: [f64; 3],
        #[serde(default)]
        normal: [f64; 3],
    },
}

impl ExpectedObject {
    pub fn to_object(&self) -> SceneObject {
        match *self {
            ExpectedObject::Camera { width, height } => SceneObject::Camera(Camera { width, height }),
            ExpectedObject::Sphere { color, position, radius } => SceneObject::Sphere(Sphere {
                color: Vector3::from_array(color),
                position: Vector3::from_array(position),
                radius,
            }),
            ExpectedObject::Plane { color, position, normal } => SceneObject::Plane(Plane {
                color: Vector3::from_array(color),
                position: Vector3::from_array(position),
                normal: Vector3::from_array(normal),
            }),
        }
    }
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
