//! Scene data model.
//!
//! A scene file is an ordered list of objects. Each object is one of three
//! kinds, and each kind owns a fixed set of properties. Properties the file
//! leaves out stay at zero.

use std::fmt;

use phf::phf_map;

/// An ordered triple of floats: color, position or normal.
pub type Vector3 = glam::DVec3;

/// The value of an object's `"type"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Camera,
    Sphere,
    Plane,
}

static OBJECT_KINDS: phf::Map<&'static str, ObjectKind> = phf_map! {
    "camera" => ObjectKind::Camera,
    "sphere" => ObjectKind::Sphere,
    "plane" => ObjectKind::Plane,
};

impl ObjectKind {
    /// Look up a kind by its literal name (`"camera"`, `"sphere"`, `"plane"`).
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        OBJECT_KINDS.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Camera => "camera",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Plane => "plane",
        }
    }

    /// Whether objects of this kind own `property`.
    pub fn accepts(self, property: Property) -> bool {
        use Property::*;
        match self {
            ObjectKind::Camera => matches!(property, Width | Height),
            ObjectKind::Sphere => matches!(property, Color | Position | Radius),
            ObjectKind::Plane => matches!(property, Color | Position | Normal),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A property key recognised inside an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Width,
    Height,
    Radius,
    Color,
    Position,
    Normal,
}

static PROPERTIES: phf::Map<&'static str, Property> = phf_map! {
    "width" => Property::Width,
    "height" => Property::Height,
    "radius" => Property::Radius,
    "color" => Property::Color,
    "position" => Property::Position,
    "normal" => Property::Normal,
};

impl Property {
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        PROPERTIES.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Property::Width => "width",
            Property::Height => "height",
            Property::Radius => "radius",
            Property::Color => "color",
            Property::Position => "position",
            Property::Normal => "normal",
        }
    }

    /// Scalar properties hold a number, the rest hold a vector literal.
    #[inline]
    pub fn is_scalar(self) -> bool {
        matches!(self, Property::Width | Property::Height | Property::Radius)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value read for a property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Scalar(f64),
    Vector(Vector3),
}

// ============================================================================
// Objects
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sphere {
    pub color: Vector3,
    pub position: Vector3,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plane {
    pub color: Vector3,
    pub position: Vector3,
    pub normal: Vector3,
}

impl Plane {
    /// The normal scaled to unit length. A zero normal stays zero.
    pub fn unit_normal(&self) -> Vector3 {
        self.normal.normalize_or_zero()
    }
}

/// One object of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum SceneObject {
    Camera(Camera),
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {
    /// A zero-initialised object of the given kind.
    pub fn empty(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Camera => SceneObject::Camera(Camera::default()),
            ObjectKind::Sphere => SceneObject::Sphere(Sphere::default()),
            ObjectKind::Plane => SceneObject::Plane(Plane::default()),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            SceneObject::Camera(_) => ObjectKind::Camera,
            SceneObject::Sphere(_) => ObjectKind::Sphere,
            SceneObject::Plane(_) => ObjectKind::Plane,
        }
    }

    /// Store `value` into the field named by `property`.
    ///
    /// Fails with the property if this object's kind does not own it or the
    /// value has the wrong shape; nothing is written in that case.
    pub fn set(&mut self, property: Property, value: PropertyValue) -> Result<(), Property> {
        use PropertyValue::{Scalar, Vector};

        match (self, property, value) {
            (SceneObject::Camera(c), Property::Width, Scalar(v)) => c.width = v,
            (SceneObject::Camera(c), Property::Height, Scalar(v)) => c.height = v,
            (SceneObject::Sphere(s), Property::Radius, Scalar(v)) => s.radius = v,
            (SceneObject::Sphere(s), Property::Color, Vector(v)) => s.color = v,
            (SceneObject::Sphere(s), Property::Position, Vector(v)) => s.position = v,
            (SceneObject::Plane(p), Property::Color, Vector(v)) => p.color = v,
            (SceneObject::Plane(p), Property::Position, Vector(v)) => p.position = v,
            (SceneObject::Plane(p), Property::Normal, Vector(v)) => p.normal = v,
            _ => return Err(property),
        }
        Ok(())
    }

    pub fn as_camera(&self) -> Option<&Camera> {
        match self {
            SceneObject::Camera(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            SceneObject::Sphere(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            SceneObject::Plane(p) => Some(p),
            _ => None,
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// A parsed scene: objects in file order, plus the warnings raised on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDocument {
    objects: Vec<SceneObject>,
    warnings: Vec<crate::ParseError>,
}

impl SceneDocument {
    pub(crate) fn new(objects: Vec<SceneObject>, warnings: Vec<crate::ParseError>) -> Self {
        Self { objects, warnings }
    }

    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SceneObject> {
        self.objects.iter()
    }

    /// The first camera in file order.
    pub fn camera(&self) -> Option<&Camera> {
        self.objects.iter().find_map(SceneObject::as_camera)
    }

    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> {
        self.objects.iter().filter_map(SceneObject::as_sphere)
    }

    pub fn planes(&self) -> impl Iterator<Item = &Plane> {
        self.objects.iter().filter_map(SceneObject::as_plane)
    }

    /// Non-fatal diagnostics, such as skipped unknown properties.
    #[inline]
    pub fn warnings(&self) -> &[crate::ParseError] {
        &self.warnings
    }

    pub fn into_objects(self) -> Vec<SceneObject> {
        self.objects
    }
}

impl<'a> IntoIterator for &'a SceneDocument {
    type Item = &'a SceneObject;
    type IntoIter = std::slice::Iter<'a, SceneObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
