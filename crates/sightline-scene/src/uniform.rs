use std::collections::BTreeMap;

use sightline_math::{Color4, Mat3, Mat4, Vec2, Vec3, Vec4};

/// A value destined for a named shader uniform.
///
/// Matrices are carried in row-major order. A sink feeding a column-major API
/// either transposes on upload or sets the API's transpose flag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Color(Color4),
    Mat3(Mat3),
    Mat4(Mat4),
}

impl UniformValue {
    /// Payload as tightly packed floats.
    pub fn as_floats(&self) -> &[f32] {
        match self {
            UniformValue::Float(v) => core::slice::from_ref(v),
            UniformValue::Vec2(v) => v.as_array(),
            UniformValue::Vec3(v) => v.as_array(),
            UniformValue::Vec4(v) => v.as_array(),
            UniformValue::Color(c) => bytemuck::cast_slice(core::slice::from_ref(c)),
            UniformValue::Mat3(m) => m.as_array(),
            UniformValue::Mat4(m) => m.as_array(),
        }
    }

    /// Short GLSL-style type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            UniformValue::Float(_) => "float",
            UniformValue::Vec2(_) => "vec2",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Vec4(_) | UniformValue::Color(_) => "vec4",
            UniformValue::Mat3(_) => "mat3",
            UniformValue::Mat4(_) => "mat4",
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::Float(v)
    }
}

impl From<Vec2> for UniformValue {
    fn from(v: Vec2) -> Self {
        UniformValue::Vec2(v)
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        UniformValue::Vec3(v)
    }
}

impl From<Vec4> for UniformValue {
    fn from(v: Vec4) -> Self {
        UniformValue::Vec4(v)
    }
}

impl From<Color4> for UniformValue {
    fn from(c: Color4) -> Self {
        UniformValue::Color(c)
    }
}

impl From<Mat3> for UniformValue {
    fn from(m: Mat3) -> Self {
        UniformValue::Mat3(m)
    }
}

impl From<Mat4> for UniformValue {
    fn from(m: Mat4) -> Self {
        UniformValue::Mat4(m)
    }
}

/// Receiver of named uniform values, typically a shader program.
pub trait UniformSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue);
}

/// CPU-side uniform staging table.
///
/// Keeps the last value written under each name. Useful as a test double and
/// as a cache in front of a real program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformTable {
    values: BTreeMap<String, UniformValue>,
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl UniformSink for UniformTable {
    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        self.values.insert(name.to_owned(), value);
    }
}
