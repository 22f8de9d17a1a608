use sightline_math::{Color4, Vec3};

use crate::uniform::{UniformSink, UniformValue};

pub const LIGHT_COLOR_UNIFORM: &str = "LightColor";
pub const LIGHT_POSITION_UNIFORM: &str = "LightPos";

/// Point light in eye space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightSource {
    pub color: Color4,
    pub position: Vec3,
}

impl Default for LightSource {
    fn default() -> Self {
        Self {
            color: Color4::WHITE,
            position: Vec3::ZERO,
        }
    }
}

impl LightSource {
    #[inline]
    pub const fn new(color: Color4, position: Vec3) -> Self {
        Self { color, position }
    }

    pub fn apply<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        sink.set_uniform(LIGHT_COLOR_UNIFORM, UniformValue::Color(self.color));
        sink.set_uniform(LIGHT_POSITION_UNIFORM, UniformValue::Vec3(self.position));
    }
}
