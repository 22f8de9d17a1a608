use sightline_math::matrix_math::{look_at, normal_matrix, perspective};
use sightline_math::{Mat4, MathResult, Vec4};

use crate::uniform::{UniformSink, UniformValue};

pub const PROJECTION_UNIFORM: &str = "PMatrix";
pub const MODEL_VIEW_UNIFORM: &str = "MVMatrix";
pub const NORMAL_UNIFORM: &str = "NormalMatrix";

/// Perspective camera parameters.
///
/// Fields are public; the builder-style setters exist for chaining from
/// [`Camera::default`]. Nothing is validated until [`Camera::projection`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec4,
    pub at: Vec4,
    /// Up direction, `w == 0`.
    pub up: Vec4,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
            eye: Vec4::point(0.0, 0.0, 5.0),
            at: Vec4::point(0.0, 0.0, 0.0),
            up: Vec4::new(0.0, 1.0, 0.0, 0.0),
        }
    }
}

impl Camera {
    pub fn fovy(mut self, degrees: f32) -> Self {
        self.fovy = degrees;
        self
    }

    pub fn aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Sets the aspect from a viewport size. Non-positive sizes (a minimized
    /// window) keep the previous aspect.
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        } else {
            log::trace!("ignoring degenerate viewport {width}x{height}");
        }
        self
    }

    pub fn clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn eye(mut self, eye: Vec4) -> Self {
        self.eye = eye;
        self
    }

    pub fn at(mut self, at: Vec4) -> Self {
        self.at = at;
        self
    }

    pub fn up(mut self, up: Vec4) -> Self {
        self.up = up;
        self
    }

    pub fn projection(&self) -> MathResult<Mat4> {
        perspective(self.fovy, self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        look_at(self.eye, self.at, self.up)
    }

    /// Uploads projection, `view * model` and its normal matrix.
    ///
    /// Nothing is written to `sink` when the projection is rejected.
    pub fn upload<S: UniformSink + ?Sized>(&self, sink: &mut S, model: Mat4) -> MathResult<()> {
        let projection = self.projection()?;
        let model_view = self.view() * model;

        sink.set_uniform(PROJECTION_UNIFORM, UniformValue::Mat4(projection));
        sink.set_uniform(MODEL_VIEW_UNIFORM, UniformValue::Mat4(model_view));
        sink.set_uniform(NORMAL_UNIFORM, UniformValue::Mat3(normal_matrix(&model_view)));
        Ok(())
    }
}
