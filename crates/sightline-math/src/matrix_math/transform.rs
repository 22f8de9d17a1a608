use crate::types::{Mat4, Vec3};
use crate::vector_math::normalize;

/// `(sin, cos)` of an angle in degrees, evaluated in double precision.
#[inline]
pub(crate) fn sin_cos_degrees(angle_deg: f32) -> (f32, f32) {
    let rad = f64::from(angle_deg).to_radians();
    (rad.sin() as f32, rad.cos() as f32)
}

#[inline]
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::new([
        1.0, 0.0, 0.0, x, //
        0.0, 1.0, 0.0, y, //
        0.0, 0.0, 1.0, z, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Translation by a vector. Pass `v.xyz()` for a `Vec4`.
#[inline]
pub fn translate_by(v: Vec3) -> Mat4 {
    translate(v.x(), v.y(), v.z())
}

#[inline]
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::new([
        x, 0.0, 0.0, 0.0, //
        0.0, y, 0.0, 0.0, //
        0.0, 0.0, z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

#[inline]
pub fn uniform_scale(s: f32) -> Mat4 {
    scale(s, s, s)
}

#[inline]
pub fn scale_by(v: Vec3) -> Mat4 {
    scale(v.x(), v.y(), v.z())
}

pub fn rotation_x(angle_deg: f32) -> Mat4 {
    let (sin, cos) = sin_cos_degrees(angle_deg);
    Mat4::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, cos, -sin, 0.0, //
        0.0, sin, cos, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn rotation_y(angle_deg: f32) -> Mat4 {
    let (sin, cos) = sin_cos_degrees(angle_deg);
    Mat4::new([
        cos, 0.0, sin, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -sin, 0.0, cos, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

pub fn rotation_z(angle_deg: f32) -> Mat4 {
    let (sin, cos) = sin_cos_degrees(angle_deg);
    Mat4::new([
        cos, -sin, 0.0, 0.0, //
        sin, cos, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Counter-clockwise rotation of `angle_deg` degrees about the axis `(x, y, z)`.
///
/// The axis is normalized first, so its length does not matter. A zero axis
/// leaves only the `cos` diagonal.
pub fn rotate(angle_deg: f32, x: f32, y: f32, z: f32) -> Mat4 {
    let (sin, cos) = sin_cos_degrees(angle_deg);
    let inv = 1.0 - cos;

    let n = normalize(Vec3::new(x, y, z));
    let (nx, ny, nz) = (n.x(), n.y(), n.z());

    Mat4::new([
        inv * nx * nx + cos,
        inv * nx * ny - sin * nz,
        inv * nx * nz + sin * ny,
        0.0,
        inv * nx * ny + sin * nz,
        inv * ny * ny + cos,
        inv * ny * nz - sin * nx,
        0.0,
        inv * nx * nz - sin * ny,
        inv * ny * nz + sin * nx,
        inv * nz * nz + cos,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ])
}

#[inline]
pub fn rotate_about(angle_deg: f32, axis: Vec3) -> Mat4 {
    rotate(angle_deg, axis.x(), axis.y(), axis.z())
}
