//! Stateless matrix algorithms: the determinant/inverse family, normal-matrix
//! extraction and the camera/transform constructors.
//!
//! Conventions:
//! - Row-major storage, column vectors: `m * v`, and `a * b` applies `b` first.
//! - Right-handed eye space looking down `-Z`, OpenGL-style clip space.
//! - Angles are in degrees.

mod cofactor;
mod projection;
mod transform;

pub use cofactor::{
    Square, adjoint, cofactors, determinant, exclude, inverse, minors, normal_matrix, transpose,
};
pub use projection::{frustum, look_at, ortho, ortho_2d, perspective};
pub use transform::{
    rotate, rotate_about, rotation_x, rotation_y, rotation_z, scale, scale_by, translate,
    translate_by, uniform_scale,
};

/// Tolerance for callers comparing matrix results. The determinant check in
/// [`inverse`] is exact and does not use it.
pub const EPSILON: f32 = 0.000_000_1;
