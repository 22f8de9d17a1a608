use crate::error::{MathError, MathResult};
use crate::types::{Mat4, Vec4};
use crate::vector_math::{cross, normalize};

use super::transform::translate_by;

fn invalid(reason: &'static str) -> MathError {
    log::trace!("rejected projection parameters: {reason}");
    MathError::InvalidParameter(reason)
}

/// Clip-box extents `(dx, dy, dz)`, each required to be strictly positive.
fn clip_extents(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> MathResult<(f32, f32, f32)> {
    let dx = right - left;
    let dy = top - bottom;
    let dz = far - near;

    if dx <= 0.0 {
        Err(invalid("left cannot be greater than or equal to right"))
    } else if dy <= 0.0 {
        Err(invalid("bottom cannot be greater than or equal to top"))
    } else if dz <= 0.0 {
        Err(invalid("near cannot be greater than or equal to far"))
    } else {
        Ok((dx, dy, dz))
    }
}

/// Orthographic projection of the given clip box onto the unit cube.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> MathResult<Mat4> {
    let (dx, dy, dz) = clip_extents(left, right, bottom, top, near, far)?;

    Ok(Mat4::new([
        2.0 / dx, 0.0, 0.0, -(left + right) / dx, //
        0.0, 2.0 / dy, 0.0, -(top + bottom) / dy, //
        0.0, 0.0, -2.0 / dz, -(far + near) / dz, //
        0.0, 0.0, 0.0, 1.0,
    ]))
}

/// [`ortho`] with the depth range fixed to `[-1, 1]`.
#[inline]
pub fn ortho_2d(left: f32, right: f32, bottom: f32, top: f32) -> MathResult<Mat4> {
    ortho(left, right, bottom, top, -1.0, 1.0)
}

/// Perspective projection of the frustum whose near plane spans the given
/// rectangle.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> MathResult<Mat4> {
    let (dx, dy, dz) = clip_extents(left, right, bottom, top, near, far)?;

    Ok(Mat4::new([
        2.0 * near / dx, 0.0, (right + left) / dx, 0.0, //
        0.0, 2.0 * near / dy, (top + bottom) / dy, 0.0, //
        0.0, 0.0, -(far + near) / dz, -2.0 * far * near / dz, //
        0.0, 0.0, -1.0, 0.0,
    ]))
}

/// Symmetric perspective projection.
///
/// `fovy` is the vertical field of view in degrees and must lie in `(0, 180]`;
/// `aspect` is width over height and must be positive.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> MathResult<Mat4> {
    if fovy <= 0.0 || fovy > 180.0 {
        return Err(invalid("fovy must be greater than 0 and at most 180 degrees"));
    }
    if aspect <= 0.0 {
        return Err(invalid("aspect cannot be smaller than or equal to 0"));
    }

    let top = ((f64::from(fovy).to_radians() / 2.0).tan() * f64::from(near)) as f32;
    let right = top * aspect;

    let dz = far - near;
    if dz <= 0.0 {
        return Err(invalid("near cannot be greater than or equal to far"));
    }

    Ok(Mat4::new([
        near / right, 0.0, 0.0, 0.0, //
        0.0, near / top, 0.0, 0.0, //
        0.0, 0.0, -(far + near) / dz, -2.0 * far * near / dz, //
        0.0, 0.0, -1.0, 0.0,
    ]))
}

/// Right-handed viewing transform placing `eye` at the origin and looking
/// down `-Z` toward `at`, with `up` projected onto the view plane.
///
/// All four components of the inputs take part in normalization, so pass
/// points with matching `w` and an `up` direction with `w == 0`.
pub fn look_at(eye: Vec4, at: Vec4, up: Vec4) -> Mat4 {
    let forward = normalize(eye - at);
    let side = normalize(cross(normalize(up), forward));
    let true_up = normalize(cross(forward, side));

    let basis = Mat4::from_rows([side, true_up, forward, Vec4::new(0.0, 0.0, 0.0, 1.0)]);

    basis * translate_by(-eye.xyz())
}
