use crate::types::{Vec3, Vec4, Vector};

/// Sum of component products. NaN anywhere propagates.
#[inline]
pub fn dot<const N: usize>(a: Vector<N>, b: Vector<N>) -> f32 {
    a.as_array().iter().zip(b.as_array()).map(|(x, y)| x * y).sum()
}

#[inline]
pub fn length<const N: usize>(v: Vector<N>) -> f32 {
    dot(v, v).sqrt()
}

/// Returns `v / length(v)`, or the zero vector when the length is exactly zero.
///
/// A NaN component makes the length NaN, so every component of the result is
/// NaN, including components that were zero.
#[inline]
pub fn normalize<const N: usize>(v: Vector<N>) -> Vector<N> {
    let len = length(v);
    if len == 0.0 {
        return Vector::ZERO;
    }
    v / len
}

/// Normalizes `v` in place, one component at a time.
///
/// Components that are exactly zero are left at `0.0` rather than divided, so a
/// NaN in one component does not spread into the zero components. This differs
/// from [`normalize`], which turns the whole vector into NaN.
pub fn normalize_in_place<const N: usize>(v: &mut Vector<N>) {
    let len = length(*v);
    for c in v.as_mut_array() {
        *c = if *c == 0.0 { 0.0 } else { *c / len };
    }
}

/// Cross product over the first three components.
pub trait Cross: Sized {
    fn cross(self, rhs: Self) -> Self;
}

impl Cross for Vec3 {
    #[inline]
    fn cross(self, rhs: Self) -> Self {
        Vec3::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }
}

/// `w` of the result is always `0`, whatever the inputs hold.
impl Cross for Vec4 {
    #[inline]
    fn cross(self, rhs: Self) -> Self {
        self.xyz().cross(rhs.xyz()).extend(0.0)
    }
}

/// Free-function form of [`Cross::cross`].
#[inline]
pub fn cross<V: Cross>(a: V, b: V) -> V {
    a.cross(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;
    use approx::assert_abs_diff_eq;

    const EPS: f32 = 1e-6;

    fn assert_vec_eq<const N: usize>(actual: Vector<N>, expected: Vector<N>) {
        for i in 0..N {
            assert_abs_diff_eq!(actual[i], expected[i], epsilon = EPS);
        }
    }

    // ── dot ───────────────────────────────────────────────────────────────

    #[test]
    fn dot_vec2() {
        let b = Vec2::new(0.6, 0.2);
        assert_abs_diff_eq!(dot(Vec2::new(0.3, 0.2), b), 0.22, epsilon = EPS);
        assert_abs_diff_eq!(dot(Vec2::new(-0.3, -0.2), b), -0.22, epsilon = EPS);
        assert_abs_diff_eq!(dot(Vec2::new(1.0, 1.0), b), 0.8, epsilon = EPS);
        assert_eq!(dot(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), 2.0);
        assert_eq!(dot(Vec2::zero(), Vec2::new(1.0, 1.0)), 0.0);
        assert!(dot(Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 1.0)).is_nan());
    }

    #[test]
    fn dot_vec3() {
        let b = Vec3::new(0.6, 0.2, 0.8);
        assert_abs_diff_eq!(dot(Vec3::new(0.3, 0.2, 0.5), b), 0.62, epsilon = EPS);
        assert_abs_diff_eq!(dot(Vec3::new(-0.3, -0.2, -0.5), b), -0.62, epsilon = EPS);
        assert_abs_diff_eq!(dot(Vec3::splat(1.0), b), 1.6, epsilon = EPS);
        assert_eq!(dot(Vec3::splat(1.0), Vec3::splat(1.0)), 3.0);
        assert!(dot(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::splat(1.0)).is_nan());
    }

    #[test]
    fn dot_vec4() {
        let b = Vec4::new(0.6, 0.2, 0.8, 1.0);
        assert_abs_diff_eq!(dot(Vec4::new(0.3, 0.2, 0.5, 0.1), b), 0.72, epsilon = EPS);
        assert_abs_diff_eq!(dot(Vec4::new(-0.3, -0.2, -0.5, -0.1), b), -0.72, epsilon = EPS);
        assert_abs_diff_eq!(dot(Vec4::splat(1.0), b), 2.6, epsilon = EPS);
        assert_eq!(dot(Vec4::splat(1.0), Vec4::splat(1.0)), 4.0);
        assert!(dot(Vec4::new(f32::NAN, 0.0, 0.0, 0.0), Vec4::splat(1.0)).is_nan());
    }

    // ── length ────────────────────────────────────────────────────────────

    #[test]
    fn length_per_size() {
        assert_abs_diff_eq!(length(Vec2::new(0.3, 0.2)), 0.360555, epsilon = EPS);
        assert_abs_diff_eq!(length(Vec2::new(-0.3, -0.2)), 0.360555, epsilon = EPS);
        assert_abs_diff_eq!(length(Vec3::new(0.3, 0.2, 0.5)), 0.616441, epsilon = EPS);
        assert_abs_diff_eq!(length(Vec3::splat(1.0)), 3.0f32.sqrt(), epsilon = EPS);
        assert_abs_diff_eq!(length(Vec4::new(0.3, 0.2, 0.5, 0.1)), 0.6245, epsilon = EPS);
        assert_eq!(length(Vec4::splat(1.0)), 2.0);
        assert_eq!(length(Vec3::UNIT_X), 1.0);
        assert_eq!(length(Vec4::ZERO), 0.0);
        assert!(length(Vec3::new(f32::NAN, 0.0, 0.0)).is_nan());
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_vec2() {
        assert_vec_eq(normalize(Vec2::new(0.3, 0.2)), Vec2::new(0.8320503, 0.5547002));
        assert_vec_eq(normalize(Vec2::new(-0.3, -0.2)), Vec2::new(-0.8320503, -0.5547002));
        assert_vec_eq(normalize(Vec2::new(1.0, 1.0)), Vec2::new(0.70710677, 0.70710677));
        assert_eq!(normalize(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalize_vec3_and_vec4() {
        assert_vec_eq(
            normalize(Vec3::new(0.3, 0.2, 0.5)),
            Vec3::new(0.48666432, 0.32444286, 0.81110716),
        );
        assert_vec_eq(normalize(Vec3::splat(1.0)), Vec3::splat(0.57735026));
        assert_vec_eq(
            normalize(Vec4::new(0.3, 0.2, 0.5, 0.1)),
            Vec4::new(0.48038447, 0.32025632, 0.80064076, 0.16012816),
        );
        assert_eq!(normalize(Vec4::splat(1.0)), Vec4::splat(0.5));
    }

    #[test]
    fn normalize_zero_is_zero_not_nan() {
        assert_eq!(normalize(Vec2::zero()), Vec2::zero());
        assert_eq!(normalize(Vec3::zero()), Vec3::zero());
        assert_eq!(normalize(Vec4::zero()), Vec4::zero());
    }

    #[test]
    fn normalize_nan_spreads_to_every_component() {
        // NaN != NaN, so check components instead of comparing vectors.
        assert!(normalize(Vec2::new(f32::NAN, 0.0)).as_array().iter().all(|c| c.is_nan()));
        assert!(normalize(Vec3::new(f32::NAN, 0.0, 0.0)).as_array().iter().all(|c| c.is_nan()));
        assert!(normalize(Vec4::new(f32::NAN, 0.0, 0.0, 0.0)).as_array().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn normalize_in_place_keeps_zero_components_under_nan() {
        let mut v = Vec3::new(f32::NAN, 0.0, 0.0);
        normalize_in_place(&mut v);
        assert!(v.x().is_nan());
        assert_eq!((v.y(), v.z()), (0.0, 0.0));

        let mut v = Vec4::new(0.0, f32::NAN, 0.0, 2.0);
        normalize_in_place(&mut v);
        assert_eq!(v.x(), 0.0);
        assert!(v.y().is_nan());
        assert_eq!(v.z(), 0.0);
        assert!(v.w().is_nan());
    }

    #[test]
    fn normalize_in_place_matches_normalize_for_finite_input() {
        let mut v = Vec4::new(0.3, 0.2, 0.5, 0.1);
        normalize_in_place(&mut v);
        assert_vec_eq(v, normalize(Vec4::new(0.3, 0.2, 0.5, 0.1)));

        let mut z = Vec3::zero();
        normalize_in_place(&mut z);
        assert_eq!(z, Vec3::zero());
    }

    // ── cross ─────────────────────────────────────────────────────────────

    #[test]
    fn cross_vec3() {
        let b = Vec3::new(0.6, 0.2, 0.8);
        assert_vec_eq(cross(Vec3::new(0.3, 0.2, 0.5), b), Vec3::new(0.06, 0.06, -0.06));
        assert_vec_eq(cross(Vec3::new(-0.3, -0.2, -0.5), b), Vec3::new(-0.06, -0.06, 0.06));
        assert_vec_eq(cross(Vec3::splat(1.0), b), Vec3::new(0.6, -0.2, -0.4));
        assert_eq!(cross(Vec3::splat(1.0), Vec3::splat(1.0)), Vec3::zero());
        assert_eq!(cross(Vec3::zero(), Vec3::splat(1.0)), Vec3::zero());
        assert_eq!(cross(Vec3::UNIT_X, Vec3::UNIT_Y), Vec3::UNIT_Z);
    }

    #[test]
    fn cross_vec3_nan_is_component_specific() {
        let c = cross(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::splat(1.0));
        assert_eq!(c.x(), 0.0);
        assert!(c.y().is_nan());
        assert!(c.z().is_nan());
    }

    #[test]
    fn cross_vec4_zeroes_w() {
        let c = cross(Vec4::new(0.3, 0.2, 0.5, 0.1), Vec4::new(0.6, 0.2, 0.8, 1.0));
        assert_vec_eq(c, Vec4::new(0.06, 0.06, -0.06, 0.0));
        assert_eq!(c.w(), 0.0);

        let c = cross(Vec4::splat(1.0), Vec4::splat(1.0));
        assert_eq!(c, Vec4::zero());

        let c = cross(Vec4::new(f32::NAN, 0.0, 0.0, 0.0), Vec4::splat(1.0));
        assert_eq!(c.x(), 0.0);
        assert!(c.y().is_nan() && c.z().is_nan());
        assert_eq!(c.w(), 0.0);
    }
}
