use crate::types::{Color4, Vec3, Vec4, Vector};

/// Linear color ramp with `steps` samples.
///
/// Sample `i` sits at `i / steps` of the way from `start` to `end`, so the ramp
/// starts exactly at `start` and stops one step short of `end`.
pub fn interpolate_colors(steps: usize, start: Color4, end: Color4) -> Vec<Color4> {
    let from = start.to_vec4();
    let delta = end.to_vec4() - from;

    (0..steps)
        .map(|i| Color4::from_vec4(from + delta * (i as f32 / steps as f32)))
        .collect()
}

/// Evaluates the cubic Bezier `B(t) = (1-t)³P0 + 3(1-t)²t·C0 + 3(1-t)t²·C1 + t³P1`
/// component-wise.
pub fn cubic_bezier<const N: usize>(
    t: f32,
    p0: Vector<N>,
    c0: Vector<N>,
    c1: Vector<N>,
    p1: Vector<N>,
) -> Vector<N> {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;

    p0 * b0 + c0 * b1 + c1 * b2 + p1 * b3
}

fn sample_curve<const N: usize>(
    steps: usize,
    p0: Vector<N>,
    c0: Vector<N>,
    c1: Vector<N>,
    p1: Vector<N>,
) -> Vec<Vector<N>> {
    (0..steps)
        .map(|i| cubic_bezier(i as f32 / steps as f32, p0, c0, c1, p1))
        .collect()
}

/// Samples a cubic Bezier between two points at `t = i / steps`, `i in 0..steps`.
///
/// Controls are offsets: the first control point is `start + start_control`, the
/// second is `end - end_control`. The `w` channel uses the endpoints' own `w` as
/// its control values. The last sample does not reach `end`.
pub fn bezier_curve(
    steps: usize,
    start: Vec4,
    start_control: Vec3,
    end_control: Vec3,
    end: Vec4,
) -> Vec<Vec4> {
    let c0 = (start.xyz() + start_control).extend(start.w());
    let c1 = (end.xyz() - end_control).extend(end.w());

    sample_curve(steps, start, c0, c1, end)
}

/// Bezier sampling for per-axis rotation angles in degrees.
///
/// The two anchors are wrapped into `(0, 360]` before sampling, so an anchor at
/// 0° is treated as a full turn. Control points are still offset from the
/// unwrapped anchors.
pub fn degrees_bezier_curve(
    steps: usize,
    start: Vec3,
    start_control: Vec3,
    end_control: Vec3,
    end: Vec3,
) -> Vec<Vec3> {
    let c0 = start + start_control;
    let c1 = end - end_control;

    sample_curve(steps, start.map(wrap_degrees), c0, c1, end.map(wrap_degrees))
}

fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped == 0.0 { 360.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_near<const N: usize>(actual: Vector<N>, expected: Vector<N>, eps: f32) {
        for i in 0..N {
            assert_abs_diff_eq!(actual[i], expected[i], epsilon = eps);
        }
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn color_ramp_stops_short_of_end() {
        let ramp = interpolate_colors(10, Color4::new(0.0, 0.0, 0.0, 1.0), Color4::WHITE);
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp[0], Color4::new(0.0, 0.0, 0.0, 1.0));

        for (i, c) in ramp.iter().enumerate() {
            let expected = i as f32 / 10.0;
            assert_abs_diff_eq!(c.r, expected, epsilon = 1e-6);
            assert_abs_diff_eq!(c.g, expected, epsilon = 1e-6);
            assert_abs_diff_eq!(c.b, expected, epsilon = 1e-6);
            assert_eq!(c.a, 1.0);
        }

        assert_abs_diff_eq!(ramp[5].r, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(ramp[9].r, 0.9, epsilon = 1e-6);
    }

    #[test]
    fn color_ramp_with_zero_steps_is_empty() {
        assert!(interpolate_colors(0, Color4::BLACK, Color4::WHITE).is_empty());
    }

    // ── bezier ────────────────────────────────────────────────────────────

    #[test]
    fn cubic_bezier_hits_anchors() {
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let p1 = Vec3::new(-4.0, 5.0, 0.5);
        let c = Vec3::splat(9.0);
        assert_eq!(cubic_bezier(0.0, p0, c, c, p1), p0);
        assert_eq!(cubic_bezier(1.0, p0, c, c, p1), p1);
    }

    #[test]
    fn bezier_curve_reference_samples() {
        let points = bezier_curve(
            10,
            Vec4::new(0.0, 0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec4::new(10.0, 10.0, 10.0, 0.0),
        );

        let expected = [
            Vec4::new(0.0, 0.0, 0.0, 0.0),
            Vec4::new(0.523, 0.28, 0.253, 0.0),
            Vec4::new(1.424, 1.04, 0.944, 0.0),
            Vec4::new(2.601, 2.16, 1.971, 0.0),
            Vec4::new(3.952, 3.52, 3.232, 0.0),
            Vec4::new(5.375, 5.0, 4.625, 0.0),
            Vec4::new(6.768, 6.48, 6.048, 0.0),
            Vec4::new(8.029, 7.84, 7.399, 0.0),
            Vec4::new(9.056, 8.96, 8.576, 0.0),
            Vec4::new(9.747, 9.72, 9.477, 0.0),
        ];

        assert_eq!(points.len(), expected.len());
        assert_eq!(points[0], Vec4::zero());
        for (p, e) in points.into_iter().zip(expected) {
            assert_vec_near(p, e, 1e-3);
        }
    }

    #[test]
    fn degrees_bezier_curve_reference_samples() {
        let points = degrees_bezier_curve(
            10,
            Vec3::zero(),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::splat(10.0),
        );

        let expected = [
            Vec3::new(360.0, 360.0, 360.0),
            Vec3::new(262.96298, 262.72, 262.693),
            Vec3::new(185.74397, 185.36, 185.26399),
            Vec3::new(126.08098, 125.64, 125.451004),
            Vec3::new(81.71199, 81.28, 80.99202),
            Vec3::new(50.374992, 49.999996, 49.625034),
            Vec3::new(29.807993, 29.51999, 29.088047),
            Vec3::new(17.748993, 17.559984, 17.11906),
            Vec3::new(11.935992, 11.839972, 11.456075),
            Vec3::new(10.106991, 10.079955, 9.83709),
        ];

        assert_eq!(points.len(), expected.len());
        for (p, e) in points.into_iter().zip(expected) {
            assert_vec_near(p, e, 1e-3);
        }
    }

    #[test]
    fn wrap_degrees_maps_into_half_open_turn() {
        assert_eq!(wrap_degrees(0.0), 360.0);
        assert_eq!(wrap_degrees(360.0), 360.0);
        assert_eq!(wrap_degrees(10.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(450.0), 90.0);
    }
}
