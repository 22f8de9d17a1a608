use core::fmt;
use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

/// Fixed-size single-precision vector.
///
/// Components are stored in declaration order (`x, y, z, w`) without padding, so
/// a slice of vectors casts directly to a flat `&[f32]` for buffer upload.
///
/// Equality is plain IEEE-754 component equality: a vector holding a NaN is never
/// equal to anything, itself included.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<const N: usize>([f32; N]);

/// 2-component vector.
pub type Vec2 = Vector<2>;
/// 3-component vector.
pub type Vec3 = Vector<3>;
/// 4-component vector.
pub type Vec4 = Vector<4>;

// SAFETY: `Vector<N>` is a transparent wrapper around `[f32; N]`, which has no
// padding and accepts any bit pattern.
unsafe impl<const N: usize> Zeroable for Vector<N> {}
unsafe impl<const N: usize> Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// Number of components.
    pub const SIZE: usize = N;

    pub const ZERO: Self = Self([0.0; N]);

    #[inline]
    pub const fn from_array(components: [f32; N]) -> Self {
        Self(components)
    }

    /// Vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self([value; N])
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.0
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; N] {
        &mut self.0
    }

    /// Overwrites one component in place and returns the same vector for chaining.
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> &mut Self {
        self.0[index] = value;
        self
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    #[inline]
    pub fn has_nan(self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }

    #[inline]
    pub(crate) fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(&mut f))
    }

    #[inline]
    pub(crate) fn zip_with(self, rhs: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = f(*o, r);
        }
        Self(out)
    }
}

impl Vector<2> {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }
}

impl Vector<3> {
    pub const UNIT_X: Self = Self([1.0, 0.0, 0.0]);
    pub const UNIT_Y: Self = Self([0.0, 1.0, 0.0]);
    pub const UNIT_Z: Self = Self([0.0, 0.0, 1.0]);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.0[2]
    }

    /// Appends a fourth component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }
}

impl Vector<4> {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// Homogeneous point (`w == 1`).
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z, 1.0])
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn w(self) -> f32 {
        self.0[3]
    }

    /// Drops the fourth component.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vector([self.0[0], self.0[1], self.0[2]])
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(components: [f32; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(v: Vector<N>) -> Self {
        v.0
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.0[index]
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("⟨")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("⟩")
    }
}
