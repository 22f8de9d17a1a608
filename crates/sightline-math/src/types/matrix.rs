use core::fmt;
use core::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};

use super::Vector;

/// Fixed-size square single-precision matrix.
///
/// Storage is row-major: element `(row, col)` lives at flat index
/// `row * N + col`. This layout is what [`as_array`](Self::as_array) and
/// [`as_bytes`](Self::as_bytes) hand to uniform upload; consumers targeting a
/// column-major API transpose on their side.
///
/// `Matrix::default()` is the identity.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<const N: usize>([[f32; N]; N]);

/// 2×2 matrix.
pub type Mat2 = Matrix<2>;
/// 3×3 matrix.
pub type Mat3 = Matrix<3>;
/// 4×4 matrix.
pub type Mat4 = Matrix<4>;

// SAFETY: `Matrix<N>` is a transparent wrapper around `[[f32; N]; N]`, which has
// no padding and accepts any bit pattern.
unsafe impl<const N: usize> Zeroable for Matrix<N> {}
unsafe impl<const N: usize> Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// Number of rows (and columns).
    pub const DIM: usize = N;

    /// Number of elements.
    pub const SIZE: usize = N * N;

    pub const IDENTITY: Self = {
        let mut rows = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = 1.0;
            i += 1;
        }
        Self(rows)
    };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Matrix with every element set to `value`.
    #[inline]
    pub const fn filled(value: f32) -> Self {
        Self([[value; N]; N])
    }

    #[inline]
    pub const fn from_rows_array(rows: [[f32; N]; N]) -> Self {
        Self(rows)
    }

    /// Assembles `N` row vectors into row-major storage.
    #[inline]
    pub fn from_rows(rows: [Vector<N>; N]) -> Self {
        Self(rows.map(Vector::to_array))
    }

    #[inline]
    pub const fn to_rows_array(self) -> [[f32; N]; N] {
        self.0
    }

    #[inline]
    pub fn row(&self, row: usize) -> Vector<N> {
        Vector::from_array(self.0[row])
    }

    #[inline]
    pub fn col(&self, col: usize) -> Vector<N> {
        Vector::from_array(core::array::from_fn(|row| self.0[row][col]))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row][col]
    }

    /// Overwrites one element in place and returns the same matrix for chaining.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> &mut Self {
        self.0[row][col] = value;
        self
    }

    /// Flat row-major view of all `N * N` elements.
    #[inline]
    pub fn as_array(&self) -> &[f32] {
        self.0.as_flattened()
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32] {
        self.0.as_flattened_mut()
    }

    /// Raw bytes of the row-major storage, ready for a uniform buffer write.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|e| e.is_finite())
    }

    #[inline]
    pub(crate) fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(|row| row.map(&mut f)))
    }

    #[inline]
    pub(crate) fn zip_with(self, rhs: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        let mut out = self;
        for (o, r) in out.as_mut_array().iter_mut().zip(rhs.as_array()) {
            *o = f(*o, *r);
        }
        out
    }
}

impl Matrix<2> {
    /// Builds a matrix from elements listed row by row.
    #[inline]
    pub const fn new(m: [f32; 4]) -> Self {
        Self([[m[0], m[1]], [m[2], m[3]]])
    }
}

impl Matrix<3> {
    /// Builds a matrix from elements listed row by row.
    #[inline]
    pub const fn new(m: [f32; 9]) -> Self {
        Self([[m[0], m[1], m[2]], [m[3], m[4], m[5]], [m[6], m[7], m[8]]])
    }
}

impl Matrix<4> {
    /// Builds a matrix from elements listed row by row.
    #[inline]
    pub const fn new(m: [f32; 16]) -> Self {
        Self([
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ])
    }
}

impl<const N: usize> Default for Matrix<N> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn from(rows: [[f32; N]; N]) -> Self {
        Self(rows)
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.0[row][col]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.0[row][col]
    }
}

/// Row-by-column product. Not commutative: `a * b` applies `b` first when the
/// result transforms a column vector.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; N]; N];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, e) in out_row.iter_mut().enumerate() {
                *e = (0..N).map(|k| self.0[r][k] * rhs.0[k][c]).sum();
            }
        }
        Self(out)
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;
    fn mul(self, v: Vector<N>) -> Vector<N> {
        Vector::from_array(core::array::from_fn(|r| {
            self.0[r].iter().zip(v.as_array()).map(|(m, c)| m * c).sum::<f32>()
        }))
    }
}

impl<const N: usize> Add for Matrix<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for Matrix<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|e| e * rhs)
    }
}

impl<const N: usize> Add<f32> for Matrix<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f32) -> Self {
        self.map(|e| e + rhs)
    }
}

impl<const N: usize> Sub<f32> for Matrix<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f32) -> Self {
        self.map(|e| e - rhs)
    }
}

/// Multiplies by the reciprocal. Dividing by zero yields infinities (or NaN for
/// zero elements); it is not guarded.
impl<const N: usize> Div<f32> for Matrix<N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        let inv = 1.0 / rhs;
        self.map(|e| e * inv)
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            f.write_str("[")?;
            for (c, e) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{e:>10.4}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
