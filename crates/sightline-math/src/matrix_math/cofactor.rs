use crate::error::{MathError, MathResult};
use crate::types::{Mat2, Mat3, Mat4, Matrix};

/// Square matrices that support cofactor expansion.
///
/// Implemented for 2×2 (closed form), 3×3 and 4×4 (expansion along the first
/// row, recursing into the next smaller size).
pub trait Square: Copy {
    fn determinant(&self) -> f32;

    /// Matrix of the determinants of every element's exclusion minor.
    fn minors(&self) -> Self;

    /// Adjugate: the transpose of the cofactor matrix.
    fn adjoint(&self) -> Self;
}

impl Square for Mat2 {
    #[inline]
    fn determinant(&self) -> f32 {
        self.get(0, 0) * self.get(1, 1) - self.get(1, 0) * self.get(0, 1)
    }

    #[inline]
    fn minors(&self) -> Self {
        Mat2::new([self.get(1, 1), self.get(1, 0), self.get(0, 1), self.get(0, 0)])
    }

    /// Swap the diagonal, negate the off-diagonal.
    #[inline]
    fn adjoint(&self) -> Self {
        Mat2::new([self.get(1, 1), -self.get(0, 1), -self.get(1, 0), self.get(0, 0)])
    }
}

impl Square for Mat3 {
    fn determinant(&self) -> f32 {
        expand_first_row::<3, 2>(self)
    }

    fn minors(&self) -> Self {
        minors_of::<3, 2>(self)
    }

    fn adjoint(&self) -> Self {
        transpose(&cofactors(self))
    }
}

impl Square for Mat4 {
    fn determinant(&self) -> f32 {
        expand_first_row::<4, 3>(self)
    }

    fn minors(&self) -> Self {
        minors_of::<4, 3>(self)
    }

    fn adjoint(&self) -> Self {
        transpose(&cofactors(self))
    }
}

fn expand_first_row<const N: usize, const M: usize>(m: &Matrix<N>) -> f32
where
    Matrix<M>: Square,
{
    (0..N)
        .map(|col| {
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            sign * m.get(0, col) * exclude::<N, M>(m, col, 0).determinant()
        })
        .sum()
}

fn minors_of<const N: usize, const M: usize>(m: &Matrix<N>) -> Matrix<N>
where
    Matrix<M>: Square,
{
    let mut out = Matrix::<N>::filled(0.0);
    for row in 0..N {
        for col in 0..N {
            out[(row, col)] = exclude::<N, M>(m, col, row).determinant();
        }
    }
    out
}

/// Drops one column and one row, keeping the remaining elements in order.
///
/// `M` must be `N - 1`; any other size fails to compile.
pub fn exclude<const N: usize, const M: usize>(m: &Matrix<N>, col: usize, row: usize) -> Matrix<M> {
    const { assert!(M + 1 == N, "exclusion removes exactly one row and one column") };

    let kept = (0..N)
        .filter(|&r| r != row)
        .flat_map(|r| (0..N).filter(move |&c| c != col).map(move |c| (r, c)));

    let mut out = Matrix::<M>::filled(0.0);
    for (dst, (r, c)) in out.as_mut_array().iter_mut().zip(kept) {
        *dst = m.get(r, c);
    }
    out
}

#[inline]
pub fn determinant<const N: usize>(m: &Matrix<N>) -> f32
where
    Matrix<N>: Square,
{
    m.determinant()
}

#[inline]
pub fn minors<const N: usize>(m: &Matrix<N>) -> Matrix<N>
where
    Matrix<N>: Square,
{
    m.minors()
}

/// Minors with the checkerboard sign pattern applied, `+` at `(0, 0)`.
pub fn cofactors<const N: usize>(m: &Matrix<N>) -> Matrix<N>
where
    Matrix<N>: Square,
{
    let mut out = m.minors();
    for row in 0..N {
        for col in 0..N {
            if (row + col) % 2 == 1 {
                out[(row, col)] = -out[(row, col)];
            }
        }
    }
    out
}

#[inline]
pub fn adjoint<const N: usize>(m: &Matrix<N>) -> Matrix<N>
where
    Matrix<N>: Square,
{
    m.adjoint()
}

/// Adjugate divided by the determinant.
///
/// Fails only when the determinant is exactly `0.0`; near-singular matrices
/// invert to large but finite values.
pub fn inverse<const N: usize>(m: &Matrix<N>) -> MathResult<Matrix<N>>
where
    Matrix<N>: Square,
{
    let det = m.determinant();
    if det == 0.0 {
        return Err(MathError::InverseNotAvailable { determinant: det });
    }

    Ok(m.adjoint() * (1.0 / det))
}

pub fn transpose<const N: usize>(m: &Matrix<N>) -> Matrix<N> {
    Matrix::from_rows_array(core::array::from_fn(|row| {
        core::array::from_fn(|col| m.get(col, row))
    }))
}

/// Inverse-transpose of the upper-left 3×3 block of a model-view matrix.
///
/// A singular block yields the 3×3 identity instead of an error. This is the
/// only place an unavailable inverse is swallowed.
pub fn normal_matrix(model_view: &Mat4) -> Mat3 {
    let upper = Mat3::from_rows([
        model_view.row(0).xyz(),
        model_view.row(1).xyz(),
        model_view.row(2).xyz(),
    ]);

    match inverse(&upper) {
        Ok(inv) => transpose(&inv),
        Err(err) => {
            log::debug!("normal matrix: {err}; using identity");
            Mat3::IDENTITY
        }
    }
}
