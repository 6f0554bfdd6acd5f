//! Dense solve and factorization collaborators on top of Faer.
//!
//! `faer::Mat<T>` doubles as the solve collaborator for
//! [`inverse`](crate::factory::inverse) (full-pivoting LU, recomputed on every
//! call) and as the factorization collaborator for
//! [`cholesky`](crate::factory::cholesky) (faer's `Llt`, computed once).
//!
//! # References
//! - Faer documentation: https://github.com/sarah-ek/faer-rs
//! - Golub & Van Loan, Matrix Computations

use crate::core::scalar::Scalar;
use crate::core::traits::{CholeskyFactor, Factorize, LinearSolve, MatShape, Mode};
use crate::error::OpError;
use faer::linalg::solvers::{FullPivLu, Llt, SolveCore};
use faer::traits::ComplexField;
use faer::{Conj, Mat, MatMut, Side};
use num_traits::Float;

impl<T: Scalar + ComplexField> LinearSolve<T> for Mat<T> {
    /// Solve `op(A) x = b` with a fresh full-pivoting LU of `A` (or `Aᵗ`).
    ///
    /// `Aᴴ x = b` is solved as `conj(Aᵗ) x = b`.
    fn solve(&self, b: &[T], mode: Mode) -> Result<Vec<T>, OpError> {
        if self.nrows() != self.ncols() {
            return Err(OpError::SolveError(format!(
                "LU solve requires a square matrix, got {}x{}",
                self.nrows(),
                self.ncols()
            )));
        }
        if b.len() != self.nrows() {
            return Err(OpError::length("LU solve right-hand side", self.nrows(), b.len()));
        }
        let factor = match mode {
            Mode::Normal => FullPivLu::new(self.as_ref()),
            Mode::Transpose | Mode::Adjoint => FullPivLu::new(self.transpose()),
        };
        let conj = if mode == Mode::Adjoint { Conj::Yes } else { Conj::No };
        let mut x = b.to_vec();
        let n = x.len();
        let x_mat = MatMut::from_column_major_slice_mut(&mut x, n, 1);
        factor.solve_in_place_with_conj(conj, x_mat);
        if x.iter().any(|xi| !xi.re().is_finite() || !xi.im().is_finite()) {
            return Err(OpError::SolveError("LU solve produced non-finite values (singular matrix?)".to_string()));
        }
        Ok(x)
    }
}

/// Cholesky factorization `A = L Lᴴ` produced by faer's `Llt`.
///
/// The full solve `A⁻¹ b` runs on faer's own triangular kernels; the
/// individual substitutions with `L` and `Lᴴ` are plain loops over the
/// stored factor.
pub struct DenseCholesky<T: ComplexField> {
    llt: Llt<T>,
    l: Mat<T>,
}

impl<T: Scalar + ComplexField> DenseCholesky<T> {
    /// The factor `L`.
    pub fn factor(&self) -> &Mat<T> {
        &self.l
    }
}

impl<T: Scalar + ComplexField> Factorize<T> for Mat<T> {
    type Factor = DenseCholesky<T>;

    fn cholesky(&self) -> Result<DenseCholesky<T>, OpError> {
        let n = MatShape::nrows(self);
        if n != MatShape::ncols(self) {
            return Err(OpError::FactorError(format!(
                "Cholesky requires a square matrix, got {}x{}",
                n,
                MatShape::ncols(self)
            )));
        }
        let llt = Llt::new(self.as_ref(), Side::Lower)
            .map_err(|e| OpError::FactorError(format!("{e:?}")))?;
        let l = llt.L();
        let l = Mat::from_fn(n, n, |i, j| if i >= j { l[(i, j)] } else { T::zero() });
        Ok(DenseCholesky { llt, l })
    }
}

impl<T: Scalar + ComplexField> CholeskyFactor<T> for DenseCholesky<T> {
    fn dim(&self) -> usize {
        self.l.nrows()
    }

    fn solve_in_place(&self, b: &mut [T]) {
        let n = b.len();
        let rhs = MatMut::from_column_major_slice_mut(b, n, 1);
        self.llt.solve_in_place_with_conj(Conj::No, rhs);
    }

    fn solve_lower_in_place(&self, b: &mut [T]) {
        let n = self.dim();
        for i in 0..n {
            let mut s = b[i];
            for j in 0..i {
                s = s - self.l[(i, j)] * b[j];
            }
            b[i] = s / self.l[(i, i)];
        }
    }

    fn solve_lower_adjoint_in_place(&self, b: &mut [T]) {
        let n = self.dim();
        for i in (0..n).rev() {
            let mut s = b[i];
            for j in i + 1..n {
                s = s - self.l[(j, i)].conj() * b[j];
            }
            b[i] = s / self.l[(i, i)].conj();
        }
    }
}
