//! Collaborator traits: the interfaces external matrices, solvers and
//! factorizations expose to the operator layer.

use crate::core::scalar::Scalar;
use crate::error::OpError;

/// Which action of an operator to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `y = A x`
    Normal,
    /// `y = Aᵗ x`
    Transpose,
    /// `y = Aᴴ x`
    Adjoint,
}

impl Mode {
    /// Swaps `Transpose` and `Adjoint`; `Normal` is unchanged.
    pub fn dual(self) -> Mode {
        match self {
            Mode::Normal => Mode::Normal,
            Mode::Transpose => Mode::Adjoint,
            Mode::Adjoint => Mode::Transpose,
        }
    }
}

/// Shape of a matrix collaborator.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

/// Element access by (row, col).
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<T> {
    /// Compute y = A · x. `x.len() == ncols`, `y.len() == nrows`.
    fn matvec(&self, x: &[T], y: &mut [T]);
}

/// Transposed and conjugate-transposed products.
pub trait MatTransVec<T> {
    /// Compute y = Aᵗ · x.
    fn mattransvec(&self, x: &[T], y: &mut [T]);
    /// Compute y = Aᴴ · x.
    fn matadjvec(&self, x: &[T], y: &mut [T]);
}

/// Everything the operator layer needs from a matrix collaborator.
pub trait LinearMatrix<T>: MatShape + MatrixGet<T> + MatVec<T> + MatTransVec<T> + Send + Sync {}

impl<T, M> LinearMatrix<T> for M where M: MatShape + MatrixGet<T> + MatVec<T> + MatTransVec<T> + Send + Sync {}

/// Linear-solve collaborator used by the inverse operator.
pub trait LinearSolve<T>: MatShape + Send + Sync {
    /// Solve `op(M) x = b` where `op` is selected by `mode`.
    fn solve(&self, b: &[T], mode: Mode) -> Result<Vec<T>, OpError>;
}

/// Lower-triangular Cholesky factor `L` of `A = L Lᴴ`.
pub trait CholeskyFactor<T>: Send + Sync {
    fn dim(&self) -> usize;
    /// Forward substitution: b ← L⁻¹ b.
    fn solve_lower_in_place(&self, b: &mut [T]);
    /// Back substitution with the adjoint factor: b ← L⁻ᴴ b.
    fn solve_lower_adjoint_in_place(&self, b: &mut [T]);
    /// Full solve with the factored matrix: b ← L⁻ᴴ L⁻¹ b.
    fn solve_in_place(&self, b: &mut [T]) {
        self.solve_lower_in_place(b);
        self.solve_lower_adjoint_in_place(b);
    }
}

/// Factorization collaborator used by the Cholesky operator.
pub trait Factorize<T> {
    type Factor: CholeskyFactor<T> + 'static;
    /// Factor a Hermitian positive-definite matrix.
    fn cholesky(&self) -> Result<Self::Factor, OpError>;
}

/// Inner products & norms.
pub trait InnerProduct<T: Scalar> {
    /// Compute ⟨x, y⟩ = Σ conj(xᵢ) yᵢ.
    fn dot(&self, x: &[T], y: &[T]) -> T;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &[T]) -> T::Real;
}
