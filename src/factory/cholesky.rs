//! Cholesky-based inverse of a Hermitian positive-definite matrix.
//!
//! The factorization `M = L Lᴴ` is computed once, at construction; every
//! application performs the two triangular solves `L⁻ᴴ (L⁻¹ v)`.

use crate::core::scalar::Scalar;
use crate::core::traits::{CholeskyFactor, Factorize, LinearMatrix};
use crate::error::OpError;
use crate::operator::{Action, Operator, Properties};
use crate::validation::{check_hermitian, check_positive_definite};
use rand::Rng;
use std::sync::Arc;

/// `M⁻¹` through a Cholesky factorization of `M`.
///
/// With `check` set, `M` is first probed for Hermitian-ness and
/// positive-definiteness using `rand::thread_rng()`; see [`cholesky_with_rng`].
pub fn cholesky<T, M>(m: M, check: bool) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    M: Factorize<T> + LinearMatrix<T> + 'static,
{
    cholesky_with_rng(m, check, &mut rand::thread_rng())
}

/// [`cholesky`] drawing its probe vectors from `rng`.
///
/// Fails with `ShapeMismatch` for a non-square `M`, with `ConstructionError`
/// when a requested check fails, and with the factorization's own error when
/// `M` cannot be factored.
pub fn cholesky_with_rng<T, M, R>(m: M, check: bool, rng: &mut R) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    M: Factorize<T> + LinearMatrix<T> + 'static,
    R: Rng + ?Sized,
{
    let n = m.nrows();
    if n != m.ncols() {
        return Err(OpError::ShapeMismatch(format!(
            "Cholesky operator requires a square matrix, got {}x{}",
            n,
            m.ncols()
        )));
    }
    let m = Arc::new(m);
    if check {
        let op = Operator::from_shared_matrix(m.clone());
        if !check_hermitian(&op, rng)? {
            return Err(OpError::ConstructionError("matrix is not Hermitian".to_string()));
        }
        if !check_positive_definite(&op, rng)? {
            return Err(OpError::ConstructionError("matrix is not positive definite".to_string()));
        }
    }
    let factor = Arc::new(m.cholesky()?);
    if factor.dim() != n {
        return Err(OpError::FactorError(format!(
            "factor has dimension {}, expected {}",
            factor.dim(),
            n
        )));
    }
    let product: Action<T> = Arc::new(move |v: &[T]| {
        let mut x = v.to_vec();
        factor.solve_in_place(&mut x);
        Ok(x)
    });
    let props = Properties::from_flags(T::ELEMENT_TYPE.is_real(), true);
    Ok(Operator::from_raw_actions(n, n, props, product, None, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MatVec;
    use approx::assert_abs_diff_eq;
    use faer::Mat;
    use num_complex::Complex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spd() -> Mat<f64> {
        Mat::from_fn(3, 3, |i, j| match (i, j) {
            (0, 0) => 4.0, (0, 1) => 1.0, (0, 2) => 0.0,
            (1, 0) => 1.0, (1, 1) => 3.0, (1, 2) => 1.0,
            (2, 0) => 0.0, (2, 1) => 1.0, (2, 2) => 2.0,
            _ => 0.0,
        })
    }

    #[test]
    fn cholesky_operator_inverts_matrix() {
        let a = spd();
        let mut rng = StdRng::seed_from_u64(42);
        let op = cholesky_with_rng(a.clone(), true, &mut rng).unwrap();
        assert!(op.is_symmetric() && op.is_hermitian());
        assert!(!op.has_transpose_action());
        let b = [1.0, 2.0, 3.0];
        let x = op.apply(&b).unwrap();
        let mut ax = vec![0.0; 3];
        a.matvec(&x, &mut ax);
        for (ai, bi) in ax.iter().zip(b) {
            assert_abs_diff_eq!(*ai, bi, epsilon = 1e-12);
        }
        // symmetric flag lets the transpose fall back to the product
        assert_eq!(op.apply_transpose(&b).unwrap(), x);
    }

    #[test]
    fn complex_cholesky_is_hermitian_only() {
        let i = Complex::new(0.0, 1.0);
        let a = Mat::from_fn(2, 2, |r, c| match (r, c) {
            (0, 0) => Complex::new(2.0, 0.0),
            (0, 1) => i,
            (1, 0) => -i,
            _ => Complex::new(3.0, 0.0),
        });
        let op = cholesky(a, false).unwrap();
        assert!(op.is_hermitian());
        assert!(!op.is_symmetric());
    }

    #[test]
    fn negative_definite_fails_the_check() {
        let neg = Mat::from_fn(3, 3, |i, j| if i == j { -1.0 } else { 0.0 });
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            cholesky_with_rng(neg.clone(), true, &mut rng),
            Err(OpError::ConstructionError(_))
        ));
        // unchecked, the factorization itself refuses
        assert!(matches!(cholesky(neg, false), Err(OpError::FactorError(_))));
    }

    #[test]
    fn rectangular_matrix_is_rejected() {
        let a = Mat::from_fn(2, 3, |_, _| 1.0);
        assert!(matches!(cholesky(a, false), Err(OpError::ShapeMismatch(_))));
    }
}
