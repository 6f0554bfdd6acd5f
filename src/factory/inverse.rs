// Inverse operator backed by a linear-solve collaborator

use crate::core::scalar::Scalar;
use crate::core::traits::{LinearSolve, Mode};
use crate::error::OpError;
use crate::operator::{Action, Operator, Properties};
use std::sync::Arc;

fn solve_action<T: Scalar, S: LinearSolve<T> + 'static>(m: Arc<S>, mode: Mode) -> Action<T> {
    Arc::new(move |v: &[T]| m.solve(v, mode))
}

fn build<T: Scalar, S: LinearSolve<T> + 'static>(m: S, props: Properties) -> Operator<T> {
    let (nrow, ncol) = (m.ncols(), m.nrows());
    let m = Arc::new(m);
    Operator::from_raw_actions(
        nrow,
        ncol,
        props,
        solve_action(m.clone(), Mode::Normal),
        Some(solve_action(m.clone(), Mode::Transpose)),
        Some(solve_action(m, Mode::Adjoint)),
    )
}

/// `M⁻¹` applied through `solve(M, ·)`; nothing is factored ahead of time.
///
/// Solver failures (e.g. a rectangular or singular `M`) surface when the
/// operator is applied.
pub fn inverse<T: Scalar, S: LinearSolve<T> + 'static>(m: S) -> Operator<T> {
    build(m, Properties::empty())
}

/// [`inverse`] for an `M` known to be symmetric and/or Hermitian.
pub fn inverse_with<T: Scalar, S: LinearSolve<T> + 'static>(
    m: S,
    symmetric: bool,
    hermitian: bool,
) -> Result<Operator<T>, OpError> {
    if (symmetric || hermitian) && m.nrows() != m.ncols() {
        return Err(OpError::ConstructionError(format!(
            "a {}x{} matrix cannot be symmetric or Hermitian",
            m.nrows(),
            m.ncols()
        )));
    }
    Ok(build(m, Properties::from_flags(symmetric, hermitian)))
}
