//! Hermitian operator from a real diagonal and a strict lower triangle.
//!
//! Only the strict lower triangle `L` of the given matrix is read; the action
//! is `d ⊙ v + L v + Lᴴ v`, so the upper triangle is never formed.

use crate::core::scalar::Scalar;
use crate::core::traits::{LinearMatrix, MatTransVec, MatVec};
use crate::error::OpError;
use crate::matrix::CsrMatrix;
use crate::operator::{Action, Operator, Properties};
use std::sync::Arc;

/// `diag(d) + L + Lᴴ` with `L` the strict lower triangle of `t`.
///
/// `t` must be `n × n` with `n = d.len()`. The result is flagged Hermitian
/// (and symmetric for real `T`) with no stored dual actions; for complex `T`
/// the entries of `d` should be real for the flag to be honest.
pub fn hermitian<T, M>(d: Vec<T>, t: &M) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    M: LinearMatrix<T> + ?Sized,
{
    let n = d.len();
    if t.nrows() != n || t.ncols() != n {
        return Err(OpError::ShapeMismatch(format!(
            "triangle source must be {n}x{n}, got {}x{}",
            t.nrows(),
            t.ncols()
        )));
    }
    let lower = CsrMatrix::from_fn_filtered(n, n, |i, j| t.get(i, j), |i, j| i > j);
    let d = Arc::new(d);
    let product: Action<T> = Arc::new(move |v: &[T]| {
        let mut lv = vec![T::zero(); n];
        let mut lhv = vec![T::zero(); n];
        lower.matvec(v, &mut lv);
        lower.matadjvec(v, &mut lhv);
        Ok((0..n).map(|i| d[i] * v[i] + lv[i] + lhv[i]).collect())
    });
    let props = Properties::from_flags(T::ELEMENT_TYPE.is_real(), true);
    Ok(Operator::from_raw_actions(n, n, props, product, None, None))
}
