// Index restriction R: v ↦ v[indices] and its transpose, the zero extension

use crate::core::scalar::Scalar;
use crate::error::OpError;
use crate::operator::{Action, Operator, Properties};
use std::sync::Arc;

/// `k × n` restriction selecting `v[indices[0]], …, v[indices[k-1]]`.
///
/// The transpose (equal to the adjoint, the entries being 0 or 1) scatters
/// back into a zero vector of length `n`; repeated indices accumulate.
pub fn restriction<T: Scalar>(indices: Vec<usize>, n: usize) -> Result<Operator<T>, OpError> {
    if let Some(&index) = indices.iter().find(|&&i| i >= n) {
        return Err(OpError::IndexOutOfBounds { index, len: n });
    }
    let k = indices.len();
    let indices = Arc::new(indices);
    let gather: Action<T> = {
        let indices = indices.clone();
        Arc::new(move |v: &[T]| Ok(indices.iter().map(|&i| v[i]).collect()))
    };
    let scatter: Action<T> = Arc::new(move |u: &[T]| {
        let mut out = vec![T::zero(); n];
        for (&i, &ui) in indices.iter().zip(u) {
            out[i] = out[i] + ui;
        }
        Ok(out)
    });
    Ok(Operator::from_raw_actions(k, n, Properties::empty(), gather, Some(scatter.clone()), Some(scatter)))
}

/// `n × k` zero extension placing `u[j]` at position `indices[j]`; `Rᵗ`.
pub fn extension<T: Scalar>(indices: Vec<usize>, n: usize) -> Result<Operator<T>, OpError> {
    restriction(indices, n)?.transpose()
}
