// Identity, all-ones and zero operators

use crate::core::scalar::Scalar;
use crate::operator::{Action, Operator, Properties};
use std::sync::Arc;

/// `Iₙ`: every action returns its input.
pub fn identity<T: Scalar>(n: usize) -> Operator<T> {
    let id: Action<T> = Arc::new(|v: &[T]| Ok(v.to_vec()));
    Operator::from_raw_actions(n, n, Properties::all(), id.clone(), Some(id.clone()), Some(id))
}

/// All-ones `nrow × ncol` operator: `v ↦ sum(v) · 1`.
pub fn ones<T: Scalar>(nrow: usize, ncol: usize) -> Operator<T> {
    let props = Properties::from_flags(nrow == ncol, nrow == ncol);
    let fill = |n: usize| -> Action<T> { Arc::new(move |v: &[T]| Ok(vec![v.iter().copied().sum(); n])) };
    Operator::from_raw_actions(nrow, ncol, props, fill(nrow), Some(fill(ncol)), Some(fill(ncol)))
}

/// Zero `nrow × ncol` operator.
pub fn zeros<T: Scalar>(nrow: usize, ncol: usize) -> Operator<T> {
    let props = Properties::from_flags(nrow == ncol, nrow == ncol);
    let fill = |n: usize| -> Action<T> { Arc::new(move |_: &[T]| Ok(vec![T::zero(); n])) };
    Operator::from_raw_actions(nrow, ncol, props, fill(nrow), Some(fill(ncol)), Some(fill(ncol)))
}
