//! Block concatenation of operators.
//!
//! `hcat(A, B) = [A B]` and `vcat(A, B) = [A; B]`. The variadic forms fold
//! pairwise from the left, so `hcat_all([A, B, C]) = hcat(hcat(A, B), C)`.

use super::node::Node;
use super::{Operator, Properties};
use crate::core::scalar::Scalar;
use crate::error::OpError;

/// `[A B]`. Requires `A.nrows() == B.nrows()`.
pub fn hcat<T, A, B>(a: A, b: B) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    B: Into<Operator<T>>,
{
    let (a, b) = (a.into(), b.into());
    if a.nrows() != b.nrows() {
        return Err(OpError::ShapeMismatch(format!(
            "hcat requires equal row counts, got {} and {}",
            a.nrows(),
            b.nrows()
        )));
    }
    let (nrow, ncol) = (a.nrows(), a.ncols() + b.ncols());
    Ok(Operator::from_node(nrow, ncol, Properties::empty(), Node::HConcat(a, b)))
}

/// `[A; B]`. Requires `A.ncols() == B.ncols()`.
pub fn vcat<T, A, B>(a: A, b: B) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    B: Into<Operator<T>>,
{
    let (a, b) = (a.into(), b.into());
    if a.ncols() != b.ncols() {
        return Err(OpError::ShapeMismatch(format!(
            "vcat requires equal column counts, got {} and {}",
            a.ncols(),
            b.ncols()
        )));
    }
    let (nrow, ncol) = (a.nrows() + b.nrows(), a.ncols());
    Ok(Operator::from_node(nrow, ncol, Properties::empty(), Node::VConcat(a, b)))
}

fn fold_blocks<T: Scalar>(
    ops: &[Operator<T>],
    join: fn(Operator<T>, Operator<T>) -> Result<Operator<T>, OpError>,
) -> Result<Operator<T>, OpError> {
    let (first, rest) = ops
        .split_first()
        .ok_or(OpError::Unsupported("cannot concatenate an empty list of operators"))?;
    rest.iter().try_fold(first.clone(), |acc, op| join(acc, op.clone()))
}

/// `[A₁ A₂ … Aₖ]`.
pub fn hcat_all<T: Scalar>(ops: &[Operator<T>]) -> Result<Operator<T>, OpError> {
    fold_blocks(ops, hcat::<T, Operator<T>, Operator<T>>)
}

/// `[A₁; A₂; …; Aₖ]`.
pub fn vcat_all<T: Scalar>(ops: &[Operator<T>]) -> Result<Operator<T>, OpError> {
    fold_blocks(ops, vcat::<T, Operator<T>, Operator<T>>)
}
