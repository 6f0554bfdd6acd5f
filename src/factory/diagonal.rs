//! Diagonal operators, square and rectangular.
//!
//! A rectangular `nrow × ncol` diagonal carries `min(nrow, ncol)` entries; the
//! missing part of the output is zero-padded and the surplus part of the input
//! is ignored.

use crate::core::scalar::Scalar;
use crate::error::OpError;
use crate::operator::{Action, Operator, Properties};
use std::sync::Arc;

fn scale_by<T: Scalar>(d: Arc<Vec<T>>, conj: bool, n_out: usize) -> Action<T> {
    Arc::new(move |v: &[T]| {
        let mut out: Vec<T> = d
            .iter()
            .zip(v.iter())
            .map(|(&di, &vi)| if conj { di.conj() * vi } else { di * vi })
            .collect();
        out.resize(n_out, T::zero());
        Ok(out)
    })
}

/// Square diagonal operator `diag(d)`.
///
/// Always symmetric; Hermitian when every entry of `d` is real.
pub fn diagonal<T: Scalar>(d: Vec<T>) -> Operator<T> {
    let n = d.len();
    let hermitian = d.iter().all(|di| di.is_real_valued());
    let d = Arc::new(d);
    let product = scale_by(d.clone(), false, n);
    Operator::from_raw_actions(
        n,
        n,
        Properties::from_flags(true, hermitian),
        product.clone(),
        Some(product),
        Some(scale_by(d, true, n)),
    )
}

/// Rectangular `nrow × ncol` diagonal operator with `d.len() == min(nrow, ncol)`.
pub fn diagonal_rect<T: Scalar>(nrow: usize, ncol: usize, d: Vec<T>) -> Result<Operator<T>, OpError> {
    let k = nrow.min(ncol);
    if d.len() != k {
        return Err(OpError::length("rectangular diagonal entries", k, d.len()));
    }
    if nrow == ncol {
        return Ok(diagonal(d));
    }
    // zip() truncates the longer input; resize() pads the output.
    let d = Arc::new(d);
    Ok(Operator::from_raw_actions(
        nrow,
        ncol,
        Properties::empty(),
        scale_by(d.clone(), false, nrow),
        Some(scale_by(d.clone(), false, ncol)),
        Some(scale_by(d, true, ncol)),
    ))
}
