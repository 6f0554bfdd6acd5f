// Promotion of a real operator to the matching complex element type

use super::{Action, Operator};
use crate::core::scalar::{RealScalar, Scalar};
use crate::core::traits::Mode;
use num_complex::Complex;
use std::sync::Arc;

fn lift<R>(op: Operator<R>, mode: Mode) -> Action<Complex<R>>
where
    R: RealScalar,
    Complex<R>: Scalar<Real = R>,
{
    Arc::new(move |v: &[Complex<R>]| {
        let re: Vec<R> = v.iter().map(|z| z.re).collect();
        let im: Vec<R> = v.iter().map(|z| z.im).collect();
        let (a, b) = (op.act(mode, &re)?, op.act(mode, &im)?);
        Ok(a.into_iter().zip(b).map(|(x, y)| Complex::new(x, y)).collect())
    })
}

impl<R> Operator<R>
where
    R: RealScalar,
    Complex<R>: Scalar<Real = R>,
{
    /// The same operator acting on complex vectors: `A(x + iy) = Ax + iAy`.
    ///
    /// Flags carry over unchanged; a dual action is stored when it can be
    /// evaluated on `self`. For a real operator the transpose and adjoint
    /// coincide.
    pub fn complexify(&self) -> Operator<Complex<R>> {
        let slot = |mode| self.supports(mode).then(|| lift(self.clone(), mode));
        Operator::from_raw_actions(
            self.nrow,
            self.ncol,
            self.props,
            lift(self.clone(), Mode::Normal),
            slot(Mode::Transpose),
            slot(Mode::Adjoint),
        )
    }
}
