//! Unary and binary operator algebra.
//!
//! Every combinator builds a new node over shared children; nothing is
//! evaluated until the result is applied.
//!
//! Property propagation:
//! - `negate`, `conjugate`, `transpose`, `adjoint` keep both flags,
//! - scaling keeps `symmetric` and keeps `hermitian` only for real scalars,
//! - `add` keeps a flag when both operands carry it,
//! - `compose` drops both flags.

use super::node::{Node, ScaleSide};
use super::{Operator, Properties};
use crate::core::scalar::Scalar;
use crate::core::traits::Mode;
use crate::error::OpError;
use crate::factory;

impl<T: Scalar> Operator<T> {
    /// `-A`: every stored action is negated.
    pub fn negate(&self) -> Operator<T> {
        Operator::from_node(self.nrow, self.ncol, self.props, Node::Negate(self.clone()))
    }

    /// `Aᵗ`.
    ///
    /// Symmetric operators are returned unchanged. Otherwise the transpose action
    /// must be stored or derivable from the adjoint (`Aᵗv = conj(Aᴴ conj(v))`).
    pub fn transpose(&self) -> Result<Operator<T>, OpError> {
        if self.is_symmetric() {
            return Ok(self.clone());
        }
        if !self.supports(Mode::Transpose) {
            return Err(OpError::InferenceError(format!(
                "cannot transpose a {}x{} operator without a transpose or adjoint action",
                self.nrow, self.ncol
            )));
        }
        Ok(Operator::from_node(self.ncol, self.nrow, self.props, Node::Transpose(self.clone())))
    }

    /// `Aᴴ`.
    ///
    /// Hermitian operators are returned unchanged. Otherwise the adjoint action
    /// must be stored or derivable from the transpose (`Aᴴv = conj(Aᵗ conj(v))`).
    pub fn adjoint(&self) -> Result<Operator<T>, OpError> {
        if self.is_hermitian() {
            return Ok(self.clone());
        }
        if !self.supports(Mode::Adjoint) {
            return Err(OpError::InferenceError(format!(
                "cannot take the adjoint of a {}x{} operator without an adjoint or transpose action",
                self.nrow, self.ncol
            )));
        }
        Ok(Operator::from_node(self.ncol, self.nrow, self.props, Node::Adjoint(self.clone())))
    }

    /// `conj(A)`: `v ↦ conj(A conj(v))`, with transpose and adjoint slots swapped.
    pub fn conjugate(&self) -> Operator<T> {
        Operator::from_node(self.nrow, self.ncol, self.props, Node::Conjugate(self.clone()))
    }

    /// `A · B`. Requires `A.ncols() == B.nrows()`.
    pub fn compose<B: Into<Operator<T>>>(&self, rhs: B) -> Result<Operator<T>, OpError> {
        let rhs = rhs.into();
        if self.ncol != rhs.nrow {
            return Err(OpError::ShapeMismatch(format!(
                "cannot compose {}x{} with {}x{}",
                self.nrow, self.ncol, rhs.nrow, rhs.ncol
            )));
        }
        let (nrow, ncol) = (self.nrow, rhs.ncol);
        Ok(Operator::from_node(nrow, ncol, Properties::empty(), Node::Compose(self.clone(), rhs)))
    }

    fn scaled(&self, scalar: T, side: ScaleSide) -> Operator<T> {
        let mut props = self.props;
        if !scalar.is_real_valued() {
            props.remove(Properties::HERMITIAN);
        }
        Operator::from_node(self.nrow, self.ncol, props, Node::Scale { op: self.clone(), scalar, side })
    }

    /// `x · A`.
    pub fn scale_left(&self, x: T) -> Operator<T> {
        self.scaled(x, ScaleSide::Left)
    }

    /// `A · x`.
    pub fn scale_right(&self, x: T) -> Operator<T> {
        self.scaled(x, ScaleSide::Right)
    }

    /// `A + B`. Requires identical shapes.
    pub fn add<B: Into<Operator<T>>>(&self, rhs: B) -> Result<Operator<T>, OpError> {
        let rhs = rhs.into();
        if self.shape() != rhs.shape() {
            return Err(OpError::ShapeMismatch(format!(
                "cannot add {}x{} and {}x{}",
                self.nrow, self.ncol, rhs.nrow, rhs.ncol
            )));
        }
        let props = self.props & rhs.props;
        Ok(Operator::from_node(self.nrow, self.ncol, props, Node::Sum(self.clone(), rhs)))
    }

    /// `A - B = A + (-B)`.
    pub fn sub<B: Into<Operator<T>>>(&self, rhs: B) -> Result<Operator<T>, OpError> {
        self.add(rhs.into().negate())
    }

    /// Affine shift `A ⊕ x = A + x · J`, where `J` is the all-ones operator of
    /// the same shape.
    ///
    /// This adds the rank-one action `v ↦ x · sum(v) · 1`; it is not a per-entry
    /// addition of `x` in any other sense.
    pub fn add_scalar(&self, x: T) -> Operator<T> {
        let shift = factory::ones::<T>(self.nrow, self.ncol).scale_left(x);
        let props = self.props & shift.props;
        Operator::from_node(self.nrow, self.ncol, props, Node::Sum(self.clone(), shift))
    }

    /// Affine shift `A ⊖ x = A + (-x) · J`.
    pub fn sub_scalar(&self, x: T) -> Operator<T> {
        self.add_scalar(-x)
    }
}

/// `A · B` with either side given as an operator or a raw matrix.
pub fn compose<T, A, B>(lhs: A, rhs: B) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    B: Into<Operator<T>>,
{
    lhs.into().compose(rhs)
}

/// `A + B` with either side given as an operator or a raw matrix.
pub fn add<T, A, B>(lhs: A, rhs: B) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    B: Into<Operator<T>>,
{
    lhs.into().add(rhs)
}

/// `A - B` with either side given as an operator or a raw matrix.
pub fn subtract<T, A, B>(lhs: A, rhs: B) -> Result<Operator<T>, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    B: Into<Operator<T>>,
{
    lhs.into().sub(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;
    use num_complex::Complex;

    fn nonsym() -> Mat<f64> {
        Mat::from_fn(3, 3, |i, j| (i * 3 + j) as f64 + 1.0)
    }

    #[test]
    fn transpose_of_symmetric_is_identity_map() {
        let op = Operator::from_fn(2, true, |v: &[f64]| vec![v[0] + v[1], v[0]]);
        let t = op.transpose().unwrap();
        assert_eq!(t.apply(&[1.0, 2.0]).unwrap(), op.apply(&[1.0, 2.0]).unwrap());
    }

    #[test]
    fn transpose_without_duals_fails() {
        let op = Operator::from_fn(2, false, |v: &[f64]| vec![v[1], 0.0]);
        assert!(matches!(op.transpose(), Err(OpError::InferenceError(_))));
        assert!(matches!(op.adjoint(), Err(OpError::InferenceError(_))));
    }

    #[test]
    fn transpose_swaps_shape_and_actions() {
        let a = Mat::from_fn(2, 3, |i, j| (i + 2 * j) as f64);
        let op = Operator::from(a.clone());
        let t = op.transpose().unwrap();
        assert_eq!(t.shape(), (3, 2));
        let m = t.materialize().unwrap();
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(m[(i, j)], a[(j, i)]);
            }
        }
        assert_eq!(t.apply_transpose(&[1.0, 0.0, 0.0]).unwrap(), op.apply(&[1.0, 0.0, 0.0]).unwrap());
    }

    #[test]
    fn adjoint_conjugates_complex_entries() {
        let a = Mat::from_fn(2, 2, |i, j| Complex::new(i as f64, j as f64 + 1.0));
        let h = Operator::from(a.clone()).adjoint().unwrap().materialize().unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(h[(i, j)], a[(j, i)].conj());
            }
        }
    }

    #[test]
    fn conjugate_swaps_dual_slots() {
        let a = Mat::from_fn(2, 2, |i, j| Complex::new((i + j) as f64, i as f64 - j as f64));
        let op = Operator::from(a.clone());
        let c = op.conjugate();
        let x = vec![Complex::new(1.0, 2.0), Complex::new(-1.0, 0.5)];
        // conj(A)ᵗ = Aᴴ
        assert_eq!(c.apply_transpose(&x).unwrap(), op.apply_adjoint(&x).unwrap());
        assert_eq!(c.apply_adjoint(&x).unwrap(), op.apply_transpose(&x).unwrap());
        let m = c.materialize().unwrap();
        assert_eq!(m[(1, 0)], a[(1, 0)].conj());
    }

    #[test]
    fn compose_checks_inner_dimension() {
        let a = Operator::from(Mat::from_fn(2, 3, |_, _| 1.0));
        let b = Operator::from(Mat::from_fn(2, 3, |_, _| 1.0));
        assert!(matches!(a.compose(&b), Err(OpError::ShapeMismatch(_))));
        let c = a.compose(b.transpose().unwrap()).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert!(!c.is_symmetric());
    }

    #[test]
    fn compose_transpose_reverses_order() {
        let a = Operator::from(nonsym());
        let b = Operator::from(Mat::from_fn(3, 2, |i, j| (i + j) as f64 - 1.0));
        let ab = compose(&a, &b).unwrap();
        let u = [1.0, -1.0, 2.0];
        let direct = b.apply_transpose(&a.apply_transpose(&u).unwrap()).unwrap();
        assert_eq!(ab.apply_transpose(&u).unwrap(), direct);
    }

    #[test]
    fn compose_accepts_raw_matrix_on_either_side() {
        let op = Operator::from_fn(3, true, |v: &[f64]| v.iter().map(|x| 2.0 * x).collect());
        let left = compose::<f64, _, _>(nonsym(), &op).unwrap();
        let right = compose(&op, nonsym()).unwrap();
        let v = [1.0, 0.0, 0.0];
        assert_eq!(left.apply(&v).unwrap(), vec![2.0, 8.0, 14.0]);
        assert_eq!(right.apply(&v).unwrap(), vec![2.0, 8.0, 14.0]);
    }

    #[test]
    fn complex_scale_drops_hermitian_keeps_symmetric() {
        let op = Operator::<Complex<f64>>::from_fn(2, true, |v| v.to_vec());
        let real = op.scale_left(Complex::new(2.0, 0.0));
        let imag = op.scale_right(Complex::new(0.0, 1.0));
        assert!(real.is_hermitian() && real.is_symmetric());
        assert!(!imag.is_hermitian() && imag.is_symmetric());
    }

    #[test]
    fn scaled_adjoint_uses_conjugate_scalar() {
        let a = Mat::from_fn(2, 2, |i, j| Complex::new(i as f64 + 1.0, j as f64));
        let x = Complex::new(1.0, 3.0);
        let w = vec![Complex::new(0.5, -1.0), Complex::new(2.0, 1.0)];
        let op = Operator::from(a);
        let expected: Vec<_> = op.apply_adjoint(&w).unwrap().into_iter().map(|y| x.conj() * y).collect();
        assert_eq!(op.scale_right(x).apply_adjoint(&w).unwrap(), expected);
        assert_eq!(op.scale_left(x).apply_adjoint(&w).unwrap(), expected);
    }

    #[test]
    fn add_requires_same_shape_and_intersects_flags() {
        let sym = Operator::from_fn(3, true, |v: &[f64]| v.to_vec());
        let mat = Operator::from(nonsym());
        let sum = sym.add(&mat).unwrap();
        assert!(!sum.is_symmetric());
        assert!(sym.add(&sym).unwrap().is_symmetric());
        let wide = Operator::from(Mat::from_fn(3, 4, |_, _| 0.0));
        assert!(matches!(sym.add(&wide), Err(OpError::ShapeMismatch(_))));
    }

    #[test]
    fn subtract_self_is_zero() {
        let a = Operator::from(nonsym());
        let z = subtract::<f64, _, _>(&a, nonsym()).unwrap();
        assert_eq!(z.apply(&[1.0, 2.0, 3.0]).unwrap(), vec![0.0; 3]);
    }

    #[test]
    fn scalar_shift_adds_rank_one_all_ones() {
        let a = Operator::from(nonsym());
        let v = [1.0, 2.0, 3.0];
        let base = a.apply(&v).unwrap();
        // 0.5 * sum(v) = 3 added to every output entry
        let shifted = a.add_scalar(0.5).apply(&v).unwrap();
        for (s, b) in shifted.iter().zip(base.iter()) {
            assert_eq!(*s, b + 3.0);
        }
        let lowered = a.sub_scalar(0.5).apply(&v).unwrap();
        for (s, b) in lowered.iter().zip(base.iter()) {
            assert_eq!(*s, b - 3.0);
        }
    }
}
