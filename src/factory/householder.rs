// Householder reflector I - 2 h hᴴ

use crate::core::scalar::Scalar;
use crate::core::traits::InnerProduct;
use crate::operator::{Action, Operator, Properties};
use std::sync::Arc;

/// Reflector `v ↦ v - 2⟨h, v⟩ h`.
///
/// `h` is expected to have unit norm; it is not normalized here. Hermitian,
/// and symmetric for real `T`. Only the product is stored, the dual actions
/// fall back to it through the flags.
pub fn householder<T: Scalar>(h: Vec<T>) -> Operator<T> {
    let n = h.len();
    let h = Arc::new(h);
    let product: Action<T> = Arc::new(move |v: &[T]| {
        let two = T::one() + T::one();
        let c = two * ().dot(&h, v);
        Ok(v.iter().zip(h.iter()).map(|(&vi, &hi)| vi - c * hi).collect())
    });
    let props = Properties::from_flags(T::ELEMENT_TYPE.is_real(), true);
    Operator::from_raw_actions(n, n, props, product, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex;

    #[test]
    fn reflects_along_h() {
        let s = 0.5f64.sqrt();
        let op = householder(vec![s, s]);
        // h itself flips, its orthogonal complement is fixed
        let flipped = op.apply(&[1.0, 1.0]).unwrap();
        assert_abs_diff_eq!(flipped[0], -1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(flipped[1], -1.0, epsilon = 1e-14);
        assert_eq!(op.apply(&[1.0, -1.0]).unwrap(), vec![1.0, -1.0]);
        assert!(!op.has_transpose_action());
        assert_eq!(op.apply_transpose(&[1.0, 2.0]).unwrap(), op.apply(&[1.0, 2.0]).unwrap());
    }

    #[test]
    fn complex_reflector_is_involution() {
        let h = vec![Complex::new(0.6, 0.0), Complex::new(0.0, 0.8)];
        let op = householder(h);
        assert!(op.is_hermitian() && !op.is_symmetric());
        let v = [Complex::new(1.0, 2.0), Complex::new(-0.5, 0.25)];
        let back = op.apply(&op.apply(&v).unwrap()).unwrap();
        for (b, x) in back.iter().zip(v) {
            assert_abs_diff_eq!(b.re, x.re, epsilon = 1e-14);
            assert_abs_diff_eq!(b.im, x.im, epsilon = 1e-14);
        }
    }
}
