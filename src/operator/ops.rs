// std::ops sugar for the infallible parts of the algebra

use super::Operator;
use crate::core::scalar::Scalar;
use num_complex::Complex;
use std::ops::{Add, Mul, Neg, Sub};

impl<T: Scalar> Neg for Operator<T> {
    type Output = Operator<T>;
    fn neg(self) -> Operator<T> {
        self.negate()
    }
}

impl<T: Scalar> Neg for &Operator<T> {
    type Output = Operator<T>;
    fn neg(self) -> Operator<T> {
        self.negate()
    }
}

/// `A * x` scales from the right.
impl<T: Scalar> Mul<T> for Operator<T> {
    type Output = Operator<T>;
    fn mul(self, x: T) -> Operator<T> {
        self.scale_right(x)
    }
}

impl<T: Scalar> Mul<T> for &Operator<T> {
    type Output = Operator<T>;
    fn mul(self, x: T) -> Operator<T> {
        self.scale_right(x)
    }
}

/// `A + x` is the affine all-ones shift, see [`Operator::add_scalar`].
impl<T: Scalar> Add<T> for Operator<T> {
    type Output = Operator<T>;
    fn add(self, x: T) -> Operator<T> {
        self.add_scalar(x)
    }
}

/// `A - x` is the affine all-ones shift, see [`Operator::sub_scalar`].
impl<T: Scalar> Sub<T> for Operator<T> {
    type Output = Operator<T>;
    fn sub(self, x: T) -> Operator<T> {
        self.sub_scalar(x)
    }
}

// `x * A` scales from the left; coherence requires one impl per concrete scalar.
macro_rules! impl_left_scale {
    ($($t:ty),*) => {$(
        impl Mul<Operator<$t>> for $t {
            type Output = Operator<$t>;
            fn mul(self, op: Operator<$t>) -> Operator<$t> {
                op.scale_left(self)
            }
        }

        impl Mul<&Operator<$t>> for $t {
            type Output = Operator<$t>;
            fn mul(self, op: &Operator<$t>) -> Operator<$t> {
                op.scale_left(self)
            }
        }
    )*};
}

impl_left_scale!(f32, f64, Complex<f32>, Complex<f64>);
