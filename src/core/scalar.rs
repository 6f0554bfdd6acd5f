//! Scalar kinds an operator can act on.
//!
//! Operators are generic over a [`Scalar`], so both operands of every binary
//! combinator share one element type and promotion is settled at compile time.
//! [`ElementType`] is the closed runtime tag describing that type.

use num_complex::Complex;
use num_traits::{Float, One, Zero};
use rand::Rng;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Closed tag for the supported element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    F32,
    F64,
    C32,
    C64,
}

impl ElementType {
    /// True for `F32` and `F64`.
    pub fn is_real(self) -> bool {
        matches!(self, ElementType::F32 | ElementType::F64)
    }

    /// True for the double-precision kinds.
    pub fn is_double(self) -> bool {
        matches!(self, ElementType::F64 | ElementType::C64)
    }

    /// Smallest element type that can represent values of both `self` and `other`.
    pub fn promote(self, other: ElementType) -> ElementType {
        let complex = !self.is_real() || !other.is_real();
        let double = self.is_double() || other.is_double();
        match (complex, double) {
            (false, false) => ElementType::F32,
            (false, true) => ElementType::F64,
            (true, false) => ElementType::C32,
            (true, true) => ElementType::C64,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
            ElementType::C32 => "Complex<f32>",
            ElementType::C64 => "Complex<f64>",
        };
        f.write_str(name)
    }
}

/// Element type of an operator's vectors.
pub trait Scalar:
    Copy
    + fmt::Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sum
{
    /// Underlying real type (`Self` for real scalars).
    type Real: RealScalar;

    const ELEMENT_TYPE: ElementType;

    fn conj(self) -> Self;
    fn re(self) -> Self::Real;
    fn im(self) -> Self::Real;
    fn from_real(re: Self::Real) -> Self;
    /// Absolute value (complex modulus).
    fn modulus(self) -> Self::Real;
    /// Draw a value with every real component uniform in `[-1, 1)`.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;

    fn is_real_valued(self) -> bool {
        self.im() == <Self::Real as Zero>::zero()
    }
}

/// A real [`Scalar`], usable wherever `num_traits::Float` is.
pub trait RealScalar: Scalar<Real = Self> + Float {}

macro_rules! impl_real_scalar {
    ($t:ty, $kind:expr) => {
        impl Scalar for $t {
            type Real = $t;
            const ELEMENT_TYPE: ElementType = $kind;

            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn re(self) -> $t {
                self
            }
            #[inline]
            fn im(self) -> $t {
                0.0
            }
            #[inline]
            fn from_real(re: $t) -> Self {
                re
            }
            #[inline]
            fn modulus(self) -> $t {
                self.abs()
            }
            fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.gen_range(-1.0..1.0)
            }
        }

        impl RealScalar for $t {}
    };
}

macro_rules! impl_complex_scalar {
    ($t:ty, $kind:expr) => {
        impl Scalar for Complex<$t> {
            type Real = $t;
            const ELEMENT_TYPE: ElementType = $kind;

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }
            #[inline]
            fn re(self) -> $t {
                self.re
            }
            #[inline]
            fn im(self) -> $t {
                self.im
            }
            #[inline]
            fn from_real(re: $t) -> Self {
                Complex::new(re, 0.0)
            }
            #[inline]
            fn modulus(self) -> $t {
                self.norm()
            }
            fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
            }
        }
    };
}

impl_real_scalar!(f32, ElementType::F32);
impl_real_scalar!(f64, ElementType::F64);
impl_complex_scalar!(f32, ElementType::C32);
impl_complex_scalar!(f64, ElementType::C64);

/// Elementwise conjugate of a vector.
pub(crate) fn conj_vec<T: Scalar>(v: &[T]) -> Vec<T> {
    v.iter().map(|x| x.conj()).collect()
}

/// Draws a vector of length `n` from `rng`.
pub fn random_vector<T: Scalar, R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<T> {
    (0..n).map(|_| T::sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_prefers_complex_and_double() {
        assert_eq!(ElementType::F32.promote(ElementType::F64), ElementType::F64);
        assert_eq!(ElementType::F32.promote(ElementType::C32), ElementType::C32);
        assert_eq!(ElementType::F64.promote(ElementType::C32), ElementType::C64);
        assert_eq!(ElementType::C64.promote(ElementType::F32), ElementType::C64);
        assert_eq!(ElementType::F32.promote(ElementType::F32), ElementType::F32);
    }

    #[test]
    fn complex_conjugation_and_parts() {
        let z = Complex::new(1.5f64, -2.0);
        assert_eq!(Scalar::conj(z), Complex::new(1.5, 2.0));
        assert_eq!(Scalar::re(z), 1.5);
        assert_eq!(Scalar::im(z), -2.0);
        assert!(!z.is_real_valued());
        assert!(Complex::new(3.0f64, 0.0).is_real_valued());
        assert_eq!(Scalar::modulus(Complex::new(3.0f64, 4.0)), 5.0);
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = rand::thread_rng();
        let v: Vec<f64> = random_vector(&mut rng, 64);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|x| (-1.0..1.0).contains(x)));
    }
}
