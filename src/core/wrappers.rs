//! Wrappers for faer dense matrix types and vector operations.
//!
//! This module implements the matrix collaborator traits for `faer::Mat` and the
//! inner product over slices, so a plain dense matrix can be lifted into an
//! [`Operator`](crate::operator::Operator) and validation checks can reduce
//! vectors of any [`Scalar`] kind.
//!
//! # Features
//! - Matrix-vector, transpose-vector and adjoint-vector products for `faer::Mat`.
//! - Conjugate-linear inner product and Euclidean norm, with optional Rayon parallelism.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-complex crate documentation](https://docs.rs/num-complex)

use crate::core::scalar::Scalar;
use crate::core::traits::{InnerProduct, MatShape, MatTransVec, MatVec, MatrixGet};
use faer::Mat;

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T: Scalar> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Scalar> MatVec<T> for Mat<T> {
    fn matvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            y[i] = T::zero();
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}

/// Implements transposed and conjugate-transposed multiplication for `faer::Mat`.
impl<T: Scalar> MatTransVec<T> for Mat<T> {
    fn mattransvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(self.ncols(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.nrows(), x.len(), "Input vector x has incorrect length");
        for j in 0..self.ncols() {
            y[j] = T::zero();
            for i in 0..self.nrows() {
                y[j] = y[j] + self[(i, j)] * x[i];
            }
        }
    }

    fn matadjvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(self.ncols(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.nrows(), x.len(), "Input vector x has incorrect length");
        for j in 0..self.ncols() {
            y[j] = T::zero();
            for i in 0..self.nrows() {
                y[j] = y[j] + self[(i, j)].conj() * x[i];
            }
        }
    }
}

/// Implements inner product and norm for slices, with optional Rayon parallelism.
///
/// If the `rayon` feature is enabled, uses parallel iterators for the reductions.
impl<T: Scalar> InnerProduct<T> for () {
    /// Computes the inner product `x^H y`.
    fn dot(&self, x: &[T], y: &[T]) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            x.par_iter()
                .zip(y.par_iter())
                .map(|(xi, yi)| xi.conj() * *yi)
                .reduce(T::zero, |acc, v| acc + v)
        }
        #[cfg(not(feature = "rayon"))]
        {
            x.iter()
                .zip(y.iter())
                .map(|(xi, yi)| xi.conj() * *yi)
                .fold(T::zero(), |acc, v| acc + v)
        }
    }

    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &[T]) -> T::Real {
        let sq = |xi: &T| xi.re() * xi.re() + xi.im() * xi.im();
        #[cfg(feature = "rayon")]
        {
            use num_traits::{Float, Zero};
            use rayon::prelude::*;
            Float::sqrt(x.par_iter().map(sq).reduce(T::Real::zero, |acc, v| acc + v))
        }
        #[cfg(not(feature = "rayon"))]
        {
            use num_traits::{Float, Zero};
            Float::sqrt(x.iter().map(sq).fold(T::Real::zero(), |acc, v| acc + v))
        }
    }
}
