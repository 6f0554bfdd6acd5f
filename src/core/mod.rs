//! Core scalar kinds, collaborator traits and their faer-backed implementations.

pub mod scalar;
pub mod traits;
pub mod wrappers;

pub use scalar::{random_vector, ElementType, RealScalar, Scalar};
pub use traits::{
    CholeskyFactor, Factorize, InnerProduct, LinearMatrix, LinearSolve, MatShape, MatTransVec,
    MatVec, MatrixGet, Mode,
};
