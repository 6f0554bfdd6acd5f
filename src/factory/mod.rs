//! Factory library: canonical operators built on the operator algebra.
//!
//! This module includes the identity, all-ones and zero operators, square and
//! rectangular diagonals, index restriction/extension, the inverse of a matrix
//! through a solve collaborator, a Cholesky-based inverse, Householder
//! reflectors and Hermitian operators assembled from a triangle.

pub mod basic;
pub mod cholesky;
pub mod diagonal;
pub mod hermitian;
pub mod householder;
pub mod inverse;
pub mod restriction;

// Re-exports for convenience
pub use basic::{identity, ones, zeros};
pub use cholesky::{cholesky, cholesky_with_rng};
pub use diagonal::{diagonal, diagonal_rect};
pub use hermitian::hermitian;
pub use householder::householder;
pub use inverse::{inverse, inverse_with};
pub use restriction::{extension, restriction};
