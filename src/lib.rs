//! linop: matrix-free linear operators over Faer
//!
//! This crate provides an algebra of linear operators: objects that behave like
//! matrices but are defined only by their action on vectors (and, optionally,
//! their transpose and adjoint actions). Operators compose, scale, add,
//! transpose and concatenate without ever forming a matrix; missing
//! transpose/adjoint actions are inferred from symmetry flags and
//! conjugation identities.
//!
//! Dense `faer::Mat` and sparse [`CsrMatrix`] values serve as matrix
//! collaborators, `faer`'s LU and Cholesky factorizations back the inverse
//! operators, and randomized checks validate adjoint consistency,
//! Hermitian-ness and positive-definiteness.

pub mod config;
pub mod core;
pub mod error;
pub mod factory;
pub mod matrix;
pub mod operator;
pub mod validation;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;
pub use crate::operator::{add, compose, hcat, hcat_all, subtract, vcat, vcat_all, Action, Operator, Properties};
pub use crate::validation::*;
