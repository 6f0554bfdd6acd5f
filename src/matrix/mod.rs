//! Matrix module: dense and sparse matrix collaborators.

pub mod dense;
pub use dense::DenseCholesky;
pub mod sparse;
pub use sparse::CsrMatrix;
