//! Configuration for the validation utilities.

pub mod options;
pub use options::CheckOptions;
