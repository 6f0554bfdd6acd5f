//! Tolerances for the randomized operator checks.
//!
//! The checks compare two inner products that agree exactly in exact
//! arithmetic; `slack` bounds their relative disagreement. The default,
//! `ε^(1/3)`, is deliberately loose: a single random probe is a cheap
//! statistical test, not a proof.

use crate::core::scalar::RealScalar;

/// Options for [`check_adjoint_with`](crate::validation::check_adjoint_with),
/// [`check_hermitian_with`](crate::validation::check_hermitian_with) and
/// [`check_positive_definite_with`](crate::validation::check_positive_definite_with).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOptions<R> {
    /// Relative tolerance of the comparison.
    pub slack: R,

    /// Accept a zero quadratic form in the positive-definiteness check.
    pub semi: bool,
}

impl<R: RealScalar> CheckOptions<R> {
    /// Default slack with the given semidefinite mode.
    pub fn semidefinite(semi: bool) -> Self {
        Self { semi, ..Self::default() }
    }

    pub fn with_slack(mut self, slack: R) -> Self {
        self.slack = slack;
        self
    }
}

impl<R: RealScalar> Default for CheckOptions<R> {
    fn default() -> Self {
        Self { slack: R::epsilon().cbrt(), semi: false }
    }
}
