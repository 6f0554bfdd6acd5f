//! Randomized self-consistency checks.
//!
//! Each check draws random probe vectors from the caller's `rng` and compares
//! two inner products that coincide in exact arithmetic. A `false` result is
//! conclusive; a `true` result only says the probe found no counterexample.
//!
//! The checks accept anything convertible into an [`Operator`], so a raw
//! `faer::Mat` or [`CsrMatrix`](crate::matrix::CsrMatrix) can be passed
//! directly.

use crate::config::CheckOptions;
use crate::core::scalar::{random_vector, Scalar};
use crate::core::traits::InnerProduct;
use crate::error::OpError;
use crate::operator::Operator;
use num_traits::Float;
use rand::Rng;

/// `|a - b| < (|a| + ε) · slack`
fn close<T: Scalar>(a: T, b: T, slack: T::Real) -> bool {
    let eps = <T::Real as Float>::epsilon();
    (a - b).modulus() < (a.modulus() + eps) * slack
}

fn require_square<T: Scalar>(op: &Operator<T>, check: &str) -> Result<(), OpError> {
    if op.is_square() {
        Ok(())
    } else {
        Err(OpError::ShapeMismatch(format!(
            "{check} check requires a square operator, got {}x{}",
            op.nrows(),
            op.ncols()
        )))
    }
}

/// Does `⟨y, Ax⟩ = conj⟨x, Aᴴy⟩` hold for random `x`, `y`?
pub fn check_adjoint<T, A, R>(a: A, rng: &mut R) -> Result<bool, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    R: Rng + ?Sized,
{
    check_adjoint_with(a, rng, &CheckOptions::default())
}

pub fn check_adjoint_with<T, A, R>(
    a: A,
    rng: &mut R,
    opts: &CheckOptions<T::Real>,
) -> Result<bool, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    R: Rng + ?Sized,
{
    let op = a.into();
    let x: Vec<T> = random_vector(rng, op.ncols());
    let y: Vec<T> = random_vector(rng, op.nrows());
    let yax = ().dot(&y, &op.apply(&x)?);
    let xay = ().dot(&x, &op.apply_adjoint(&y)?);
    Ok(close(yax, xay.conj(), opts.slack))
}

/// Does `⟨Av, Av⟩ = ⟨v, A(Av)⟩` hold for a random `v`?
///
/// Fails with `ShapeMismatch` for a non-square operator.
pub fn check_hermitian<T, A, R>(a: A, rng: &mut R) -> Result<bool, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    R: Rng + ?Sized,
{
    check_hermitian_with(a, rng, &CheckOptions::default())
}

pub fn check_hermitian_with<T, A, R>(
    a: A,
    rng: &mut R,
    opts: &CheckOptions<T::Real>,
) -> Result<bool, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    R: Rng + ?Sized,
{
    let op = a.into();
    require_square(&op, "Hermitian")?;
    let v: Vec<T> = random_vector(rng, op.ncols());
    let w = op.apply(&v)?;
    let s = ().dot(&w, &w);
    let t = ().dot(&v, &op.apply(&w)?);
    Ok(close(s, t, opts.slack))
}

/// Is `⟨v, Av⟩` real and positive for a random `v`?
///
/// The imaginary part may not exceed `√ε · |⟨v, Av⟩|`. In semidefinite mode
/// (`opts.semi`) a zero real part is accepted.
pub fn check_positive_definite<T, A, R>(a: A, rng: &mut R) -> Result<bool, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    R: Rng + ?Sized,
{
    check_positive_definite_with(a, rng, &CheckOptions::default())
}

pub fn check_positive_definite_with<T, A, R>(
    a: A,
    rng: &mut R,
    opts: &CheckOptions<T::Real>,
) -> Result<bool, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    R: Rng + ?Sized,
{
    let op = a.into();
    require_square(&op, "positive-definiteness")?;
    let v: Vec<T> = random_vector(rng, op.ncols());
    let vw = ().dot(&v, &op.apply(&v)?);
    let eps = <T::Real as Float>::epsilon();
    if vw.im().abs() > eps.sqrt() * vw.modulus() {
        return Ok(false);
    }
    let zero = <T::Real as num_traits::Zero>::zero();
    Ok(if opts.semi { vw.re() >= zero } else { vw.re() > zero })
}

/// Positive-definiteness check with the default slack in semidefinite mode.
pub fn check_positive_semidefinite<T, A, R>(a: A, rng: &mut R) -> Result<bool, OpError>
where
    T: Scalar,
    A: Into<Operator<T>>,
    R: Rng + ?Sized,
{
    check_positive_definite_with(a, rng, &CheckOptions::semidefinite(true))
}
