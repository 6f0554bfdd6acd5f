// Expression tree behind every operator, evaluated by recursive descent.

use super::{Action, Operator};
use crate::core::scalar::{conj_vec, Scalar};
use crate::core::traits::{LinearMatrix, Mode};
use crate::error::OpError;
use std::sync::Arc;

/// Which side a scalar multiplies from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScaleSide {
    /// `x · A`
    Left,
    /// `A · x`
    Right,
}

pub(crate) enum Node<T: Scalar> {
    /// Leaf wrapping a matrix collaborator.
    Matrix(Arc<dyn LinearMatrix<T>>),
    /// Leaf defined by user actions; absent slots are inferred or fail.
    Custom {
        product: Action<T>,
        transpose: Option<Action<T>>,
        adjoint: Option<Action<T>>,
    },
    Negate(Operator<T>),
    Conjugate(Operator<T>),
    Transpose(Operator<T>),
    Adjoint(Operator<T>),
    Scale {
        op: Operator<T>,
        scalar: T,
        side: ScaleSide,
    },
    Compose(Operator<T>, Operator<T>),
    Sum(Operator<T>, Operator<T>),
    HConcat(Operator<T>, Operator<T>),
    VConcat(Operator<T>, Operator<T>),
}

impl<T: Scalar> Node<T> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::Matrix(_) => "matrix",
            Node::Custom { .. } => "custom",
            Node::Negate(_) => "negated",
            Node::Conjugate(_) => "conjugated",
            Node::Transpose(_) => "transposed",
            Node::Adjoint(_) => "adjoint",
            Node::Scale { .. } => "scaled",
            Node::Compose(..) => "composed",
            Node::Sum(..) => "sum",
            Node::HConcat(..) => "hcat",
            Node::VConcat(..) => "vcat",
        }
    }

    /// Whether this node stores the action for `mode` (no flag-based inference).
    pub(crate) fn provides(&self, mode: Mode) -> bool {
        if mode == Mode::Normal {
            return true;
        }
        match self {
            Node::Matrix(_) | Node::Transpose(_) | Node::Adjoint(_) => true,
            Node::Custom { transpose, adjoint, .. } => match mode {
                Mode::Transpose => transpose.is_some(),
                _ => adjoint.is_some(),
            },
            Node::Negate(a) | Node::Scale { op: a, .. } => a.supports(mode),
            // conj(A)ᵗ = Aᴴ, conj(A)ᴴ = Aᵗ
            Node::Conjugate(a) => a.supports(mode.dual()),
            Node::Compose(a, b) | Node::Sum(a, b) | Node::HConcat(a, b) | Node::VConcat(a, b) => {
                a.supports(mode) && b.supports(mode)
            }
        }
    }

    pub(crate) fn eval(&self, mode: Mode, v: &[T]) -> Result<Vec<T>, OpError> {
        match self {
            Node::Matrix(m) => {
                let n_out = if mode == Mode::Normal { m.nrows() } else { m.ncols() };
                let mut y = vec![T::zero(); n_out];
                match mode {
                    Mode::Normal => m.matvec(v, &mut y),
                    Mode::Transpose => m.mattransvec(v, &mut y),
                    Mode::Adjoint => m.matadjvec(v, &mut y),
                }
                Ok(y)
            }
            Node::Custom { product, transpose, adjoint } => {
                let action = match mode {
                    Mode::Normal => Some(product),
                    Mode::Transpose => transpose.as_ref(),
                    Mode::Adjoint => adjoint.as_ref(),
                };
                match action {
                    Some(f) => f(v),
                    None => Err(OpError::InferenceError("custom operator has no stored action".to_string())),
                }
            }
            Node::Negate(a) => Ok(a.act(mode, v)?.into_iter().map(|y| -y).collect()),
            Node::Conjugate(a) => match mode {
                Mode::Normal => Ok(conj_vec(&a.act(Mode::Normal, &conj_vec(v))?)),
                m => a.act(m.dual(), v),
            },
            Node::Transpose(a) => match mode {
                Mode::Normal => a.act(Mode::Transpose, v),
                Mode::Transpose => a.act(Mode::Normal, v),
                // (Aᵗ)ᴴ = conj(A)
                Mode::Adjoint => Ok(conj_vec(&a.act(Mode::Normal, &conj_vec(v))?)),
            },
            Node::Adjoint(a) => match mode {
                Mode::Normal => a.act(Mode::Adjoint, v),
                // (Aᴴ)ᵗ = conj(A)
                Mode::Transpose => Ok(conj_vec(&a.act(Mode::Normal, &conj_vec(v))?)),
                Mode::Adjoint => a.act(Mode::Normal, v),
            },
            Node::Scale { op, scalar, side } => {
                let x = if mode == Mode::Adjoint { scalar.conj() } else { *scalar };
                let y = op.act(mode, v)?;
                Ok(match side {
                    ScaleSide::Left => y.into_iter().map(|yi| x * yi).collect(),
                    ScaleSide::Right => y.into_iter().map(|yi| yi * x).collect(),
                })
            }
            Node::Compose(a, b) => match mode {
                Mode::Normal => a.act(Mode::Normal, &b.act(Mode::Normal, v)?),
                // (AB)ᵗ = BᵗAᵗ, (AB)ᴴ = BᴴAᴴ
                m => b.act(m, &a.act(m, v)?),
            },
            Node::Sum(a, b) => Ok(add_vecs(a.act(mode, v)?, b.act(mode, v)?)),
            Node::HConcat(a, b) => match mode {
                Mode::Normal => {
                    let (head, tail) = v.split_at(a.ncols());
                    Ok(add_vecs(a.act(Mode::Normal, head)?, b.act(Mode::Normal, tail)?))
                }
                m => Ok(concat_vecs(a.act(m, v)?, b.act(m, v)?)),
            },
            Node::VConcat(a, b) => match mode {
                Mode::Normal => Ok(concat_vecs(a.act(Mode::Normal, v)?, b.act(Mode::Normal, v)?)),
                m => {
                    let (head, tail) = v.split_at(a.nrows());
                    Ok(add_vecs(a.act(m, head)?, b.act(m, tail)?))
                }
            },
        }
    }
}

fn add_vecs<T: Scalar>(mut x: Vec<T>, y: Vec<T>) -> Vec<T> {
    for (xi, yi) in x.iter_mut().zip(y) {
        *xi = *xi + yi;
    }
    x
}

fn concat_vecs<T: Scalar>(mut x: Vec<T>, y: Vec<T>) -> Vec<T> {
    x.extend(y);
    x
}
