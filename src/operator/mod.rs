//! The linear operator descriptor.
//!
//! An [`Operator`] behaves like an `nrow × ncol` matrix but is defined only by
//! its action on vectors. Internally it is an immutable expression tree
//! evaluated by recursive descent on every application; cloning an
//! operator shares the tree, it never copies collaborators.
//!
//! Missing transpose/adjoint actions are inferred on demand:
//! - a symmetric operator uses its product as its transpose,
//! - a Hermitian operator uses its product as its adjoint,
//! - otherwise `Aᵗv = conj(Aᴴ conj(v))` and `Aᴴv = conj(Aᵗ conj(v))`.
//!
//! When none of these apply, the action fails with [`OpError::InferenceError`].

use crate::core::scalar::{conj_vec, ElementType, Scalar};
use crate::core::traits::Mode;
use crate::error::OpError;
use bitflags::bitflags;
use faer::Mat;
use std::fmt;
use std::sync::Arc;

pub mod algebra;
pub mod complexify;
pub mod concat;
pub mod construct;
pub(crate) mod node;
pub mod ops;

pub use algebra::{add, compose, subtract};
pub use concat::{hcat, hcat_all, vcat, vcat_all};

use node::Node;

bitflags! {
    /// Structural properties carried by an operator.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Properties: u8 {
        /// `A = Aᵗ`
        const SYMMETRIC = 0b01;
        /// `A = Aᴴ`
        const HERMITIAN = 0b10;
    }
}

impl Properties {
    pub(crate) fn from_flags(symmetric: bool, hermitian: bool) -> Self {
        let mut props = Properties::empty();
        props.set(Properties::SYMMETRIC, symmetric);
        props.set(Properties::HERMITIAN, hermitian);
        props
    }
}

/// A vector-to-vector action. Fallible so delegated collaborator errors propagate.
pub type Action<T> = Arc<dyn Fn(&[T]) -> Result<Vec<T>, OpError> + Send + Sync>;

/// A matrix-free linear operator over scalars of type `T`.
#[derive(Clone)]
pub struct Operator<T: Scalar> {
    nrow: usize,
    ncol: usize,
    props: Properties,
    /// Transpose and adjoint are derivable. The inference rules are symmetric
    /// in the two modes, so one bit covers both.
    dualizable: bool,
    node: Arc<Node<T>>,
}

impl<T: Scalar> Operator<T> {
    /// Children's capabilities are already settled, so this is O(1) per node.
    pub(crate) fn from_node(nrow: usize, ncol: usize, props: Properties, node: Node<T>) -> Self {
        let dualizable = !props.is_empty()
            || node.provides(Mode::Transpose)
            || node.provides(Mode::Adjoint);
        Self { nrow, ncol, props, dualizable, node: Arc::new(node) }
    }

    /// `(nrow, ncol)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrow, self.ncol)
    }

    /// Output dimension.
    pub fn nrows(&self) -> usize {
        self.nrow
    }

    /// Input dimension.
    pub fn ncols(&self) -> usize {
        self.ncol
    }

    /// Size along dimension `d` (1 = rows, 2 = columns).
    pub fn dimension(&self, d: usize) -> Result<usize, OpError> {
        match d {
            1 => Ok(self.nrow),
            2 => Ok(self.ncol),
            _ => Err(OpError::InvalidDimension(d)),
        }
    }

    pub fn is_square(&self) -> bool {
        self.nrow == self.ncol
    }

    pub fn is_symmetric(&self) -> bool {
        self.props.contains(Properties::SYMMETRIC)
    }

    pub fn is_hermitian(&self) -> bool {
        self.props.contains(Properties::HERMITIAN)
    }

    pub fn properties(&self) -> Properties {
        self.props
    }

    pub fn element_type(&self) -> ElementType {
        T::ELEMENT_TYPE
    }

    /// True when the transpose action is stored rather than inferred.
    pub fn has_transpose_action(&self) -> bool {
        self.node.provides(Mode::Transpose)
    }

    /// True when the adjoint action is stored rather than inferred.
    pub fn has_adjoint_action(&self) -> bool {
        self.node.provides(Mode::Adjoint)
    }

    fn flag(&self, mode: Mode) -> bool {
        match mode {
            Mode::Normal => true,
            Mode::Transpose => self.is_symmetric(),
            Mode::Adjoint => self.is_hermitian(),
        }
    }

    /// Whether `mode` can be evaluated, directly or by inference.
    pub fn supports(&self, mode: Mode) -> bool {
        mode == Mode::Normal || self.dualizable
    }

    /// `y = A v`. Fails with `ShapeMismatch` unless `v.len() == ncols()`.
    pub fn apply(&self, v: &[T]) -> Result<Vec<T>, OpError> {
        self.act(Mode::Normal, v)
    }

    /// `y = Aᵗ v`, inferring the action if it is not stored.
    pub fn apply_transpose(&self, v: &[T]) -> Result<Vec<T>, OpError> {
        self.act(Mode::Transpose, v)
    }

    /// `y = Aᴴ v`, inferring the action if it is not stored.
    pub fn apply_adjoint(&self, v: &[T]) -> Result<Vec<T>, OpError> {
        self.act(Mode::Adjoint, v)
    }

    /// Evaluate one action with input/output length checks and inference.
    pub(crate) fn act(&self, mode: Mode, v: &[T]) -> Result<Vec<T>, OpError> {
        let (n_in, n_out) = match mode {
            Mode::Normal => (self.ncol, self.nrow),
            Mode::Transpose | Mode::Adjoint => (self.nrow, self.ncol),
        };
        if v.len() != n_in {
            return Err(OpError::length(mode_name(mode), n_in, v.len()));
        }
        let out = self.resolve(mode, v)?;
        if out.len() != n_out {
            return Err(OpError::length(
                &format!("{} output of {}", mode_name(mode), self.node.kind()),
                n_out,
                out.len(),
            ));
        }
        Ok(out)
    }

    fn resolve(&self, mode: Mode, v: &[T]) -> Result<Vec<T>, OpError> {
        if self.node.provides(mode) {
            return self.node.eval(mode, v);
        }
        let dual = mode.dual();
        if self.flag(mode) {
            self.node.eval(Mode::Normal, v)
        } else if self.node.provides(dual) {
            Ok(conj_vec(&self.node.eval(dual, &conj_vec(v))?))
        } else if self.flag(dual) {
            Ok(conj_vec(&self.node.eval(Mode::Normal, &conj_vec(v))?))
        } else {
            Err(OpError::InferenceError(format!(
                "{} action of a {}x{} {} operator is not stored and cannot be derived",
                mode_name(mode),
                self.nrow,
                self.ncol,
                self.node.kind()
            )))
        }
    }

    /// Dense matrix with the same action, built column by column from `A eⱼ`.
    pub fn materialize(&self) -> Result<Mat<T>, OpError> {
        let mut e = vec![T::zero(); self.ncol];
        let mut cols = Vec::with_capacity(self.ncol);
        for j in 0..self.ncol {
            e[j] = T::one();
            cols.push(self.apply(&e)?);
            e[j] = T::zero();
        }
        Ok(Mat::from_fn(self.nrow, self.ncol, |i, j| cols[j][i]))
    }
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => "product",
        Mode::Transpose => "transpose",
        Mode::Adjoint => "adjoint",
    }
}

impl<T: Scalar> fmt::Display for Operator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear operator")?;
        writeln!(f, "  nrow: {}", self.nrow)?;
        writeln!(f, "  ncol: {}", self.ncol)?;
        writeln!(f, "  eltype: {}", T::ELEMENT_TYPE)?;
        writeln!(f, "  symmetric: {}", self.is_symmetric())?;
        write!(f, "  hermitian: {}", self.is_hermitian())
    }
}

impl<T: Scalar> fmt::Debug for Operator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("nrow", &self.nrow)
            .field("ncol", &self.ncol)
            .field("eltype", &T::ELEMENT_TYPE)
            .field("props", &self.props)
            .field("node", &self.node.kind())
            .finish()
    }
}
