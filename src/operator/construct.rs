//! Constructors: operators from matrix collaborators and from action functions.
//!
//! | Constructor | Stored actions | Flags |
//! |---|---|---|
//! | [`Operator::from_matrix`] | product, transpose, adjoint | none |
//! | [`Operator::from_fn`] | product | symmetric & Hermitian when requested |
//! | [`Operator::from_fns`] | product, transpose, adjoint | caller-supplied |
//! | [`Operator::from_fn_shaped`] | product | caller-supplied |

use super::node::Node;
use super::{Action, Operator, Properties};
use crate::core::scalar::Scalar;
use crate::core::traits::LinearMatrix;
use crate::error::OpError;
use crate::matrix::CsrMatrix;
use faer::Mat;
use std::sync::Arc;

fn lift<T, F>(f: F) -> Action<T>
where
    T: Scalar,
    F: Fn(&[T]) -> Vec<T> + Send + Sync + 'static,
{
    Arc::new(move |v: &[T]| Ok(f(v)))
}

fn check_flags(nrow: usize, ncol: usize, props: Properties) -> Result<(), OpError> {
    if !props.is_empty() && nrow != ncol {
        return Err(OpError::ConstructionError(format!(
            "a {nrow}x{ncol} operator cannot be symmetric or Hermitian"
        )));
    }
    Ok(())
}

impl<T: Scalar> Operator<T> {
    /// Wrap a matrix collaborator; all three actions delegate to its products.
    pub fn from_matrix<M: LinearMatrix<T> + 'static>(m: M) -> Self {
        Self::from_shared_matrix(Arc::new(m))
    }

    /// Like [`from_matrix`](Self::from_matrix), sharing an existing collaborator.
    pub fn from_shared_matrix(m: Arc<dyn LinearMatrix<T>>) -> Self {
        let (nrow, ncol) = (m.nrows(), m.ncols());
        Self::from_node(nrow, ncol, Properties::empty(), Node::Matrix(m))
    }

    /// Wrap a matrix known to be symmetric and/or Hermitian.
    pub fn from_matrix_with<M: LinearMatrix<T> + 'static>(
        m: M,
        symmetric: bool,
        hermitian: bool,
    ) -> Result<Self, OpError> {
        let props = Properties::from_flags(symmetric, hermitian);
        check_flags(m.nrows(), m.ncols(), props)?;
        let (nrow, ncol) = (m.nrows(), m.ncols());
        Ok(Self::from_node(nrow, ncol, props, Node::Matrix(Arc::new(m))))
    }

    /// Square `n × n` operator from its product alone.
    ///
    /// With `symmetric` set the operator is both symmetric and Hermitian, so its
    /// transpose and adjoint are the product itself. Without it, neither action
    /// can be derived.
    pub fn from_fn<F>(n: usize, symmetric: bool, product: F) -> Self
    where
        F: Fn(&[T]) -> Vec<T> + Send + Sync + 'static,
    {
        let node = Node::Custom { product: lift(product), transpose: None, adjoint: None };
        Self::from_node(n, n, Properties::from_flags(symmetric, symmetric), node)
    }

    /// Operator with all three actions supplied explicitly.
    pub fn from_fns<P, Tr, Ad>(
        nrow: usize,
        ncol: usize,
        symmetric: bool,
        hermitian: bool,
        product: P,
        transpose: Tr,
        adjoint: Ad,
    ) -> Result<Self, OpError>
    where
        P: Fn(&[T]) -> Vec<T> + Send + Sync + 'static,
        Tr: Fn(&[T]) -> Vec<T> + Send + Sync + 'static,
        Ad: Fn(&[T]) -> Vec<T> + Send + Sync + 'static,
    {
        let node = Node::Custom {
            product: lift(product),
            transpose: Some(lift(transpose)),
            adjoint: Some(lift(adjoint)),
        };
        Self::from_actions(nrow, ncol, Properties::from_flags(symmetric, hermitian), node)
    }

    /// Operator with explicit shape and flags whose transpose and adjoint are
    /// left to inference (or fail on demand).
    pub fn from_fn_shaped<F>(
        nrow: usize,
        ncol: usize,
        symmetric: bool,
        hermitian: bool,
        product: F,
    ) -> Result<Self, OpError>
    where
        F: Fn(&[T]) -> Vec<T> + Send + Sync + 'static,
    {
        let node = Node::Custom { product: lift(product), transpose: None, adjoint: None };
        Self::from_actions(nrow, ncol, Properties::from_flags(symmetric, hermitian), node)
    }

    fn from_actions(nrow: usize, ncol: usize, props: Properties, node: Node<T>) -> Result<Self, OpError> {
        check_flags(nrow, ncol, props)?;
        Ok(Self::from_node(nrow, ncol, props, node))
    }

    /// Custom leaf from fallible actions; used by factories wrapping collaborators.
    pub(crate) fn from_raw_actions(
        nrow: usize,
        ncol: usize,
        props: Properties,
        product: Action<T>,
        transpose: Option<Action<T>>,
        adjoint: Option<Action<T>>,
    ) -> Self {
        Self::from_node(nrow, ncol, props, Node::Custom { product, transpose, adjoint })
    }
}

impl<T: Scalar> From<Mat<T>> for Operator<T> {
    fn from(m: Mat<T>) -> Self {
        Operator::from_matrix(m)
    }
}

impl<T: Scalar> From<CsrMatrix<T>> for Operator<T> {
    fn from(m: CsrMatrix<T>) -> Self {
        Operator::from_matrix(m)
    }
}

impl<T: Scalar> From<&Operator<T>> for Operator<T> {
    fn from(op: &Operator<T>) -> Self {
        op.clone()
    }
}
