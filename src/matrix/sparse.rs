// Compressed sparse row matrix collaborator

use crate::core::scalar::Scalar;
use crate::core::traits::{MatShape, MatTransVec, MatVec, MatrixGet};
use crate::error::OpError;

/// A read-only CSR matrix supporting `A x`, `Aᵗ x` and `Aᴴ x`.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CsrMatrix<T> {
    /// Build a CSR from raw row-ptr, col-idx, and values.
    ///
    /// Column indices within a row need not be sorted; duplicates are summed
    /// by every product.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, OpError> {
        if row_ptr.len() != nrows + 1 {
            return Err(OpError::length("CSR row pointer", nrows + 1, row_ptr.len()));
        }
        if col_idx.len() != values.len() {
            return Err(OpError::length("CSR values", col_idx.len(), values.len()));
        }
        if row_ptr[0] != 0 || row_ptr[nrows] != col_idx.len() || row_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(OpError::ShapeMismatch("CSR row pointer is not a monotone prefix sum".to_string()));
        }
        if let Some(&index) = col_idx.iter().find(|&&c| c >= ncols) {
            return Err(OpError::IndexOutOfBounds { index, len: ncols });
        }
        Ok(Self { nrows, ncols, row_ptr, col_idx, values })
    }

    /// Collect the entries of `(i, j, value)` triplets passing `keep` from a dense accessor.
    pub fn from_fn_filtered<F, K>(nrows: usize, ncols: usize, f: F, keep: K) -> Self
    where
        F: Fn(usize, usize) -> T,
        K: Fn(usize, usize) -> bool,
    {
        let mut row_ptr = vec![0; nrows + 1];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        for i in 0..nrows {
            for j in 0..ncols {
                if keep(i, j) {
                    let v = f(i, j);
                    if v != T::zero() {
                        col_idx.push(j);
                        values.push(v);
                    }
                }
            }
            row_ptr[i + 1] = col_idx.len();
        }
        Self { nrows, ncols, row_ptr, col_idx, values }
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    fn row(&self, i: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let range = self.row_ptr[i]..self.row_ptr[i + 1];
        self.col_idx[range.clone()].iter().copied().zip(self.values[range].iter().copied())
    }
}

impl<T> MatShape for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Scalar> MatrixGet<T> for CsrMatrix<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self.row(i).filter(|&(c, _)| c == j).map(|(_, v)| v).sum()
    }
}

impl<T: Scalar> MatVec<T> for CsrMatrix<T> {
    fn matvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(x.len(), self.ncols);
        assert_eq!(y.len(), self.nrows);
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self.row(i).map(|(j, v)| v * x[j]).sum();
        }
    }
}

impl<T: Scalar> MatTransVec<T> for CsrMatrix<T> {
    fn mattransvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(x.len(), self.nrows);
        assert_eq!(y.len(), self.ncols);
        y.iter_mut().for_each(|yj| *yj = T::zero());
        for (i, &xi) in x.iter().enumerate() {
            for (j, v) in self.row(i) {
                y[j] = y[j] + v * xi;
            }
        }
    }

    fn matadjvec(&self, x: &[T], y: &mut [T]) {
        assert_eq!(x.len(), self.nrows);
        assert_eq!(y.len(), self.ncols);
        y.iter_mut().for_each(|yj| *yj = T::zero());
        for (i, &xi) in x.iter().enumerate() {
            for (j, v) in self.row(i) {
                y[j] = y[j] + v.conj() * xi;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_spmv() {
        // 3×3 identity in CSR: row_ptr=[0,1,2,3], col_idx=[0,1,2], vals=[1,1,1]
        let m = CsrMatrix::from_csr(3, 3, vec![0, 1, 2, 3], vec![0, 1, 2], vec![1.0, 1.0, 1.0]).unwrap();
        let x = vec![2.0, 3.0, 5.0];
        let mut y = vec![0.0; 3];
        m.matvec(&x, &mut y);
        assert_eq!(y, x);
    }

    #[test]
    fn simple_pattern() {
        // 2×3 matrix [[1,2,0],[0,3,4]]
        let m = CsrMatrix::from_csr(2, 3, vec![0, 2, 4], vec![0, 1, 1, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut y = vec![0.0; 2];
        m.matvec(&[1.0, 1.0, 1.0], &mut y);
        assert_eq!(y, vec![3.0, 7.0]);
        let mut z = vec![0.0; 3];
        m.mattransvec(&[1.0, 1.0], &mut z);
        assert_eq!(z, vec![1.0, 5.0, 4.0]);
        assert_eq!(m.get(1, 2), 4.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let err = CsrMatrix::from_csr(1, 2, vec![0, 1], vec![5], vec![1.0]).unwrap_err();
        assert_eq!(err, OpError::IndexOutOfBounds { index: 5, len: 2 });
    }

    #[test]
    fn filtered_build_keeps_strict_lower() {
        let m = CsrMatrix::from_fn_filtered(3, 3, |i, j| (i * 3 + j + 1) as f64, |i, j| i > j);
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.get(2, 0), 7.0);
        assert_eq!(m.get(0, 2), 0.0);
    }
}
