//! Tests for the factory library against dense reference computations.
//!
//! The inverse and Cholesky operators are compared with the matrices they
//! invert; the structured operators (diagonal, Householder, Hermitian from a
//! triangle, restriction) are materialized and compared entrywise.

use approx::assert_abs_diff_eq;
use faer::Mat;
use linop::core::traits::MatVec;
use linop::factory;
use linop::{CsrMatrix, OpError, Operator};
use num_complex::Complex;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Helper function to generate a random symmetric positive definite (SPD) matrix.
///
/// The SPD matrix is constructed as `A = Mᵗ M + n I`, where `M` is a random matrix.
fn random_spd(rng: &mut StdRng, n: usize) -> Mat<f64> {
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let m = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    Mat::from_fn(n, n, |i, j| {
        let mtm: f64 = (0..n).map(|k| m[(k, i)] * m[(k, j)]).sum();
        if i == j { mtm + n as f64 } else { mtm }
    })
}

fn random_vec(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Test that the identity returns its input in every mode.
#[test]
fn identity_is_identity_map() {
    let mut rng = StdRng::seed_from_u64(1);
    let v = random_vec(&mut rng, 6);
    let id = factory::identity::<f64>(6);
    assert_eq!(id.apply(&v).unwrap(), v);
    assert_eq!(id.apply_transpose(&v).unwrap(), v);
    assert_eq!(id.apply_adjoint(&v).unwrap(), v);
}

/// Test that a diagonal operator scales elementwise.
#[test]
fn diagonal_is_elementwise_product() {
    let mut rng = StdRng::seed_from_u64(2);
    let d = random_vec(&mut rng, 5);
    let v = random_vec(&mut rng, 5);
    let op = factory::diagonal(d.clone());
    let expected: Vec<f64> = d.iter().zip(&v).map(|(a, b)| a * b).collect();
    assert_eq!(op.apply(&v).unwrap(), expected);
}

/// Test that rectangular diagonals materialize to the padded diagonal matrix.
#[test]
fn rectangular_diagonal_materializes() {
    let tall = factory::diagonal_rect(3, 2, vec![1.0, 2.0]).unwrap().materialize().unwrap();
    let wide = factory::diagonal_rect(2, 3, vec![1.0, 2.0]).unwrap().materialize().unwrap();
    for i in 0..3 {
        for j in 0..2 {
            let e = if i == j { (i + 1) as f64 } else { 0.0 };
            assert_eq!(tall[(i, j)], e);
            assert_eq!(wide[(j, i)], e);
        }
    }
}

/// Test that the Cholesky operator approximates `M⁻¹ v` for a random SPD matrix.
#[test]
fn cholesky_operator_approximates_inverse() {
    let mut rng = StdRng::seed_from_u64(3);
    let n = 8;
    let a = random_spd(&mut rng, n);
    let op = factory::cholesky_with_rng(a.clone(), true, &mut rng).unwrap();
    let b = random_vec(&mut rng, n);
    let x = op.apply(&b).unwrap();
    // Compare against a direct LU solve through the inverse operator
    let x_lu = factory::inverse(a.clone()).apply(&b).unwrap();
    for i in 0..n {
        assert_abs_diff_eq!(x[i], x_lu[i], epsilon = 1e-10);
    }
    let mut ax = vec![0.0; n];
    a.matvec(&x, &mut ax);
    for i in 0..n {
        assert_abs_diff_eq!(ax[i], b[i], epsilon = 1e-10);
    }
}

/// Test that a non-Hermitian matrix fails the construction checks.
#[test]
fn cholesky_rejects_non_hermitian_input() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = Mat::from_fn(3, 3, |i, j| if j == i + 1 { 4.0 } else if i == j { 2.0 } else { 0.0 });
    assert!(matches!(
        factory::cholesky_with_rng(a, true, &mut rng),
        Err(OpError::ConstructionError(_))
    ));
}

/// Test that composing `M` with its inverse gives the identity map.
#[test]
fn inverse_composed_with_matrix_is_identity() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_spd(&mut rng, 5);
    let prod = Operator::from(a.clone()).compose(factory::inverse(a)).unwrap();
    let v = random_vec(&mut rng, 5);
    let y = prod.apply(&v).unwrap();
    for i in 0..5 {
        assert_abs_diff_eq!(y[i], v[i], epsilon = 1e-10);
    }
    let u = prod.apply_adjoint(&v).unwrap();
    for i in 0..5 {
        assert_abs_diff_eq!(u[i], v[i], epsilon = 1e-10);
    }
}

/// Test that a Householder reflector materializes to `I - 2 h hᴴ`.
#[test]
fn householder_materializes_to_reflector() {
    let h = vec![Complex::new(0.0, 0.6), Complex::new(0.8, 0.0)];
    let m = factory::householder(h.clone()).materialize().unwrap();
    for i in 0..2 {
        for j in 0..2 {
            let id = if i == j { 1.0 } else { 0.0 };
            let expected = Complex::new(id, 0.0) - h[i] * h[j].conj() * 2.0;
            assert_abs_diff_eq!(m[(i, j)].re, expected.re, epsilon = 1e-14);
            assert_abs_diff_eq!(m[(i, j)].im, expected.im, epsilon = 1e-14);
        }
    }
}

/// Test that the Hermitian-from-triangle operator works with a sparse source.
#[test]
fn hermitian_from_sparse_triangle() {
    // strict lower entries (1,0) = 2 and (2,1) = -1, plus an ignored upper entry
    let t = CsrMatrix::from_csr(3, 3, vec![0, 1, 2, 3], vec![2, 0, 1], vec![9.0, 2.0, -1.0]).unwrap();
    let op = factory::hermitian(vec![4.0, 5.0, 6.0], &t).unwrap();
    let m = op.materialize().unwrap();
    let expected = [[4.0, 2.0, 0.0], [2.0, 5.0, -1.0], [0.0, -1.0, 6.0]];
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(m[(i, j)], expected[i][j]);
        }
    }
}

/// Test that restriction followed by extension zeroes the unselected entries.
#[test]
fn extension_after_restriction_masks_vector() {
    let r = factory::restriction::<f64>(vec![0, 2], 4).unwrap();
    let e = factory::extension::<f64>(vec![0, 2], 4).unwrap();
    let masked = e.compose(&r).unwrap();
    assert_eq!(masked.apply(&[1.0, 2.0, 3.0, 4.0]).unwrap(), vec![1.0, 0.0, 3.0, 0.0]);
}

/// Test the all-ones and zero operators.
#[test]
fn ones_and_zeros() {
    let j = factory::ones::<f64>(3, 2);
    assert_eq!(j.apply(&[1.5, 2.5]).unwrap(), vec![4.0; 3]);
    let z = factory::zeros::<Complex<f32>>(2, 2);
    assert!(z.is_hermitian());
    assert_eq!(z.apply(&[Complex::new(1.0, 1.0); 2]).unwrap(), vec![Complex::new(0.0, 0.0); 2]);
}
