//! Build a few operators, combine them, and check them.
//!
//! Run with `cargo run --example operator_tour`.

use faer::Mat;
use linop::{check_adjoint, check_positive_definite, factory, hcat, OpError, Operator};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), OpError> {
    let n = 4;
    // 1D Laplacian [-1 2 -1]
    let a: Mat<f64> = Mat::from_fn(n, n, |i, j| {
        if i == j {
            2.0
        } else if i.abs_diff(j) == 1 {
            -1.0
        } else {
            0.0
        }
    });
    let lap = Operator::from_matrix_with(a.clone(), true, true)?;
    println!("{lap}");

    let mut rng = StdRng::seed_from_u64(42);
    println!("adjoint consistent: {}", check_adjoint(&lap, &mut rng)?);
    println!("positive definite:  {}", check_positive_definite(&lap, &mut rng)?);

    // Preconditioned operator M⁻¹ A through a Cholesky factorization
    let m_inv = factory::cholesky_with_rng(a, true, &mut rng)?;
    let pa = m_inv.compose(&lap)?;
    let b = vec![1.0; n];
    println!("M⁻¹ A b = {:?}", pa.apply(&b)?);

    // Shifted, scaled and stacked next to a diagonal block
    let shifted = (2.0_f64 * &lap).add(factory::identity(n))?;
    let block = hcat(&shifted, factory::diagonal(vec![1.0, 2.0, 3.0, 4.0]))?;
    println!("[2A + I  D] has shape {:?}", block.shape());
    let x: Vec<f64> = (0..2 * n).map(|i| i as f64).collect();
    println!("[2A + I  D] x = {:?}", block.apply(&x)?);
    println!("transpose of a sum of symmetric operators: {:?}", shifted.transpose()?.apply(&b)?);
    Ok(())
}
