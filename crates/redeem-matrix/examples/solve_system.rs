use anyhow::{Context, Result};
use redeem_matrix::Matrix;

fn main() -> Result<()> {
    env_logger::init();

    // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
    let a = Matrix::from_rows(&[
        vec![2.0, 1.0, -1.0],
        vec![-3.0, -1.0, 2.0],
        vec![-2.0, 1.0, 2.0],
    ])?;
    let b = Matrix::from_shape_vec((3, 1), vec![8.0, -11.0, -3.0])?;

    println!("Coefficients:\n{}", a);
    println!("Determinant: {}", a.determinant()?);

    let inverse = a.inverse().context("coefficient matrix is not invertible")?;
    println!("Inverse:\n{}", inverse);

    let x = &inverse * &b;
    println!("Solution (x, y, z): {:?}", x.as_slice());

    let residual = &(&a * &x) - &b;
    let max_residual = residual
        .as_slice()
        .iter()
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    log::info!("max residual {:e}", max_residual);

    Ok(())
}
