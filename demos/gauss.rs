extern crate quadratic_spline;

use nalgebra::{DMatrix, DVector};
use quadratic_spline::gauss_solve;

fn main() {
    let matrix = DMatrix::from_row_slice(3, 3, &[
        2.0, 4.0, 1.0,
        3.0, 2.0, 1.0,
        0.0, 1.0, 2.0,
    ]);
    let constants = DVector::from_column_slice(&[1.0, 2.0, 4.0]);

    let solution = gauss_solve(&matrix, &constants).unwrap();

    println!("solution: {}", solution);
}
