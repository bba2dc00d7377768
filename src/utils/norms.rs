//! Vector norm computations

use ndarray::ArrayView1;

/// Compute the 2-norm (Euclidean norm) of a vector
pub fn norm_2(vec: ArrayView1<'_, f64>) -> f64 {
    let mut sum = 0.0;
    for &val in vec.iter() {
        sum += val * val;
    }
    sum.sqrt()
}
