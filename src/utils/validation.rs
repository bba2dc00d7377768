//! Input shape validation
//!
//! Checks that the matrix input is a square 2-D array and that a supplied
//! initial vector reduces to a single axis of matching length.

use ndarray::{Array1, ArrayD, ArrayView2, Ix2};

use crate::power::PowerMethodError;

/// Validate that `matrix` has exactly two axes of equal extent and return a
/// typed 2-D view of it.
pub fn square_matrix_view(matrix: &ArrayD<f64>) -> Result<ArrayView2<'_, f64>, PowerMethodError> {
    let ndim = matrix.ndim();
    if ndim != 2 {
        return Err(PowerMethodError::NotTwoDimensional { ndim });
    }
    let view = matrix
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| PowerMethodError::NotTwoDimensional { ndim })?;
    let (nrows, ncols) = view.dim();
    if nrows != ncols {
        return Err(PowerMethodError::NotSquare { nrows, ncols });
    }
    Ok(view)
}

/// Collapse all singleton axes of `x` and require that exactly one axis
/// remains, so that both `(n,)` and `(n, 1)` shaped inputs are accepted.
///
/// Element order is preserved; the result is a fresh owned vector.
pub fn squeeze_to_vector(x: &ArrayD<f64>) -> Result<Array1<f64>, PowerMethodError> {
    let kept = x.shape().iter().filter(|&&extent| extent != 1).count();
    if kept != 1 {
        return Err(PowerMethodError::InvalidInitialVector {
            shape: x.shape().to_vec(),
        });
    }
    Ok(x.iter().copied().collect())
}
