//! Power iteration for the dominant eigenpair
//!
//! Repeatedly applies the matrix to a working vector and renormalizes it.
//! The dominant component of the iterate is amplified relative to the rest,
//! so the normalized iterate converges to the eigenvector of the
//! largest-magnitude eigenvalue, provided that eigenvalue is unique and the
//! starting vector has a component along its eigenspace. The eigenvalue is
//! recovered afterwards as the maximum of the element-wise ratio
//! `(A x)_i / x_i` over non-zero components, which is exact at convergence.

use ndarray::{Array1, Array2, ArrayD, ArrayView2};

use crate::utils::{norm_2, square_matrix_view, squeeze_to_vector};

/// Configuration for the power iteration
#[derive(Debug, Clone, Copy)]
pub struct PowerMethodConfig {
    /// Convergence tolerance on the Euclidean distance between successive
    /// normalized iterates
    pub eps: f64,
    /// Maximum number of iterations
    pub max_iter: usize,
}

impl PowerMethodConfig {
    pub fn new(eps: f64) -> Self {
        Self {
            eps,
            max_iter: 10_000,
        }
    }
}

impl Default for PowerMethodConfig {
    fn default() -> Self {
        Self::new(1e-7)
    }
}

/// Error types for the power iteration
#[derive(Debug, thiserror::Error)]
pub enum PowerMethodError {
    #[error("Matrix must be 2-dimensional, got {ndim} dimension(s)")]
    NotTwoDimensional { ndim: usize },

    #[error("Matrix must be square, got {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    #[error("Initial vector must have shape (n, 1) or (n,), got {shape:?}")]
    InvalidInitialVector { shape: Vec<usize> },

    #[error("Initial vector has length {got}, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),

    #[error("Iterate has zero norm at iteration {iteration}")]
    ZeroNorm { iteration: usize },

    #[error("Numerical error: {message}")]
    NumericalError { message: String },
}

/// Result of the power iteration
#[derive(Debug, Clone)]
pub struct PowerMethodResult {
    /// Estimate of the largest-magnitude eigenvalue
    pub eigenvalue: f64,
    /// Unit-norm eigenvector estimate
    pub eigenvector: Array1<f64>,
}

/// Compute the dominant eigenpair of a dense square matrix
///
/// Iterates `x <- A x / ||A x||` until the Euclidean distance between
/// successive iterates drops below `config.eps` or `config.max_iter`
/// iterations have run. Running out of iterations is not an error; the
/// best estimate found so far is returned.
///
/// # Arguments
/// * `matrix` - Square input matrix, must have exactly two axes of equal extent
/// * `x0` - Initial guess for the eigenvector; accepts `(n,)` or `(n, 1)`
///   shaped input, defaults to a vector of ones
/// * `config` - Tolerance and iteration cap
///
/// # Returns
/// * `PowerMethodResult` - Eigenvalue estimate and unit-norm eigenvector
pub fn power_method(
    matrix: &ArrayD<f64>,
    x0: Option<&ArrayD<f64>>,
    config: PowerMethodConfig,
) -> Result<PowerMethodResult, PowerMethodError> {
    if !(config.eps > 0.0 && config.eps.is_finite()) {
        return Err(PowerMethodError::InvalidTolerance(format!(
            "Tolerance must be positive and finite, got {}",
            config.eps
        )));
    }

    let a = square_matrix_view(matrix)?;
    let n = a.ncols();

    let x0 = match x0 {
        Some(guess) => {
            let guess = squeeze_to_vector(guess)?;
            if guess.len() != n {
                return Err(PowerMethodError::DimensionMismatch {
                    expected: n,
                    got: guess.len(),
                });
            }
            guess
        }
        None => Array1::ones(n),
    };

    let (eigenvalue, eigenvector) = iterate(a, x0, config)?;
    Ok(PowerMethodResult {
        eigenvalue,
        eigenvector,
    })
}

/// Convenience function for a typed square matrix with default settings
pub fn dominant_eigenpair(matrix: &Array2<f64>) -> Result<PowerMethodResult, PowerMethodError> {
    let (nrows, ncols) = matrix.dim();
    if nrows != ncols {
        return Err(PowerMethodError::NotSquare { nrows, ncols });
    }
    let x0 = Array1::ones(ncols);
    let (eigenvalue, eigenvector) = iterate(matrix.view(), x0, PowerMethodConfig::default())?;
    Ok(PowerMethodResult {
        eigenvalue,
        eigenvector,
    })
}

fn iterate(
    a: ArrayView2<'_, f64>,
    mut x: Array1<f64>,
    config: PowerMethodConfig,
) -> Result<(f64, Array1<f64>), PowerMethodError> {
    for iteration in 0..config.max_iter {
        let y = a.dot(&x);
        let nrm = norm_2(y.view());
        if nrm == 0.0 {
            return Err(PowerMethodError::ZeroNorm { iteration });
        }
        let x_next = y / nrm;
        let error = norm_2((&x_next - &x).view());
        x = x_next;
        if error < config.eps {
            break;
        }
    }

    // Fresh product; the iterate may have moved since the last one computed
    // inside the loop.
    let ax = a.dot(&x);
    let eigenvalue = ax
        .iter()
        .zip(x.iter())
        .filter(|&(_, &xi)| xi != 0.0)
        .map(|(&axi, &xi)| axi / xi)
        .fold(None, |acc: Option<f64>, ratio| {
            Some(acc.map_or(ratio, |best| best.max(ratio)))
        })
        .ok_or_else(|| PowerMethodError::NumericalError {
            message: "eigenvalue extraction requires a non-zero component in the iterate"
                .to_string(),
        })?;

    Ok((eigenvalue, x))
}
