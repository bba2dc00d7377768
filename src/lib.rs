//! # power-method: Dominant eigenpair via power iteration
//!
//! Computes the largest-magnitude eigenvalue of a dense square real matrix
//! together with its unit-norm eigenvector, by repeated matrix-vector
//! multiplication and renormalization.
//!
//! The method assumes a unique, well-separated dominant eigenvalue and an
//! initial vector that is not orthogonal to its eigenspace; it does not
//! detect degenerate or complex-dominant spectra.

pub mod power;
pub mod utils;

pub use power::{
    dominant_eigenpair, power_method, PowerMethodConfig, PowerMethodError, PowerMethodResult,
};
pub use utils::{norm_2, squeeze_to_vector, square_matrix_view};

// Re-export ndarray types
pub use ndarray::{Array1, Array2, ArrayD};

// Type aliases for convenience
pub type Matrix = Array2<f64>;
pub type Vector = Array1<f64>;
