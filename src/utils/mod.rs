//! Norm computation and input validation utilities

pub mod norms;
pub mod validation;

pub use norms::norm_2;
pub use validation::{squeeze_to_vector, square_matrix_view};
