//! Fixed-size linear algebra used by the vector, transform and eigen views.
//!
//! Provides `Vector2` and `Matrix2x2` value types plus the closed-form
//! 2x2 eigen-decomposition. There is intentionally no general N×N path.
pub mod eigen;
pub mod matrix;
pub mod vector;

pub use eigen::{eigen, EigenResult};
pub use matrix::{determinant, multiply, Matrix2x2, TransformPreset, TransformSummary};
pub use vector::{dot_product_report, DotProductReport, Vector2};
