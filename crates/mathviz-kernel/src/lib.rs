//! Numerical kernel behind the mathematics visualization pages.
//!
//! Central-difference derivatives, Riemann sums, 2×2 linear algebra,
//! probability densities, Bayes' theorem, sampling statistics and a small
//! illustrative pattern classifier. Functions are pure and synchronous;
//! presentation lives in [`report`] and in the CLI crate.
pub mod bayes;
pub mod calculus;
pub mod config;
pub mod distributions;
pub mod error;
pub mod math;
pub mod patterns;
pub mod report;
pub mod script;
pub mod security_score;
pub mod stats;

pub use error::KernelError;
