//! Closed-form eigen-decomposition of 2x2 matrices.
//!
//! Eigenvalues are the roots of `λ² - tr(M)λ + det(M) = 0`. Only the real
//! case produces eigenvectors; a negative discriminant is reported as
//! [`EigenResult::Complex`], which is a classification rather than an error
//! (the matrix contains a rotation).

use serde::Serialize;

use crate::math::matrix::Matrix2x2;
use crate::math::vector::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EigenResult {
    Complex,
    Real {
        /// Larger root.
        lambda1: f64,
        lambda2: f64,
        /// Unit eigenvector for `lambda1`.
        v1: Vector2,
        /// Unit eigenvector for `lambda2`.
        v2: Vector2,
    },
}

impl EigenResult {
    pub fn is_complex(&self) -> bool {
        matches!(self, EigenResult::Complex)
    }

    pub fn eigenvalues(&self) -> Option<(f64, f64)> {
        match *self {
            EigenResult::Complex => None,
            EigenResult::Real {
                lambda1, lambda2, ..
            } => Some((lambda1, lambda2)),
        }
    }

    pub fn eigenvectors(&self) -> Option<(Vector2, Vector2)> {
        match *self {
            EigenResult::Complex => None,
            EigenResult::Real { v1, v2, .. } => Some((v1, v2)),
        }
    }
}

/// Discriminant of the characteristic polynomial.
pub fn discriminant(m: &Matrix2x2) -> f64 {
    let trace = m.trace();
    trace * trace - 4.0 * m.determinant()
}

/// Eigenvalues and unit eigenvectors of `m`.
///
/// The eigenvector for `λ` is taken from the first row of `M - λI`, giving
/// the direction `(b, λ - a)`. When `b == 0` that row carries no
/// information, so the second row is used instead, giving `(λ - d, c)`.
/// A zero direction can then only come from a diagonal matrix; it is
/// replaced by the unit vector perpendicular to the other eigenvector, or
/// by the standard basis when both are zero (`M = λI`). As a result
/// diagonal matrices always yield the standard basis vectors up to sign.
pub fn eigen(m: &Matrix2x2) -> EigenResult {
    let trace = m.trace();
    let disc = discriminant(m);

    if disc < 0.0 {
        log::debug!("complex eigenvalues for {} (discriminant {})", m, disc);
        return EigenResult::Complex;
    }

    let root = disc.sqrt();
    let lambda1 = (trace + root) / 2.0;
    let lambda2 = (trace - root) / 2.0;

    let raw1 = eigen_direction(m, lambda1);
    let raw2 = eigen_direction(m, lambda2);

    let (v1, v2) = match (raw1.is_zero(), raw2.is_zero()) {
        (false, false) => (
            raw1.normalize_or(Vector2::UNIT_X),
            raw2.normalize_or(Vector2::UNIT_Y),
        ),
        (true, false) => {
            let v2 = raw2.normalize_or(Vector2::UNIT_Y);
            (v2.perpendicular(), v2)
        }
        (false, true) => {
            let v1 = raw1.normalize_or(Vector2::UNIT_X);
            (v1, v1.perpendicular())
        }
        (true, true) => (Vector2::UNIT_X, Vector2::UNIT_Y),
    };

    log::trace!(
        "eigen {}: λ1={} v1={} λ2={} v2={}",
        m,
        lambda1,
        v1,
        lambda2,
        v2
    );

    EigenResult::Real {
        lambda1,
        lambda2,
        v1,
        v2,
    }
}

fn eigen_direction(m: &Matrix2x2, lambda: f64) -> Vector2 {
    if m.b != 0.0 {
        Vector2::new(m.b, lambda - m.a)
    } else {
        Vector2::new(lambda - m.d, m.c)
    }
}
