use anyhow::Result;

use mathviz_kernel::math::{eigen, EigenResult, Matrix2x2, TransformPreset};

/// Matrix from four row-major entries.
pub fn matrix_from_entries(entries: &[f64]) -> Result<Matrix2x2> {
    match entries {
        [a, b, c, d] => Ok(Matrix2x2::new(*a, *b, *c, *d)),
        _ => anyhow::bail!("Expected 4 matrix entries (a b c d), got {}", entries.len()),
    }
}

pub fn resolve_matrix(entries: Option<&[f64]>, preset: Option<&str>) -> Result<Matrix2x2> {
    match (entries, preset) {
        (Some(values), None) => matrix_from_entries(values),
        (None, Some(name)) => Ok(name.parse::<TransformPreset>()?.matrix()),
        (Some(_), Some(_)) => anyhow::bail!("Give either matrix entries or --preset, not both"),
        (None, None) => anyhow::bail!("Give matrix entries (a b c d) or --preset"),
    }
}

pub fn eigen_report(m: &Matrix2x2) -> Vec<String> {
    let mut lines = vec![format!("M = {}", m)];
    match eigen(m) {
        EigenResult::Complex => {
            lines.push("Complex eigenvalues (rotation)".to_string());
        }
        EigenResult::Real {
            lambda1,
            lambda2,
            v1,
            v2,
        } => {
            lines.push(format!("λ₁ = {:.4}, v₁ = {:.4}", lambda1, v1));
            lines.push(format!("λ₂ = {:.4}, v₂ = {:.4}", lambda2, v2));
        }
    }
    lines
}

pub fn transform_report(m: &Matrix2x2) -> Vec<String> {
    let summary = m.summary();
    let mut lines = vec![
        format!("T = {}", m),
        format!("î → {:.3}", m.i_hat()),
        format!("ĵ → {:.3}", m.j_hat()),
        format!("det(T) = {:.3}", summary.determinant),
        format!("Area scale: {:.3}×", summary.area_scale),
    ];
    if summary.orientation_flipped {
        lines.push("Orientation: flipped".to_string());
    } else if summary.determinant == 0.0 {
        lines.push("Orientation: collapsed (singular)".to_string());
    } else {
        lines.push("Orientation: preserved".to_string());
    }
    lines
}
