use anyhow::Result;

use mathviz_kernel::calculus::{
    checked_riemann_sum, derivative, riemann_rectangles, tangent_line, Curve, Rectangle,
};
use mathviz_kernel::config::{DerivativeConfig, IntegralConfig};

pub fn derivative_report(params: &DerivativeConfig) -> Result<Vec<String>> {
    params.validate()?;
    let curve = params.curve;
    let f = |x: f64| curve.eval(x);

    let numeric = derivative(f, params.at, params.step);
    let analytic = curve.derivative(params.at);
    let (slope, intercept) = tangent_line(f, params.at, params.step);

    if !numeric.is_finite() {
        log::warn!(
            "Derivative of {} at x = {} is not finite ({})",
            curve,
            params.at,
            numeric
        );
    }

    Ok(vec![
        curve.label().to_string(),
        curve.derivative_label().to_string(),
        format!("x = {}, h = {:e}", params.at, params.step),
        format!("Numerical f'(x): {:.6}", numeric),
        format!("Analytic f'(x):  {:.6}", analytic),
        format!("Error: {:.3e}", (numeric - analytic).abs()),
        format!("Tangent: y = {:.4}x + {:.4}", slope, intercept),
    ])
}

/// Summary lines plus the rectangles, for optional table output.
pub fn integral_report(params: &IntegralConfig) -> Result<(Vec<String>, Vec<Rectangle>)> {
    params.validate()?;
    let curve = params.curve;
    let f = |x: f64| curve.eval(x);

    let sum = checked_riemann_sum(f, params.from, params.to, params.rectangles, params.rule)?;
    let exact = curve.exact_integral(params.from, params.to);

    let mut lines = vec![
        format!(
            "∫ {} dx over [{}, {}], {} rule",
            curve, params.from, params.to, params.rule
        ),
        format!("Riemann Sum (n={}): {:.4}", params.rectangles, sum),
    ];
    if exact.is_finite() {
        lines.push(format!("Exact: {:.4}", exact));
        lines.push(format!("Error: {:.4}", (sum - exact).abs()));
    } else {
        log::warn!(
            "{} has a pole in [{}, {}]; no exact value",
            curve,
            params.from,
            params.to
        );
        lines.push("Exact: undefined (pole in interval)".to_string());
    }

    let rects = riemann_rectangles(f, params.from, params.to, params.rectangles, params.rule);
    Ok((lines, rects))
}

pub fn curve_catalog() -> Vec<String> {
    Curve::ALL
        .iter()
        .map(|c| format!("{:<8}{}", c.expression(), c.derivative_label()))
        .collect()
}
