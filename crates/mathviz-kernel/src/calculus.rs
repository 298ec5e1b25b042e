//! Numerical differentiation and Riemann-sum integration.
//!
//! Everything here works on plain `Fn(f64) -> f64` closures. The [`Curve`]
//! catalog provides the named functions the calculus views offer, each with
//! its analytic derivative and antiderivative so numerical estimates can be
//! compared against exact values.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::script::{Script, Tone};

/// Step used by [`derivative`] when the caller has no preference.
pub const DEFAULT_STEP: f64 = 1e-4;

/// Central-difference estimate `(f(x+h) - f(x-h)) / 2h`.
///
/// Second-order accurate in `h`. Non-finite values of `f` propagate into
/// the result unchanged.
pub fn derivative<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Slope and intercept of the tangent to `f` at `x0`.
pub fn tangent_line<F>(f: F, x0: f64, h: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let slope = derivative(&f, x0, h);
    (slope, f(x0) - slope * x0)
}

/// Where each rectangle samples the function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiemannRule {
    #[default]
    Left,
    Right,
    Midpoint,
}

impl RiemannRule {
    /// Sample abscissa of rectangle `i`.
    pub fn sample_point(&self, a: f64, dx: f64, i: usize) -> f64 {
        let i = i as f64;
        match self {
            RiemannRule::Left => a + i * dx,
            RiemannRule::Right => a + (i + 1.0) * dx,
            RiemannRule::Midpoint => a + (i + 0.5) * dx,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiemannRule::Left => "left",
            RiemannRule::Right => "right",
            RiemannRule::Midpoint => "midpoint",
        }
    }
}

impl FromStr for RiemannRule {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(RiemannRule::Left),
            "right" => Ok(RiemannRule::Right),
            "midpoint" | "mid" => Ok(RiemannRule::Midpoint),
            _ => Err(KernelError::UnknownRule(s.to_string())),
        }
    }
}

impl fmt::Display for RiemannRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Riemann sum of `f` over `[a, b]` with `n` equal subdivisions.
///
/// With `n == 0` no rectangle is summed and the result is `0.0`; use
/// [`checked_riemann_sum`] to reject that input instead.
pub fn riemann_sum<F>(f: F, a: f64, b: f64, n: usize, rule: RiemannRule) -> f64
where
    F: Fn(f64) -> f64,
{
    let dx = (b - a) / n as f64;
    let mut sum = 0.0;
    for i in 0..n {
        sum += f(rule.sample_point(a, dx, i)) * dx;
    }
    log::trace!("riemann_sum [{}, {}] n={} rule={} -> {}", a, b, n, rule, sum);
    sum
}

pub fn checked_riemann_sum<F>(
    f: F,
    a: f64,
    b: f64,
    n: usize,
    rule: RiemannRule,
) -> Result<f64, KernelError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(KernelError::invalid(
            "rectangles",
            0.0,
            "at least one subdivision is required",
        ));
    }
    Ok(riemann_sum(f, a, b, n, rule))
}

/// One rectangle of a Riemann sum, in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rectangle {
    pub left_edge: f64,
    pub width: f64,
    pub sample_x: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// The rectangles whose signed areas make up [`riemann_sum`].
pub fn riemann_rectangles<F>(f: F, a: f64, b: f64, n: usize, rule: RiemannRule) -> Vec<Rectangle>
where
    F: Fn(f64) -> f64,
{
    let dx = (b - a) / n as f64;
    (0..n)
        .map(|i| {
            let sample_x = rule.sample_point(a, dx, i);
            Rectangle {
                left_edge: a + i as f64 * dx,
                width: dx,
                sample_x,
                height: f(sample_x),
            }
        })
        .collect()
}

/// Named functions offered by the derivative and integral views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Square,
    Sine,
    Cube,
    Exp,
    Reciprocal,
}

impl Curve {
    pub const ALL: [Curve; 5] = [
        Curve::Square,
        Curve::Sine,
        Curve::Cube,
        Curve::Exp,
        Curve::Reciprocal,
    ];

    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Curve::Square => x * x,
            Curve::Sine => x.sin(),
            Curve::Cube => x * x * x,
            Curve::Exp => x.exp(),
            Curve::Reciprocal => 1.0 / x,
        }
    }

    /// Analytic derivative.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Curve::Square => 2.0 * x,
            Curve::Sine => x.cos(),
            Curve::Cube => 3.0 * x * x,
            Curve::Exp => x.exp(),
            Curve::Reciprocal => -1.0 / (x * x),
        }
    }

    fn antiderivative(&self, x: f64) -> f64 {
        match self {
            Curve::Square => x * x * x / 3.0,
            Curve::Sine => -x.cos(),
            Curve::Cube => x.powi(4) / 4.0,
            Curve::Exp => x.exp(),
            Curve::Reciprocal => x.abs().ln(),
        }
    }

    /// Closed-form `∫ₐᵇ f(x) dx`. NaN for `1/x` when the interval touches 0.
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        if *self == Curve::Reciprocal && a.min(b) <= 0.0 && a.max(b) >= 0.0 {
            return f64::NAN;
        }
        self.antiderivative(b) - self.antiderivative(a)
    }

    /// `|numeric - analytic|` at `x` for step `h`.
    pub fn derivative_error(&self, x: f64, h: f64) -> f64 {
        (derivative(|t| self.eval(t), x, h) - self.derivative(x)).abs()
    }

    pub fn expression(&self) -> &'static str {
        match self {
            Curve::Square => "x^2",
            Curve::Sine => "sin(x)",
            Curve::Cube => "x^3",
            Curve::Exp => "e^x",
            Curve::Reciprocal => "1/x",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Curve::Square => "f(x) = x²",
            Curve::Sine => "f(x) = sin(x)",
            Curve::Cube => "f(x) = x³",
            Curve::Exp => "f(x) = eˣ",
            Curve::Reciprocal => "f(x) = 1/x",
        }
    }

    pub fn derivative_label(&self) -> &'static str {
        match self {
            Curve::Square => "f'(x) = 2x",
            Curve::Sine => "f'(x) = cos(x)",
            Curve::Cube => "f'(x) = 3x²",
            Curve::Exp => "f'(x) = eˣ",
            Curve::Reciprocal => "f'(x) = -1/x²",
        }
    }
}

impl FromStr for Curve {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.split_whitespace().collect::<String>().to_lowercase();
        match key.as_str() {
            "x^2" | "x²" | "square" => Ok(Curve::Square),
            "sin(x)" | "sin" | "sine" => Ok(Curve::Sine),
            "x^3" | "x³" | "cube" => Ok(Curve::Cube),
            "e^x" | "exp(x)" | "exp" => Ok(Curve::Exp),
            "1/x" | "reciprocal" => Ok(Curve::Reciprocal),
            _ => Err(KernelError::UnknownCurve(s.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expression())
    }
}

/// Checks the ε-δ condition `|f(x) - L| < ε` at `samples` evenly spaced
/// points strictly inside `(c - δ, c + δ)`, skipping `x = c` itself.
pub fn epsilon_delta_holds<F>(f: F, c: f64, limit: f64, epsilon: f64, delta: f64, samples: usize) -> bool
where
    F: Fn(f64) -> f64,
{
    let step = 2.0 * delta / (samples + 1) as f64;
    (1..=samples)
        .map(|i| c - delta + i as f64 * step)
        .filter(|&x| x != c)
        .all(|x| (f(x) - limit).abs() < epsilon)
}

/// Step-by-step derivation of `d/dx sin(x²)`.
pub fn chain_rule_script() -> Script {
    Script::evenly_spaced(
        [
            ("Given: y = sin(x²)", Tone::Attack),
            ("Let u = x² (inner function)", Tone::Info),
            ("Then y = sin(u) (outer function)", Tone::Info),
            ("dy/du = cos(u) = cos(x²)", Tone::Highlight),
            ("du/dx = 2x", Tone::Highlight),
            ("Chain Rule: dy/dx = (dy/du) × (du/dx)", Tone::Warning),
            ("dy/dx = cos(x²) × 2x = 2x·cos(x²)", Tone::Success),
        ],
        Duration::from_millis(500),
    )
}
