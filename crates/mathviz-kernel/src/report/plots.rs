use itertools_num::linspace;
use plotly::common::{DashType, Fill, Line, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot, Scatter};

use crate::calculus::{riemann_rectangles, tangent_line, Curve, RiemannRule};
use crate::distributions::{normal_pdf, DistributionParams};
use crate::math::{EigenResult, Matrix2x2, Vector2};
use crate::stats::Histogram;

const CURVE_POINTS: usize = 400;

/// Points of `f` on `[lo, hi]`, with non-finite values (poles) dropped.
fn sample<F>(f: F, lo: f64, hi: f64, points: usize) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(f64) -> f64,
{
    linspace(lo, hi, points)
        .map(|x| (x, f(x)))
        .filter(|(_, y)| y.is_finite())
        .unzip()
}

fn layout(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout::new()
        .title(title)
        .x_axis(Axis::new().title(x_title))
        .y_axis(Axis::new().title(y_title))
}

/// The curve on `[lo, hi]` with its tangent at `x0`.
pub fn plot_tangent(curve: Curve, x0: f64, step: f64, lo: f64, hi: f64) -> Plot {
    let (xs, ys) = sample(|x| curve.eval(x), lo, hi, CURVE_POINTS);
    let (slope, intercept) = tangent_line(|x| curve.eval(x), x0, step);

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(xs, ys).mode(Mode::Lines).name(curve.label()));
    plot.add_trace(
        Scatter::new(vec![lo, hi], vec![slope * lo + intercept, slope * hi + intercept])
            .mode(Mode::Lines)
            .name(&format!("tangent, slope {:.4}", slope))
            .line(Line::new().dash(DashType::Dash)),
    );
    plot.add_trace(
        Scatter::new(vec![x0], vec![curve.eval(x0)])
            .mode(Mode::Markers)
            .name(&format!("x = {}", x0)),
    );
    plot.set_layout(layout(
        &format!("{} and its tangent at x = {}", curve.label(), x0),
        "x",
        "f(x)",
    ));
    plot
}

/// Riemann rectangles over `[a, b]` drawn under the curve.
pub fn plot_riemann(curve: Curve, a: f64, b: f64, n: usize, rule: RiemannRule) -> Plot {
    let mut plot = Plot::new();

    for rect in riemann_rectangles(|x| curve.eval(x), a, b, n, rule) {
        let x0 = rect.left_edge;
        let x1 = rect.left_edge + rect.width;
        plot.add_trace(
            Scatter::new(vec![x0, x0, x1, x1, x0], vec![0.0, rect.height, rect.height, 0.0, 0.0])
                .mode(Mode::Lines)
                .fill(Fill::ToSelf)
                .show_legend(false),
        );
    }

    let (xs, ys) = sample(|x| curve.eval(x), a, b, CURVE_POINTS);
    plot.add_trace(Scatter::new(xs, ys).mode(Mode::Lines).name(curve.label()));
    plot.set_layout(layout(
        &format!("{} rule, n = {}", rule, n),
        "x",
        "f(x)",
    ));
    plot
}

pub fn plot_distribution(params: &DistributionParams) -> Plot {
    let (xs, ys): (Vec<f64>, Vec<f64>) = params.sample_curve(CURVE_POINTS + 1).into_iter().unzip();

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(xs, ys)
            .mode(Mode::Lines)
            .fill(Fill::ToZeroY)
            .name(params.name()),
    );
    plot.set_layout(layout(
        &format!("{} density", params.name()),
        "x",
        "density",
    ));
    plot
}

/// Histogram bars with the normal density of matching mean and spread,
/// scaled to counts.
pub fn plot_histogram(hist: &Histogram, mean: f64, std_dev: f64, title: &str) -> Plot {
    let counts: Vec<f64> = hist.counts.iter().map(|&c| c as f64).collect();
    let total = hist.total() as f64;

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(hist.centers(), counts).name("sample means"));

    if std_dev > 0.0 {
        let (xs, ys) = sample(
            |x| normal_pdf(x, mean, std_dev) * total * hist.bin_width,
            hist.min,
            hist.max,
            101,
        );
        plot.add_trace(
            Scatter::new(xs, ys)
                .mode(Mode::Lines)
                .name("normal fit")
                .line(Line::new().color("red")),
        );
    }

    plot.set_layout(layout(title, "value", "count"));
    plot
}

fn line_through_origin(v: Vector2, reach: f64) -> (Vec<f64>, Vec<f64>) {
    (vec![-v.x * reach, v.x * reach], vec![-v.y * reach, v.y * reach])
}

/// Eigen directions of `m`, each with the eigenvector scaled by its eigenvalue.
pub fn plot_eigen(m: &Matrix2x2, eigen: &EigenResult) -> Plot {
    let mut plot = Plot::new();

    match *eigen {
        EigenResult::Complex => {
            plot.set_layout(layout(
                &format!("{}: complex eigenvalues (rotation)", m),
                "x",
                "y",
            ));
        }
        EigenResult::Real {
            lambda1,
            lambda2,
            v1,
            v2,
        } => {
            for (lambda, v, name) in [(lambda1, v1, "λ₁"), (lambda2, v2, "λ₂")] {
                let (xs, ys) = line_through_origin(v, 5.0);
                plot.add_trace(
                    Scatter::new(xs, ys)
                        .mode(Mode::Lines)
                        .name(&format!("span of v for {}", name))
                        .line(Line::new().dash(DashType::Dot)),
                );
                let tip = v.scale(lambda);
                plot.add_trace(
                    Scatter::new(vec![0.0, tip.x], vec![0.0, tip.y])
                        .mode(Mode::LinesMarkers)
                        .name(&format!("{} = {:.2}", name, lambda)),
                );
            }
            plot.set_layout(layout(&format!("Eigenvectors of {}", m), "x", "y"));
        }
    }
    plot
}

/// The unit square and its image under `m`.
pub fn plot_transform(m: &Matrix2x2) -> Plot {
    let unit = Matrix2x2::IDENTITY.unit_square_image();
    let image = m.unit_square_image();

    let closed = |corners: [Vector2; 4]| -> (Vec<f64>, Vec<f64>) {
        corners
            .iter()
            .chain(std::iter::once(&corners[0]))
            .map(|v| (v.x, v.y))
            .unzip()
    };

    let mut plot = Plot::new();
    let (ux, uy) = closed(unit);
    plot.add_trace(
        Scatter::new(ux, uy)
            .mode(Mode::Lines)
            .name("unit square")
            .line(Line::new().dash(DashType::Dash)),
    );
    let (ix, iy) = closed(image);
    plot.add_trace(
        Scatter::new(ix, iy)
            .mode(Mode::Lines)
            .fill(Fill::ToSelf)
            .name("image"),
    );

    let summary = m.summary();
    plot.set_layout(layout(
        &format!(
            "det = {:.3}, area ×{:.3}{}",
            summary.determinant,
            summary.area_scale,
            if summary.orientation_flipped {
                " (orientation flipped)"
            } else {
                ""
            }
        ),
        "x",
        "y",
    ));
    plot
}
