//! Reporting and plotting helpers.
//!
//! `plots` turns kernel results into `plotly::Plot`s and `html` lays them
//! out as a single page with `maud`. [`session_sections`] assembles the
//! full set of views for a [`SessionConfig`].
pub mod html;
pub mod plots;

pub use html::{render_report, write_report, ReportSection};

use crate::calculus::{derivative, riemann_sum};
use crate::config::SessionConfig;
use crate::error::KernelError;
use crate::math::eigen;
use crate::stats::{sample_means, summarize_means};

pub fn session_sections(config: &SessionConfig) -> Result<Vec<ReportSection>, KernelError> {
    config.validate()?;

    let mut sections = Vec::new();

    let d = &config.derivative;
    let numeric = derivative(|x| d.curve.eval(x), d.at, d.step);
    sections.push(
        ReportSection::new("Derivative")
            .line(d.curve.label())
            .line(d.curve.derivative_label())
            .line(format!("central difference at x = {}: {:.6}", d.at, numeric))
            .line(format!("analytic: {:.6}", d.curve.derivative(d.at)))
            .plot(plots::plot_tangent(d.curve, d.at, d.step, d.at - 4.0, d.at + 4.0)),
    );

    let i = &config.integral;
    let sum = riemann_sum(|x| i.curve.eval(x), i.from, i.to, i.rectangles, i.rule);
    let exact = i.curve.exact_integral(i.from, i.to);
    sections.push(
        ReportSection::new("Riemann sum")
            .line(format!("Riemann Sum (n={}): {:.4}", i.rectangles, sum))
            .line(format!("Exact: {:.4}", exact))
            .line(format!("Error: {:.4}", (sum - exact).abs()))
            .plot(plots::plot_riemann(i.curve, i.from, i.to, i.rectangles, i.rule)),
    );

    let m = config.matrix;
    let summary = m.summary();
    sections.push(
        ReportSection::new("Linear transformation")
            .line(format!("T = {}", m))
            .line(format!("det(T) = {:.3}", summary.determinant))
            .line(format!("Area scale: {:.3}×", summary.area_scale))
            .plot(plots::plot_transform(&m)),
    );

    let e = eigen(&m);
    let mut eigen_section = ReportSection::new("Eigenvectors");
    eigen_section = match (e.eigenvalues(), e.eigenvectors()) {
        (Some((l1, l2)), Some((v1, v2))) => eigen_section
            .line(format!("λ₁ = {:.4}, v₁ = {:.4}", l1, v1))
            .line(format!("λ₂ = {:.4}, v₂ = {:.4}", l2, v2)),
        _ => eigen_section.line("Complex eigenvalues (rotation)"),
    };
    sections.push(eigen_section.plot(plots::plot_eigen(&m, &e)));

    let dist = &config.distribution;
    sections.push(
        ReportSection::new("Probability density")
            .line(format!("{:?}", dist))
            .line(format!("mean = {:.4}, variance = {:.4}", dist.mean(), dist.variance()))
            .plot(plots::plot_distribution(dist)),
    );

    let b = config.bayes.combine();
    sections.push(
        ReportSection::new("Bayes' theorem")
            .line(format!("P(B) = {:.4}", b.p_b))
            .line(format!("P(A|B) = {:.2}%", b.posterior * 100.0)),
    );

    let s = &config.sampling;
    let means = sample_means(s.sample_size, s.samples, s.seed);
    let summary = summarize_means(&means, s.sample_size, s.bins)?;
    sections.push(
        ReportSection::new("Central limit theorem")
            .line(format!("{} samples of size {}", s.samples, s.sample_size))
            .line(format!("mean of means = {:.4}", summary.mean))
            .line(format!(
                "std of means = {:.4} (expected {:.4})",
                summary.std_dev, summary.expected_std_dev
            ))
            .plot(plots::plot_histogram(
                &summary.histogram,
                summary.mean,
                summary.std_dev,
                "Distribution of sample means",
            )),
    );

    let mut hypothesis = ReportSection::new("Hypothesis test");
    for step in config.hypothesis.script().steps() {
        hypothesis = hypothesis.line(step.text.clone());
    }
    sections.push(hypothesis);

    Ok(sections)
}
