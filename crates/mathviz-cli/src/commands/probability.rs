use anyhow::Result;

use mathviz_kernel::bayes::BayesInputs;
use mathviz_kernel::config::SamplingConfig;
use mathviz_kernel::distributions::{normal_cdf, DistributionParams};
use mathviz_kernel::script::Script;
use mathviz_kernel::stats::{sample_means, summarize_means, HypothesisTest};

pub fn pdf_report(params: &DistributionParams, at: f64) -> Result<Vec<String>> {
    params.validate()?;
    Ok(vec![
        format!("{:?}", params),
        format!("f({}) = {:.6}", at, params.pdf(at)),
        format!(
            "mean = {:.4}, variance = {:.4}",
            params.mean(),
            params.variance()
        ),
    ])
}

pub fn cdf_report(at: f64) -> Vec<String> {
    let p = normal_cdf(at);
    vec![
        format!("Φ({}) = {:.6}", at, p),
        format!("P(Z > {}) = {:.6}", at, 1.0 - p),
    ]
}

pub fn bayes_report(inputs: &BayesInputs) -> Result<Vec<String>> {
    inputs.validate()?;
    let result = inputs.combine();
    Ok(vec![
        format!(
            "P(A) = {}, P(B|A) = {}, P(B|¬A) = {}",
            inputs.prior, inputs.likelihood, inputs.false_positive_rate
        ),
        format!("P(B) = {:.4}", result.p_b),
        format!("P(A|B) = {:.2}%", result.posterior * 100.0),
    ])
}

/// Summary lines plus the raw means, for optional table output.
pub fn sample_report(params: &SamplingConfig) -> Result<(Vec<String>, Vec<f64>)> {
    params.validate()?;
    let means = sample_means(params.sample_size, params.samples, params.seed);
    let summary = summarize_means(&means, params.sample_size, params.bins)?;

    let peak = summary.histogram.max_count().max(1);
    let mut lines = vec![
        format!(
            "{} samples of size {} from Uniform[0, 1) (seed {})",
            params.samples, params.sample_size, params.seed
        ),
        format!("Mean of means: {:.4} (expected 0.5000)", summary.mean),
        format!(
            "Std of means:  {:.4} (expected {:.4})",
            summary.std_dev, summary.expected_std_dev
        ),
    ];
    for (center, count) in summary
        .histogram
        .centers()
        .iter()
        .zip(&summary.histogram.counts)
    {
        let bar = "#".repeat(count * 40 / peak);
        lines.push(format!("{:>7.4} | {:<40} {}", center, bar, count));
    }
    Ok((lines, means))
}

pub fn hypothesis_script(test: &HypothesisTest) -> Result<Script> {
    test.validate()?;
    if let Some(exact) = test.run().exact_p_value {
        log::info!("Student-t p-value with {} df: {:.4}", test.n - 1, exact);
    }
    Ok(test.script())
}
