use serde::{Deserialize, Serialize};

use crate::bayes::BayesInputs;
use crate::calculus::{Curve, RiemannRule};
use crate::distributions::DistributionParams;
use crate::error::KernelError;
use crate::math::Matrix2x2;
use crate::stats::HypothesisTest;

/// Parameters for every view of a visualization session.
///
/// Each section replaces what used to be page-level slider state; defaults
/// match the initial position of those controls.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub derivative: DerivativeConfig,
    pub integral: IntegralConfig,
    pub matrix: Matrix2x2,
    pub distribution: DistributionParams,
    pub bayes: BayesInputs,
    pub sampling: SamplingConfig,
    pub hypothesis: HypothesisTest,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            derivative: DerivativeConfig::default(),
            integral: IntegralConfig::default(),
            matrix: Matrix2x2::new(2.0, 1.0, 1.0, 2.0),
            distribution: DistributionParams::default(),
            bayes: BayesInputs::default(),
            sampling: SamplingConfig::default(),
            hypothesis: HypothesisTest::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DerivativeConfig {
    pub curve: Curve,
    pub at: f64,
    pub step: f64,
}

impl Default for DerivativeConfig {
    fn default() -> Self {
        Self {
            curve: Curve::Square,
            at: 1.0,
            step: crate::calculus::DEFAULT_STEP,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IntegralConfig {
    pub curve: Curve,
    pub from: f64,
    pub to: f64,
    pub rectangles: usize,
    pub rule: RiemannRule,
}

impl Default for IntegralConfig {
    fn default() -> Self {
        Self {
            curve: Curve::Square,
            from: 0.0,
            to: 3.0,
            rectangles: 10,
            rule: RiemannRule::Left,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    pub sample_size: usize,
    pub samples: usize,
    pub bins: usize,
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_size: 30,
            samples: 1000,
            bins: 30,
            seed: 42,
        }
    }
}

impl DerivativeConfig {
    pub fn validate(&self) -> Result<(), KernelError> {
        if !(self.step > 0.0) {
            return Err(KernelError::invalid("step", self.step, "must be positive"));
        }
        if !self.at.is_finite() {
            return Err(KernelError::invalid("at", self.at, "must be finite"));
        }
        Ok(())
    }
}

impl IntegralConfig {
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.rectangles == 0 {
            return Err(KernelError::invalid(
                "rectangles",
                0.0,
                "at least one subdivision is required",
            ));
        }
        if !(self.from < self.to) {
            return Err(KernelError::invalid("to", self.to, "must be greater than from"));
        }
        Ok(())
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.sample_size == 0 {
            return Err(KernelError::invalid("sample_size", 0.0, "must be positive"));
        }
        if self.samples == 0 {
            return Err(KernelError::invalid("samples", 0.0, "must be positive"));
        }
        if self.bins == 0 {
            return Err(KernelError::invalid("bins", 0.0, "at least one bin is required"));
        }
        Ok(())
    }
}

impl SessionConfig {
    /// Check the caller-side preconditions of every section.
    pub fn validate(&self) -> Result<(), KernelError> {
        self.derivative.validate()?;
        self.integral.validate()?;
        self.distribution.validate()?;
        self.bayes.validate()?;
        self.sampling.validate()?;
        self.hypothesis.validate()
    }
}
