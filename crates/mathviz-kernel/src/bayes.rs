use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// Inputs to Bayes' theorem for a binary hypothesis `A` and evidence `B`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BayesInputs {
    /// P(A)
    pub prior: f64,
    /// P(B|A)
    pub likelihood: f64,
    /// P(B|¬A)
    pub false_positive_rate: f64,
}

impl Default for BayesInputs {
    fn default() -> Self {
        Self {
            prior: 0.01,
            likelihood: 0.9,
            false_positive_rate: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BayesResult {
    /// P(B), the total probability of the evidence.
    pub p_b: f64,
    /// P(A|B)
    pub posterior: f64,
}

/// `P(B) = P(B|A)P(A) + P(B|¬A)(1 - P(A))` and `P(A|B) = P(B|A)P(A) / P(B)`.
///
/// The posterior is defined as 0 when `P(B)` is not positive.
pub fn bayes(prior: f64, likelihood: f64, false_positive_rate: f64) -> BayesResult {
    let p_b = likelihood * prior + false_positive_rate * (1.0 - prior);
    let posterior = if p_b > 0.0 {
        likelihood * prior / p_b
    } else {
        0.0
    };
    BayesResult { p_b, posterior }
}

impl BayesInputs {
    /// Every input must be a probability in `[0, 1]`.
    pub fn validate(&self) -> Result<(), KernelError> {
        for (name, p) in [
            ("prior", self.prior),
            ("likelihood", self.likelihood),
            ("false_positive_rate", self.false_positive_rate),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(KernelError::invalid(name, p, "must be a probability in [0, 1]"));
            }
        }
        Ok(())
    }

    pub fn combine(&self) -> BayesResult {
        bayes(self.prior, self.likelihood, self.false_positive_rate)
    }
}
