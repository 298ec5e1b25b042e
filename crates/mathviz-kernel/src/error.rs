use std::error::Error;
use std::fmt;

/// Errors raised at the edges of the kernel: parsing names, validating
/// caller-supplied parameters and compiling custom classifier rules.
///
/// The numerical functions themselves never return this type; they follow
/// IEEE-754 semantics and hand back NaN/Infinity or a tagged result instead.
#[derive(Debug)]
pub enum KernelError {
    UnknownCurve(String),
    UnknownRule(String),
    UnknownDistribution(String),
    UnknownPreset(String),
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    EmptySample,
    Pattern(regex::Error),
}

impl KernelError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        KernelError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KernelError::UnknownCurve(name) => write!(
                f,
                "Unknown curve: {}. Expected one of x^2, sin(x), x^3, e^x, 1/x",
                name
            ),
            KernelError::UnknownRule(name) => write!(
                f,
                "Unknown sampling rule: {}. Expected left, right or midpoint",
                name
            ),
            KernelError::UnknownDistribution(name) => write!(
                f,
                "Unknown distribution: {}. Expected normal, exponential or uniform",
                name
            ),
            KernelError::UnknownPreset(name) => write!(
                f,
                "Unknown transform preset: {}. Expected identity, scale, rotate, shear or reflect",
                name
            ),
            KernelError::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "Invalid {} = {}: {}", name, value, reason),
            KernelError::EmptySample => write!(f, "Sample must contain at least one value"),
            KernelError::Pattern(err) => write!(f, "Invalid classifier pattern: {}", err),
        }
    }
}

impl Error for KernelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            KernelError::Pattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for KernelError {
    fn from(err: regex::Error) -> Self {
        KernelError::Pattern(err)
    }
}
