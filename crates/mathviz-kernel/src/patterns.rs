//! Illustrative prompt-injection pattern matcher.
//!
//! This is a teaching prop for the AI-security pages. It flags phrases
//! commonly seen in jailbreak attempts with plain keyword regexes and has no
//! value as an actual defense: trivial rewording evades it and benign text
//! trips it. Do not use it to gate anything.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::script::{Script, Step, Tone};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Log tone used when a finding of this severity is displayed.
    pub fn tone(&self) -> Tone {
        match self {
            Severity::Critical => Tone::Attack,
            Severity::High => Tone::Warning,
            Severity::Medium | Severity::Low => Tone::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(Severity::Low),
            "MEDIUM" => Ok(Severity::Medium),
            "HIGH" => Ok(Severity::High),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A user-supplied rule, before compilation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    pub label: String,
    pub severity: Severity,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>, label: impl Into<String>, severity: Severity) -> Self {
        Self {
            pattern: pattern.into(),
            label: label.into(),
            severity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub label: String,
    pub severity: Severity,
}

#[derive(Clone, Debug)]
struct CompiledRule {
    regex: Regex,
    label: String,
    severity: Severity,
}

/// Ordered list of case-insensitive rules.
#[derive(Clone, Debug)]
pub struct PatternMatcher {
    rules: Vec<CompiledRule>,
}

pub fn default_rules() -> Vec<PatternRule> {
    vec![
        PatternRule::new("ignore|forget|disregard", "Instruction Override", Severity::High),
        PatternRule::new("pretend|roleplay|act as", "Role Manipulation", Severity::Medium),
        PatternRule::new("DAN|jailbreak|bypass", "Known Jailbreak", Severity::Critical),
        PatternRule::new(
            "system prompt|instructions|rules",
            "Prompt Extraction",
            Severity::High,
        ),
        PatternRule::new("base64|encode|decode", "Encoding Attack", Severity::Medium),
        PatternRule::new(r"\{.*\}|\[.*\]", "Injection Syntax", Severity::Low),
    ]
}

static DEFAULT_MATCHER: Lazy<PatternMatcher> = Lazy::new(|| {
    PatternMatcher::new(default_rules()).expect("built-in classifier patterns are valid")
});

impl PatternMatcher {
    pub fn new<I>(rules: I) -> Result<Self, KernelError>
    where
        I: IntoIterator<Item = PatternRule>,
    {
        let rules = rules
            .into_iter()
            .map(|rule| -> Result<CompiledRule, KernelError> {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()?;
                Ok(CompiledRule {
                    regex,
                    label: rule.label,
                    severity: rule.severity,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The built-in rule set shown on the jailbreak analyzer page.
    pub fn builtin() -> &'static PatternMatcher {
        &DEFAULT_MATCHER
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule that matches somewhere in `text`, in rule order. Each rule
    /// contributes at most one finding. Blank input yields nothing.
    pub fn classify(&self, text: &str) -> Vec<Finding> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|rule| rule.regex.is_match(text))
            .map(|rule| Finding {
                label: rule.label.clone(),
                severity: rule.severity,
            })
            .collect()
    }
}

/// [`PatternMatcher::classify`] with the built-in rules.
pub fn classify(text: &str) -> Vec<Finding> {
    PatternMatcher::builtin().classify(text)
}

pub fn max_severity(findings: &[Finding]) -> Option<Severity> {
    findings.iter().map(|f| f.severity).max()
}

/// The analyzer log for `text`: an echo of the input, then the findings
/// (or an all-clear) 300 ms later.
pub fn analysis_script(matcher: &PatternMatcher, text: &str) -> Script {
    let mut script = Script::new();

    if text.trim().is_empty() {
        script.push(Step::immediate("[ANALYZER] No input provided", Tone::Info));
        return script;
    }

    let preview: String = text.chars().take(50).collect();
    script.push(Step::immediate(
        format!("[ANALYZING] \"{}...\"", preview),
        Tone::Info,
    ));

    let findings = matcher.classify(text);
    if findings.is_empty() {
        script.push(Step::new(
            "No malicious patterns detected",
            Tone::Defense,
            Duration::from_millis(300),
        ));
    }
    for (i, finding) in findings.iter().enumerate() {
        let delay = if i == 0 {
            Duration::from_millis(300)
        } else {
            Duration::ZERO
        };
        script.push(Step::new(
            format!(
                "Pattern: {} | Severity: {}",
                finding.label, finding.severity
            ),
            finding.severity.tone(),
            delay,
        ));
    }
    script
}
