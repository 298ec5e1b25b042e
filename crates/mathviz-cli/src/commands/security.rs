use mathviz_kernel::patterns::{analysis_script, max_severity, PatternMatcher};
use mathviz_kernel::script::Script;
use mathviz_kernel::security_score::SecurityPosture;

/// Analyzer log for `text` using the built-in rules.
pub fn analyze(text: &str) -> Script {
    let matcher = PatternMatcher::builtin();
    let findings = matcher.classify(text);
    match max_severity(&findings) {
        Some(severity) => log::info!("{} pattern(s), highest {}", findings.len(), severity),
        None => log::debug!("No patterns matched"),
    }
    analysis_script(matcher, text)
}

pub fn posture_report(posture: &SecurityPosture) -> Vec<String> {
    let score = posture.score();
    let mut lines = vec![format!("Security score: {}/100 (grade {})", score.score, score.grade)];
    lines.extend(score.issues.iter().map(|issue| format!("- {}", issue)));
    lines
}
