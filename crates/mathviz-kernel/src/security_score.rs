//! Checklist score for the AI-security guide. Illustrative only: it counts
//! which controls a deployment claims to have, nothing is verified.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityPosture {
    pub input_validation: bool,
    pub output_filtering: bool,
    pub rate_limiting: bool,
    pub security_logging: bool,
    pub is_agent: bool,
    pub sandboxing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SecurityScore {
    pub score: u32,
    pub grade: char,
    pub issues: Vec<&'static str>,
}

impl SecurityPosture {
    /// Everything enabled, for a non-agent deployment.
    pub fn hardened() -> Self {
        Self {
            input_validation: true,
            output_filtering: true,
            rate_limiting: true,
            security_logging: true,
            is_agent: false,
            sandboxing: true,
        }
    }

    pub fn score(&self) -> SecurityScore {
        let checks: [(bool, u32, &'static str); 5] = [
            (!self.input_validation, 20, "Missing input validation"),
            (!self.output_filtering, 15, "No output filtering"),
            (!self.rate_limiting, 10, "Rate limiting not configured"),
            (!self.security_logging, 10, "Security logging disabled"),
            (self.is_agent && !self.sandboxing, 25, "Agent actions not sandboxed"),
        ];

        let mut score: u32 = 100;
        let mut issues = Vec::new();
        for (failed, penalty, issue) in checks {
            if failed {
                score = score.saturating_sub(penalty);
                issues.push(issue);
            }
        }

        SecurityScore {
            score,
            grade: grade(score),
            issues,
        }
    }
}

fn grade(score: u32) -> char {
    match score {
        90.. => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}
