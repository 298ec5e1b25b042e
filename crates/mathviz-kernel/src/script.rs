//! Ordered, timed display steps.
//!
//! Several demos reveal their output one line at a time. A [`Script`] holds
//! those lines as an ordered list of [`Step`]s, each carrying the delay since
//! the previous step, and [`Script::play`] is the single loop that hands
//! them to a [`StepSink`] in order.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a step should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Info,
    Highlight,
    Warning,
    Attack,
    Defense,
    Success,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub text: String,
    pub tone: Tone,
    /// Delay relative to the previous step (or to the start for the first).
    pub delay: Duration,
}

impl Step {
    pub fn new(text: impl Into<String>, tone: Tone, delay: Duration) -> Self {
        Self {
            text: text.into(),
            tone,
            delay,
        }
    }

    pub fn immediate(text: impl Into<String>, tone: Tone) -> Self {
        Self::new(text, tone, Duration::ZERO)
    }
}

/// Whether [`Script::play`] waits out the step delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    RealTime,
    Immediate,
}

/// Receives steps in display order.
pub trait StepSink {
    fn show(&mut self, step: &Step);
}

impl StepSink for Vec<Step> {
    fn show(&mut self, step: &Step) {
        self.push(step.clone());
    }
}

impl<F> StepSink for F
where
    F: FnMut(&Step),
{
    fn show(&mut self, step: &Step) {
        self(step)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step `i` is shown `i * spacing` after the start.
    pub fn evenly_spaced<I, S>(lines: I, spacing: Duration) -> Self
    where
        I: IntoIterator<Item = (S, Tone)>,
        S: Into<String>,
    {
        let steps = lines
            .into_iter()
            .enumerate()
            .map(|(i, (text, tone))| {
                let delay = if i == 0 { Duration::ZERO } else { spacing };
                Step::new(text, tone, delay)
            })
            .collect();
        Self { steps }
    }

    pub fn push(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Absolute offset from the start at which each step is shown.
    pub fn schedule(&self) -> Vec<(Duration, &Step)> {
        let mut at = Duration::ZERO;
        self.steps
            .iter()
            .map(|step| {
                at += step.delay;
                (at, step)
            })
            .collect()
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn play<S: StepSink>(&self, sink: &mut S, pacing: Pacing) {
        for step in &self.steps {
            if pacing == Pacing::RealTime && !step.delay.is_zero() {
                thread::sleep(step.delay);
            }
            sink.show(step);
        }
    }
}

impl FromIterator<Step> for Script {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
