//! Terminal rendering of kernel scripts.

use chrono::{DateTime, Local};

use mathviz_kernel::script::{Pacing, Script, Step, Tone};

fn marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "  ",
        Tone::Highlight => "> ",
        Tone::Warning => "! ",
        Tone::Attack => "x ",
        Tone::Defense | Tone::Success => "+ ",
    }
}

/// `[HH:MM:SS] <marker><text>`
pub fn format_step(step: &Step, at: DateTime<Local>) -> String {
    format!("[{}] {}{}", at.format("%H:%M:%S"), marker(step.tone), step.text)
}

/// Print every step to stdout, waiting out the delays when `animate` is set.
pub fn print_script(script: &Script, animate: bool) {
    let pacing = if animate {
        Pacing::RealTime
    } else {
        Pacing::Immediate
    };
    let mut sink = |step: &Step| println!("{}", format_step(step, Local::now()));
    script.play(&mut sink, pacing);
}

pub fn print_lines<S: AsRef<str>>(lines: &[S]) {
    for line in lines {
        println!("{}", line.as_ref());
    }
}
