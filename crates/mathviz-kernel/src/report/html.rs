use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// One titled block of a report: a few lines of text and an optional plot.
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<String>,
    pub plot: Option<Plot>,
}

impl ReportSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            plot: None,
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn plot(mut self, plot: Plot) -> Self {
        self.plot = Some(plot);
        self
    }
}

fn section_markup(index: usize, section: &ReportSection) -> Markup {
    let div_id = format!("plot-{}", index);
    html! {
        section {
            h2 { (section.title) }
            @if !section.lines.is_empty() {
                ul {
                    @for line in &section.lines {
                        li { code { (line) } }
                    }
                }
            }
            @if let Some(plot) = &section.plot {
                (PreEscaped(plot.to_inline_html(Some(div_id.as_str()))))
            }
        }
    }
}

/// Standalone HTML page with every section in order.
pub fn render_report(title: &str, sections: &[ReportSection]) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                script src=(PLOTLY_CDN) {}
                style {
                    "body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; }"
                    "section { margin-bottom: 3rem; }"
                    "code { font-family: 'Fira Code', monospace; }"
                }
            }
            body {
                h1 { (title) }
                p class="generated" { "Generated " (generated) }
                @for (i, section) in sections.iter().enumerate() {
                    (section_markup(i, section))
                }
            }
        }
    };
    page.into_string()
}

pub fn write_report<P: AsRef<Path>>(path: P, html: &str) -> Result<()> {
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
    log::info!("Report written to {}", path.as_ref().display());
    Ok(())
}
