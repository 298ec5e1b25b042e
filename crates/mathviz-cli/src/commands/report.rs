use std::path::Path;

use anyhow::Result;

use mathviz_kernel::config::SessionConfig;
use mathviz_kernel::report::{render_report, session_sections, write_report};

use crate::util::load_session_config;

pub fn default_config_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&SessionConfig::default())?)
}

/// Render the session report for `config_path` (or the defaults) to `output`.
pub fn run_report(config_path: Option<&Path>, seed: Option<u64>, output: &Path) -> Result<()> {
    let mut config = match config_path {
        Some(path) => {
            log::info!("[MathViz::Report] Using config: {:?}", path);
            load_session_config(path)?
        }
        None => {
            log::info!("[MathViz::Report] No config provided; using defaults.");
            SessionConfig::default()
        }
    };
    if let Some(seed) = seed {
        config.sampling.seed = seed;
    }

    let sections = session_sections(&config)?;
    let html = render_report("mathviz session report", &sections);
    write_report(output, &html)
}
