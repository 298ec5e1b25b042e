use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use mathviz_kernel::calculus::Rectangle;
use mathviz_kernel::config::SessionConfig;

/// Load a session configuration from a JSON file and check it.
pub fn load_session_config<P: AsRef<Path>>(path: P) -> Result<SessionConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: SessionConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Field delimiter for a table path, chosen by extension.
pub fn table_delimiter(path: &Path) -> Result<u8> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") => Ok(b','),
        Some("tsv") => Ok(b'\t'),
        _ => anyhow::bail!(
            "Table output must have a .tsv or .csv extension: {}",
            path.display()
        ),
    }
}

fn table_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    let delimiter = table_delimiter(path)?;
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    Ok(csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(BufWriter::new(file)))
}

/// One row per rectangle of a Riemann sum.
pub fn write_rectangles<P: AsRef<Path>>(rects: &[Rectangle], output_path: P) -> Result<()> {
    let path = output_path.as_ref();
    let mut writer = table_writer(path)?;

    writer.write_record(["index", "left_edge", "width", "sample_x", "height", "area"])?;
    for (i, rect) in rects.iter().enumerate() {
        writer.write_record(&[
            i.to_string(),
            format!("{:.6}", rect.left_edge),
            format!("{:.6}", rect.width),
            format!("{:.6}", rect.sample_x),
            format!("{:.6}", rect.height),
            format!("{:.6}", rect.area()),
        ])?;
    }

    writer.flush()?;
    log::info!("Wrote {} rectangles to {}", rects.len(), path.display());
    Ok(())
}

pub fn write_sample_means<P: AsRef<Path>>(means: &[f64], output_path: P) -> Result<()> {
    let path = output_path.as_ref();
    let mut writer = table_writer(path)?;

    writer.write_record(["sample", "mean"])?;
    for (i, m) in means.iter().enumerate() {
        writer.write_record(&[i.to_string(), format!("{:.6}", m)])?;
    }

    writer.flush()?;
    log::info!("Wrote {} sample means to {}", means.len(), path.display());
    Ok(())
}
