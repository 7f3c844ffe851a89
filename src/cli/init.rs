//! Init command - write a starter config file

use crate::config::CONFIG_FILE;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

const TEMPLATE: &str = r#"# Proselens configuration
# Every field is optional; the values below are the defaults.

# Text file to analyze
input = "input.txt"

# Tokenization language: english, russian
language = "english"

[output]
# Plain distribution histogram (analyze)
histogram = "hist.png"
# Histogram with IQR bounds and outlier rug marks (outliers)
fence_histogram = "hist_all_iqr.png"
# Index-vs-length scatter chart (outliers)
scatter = "sent_len_scatter.png"
# Plain-text outlier report (outliers)
report = "outliers.txt"
"#;

/// Run the init command
pub fn run() -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            CONFIG_FILE
        );
        return Ok(());
    }

    std::fs::write(path, TEMPLATE)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE))?;
    println!("{} created {}", style("✓").green(), CONFIG_FILE);
    Ok(())
}
