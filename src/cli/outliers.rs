//! Outliers command - the IQR anomaly report
//!
//! Runs the full pipeline: load → segment → measure → statistics → detect →
//! explain → render charts → write the report file. Stops early (and
//! successfully) when there are no sentences or no outliers; chart and
//! report-write failures are warnings, not errors.

use crate::config::AnalysisConfig;
use crate::report::ReportEntry;
use crate::stats::Fence;
use crate::tokenize::Language;
use crate::{charts, corpus, detect, measure, report, stats, tokenize};
use anyhow::Result;
use console::style;
use tracing::{debug, warn};

/// Run the outliers command
pub fn run(config: &AnalysisConfig) -> Result<()> {
    let language: Language = config.language().parse()?;
    debug!("tokenization locale: {}", language.code());

    let text = corpus::load_text(&config.input());
    let sentences = tokenize::segment(&text, language);
    let lengths = measure::sentence_lengths(&sentences);
    report::print_sentence_counts(&sentences, &lengths);

    let Some(fence) = Fence::from_lengths(&lengths) else {
        println!(
            "[info] nothing to analyze: '{}' has no sentences",
            config.input().display()
        );
        return Ok(());
    };
    let mean = stats::mean(&lengths);
    report::print_summary(sentences.len(), mean, &fence);

    let outliers = detect::find_outliers(&sentences, &lengths, &fence);
    if outliers.is_empty() {
        println!("No outliers under the 1.5*IQR rule.");
        return Ok(());
    }

    // Charts first: a failing report write must not cost us the artifacts
    let outlier_lengths: Vec<u32> = outliers.iter().map(|o| o.length).collect();
    match charts::fence_histogram(
        &lengths,
        &fence,
        &outlier_lengths,
        &config.output.fence_histogram,
    ) {
        Ok(()) => println!(
            "{} annotated histogram saved to {}",
            style("✓").green(),
            config.output.fence_histogram.display()
        ),
        Err(e) => warn!(
            "could not render '{}': {}",
            config.output.fence_histogram.display(),
            e
        ),
    }
    match charts::scatter(&lengths, &fence, &config.output.scatter) {
        Ok(()) => println!(
            "{} scatter chart saved to {}",
            style("✓").green(),
            config.output.scatter.display()
        ),
        Err(e) => warn!(
            "could not render '{}': {}",
            config.output.scatter.display(),
            e
        ),
    }

    let entries: Vec<ReportEntry> = outliers
        .iter()
        .map(|o| ReportEntry::build(o, mean))
        .collect();
    report::print_outliers(&entries);

    match report::write(&config.output.report, mean, &fence, &entries) {
        Ok(()) => println!(
            "{} outliers saved to {}",
            style("✓").green(),
            config.output.report.display()
        ),
        Err(e) => warn!(
            "could not save '{}': {}",
            config.output.report.display(),
            e
        ),
    }

    Ok(())
}
