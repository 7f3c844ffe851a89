//! Analyze command - the basic distribution report
//!
//! 1. Load the text (missing/empty file degrades to an empty corpus)
//! 2. Segment into sentences and count words per sentence
//! 3. Print per-sentence counts and the mean length
//! 4. Render the distribution histogram (placeholder chart on empty input)

use crate::config::AnalysisConfig;
use crate::tokenize::Language;
use crate::{charts, corpus, measure, report, stats, tokenize};
use anyhow::Result;
use console::style;
use tracing::{debug, warn};

/// Run the analyze command
pub fn run(config: &AnalysisConfig) -> Result<()> {
    let language: Language = config.language().parse()?;
    debug!("tokenization locale: {}", language.code());

    let text = corpus::load_text(&config.input());
    let sentences = tokenize::segment(&text, language);
    let lengths = measure::sentence_lengths(&sentences);

    report::print_sentence_counts(&sentences, &lengths);
    println!("Mean sentence length: {:.2}", stats::mean(&lengths));

    match charts::histogram(&lengths, &config.output.histogram) {
        Ok(()) => println!(
            "{} histogram saved to {}",
            style("✓").green(),
            config.output.histogram.display()
        ),
        Err(e) => warn!(
            "could not render '{}': {}",
            config.output.histogram.display(),
            e
        ),
    }

    Ok(())
}
