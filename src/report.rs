//! Console summary and plain-text outlier report
//!
//! The console output is part of the observable contract: per-sentence
//! count lines, the statistics block, and per-outlier diagnostic lines are
//! what tests (and users) assert on. The report file mirrors the console
//! diagnostics with the sentence text flattened onto one line.

use crate::detect::Outlier;
use crate::explain::{self, SentenceFeatures};
use crate::stats::Fence;
use std::fmt::Write as _;
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// One fully explained outlier, ready for printing and report writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub index: usize,
    pub length: u32,
    pub chars: usize,
    pub explanation: String,
    pub text: String,
}

impl ReportEntry {
    /// Attach features and an explanation to a detected outlier.
    pub fn build(outlier: &Outlier, mean: f64) -> Self {
        let features = SentenceFeatures::scan(&outlier.text);
        let explanation = explain::explain(outlier.length, mean, &features);
        Self {
            index: outlier.index,
            length: outlier.length,
            chars: features.chars,
            explanation,
            text: outlier.text.clone(),
        }
    }
}

/// Print one line per sentence with its word count, in corpus order.
pub fn print_sentence_counts(sentences: &[String], lengths: &[u32]) {
    for (i, (sentence, length)) in sentences.iter().zip(lengths).enumerate() {
        println!("{}) {} words | {}", i + 1, length, sentence);
    }
}

/// Print the statistics summary block.
pub fn print_summary(sentence_count: usize, mean: f64, fence: &Fence) {
    println!("\n{BOLD}=== Sentence length statistics (words) ==={RESET}");
    println!("Total sentences: {sentence_count}");
    println!("Mean length: {mean:.2}");
    println!(
        "Q1={:.2}, Q3={:.2}, IQR={:.2}",
        fence.q1, fence.q3, fence.iqr
    );
    println!(
        "Outlier bounds: < {:.2} or > {:.2}\n",
        fence.lower, fence.upper
    );
}

/// Print the per-outlier diagnostic block.
pub fn print_outliers(entries: &[ReportEntry]) {
    println!("Outliers found: {}\n", entries.len());
    for entry in entries {
        println!(
            "[{}] {} words | {} chars | reasons: {}",
            entry.index, entry.length, entry.chars, entry.explanation
        );
        println!("     {DIM}\"{}\"{RESET}\n", entry.text);
    }
}

/// Render the report file content.
pub fn render(mean: f64, fence: &Fence, entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mean length: {mean:.2}");
    let _ = writeln!(
        out,
        "Q1={:.2}, Q3={:.2}, IQR={:.2}",
        fence.q1, fence.q3, fence.iqr
    );
    let _ = writeln!(out, "Bounds: < {:.2} or > {:.2}", fence.lower, fence.upper);
    let _ = writeln!(out);

    for entry in entries {
        let _ = writeln!(
            out,
            "[{}] {} words | {} chars | {}",
            entry.index, entry.length, entry.chars, entry.explanation
        );
        let _ = writeln!(out, "{}", entry.text.replace('\n', " "));
        let _ = writeln!(out);
    }
    out
}

/// Write the report file. The caller treats failures as non-fatal warnings.
pub fn write(path: &Path, mean: f64, fence: &Fence, entries: &[ReportEntry]) -> std::io::Result<()> {
    std::fs::write(path, render(mean, fence, entries))
}
