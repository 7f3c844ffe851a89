//! End-to-end pipeline tests
//!
//! These tests run the library pipeline against small fixture texts in
//! isolated temp directories, the same composition the CLI entry points
//! use: load → segment → measure → fence → detect → explain → charts →
//! report file.

use proselens::report::ReportEntry;
use proselens::stats::Fence;
use proselens::tokenize::Language;
use proselens::{charts, corpus, detect, measure, report, stats, tokenize};
use std::path::Path;
use tempfile::TempDir;

/// Nine sentences whose word counts are [3, 4, 4, 5, 5, 5, 6, 7, 20]
const FIXTURE: &str = "Cats sleep often. Dogs bark at night. Birds sing every morning. \
Fish swim in cold water. Mice hide under old floors. Horses run across green fields. \
Rabbits dig deep burrows every spring. Foxes hunt alone during quiet winter nights. \
Elephants remember distant watering holes and travel great distances with their herds \
when the dry season makes food scarce everywhere.";

fn write_fixture(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    std::fs::write(&path, content).unwrap();
    path
}

fn measure_file(path: &Path) -> (Vec<String>, Vec<u32>) {
    let text = corpus::load_text(path);
    let sentences = tokenize::segment(&text, Language::English);
    let lengths = measure::sentence_lengths(&sentences);
    (sentences, lengths)
}

#[test]
fn test_full_pipeline_on_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, FIXTURE);

    let (sentences, lengths) = measure_file(&input);
    assert_eq!(lengths, vec![3, 4, 4, 5, 5, 5, 6, 7, 20]);

    let fence = Fence::from_lengths(&lengths).unwrap();
    assert_eq!(fence.q1, 4.0);
    assert_eq!(fence.q3, 6.0);
    assert_eq!(fence.iqr, 2.0);
    assert_eq!(fence.lower, 1.0);
    assert_eq!(fence.upper, 9.0);

    let outliers = detect::find_outliers(&sentences, &lengths, &fence);
    assert_eq!(outliers.len(), 1);
    assert_eq!(outliers[0].index, 9);
    assert_eq!(outliers[0].length, 20);
    assert!(outliers[0].text.starts_with("Elephants"));

    let mean = stats::mean(&lengths);
    let entries: Vec<ReportEntry> = outliers
        .iter()
        .map(|o| ReportEntry::build(o, mean))
        .collect();
    assert!(entries[0].explanation.contains("Very long relative to the mean"));

    // Charts and report land in the temp dir
    let hist = dir.path().join("hist_all_iqr.png");
    let scatter = dir.path().join("sent_len_scatter.png");
    let outlier_lengths: Vec<u32> = outliers.iter().map(|o| o.length).collect();
    charts::fence_histogram(&lengths, &fence, &outlier_lengths, &hist).unwrap();
    charts::scatter(&lengths, &fence, &scatter).unwrap();
    assert!(hist.metadata().unwrap().len() > 0);
    assert!(scatter.metadata().unwrap().len() > 0);

    let report_path = dir.path().join("outliers.txt");
    report::write(&report_path, mean, &fence, &entries).unwrap();
    let written = std::fs::read_to_string(&report_path).unwrap();
    assert!(written.starts_with("Mean length: 6.56"));
    assert!(written.contains("Q1=4.00, Q3=6.00, IQR=2.00"));
    assert!(written.contains("Bounds: < 1.00 or > 9.00"));
    assert!(written.contains("[9] 20 words"));
    assert!(written.contains("Elephants remember distant"));
}

#[test]
fn test_pipeline_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, FIXTURE);

    let (sentences_a, lengths_a) = measure_file(&input);
    let (sentences_b, lengths_b) = measure_file(&input);
    assert_eq!(sentences_a, sentences_b);
    assert_eq!(lengths_a, lengths_b);

    let fence_a = Fence::from_lengths(&lengths_a).unwrap();
    let fence_b = Fence::from_lengths(&lengths_b).unwrap();
    assert_eq!(fence_a, fence_b);

    let outliers_a = detect::find_outliers(&sentences_a, &lengths_a, &fence_a);
    let outliers_b = detect::find_outliers(&sentences_b, &lengths_b, &fence_b);
    assert_eq!(outliers_a, outliers_b);

    let mean = stats::mean(&lengths_a);
    let entries: Vec<ReportEntry> = outliers_a
        .iter()
        .map(|o| ReportEntry::build(o, mean))
        .collect();
    let render_a = report::render(mean, &fence_a, &entries);
    let render_b = report::render(mean, &fence_b, &entries);
    assert_eq!(render_a, render_b);
}

#[test]
fn test_empty_corpus_halts_before_statistics() {
    let dir = tempfile::tempdir().unwrap();

    // Missing file degrades to an empty corpus
    let (sentences, lengths) = measure_file(&dir.path().join("missing.txt"));
    assert!(sentences.is_empty());
    assert!(lengths.is_empty());
    assert_eq!(stats::mean(&lengths), 0.0);
    assert!(Fence::from_lengths(&lengths).is_none());

    // The renderer still leaves a placeholder artifact behind
    let hist = dir.path().join("hist.png");
    charts::histogram(&lengths, &hist).unwrap();
    assert!(hist.metadata().unwrap().len() > 0);
}

#[test]
fn test_uniform_lengths_use_widened_fence() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        &dir,
        "Same length here. Also three words. Again three words.",
    );

    let (sentences, lengths) = measure_file(&input);
    assert_eq!(lengths, vec![3, 3, 3]);

    let fence = Fence::from_lengths(&lengths).unwrap();
    assert_eq!(fence.lower, 2.0);
    assert_eq!(fence.upper, 4.0);
    assert!(detect::find_outliers(&sentences, &lengths, &fence).is_empty());
}

#[test]
fn test_unsupported_language_is_an_error() {
    assert!("martian".parse::<Language>().is_err());
}
