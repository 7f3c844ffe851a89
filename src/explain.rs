//! Outlier explanations
//!
//! Maps structural features of an outlier sentence to short human-readable
//! reasons. The rules are deliberately simple and unweighted; every rule is
//! evaluated and all matching reasons are concatenated in a fixed order.
//! The exact thresholds and ordering are part of the observable contract,
//! so they must not be tuned.

use regex::Regex;
use std::sync::OnceLock;

static ABBR_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Abbreviation-like token: a word immediately followed by a period
fn abbr_pattern() -> &'static Regex {
    ABBR_PATTERN.get_or_init(|| Regex::new(r"\b\w+\.").unwrap())
}

/// Coarse structural features of a sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceFeatures {
    pub chars: usize,
    pub commas: usize,
    pub semicolons: usize,
    pub dashes: usize,
    pub parens: usize,
    pub quotes: usize,
    pub digits: usize,
    pub abbr_like: usize,
}

impl SentenceFeatures {
    /// Scan a sentence for the feature counts used by the explainer.
    pub fn scan(text: &str) -> Self {
        let count = |target: char| text.chars().filter(|&c| c == target).count();
        Self {
            chars: text.chars().count(),
            commas: count(','),
            semicolons: count(';'),
            dashes: count('—') + count('-'),
            parens: count('(') + count(')'),
            quotes: count('"') + count('«') + count('»') + count('\''),
            digits: text.chars().filter(|c| c.is_ascii_digit()).count(),
            abbr_like: abbr_pattern().find_iter(text).count(),
        }
    }
}

/// Build the explanation string for an outlier sentence.
///
/// `length` is the sentence's word count, `mean` the corpus-wide mean.
pub fn explain(length: u32, mean: f64, features: &SentenceFeatures) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    // Relation to the mean; the two branches cannot both fire
    let short_cutoff = ((mean * 0.5) as i64).max(1);
    let long_cutoff = (mean * 1.5) as i64 + 1;
    if (length as i64) <= short_cutoff {
        reasons.push("Very short relative to the mean, possibly a clipped phrase or a heading.");
    } else if (length as i64) >= long_cutoff {
        reasons.push("Very long relative to the mean, looks like several thoughts merged into one.");
    }

    // Structural reasons
    if features.commas + features.semicolons >= 2 {
        reasons.push("Many enumerations or asides (lots of commas and semicolons).");
    }
    if features.dashes >= 1 {
        reasons.push("Contains a dash, which often stretches a sentence with clarifications.");
    }
    if features.parens >= 2 {
        reasons.push("Contains parenthetical insertions, which add to the length.");
    }
    if features.abbr_like >= 1 {
        reasons.push("Contains abbreviation-like tokens ('word.'), so tokenization may have shortened the word count.");
    }
    if features.digits >= 1 {
        reasons.push("Contains digits, which the word counter filters out, so the length may be understated.");
    }

    if reasons.is_empty() {
        reasons.push("On the border of typical lengths, a rare but possible case.");
    }
    reasons.join(" ")
}
