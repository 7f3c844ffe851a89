//! Sentence length extraction
//!
//! Maps each sentence to its word count. A tokenization failure on one
//! sentence must not abort the run: the failure is logged with the
//! sentence's 1-based index and recorded as length 0, keeping the lengths
//! vector parallel to the sentence list.

use crate::tokenize;
use tracing::warn;

/// Word lengths for `sentences`, order-preserving, one entry per sentence.
pub fn sentence_lengths(sentences: &[String]) -> Vec<u32> {
    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| match tokenize::count_words(sentence) {
            Ok(length) => length,
            Err(e) => {
                warn!("could not tokenize sentence #{}: {}", i + 1, e);
                0
            }
        })
        .collect()
}
