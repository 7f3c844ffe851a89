//! IQR outlier detection over the measured sentences

use crate::stats::Fence;

/// A sentence whose word length falls outside the fence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outlier {
    /// 1-based position in the sentence sequence
    pub index: usize,
    /// Sentence text as segmented
    pub text: String,
    /// Word length (alphabetic tokens)
    pub length: u32,
}

/// Collect every sentence outside the fence, in sentence order.
///
/// An empty result is a valid terminal state for the pipeline, not an error.
pub fn find_outliers(sentences: &[String], lengths: &[u32], fence: &Fence) -> Vec<Outlier> {
    sentences
        .iter()
        .zip(lengths)
        .enumerate()
        .filter(|(_, (_, &length))| fence.is_outlier(length))
        .map(|(i, (text, &length))| Outlier {
            index: i + 1,
            text: text.clone(),
            length,
        })
        .collect()
}
