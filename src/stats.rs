//! Descriptive statistics over sentence-length distributions
//!
//! Quartiles use linear interpolation between the two nearest ranks, so the
//! results line up with the usual scientific-computing convention. Outlier
//! bounds follow the boxplot method: values beyond 1.5×IQR from the
//! quartiles are flagged. When the IQR collapses to zero (all lengths
//! equal) the fence is widened by one on each side instead, so a later
//! variation in the data can still be classified.

/// Arithmetic mean. Zero for an empty slice; statistical callers are
/// expected to guard the empty case before reading any further.
pub fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Percentile of pre-sorted data by linear interpolation.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = pct / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// IQR outlier fence derived once per distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fence {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Fence {
    /// Compute the fence for a length distribution. `None` when empty.
    pub fn from_lengths(lengths: &[u32]) -> Option<Fence> {
        if lengths.is_empty() {
            return None;
        }

        let mut sorted: Vec<f64> = lengths.iter().map(|&v| v as f64).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = percentile(&sorted, 25.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;

        let (lower, upper) = if iqr == 0.0 {
            // All lengths equal: widen by one so the fence stays usable
            (q1 - 1.0, q3 + 1.0)
        } else {
            (q1 - 1.5 * iqr, q3 + 1.5 * iqr)
        };

        Some(Fence {
            q1,
            q3,
            iqr,
            lower,
            upper,
        })
    }

    /// Is a length outside the fence?
    pub fn is_outlier(&self, length: u32) -> bool {
        let l = length as f64;
        l < self.lower || l > self.upper
    }
}
