//! Analysis configuration
//!
//! Loads optional per-directory configuration from a `proselens.toml` file
//! and merges it with CLI flag overrides. Every field has a default, so the
//! tool works out of the box on `input.txt` in the current directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # proselens.toml
//! input = "input.txt"
//! language = "english"
//!
//! [output]
//! histogram = "hist.png"
//! fence_histogram = "hist_all_iqr.png"
//! scatter = "sent_len_scatter.png"
//! report = "outliers.txt"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "proselens.toml";

/// Output artifact paths
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputPaths {
    /// Plain distribution histogram written by `analyze`
    pub histogram: PathBuf,
    /// Histogram with IQR bounds and outlier rug marks written by `outliers`
    pub fence_histogram: PathBuf,
    /// Index-vs-length scatter chart written by `outliers`
    pub scatter: PathBuf,
    /// Plain-text outlier report written by `outliers`
    pub report: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            histogram: PathBuf::from("hist.png"),
            fence_histogram: PathBuf::from("hist_all_iqr.png"),
            scatter: PathBuf::from("sent_len_scatter.png"),
            report: PathBuf::from("outliers.txt"),
        }
    }
}

/// Full analysis configuration passed into the pipeline entry points
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Text file to analyze
    pub input: Option<PathBuf>,
    /// Tokenization locale tag (e.g. "english", "russian")
    pub language: Option<String>,
    /// Output artifact paths
    pub output: OutputPaths,
}

impl AnalysisConfig {
    /// Input path, falling back to the default `input.txt`
    pub fn input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from("input.txt"))
    }

    /// Language tag, falling back to `english`
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("english")
    }

    /// Load configuration from `proselens.toml` in `dir`, if present.
    ///
    /// A missing file yields the defaults. A malformed file is logged as a
    /// warning and also yields the defaults, so a typo in the config never
    /// blocks an analysis run.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!("no {} found in {}", CONFIG_FILE, dir.display());
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
