//! CLI command definitions and handlers

mod analyze;
mod init;
mod outliers;

use crate::config::AnalysisConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Proselens - sentence-length statistics and outlier analysis
#[derive(Parser, Debug)]
#[command(name = "proselens")]
#[command(
    version,
    about = "Word-count statistics over the sentences of a text file, with IQR outlier detection",
    after_help = "\
Examples:
  proselens analyze                    Analyze input.txt, write hist.png
  proselens analyze essay.txt -l russian
  proselens outliers                   Full IQR outlier report with charts
  proselens outliers essay.txt -o anomalies.txt
  proselens init                       Write a proselens.toml starter config

Configuration is read from proselens.toml in the working directory when
present; CLI flags override it. Set RUST_LOG=debug for diagnostics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-sentence word counts, mean length, and a distribution histogram
    Analyze {
        /// Text file to analyze (default: input.txt or proselens.toml)
        input: Option<PathBuf>,

        /// Tokenization language: english, russian
        #[arg(long, short = 'l')]
        language: Option<String>,
    },

    /// IQR outlier report: statistics, annotated charts, explanations
    Outliers {
        /// Text file to analyze (default: input.txt or proselens.toml)
        input: Option<PathBuf>,

        /// Tokenization language: english, russian
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// Where to write the text report (default: outliers.txt)
        #[arg(long, short = 'o')]
        report: Option<PathBuf>,
    },

    /// Initialize a proselens.toml config file with the default settings
    Init,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = AnalysisConfig::load(Path::new("."));

    match cli.command {
        Commands::Analyze { input, language } => {
            if let Some(input) = input {
                config.input = Some(input);
            }
            if let Some(language) = language {
                config.language = Some(language);
            }
            analyze::run(&config)
        }
        Commands::Outliers {
            input,
            language,
            report,
        } => {
            if let Some(input) = input {
                config.input = Some(input);
            }
            if let Some(language) = language {
                config.language = Some(language);
            }
            if let Some(report) = report {
                config.output.report = report;
            }
            outliers::run(&config)
        }
        Commands::Init => init::run(),
    }
}
