//! Proselens - sentence-length statistics and outlier analysis
//!
//! A small, local-first text analysis tool that measures how long the
//! sentences of a UTF-8 text file are (in words), computes descriptive
//! statistics, and flags unusually short or long sentences with the
//! classic 1.5×IQR boxplot rule.
//!
//! The library exposes the pipeline stages individually so the two CLI
//! entry points (`analyze` and `outliers`) and the integration tests can
//! compose them with injected paths and languages:
//! load text → segment into sentences → measure word lengths → compute the
//! IQR fence → detect and explain outliers → render charts → write report.

pub mod charts;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod detect;
pub mod explain;
pub mod measure;
pub mod report;
pub mod stats;
pub mod tokenize;
