//! # suggestion-rank
//!
//! Data model and evaluation for ranking correction candidates of detected
//! errors (for example spelling or grammar suggestions).
//!
//! A [`Dataset`] holds detected errors, each with candidate corrections
//! described by a shared [`FeatureRegistry`]. An external model assigns a
//! confidence to every candidate; the crate then ranks the correct candidate
//! of each error and measures precision-at-n over the dataset.
//!
//! ## Quick Start
//!
//! ```rust
//! use suggestion_rank::{Cutoff, Dataset};
//!
//! let dataset: Dataset = "F1\nF2\n\nE1\nA\t0.1\t0.2\t1\nB\t0.4\t0.1\t0\n"
//!     .parse()
//!     .unwrap();
//!
//! dataset.set_confidences(&[0.9, 0.1]).unwrap();
//! assert_eq!(dataset.precision_at(1usize).unwrap(), 1.0);
//! assert_eq!(dataset.precision_at(Cutoff::Unbounded).unwrap(), 1.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`suggest`] - Features, candidates, errors, datasets and ranking
//! - [`format`] - Tab-separated text format
//! - [`config`] - Evaluation settings loaded from TOML
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types

/// Command-line interface and argument parsing
pub mod cli;
/// Evaluation configuration
pub mod config;
/// Error types and handling utilities
pub mod error;
/// Dataset text format
pub mod format;
/// Ranking data model and evaluation
pub mod suggest;

pub use config::EvaluationConfig;
pub use error::{IoContext, ParseError, RankResult, RankingError};
pub use suggest::{
    class_balance_weights, Candidate, Confidence, ConfidencePredictor, Cutoff, Dataset,
    DatasetStatistics, DetectedError, ErrorId, Feature, FeatureKey, FeatureLookup,
    FeatureRegistry, FeatureScorer, Portion, PrecisionPoint, PrecisionReport, SubsetSelector,
    TrainingSet,
};
