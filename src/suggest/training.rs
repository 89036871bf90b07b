//! The narrow surface shared with external model code.
//!
//! Trainers read a [`TrainingSet`]; predictors implement
//! [`ConfidencePredictor`] and are applied with [`Dataset::apply_predictor`],
//! which keeps predictions aligned with the rows they were computed from.

use super::dataset::Dataset;
use super::feature::FeatureRegistry;
use crate::error::{RankResult, RankingError};
use serde::Serialize;
use tracing::debug;

/// Row-aligned training inputs: one row per candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSet {
    pub feature_names: Vec<String>,
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<u8>,
    /// Class-imbalance sample weights, present when requested
    pub weights: Option<Vec<f64>>,
}

impl TrainingSet {
    /// Package the dataset's rows and labels.
    ///
    /// Weights are pooled over all labels of the dataset, so errors without
    /// a correct candidate are fine as long as some candidate is correct.
    pub fn from_dataset(dataset: &Dataset, weighted: bool) -> RankResult<Self> {
        let weights = if weighted {
            Some(dataset.pooled_feature_weights()?)
        } else {
            None
        };
        Ok(Self {
            feature_names: dataset
                .registry()
                .names()
                .into_iter()
                .map(String::from)
                .collect(),
            features: dataset.feature_values(),
            labels: dataset.labels().into_iter().map(u8::from).collect(),
            weights,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Produces one confidence per feature row
pub trait ConfidencePredictor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, Self::Error>;
}

/// Baseline predictor scoring each candidate by a single feature value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureScorer {
    index: usize,
}

impl FeatureScorer {
    /// Score by the feature at `index`, which must be registered
    pub fn new(registry: &FeatureRegistry, index: usize) -> RankResult<Self> {
        registry.feature(index)?;
        Ok(Self { index })
    }

    pub fn by_name(registry: &FeatureRegistry, name: &str) -> RankResult<Self> {
        let index = registry.index_of(name)?;
        Ok(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl ConfidencePredictor for FeatureScorer {
    type Error = RankingError;

    /// Fails on rows too short to hold the scored column
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, Self::Error> {
        rows.iter()
            .map(|row| {
                row.get(self.index).copied().ok_or_else(|| RankingError::NotFound {
                    key: format!("feature index {} in a row of {} values", self.index, row.len()),
                })
            })
            .collect()
    }
}

impl Dataset {
    /// Score every candidate with `predictor` and store the confidences
    pub fn apply_predictor<P: ConfidencePredictor>(&self, predictor: &P) -> RankResult<Vec<f64>> {
        let rows = self.feature_values();
        let confidences = predictor
            .predict(&rows)
            .map_err(|e| RankingError::Predictor(Box::new(e)))?;
        debug!(rows = rows.len(), "applying predicted confidences");
        self.set_confidences(&confidences)?;
        Ok(confidences)
    }
}
