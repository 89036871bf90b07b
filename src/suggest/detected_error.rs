use super::candidate::{Candidate, Confidence};
use super::weighting::class_balance_weights;
use crate::error::{RankResult, RankingError};
use serde::{Deserialize, Serialize};

/// A detected text error together with its pool of correction candidates.
///
/// Candidate order is significant: confidences are assigned and reported
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedError {
    pub name: String,
    pub candidates: Vec<Candidate>,
}

impl DetectedError {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            candidates: Vec::new(),
        }
    }

    pub fn with_candidates(name: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            name: name.into(),
            candidates,
        }
    }

    pub fn add(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn feature_values(&self) -> Vec<Vec<f64>> {
        self.candidates
            .iter()
            .map(|c| c.feature_values.clone())
            .collect()
    }

    pub fn labels(&self) -> Vec<bool> {
        self.candidates.iter().map(|c| c.label).collect()
    }

    pub fn confidences(&self) -> Vec<Confidence> {
        self.candidates.iter().map(|c| c.confidence).collect()
    }

    /// Assign confidences element-wise in candidate order
    pub fn set_confidences(&mut self, values: &[f64]) -> RankResult<()> {
        if values.len() != self.candidates.len() {
            return Err(RankingError::LengthMismatch {
                expected: self.candidates.len(),
                actual: values.len(),
            });
        }
        for (candidate, &value) in self.candidates.iter_mut().zip(values) {
            candidate.confidence = Confidence::Set(value);
        }
        Ok(())
    }

    pub fn clear_confidences(&mut self) {
        for candidate in &mut self.candidates {
            candidate.confidence = Confidence::Unset;
        }
    }

    /// Class-imbalance training weights for this error's candidates
    pub fn feature_weights(&self) -> RankResult<Vec<f64>> {
        class_balance_weights(&self.labels()).ok_or_else(|| RankingError::NoCorrectCandidate {
            error: self.name.clone(),
        })
    }

    pub fn has_correct_candidate(&self) -> bool {
        self.candidates.iter().any(|c| c.label)
    }

    pub fn correct_candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(|c| c.label)
    }

    /// 1-based position of the best-scoring correct candidate.
    ///
    /// Candidates tied with the best correct confidence do not push it down;
    /// only strictly greater confidences count. An error without a correct
    /// candidate is measured against a best confidence of zero.
    pub fn rank(&self) -> RankResult<usize> {
        if self.candidates.is_empty() {
            return Err(RankingError::NoCandidates);
        }
        let scores = self
            .candidates
            .iter()
            .map(|c| c.confidence.value().map(|v| (c.label, v)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| RankingError::UnsetConfidence {
                error: self.name.clone(),
            })?;

        let best_true = scores
            .iter()
            .map(|&(label, v)| if label { v } else { 0.0 })
            .fold(f64::NEG_INFINITY, f64::max);
        let above = scores.iter().filter(|&&(_, v)| v > best_true).count();
        Ok(above + 1)
    }
}
