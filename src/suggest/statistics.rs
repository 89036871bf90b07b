use super::detected_error::DetectedError;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Summary counts over a dataset's errors and candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub features: usize,
    pub errors: usize,
    pub candidates: usize,
    pub correct_candidates: usize,
    pub errors_without_candidates: usize,
    pub errors_with_correct_candidate: usize,
    pub max_candidates_per_error: usize,
    pub avg_candidates_per_error: f64,
    /// Candidates whose confidence has been written
    pub scored_candidates: usize,
}

impl DatasetStatistics {
    pub fn collect<I, E>(features: usize, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Deref<Target = DetectedError>,
    {
        let mut stats = Self {
            features,
            ..Self::default()
        };

        for error in errors {
            stats.errors += 1;
            stats.candidates += error.len();
            stats.max_candidates_per_error = stats.max_candidates_per_error.max(error.len());
            if error.is_empty() {
                stats.errors_without_candidates += 1;
            }
            if error.has_correct_candidate() {
                stats.errors_with_correct_candidate += 1;
            }
            stats.correct_candidates += error.correct_candidates().count();
            stats.scored_candidates += error
                .candidates
                .iter()
                .filter(|c| c.confidence.is_set())
                .count();
        }

        stats.avg_candidates_per_error = if stats.errors == 0 {
            0.0
        } else {
            stats.candidates as f64 / stats.errors as f64
        };
        stats
    }

    /// Share of errors that have a correct candidate at all
    pub fn coverage(&self) -> f64 {
        if self.errors == 0 {
            0.0
        } else {
            self.errors_with_correct_candidate as f64 / self.errors as f64
        }
    }
}
