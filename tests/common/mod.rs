#![allow(dead_code)]

use std::path::PathBuf;
use suggestion_rank::{Candidate, Dataset, DetectedError, FeatureRegistry};

/// Shared test utilities to reduce duplication across test files
pub mod test_helpers {
    use super::*;

    /// Path of a file under `tests/fixtures`
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// The two-error, three-feature dataset in `sample.txt`
    pub fn sample_dataset() -> Dataset {
        Dataset::read(fixture_path("sample.txt")).expect("sample fixture parses")
    }

    /// A dataset with one feature where each error is given as the label of
    /// its candidates; feature values count up from zero
    pub fn labelled_dataset(errors: &[&[bool]]) -> Dataset {
        let registry = FeatureRegistry::from_names(["score"]).unwrap();
        let errors = errors
            .iter()
            .enumerate()
            .map(|(i, labels)| {
                let candidates = labels
                    .iter()
                    .enumerate()
                    .map(|(j, &label)| Candidate::new(format!("c{i}_{j}"), vec![j as f64], label))
                    .collect();
                DetectedError::with_candidates(format!("e{i}"), candidates)
            })
            .collect();
        Dataset::from_errors(registry, errors).unwrap()
    }

    /// Raw confidences of every candidate, unset ones as the sentinel
    pub fn raw_confidences(dataset: &Dataset) -> Vec<f64> {
        dataset.confidences().iter().map(|c| c.to_raw()).collect()
    }
}
