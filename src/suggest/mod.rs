pub mod candidate;
pub mod dataset;
pub mod detected_error;
pub mod evaluation;
pub mod feature;
pub mod statistics;
pub mod subset;
pub mod training;
pub mod weighting;

pub use candidate::{Candidate, Confidence};
pub use dataset::{Dataset, ErrorId};
pub use detected_error::DetectedError;
pub use evaluation::{Cutoff, PrecisionPoint, PrecisionReport};
pub use feature::{Feature, FeatureKey, FeatureLookup, FeatureRegistry};
pub use statistics::DatasetStatistics;
pub use subset::{Portion, SubsetSelector};
pub use training::{ConfidencePredictor, FeatureScorer, TrainingSet};
pub use weighting::class_balance_weights;
