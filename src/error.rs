//! Error types for dataset construction, ranking and evaluation.
//!
//! Every failure in the library is a [`RankingError`]. Malformed data files
//! produce a [`ParseError`] carrying the offending line number, which is
//! wrapped into [`RankingError::Parse`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for suggestion ranking operations
#[derive(Error, Debug)]
pub enum RankingError {
    #[error("feature '{name}' is already registered")]
    DuplicateFeature { name: String },

    #[error("no feature registered for {key}")]
    NotFound { key: String },

    #[error("{actual} confidence values given for {expected} candidates")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("candidate '{candidate}' has {actual} feature values, registry holds {expected} features")]
    FeatureDimension {
        candidate: String,
        expected: usize,
        actual: usize,
    },

    #[error("nothing to rank: no candidates available")]
    NoCandidates,

    #[error("error '{error}' has candidates with unset confidence")]
    UnsetConfidence { error: String },

    #[error("error '{error}' has no correct candidate to weight")]
    NoCorrectCandidate { error: String },

    #[error("precision cutoff must be positive")]
    InvalidCutoff,

    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    #[error("name {name:?} cannot be written: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("malformed dataset: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error during {operation}{}", display_path(.path))]
    Io {
        operation: String,
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file {}", .path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("confidence predictor failed")]
    Predictor(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" on {}", p.display()),
        None => String::new(),
    }
}

/// Malformed rows in the dataset text format
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: candidate found before any error header")]
    CandidateOutsideError { line: usize },

    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid feature value '{value}'")]
    InvalidFeatureValue { line: usize, value: String },

    #[error("line {line}: label must be 0 or 1, found '{value}'")]
    InvalidLabel { line: usize, value: String },
}

impl ParseError {
    /// The 1-based line number the error was raised at
    pub fn line(&self) -> usize {
        match self {
            Self::CandidateOutsideError { line }
            | Self::FieldCount { line, .. }
            | Self::InvalidFeatureValue { line, .. }
            | Self::InvalidLabel { line, .. } => *line,
        }
    }
}

/// Result type alias for ranking operations
pub type RankResult<T> = Result<T, RankingError>;

/// Helper trait for attaching context to IO failures
pub trait IoContext<T> {
    fn io_context(self, operation: &str, path: Option<PathBuf>) -> RankResult<T>;
}

impl<T> IoContext<T> for Result<T, io::Error> {
    fn io_context(self, operation: &str, path: Option<PathBuf>) -> RankResult<T> {
        self.map_err(|source| RankingError::Io {
            operation: operation.to_string(),
            path,
            source,
        })
    }
}

// Allow using ? with io::Error
impl From<io::Error> for RankingError {
    fn from(source: io::Error) -> Self {
        Self::Io {
            operation: "unspecified".to_string(),
            path: None,
            source,
        }
    }
}
