use serde::{Deserialize, Serialize};
use std::fmt;

/// Model-assigned score for a candidate; unset until a prediction stage writes it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Confidence {
    #[default]
    Unset,
    Set(f64),
}

impl Confidence {
    /// Raw value reported for an unset confidence; never a valid score
    pub const UNSET_SENTINEL: f64 = -1.0;

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Unset => None,
            Self::Set(v) => Some(*v),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// The score, or [`Self::UNSET_SENTINEL`] while unset
    pub fn to_raw(&self) -> f64 {
        self.value().unwrap_or(Self::UNSET_SENTINEL)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::Set(value)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Set(v) => write!(f, "{v}"),
        }
    }
}

/// One proposed correction for a detected error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    /// One value per registered feature, indexed by feature id
    pub feature_values: Vec<f64>,
    /// Ground truth: is this candidate the correct fix
    pub label: bool,
    #[serde(default)]
    pub confidence: Confidence,
}

impl Candidate {
    pub fn new(name: impl Into<String>, feature_values: Vec<f64>, label: bool) -> Self {
        Self {
            name: name.into(),
            feature_values,
            label,
            confidence: Confidence::Unset,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Confidence::Set(confidence);
        self
    }

    /// Label as the 0/1 integer expected by training code
    pub fn label_value(&self) -> u8 {
        u8::from(self.label)
    }
}
