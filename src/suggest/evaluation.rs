use crate::error::RankingError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Rank threshold for precision-at-n
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cutoff {
    /// Hit when the correct candidate ranks at or above this position
    Top(usize),
    /// Hit when a correct candidate exists at all; confidences are ignored
    Unbounded,
}

impl From<usize> for Cutoff {
    fn from(n: usize) -> Self {
        Self::Top(n)
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

impl FromStr for Cutoff {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inf" | "all" | "unbounded" => Ok(Self::Unbounded),
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Top(n)),
                _ => Err(RankingError::Configuration {
                    reason: format!("cutoff must be a positive integer or 'inf', got '{other}'"),
                }),
            },
        }
    }
}

impl Serialize for Cutoff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Top(n) => serializer.serialize_u64(*n as u64),
            Self::Unbounded => serializer.serialize_str("inf"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecisionPoint {
    pub cutoff: Cutoff,
    pub precision: f64,
}

/// Precision of one dataset at several cutoffs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionReport {
    pub errors: usize,
    pub candidates: usize,
    pub points: Vec<PrecisionPoint>,
}

impl PrecisionReport {
    pub fn precision(&self, cutoff: Cutoff) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.cutoff == cutoff)
            .map(|p| p.precision)
    }
}

impl fmt::Display for PrecisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "errors: {}, candidates: {}", self.errors, self.candidates)?;
        for point in &self.points {
            writeln!(f, "P@{:<5} {:.4}", point.cutoff.to_string(), point.precision)?;
        }
        Ok(())
    }
}
