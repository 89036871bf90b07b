use super::detected_error::DetectedError;
use crate::error::{RankResult, RankingError};
use std::fmt;

/// How many errors a `First`/`Last` selector takes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Portion {
    /// Share of the error count in `[0, 1)`, truncated toward zero
    Fraction(f64),
    /// Absolute number of errors, clamped to the error count
    Count(usize),
}

impl Portion {
    /// Interpret a raw value: below 1 is a fraction, 1 and above a count.
    ///
    /// Counts must be whole numbers; negative and NaN values are rejected.
    pub fn from_value(value: f64) -> RankResult<Self> {
        if value.is_nan() || value < 0.0 {
            return Err(RankingError::Configuration {
                reason: format!("portion must be a non-negative number, got {value}"),
            });
        }
        if value < 1.0 {
            return Ok(Self::Fraction(value));
        }
        if value.fract() != 0.0 || value > usize::MAX as f64 {
            return Err(RankingError::Configuration {
                reason: format!("portion {value} is neither a fraction below 1 nor a whole count"),
            });
        }
        Ok(Self::Count(value as usize))
    }

    /// Number of errors selected out of `total`
    pub fn resolve(&self, total: usize) -> usize {
        match *self {
            Self::Fraction(f) => ((f * total as f64) as usize).min(total),
            Self::Count(n) => n.min(total),
        }
    }
}

impl From<usize> for Portion {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

/// Chooses which errors of a dataset go into a subset
pub enum SubsetSelector<'a> {
    Predicate(Box<dyn Fn(&DetectedError) -> bool + 'a>),
    First(Portion),
    Last(Portion),
}

impl<'a> SubsetSelector<'a> {
    pub fn filter(predicate: impl Fn(&DetectedError) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(predicate))
    }

    pub fn first(portion: impl Into<Portion>) -> Self {
        Self::First(portion.into())
    }

    pub fn last(portion: impl Into<Portion>) -> Self {
        Self::Last(portion.into())
    }

    /// Build a head/tail selector from optional raw values, exactly one of
    /// which must be present
    pub fn from_bounds(first: Option<f64>, last: Option<f64>) -> RankResult<Self> {
        match (first, last) {
            (Some(value), None) => Ok(Self::First(Portion::from_value(value)?)),
            (None, Some(value)) => Ok(Self::Last(Portion::from_value(value)?)),
            (None, None) => Err(RankingError::Configuration {
                reason: "one of `first` or `last` is required".to_string(),
            }),
            (Some(_), Some(_)) => Err(RankingError::Configuration {
                reason: "`first` and `last` are mutually exclusive".to_string(),
            }),
        }
    }

    /// Selection mask over `errors`, in order
    pub(crate) fn mask<'e, I>(&self, errors: I) -> Vec<bool>
    where
        I: ExactSizeIterator<Item = &'e DetectedError>,
    {
        let total = errors.len();
        match self {
            Self::Predicate(predicate) => errors.map(|e| predicate(e)).collect(),
            Self::First(portion) => {
                let size = portion.resolve(total);
                (0..total).map(|i| i < size).collect()
            }
            Self::Last(portion) => {
                let start = total - portion.resolve(total);
                (0..total).map(|i| i >= start).collect()
            }
        }
    }
}

impl fmt::Debug for SubsetSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::First(portion) => f.debug_tuple("First").field(portion).finish(),
            Self::Last(portion) => f.debug_tuple("Last").field(portion).finish(),
        }
    }
}
