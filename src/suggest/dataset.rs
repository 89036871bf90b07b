//! Datasets of detected errors.
//!
//! All errors parsed or pushed into a dataset live in one shared arena.
//! A [`Dataset`] is an ordered list of ids into that arena plus the feature
//! registry, so subsets and complements are cheap views: writing a
//! confidence through one view is visible through every other view holding
//! the same error.
//!
//! Datasets are single-threaded (`Rc`/`RefCell`). Holding the guard
//! returned by [`Dataset::error_mut`] while calling any other method on a
//! view of the same arena panics, as with any `RefCell`.

use super::candidate::{Candidate, Confidence};
use super::detected_error::DetectedError;
use super::evaluation::{Cutoff, PrecisionPoint, PrecisionReport};
use super::feature::FeatureRegistry;
use super::statistics::DatasetStatistics;
use super::subset::SubsetSelector;
use super::weighting::class_balance_weights;
use crate::error::{RankResult, RankingError};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tracing::debug;

/// Identifies an error inside a dataset's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorId(usize);

impl ErrorId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An ordered view over detected errors sharing one feature registry.
///
/// `Clone` produces another view over the same errors, not a deep copy.
#[derive(Debug, Clone)]
pub struct Dataset {
    registry: Rc<FeatureRegistry>,
    arena: Rc<RefCell<Vec<DetectedError>>>,
    members: Vec<ErrorId>,
}

impl Dataset {
    pub fn new(registry: FeatureRegistry) -> Self {
        Self {
            registry: Rc::new(registry),
            arena: Rc::new(RefCell::new(Vec::new())),
            members: Vec::new(),
        }
    }

    /// Build a dataset, checking every candidate against the registry size
    pub fn from_errors(registry: FeatureRegistry, errors: Vec<DetectedError>) -> RankResult<Self> {
        let mut dataset = Self::new(registry);
        for error in errors {
            dataset.push(error)?;
        }
        Ok(dataset)
    }

    /// Append an error to this view and the shared arena
    pub fn push(&mut self, error: DetectedError) -> RankResult<ErrorId> {
        self.check_width(&error.candidates)?;

        let mut arena = self.arena.borrow_mut();
        let id = ErrorId(arena.len());
        arena.push(error);
        self.members.push(id);
        Ok(id)
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Arena ids of the errors in this view, in order
    pub fn ids(&self) -> &[ErrorId] {
        &self.members
    }

    /// Whether both views draw from the same error arena
    pub fn shares_errors_with(&self, other: &Dataset) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }

    /// The error at `position` within this view
    pub fn error(&self, position: usize) -> Option<Ref<'_, DetectedError>> {
        let id = *self.members.get(position)?;
        Some(Ref::map(self.arena.borrow(), |arena| &arena[id.0]))
    }

    /// Append a candidate to the error at `position` after checking its
    /// width against the registry
    pub fn add_candidate(&self, position: usize, candidate: Candidate) -> RankResult<()> {
        self.check_width(std::slice::from_ref(&candidate))?;
        let mut error = self.error_mut(position).ok_or_else(|| RankingError::NotFound {
            key: format!("error position {position}"),
        })?;
        error.add(candidate);
        Ok(())
    }

    /// Mutable access to the error at `position`; visible through every view.
    ///
    /// Candidates added through the returned reference skip the feature width
    /// check done by [`Dataset::push`] and [`Dataset::add_candidate`].
    pub fn error_mut(&self, position: usize) -> Option<RefMut<'_, DetectedError>> {
        let id = *self.members.get(position)?;
        Some(RefMut::map(self.arena.borrow_mut(), |arena| &mut arena[id.0]))
    }

    pub fn errors(&self) -> impl Iterator<Item = Ref<'_, DetectedError>> + '_ {
        self.members
            .iter()
            .map(move |id| Ref::map(self.arena.borrow(), |arena| &arena[id.0]))
    }

    pub fn error_names(&self) -> Vec<String> {
        self.map_errors(|e| e.name.clone())
    }

    pub fn candidate_count(&self) -> usize {
        self.map_errors(DetectedError::len).into_iter().sum()
    }

    pub fn feature_values(&self) -> Vec<Vec<f64>> {
        self.map_errors(DetectedError::feature_values)
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn labels(&self) -> Vec<bool> {
        self.map_errors(DetectedError::labels)
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn confidences(&self) -> Vec<Confidence> {
        self.map_errors(DetectedError::confidences)
            .into_iter()
            .flatten()
            .collect()
    }

    /// Assign a flat sequence of confidences in `feature_values` row order.
    ///
    /// The length is checked against the total candidate count before any
    /// error is touched.
    pub fn set_confidences(&self, values: &[f64]) -> RankResult<()> {
        let expected = self.candidate_count();
        if values.len() != expected {
            return Err(RankingError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }

        let mut arena = self.arena.borrow_mut();
        let mut offset = 0;
        for id in &self.members {
            let error = &mut arena[id.0];
            let end = offset + error.len();
            error.set_confidences(&values[offset..end])?;
            offset = end;
        }
        Ok(())
    }

    pub fn clear_confidences(&self) {
        let mut arena = self.arena.borrow_mut();
        for id in &self.members {
            arena[id.0].clear_confidences();
        }
    }

    /// Per-error class-imbalance weights, concatenated
    pub fn feature_weights(&self) -> RankResult<Vec<f64>> {
        let mut weights = Vec::with_capacity(self.candidate_count());
        for per_error in self.map_errors(DetectedError::feature_weights) {
            weights.extend(per_error?);
        }
        Ok(weights)
    }

    /// Class-imbalance weights computed once over the dataset-wide labels
    pub fn pooled_feature_weights(&self) -> RankResult<Vec<f64>> {
        class_balance_weights(&self.labels()).ok_or_else(|| RankingError::NoCorrectCandidate {
            error: format!("<dataset of {} errors>", self.len()),
        })
    }

    /// A view over the selected errors, in their original order
    pub fn subset(&self, selector: &SubsetSelector<'_>) -> Dataset {
        self.split(selector).0
    }

    /// The selected errors and their complement, each in original order
    pub fn split(&self, selector: &SubsetSelector<'_>) -> (Dataset, Dataset) {
        let mask = {
            let arena = self.arena.borrow();
            selector.mask(self.members.iter().map(|id| &arena[id.0]))
        };

        let mut selected = Vec::new();
        let mut rest = Vec::new();
        for (&id, keep) in self.members.iter().zip(mask) {
            if keep {
                selected.push(id);
            } else {
                rest.push(id);
            }
        }
        debug!(
            ?selector,
            selected = selected.len(),
            complement = rest.len(),
            "split dataset"
        );
        (self.view(selected), self.view(rest))
    }

    /// Rank of each error; `None` for errors without candidates
    pub fn ranks(&self) -> RankResult<Vec<Option<usize>>> {
        self.map_errors(|error| match error.rank() {
            Ok(rank) => Ok(Some(rank)),
            Err(RankingError::NoCandidates) => Ok(None),
            Err(other) => Err(other),
        })
        .into_iter()
        .collect()
    }

    /// Fraction of errors whose correct candidate ranks within `cutoff`.
    ///
    /// [`Cutoff::Unbounded`] ignores confidences and counts errors having
    /// any correct candidate. A finite cutoff requires confidences on every
    /// candidate; errors without candidates are counted as misses.
    pub fn precision_at(&self, cutoff: impl Into<Cutoff>) -> RankResult<f64> {
        if self.is_empty() {
            return Err(RankingError::NoCandidates);
        }

        let hits = match cutoff.into() {
            Cutoff::Top(0) => return Err(RankingError::InvalidCutoff),
            Cutoff::Unbounded => self
                .map_errors(DetectedError::has_correct_candidate)
                .into_iter()
                .filter(|&hit| hit)
                .count(),
            Cutoff::Top(n) => {
                let mut hits = 0;
                for (name, rank) in self.error_names().into_iter().zip(self.ranks()?) {
                    match rank {
                        Some(rank) if rank <= n => hits += 1,
                        Some(_) => {}
                        None => debug!(error = %name, "no candidates, counted as miss"),
                    }
                }
                hits
            }
        };
        Ok(hits as f64 / self.len() as f64)
    }

    /// Precision at each cutoff, in the given order
    pub fn precision_report(&self, cutoffs: &[Cutoff]) -> RankResult<PrecisionReport> {
        let points = cutoffs
            .iter()
            .map(|&cutoff| {
                Ok(PrecisionPoint {
                    cutoff,
                    precision: self.precision_at(cutoff)?,
                })
            })
            .collect::<RankResult<Vec<_>>>()?;

        Ok(PrecisionReport {
            errors: self.len(),
            candidates: self.candidate_count(),
            points,
        })
    }

    pub fn statistics(&self) -> DatasetStatistics {
        DatasetStatistics::collect(self.registry.size(), self.errors())
    }

    fn view(&self, members: Vec<ErrorId>) -> Dataset {
        Dataset {
            registry: Rc::clone(&self.registry),
            arena: Rc::clone(&self.arena),
            members,
        }
    }

    fn check_width(&self, candidates: &[Candidate]) -> RankResult<()> {
        let expected = self.registry.size();
        match candidates.iter().find(|c| c.feature_values.len() != expected) {
            Some(bad) => Err(RankingError::FeatureDimension {
                candidate: bad.name.clone(),
                expected,
                actual: bad.feature_values.len(),
            }),
            None => Ok(()),
        }
    }

    fn map_errors<T>(&self, mut f: impl FnMut(&DetectedError) -> T) -> Vec<T> {
        let arena = self.arena.borrow();
        self.members.iter().map(|id| f(&arena[id.0])).collect()
    }
}
