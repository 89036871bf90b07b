use crate::error::{RankResult, RankingError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A candidate-scoring feature, identified by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    name: String,
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Key accepted by [`FeatureRegistry::get`]
#[derive(Debug, Clone, Copy)]
pub enum FeatureKey<'a> {
    Index(usize),
    Name(&'a str),
    Feature(&'a Feature),
}

impl From<usize> for FeatureKey<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for FeatureKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a Feature> for FeatureKey<'a> {
    fn from(feature: &'a Feature) -> Self {
        Self::Feature(feature)
    }
}

/// The complementary value returned by a registry lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureLookup<'a> {
    Feature(&'a Feature),
    Index(usize),
}

/// Assigns dense, 0-based indices to features in registration order.
///
/// Lookups work in both directions: an index yields the feature, a name (or
/// feature) yields the index. Names are unique and nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRegistry {
    features: Vec<Feature>,
    indices: HashMap<String, usize>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a feature and return its index.
    ///
    /// Fails without modifying the registry when the name is taken.
    pub fn register(&mut self, feature: Feature) -> RankResult<usize> {
        if self.indices.contains_key(feature.name()) {
            return Err(RankingError::DuplicateFeature {
                name: feature.name,
            });
        }
        let index = self.features.len();
        self.indices.insert(feature.name.clone(), index);
        self.features.push(feature);
        Ok(index)
    }

    /// Look up the value complementary to `key`
    pub fn get<'a, 'k>(&'a self, key: impl Into<FeatureKey<'k>>) -> RankResult<FeatureLookup<'a>> {
        match key.into() {
            FeatureKey::Index(index) => self.feature(index).map(FeatureLookup::Feature),
            FeatureKey::Name(name) => self.index_of(name).map(FeatureLookup::Index),
            FeatureKey::Feature(feature) => self.index_of(feature.name()).map(FeatureLookup::Index),
        }
    }

    pub fn feature(&self, index: usize) -> RankResult<&Feature> {
        self.features.get(index).ok_or_else(|| RankingError::NotFound {
            key: format!("index {index}"),
        })
    }

    pub fn index_of(&self, name: &str) -> RankResult<usize> {
        self.indices
            .get(name)
            .copied()
            .ok_or_else(|| RankingError::NotFound {
                key: format!("name '{name}'"),
            })
    }

    /// Build a registry from names in index order
    pub fn from_names<I, S>(names: I) -> RankResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(Feature::new(name))?;
        }
        Ok(registry)
    }

    pub fn size(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(Feature::name).collect()
    }
}
