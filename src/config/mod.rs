//! Evaluation settings loaded from TOML.

use crate::error::{IoContext, RankResult, RankingError};
use crate::suggest::{Cutoff, SubsetSelector};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Contents of the configuration file written by `config init`
pub const DEFAULT_CONFIG: &str = include_str!("../../resources/default.suggestion-rank.toml");

/// File name looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = ".suggestion-rank.toml";

/// Configuration actions
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration
    Show,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub split: SplitConfig,
    pub evaluation: EvaluationSettings,
}

/// Train/test split; exactly one of `first` and `last` may be set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSettings {
    pub cutoffs: Vec<usize>,
    /// Append the unbounded cutoff to every report
    pub include_ceiling: bool,
    /// Attach class-imbalance weights to exported training sets
    pub weighted: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            split: SplitConfig {
                first: Some(0.8),
                last: None,
            },
            evaluation: EvaluationSettings::default(),
        }
    }
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            cutoffs: vec![1, 3, 10],
            include_ceiling: true,
            weighted: true,
        }
    }
}

impl EvaluationConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> RankResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).io_context("reading configuration", Some(path.to_path_buf()))?;
        let config = Self::from_toml(&content, path)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> RankResult<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "configuration file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(RankingError::Io {
                operation: "reading configuration".to_string(),
                path: Some(path.to_path_buf()),
                source: e,
            }),
        }
    }

    fn from_toml(content: &str, path: &Path) -> RankResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| RankingError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check option combinations that deserialization alone cannot catch
    pub fn validate(&self) -> RankResult<()> {
        self.selector()?;
        if self.evaluation.cutoffs.contains(&0) {
            return Err(RankingError::Configuration {
                reason: "evaluation.cutoffs must all be positive".to_string(),
            });
        }
        if self.evaluation.cutoffs.is_empty() && !self.evaluation.include_ceiling {
            return Err(RankingError::Configuration {
                reason: "no cutoffs to evaluate".to_string(),
            });
        }
        Ok(())
    }

    /// The training-portion selector described by `[split]`
    pub fn selector(&self) -> RankResult<SubsetSelector<'static>> {
        SubsetSelector::from_bounds(self.split.first, self.split.last)
    }

    /// Cutoffs in report order, the ceiling last when enabled
    pub fn cutoffs(&self) -> Vec<Cutoff> {
        let mut cutoffs: Vec<Cutoff> = self
            .evaluation
            .cutoffs
            .iter()
            .map(|&n| Cutoff::Top(n))
            .collect();
        if self.evaluation.include_ceiling {
            cutoffs.push(Cutoff::Unbounded);
        }
        cutoffs
    }

    pub fn to_toml(&self) -> RankResult<String> {
        toml::to_string_pretty(self).map_err(|e| RankingError::Configuration {
            reason: e.to_string(),
        })
    }
}

/// Default configuration location in the current directory
pub fn default_config_path() -> RankResult<PathBuf> {
    let cwd = std::env::current_dir().io_context("resolving working directory", None)?;
    Ok(cwd.join(CONFIG_FILE_NAME))
}
