use anyhow::Result;
use async_trait::async_trait;

pub mod config;
pub mod evaluate;
pub mod export_training;
pub mod split;
pub mod summary;

pub use config::ConfigCommand;
pub use evaluate::{EvaluateCommand, ScoreSource};
pub use export_training::ExportTrainingCommand;
pub use split::SplitCommand;
pub use summary::SummaryCommand;

/// Trait for CLI command implementations
///
/// Datasets are single-threaded, so command futures are not `Send`.
#[async_trait(?Send)]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::config::{default_config_path, EvaluationConfig};
    use crate::suggest::Dataset;
    use anyhow::{Context, Result};
    use std::path::{Path, PathBuf};
    use tokio::fs;

    /// Read and parse a dataset file
    pub async fn load_dataset(path: &Path) -> Result<Dataset> {
        let text = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        let dataset: Dataset = text
            .parse()
            .with_context(|| format!("failed to parse dataset {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            errors = dataset.len(),
            candidates = dataset.candidate_count(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Write a dataset view in the text format
    pub async fn save_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
        let text = dataset.to_text()?;
        fs::write(path, text)
            .await
            .with_context(|| format!("failed to write dataset {}", path.display()))
    }

    pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(default_config_path()?),
        }
    }

    /// An explicitly named file must exist; the default location may be absent
    pub fn load_config(explicit: Option<&Path>) -> Result<EvaluationConfig> {
        let config = match explicit {
            Some(path) => EvaluationConfig::load(path)?,
            None => EvaluationConfig::load_or_default(default_config_path()?)?,
        };
        Ok(config)
    }
}
