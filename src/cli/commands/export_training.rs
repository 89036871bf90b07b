use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::commands::{utils, Command};
use crate::suggest::TrainingSet;

pub struct ExportTrainingCommand {
    dataset: PathBuf,
    output: PathBuf,
    /// `None` defers to `evaluation.weighted`
    weighted: Option<bool>,
    config: Option<PathBuf>,
}

impl ExportTrainingCommand {
    pub fn new(
        dataset: PathBuf,
        output: PathBuf,
        weighted: Option<bool>,
        config: Option<PathBuf>,
    ) -> Self {
        Self {
            dataset,
            output,
            weighted,
            config,
        }
    }
}

#[async_trait(?Send)]
impl Command for ExportTrainingCommand {
    async fn execute(&self) -> Result<()> {
        let weighted = match self.weighted {
            Some(flag) => flag,
            None => utils::load_config(self.config.as_deref())?.evaluation.weighted,
        };
        let dataset = utils::load_dataset(&self.dataset).await?;
        let training = TrainingSet::from_dataset(&dataset, weighted)
            .context("cannot weight a dataset without any correct candidate")?;

        let json = serde_json::to_string_pretty(&training)?;
        fs::write(&self.output, json)
            .await
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        println!(
            "Exported {} rows{} to {}",
            training.len(),
            if weighted { " with weights" } else { "" },
            self.output.display()
        );
        Ok(())
    }
}
