use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::cli::commands::{utils, Command};
use crate::suggest::SubsetSelector;

pub struct SplitCommand {
    dataset: PathBuf,
    first: Option<f64>,
    last: Option<f64>,
    train: PathBuf,
    test: PathBuf,
    config: Option<PathBuf>,
}

impl SplitCommand {
    pub fn new(
        dataset: PathBuf,
        first: Option<f64>,
        last: Option<f64>,
        train: PathBuf,
        test: PathBuf,
        config: Option<PathBuf>,
    ) -> Self {
        Self {
            dataset,
            first,
            last,
            train,
            test,
            config,
        }
    }

    /// Command-line bounds win over the `[split]` table
    fn selector(&self) -> Result<SubsetSelector<'static>> {
        if self.first.is_some() || self.last.is_some() {
            return SubsetSelector::from_bounds(self.first, self.last)
                .context("invalid --first/--last value");
        }
        let config = utils::load_config(self.config.as_deref())?;
        Ok(config.selector()?)
    }
}

#[async_trait(?Send)]
impl Command for SplitCommand {
    async fn execute(&self) -> Result<()> {
        let selector = self.selector()?;
        let dataset = utils::load_dataset(&self.dataset).await?;
        let (train, test) = dataset.split(&selector);

        utils::save_dataset(&train, &self.train).await?;
        utils::save_dataset(&test, &self.test).await?;

        println!(
            "Wrote {} errors to {} and {} errors to {}",
            train.len(),
            self.train.display(),
            test.len(),
            self.test.display()
        );
        Ok(())
    }
}
