use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::args::OutputFormat;
use crate::cli::commands::{utils, Command};
use crate::suggest::{Cutoff, Dataset, FeatureScorer, PrecisionReport};

/// Where candidate confidences come from
#[derive(Debug, Clone)]
pub enum ScoreSource {
    /// Precomputed scores, one per line in candidate order
    Confidences(PathBuf),
    /// Rank by one feature's raw value
    Feature(String),
}

pub struct EvaluateCommand {
    dataset: PathBuf,
    source: ScoreSource,
    cutoffs: Vec<Cutoff>,
    format: OutputFormat,
    config: Option<PathBuf>,
}

impl EvaluateCommand {
    pub fn new(
        dataset: PathBuf,
        source: ScoreSource,
        cutoffs: Vec<Cutoff>,
        format: OutputFormat,
        config: Option<PathBuf>,
    ) -> Self {
        Self {
            dataset,
            source,
            cutoffs,
            format,
            config,
        }
    }

    fn cutoffs(&self) -> Result<Vec<Cutoff>> {
        if !self.cutoffs.is_empty() {
            return Ok(self.cutoffs.clone());
        }
        Ok(utils::load_config(self.config.as_deref())?.cutoffs())
    }

    async fn apply_scores(&self, dataset: &Dataset) -> Result<()> {
        match &self.source {
            ScoreSource::Confidences(path) => {
                let text = fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read confidences {}", path.display()))?;
                let values = parse_confidences(&text)?;
                dataset
                    .set_confidences(&values)
                    .with_context(|| format!("confidences in {} do not fit the dataset", path.display()))?;
            }
            ScoreSource::Feature(name) => {
                let scorer = FeatureScorer::by_name(dataset.registry(), name)?;
                dataset.apply_predictor(&scorer)?;
            }
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl Command for EvaluateCommand {
    async fn execute(&self) -> Result<()> {
        let cutoffs = self.cutoffs()?;
        let dataset = utils::load_dataset(&self.dataset).await?;
        self.apply_scores(&dataset).await?;

        let report: PrecisionReport = dataset.precision_report(&cutoffs)?;
        match self.format {
            OutputFormat::Text => print!("{report}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(())
    }
}

/// One float per non-blank line
fn parse_confidences(text: &str) -> Result<Vec<f64>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.trim()
                .parse::<f64>()
                .map_err(|_| anyhow!("line {}: invalid confidence '{}'", index + 1, line.trim()))
        })
        .collect()
}
