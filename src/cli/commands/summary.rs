use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::cli::args::OutputFormat;
use crate::cli::commands::{utils, Command};
use crate::suggest::{Candidate, Dataset};

pub struct SummaryCommand {
    dataset: PathBuf,
    format: OutputFormat,
}

impl SummaryCommand {
    pub fn new(dataset: PathBuf, format: OutputFormat) -> Self {
        Self { dataset, format }
    }
}

#[async_trait(?Send)]
impl Command for SummaryCommand {
    async fn execute(&self) -> Result<()> {
        let dataset = utils::load_dataset(&self.dataset).await?;
        match self.format {
            OutputFormat::Json => {
                let stats = dataset.statistics();
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            OutputFormat::Text => print!("{}", render_text(&dataset)),
        }
        Ok(())
    }
}

fn render_text(dataset: &Dataset) -> String {
    let stats = dataset.statistics();
    let mut out = String::new();
    out.push_str(&format!("Features:   {}\n", dataset.registry().names().join(", ")));
    out.push_str(&format!("Errors:     {}\n", stats.errors));
    out.push_str(&format!(
        "Candidates: {} ({} correct, max {} / avg {:.2} per error)\n",
        stats.candidates,
        stats.correct_candidates,
        stats.max_candidates_per_error,
        stats.avg_candidates_per_error
    ));
    out.push_str(&format!(
        "Coverage:   {:.4} ({} errors without candidates)\n",
        stats.coverage(),
        stats.errors_without_candidates
    ));

    let first = dataset
        .errors()
        .find_map(|error| error.candidates.first().map(|c| (error.name.clone(), c.clone())));
    if let Some((error, candidate)) = first {
        out.push_str(&format!("First candidate of {error}:\n"));
        out.push_str(&describe(dataset, &candidate));
    }
    out
}

fn describe(dataset: &Dataset, candidate: &Candidate) -> String {
    let mut out = format!(
        "  {} (label {}, confidence {})\n",
        candidate.name,
        candidate.label_value(),
        candidate.confidence
    );
    for (feature, value) in dataset.registry().iter().zip(&candidate.feature_values) {
        out.push_str(&format!("    {feature} = {value}\n"));
    }
    out
}
