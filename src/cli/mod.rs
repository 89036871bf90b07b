pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat};

use anyhow::Result;
use clap::Parser;
use commands::{
    Command, ConfigCommand, EvaluateCommand, ExportTrainingCommand, ScoreSource, SplitCommand,
    SummaryCommand,
};

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("suggestion_rank={log_level}"))
        .with_writer(std::io::stderr)
        .init();

    let command: Box<dyn Command> = match cli.command {
        Commands::Summary { dataset, format } => Box::new(SummaryCommand::new(dataset, format)),

        Commands::Split {
            dataset,
            first,
            last,
            train,
            test,
        } => Box::new(SplitCommand::new(dataset, first, last, train, test, cli.config)),

        Commands::Evaluate {
            dataset,
            confidences,
            feature,
            at,
            format,
        } => {
            let source = match (confidences, feature) {
                (Some(path), _) => ScoreSource::Confidences(path),
                (None, Some(name)) => ScoreSource::Feature(name),
                (None, None) => anyhow::bail!("one of --confidences or --feature is required"),
            };
            Box::new(EvaluateCommand::new(dataset, source, at, format, cli.config))
        }

        Commands::ExportTraining {
            dataset,
            output,
            weighted,
            unweighted,
        } => {
            let weighted = match (weighted, unweighted) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            Box::new(ExportTrainingCommand::new(dataset, output, weighted, cli.config))
        }

        Commands::Config { action } => Box::new(ConfigCommand::new(action, cli.config)),
    };

    command.execute().await
}
