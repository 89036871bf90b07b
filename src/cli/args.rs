use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigAction;
use crate::suggest::Cutoff;

/// Rank correction candidates of detected errors and measure how often the
/// correct suggestion comes out on top.
///
/// # Examples
///
/// ```bash
/// # Inspect a dataset
/// suggestion-rank summary errors.txt
///
/// # Hold out the last 20% of errors for testing
/// suggestion-rank split errors.txt --first 0.8 --train train.txt --test test.txt
///
/// # Precision when ranking by one feature
/// suggestion-rank evaluate test.txt --feature EditDistance --at 1,3,10
/// ```
#[derive(Parser)]
#[command(name = "suggestion-rank")]
#[command(about = "Correction-candidate ranking and precision evaluation")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: ./.suggestion-rank.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print dataset statistics
    Summary {
        /// Dataset file
        dataset: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Split a dataset into training and test files
    Split {
        /// Dataset file
        dataset: PathBuf,

        /// Training portion taken from the front (fraction below 1, or a count)
        #[arg(long, conflicts_with = "last")]
        first: Option<f64>,

        /// Training portion taken from the back (fraction below 1, or a count)
        #[arg(long)]
        last: Option<f64>,

        /// Output file for the selected errors
        #[arg(long)]
        train: PathBuf,

        /// Output file for the remaining errors
        #[arg(long)]
        test: PathBuf,
    },

    /// Score candidates and report precision at each cutoff
    #[command(group(ArgGroup::new("scores").required(true).args(["confidences", "feature"])))]
    Evaluate {
        /// Dataset file
        dataset: PathBuf,

        /// File with one confidence per candidate, one per line
        #[arg(long)]
        confidences: Option<PathBuf>,

        /// Rank candidates by this feature's value
        #[arg(long)]
        feature: Option<String>,

        /// Cutoffs to report, e.g. 1,3,10,inf (default: from configuration)
        #[arg(long, value_delimiter = ',')]
        at: Vec<Cutoff>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write feature rows, labels and weights as JSON for model training
    ExportTraining {
        /// Dataset file
        dataset: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Include class-imbalance weights
        #[arg(long, conflicts_with = "unweighted")]
        weighted: bool,

        /// Omit class-imbalance weights
        #[arg(long)]
        unweighted: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
