use crate::common::test_helpers::fixture_path;
use std::fs;
use suggestion_rank::cli::commands::{
    Command, ConfigCommand, EvaluateCommand, ExportTrainingCommand, ScoreSource, SplitCommand,
};
use suggestion_rank::cli::OutputFormat;
use suggestion_rank::config::{ConfigAction, DEFAULT_CONFIG};
use suggestion_rank::{Cutoff, Dataset};
use tempfile::TempDir;

#[tokio::test]
async fn test_split_command_writes_both_parts() {
    let dir = TempDir::new().unwrap();
    let train = dir.path().join("train.txt");
    let test = dir.path().join("test.txt");

    SplitCommand::new(fixture_path("sample.txt"), Some(0.5), None, train.clone(), test.clone(), None)
        .execute()
        .await
        .unwrap();

    assert_eq!(Dataset::read(&train).unwrap().error_names(), vec!["Error1"]);
    assert_eq!(Dataset::read(&test).unwrap().error_names(), vec!["Error2"]);
}

#[tokio::test]
async fn test_split_command_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("eval.toml");
    fs::write(&config, "[split]\nlast = 0.5\n").unwrap();
    let train = dir.path().join("train.txt");
    let test = dir.path().join("test.txt");

    SplitCommand::new(fixture_path("sample.txt"), None, None, train.clone(), test.clone(), Some(config))
        .execute()
        .await
        .unwrap();

    assert_eq!(Dataset::read(&train).unwrap().error_names(), vec!["Error2"]);
}

#[tokio::test]
async fn test_evaluate_command_checks_confidence_count() {
    let dir = TempDir::new().unwrap();
    let scores = dir.path().join("scores.txt");
    fs::write(&scores, "0.2\n0.1\n0.3\n").unwrap();

    let command = EvaluateCommand::new(
        fixture_path("sample.txt"),
        ScoreSource::Confidences(scores.clone()),
        vec![Cutoff::Top(1)],
        OutputFormat::Text,
        None,
    );
    assert!(command.execute().await.is_err());

    fs::write(&scores, "0.2\n0.1\n0.3\n0.2\n0.1\n").unwrap();
    command.execute().await.unwrap();
}

#[tokio::test]
async fn test_evaluate_command_with_feature() {
    let command = EvaluateCommand::new(
        fixture_path("sample.txt"),
        ScoreSource::Feature("Feature3".to_string()),
        vec![Cutoff::Top(1), Cutoff::Unbounded],
        OutputFormat::Json,
        None,
    );
    command.execute().await.unwrap();

    let unknown = EvaluateCommand::new(
        fixture_path("sample.txt"),
        ScoreSource::Feature("Feature9".to_string()),
        vec![Cutoff::Top(1)],
        OutputFormat::Text,
        None,
    );
    assert!(unknown.execute().await.is_err());
}

#[tokio::test]
async fn test_export_training_command() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("training.json");

    ExportTrainingCommand::new(fixture_path("sample.txt"), output.clone(), Some(true), None)
        .execute()
        .await
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(&output).await.unwrap()).unwrap();
    assert_eq!(json["feature_names"], serde_json::json!(["Feature1", "Feature2", "Feature3"]));
    assert_eq!(json["labels"], serde_json::json!([1, 0, 1, 0, 1]));
    let w = 2.0 / 3.0;
    assert_eq!(json["weights"], serde_json::json!([w, 1.0, w, 1.0, w]));
    assert_eq!(json["features"][1], serde_json::json!([0.2, 0.0, 0.8]));
}

#[tokio::test]
async fn test_export_training_with_uncorrectable_errors() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("data.txt");
    let output = dir.path().join("training.json");
    fs::write(
        &dataset,
        "F1\n\nE1\nA\t0.1\t1\nB\t0.2\t0\nC\t0.3\t0\n\nE2\nD\t0.4\t0\nE\t0.5\t0\n\nE3\n",
    )
    .unwrap();

    let config = dir.path().join("eval.toml");
    fs::write(&config, DEFAULT_CONFIG).unwrap();

    ExportTrainingCommand::new(dataset, output.clone(), None, Some(config))
        .execute()
        .await
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(&output).await.unwrap()).unwrap();
    assert_eq!(json["weights"], serde_json::json!([4.0, 1.0, 1.0, 1.0, 1.0]));
}

#[tokio::test]
async fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eval.toml");

    ConfigCommand::new(ConfigAction::Init { force: false }, Some(path.clone()))
        .execute()
        .await
        .unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

    let again = ConfigCommand::new(ConfigAction::Init { force: false }, Some(path.clone()));
    assert!(again.execute().await.is_err());

    ConfigCommand::new(ConfigAction::Init { force: true }, Some(path.clone()))
        .execute()
        .await
        .unwrap();
    ConfigCommand::new(ConfigAction::Show, Some(path))
        .execute()
        .await
        .unwrap();
}
