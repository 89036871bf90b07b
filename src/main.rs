use anyhow::Result;
use suggestion_rank::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
