use anyhow::{bail, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::commands::{utils, Command};
use crate::config::{ConfigAction, DEFAULT_CONFIG};

pub struct ConfigCommand {
    action: ConfigAction,
    config: Option<PathBuf>,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, config: Option<PathBuf>) -> Self {
        Self { action, config }
    }
}

#[async_trait(?Send)]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Init { force } => {
                let path = utils::config_path(self.config.as_deref())?;
                if !force && fs::try_exists(&path).await? {
                    bail!(
                        "{} already exists; pass --force to overwrite it",
                        path.display()
                    );
                }
                fs::write(&path, DEFAULT_CONFIG).await?;
                println!("Configuration initialized at {}", path.display());
            }

            ConfigAction::Show => {
                let config = utils::load_config(self.config.as_deref())?;
                print!("{}", config.to_toml()?);
            }
        }

        Ok(())
    }
}
