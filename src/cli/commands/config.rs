use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;

use crate::cli::args::ConfigAction;
use crate::cli::commands::Command;
use crate::config::{config_file, ConfigValidator, HintConfig};

pub struct ConfigCommand {
    action: ConfigAction,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction) -> Self {
        Self { action }
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        let config_path = config_file()?;

        match &self.action {
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    println!(
                        "{} Configuration already exists at {} (use --force to overwrite)",
                        "!".yellow(),
                        config_path.display()
                    );
                    return Ok(());
                }
                HintConfig::default().save(&config_path)?;
                println!(
                    "{} Configuration initialized at {}",
                    "✓".green(),
                    config_path.display()
                );
            }

            ConfigAction::Show => {
                let config = HintConfig::load(&config_path)?;
                println!("# {}", config_path.display());
                println!("{}", config.to_toml()?);
                println!("{}", ConfigValidator::new(&config).validate());
            }

            ConfigAction::Path => println!("{}", config_path.display()),
        }

        Ok(())
    }
}
