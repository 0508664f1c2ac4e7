use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;

use super::utils::{build_session, print_json, read_source, resolve_language};
use super::Command;
use crate::cli::args::{HistoryAction, OutputFormat};
use crate::config::HintConfig;
use crate::service::SaveResponse;

pub struct HistoryCommand {
    action: HistoryAction,
    config: HintConfig,
}

impl HistoryCommand {
    pub fn new(action: HistoryAction, config: HintConfig) -> Self {
        Self { action, config }
    }
}

#[async_trait]
impl Command for HistoryCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            HistoryAction::Save { source, title } | HistoryAction::Share { source, title } => {
                let code = read_source(&source.input).await?;
                let language = resolve_language(source, self.config.fallback.scan);
                let session = build_session(language, self.config.clone())?;

                let response = if matches!(self.action, HistoryAction::Share { .. }) {
                    session.share(&code, title).await?
                } else {
                    session.save(&code, title).await?
                };

                match source.format {
                    OutputFormat::Json => print_json(&response)?,
                    OutputFormat::Text => print_save_response(&response),
                }
            }

            HistoryAction::List { limit, format } => {
                let session = build_session(self.config.fallback.scan, self.config.clone())?;
                let entries = session.history(*limit).await?;

                match format {
                    OutputFormat::Json => print_json(&entries)?,
                    OutputFormat::Text if entries.is_empty() => println!("No history yet"),
                    OutputFormat::Text => {
                        for entry in &entries {
                            println!(
                                "{:>5}  {:<10}  {:<12}  {}",
                                entry.id,
                                entry.activity_type.as_deref().unwrap_or("saved"),
                                entry.language.bright_black(),
                                entry.title
                            );
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn print_save_response(response: &SaveResponse) {
    if !response.success {
        let reason = response.error.as_deref().unwrap_or("Failed to save");
        println!("{} {}", "✗".red(), reason);
        return;
    }

    println!("{} {}", "✓".green(), response.message);
    if let Some(link) = &response.share_link {
        println!("  {}", link.underline());
    }
}
