use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use colored::Colorize;
use std::path::PathBuf;

use super::utils::{read_source, resolve_language};
use super::Command;
use crate::cli::args::SourceArgs;
use crate::config::HintConfig;
use crate::error::ErrorContext;
use crate::report::{analysis_report, report_file_name};

pub struct ReportCommand {
    source: SourceArgs,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    config: HintConfig,
}

impl ReportCommand {
    pub fn new(
        source: SourceArgs,
        output: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        config: HintConfig,
    ) -> Self {
        Self {
            source,
            output,
            output_dir,
            config,
        }
    }
}

#[async_trait]
impl Command for ReportCommand {
    async fn execute(&self) -> Result<()> {
        let source = read_source(&self.source.input).await?;
        self.config.check_source_size(&source)?;

        let language = resolve_language(&self.source, self.config.fallback.scan);
        let now = Utc::now();
        let report = analysis_report(&source, language, now)?;

        let target = match (&self.output, &self.output_dir) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => Some(dir.join(report_file_name(language, now))),
            (None, None) => None,
        };

        match target {
            Some(path) => {
                tokio::fs::write(&path, &report)
                    .await
                    .io_context("writing report", Some(path.clone()))?;
                eprintln!("{} Report written to {}", "✓".green(), path.display());
            }
            None => println!("{report}"),
        }

        Ok(())
    }
}
