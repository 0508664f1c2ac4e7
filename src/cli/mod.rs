pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigAction, HistoryAction, OutputFormat, SourceArgs};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::HintConfig;
use commands::analysis::{AnalysisCommand, AnalysisKind};
use commands::config::ConfigCommand;
use commands::history::HistoryCommand;
use commands::report::ReportCommand;
use commands::Command;

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("code_hint={log_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let command = build_command(cli.command);
    command.execute().await
}

fn build_command(command: Commands) -> Box<dyn Command + Send + Sync> {
    let analysis = |kind, source| -> Box<dyn Command + Send + Sync> {
        Box::new(AnalysisCommand::new(kind, source, HintConfig::load_or_default()))
    };

    match command {
        Commands::Scan { source } => analysis(AnalysisKind::Scan, source),
        Commands::Explain { source } => analysis(AnalysisKind::Explain, source),
        Commands::Summarize { source, remote } => {
            analysis(AnalysisKind::Summarize { remote }, source)
        }
        Commands::Suggest { source } => analysis(AnalysisKind::Suggest, source),
        Commands::Simulate { source } => analysis(AnalysisKind::Simulate, source),
        Commands::Run { source, stdin } => analysis(AnalysisKind::Run { stdin }, source),
        Commands::Analyze { source } => analysis(AnalysisKind::Analyze, source),
        Commands::Inputs { source } => analysis(AnalysisKind::Inputs, source),
        Commands::Report {
            source,
            output,
            output_dir,
        } => Box::new(ReportCommand::new(
            source,
            output,
            output_dir,
            HintConfig::load_or_default(),
        )),
        Commands::History { action } => {
            Box::new(HistoryCommand::new(action, HintConfig::load_or_default()))
        }
        Commands::Config { action } => Box::new(ConfigCommand::new(action)),
    }
}
