use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Heuristic code hints for the online compiler: likely syntax errors,
/// line-by-line explanations, summaries and tips, without running a compiler.
///
/// # Examples
///
/// ```bash
/// # Flag likely syntax errors
/// codehint scan main.py --language python
///
/// # Explain a snippet piped on stdin
/// echo 'let x = 5' | codehint explain - --language javascript
///
/// # Write the downloadable text report
/// codehint report app.js --output report.txt
/// ```
#[derive(Parser)]
#[command(name = "codehint")]
#[command(about = "Regex-driven code hints: likely errors, explanations and tips")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Source buffer and language shared by every analysis command
#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Source file, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Language key or display name; unknown values use the configured fallback
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flag likely syntax errors
    Scan {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Explain the buffer line by line
    Explain {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Summarize imports, functions, classes and control flow
    Summarize {
        #[command(flatten)]
        source: SourceArgs,

        /// Ask the explanation service first and fall back to the local summary
        #[arg(long)]
        remote: bool,
    },

    /// Suggest improvements based on the scan findings
    Suggest {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the canned run narrative used when no execution service answers
    Simulate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run the buffer on the execution service, simulating when it is unavailable
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Text fed to the program's stdin
        #[arg(long, default_value = "")]
        stdin: String,
    },

    /// Scan, explain, suggest and simulate in one pass
    Analyze {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Detect whether the program reads stdin and which prompts it prints
    Inputs {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write the plain-text analysis report
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file; `--output-dir` picks a generated name instead
        #[arg(short, long, conflicts_with = "output_dir")]
        output: Option<PathBuf>,

        /// Directory for a report named `code-analysis-<language>-<millis>.txt`
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Save or share code, or list saved entries
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HistoryAction {
    /// Save the buffer under a title
    Save {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short, long, default_value = "")]
        title: String,
    },

    /// Save the buffer and print a share link
    Share {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short, long, default_value = "")]
        title: String,
    },

    /// List saved entries
    List {
        #[arg(long, default_value = "100")]
        limit: usize,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show the effective configuration and its validation report
    Show,
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
