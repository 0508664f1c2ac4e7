//! # codehint
//!
//! Cheap, approximate feedback on source code for an online compiler front-end,
//! produced by per-language regular expressions instead of a real parser.
//!
//! Everything here is a heuristic: findings are pattern hits, not compiler
//! diagnostics, and explanations narrate one line at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use code_hint::{scan_for_errors, explain_lines, SupportedLanguage};
//!
//! let source = "let x = 5\nconsole.log(x)";
//! let findings = scan_for_errors(source, SupportedLanguage::JavaScript);
//! assert_eq!(findings[0].line, 2);
//!
//! let explained = explain_lines(source, SupportedLanguage::JavaScript);
//! assert_eq!(explained.len(), 2);
//! ```
//!
//! ## Module Overview
//!
//! - [`registry`] - Per-language error and explanation rule tables
//! - [`analyzers`] - Scanner, line explainer, summarizer, suggestions and run simulator
//! - [`session`] - Explicitly owned editor session with remote fallbacks
//! - [`service`] - Contracts of the remote run / explain / history services
//! - [`report`] - Plain-text analysis report
//! - [`config`] - TOML configuration and validation

/// Scanner, explainers, suggestion generator and run simulator
pub mod analyzers;
/// Command-line interface and argument parsing
pub mod cli;
/// Configuration management and validation
pub mod config;
/// Core value types and constants
pub mod core;
/// Error types and handling utilities
pub mod error;
/// Per-language rule tables
pub mod registry;
/// Plain-text analysis report export
pub mod report;
/// Remote collaborator contracts
pub mod service;
/// Editor session object
pub mod session;

pub use analyzers::{
    count_expected_inputs, detect_input_required, explain_lines, extract_input_prompts,
    generate_suggestions, render_summary, scan_for_errors, simulate_execution_narrative,
    summarize,
};
pub use config::HintConfig;
pub use core::{
    ExecutionNarrative, Finding, JudgeLanguage, LineExplanation, Severity, Suggestion, Summary,
    SupportedLanguage,
};
pub use error::{HintError, HintResult};
pub use session::{Analysis, Explanation, ExplanationOrigin, RunOutcome, Session};
