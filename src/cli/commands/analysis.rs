//! Handlers for the commands that read one buffer and print what the engine says about it.

use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;
use serde::Serialize;

use super::utils::{build_session, print_json, read_source, resolve_language};
use super::Command;
use crate::analyzers::{
    count_expected_inputs, detect_input_required, explain_lines, extract_input_prompts,
    generate_suggestions, render_summary, scan_for_errors, simulate_execution_narrative,
    summarize,
};
use crate::cli::args::{OutputFormat, SourceArgs};
use crate::config::HintConfig;
use crate::core::{
    ExecutionNarrative, Finding, JudgeLanguage, LineExplanation, Severity, Suggestion,
    SupportedLanguage,
};
use crate::session::Analysis;

#[derive(Debug, Clone)]
pub enum AnalysisKind {
    Scan,
    Explain,
    Summarize { remote: bool },
    Suggest,
    Simulate,
    Run { stdin: String },
    Analyze,
    Inputs,
}

pub struct AnalysisCommand {
    kind: AnalysisKind,
    source: SourceArgs,
    config: HintConfig,
}

#[derive(Debug, Serialize)]
struct InputReport {
    language: &'static str,
    requires_input: bool,
    expected_inputs: usize,
    prompts: Vec<String>,
}

impl AnalysisCommand {
    pub fn new(kind: AnalysisKind, source: SourceArgs, config: HintConfig) -> Self {
        Self {
            kind,
            source,
            config,
        }
    }

    fn fallback(&self) -> SupportedLanguage {
        let fallback = &self.config.fallback;
        match self.kind {
            AnalysisKind::Scan | AnalysisKind::Analyze | AnalysisKind::Inputs => fallback.scan,
            AnalysisKind::Explain => fallback.explain,
            AnalysisKind::Summarize { .. } => fallback.summary,
            AnalysisKind::Suggest => fallback.suggest,
            AnalysisKind::Simulate | AnalysisKind::Run { .. } => fallback.simulate,
        }
    }

    /// The judge table has C, the rule tables do not.
    fn targets_c(&self) -> bool {
        match &self.source.language {
            Some(key) => key.trim().eq_ignore_ascii_case("c"),
            None => self
                .source
                .input
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "c" || ext == "h"),
        }
    }

    /// Rule language plus, for `inputs`, the judge language to inspect.
    ///
    /// C goes straight to its judge entry without consulting the rule tables.
    fn resolve_target(&self) -> (SupportedLanguage, Option<JudgeLanguage>) {
        if matches!(self.kind, AnalysisKind::Inputs) && self.targets_c() {
            return (self.fallback(), Some(JudgeLanguage::C));
        }

        let language = resolve_language(&self.source, self.fallback());
        (language, language.judge())
    }
}

#[async_trait]
impl Command for AnalysisCommand {
    async fn execute(&self) -> Result<()> {
        let source = read_source(&self.source.input).await?;
        self.config.check_source_size(&source)?;

        let (language, judge) = self.resolve_target();
        let format = self.source.format;
        tracing::debug!(kind = ?self.kind, %language, bytes = source.len(), "running command");

        match &self.kind {
            AnalysisKind::Scan => {
                let findings = scan_for_errors(&source, language);
                match format {
                    OutputFormat::Json => print_json(&findings)?,
                    OutputFormat::Text => print_findings(&findings),
                }
            }

            AnalysisKind::Explain => {
                let explanations = explain_lines(&source, language);
                match format {
                    OutputFormat::Json => print_json(&explanations)?,
                    OutputFormat::Text => print_explanations(&explanations),
                }
            }

            AnalysisKind::Summarize { remote: false } => {
                let summary = summarize(&source, language.display_name());
                match format {
                    OutputFormat::Json => print_json(&summary)?,
                    OutputFormat::Text => print!("{}", render_summary(&summary)),
                }
            }

            AnalysisKind::Summarize { remote: true } => {
                let session = build_session(language, self.config.clone())?;
                let explanation = session.explain(&source).await?;
                match format {
                    OutputFormat::Json => print_json(&explanation)?,
                    OutputFormat::Text => print!("{}", explanation.text),
                }
            }

            AnalysisKind::Suggest => {
                let findings = scan_for_errors(&source, language);
                let suggestions = generate_suggestions(&source, &findings, language);
                match format {
                    OutputFormat::Json => print_json(&suggestions)?,
                    OutputFormat::Text => print_suggestions(&suggestions),
                }
            }

            AnalysisKind::Simulate => {
                let findings = scan_for_errors(&source, language);
                let narrative = simulate_execution_narrative(&findings, language);
                match format {
                    OutputFormat::Json => print_json(&narrative)?,
                    OutputFormat::Text => print_narrative(&narrative),
                }
            }

            AnalysisKind::Run { stdin } => {
                let session = build_session(language, self.config.clone())?;
                let outcome = session.run(&source, stdin).await?;
                match format {
                    OutputFormat::Json => print_json(&outcome)?,
                    OutputFormat::Text => {
                        if outcome.simulated {
                            eprintln!(
                                "{} No execution service answered; showing a simulated result",
                                "!".yellow()
                            );
                        }
                        println!("{}", outcome.output);
                    }
                }
            }

            AnalysisKind::Analyze => {
                let session = build_session(language, self.config.clone())?;
                let analysis = session.analyze(&source)?;
                match format {
                    OutputFormat::Json => print_json(&analysis)?,
                    OutputFormat::Text => print_analysis(&analysis),
                }
            }

            AnalysisKind::Inputs => {
                let Some(judge) = judge else {
                    println!("{} {} programs do not read stdin", "→".blue(), language.display_name());
                    return Ok(());
                };
                let report = InputReport {
                    language: judge.key(),
                    requires_input: detect_input_required(&source, judge),
                    expected_inputs: count_expected_inputs(&source, judge),
                    prompts: extract_input_prompts(&source, judge),
                };
                match format {
                    OutputFormat::Json => print_json(&report)?,
                    OutputFormat::Text => print_inputs(&report),
                }
            }
        }

        Ok(())
    }
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Error => severity.as_str().red().bold(),
        Severity::Warning => severity.as_str().yellow().bold(),
    }
}

fn print_findings(findings: &[Finding]) {
    if findings.is_empty() {
        println!("{} No likely errors found", "✓".green());
        return;
    }

    println!("{} {} issue(s) found", "→".blue(), findings.len());
    for finding in findings {
        println!(
            "  line {:>3}  {:<7}  {}",
            finding.line,
            severity_label(finding.severity),
            finding.message
        );
        if !finding.source_line.trim().is_empty() {
            println!("             {}", finding.source_line.bright_black());
        }
    }
}

fn print_explanations(explanations: &[LineExplanation]) {
    for explanation in explanations {
        println!(
            "{} {}",
            format!("Line {}:", explanation.line).bold(),
            explanation.source_line.trim().bright_black()
        );
        println!("  {}", explanation.text);
    }
}

fn print_suggestions(suggestions: &[Suggestion]) {
    for (index, suggestion) in suggestions.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{} {}", "💡".yellow(), suggestion.title.bold());
        println!("   {}", suggestion.description);
        for line in suggestion.sample_code.lines() {
            println!("     {}", line.bright_black());
        }
    }
}

fn print_narrative(narrative: &ExecutionNarrative) {
    let status = if narrative.ok {
        "simulated success".green()
    } else {
        "simulated failure".red()
    };
    println!("[{status}]");
    println!("{}", narrative.narrative);
}

fn print_analysis(analysis: &Analysis) {
    if analysis.narrative.is_none() {
        println!("{} Nothing to analyze", "!".yellow());
        return;
    }

    println!("{}", "Errors".bold().underline());
    print_findings(&analysis.findings);

    println!("\n{}", "Explanation".bold().underline());
    print_explanations(&analysis.explanations);

    println!("\n{}", "Suggestions".bold().underline());
    print_suggestions(&analysis.suggestions);

    if let Some(narrative) = &analysis.narrative {
        println!("\n{}", "Run preview".bold().underline());
        print_narrative(narrative);
    }
}

fn print_inputs(report: &InputReport) {
    if !report.requires_input {
        println!("{} Program does not read stdin", "✓".green());
        return;
    }

    println!(
        "{} Program reads {} value(s) from stdin",
        "→".blue(),
        report.expected_inputs
    );
    for prompt in &report.prompts {
        println!("  {}", prompt.trim_end().bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn command(kind: AnalysisKind, input: &str, language: Option<&str>) -> AnalysisCommand {
        let source = SourceArgs {
            input: PathBuf::from(input),
            language: language.map(str::to_string),
            format: OutputFormat::Text,
        };
        AnalysisCommand::new(kind, source, HintConfig::default())
    }

    #[test]
    fn test_inputs_for_c_uses_the_c_judge() {
        let by_flag = command(AnalysisKind::Inputs, "-", Some("C"));
        assert_eq!(
            by_flag.resolve_target(),
            (SupportedLanguage::JavaScript, Some(JudgeLanguage::C))
        );

        let by_extension = command(AnalysisKind::Inputs, "main.c", None);
        assert_eq!(by_extension.resolve_target().1, Some(JudgeLanguage::C));
    }

    #[test]
    fn test_other_languages_resolve_through_the_rule_tables() {
        let inputs = command(AnalysisKind::Inputs, "main.py", None);
        assert_eq!(
            inputs.resolve_target(),
            (SupportedLanguage::Python, Some(JudgeLanguage::Python))
        );

        let html = command(AnalysisKind::Inputs, "index.html", None);
        assert_eq!(html.resolve_target(), (SupportedLanguage::Html, None));

        let scan = command(AnalysisKind::Scan, "-", Some("c"));
        assert_eq!(scan.resolve_target().1, SupportedLanguage::JavaScript.judge());
    }
}
