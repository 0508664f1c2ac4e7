//! Plain-text analysis report, the downloadable companion of the findings list.

use crate::analyzers::scan_for_errors;
use crate::core::{Finding, SupportedLanguage};
use crate::error::{HintError, HintResult};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 50;

/// Trim `source`, scan what is left and render the report for it.
///
/// Finding lines refer to the trimmed code, which is also what the report embeds.
pub fn analysis_report(
    source: &str,
    language: SupportedLanguage,
    generated_at: DateTime<Utc>,
) -> HintResult<String> {
    let code = source.trim();
    if code.is_empty() {
        return Err(HintError::validation("source", "No code to export"));
    }

    let findings = scan_for_errors(code, language);
    Ok(render_report(code, language, &findings, generated_at))
}

/// Render the report for a scan of `source`. The code is trimmed before it is embedded.
pub fn render_report(
    source: &str,
    language: SupportedLanguage,
    findings: &[Finding],
    generated_at: DateTime<Utc>,
) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut report = String::new();

    let _ = writeln!(report, "AI Code Explainer Analysis Report");
    let _ = writeln!(
        report,
        "Generated: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    let _ = writeln!(report, "Language: {}", language.key().to_uppercase());
    let _ = writeln!(report);
    let _ = writeln!(report, "CODE:");
    let _ = writeln!(report, "{rule}");
    let _ = writeln!(report, "{}", source.trim());
    let _ = writeln!(report, "{rule}");
    let _ = writeln!(report);
    let _ = writeln!(report, "ANALYSIS RESULTS:");

    if findings.is_empty() {
        let _ = writeln!(report, "No errors detected! ✅");
    } else {
        let _ = writeln!(report, "{} issue(s) found:", findings.len());
        for finding in findings {
            let _ = writeln!(report, "- Line {}: {}", finding.line, finding.message);
        }
    }

    let _ = writeln!(report);
    report.push_str("END OF REPORT");
    report
}

/// Download name for a report, e.g. `code-analysis-python-1700000000000.txt`
pub fn report_file_name(language: SupportedLanguage, at: DateTime<Utc>) -> String {
    format!("code-analysis-{}-{}.txt", language.key(), at.timestamp_millis())
}
