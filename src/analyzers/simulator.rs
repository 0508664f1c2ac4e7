//! Execution Result Simulator: canned narratives shown when no execution
//! service is reachable. Nothing is executed and the text is not program output.

use crate::core::{ExecutionNarrative, Finding, SupportedLanguage};

struct NarrativePair {
    success: &'static str,
    error: &'static str,
}

fn narratives(language: SupportedLanguage) -> NarrativePair {
    match language {
        SupportedLanguage::JavaScript => NarrativePair {
            success: "Code compiled successfully!\n\nExpected Output:\nSum is: 30\n30\n\nExecution completed in 0.045ms",
            error: "Compilation Error:\nSyntaxError: Unexpected token\n    at line 3:25\n\nPlease fix the syntax errors and try again.",
        },
        SupportedLanguage::Python => NarrativePair {
            success: "Code executed successfully!\n\nExpected Output:\n6.666666666666667\n\nExecution completed in 0.023ms",
            error: "IndentationError: expected an indented block\n    at line 2\n\nPlease fix the indentation and try again.",
        },
        SupportedLanguage::Html => NarrativePair {
            success: "HTML validated successfully!\n\nDocument Structure:\n- DOCTYPE declaration: ✓\n- HTML tags: ✓\n- Head section: ✓\n- Body content: ✓",
            error: "HTML Validation Error:\nUnclosed tag detected\n    at line 8\n\nPlease close all HTML tags properly.",
        },
        SupportedLanguage::Java => NarrativePair {
            success: "Compilation successful!\n\nExpected Output:\nSum: 30\n\nProgram executed successfully.",
            error: "Compilation Error:\nError: ';' expected\n    at line 4\n\nPlease add missing semicolons.",
        },
        SupportedLanguage::Cpp => NarrativePair {
            success: "Compilation successful!\n\nExpected Output:\nSum: 15\n\nProgram terminated with exit code 0",
            error: "Compilation Error:\nError: expected ';' before 'cout'\n    at line 6\n\nPlease fix syntax errors.",
        },
    }
}

/// Pick the success or error narrative for `language`. Only error-severity
/// findings count; warnings alone still produce the success text.
pub fn simulate_execution_narrative(
    findings: &[Finding],
    language: SupportedLanguage,
) -> ExecutionNarrative {
    let has_errors = findings.iter().any(Finding::is_error);
    let pair = narratives(language);

    ExecutionNarrative {
        ok: !has_errors,
        narrative: if has_errors { pair.error } else { pair.success }.to_string(),
    }
}

/// Same as [`simulate_execution_narrative`] for a raw language key; unknown
/// keys get the JavaScript narratives.
pub fn simulate_for_key(findings: &[Finding], key: &str) -> ExecutionNarrative {
    let language = SupportedLanguage::resolve_or(key, SupportedLanguage::JavaScript);
    simulate_execution_narrative(findings, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_unknown_key_uses_javascript_pair() {
        let narrative = simulate_for_key(&[finding(Severity::Error)], "kotlin");
        assert_eq!(narrative.narrative, narratives(SupportedLanguage::JavaScript).error);
    }

    fn finding(severity: Severity) -> Finding {
        Finding {
            line: 1,
            message: "test".to_string(),
            severity,
            source_line: String::new(),
            char_offset: 0,
        }
    }

    #[test]
    fn test_no_findings_is_success() {
        for language in SupportedLanguage::ALL {
            let narrative = simulate_execution_narrative(&[], language);
            assert!(narrative.ok);
            assert_eq!(narrative.narrative, narratives(language).success);
        }
    }

    #[test]
    fn test_warnings_do_not_fail_the_run() {
        let narrative =
            simulate_execution_narrative(&[finding(Severity::Warning)], SupportedLanguage::JavaScript);
        assert!(narrative.ok);
    }

    #[test]
    fn test_error_picks_error_narrative() {
        let findings = [finding(Severity::Warning), finding(Severity::Error)];
        let narrative = simulate_execution_narrative(&findings, SupportedLanguage::Java);

        assert!(!narrative.ok);
        assert!(narrative.narrative.starts_with("Compilation Error:"));
        assert!(narrative.narrative.contains("';' expected"));
    }
}
