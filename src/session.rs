//! Editor session: the selected language, the loaded configuration and
//! whichever remote services are wired up, owned by one explicit object.
//!
//! Every remote call has a local fallback, so a session with no services at
//! all still answers every request.

use crate::analyzers::{
    explain_lines, generate_suggestions, render_summary, scan_for_errors,
    simulate_execution_narrative, summarize,
};
use crate::config::HintConfig;
use crate::core::constants::remote_markers;
use crate::core::{ExecutionNarrative, Finding, LineExplanation, Suggestion, SupportedLanguage};
use crate::error::{HintError, HintResult};
use crate::service::{
    ExecutionService, ExplainRequest, ExplanationService, HistoryEntry, HistoryService,
    RunRequest, SaveRequest, SaveResponse,
};
use serde::{Deserialize, Serialize};

/// Everything one analysis pass produces
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analysis {
    pub findings: Vec<Finding>,
    pub explanations: Vec<LineExplanation>,
    pub suggestions: Vec<Suggestion>,
    /// `None` when the buffer was empty
    pub narrative: Option<ExecutionNarrative>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationOrigin {
    Remote,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Explanation {
    pub text: String,
    pub origin: ExplanationOrigin,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunOutcome {
    pub output: String,
    /// The output is a canned narrative, not real program output
    pub simulated: bool,
}

pub struct Session {
    language: SupportedLanguage,
    config: HintConfig,
    execution: Option<Box<dyn ExecutionService>>,
    explanation: Option<Box<dyn ExplanationService>>,
    history: Option<Box<dyn HistoryService>>,
}

impl Session {
    pub fn new(language: SupportedLanguage, config: HintConfig) -> Self {
        Self {
            language,
            config,
            execution: None,
            explanation: None,
            history: None,
        }
    }

    /// Start a session from a raw language key, using the configured scan fallback.
    pub fn for_key(key: &str, config: HintConfig) -> Self {
        let language = SupportedLanguage::resolve_or(key, config.fallback.scan);
        Self::new(language, config)
    }

    pub fn with_execution_service(mut self, service: Box<dyn ExecutionService>) -> Self {
        self.execution = Some(service);
        self
    }

    pub fn with_explanation_service(mut self, service: Box<dyn ExplanationService>) -> Self {
        self.explanation = Some(service);
        self
    }

    pub fn with_history_service(mut self, service: Box<dyn HistoryService>) -> Self {
        self.history = Some(service);
        self
    }

    pub fn language(&self) -> SupportedLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: SupportedLanguage) {
        tracing::debug!("Language changed: {} -> {}", self.language, language);
        self.language = language;
    }

    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    /// Scan, explain, suggest and simulate in one pass.
    pub fn analyze(&self, source: &str) -> HintResult<Analysis> {
        self.config.check_source_size(source)?;

        let code = source.trim();
        if code.is_empty() {
            return Ok(Analysis::default());
        }

        let findings = scan_for_errors(code, self.language);
        let explanations = explain_lines(code, self.language);
        let suggestions = generate_suggestions(code, &findings, self.language);
        let narrative = simulate_execution_narrative(&findings, self.language);

        tracing::info!(
            language = %self.language,
            findings = findings.len(),
            explanations = explanations.len(),
            suggestions = suggestions.len(),
            "analysis pass complete"
        );

        Ok(Analysis {
            findings,
            explanations,
            suggestions,
            narrative: Some(narrative),
        })
    }

    /// Explain the buffer, preferring the remote service and falling back to
    /// the local summary.
    pub async fn explain(&self, source: &str) -> HintResult<Explanation> {
        let code = self.require_code(source)?;

        let Some(service) = &self.explanation else {
            tracing::debug!("No explanation service configured, using local summary");
            return Ok(self.local_explanation(code, None));
        };

        let request = ExplainRequest {
            code: code.to_string(),
            language: self.language.display_name().to_string(),
        };

        match service.explain(request).await {
            Ok(response) if response.explanation.trim().is_empty() => {
                tracing::warn!("Explanation service returned nothing, using local summary");
                Ok(self.local_explanation(code, None))
            }
            Ok(response) if mentions_missing_linter(&response.explanation) => {
                tracing::warn!("Explanation service has no linter, using local summary");
                Ok(self.local_explanation(code, Some(&response.explanation)))
            }
            Ok(response) => Ok(Explanation {
                text: response.explanation,
                origin: ExplanationOrigin::Remote,
            }),
            Err(e) => {
                tracing::warn!("Explanation service failed, using local summary: {e}");
                Ok(self.local_explanation(code, None))
            }
        }
    }

    /// Run the buffer remotely, or simulate the run when that is not possible.
    pub async fn run(&self, source: &str, stdin: &str) -> HintResult<RunOutcome> {
        let code = self.require_code(source)?;

        let target = self.language.judge();
        let (Some(service), Some(language_id)) = (&self.execution, target) else {
            tracing::debug!("Execution unavailable for {}, simulating", self.language);
            return Ok(self.simulated_run(code));
        };

        let request = RunRequest {
            code: code.to_string(),
            language_id,
            stdin: stdin.to_string(),
        };

        match service.run(request).await {
            Ok(response) => Ok(RunOutcome {
                output: response.output,
                simulated: false,
            }),
            Err(e) => {
                tracing::warn!("Execution service failed, simulating: {e}");
                Ok(self.simulated_run(code))
            }
        }
    }

    pub async fn save(&self, source: &str, title: &str) -> HintResult<SaveResponse> {
        let request = self.save_request(source, title)?;
        self.history_service()?.save(request).await
    }

    pub async fn share(&self, source: &str, title: &str) -> HintResult<SaveResponse> {
        let request = self.save_request(source, title)?;
        self.history_service()?.share(request).await
    }

    pub async fn history(&self, limit: usize) -> HintResult<Vec<HistoryEntry>> {
        self.history_service()?.history(limit).await
    }

    fn require_code<'a>(&self, source: &'a str) -> HintResult<&'a str> {
        self.config.check_source_size(source)?;
        let code = source.trim();
        if code.is_empty() {
            return Err(HintError::validation("source", "Please write some code first"));
        }
        Ok(code)
    }

    fn save_request(&self, source: &str, title: &str) -> HintResult<SaveRequest> {
        let code = self.require_code(source)?;
        Ok(SaveRequest::new(code, self.language.display_name(), title))
    }

    fn history_service(&self) -> HintResult<&dyn HistoryService> {
        self.history
            .as_deref()
            .ok_or_else(|| HintError::service("history", "no history service configured"))
    }

    fn local_explanation(&self, code: &str, remote_note: Option<&str>) -> Explanation {
        let mut text = render_summary(&summarize(code, self.language.display_name()));
        if let Some(note) = remote_note {
            text.push_str("\nNote:\n");
            text.push_str(note.trim());
            text.push('\n');
        }
        Explanation {
            text,
            origin: ExplanationOrigin::Local,
        }
    }

    fn simulated_run(&self, code: &str) -> RunOutcome {
        let findings = scan_for_errors(code, self.language);
        RunOutcome {
            output: simulate_execution_narrative(&findings, self.language).narrative,
            simulated: true,
        }
    }
}

fn mentions_missing_linter(explanation: &str) -> bool {
    explanation.contains(remote_markers::LINTER_NOT_FOUND)
        || explanation.contains(remote_markers::NO_LINTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(language: SupportedLanguage) -> Session {
        Session::new(language, HintConfig::default())
    }

    #[test]
    fn test_analyze_empty_buffer() {
        let analysis = session(SupportedLanguage::Python).analyze("  \n\t").unwrap();
        assert_eq!(analysis, Analysis::default());
    }

    #[test]
    fn test_analyze_runs_every_stage() {
        let analysis = session(SupportedLanguage::JavaScript)
            .analyze("let x = 5\nconsole.log(x)")
            .unwrap();

        assert!(!analysis.findings.is_empty());
        assert_eq!(analysis.explanations.len(), 2);
        assert_eq!(
            analysis.suggestions.first().map(|s| s.title.as_str()),
            Some("Add Missing Semicolons")
        );
        assert_eq!(analysis.narrative.map(|n| n.ok), Some(false));
    }

    #[test]
    fn test_analyze_refuses_oversized_buffer() {
        let mut config = HintConfig::default();
        config.analysis.max_source_bytes = 8;
        let session = Session::new(SupportedLanguage::Python, config);

        assert!(matches!(
            session.analyze("print('too long')"),
            Err(HintError::Validation { .. })
        ));
    }

    #[test]
    fn test_for_key_uses_scan_fallback() {
        let mut config = HintConfig::default();
        config.fallback.scan = SupportedLanguage::Java;

        assert_eq!(Session::for_key("kotlin", config.clone()).language(), SupportedLanguage::Java);
        assert_eq!(Session::for_key("Python", config).language(), SupportedLanguage::Python);
    }

    #[test]
    fn test_linter_markers() {
        assert!(mentions_missing_linter("Error: Linter tool not found for rust"));
        assert!(mentions_missing_linter("No linter configured"));
        assert!(!mentions_missing_linter("This code prints 1"));
    }
}
