//! Configuration validation for codehint

use super::HintConfig;
use std::fmt;

const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Checks a loaded [`HintConfig`] for values the session cannot work with
pub struct ConfigValidator<'a> {
    config: &'a HintConfig,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(config: &'a HintConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.validate_analysis(&mut report);
        self.validate_services(&mut report);
        self.report_fallbacks(&mut report);

        report
    }

    fn validate_analysis(&self, report: &mut ValidationReport) {
        let analysis = &self.config.analysis;

        if analysis.max_source_bytes == 0 {
            report.add_error(invalid("analysis.max_source_bytes", "Must be greater than 0"));
        }

        match analysis.debounce_ms {
            0 => report.add_warning(
                "analysis.debounce_ms is 0; every keystroke triggers a full pass".to_string(),
            ),
            ms if ms > MAX_DEBOUNCE_MS => report.add_warning(format!(
                "analysis.debounce_ms = {ms} is above {MAX_DEBOUNCE_MS}; feedback will feel stale"
            )),
            ms => report.add_success(format!("Debounce window: {ms}ms")),
        }
    }

    fn validate_services(&self, report: &mut ValidationReport) {
        let services = &self.config.services;

        if services.timeout_secs == 0 {
            report.add_error(invalid("services.timeout_secs", "Must be greater than 0"));
        }

        match services.base_url.as_deref() {
            None => report.add_info(
                "No services.base_url configured; explain and run use local fallbacks".to_string(),
            ),
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                report.add_success(format!("Service endpoint: {url}"));
            }
            Some(url) => report.add_error(invalid(
                "services.base_url",
                &format!("'{url}' must start with http:// or https://"),
            )),
        }
    }

    fn report_fallbacks(&self, report: &mut ValidationReport) {
        let fallback = &self.config.fallback;
        report.add_info(format!(
            "Fallback languages: scan={} explain={} suggest={} simulate={} summary={}",
            fallback.scan, fallback.explain, fallback.suggest, fallback.simulate, fallback.summary
        ));
    }
}

fn invalid(field: &str, reason: &str) -> ConfigValidationError {
    ConfigValidationError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Validation report containing all findings
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
    pub successes: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        Self::default()
    }

    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    fn add_info(&mut self, info: String) {
        self.info.push(info);
    }

    fn add_success(&mut self, success: String) {
        self.successes.push(success);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration Validation Report")?;
        writeln!(f, "==============================")?;

        if !self.successes.is_empty() {
            writeln!(f, "\n✅ Successes:")?;
            for success in &self.successes {
                writeln!(f, "   {success}")?;
            }
        }

        if !self.info.is_empty() {
            writeln!(f, "\nℹ️  Information:")?;
            for info in &self.info {
                writeln!(f, "   {info}")?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "\n⚠️  Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "   {warning}")?;
            }
        }

        if !self.errors.is_empty() {
            writeln!(f, "\n❌ Errors:")?;
            for error in &self.errors {
                writeln!(f, "   {error}")?;
            }
        }

        write!(
            f,
            "\nSummary: {} errors, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }
}
