//! TOML configuration: per-call-site fallback languages, analysis limits and
//! the remote service endpoint.

pub mod paths;
pub mod validation;

pub use paths::{config_dir, config_file, CONFIG_DIR_ENV};
pub use validation::{ConfigValidationError, ConfigValidator, ValidationReport};

use crate::core::SupportedLanguage;
use crate::error::{ErrorContext, HintError, HintResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HintConfig {
    pub fallback: FallbackConfig,
    pub analysis: AnalysisConfig,
    pub services: ServicesConfig,
}

/// Language used when a caller hands over a key no rule table knows.
///
/// Each call site has its own default; the summary path historically
/// assumed Python while everything else assumed JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FallbackConfig {
    pub scan: SupportedLanguage,
    pub explain: SupportedLanguage,
    pub suggest: SupportedLanguage,
    pub simulate: SupportedLanguage,
    pub summary: SupportedLanguage,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            scan: SupportedLanguage::JavaScript,
            explain: SupportedLanguage::JavaScript,
            suggest: SupportedLanguage::JavaScript,
            simulate: SupportedLanguage::JavaScript,
            summary: SupportedLanguage::Python,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Quiet period UI callers wait before re-analyzing. The engine never sleeps.
    pub debounce_ms: u64,
    /// Larger buffers are refused before they reach the engine
    pub max_source_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            max_source_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
        }
    }
}

impl HintConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> HintResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .io_context("reading config file", Some(path.to_path_buf()))?;

        toml::from_str(&content).map_err(|source| HintError::Toml {
            context: path.display().to_string(),
            source,
        })
    }

    /// Load from the platform location, logging and ignoring any problem.
    pub fn load_or_default() -> Self {
        let loaded = config_file().and_then(|path| Self::load(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> HintResult<String> {
        toml::to_string_pretty(self).map_err(|e| HintError::Config {
            message: format!("Failed to serialize config: {e}"),
            path: None,
        })
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> HintResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .io_context("creating config directory", Some(parent.to_path_buf()))?;
        }

        std::fs::write(path, self.to_toml()?)
            .io_context("writing config file", Some(path.to_path_buf()))
    }

    /// Refuse buffers above `analysis.max_source_bytes`.
    pub fn check_source_size(&self, source: &str) -> HintResult<()> {
        if source.len() > self.analysis.max_source_bytes {
            return Err(HintError::validation(
                "source",
                format!(
                    "{} bytes exceeds the {} byte limit",
                    source.len(),
                    self.analysis.max_source_bytes
                ),
            ));
        }
        Ok(())
    }
}
