use anyhow::Result;
use async_trait::async_trait;

pub mod analysis;
pub mod config;
pub mod history;
pub mod report;

/// Trait for CLI command implementations
#[async_trait]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::cli::args::SourceArgs;
    use crate::config::HintConfig;
    use crate::core::SupportedLanguage;
    use crate::error::{ErrorContext, HintResult};
    use crate::session::Session;
    use serde::Serialize;
    use std::path::Path;
    use tokio::io::AsyncReadExt;

    /// Read the buffer from a file, or from stdin when the path is `-`
    pub async fn read_source(input: &Path) -> HintResult<String> {
        if input == Path::new("-") {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .io_context("reading stdin", None)?;
            return Ok(buffer);
        }

        tokio::fs::read_to_string(input)
            .await
            .io_context("reading source file", Some(input.to_path_buf()))
    }

    /// Language from `--language`, or guessed from the file extension, or `fallback`
    pub fn resolve_language(args: &SourceArgs, fallback: SupportedLanguage) -> SupportedLanguage {
        if let Some(key) = &args.language {
            return SupportedLanguage::resolve_or(key, fallback);
        }

        args.input
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(language_for_extension)
            .unwrap_or(fallback)
    }

    fn language_for_extension(ext: &str) -> Option<SupportedLanguage> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(SupportedLanguage::JavaScript),
            "py" => Some(SupportedLanguage::Python),
            "html" | "htm" => Some(SupportedLanguage::Html),
            "java" => Some(SupportedLanguage::Java),
            "cpp" | "cc" | "cxx" | "hpp" => Some(SupportedLanguage::Cpp),
            _ => None,
        }
    }

    pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Session with whatever remote services the configuration points at
    pub fn build_session(language: SupportedLanguage, config: HintConfig) -> HintResult<Session> {
        #[cfg(feature = "network")]
        {
            use crate::service::HttpBackend;

            if let Some(backend) = HttpBackend::from_config(&config.services)? {
                tracing::debug!("Using remote services at {:?}", config.services.base_url);
                return Ok(Session::new(language, config)
                    .with_execution_service(Box::new(backend.clone()))
                    .with_explanation_service(Box::new(backend.clone()))
                    .with_history_service(Box::new(backend)));
            }
        }

        Ok(Session::new(language, config))
    }

}
