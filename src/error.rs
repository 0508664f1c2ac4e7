use std::path::PathBuf;
use thiserror::Error;

/// Main error type for everything that wraps the heuristic core.
///
/// The analysis functions themselves never fail; this type covers configuration,
/// file IO, the remote collaborator services and command-line input.
#[derive(Debug, Error)]
pub enum HintError {
    /// IO-related errors with context
    #[error("IO error during {operation}{}: {source}", path_suffix(.path))]
    Io {
        operation: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error{}: {message}", path_suffix(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// JSON parsing errors
    #[error("JSON error in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// TOML parsing errors
    #[error("TOML error in {context}: {source}")]
    Toml {
        context: String,
        #[source]
        source: toml::de::Error,
    },

    /// A language key that none of the rule tables know about
    #[error("Unknown language '{key}'")]
    UnknownLanguage { key: String },

    /// A remote collaborator (run / explain / history) failed or is not wired up
    #[error("{service} service error: {message}")]
    Service { service: String, message: String },

    /// Validation errors
    #[error("Validation error for field '{field}': {reason}")]
    Validation { field: String, reason: String },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" on {p:?}"),
        None => String::new(),
    }
}

impl HintError {
    pub fn service(service: &str, message: impl Into<String>) -> Self {
        Self::Service {
            service: service.to_string(),
            message: message.into(),
        }
    }

    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for codehint operations
pub type HintResult<T> = Result<T, HintError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    fn io_context(self, operation: &str, path: Option<PathBuf>) -> HintResult<T>;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn io_context(self, operation: &str, path: Option<PathBuf>) -> HintResult<T> {
        self.map_err(|e| HintError::Io {
            operation: operation.to_string(),
            path,
            source: e,
        })
    }
}

// Allow using ? with io::Error
impl From<std::io::Error> for HintError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unspecified".to_string(),
            path: None,
            source: err,
        }
    }
}

// Allow using ? with serde_json::Error
impl From<serde_json::Error> for HintError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            context: "unspecified".to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_context_includes_operation_and_path() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = result
            .io_context("reading source file", Some(PathBuf::from("main.py")))
            .unwrap_err();
        let text = err.to_string();

        assert!(text.contains("reading source file"));
        assert!(text.contains("main.py"));
    }

    #[test]
    fn test_display_without_path() {
        let err = HintError::Config {
            message: "bad value".to_string(),
            path: None,
        };
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_service_constructor() {
        let err = HintError::service("execution", "not configured");
        assert_eq!(err.to_string(), "execution service error: not configured");
    }
}
