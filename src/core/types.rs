use crate::core::constants::{display_names, languages, severity_labels};
use crate::error::{HintError, HintResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the rule tables know about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    JavaScript,
    Python,
    Html,
    Java,
    Cpp,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 5] = [
        Self::JavaScript,
        Self::Python,
        Self::Html,
        Self::Java,
        Self::Cpp,
    ];

    /// Key used in configuration, on the wire and by the registry
    pub fn key(&self) -> &'static str {
        match self {
            Self::JavaScript => languages::JAVASCRIPT,
            Self::Python => languages::PYTHON,
            Self::Html => languages::HTML,
            Self::Java => languages::JAVA,
            Self::Cpp => languages::CPP,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JavaScript => display_names::JAVASCRIPT,
            Self::Python => display_names::PYTHON,
            Self::Html => display_names::HTML,
            Self::Java => display_names::JAVA,
            Self::Cpp => display_names::CPP,
        }
    }

    /// Parse a language key or one of the judge display names the editor shows,
    /// e.g. `"JavaScript (Node.js 12.14.0)"` or `"C++"`.
    pub fn parse(key: &str) -> HintResult<Self> {
        let normalized = key.trim().to_lowercase();
        let base = normalized
            .split(" (")
            .next()
            .unwrap_or_default()
            .trim();

        match base {
            "javascript" | "js" | "node" | "node.js" => Ok(Self::JavaScript),
            "python" | "py" | "python3" => Ok(Self::Python),
            "html" | "html/css" | "htm" => Ok(Self::Html),
            "java" => Ok(Self::Java),
            "cpp" | "c++" | "cxx" => Ok(Self::Cpp),
            _ => Err(HintError::UnknownLanguage {
                key: key.to_string(),
            }),
        }
    }

    /// Parse `key`, falling back to `fallback` when nobody knows it.
    ///
    /// Call sites disagree on which default to use, so the fallback is always
    /// passed in explicitly and the substitution is logged.
    pub fn resolve_or(key: &str, fallback: SupportedLanguage) -> Self {
        match Self::parse(key) {
            Ok(language) => language,
            Err(e) => {
                tracing::warn!("{e}; falling back to {}", fallback.key());
                fallback
            }
        }
    }

    /// Counterpart in the remote judge's language table, if there is one
    pub fn judge(&self) -> Option<JudgeLanguage> {
        match self {
            Self::JavaScript => Some(JudgeLanguage::JavaScript),
            Self::Python => Some(JudgeLanguage::Python),
            Self::Java => Some(JudgeLanguage::Java),
            Self::Cpp => Some(JudgeLanguage::Cpp),
            Self::Html => None,
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SupportedLanguage {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Language ids of the external judge used by the run path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum JudgeLanguage {
    Python = 71,
    JavaScript = 63,
    Java = 62,
    Cpp = 54,
    C = 50,
}

impl JudgeLanguage {
    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            71 => Some(Self::Python),
            63 => Some(Self::JavaScript),
            62 => Some(Self::Java),
            54 => Some(Self::Cpp),
            50 => Some(Self::C),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Python => languages::PYTHON,
            Self::JavaScript => languages::JAVASCRIPT,
            Self::Java => languages::JAVA,
            Self::Cpp => languages::CPP,
            Self::C => languages::C,
        }
    }

    /// Rule-table language for this judge language. C has no table of its own.
    pub fn supported(&self) -> Option<SupportedLanguage> {
        match self {
            Self::Python => Some(SupportedLanguage::Python),
            Self::JavaScript => Some(SupportedLanguage::JavaScript),
            Self::Java => Some(SupportedLanguage::Java),
            Self::Cpp => Some(SupportedLanguage::Cpp),
            Self::C => None,
        }
    }
}

impl From<JudgeLanguage> for u32 {
    fn from(language: JudgeLanguage) -> Self {
        language.id()
    }
}

impl TryFrom<u32> for JudgeLanguage {
    type Error = HintError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or_else(|| HintError::UnknownLanguage {
            key: id.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Likely breaks execution
    Error,
    /// Style or clarity concern
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => severity_labels::ERROR,
            Self::Warning => severity_labels::WARNING,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One heuristic rule hit. Advisory only, never a real compiler diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line of the match start
    pub line: usize,
    pub message: String,
    pub severity: Severity,
    /// Untrimmed text of `line`, empty if the line could not be resolved
    pub source_line: String,
    /// Character (not byte) offset of the match start within the whole buffer
    pub char_offset: usize,
}

impl Finding {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineExplanation {
    pub line: usize,
    pub source_line: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub sample_code: String,
}

/// Output of the line-classification summarizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub language: String,
    pub total_lines: usize,
    pub imports: Vec<String>,
    /// Signatures with internal whitespace collapsed
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub print_count: usize,
    pub loop_count: usize,
    pub conditional_count: usize,
    pub recommendations: Vec<String>,
    /// Extra tips for the selected language; only Python has any
    pub language_hints: Vec<String>,
}

/// Canned stand-in for program output when no execution service answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionNarrative {
    pub ok: bool,
    pub narrative: String,
}
