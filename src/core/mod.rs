pub mod constants;
pub mod types;

pub use types::{
    ExecutionNarrative, Finding, JudgeLanguage, LineExplanation, Severity, Suggestion, Summary,
    SupportedLanguage,
};
