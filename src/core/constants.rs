//! String constants shared by the rule tables, the renderers and the CLI.
//!
//! The suggestion generator keys on substrings of rule messages, so both sides
//! read them from here.

/// Language keys, as used on the wire and in configuration
pub mod languages {
    pub const JAVASCRIPT: &str = "javascript";
    pub const PYTHON: &str = "python";
    pub const HTML: &str = "html";
    pub const JAVA: &str = "java";
    pub const CPP: &str = "cpp";
    pub const C: &str = "c";
}

/// Display names shown next to the editor
pub mod display_names {
    pub const JAVASCRIPT: &str = "JavaScript";
    pub const PYTHON: &str = "Python";
    pub const HTML: &str = "HTML/CSS";
    pub const JAVA: &str = "Java";
    pub const CPP: &str = "C++";
}

/// Severity labels used in text and JSON output
pub mod severity_labels {
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
}

/// Substrings the suggestion generator looks for in finding messages
pub mod message_cues {
    pub const SEMICOLON: &str = "semicolon";
    pub const BRACE: &str = "brace";
    pub const PARENTHESIS: &str = "parenthesis";
}

/// Fixed strings the explainers fall back to
pub mod fallbacks {
    pub const LINE_EXPLANATION: &str = "Code statement performing an operation";
    pub const INPUT_PROMPT: &str = "Enter input: ";
    pub const UNTITLED: &str = "Untitled";
}

/// Replies from the remote explanation service that mean "no real analysis happened"
pub mod remote_markers {
    pub const LINTER_NOT_FOUND: &str = "Linter tool not found";
    pub const NO_LINTER: &str = "No linter configured";
}
