//! The heuristic engine: scanner, explainers, suggestion generator and the
//! simulated-run fallback.
//!
//! Every function here is a pure computation over an immutable buffer. Nothing
//! is cached between calls, so callers may invoke them as often as they like
//! (e.g. on every debounced keystroke) from any thread.

pub mod explainer;
pub mod input;
pub mod scanner;
pub mod simulator;
pub mod suggestions;
pub mod summarizer;

pub use explainer::{explain_lines, explain_lines_with_rules};
pub use input::{count_expected_inputs, detect_input_required, extract_input_prompts};
pub use scanner::{scan_for_errors, scan_with_rules};
pub use simulator::{simulate_execution_narrative, simulate_for_key};
pub use suggestions::generate_suggestions;
pub use summarizer::{render_summary, summarize};

/// Split the way the editor counts lines: on `\n`, keeping any `\r`.
pub(crate) fn editor_lines(source: &str) -> std::str::Split<'_, char> {
    source.split('\n')
}
