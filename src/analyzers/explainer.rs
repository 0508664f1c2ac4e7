//! Line Explainer: one sentence per non-blank line, first matching rule wins.

use super::editor_lines;
use crate::core::constants::fallbacks;
use crate::core::{LineExplanation, SupportedLanguage};
use crate::registry::{self, ExplanationRule};

/// Narrate `source` line by line using the explanation rules of `language`.
///
/// Multi-line constructs are not understood; each line is explained on its own.
pub fn explain_lines(source: &str, language: SupportedLanguage) -> Vec<LineExplanation> {
    let explanations = explain_lines_with_rules(source, registry::explanation_rules(language));
    tracing::debug!(
        language = language.key(),
        lines = explanations.len(),
        "explained buffer"
    );
    explanations
}

/// Explain with an explicit rule list. Lines no rule matches get the generic fallback.
pub fn explain_lines_with_rules(source: &str, rules: &[ExplanationRule]) -> Vec<LineExplanation> {
    editor_lines(source)
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }

            Some(LineExplanation {
                line: index + 1,
                source_line: line.to_string(),
                text: explain_line(trimmed, rules),
            })
        })
        .collect()
}

fn explain_line(trimmed: &str, rules: &[ExplanationRule]) -> String {
    rules
        .iter()
        .find_map(|rule| rule.explain(trimmed))
        .unwrap_or_else(|| fallbacks::LINE_EXPLANATION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(explanations: &[LineExplanation]) -> Vec<&str> {
        explanations.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_blank_buffers_have_no_explanations() {
        for language in SupportedLanguage::ALL {
            assert!(explain_lines("", language).is_empty());
            assert!(explain_lines("\n   \n\t", language).is_empty());
        }
    }

    #[test]
    fn test_javascript_lines() {
        let source = "function add(a, b) {\n\n  return a + b;\n}\nconst total = add(1, 2);";
        let explanations = explain_lines(source, SupportedLanguage::JavaScript);

        assert_eq!(
            texts(&explanations),
            vec![
                "Defines a function named 'add' that can be called with parameters",
                "Returns a value from the function and exits the function",
                "Code statement performing an operation",
                "Declares a constant 'total' that cannot be reassigned",
            ]
        );
        let lines: Vec<usize> = explanations.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 3, 4, 5]);
        assert_eq!(explanations[1].source_line, "  return a + b;");
    }

    #[test]
    fn test_first_match_wins() {
        // `def` comes before `return` in the Python table
        let explanations = explain_lines("def f(): return 1", SupportedLanguage::Python);
        assert_eq!(
            texts(&explanations),
            vec!["Defines a function named 'f' that can accept parameters"]
        );
    }

    #[test]
    fn test_placeholder_substitution_per_language() {
        let explanations = explain_lines("int count = 0;", SupportedLanguage::Java);
        assert_eq!(
            texts(&explanations),
            vec!["Declares an integer variable named 'count'"]
        );

        let explanations = explain_lines("<h2>Menu</h2>", SupportedLanguage::Html);
        assert_eq!(
            texts(&explanations),
            vec!["Creates a level 2 heading for structuring content"]
        );

        let explanations = explain_lines("#include <iostream>\nusing namespace std;", SupportedLanguage::Cpp);
        assert_eq!(
            texts(&explanations),
            vec![
                "Includes input/output stream functionality",
                "Allows use of standard library functions without std:: prefix",
            ]
        );
    }

    #[test]
    fn test_no_rules_means_fallback_everywhere() {
        let explanations = explain_lines_with_rules("a\nb", &[]);
        assert_eq!(
            texts(&explanations),
            vec![fallbacks::LINE_EXPLANATION, fallbacks::LINE_EXPLANATION]
        );
    }
}
