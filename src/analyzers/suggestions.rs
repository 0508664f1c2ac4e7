//! Suggestion Generator: a fixed catalogue of tips keyed on shallow textual cues.

use crate::core::constants::message_cues;
use crate::core::{Finding, Suggestion, SupportedLanguage};

fn suggestion(title: &str, description: &str, sample_code: &str) -> Suggestion {
    Suggestion {
        title: title.to_string(),
        description: description.to_string(),
        sample_code: sample_code.to_string(),
    }
}

fn missing_semicolons() -> Suggestion {
    suggestion(
        "Add Missing Semicolons",
        "Always end statements with semicolons to avoid syntax errors and improve code readability.",
        "// Good practice:\nlet x = 5;\nconsole.log(x);",
    )
}

fn bracket_matching() -> Suggestion {
    suggestion(
        "Check Bracket Matching",
        "Ensure all opening brackets, braces, and parentheses have corresponding closing ones.",
        "// Make sure brackets match:\nif (condition) {\n    // code here\n}",
    )
}

fn block_scoped_declarations() -> Suggestion {
    suggestion(
        "Use 'let' or 'const' instead of 'var'",
        "Modern JavaScript prefers 'let' for variables and 'const' for constants to avoid scope issues.",
        "// Better:\nconst PI = 3.14159;\nlet counter = 0;",
    )
}

fn proper_indentation() -> Suggestion {
    suggestion(
        "Use Proper Indentation",
        "Python requires consistent indentation (4 spaces recommended) to define code blocks.",
        "def example():\n    if True:\n        print('Properly indented')",
    )
}

fn add_comments() -> Suggestion {
    suggestion(
        "Add Comments",
        "Include comments to explain complex logic and improve code maintainability.",
        "// This function calculates the area of a circle\nfunction calculateArea(radius) {\n    return Math.PI * radius * radius;\n}",
    )
}

/// Pick tips for `source` given the findings the scanner produced for it.
///
/// The order is fixed: semicolons, brackets, the language-specific tip, then
/// the unconditional "Add Comments" entry.
pub fn generate_suggestions(
    source: &str,
    findings: &[Finding],
    language: SupportedLanguage,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if findings
        .iter()
        .any(|f| f.message.contains(message_cues::SEMICOLON))
    {
        suggestions.push(missing_semicolons());
    }

    if findings.iter().any(|f| {
        f.message.contains(message_cues::BRACE) || f.message.contains(message_cues::PARENTHESIS)
    }) {
        suggestions.push(bracket_matching());
    }

    match language {
        SupportedLanguage::JavaScript if source.contains("var ") => {
            suggestions.push(block_scoped_declarations());
        }
        SupportedLanguage::Python if !source.contains("    ") && !source.contains('\t') => {
            suggestions.push(proper_indentation());
        }
        _ => {}
    }

    suggestions.push(add_comments());
    suggestions
}
