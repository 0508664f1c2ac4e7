use super::{ErrorRuleSpec, ExplanationRuleSpec, MatchCheck};
use crate::core::Severity;

pub(super) const ERROR_RULES: &[ErrorRuleSpec] = &[
    ErrorRuleSpec {
        pattern: r"(?m)console\.log\(.*\)[ \t\r]*$",
        message: "Missing semicolon after console.log statement",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"\{[^}]*\z",
        message: "Missing closing brace '}'",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"\([^)]*\z",
        message: "Missing closing parenthesis ')'",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"(?m)\blet[ \t]+\w+[ \t]*(?:;|\r?$)",
        message: "Variable declared but not initialized",
        severity: Severity::Warning,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"\bfunction\s+\w+\s*\([^)]*\)\s*\{[^}]*\z",
        message: "Function missing closing brace",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
];

pub(super) const EXPLANATION_RULES: &[ExplanationRuleSpec] = &[
    ExplanationRuleSpec {
        pattern: r"function\s+(\w+)",
        template: "Defines a function named '$1' that can be called with parameters",
    },
    ExplanationRuleSpec {
        pattern: r"let\s+(\w+)",
        template: "Declares a variable '$1' with block scope",
    },
    ExplanationRuleSpec {
        pattern: r"const\s+(\w+)",
        template: "Declares a constant '$1' that cannot be reassigned",
    },
    ExplanationRuleSpec {
        pattern: r"\bvar\s+(\w+)",
        template: "Declares a function-scoped variable '$1'",
    },
    ExplanationRuleSpec {
        pattern: r"console\.log",
        template: "Outputs data to the browser console for debugging",
    },
    ExplanationRuleSpec {
        pattern: r"return\s+",
        template: "Returns a value from the function and exits the function",
    },
    ExplanationRuleSpec {
        pattern: r"if\s*\(",
        template: "Conditional statement that executes code based on a condition",
    },
    ExplanationRuleSpec {
        pattern: r"for\s*\(",
        template: "Loop that repeats code for a specified number of iterations",
    },
    ExplanationRuleSpec {
        pattern: r"while\s*\(",
        template: "Loop that repeats code as long as its condition holds",
    },
];
