use super::{ErrorRuleSpec, ExplanationRuleSpec, MatchCheck};
use crate::core::Severity;

pub(super) const ERROR_RULES: &[ErrorRuleSpec] = &[
    ErrorRuleSpec {
        pattern: r"(?m)\b(?:int|long|short|byte|float|double|char|boolean|String)[ \t]+\w+[ \t]*=[ \t]*[^;{}\r\n]+\r?$",
        message: "Missing semicolon after variable declaration",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"(?m)System\.out\.print(?:ln|f)?\(.*\)[ \t\r]*$",
        message: "Missing semicolon after println statement",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"\{[^}]*\z",
        message: "Missing closing brace '}'",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
];

pub(super) const EXPLANATION_RULES: &[ExplanationRuleSpec] = &[
    ExplanationRuleSpec {
        pattern: r"public\s+class\s+(\w+)",
        template: "Declares a public class '$1' accessible from other packages",
    },
    ExplanationRuleSpec {
        pattern: r"public\s+static\s+void\s+main",
        template: "Main method - entry point of the Java program",
    },
    ExplanationRuleSpec {
        pattern: r"int\s+(\w+)",
        template: "Declares an integer variable named '$1'",
    },
    ExplanationRuleSpec {
        pattern: r"System\.out\.println",
        template: "Prints text to the console followed by a new line",
    },
    ExplanationRuleSpec {
        pattern: r"String\[\]\s+args",
        template: "Command line arguments passed to the program",
    },
];
