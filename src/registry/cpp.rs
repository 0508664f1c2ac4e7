use super::{ErrorRuleSpec, ExplanationRuleSpec, MatchCheck};
use crate::core::Severity;

pub(super) const ERROR_RULES: &[ErrorRuleSpec] = &[
    ErrorRuleSpec {
        pattern: r"(?m)\b(?:int|long|short|float|double|char|bool|auto|string)[ \t]+\w+[ \t]*=[ \t]*[^;{}\r\n]+\r?$",
        message: "Missing semicolon after variable declaration",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"(?m)\bcout[ \t]*<<.*[^;\s][ \t\r]*$",
        message: "Missing semicolon after cout statement",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"(?m)#include[ \t]*<[^>\r\n]*\r?$",
        message: "Missing closing bracket '>' in include statement",
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
        pattern: r"#include\s*<iostream>",
        template: "Includes input/output stream functionality",
    },
    ExplanationRuleSpec {
        pattern: r"#include\s*<(\w+(?:\.h)?)>",
        template: "Includes the standard header '$1'",
    },
    ExplanationRuleSpec {
        pattern: r"using\s+namespace\s+std",
        template: "Allows use of standard library functions without std:: prefix",
    },
    ExplanationRuleSpec {
        pattern: r"int\s+main\(\)",
        template: "Main function - entry point of the C++ program",
    },
    ExplanationRuleSpec {
        pattern: r"int\s+(\w+)",
        template: "Declares an integer variable named '$1'",
    },
    ExplanationRuleSpec {
        pattern: r"cout\s*<<",
        template: "Outputs data to the console",
    },
    ExplanationRuleSpec {
        pattern: r"endl",
        template: "Inserts a new line and flushes the output buffer",
    },
];
