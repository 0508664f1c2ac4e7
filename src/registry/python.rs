use super::{ErrorRuleSpec, ExplanationRuleSpec, MatchCheck};
use crate::core::Severity;

pub(super) const ERROR_RULES: &[ErrorRuleSpec] = &[
    ErrorRuleSpec {
        pattern: r"(?m)^[ \t]*if[ \t]+.*[^:\s][ \t\r]*$",
        message: "Missing colon ':' after if statement",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"(?m)^[ \t]*def[ \t]+\w+[ \t]*\([^)\n]*\)[ \t\r]*$",
        message: "Missing colon ':' after function definition",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    // Known limitation: fires on every top-level statement, not just on lines
    // that belong inside a block.
    ErrorRuleSpec {
        pattern: r"(?m)^[a-zA-Z]",
        message: "Potential indentation error - Python requires proper indentation",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"(?m)^[ \t]*for[ \t]+.*[^:\s][ \t\r]*$",
        message: "Missing colon ':' after for statement",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
];

pub(super) const EXPLANATION_RULES: &[ExplanationRuleSpec] = &[
    ExplanationRuleSpec {
        pattern: r"def\s+(\w+)",
        template: "Defines a function named '$1' that can accept parameters",
    },
    ExplanationRuleSpec {
        pattern: r"^class\s+(\w+)",
        template: "Defines a class named '$1'",
    },
    ExplanationRuleSpec {
        pattern: r"^(?:from|import)\s+([\w.]+)",
        template: "Imports the module '$1'",
    },
    ExplanationRuleSpec {
        pattern: r"if\s+",
        template: "Conditional statement that executes code if the condition is true",
    },
    ExplanationRuleSpec {
        pattern: r"^for\s+(\w+)\s+in\b",
        template: "Loop that runs once for every item, binding it to '$1'",
    },
    ExplanationRuleSpec {
        pattern: r"print\(",
        template: "Outputs data to the console or terminal",
    },
    ExplanationRuleSpec {
        pattern: r"return\s+",
        template: "Returns a value from the function",
    },
    ExplanationRuleSpec {
        pattern: r"len\(",
        template: "Returns the number of items in a sequence or collection",
    },
    ExplanationRuleSpec {
        pattern: r"sum\(",
        template: "Returns the sum of all numeric values in an iterable",
    },
];
