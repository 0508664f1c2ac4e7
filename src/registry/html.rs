use super::{ErrorRuleSpec, ExplanationRuleSpec, MatchCheck};
use crate::core::Severity;

pub(super) const ERROR_RULES: &[ErrorRuleSpec] = &[
    ErrorRuleSpec {
        pattern: r"(?i)<(p|div|span|h[1-6])\b[^>]*>",
        message: "Missing closing tag",
        severity: Severity::Error,
        check: MatchCheck::UnclosedTag,
    },
    ErrorRuleSpec {
        pattern: r"(?m)<\w+(?:[^>\r\n]*[^>/\r\n])?\r?$",
        message: "Unclosed HTML tag",
        severity: Severity::Error,
        check: MatchCheck::Always,
    },
    ErrorRuleSpec {
        pattern: r"(?i)<(title)\b[^>]*>",
        message: "Missing closing </title> tag",
        severity: Severity::Warning,
        check: MatchCheck::UnclosedTag,
    },
];

pub(super) const EXPLANATION_RULES: &[ExplanationRuleSpec] = &[
    ExplanationRuleSpec {
        pattern: r"(?i)<!DOCTYPE html>",
        template: "Declares this document as HTML5",
    },
    ExplanationRuleSpec {
        pattern: r"<html>",
        template: "Root element of the HTML document",
    },
    ExplanationRuleSpec {
        pattern: r"<head>",
        template: "Contains metadata about the HTML document",
    },
    ExplanationRuleSpec {
        pattern: r"<body>",
        template: "Contains the visible content of the HTML document",
    },
    ExplanationRuleSpec {
        pattern: r"<title>",
        template: "Sets the title displayed in the browser tab",
    },
    ExplanationRuleSpec {
        pattern: r"<h([1-6])>",
        template: "Creates a level $1 heading for structuring content",
    },
    ExplanationRuleSpec {
        pattern: r"<p>",
        template: "Creates a paragraph of text",
    },
    ExplanationRuleSpec {
        pattern: r"<div>",
        template: "Creates a generic container for grouping elements",
    },
];
