//! Pattern Registry: the per-language rule tables behind the scanner and the explainer.
//!
//! Everything here is heuristic. The rules look at raw text with regular
//! expressions and never parse anything, so they over- and under-report by
//! construction. The tables in the language submodules are the only
//! language-specific surface of the crate.

mod cpp;
mod html;
mod java;
mod javascript;
mod python;

use crate::core::{Severity, SupportedLanguage};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Extra condition a regex hit has to pass before it becomes a finding.
///
/// The `regex` crate has no look-around or back-references, so the few rules
/// that need them express the missing half here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCheck {
    /// Every match is reported
    Always,
    /// Capture group 1 names a tag; report only when no `</tag` follows the match
    UnclosedTag,
}

/// Static description of an error rule, as written in the language tables
#[derive(Debug, Clone, Copy)]
pub struct ErrorRuleSpec {
    pub pattern: &'static str,
    pub message: &'static str,
    pub severity: Severity,
    pub check: MatchCheck,
}

/// Static description of an explanation rule
#[derive(Debug, Clone, Copy)]
pub struct ExplanationRuleSpec {
    pub pattern: &'static str,
    pub template: &'static str,
}

#[derive(Debug, Clone)]
pub struct ErrorRule {
    pub pattern: Regex,
    pub message: &'static str,
    pub severity: Severity,
    pub check: MatchCheck,
}

impl ErrorRule {
    /// Byte offsets of every accepted match start, in match order
    pub fn match_offsets(&self, buffer: &str) -> Vec<usize> {
        match self.check {
            MatchCheck::Always => self.pattern.find_iter(buffer).map(|m| m.start()).collect(),
            MatchCheck::UnclosedTag => {
                // ASCII lowercasing keeps byte offsets stable
                let lowered = buffer.to_ascii_lowercase();
                // Last `</tag` start per tag name, looked up once per scan
                let mut last_close: HashMap<String, Option<usize>> = HashMap::new();
                self.pattern
                    .captures_iter(buffer)
                    .filter_map(|caps| {
                        let whole = caps.get(0)?;
                        let tag = caps.get(1)?.as_str().to_ascii_lowercase();
                        let last = *last_close
                            .entry(tag)
                            .or_insert_with_key(|tag| lowered.rfind(&format!("</{tag}")));
                        let closed = last.is_some_and(|at| at >= whole.end());
                        (!closed).then_some(whole.start())
                    })
                    .collect()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExplanationRule {
    pub pattern: Regex,
    pub template: &'static str,
}

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d+)").expect("placeholder pattern is valid"));

impl ExplanationRule {
    /// Render the template for `line`, or `None` if the rule does not match.
    ///
    /// `$n` becomes capture group `n`; groups that did not take part become empty.
    pub fn explain(&self, line: &str) -> Option<String> {
        let caps = self.pattern.captures(line)?;
        Some(fill_template(self.template, &caps))
    }
}

fn fill_template(template: &str, caps: &Captures<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |placeholder: &Captures<'_>| {
            placeholder[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| caps.get(index))
                .map_or_else(String::new, |m| m.as_str().to_string())
        })
        .into_owned()
}

/// Compiled rule tables for one language
#[derive(Debug, Clone, Default)]
pub struct LanguageRules {
    pub errors: Vec<ErrorRule>,
    pub explanations: Vec<ExplanationRule>,
}

impl LanguageRules {
    fn compile(
        language: SupportedLanguage,
        errors: &[ErrorRuleSpec],
        explanations: &[ExplanationRuleSpec],
    ) -> Self {
        let errors = errors
            .iter()
            .filter_map(|spec| {
                compile_pattern(language, spec.pattern).map(|pattern| ErrorRule {
                    pattern,
                    message: spec.message,
                    severity: spec.severity,
                    check: spec.check,
                })
            })
            .collect();

        let explanations = explanations
            .iter()
            .filter_map(|spec| {
                compile_pattern(language, spec.pattern).map(|pattern| ExplanationRule {
                    pattern,
                    template: spec.template,
                })
            })
            .collect();

        Self {
            errors,
            explanations,
        }
    }
}

fn compile_pattern(language: SupportedLanguage, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::error!("Skipping invalid {} rule {:?}: {}", language, pattern, e);
            None
        }
    }
}

static REGISTRY: Lazy<HashMap<SupportedLanguage, LanguageRules>> = Lazy::new(|| {
    let tables: [(SupportedLanguage, &[ErrorRuleSpec], &[ExplanationRuleSpec]); 5] = [
        (
            SupportedLanguage::JavaScript,
            javascript::ERROR_RULES,
            javascript::EXPLANATION_RULES,
        ),
        (
            SupportedLanguage::Python,
            python::ERROR_RULES,
            python::EXPLANATION_RULES,
        ),
        (SupportedLanguage::Html, html::ERROR_RULES, html::EXPLANATION_RULES),
        (SupportedLanguage::Java, java::ERROR_RULES, java::EXPLANATION_RULES),
        (SupportedLanguage::Cpp, cpp::ERROR_RULES, cpp::EXPLANATION_RULES),
    ];

    tables
        .into_iter()
        .map(|(language, errors, explanations)| {
            (
                language,
                LanguageRules::compile(language, errors, explanations),
            )
        })
        .collect()
});

static EMPTY: Lazy<LanguageRules> = Lazy::new(LanguageRules::default);

/// Rule tables for a known language
pub fn rules_for(language: SupportedLanguage) -> &'static LanguageRules {
    REGISTRY.get(&language).unwrap_or(&*EMPTY)
}

/// Rule tables for a raw language key. Unknown keys get `None`; the caller
/// decides which default to fall back to.
pub fn lookup(key: &str) -> Option<&'static LanguageRules> {
    SupportedLanguage::parse(key).ok().map(rules_for)
}

pub fn error_rules(language: SupportedLanguage) -> &'static [ErrorRule] {
    &rules_for(language).errors
}

pub fn explanation_rules(language: SupportedLanguage) -> &'static [ExplanationRule] {
    &rules_for(language).explanations
}

/// Error rules for a raw key, empty for unknown languages
pub fn error_rules_for_key(key: &str) -> &'static [ErrorRule] {
    lookup(key)
        .map(|rules| rules.errors.as_slice())
        .unwrap_or_default()
}

/// Explanation rules for a raw key, empty for unknown languages
pub fn explanation_rules_for_key(key: &str) -> &'static [ExplanationRule] {
    lookup(key)
        .map(|rules| rules.explanations.as_slice())
        .unwrap_or_default()
}
