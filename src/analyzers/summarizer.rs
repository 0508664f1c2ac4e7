//! Heuristic Summarizer: buckets lines into imports, functions and classes,
//! tallies prints, loops and conditionals, and renders a fixed-layout report.
//!
//! This is the self-contained fallback whenever no explanation service answers,
//! so it must never touch the network or any shared state.

use crate::core::Summary;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:import |from )|#include\s*<").expect("valid import pattern"));

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^def\s+\w+\s*\(|^function\s+\w+\s*\(|^[\w*:]+\s+\w+\s*\([^)]*\)\s*\{?$")
        .expect("valid function pattern")
});

static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^class\s+\w+|^struct\s+\w+").expect("valid class pattern"));

static PRINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bprint\s*\(|\bconsole\.log\s*\(|\bprintf\s*\(").expect("valid print pattern")
});

static LOOP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^for\b|\bfor\s*\(|^while\b|\bwhile\s*\(").expect("valid loop pattern")
});

static CONDITIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^if\b|\bif\s*\(|^else\b").expect("valid conditional pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

const RECOMMENDATIONS: [&str; 4] = [
    "Add docstrings/comments for functions and complex blocks.",
    "Validate inputs and handle edge cases.",
    "Avoid heavy work inside tight loops; cache results where possible.",
    "Add tests for boundary cases.",
];

const PYTHON_HINTS: [&str; 2] = [
    "Use list comprehensions for concise transformations.",
    "Prefer enumerations over range(len(...)) when iterating with indexes.",
];

/// Classify every line of `source`. `language_name` is the display name of the
/// selected language and only decides whether the Python hints are attached.
pub fn summarize(source: &str, language_name: &str) -> Summary {
    let lines: Vec<String> = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).replace('\t', "    "))
        .collect();

    let mut summary = Summary {
        language: language_name.to_string(),
        total_lines: lines.len(),
        recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        ..Summary::default()
    };

    for line in &lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if IMPORT.is_match(line) {
            summary.imports.push(line.to_string());
            continue;
        }

        if FUNCTION.is_match(line) {
            summary
                .functions
                .push(WHITESPACE_RUN.replace_all(line, " ").into_owned());
            continue;
        }

        if CLASS.is_match(line) {
            summary.classes.push(line.to_string());
            continue;
        }

        if PRINT.is_match(line) {
            summary.print_count += 1;
        }
        if LOOP.is_match(line) {
            summary.loop_count += 1;
        }
        if CONDITIONAL.is_match(line) {
            summary.conditional_count += 1;
        }
    }

    if language_name.to_lowercase().contains("python") {
        summary.language_hints = PYTHON_HINTS.iter().map(|s| s.to_string()).collect();
    }

    tracing::debug!(
        language = language_name,
        lines = summary.total_lines,
        imports = summary.imports.len(),
        functions = summary.functions.len(),
        classes = summary.classes.len(),
        "summarized buffer"
    );

    summary
}

/// Plain-text rendering of a [`Summary`]
pub fn render_summary(summary: &Summary) -> String {
    summary.to_string()
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    write!(f, "\n{} ({}):\n- {}\n", title, items.len(), items.join("\n- "))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language: {}\nLines: {}\n", self.language, self.total_lines)?;

        write_section(f, "Imports", &self.imports)?;
        write_section(f, "Classes", &self.classes)?;
        write_section(f, "Functions", &self.functions)?;

        write!(
            f,
            "\nTop-level observations:\n- print/log statements: {}\n- loops: {}\n- conditionals: {}\n",
            self.print_count, self.loop_count, self.conditional_count
        )?;

        f.write_str("\nQuick recommendations:\n")?;
        for tip in &self.recommendations {
            writeln!(f, "- {tip}")?;
        }

        if !self.language_hints.is_empty() {
            f.write_str("\nPython hints:\n")?;
            for hint in &self.language_hints {
                writeln!(f, "- {hint}")?;
            }
        }

        Ok(())
    }
}
