//! Error Scanner: runs every error rule of a language over the whole buffer.

use super::editor_lines;
use crate::core::{Finding, SupportedLanguage};
use crate::registry::{self, ErrorRule};

/// Scan `source` with the error rules of `language`.
///
/// Findings follow rule order, then match order within a rule. They are not
/// sorted or deduplicated, so overlapping rules may report the same spot twice.
pub fn scan_for_errors(source: &str, language: SupportedLanguage) -> Vec<Finding> {
    if source.trim().is_empty() {
        return Vec::new();
    }

    let findings = scan_with_rules(source, registry::error_rules(language));
    tracing::debug!(
        language = language.key(),
        findings = findings.len(),
        "scanned buffer"
    );
    findings
}

/// Scan with an explicit rule list. An empty list yields no findings.
pub fn scan_with_rules(source: &str, rules: &[ErrorRule]) -> Vec<Finding> {
    if source.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = editor_lines(source).collect();
    let index = LineIndex::new(source);
    let mut findings = Vec::new();

    for rule in rules {
        for offset in rule.match_offsets(source) {
            let (line_index, char_offset) = index.locate(source, offset);
            findings.push(Finding {
                line: line_index + 1,
                message: rule.message.to_string(),
                severity: rule.severity,
                source_line: lines.get(line_index).copied().unwrap_or_default().to_string(),
                char_offset,
            });
        }
    }

    findings
}

/// Byte and character offsets of every line start
struct LineIndex {
    byte_starts: Vec<usize>,
    char_starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut byte_starts = vec![0];
        let mut char_starts = vec![0];
        for (chars, (byte, ch)) in source.char_indices().enumerate() {
            if ch == '\n' {
                byte_starts.push(byte + 1);
                char_starts.push(chars + 1);
            }
        }
        Self {
            byte_starts,
            char_starts,
        }
    }

    /// 0-based line and character offset of a byte offset
    fn locate(&self, source: &str, byte_offset: usize) -> (usize, usize) {
        let line = self
            .byte_starts
            .partition_point(|&start| start <= byte_offset)
            .saturating_sub(1);
        let line_start = self.byte_starts[line];
        let column = source
            .get(line_start..byte_offset)
            .map_or(0, |prefix| prefix.chars().count());
        (line, self.char_starts[line] + column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use pretty_assertions::assert_eq;

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn test_empty_and_blank_buffers() {
        for language in SupportedLanguage::ALL {
            assert!(scan_for_errors("", language).is_empty());
            assert!(scan_for_errors("  \n\t\n", language).is_empty());
        }
    }

    #[test]
    fn test_console_log_without_semicolon() {
        let findings = scan_for_errors("let x = 5\nconsole.log(x)", SupportedLanguage::JavaScript);

        assert_eq!(
            findings,
            vec![Finding {
                line: 2,
                message: "Missing semicolon after console.log statement".to_string(),
                severity: Severity::Error,
                source_line: "console.log(x)".to_string(),
                char_offset: 10,
            }]
        );
    }

    #[test]
    fn test_well_formed_javascript_is_clean() {
        let source = "const x = 5;\nconsole.log(x);";
        assert!(scan_for_errors(source, SupportedLanguage::JavaScript).is_empty());

        let source = "function add(a, b) {\n  return a + b;\n}\nconsole.log(add(1, 2));\n";
        assert!(scan_for_errors(source, SupportedLanguage::JavaScript).is_empty());
    }

    #[test]
    fn test_unbalanced_javascript_brackets() {
        let source = "function greet(name) {\n  console.log(name);\n";
        let findings = scan_for_errors(source, SupportedLanguage::JavaScript);

        assert_eq!(
            messages(&findings),
            vec!["Missing closing brace '}'", "Function missing closing brace"]
        );
        assert!(findings.iter().all(|f| f.line == 1));

        let findings = scan_for_errors("alert(\"hi\"\n", SupportedLanguage::JavaScript);
        assert_eq!(messages(&findings), vec!["Missing closing parenthesis ')'"]);
        assert_eq!(findings[0].char_offset, 5);
    }

    #[test]
    fn test_uninitialized_let_is_a_warning() {
        let findings = scan_for_errors("let total;\nlet count\n", SupportedLanguage::JavaScript);

        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
        assert_eq!(findings[0].line, 1);
        assert_eq!(findings[1].line, 2);
    }

    #[test]
    fn test_python_missing_colons() {
        let findings = scan_for_errors("if True\n    print(1)", SupportedLanguage::Python);

        assert_eq!(findings[0].message, "Missing colon ':' after if statement");
        assert_eq!(findings[0].line, 1);

        let source = "def area(r)\n    return r * r\nfor i in range(3)\n    pass";
        let findings = scan_for_errors(source, SupportedLanguage::Python);
        let colon_lines: Vec<usize> = findings
            .iter()
            .filter(|f| f.message.starts_with("Missing colon"))
            .map(|f| f.line)
            .collect();
        assert_eq!(colon_lines, vec![1, 3]);
    }

    #[test]
    fn test_python_indentation_rule_fires_on_top_level_lines() {
        // Deliberately crude: any line starting in column 0 with a letter is flagged.
        let findings = scan_for_errors("x = 1\ny = 2\n", SupportedLanguage::Python);

        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.message.starts_with("Potential indentation error")));
    }

    #[test]
    fn test_html_unclosed_div() {
        let findings = scan_for_errors("<div><span>hi</span>", SupportedLanguage::Html);

        assert_eq!(messages(&findings), vec!["Missing closing tag"]);
        assert_eq!(findings[0].char_offset, 0);
    }

    #[test]
    fn test_html_unclosed_title_and_open_tag() {
        let source = "<html>\n<title>Home\n<img src=\"a.png\"\n</html>";
        let findings = scan_for_errors(source, SupportedLanguage::Html);

        assert_eq!(
            messages(&findings),
            vec!["Unclosed HTML tag", "Missing closing </title> tag"]
        );
        assert_eq!(findings[0].line, 3);
        assert_eq!(findings[1].severity, Severity::Warning);
    }

    #[test]
    fn test_java_missing_semicolons() {
        let source = "public class Main {\n    public static void main(String[] args) {\n        int x = 10\n        System.out.println(x)\n    }\n}";
        let findings = scan_for_errors(source, SupportedLanguage::Java);

        assert_eq!(
            messages(&findings),
            vec![
                "Missing semicolon after variable declaration",
                "Missing semicolon after println statement"
            ]
        );
        assert_eq!(findings[0].line, 3);
        assert_eq!(findings[1].line, 4);
        assert_eq!(findings[0].source_line, "        int x = 10");
    }

    #[test]
    fn test_cpp_include_and_cout() {
        let source = "#include <iostream\nint main() {\n    cout << 5\n    return 0;\n}";
        let findings = scan_for_errors(source, SupportedLanguage::Cpp);

        assert_eq!(
            messages(&findings),
            vec![
                "Missing semicolon after cout statement",
                "Missing closing bracket '>' in include statement"
            ]
        );
        assert_eq!(findings[0].line, 3);
        assert_eq!(findings[1].line, 1);
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let source = "// größe\nconsole.log(x)";
        let findings = scan_for_errors(source, SupportedLanguage::JavaScript);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[0].char_offset, 9);
        assert_eq!(source.chars().nth(findings[0].char_offset), Some('c'));
    }

    #[test]
    fn test_empty_rule_list() {
        assert!(scan_with_rules("console.log(x)", &[]).is_empty());
    }
}
