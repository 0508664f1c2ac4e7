//! Stdin detection for the remote run path: does a program read input, how
//! many values does it expect, and which prompts does it print before each read.

use crate::core::constants::fallbacks;
use crate::core::JudgeLanguage;
use once_cell::sync::Lazy;
use regex::Regex;

static PYTHON_INPUT_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"input\(").expect("valid python input pattern"));

static PYTHON_PROMPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"input\s*\(\s*["']([^"']+)["']\s*\)"#).expect("valid python prompt pattern")
});

static C_READ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"scanf\(|cin\s*>>").expect("valid c read pattern"));

static C_PROMPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"printf\s*\(\s*"([^"]+)"\s*\)"#).expect("valid c prompt pattern")
});

static JAVA_READ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.next\w*\(").expect("valid java read pattern"));

static JAVA_PROMPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"System\.out\.print(?:ln)?\s*\(\s*"([^"]+)"\s*\)"#)
        .expect("valid java prompt pattern")
});

/// Whether `source` looks like it reads from stdin. Case-insensitive.
pub fn detect_input_required(source: &str, language: JudgeLanguage) -> bool {
    let lower = source.to_lowercase();
    let cues: &[&str] = match language {
        JudgeLanguage::Python => &["input(", "raw_input("],
        JudgeLanguage::C | JudgeLanguage::Cpp => &["scanf(", "cin >>", "cin>>"],
        JudgeLanguage::Java => &["scanner", ".nextint(", ".nextline(", ".next("],
        JudgeLanguage::JavaScript => &["readline("],
    };
    cues.iter().any(|cue| lower.contains(cue))
}

/// Number of read calls in `source`. JavaScript reads are not counted.
pub fn count_expected_inputs(source: &str, language: JudgeLanguage) -> usize {
    match language {
        JudgeLanguage::Python => PYTHON_INPUT_CALL.find_iter(source).count(),
        JudgeLanguage::C | JudgeLanguage::Cpp => C_READ.find_iter(source).count(),
        JudgeLanguage::Java => JAVA_READ.find_iter(source).count(),
        JudgeLanguage::JavaScript => 0,
    }
}

/// Prompts printed before each read, in source order.
///
/// When nothing can be extracted, one generic prompt is returned per expected input.
pub fn extract_input_prompts(source: &str, language: JudgeLanguage) -> Vec<String> {
    let prompts = match language {
        JudgeLanguage::Python => PYTHON_PROMPT
            .captures_iter(source)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect(),
        JudgeLanguage::C | JudgeLanguage::Cpp => prompts_before_reads(
            source,
            |line| line.contains("scanf") || line.contains("cin >>"),
            &C_PROMPT,
        ),
        JudgeLanguage::Java => {
            prompts_before_reads(source, |line| line.contains(".next"), &JAVA_PROMPT)
        }
        JudgeLanguage::JavaScript => Vec::new(),
    };

    if !prompts.is_empty() {
        return prompts;
    }

    let expected = count_expected_inputs(source, language);
    vec![fallbacks::INPUT_PROMPT.to_string(); expected]
}

/// For every read line, walk back to the nearest prompt. The walk stops at
/// another read or at a block opener.
fn prompts_before_reads(source: &str, is_read: impl Fn(&str) -> bool, prompt: &Regex) -> Vec<String> {
    let lines: Vec<&str> = source.split('\n').map(str::trim).collect();
    let mut prompts = Vec::new();

    for (index, &line) in lines.iter().enumerate() {
        if !is_read(line) {
            continue;
        }

        for &previous in lines[..index].iter().rev() {
            if let Some(caps) = prompt.captures(previous) {
                if let Some(text) = caps.get(1) {
                    prompts.push(text.as_str().to_string());
                }
                break;
            }
            if is_read(previous) || previous.contains('{') {
                break;
            }
        }
    }

    prompts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("name = input('Name? ')", JudgeLanguage::Python, true ; "python input")]
    #[test_case("x = RAW_INPUT()", JudgeLanguage::Python, true ; "python raw_input any case")]
    #[test_case("scanf(\"%d\", &n);", JudgeLanguage::C, true ; "c scanf")]
    #[test_case("cin>>n;", JudgeLanguage::Cpp, true ; "cpp cin without spaces")]
    #[test_case("Scanner sc = new Scanner(System.in);", JudgeLanguage::Java, true ; "java scanner")]
    #[test_case("const line = readline();", JudgeLanguage::JavaScript, true ; "javascript readline")]
    #[test_case("print('hi')", JudgeLanguage::Python, false ; "python without input")]
    #[test_case("input()", JudgeLanguage::Java, false ; "cue of another language")]
    fn test_detect_input_required(source: &str, language: JudgeLanguage, expected: bool) {
        assert_eq!(detect_input_required(source, language), expected);
    }

    #[test]
    fn test_count_expected_inputs() {
        assert_eq!(count_expected_inputs("a = input()\nb = input('b')", JudgeLanguage::Python), 2);
        assert_eq!(
            count_expected_inputs("scanf(\"%d\", &a);\ncin >> b;\ncin>>c;", JudgeLanguage::Cpp),
            3
        );
        assert_eq!(
            count_expected_inputs("sc.nextInt();\nsc.nextLine();", JudgeLanguage::Java),
            2
        );
        assert_eq!(count_expected_inputs("readline()", JudgeLanguage::JavaScript), 0);
    }

    #[test]
    fn test_python_prompts() {
        let source = "name = input(\"Your name: \")\nage = input('Age: ')";
        assert_eq!(
            extract_input_prompts(source, JudgeLanguage::Python),
            vec!["Your name: ", "Age: "]
        );
    }

    #[test]
    fn test_c_prompts_walk_back_to_printf() {
        let source = "int main() {\n    printf(\"First: \");\n    scanf(\"%d\", &a);\n    printf(\"Second: \");\n\n    scanf(\"%d\", &b);\n}";
        assert_eq!(
            extract_input_prompts(source, JudgeLanguage::C),
            vec!["First: ", "Second: "]
        );
    }

    #[test]
    fn test_java_prompt_walk_stops_at_block() {
        let source = "void read() {\n    int a = sc.nextInt();\n    System.out.print(\"b? \");\n    int b = sc.nextInt();\n}";
        assert_eq!(extract_input_prompts(source, JudgeLanguage::Java), vec!["b? "]);
    }

    #[test]
    fn test_generic_prompts_when_none_found() {
        let source = "a = input()\nb = input()";
        assert_eq!(
            extract_input_prompts(source, JudgeLanguage::Python),
            vec!["Enter input: ", "Enter input: "]
        );
        assert!(extract_input_prompts("console.log(1)", JudgeLanguage::JavaScript).is_empty());
    }
}
