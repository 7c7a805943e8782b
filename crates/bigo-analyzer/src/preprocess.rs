use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)/\*[\s\S]*?\*/|//.*$").unwrap());

/// Source with comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSource {
    /// Comment-free text, trimmed at both ends. Inner layout is preserved.
    pub text: String,
    /// Trimmed, non-empty lines of `text`.
    pub lines: Vec<String>,
}

impl CleanSource {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Strip `/* */` and `//` comments in one non-greedy pass.
///
/// `//` is removed wherever it appears, including inside string literals and
/// Python floor division.
pub fn preprocess(code: &str) -> CleanSource {
    let text = COMMENT_PATTERN.replace_all(code, "").trim().to_string();
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    CleanSource { text, lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_and_block_comments() {
        let source = preprocess("let a = 1; // one\n/* block\n spanning */let b = 2;\n");
        assert_eq!(source.text, "let a = 1; \nlet b = 2;");
        assert_eq!(source.lines, vec!["let a = 1;", "let b = 2;"]);
    }

    #[test]
    fn test_drops_blank_lines() {
        let source = preprocess("\n\n  a\n\n\t b  \n\n");
        assert_eq!(source.lines, vec!["a", "b"]);
    }

    #[test]
    fn test_comment_only_input_is_empty() {
        assert!(preprocess("// nothing here\n/* at all */").is_empty());
        assert!(preprocess("   \n\t").is_empty());
    }

    #[test]
    fn test_floor_division_is_treated_as_comment() {
        let source = preprocess("mid = (lo + hi) // 2");
        assert_eq!(source.text, "mid = (lo + hi)");
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let once = preprocess("for (i = 0; i < n; i++) {\n  sum += i;\n}");
        let twice = preprocess(&once.text);
        assert_eq!(once, twice);
    }
}
