// Space heuristic: two output levels only, O(1) or O(n).
//
// The self-reference check here is separate from the recursion time heuristic
// and intentionally matches a different set of snippets: it is a backtracking
// regex over the text after a definition, so a name prefix that reappears
// followed by `(` also counts.

use super::AnalysisInput;
use bigo_core::{ComplexityClass, LanguageBucket};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

pub const CALL_STACK: &str = "Recursion call stack";
pub const ARRAY_ALLOCATION: &str = "Array allocation";
pub const HASH_ALLOCATION: &str = "Hash table/Set allocation";

static SELF_REFERENCE_PYTHON: Lazy<fancy_regex::Regex> =
    Lazy::new(|| fancy_regex::Regex::new(r"def\s+(\w+).*?:\s*[\s\S]*?\1\s*\(").unwrap());
static SELF_REFERENCE_GO: Lazy<fancy_regex::Regex> =
    Lazy::new(|| fancy_regex::Regex::new(r"func\s+(\w+).*?\{[\s\S]*?\1\s*\(").unwrap());
static SELF_REFERENCE_C_STYLE: Lazy<fancy_regex::Regex> =
    Lazy::new(|| fancy_regex::Regex::new(r"function\s+(\w+).*?\{[\s\S]*?\1\s*\(").unwrap());

static ARRAY_PYTHON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\]|\[.*\]|list\(").unwrap());
static HASH_PYTHON: Lazy<Regex> = Lazy::new(|| Regex::new(r"dict\(|\{\}|set\(").unwrap());
static ARRAY_JAVA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"new\s+\w+\[\]|new\s+ArrayList|new\s+Array").unwrap());
static HASH_JAVA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"new\s+(HashMap|HashSet|TreeMap|TreeSet)").unwrap());
static ARRAY_C_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"new\s+Array|Array\(|\[\]|\[.*\]").unwrap());
static HASH_C_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"new\s+(Map|Set|HashMap|HashSet)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceOutcome {
    pub complexity: ComplexityClass,
    pub patterns: Vec<String>,
}

fn has_self_reference(input: &AnalysisInput<'_>) -> bool {
    let pattern = match input.bucket {
        LanguageBucket::Python => &SELF_REFERENCE_PYTHON,
        LanguageBucket::Go => &SELF_REFERENCE_GO,
        _ => &SELF_REFERENCE_C_STYLE,
    };
    match pattern.is_match(input.text) {
        Ok(found) => found,
        Err(e) => {
            // backtrack limit on adversarial input; treat as no recursion
            warn!("self-reference check aborted: {}", e);
            false
        }
    }
}

fn allocation_patterns(bucket: LanguageBucket) -> (&'static Regex, &'static Regex) {
    match bucket {
        LanguageBucket::Python => (&*ARRAY_PYTHON, &*HASH_PYTHON),
        LanguageBucket::Java => (&*ARRAY_JAVA, &*HASH_JAVA),
        _ => (&*ARRAY_C_STYLE, &*HASH_C_STYLE),
    }
}

/// Auxiliary space: call-stack growth from recursion, or collection allocation.
pub fn analyze_space(input: &AnalysisInput<'_>) -> SpaceOutcome {
    let mut patterns = Vec::new();

    if has_self_reference(input) {
        patterns.push(CALL_STACK.to_string());
    }

    let (array, hash) = allocation_patterns(input.bucket);
    if array.is_match(input.text) {
        patterns.push(ARRAY_ALLOCATION.to_string());
    }
    if hash.is_match(input.text) {
        patterns.push(HASH_ALLOCATION.to_string());
    }

    let complexity = if patterns.is_empty() {
        ComplexityClass::Constant
    } else {
        ComplexityClass::Linear
    };

    SpaceOutcome {
        complexity,
        patterns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &str, bucket: LanguageBucket) -> SpaceOutcome {
        analyze_space(&AnalysisInput::new(src, bucket, &[]))
    }

    #[test]
    fn test_constant_space() {
        let outcome = run("function add(a, b) { return a + b; }", LanguageBucket::JavaScript);
        assert_eq!(outcome.complexity, ComplexityClass::Constant);
        assert!(outcome.patterns.is_empty());
    }

    #[test]
    fn test_recursion_uses_stack() {
        let outcome = run(
            "function depth(node) {\n  return 1 + depth(node.next);\n}",
            LanguageBucket::JavaScript,
        );
        assert_eq!(outcome.complexity, ComplexityClass::Linear);
        assert_eq!(outcome.patterns, vec![CALL_STACK]);
    }

    #[test]
    fn test_go_and_python_self_reference() {
        let go = run("func walk(n int) int {\n  return walk(n - 1)\n}", LanguageBucket::Go);
        assert_eq!(go.patterns, vec![CALL_STACK]);

        let py = run("def walk(n):\n    return walk(n - 1)", LanguageBucket::Python);
        assert_eq!(py.patterns, vec![CALL_STACK]);
    }

    #[test]
    fn test_both_allocation_families() {
        let outcome = run(
            "function f(n) { const seen = new Set(); const out = []; return out; }",
            LanguageBucket::JavaScript,
        );
        assert_eq!(outcome.complexity, ComplexityClass::Linear);
        assert_eq!(outcome.patterns, vec![ARRAY_ALLOCATION, HASH_ALLOCATION]);
    }

    #[test]
    fn test_java_allocations() {
        let outcome = run(
            "Map<String, Integer> m = new HashMap<>(); List<Integer> xs = new ArrayList<>();",
            LanguageBucket::Java,
        );
        assert_eq!(outcome.patterns, vec![ARRAY_ALLOCATION, HASH_ALLOCATION]);
    }

    #[test]
    fn test_python_allocations() {
        let outcome = run("seen = set()\nout = []", LanguageBucket::Python);
        assert_eq!(outcome.patterns, vec![ARRAY_ALLOCATION, HASH_ALLOCATION]);
    }
}
