use super::{AnalysisInput, HeuristicOutcome};
use bigo_core::{ComplexityClass, Confidence};
use once_cell::sync::Lazy;
use regex::Regex;

static MID_ARITHMETIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"mid.*=.*\+.*/|mid.*=.*>>").unwrap());
static MID_FLOOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"mid.*=.*floor.*/").unwrap());
static LEFT_RIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"left.*right|right.*left").unwrap());
static POINTER_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"left.*right|start.*end|i.*j").unwrap());
static STEP_OPERATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+\+|--").unwrap());
static FOR_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"for.*\(").unwrap());
static WINDOW: Lazy<Regex> = Lazy::new(|| Regex::new(r"window|slide").unwrap());
static WHILE_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"while.*\(").unwrap());
static HASH_LOOKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"map\.has|map\.get|set\.has").unwrap());

struct Idiom {
    label: &'static str,
    complexity: ComplexityClass,
    detect: fn(&AnalysisInput<'_>) -> bool,
}

fn binary_search(input: &AnalysisInput<'_>) -> bool {
    let lower = input.lower.as_str();
    (MID_ARITHMETIC.is_match(input.text) || MID_FLOOR.is_match(lower)) && LEFT_RIGHT.is_match(lower)
}

fn two_pointers(input: &AnalysisInput<'_>) -> bool {
    let lower = input.lower.as_str();
    POINTER_PAIR.is_match(lower) && STEP_OPERATOR.is_match(input.text) && !FOR_CALL.is_match(lower)
}

fn sliding_window(input: &AnalysisInput<'_>) -> bool {
    let lower = input.lower.as_str();
    WINDOW.is_match(lower) || (LEFT_RIGHT.is_match(lower) && WHILE_CALL.is_match(lower))
}

fn hash_lookup(input: &AnalysisInput<'_>) -> bool {
    let lower = input.lower.as_str();
    HASH_LOOKUP.is_match(lower) && !FOR_CALL.is_match(lower)
}

// First match wins.
const IDIOMS: [Idiom; 4] = [
    Idiom {
        label: "Binary search algorithm",
        complexity: ComplexityClass::Logarithmic,
        detect: binary_search,
    },
    Idiom {
        label: "Two pointers technique",
        complexity: ComplexityClass::Linear,
        detect: two_pointers,
    },
    Idiom {
        label: "Sliding window technique",
        complexity: ComplexityClass::Linear,
        detect: sliding_window,
    },
    Idiom {
        label: "Hash table operations",
        complexity: ComplexityClass::Linear,
        detect: hash_lookup,
    },
];

/// Spot well-known algorithm shapes by naming and operator conventions.
pub fn analyze_idioms(input: &AnalysisInput<'_>) -> HeuristicOutcome {
    IDIOMS
        .iter()
        .find(|idiom| (idiom.detect)(input))
        .map(|idiom| HeuristicOutcome::found(idiom.complexity, idiom.label, Confidence::High))
        .unwrap_or_else(HeuristicOutcome::none)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigo_core::LanguageBucket;

    fn run(src: &str) -> HeuristicOutcome {
        analyze_idioms(&AnalysisInput::new(src, LanguageBucket::JavaScript, &[]))
    }

    #[test]
    fn test_binary_search() {
        let outcome = run("let mid = Math.floor((left + right) / 2);");
        assert_eq!(outcome.complexity, ComplexityClass::Logarithmic);
        assert_eq!(outcome.patterns, vec!["Binary search algorithm"]);
    }

    #[test]
    fn test_two_pointers() {
        let outcome = run("while (start < end) {\n  start++;\n  end--;\n}");
        assert_eq!(outcome.patterns, vec!["Two pointers technique"]);
        assert_eq!(outcome.complexity, ComplexityClass::Linear);
    }

    #[test]
    fn test_two_pointers_excluded_by_for_loops() {
        let outcome = run("for (s = start; s < end; s++) { }");
        assert!(!outcome.has_opinion());
    }

    #[test]
    fn test_sliding_window() {
        let outcome = run("const windowSum = sum(arr.slice(0, k));");
        assert_eq!(outcome.patterns, vec!["Sliding window technique"]);
    }

    #[test]
    fn test_hash_lookup() {
        let outcome = run("if (seen.has(x)) { return map.get(x); }");
        assert_eq!(outcome.patterns, vec!["Hash table operations"]);
    }

    #[test]
    fn test_nothing_recognized() {
        assert_eq!(run("return a + b;"), HeuristicOutcome::none());
    }
}
