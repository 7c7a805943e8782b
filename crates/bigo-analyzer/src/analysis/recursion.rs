use super::{AnalysisInput, HeuristicOutcome};
use crate::ast::NodeKind;
use bigo_core::{ComplexityClass, Confidence, LanguageBucket};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

static MEMOIZATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"memo|cache|dp|dynamic").unwrap());
static FIBONACCI: Lazy<Regex> = Lazy::new(|| Regex::new(r"fibonacci|fib").unwrap());
static SORT_HINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"merge|quick|sort").unwrap());

static SLICING_PYTHON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*:.*\]|slice").unwrap());
static SLICING_GO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*:.*\]").unwrap());
static SLICING_C_STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"slice|substring|substr").unwrap());

fn has_array_slicing(input: &AnalysisInput<'_>) -> bool {
    let pattern = match input.bucket {
        LanguageBucket::Python => &SLICING_PYTHON,
        LanguageBucket::Go => &SLICING_GO,
        _ => &SLICING_C_STYLE,
    };
    pattern.is_match(input.text)
}

/// Calls of `name(` in the text, minus the definition itself.
fn count_self_calls(name: &str, text: &str) -> usize {
    let pattern = format!(r"\b{}\s*\(", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count().saturating_sub(1),
        Err(e) => {
            warn!("skipping function {:?}: {}", name, e);
            0
        }
    }
}

/// Classify the first top-level function that calls itself.
pub fn analyze_recursion(input: &AnalysisInput<'_>) -> HeuristicOutcome {
    let functions = input
        .nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Function);

    for func in functions {
        let name = func.content.as_str();
        if name.is_empty() {
            continue;
        }

        let recursive_calls = count_self_calls(name, input.text);
        trace!(function = name, recursive_calls, "self calls counted");
        if recursive_calls == 0 {
            continue;
        }

        if recursive_calls >= 2 && !MEMOIZATION.is_match(&input.lower) {
            if FIBONACCI.is_match(&input.lower) {
                return HeuristicOutcome::found(
                    ComplexityClass::Exponential,
                    "Exponential recursion (Fibonacci-like)",
                    Confidence::High,
                );
            }
            return HeuristicOutcome::found(
                ComplexityClass::Exponential,
                "Multiple recursive calls without memoization",
                Confidence::Medium,
            );
        }

        if recursive_calls == 1 {
            if SORT_HINT.is_match(&input.lower) || has_array_slicing(input) {
                return HeuristicOutcome::found(
                    ComplexityClass::Linearithmic,
                    "Divide and conquer with linear work",
                    Confidence::High,
                );
            }
            return HeuristicOutcome::found(
                ComplexityClass::Linear,
                "Linear recursion",
                Confidence::High,
            );
        }
        // memoized multi-call recursion: no opinion, try the next function
    }

    HeuristicOutcome::none()
}
