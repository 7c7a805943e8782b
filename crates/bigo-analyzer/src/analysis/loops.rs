use super::{AnalysisInput, HeuristicOutcome};
use crate::ast::{find_all_loops, max_loop_nesting};
use bigo_core::{ComplexityClass, Confidence, LanguageBucket};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

pub const DIVIDE_AND_CONQUER: &str = "Binary search or divide-and-conquer pattern";

static HALVING_PYTHON: Lazy<Regex> = Lazy::new(|| Regex::new(r"//\s*2|/\s*2").unwrap());
static HALVING: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\s*2|>>|/=\s*2").unwrap());
static LEFT_RIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"left.*right|right.*left").unwrap());
static LOG_HINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"log|binary|divide").unwrap());

static LINEAR_PYTHON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for.*in.*range|for.*in.*len|while.*len|while.*<").unwrap());
static LINEAR_GO: Lazy<Regex> = Lazy::new(|| Regex::new(r"for.*range|for.*len|for.*<").unwrap());
static LINEAR_C_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for.*i.*length|for.*i.*<|while.*length|while.*<").unwrap());

static FOR_IN_PYTHON: Lazy<Regex> = Lazy::new(|| Regex::new(r"for\s+\w+\s+in").unwrap());
static WHILE_PYTHON: Lazy<Regex> = Lazy::new(|| Regex::new(r"while\s+").unwrap());
static FOR_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"for\s*\(").unwrap());
static WHILE_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"while\s*\(").unwrap());

fn has_linear_iteration(input: &AnalysisInput<'_>) -> bool {
    let pattern = match input.bucket {
        LanguageBucket::Python => &LINEAR_PYTHON,
        LanguageBucket::Go => &LINEAR_GO,
        _ => &LINEAR_C_STYLE,
    };
    pattern.is_match(input.text)
}

fn has_nested_linear_loops(input: &AnalysisInput<'_>) -> bool {
    let (for_loops, while_loops) = if input.is_python() {
        (&FOR_IN_PYTHON, &WHILE_PYTHON)
    } else {
        (&FOR_PAREN, &WHILE_PAREN)
    };
    for_loops.find_iter(input.text).count() + while_loops.find_iter(input.text).count() >= 2
}

fn looks_like_binary_search(input: &AnalysisInput<'_>) -> bool {
    let halving = if input.is_python() {
        &HALVING_PYTHON
    } else {
        &HALVING
    };
    input.text.contains("mid") && LEFT_RIGHT.is_match(input.text) && halving.is_match(input.text)
}

/// Classify by loop nesting, after checking for halving-style loops.
pub fn analyze_loops(input: &AnalysisInput<'_>) -> HeuristicOutcome {
    let loops = find_all_loops(input.nodes);
    if loops.is_empty() {
        return HeuristicOutcome::none();
    }

    let max_depth = max_loop_nesting(input.nodes);
    trace!(loops = loops.len(), max_depth, "loop nesting measured");

    let binary_search = looks_like_binary_search(input);
    if binary_search || (max_depth == 1 && LOG_HINT.is_match(&input.lower)) {
        let confidence = if input.is_python() {
            Confidence::Medium
        } else {
            Confidence::High
        };
        return HeuristicOutcome::found(ComplexityClass::Logarithmic, DIVIDE_AND_CONQUER, confidence);
    }

    let confidence = if max_depth <= 3 && !input.is_python() {
        Confidence::High
    } else {
        Confidence::Medium
    };

    match max_depth {
        1 if has_linear_iteration(input) => {
            HeuristicOutcome::found(ComplexityClass::Linear, "Single linear loop", confidence)
        }
        2 if has_nested_linear_loops(input) => {
            HeuristicOutcome::found(ComplexityClass::Quadratic, "Nested linear loops", confidence)
        }
        3 => HeuristicOutcome::found(ComplexityClass::Cubic, "Triple nested loops", confidence),
        depth if depth > 3 => HeuristicOutcome::found(
            ComplexityClass::Polynomial(depth as u32),
            format!("{} levels of nested loops", depth),
            confidence,
        ),
        _ => HeuristicOutcome::none_with(confidence),
    }
}
