use crate::analysis::{analyze_space, AnalysisInput, TIME_HEURISTICS};
use crate::ast::parse;
use crate::combine::{combine_time, explain};
use crate::language::detect_language;
use crate::preprocess::preprocess;
use crate::tokenizer::tokenize;
use bigo_core::{AnalysisResult, ComplexityEstimator, LanguageBucket};
use tracing::{debug, instrument, warn};

/// Estimate the time and space complexity of `code`.
///
/// Pure and infallible: unreadable input degrades to a low-confidence `O(1)`
/// result with a warning instead of an error.
#[instrument(skip_all, fields(bytes = code.len()))]
pub fn analyze(code: &str) -> AnalysisResult {
    let source = preprocess(code);
    debug!(lines = source.lines.len(), "comments stripped");

    let detection = detect_language(&source.text);
    match detection.bucket {
        LanguageBucket::Unknown | LanguageBucket::UnknownCStyle => {
            warn!(language = %detection.bucket, "language not recognized")
        }
        _ if detection.warning.is_some() => {
            debug!(language = %detection.bucket, support = %detection.support, "reduced language support")
        }
        _ => {}
    }

    let tokens = tokenize(&source.text, detection.bucket);
    let nodes = parse(&tokens, detection.bucket);
    debug!(tokens = tokens.len(), nodes = nodes.len(), "structure parsed");

    let input = AnalysisInput::new(&source.text, detection.bucket, &nodes);
    let outcomes = TIME_HEURISTICS
        .iter()
        .map(|(name, heuristic)| {
            let outcome = heuristic(&input);
            debug!(
                heuristic = *name,
                complexity = %outcome.complexity,
                confidence = %outcome.confidence,
                "time heuristic finished"
            );
            outcome
        })
        .collect();

    let baseline = detection.support.confidence_ceiling();
    let time = combine_time(baseline, outcomes);
    let space = analyze_space(&input);
    debug!(time = %time.complexity, space = %space.complexity, "complexity combined");

    let mut patterns = time.patterns;
    patterns.extend(space.patterns);
    let explanation = explain(time.complexity, space.complexity, &patterns);

    AnalysisResult {
        time_complexity: time.complexity,
        space_complexity: space.complexity,
        explanation,
        patterns,
        confidence: time.confidence,
        language: detection.bucket.display_name().to_string(),
        language_support: detection.support,
        warning: detection.warning.map(str::to_string),
    }
}

/// [`ComplexityEstimator`] backed by the regex and token heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ComplexityEstimator for HeuristicAnalyzer {
    fn analyze(&self, code: &str) -> AnalysisResult {
        analyze(code)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
