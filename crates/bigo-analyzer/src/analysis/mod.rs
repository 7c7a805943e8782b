//! The complexity heuristics. Each is a pure function over the same parsed
//! tree and comment-free text; none of them looks at another's output.

pub mod idioms;
pub mod loops;
pub mod recursion;
pub mod space;

pub use idioms::analyze_idioms;
pub use loops::analyze_loops;
pub use recursion::analyze_recursion;
pub use space::{analyze_space, SpaceOutcome};

use crate::ast::AstNode;
use bigo_core::{ComplexityClass, Confidence, LanguageBucket};

/// Read-only view shared by every heuristic.
#[derive(Debug)]
pub struct AnalysisInput<'a> {
    pub text: &'a str,
    pub lower: String,
    pub bucket: LanguageBucket,
    pub nodes: &'a [AstNode],
}

impl<'a> AnalysisInput<'a> {
    pub fn new(text: &'a str, bucket: LanguageBucket, nodes: &'a [AstNode]) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            bucket,
            nodes,
        }
    }

    pub fn is_python(&self) -> bool {
        self.bucket == LanguageBucket::Python
    }
}

/// What one time heuristic concluded. `O(1)` means "no opinion".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicOutcome {
    pub complexity: ComplexityClass,
    pub patterns: Vec<String>,
    pub confidence: Confidence,
}

impl HeuristicOutcome {
    pub fn none() -> Self {
        Self::none_with(Confidence::High)
    }

    pub fn none_with(confidence: Confidence) -> Self {
        Self {
            complexity: ComplexityClass::Constant,
            patterns: Vec::new(),
            confidence,
        }
    }

    pub fn found(complexity: ComplexityClass, pattern: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            complexity,
            patterns: vec![pattern.into()],
            confidence,
        }
    }

    pub fn has_opinion(&self) -> bool {
        !self.complexity.is_constant()
    }
}

pub type TimeHeuristic = fn(&AnalysisInput<'_>) -> HeuristicOutcome;

/// The time heuristics in evaluation order. Order only matters for ties.
pub const TIME_HEURISTICS: [(&str, TimeHeuristic); 3] = [
    ("loops", analyze_loops),
    ("recursion", analyze_recursion),
    ("idioms", analyze_idioms),
];
