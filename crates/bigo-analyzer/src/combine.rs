use crate::analysis::HeuristicOutcome;
use bigo_core::{ComplexityClass, Confidence};

/// Reduced view of the time heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeVerdict {
    pub complexity: ComplexityClass,
    pub patterns: Vec<String>,
    pub confidence: Confidence,
}

/// Worst complexity wins. `O(1)` outcomes are dropped first; ties keep the
/// order the heuristics ran in. Confidence never exceeds `baseline`.
pub fn combine_time(baseline: Confidence, outcomes: Vec<HeuristicOutcome>) -> TimeVerdict {
    let mut opinions: Vec<HeuristicOutcome> = outcomes
        .into_iter()
        .filter(HeuristicOutcome::has_opinion)
        .collect();

    // stable: equal weights stay in run order
    opinions.sort_by(|a, b| b.complexity.weight().cmp(&a.complexity.weight()));

    let Some(winner) = opinions.first() else {
        return TimeVerdict {
            complexity: ComplexityClass::Constant,
            patterns: Vec::new(),
            confidence: baseline,
        };
    };

    let complexity = winner.complexity;
    let confidence = baseline.min(winner.confidence);
    let patterns = opinions
        .into_iter()
        .flat_map(|outcome| outcome.patterns)
        .collect();

    TimeVerdict {
        complexity,
        patterns,
        confidence,
    }
}

pub fn explain(time: ComplexityClass, space: ComplexityClass, patterns: &[String]) -> String {
    if patterns.is_empty() {
        format!(
            "Time: {}, Space: {}. No significant complexity patterns detected.",
            time, space
        )
    } else {
        format!(
            "Time: {}, Space: {}. Analysis: {}.",
            time,
            space,
            patterns.join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(class: ComplexityClass, label: &str, confidence: Confidence) -> HeuristicOutcome {
        HeuristicOutcome::found(class, label, confidence)
    }

    #[test]
    fn test_heaviest_wins_regardless_of_order() {
        let verdict = combine_time(
            Confidence::High,
            vec![
                outcome(ComplexityClass::Linear, "loop", Confidence::High),
                outcome(ComplexityClass::Exponential, "recursion", Confidence::Medium),
                HeuristicOutcome::none(),
            ],
        );
        assert_eq!(verdict.complexity, ComplexityClass::Exponential);
        assert_eq!(verdict.patterns, vec!["recursion", "loop"]);
        assert_eq!(verdict.confidence, Confidence::Medium);
    }

    #[test]
    fn test_ties_keep_run_order() {
        let verdict = combine_time(
            Confidence::High,
            vec![
                outcome(ComplexityClass::Linear, "first", Confidence::High),
                outcome(ComplexityClass::Linear, "second", Confidence::Low),
            ],
        );
        assert_eq!(verdict.patterns, vec!["first", "second"]);
        assert_eq!(verdict.confidence, Confidence::High);
    }

    #[test]
    fn test_polynomial_ranks_below_every_class() {
        let verdict = combine_time(
            Confidence::High,
            vec![
                outcome(ComplexityClass::Polynomial(4), "deep", Confidence::Medium),
                outcome(ComplexityClass::Linear, "recursion", Confidence::High),
            ],
        );
        assert_eq!(verdict.complexity, ComplexityClass::Linear);
        assert_eq!(verdict.patterns, vec!["recursion", "deep"]);
        assert_eq!(verdict.confidence, Confidence::High);

        let alone = combine_time(
            Confidence::High,
            vec![outcome(ComplexityClass::Polynomial(5), "deep", Confidence::Medium)],
        );
        assert_eq!(alone.complexity, ComplexityClass::Polynomial(5));
    }

    #[test]
    fn test_baseline_caps_confidence() {
        let verdict = combine_time(
            Confidence::Low,
            vec![outcome(ComplexityClass::Quadratic, "nested", Confidence::High)],
        );
        assert_eq!(verdict.confidence, Confidence::Low);
    }

    #[test]
    fn test_no_opinions_is_constant() {
        let verdict = combine_time(
            Confidence::Medium,
            vec![
                HeuristicOutcome::none(),
                HeuristicOutcome::none_with(Confidence::Low),
            ],
        );
        assert_eq!(verdict.complexity, ComplexityClass::Constant);
        assert!(verdict.patterns.is_empty());
        assert_eq!(verdict.confidence, Confidence::Medium);
    }

    #[test]
    fn test_explanation_forms() {
        assert_eq!(
            explain(ComplexityClass::Constant, ComplexityClass::Constant, &[]),
            "Time: O(1), Space: O(1). No significant complexity patterns detected."
        );
        let patterns = vec!["Single linear loop".to_string(), "Array allocation".to_string()];
        assert_eq!(
            explain(ComplexityClass::Linear, ComplexityClass::Linear, &patterns),
            "Time: O(n), Space: O(n). Analysis: Single linear loop; Array allocation."
        );
    }
}
