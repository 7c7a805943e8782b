use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asymptotic growth class reported for time and space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential,
    /// Loop nests deeper than three levels, carrying the nesting depth.
    Polynomial(u32),
}

impl ComplexityClass {
    /// The enumerated classes in weight order.
    pub const ALL: [ComplexityClass; 7] = [
        ComplexityClass::Constant,
        ComplexityClass::Logarithmic,
        ComplexityClass::Linear,
        ComplexityClass::Linearithmic,
        ComplexityClass::Quadratic,
        ComplexityClass::Cubic,
        ComplexityClass::Exponential,
    ];

    /// Fixed severity used for "take the worst" reduction.
    ///
    /// `O(n^k)` has no rank and loses to every other class.
    pub fn weight(&self) -> u8 {
        match self {
            ComplexityClass::Constant => 1,
            ComplexityClass::Logarithmic => 2,
            ComplexityClass::Linear => 3,
            ComplexityClass::Linearithmic => 4,
            ComplexityClass::Quadratic => 5,
            ComplexityClass::Cubic => 6,
            ComplexityClass::Exponential => 7,
            ComplexityClass::Polynomial(_) => 0,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, ComplexityClass::Constant)
    }
}

impl Default for ComplexityClass {
    fn default() -> Self {
        ComplexityClass::Constant
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityClass::Constant => write!(f, "O(1)"),
            ComplexityClass::Logarithmic => write!(f, "O(log n)"),
            ComplexityClass::Linear => write!(f, "O(n)"),
            ComplexityClass::Linearithmic => write!(f, "O(n log n)"),
            ComplexityClass::Quadratic => write!(f, "O(n²)"),
            ComplexityClass::Cubic => write!(f, "O(n³)"),
            ComplexityClass::Exponential => write!(f, "O(2^n)"),
            ComplexityClass::Polynomial(k) => write!(f, "O(n^{})", k),
        }
    }
}

impl FromStr for ComplexityClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match normalized.to_lowercase().as_str() {
            "o(1)" => Ok(ComplexityClass::Constant),
            "o(logn)" => Ok(ComplexityClass::Logarithmic),
            "o(n)" => Ok(ComplexityClass::Linear),
            "o(nlogn)" => Ok(ComplexityClass::Linearithmic),
            "o(n²)" | "o(n^2)" => Ok(ComplexityClass::Quadratic),
            "o(n³)" | "o(n^3)" => Ok(ComplexityClass::Cubic),
            "o(2^n)" => Ok(ComplexityClass::Exponential),
            other => other
                .strip_prefix("o(n^")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|k| k.parse::<u32>().ok())
                .filter(|k| *k > 3)
                .map(ComplexityClass::Polynomial)
                .ok_or_else(|| format!("Unknown complexity class: {}", s)),
        }
    }
}

impl From<ComplexityClass> for String {
    fn from(class: ComplexityClass) -> Self {
        class.to_string()
    }
}

impl TryFrom<String> for ComplexityClass {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How much the estimate can be trusted. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Static quality of the heuristics for a detected language bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportTier {
    Full,
    Partial,
    Limited,
    Unsupported,
}

impl SupportTier {
    /// Baseline confidence before any analyzer has spoken.
    pub fn confidence_ceiling(&self) -> Confidence {
        match self {
            SupportTier::Full => Confidence::High,
            SupportTier::Partial => Confidence::Medium,
            SupportTier::Limited | SupportTier::Unsupported => Confidence::Low,
        }
    }
}

impl fmt::Display for SupportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SupportTier::Full => "full",
            SupportTier::Partial => "partial",
            SupportTier::Limited => "limited",
            SupportTier::Unsupported => "unsupported",
        };
        write!(f, "{}", s)
    }
}

/// Fixed set of language families the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageBucket {
    JavaScript,
    Java,
    CFamily,
    CSharp,
    Python,
    Go,
    Ruby,
    Kotlin,
    Functional,
    UnknownCStyle,
    Unknown,
}

impl LanguageBucket {
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageBucket::JavaScript => "JavaScript/TypeScript",
            LanguageBucket::Java => "Java",
            LanguageBucket::CFamily => "C/C++",
            LanguageBucket::CSharp => "C#",
            LanguageBucket::Python => "Python",
            LanguageBucket::Go => "Go",
            LanguageBucket::Ruby => "Ruby",
            LanguageBucket::Kotlin => "Kotlin",
            LanguageBucket::Functional => "Functional Language",
            LanguageBucket::UnknownCStyle => "Unknown (C-style assumed)",
            LanguageBucket::Unknown => "Unknown",
        }
    }

    pub fn support(&self) -> SupportTier {
        match self {
            LanguageBucket::JavaScript
            | LanguageBucket::Java
            | LanguageBucket::CFamily
            | LanguageBucket::CSharp => SupportTier::Full,
            LanguageBucket::Python
            | LanguageBucket::Go
            | LanguageBucket::Kotlin
            | LanguageBucket::UnknownCStyle => SupportTier::Partial,
            LanguageBucket::Ruby | LanguageBucket::Functional => SupportTier::Limited,
            LanguageBucket::Unknown => SupportTier::Unsupported,
        }
    }

    pub fn warning(&self) -> Option<&'static str> {
        match self {
            LanguageBucket::Python => Some(
                "Python analysis may be less accurate due to syntax differences. Best results with JavaScript-like languages.",
            ),
            LanguageBucket::Go => Some(
                "Go analysis may miss some patterns. Consider using JavaScript-like syntax for better accuracy.",
            ),
            LanguageBucket::Ruby => Some(
                "Ruby analysis is limited. Results may not be accurate. Consider using JavaScript-like languages.",
            ),
            LanguageBucket::Kotlin => Some(
                "Kotlin analysis may miss some patterns. Better accuracy with Java or JavaScript.",
            ),
            LanguageBucket::Functional => Some(
                "Functional programming analysis is limited. This tool is optimized for imperative languages.",
            ),
            LanguageBucket::UnknownCStyle => {
                Some("Language not detected. Assuming C-style syntax. Results may vary.")
            }
            LanguageBucket::Unknown => {
                Some("Unable to detect programming language or syntax not supported.")
            }
            _ => None,
        }
    }
}

impl fmt::Display for LanguageBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The single output of one analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub time_complexity: ComplexityClass,
    pub space_complexity: ComplexityClass,
    pub explanation: String,
    pub patterns: Vec<String>,
    pub confidence: Confidence,
    pub language: String,
    pub language_support: SupportTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_follow_declaration_order() {
        let weights: Vec<u8> = ComplexityClass::ALL.iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(ComplexityClass::Polynomial(5).weight(), 0);
    }

    #[test]
    fn test_display_and_parse() {
        for class in ComplexityClass::ALL {
            let parsed: ComplexityClass = class.to_string().parse().unwrap();
            assert_eq!(parsed, class);
        }
        assert_eq!(ComplexityClass::Polynomial(4).to_string(), "O(n^4)");
        assert_eq!("O(n^2)".parse::<ComplexityClass>(), Ok(ComplexityClass::Quadratic));
        assert_eq!("O(n log n)".parse::<ComplexityClass>(), Ok(ComplexityClass::Linearithmic));
        assert!("O(n!)".parse::<ComplexityClass>().is_err());
        assert!("O(n^1)".parse::<ComplexityClass>().is_err());
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
        assert_eq!(Confidence::High.min(Confidence::Medium), Confidence::Medium);
    }

    #[test]
    fn test_bucket_tiers_are_static() {
        assert_eq!(LanguageBucket::JavaScript.support(), SupportTier::Full);
        assert_eq!(LanguageBucket::Python.support(), SupportTier::Partial);
        assert_eq!(LanguageBucket::Ruby.support(), SupportTier::Limited);
        assert_eq!(LanguageBucket::Unknown.support(), SupportTier::Unsupported);
        assert!(LanguageBucket::Java.warning().is_none());
        assert!(LanguageBucket::UnknownCStyle.warning().is_some());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = AnalysisResult {
            time_complexity: ComplexityClass::Quadratic,
            space_complexity: ComplexityClass::Constant,
            explanation: "Time: O(n²), Space: O(1). Analysis: Nested linear loops.".to_string(),
            patterns: vec!["Nested linear loops".to_string()],
            confidence: Confidence::High,
            language: "Java".to_string(),
            language_support: SupportTier::Full,
            warning: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["timeComplexity"], "O(n²)");
        assert_eq!(json["languageSupport"], "full");
        assert_eq!(json["confidence"], "high");
        assert!(json.get("warning").is_none());

        let back: AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
