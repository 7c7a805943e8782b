// Language sniffing from raw snippet text. An ordered list of keyword rules,
// first match wins; the order encodes precedence between overlapping keyword sets.

use bigo_core::{LanguageBucket, SupportTier};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BraceRule {
    Required,
    Forbidden,
    Ignored,
}

struct DetectionRule {
    bucket: LanguageBucket,
    keywords: Lazy<Regex>,
    /// Match keywords against the lower-cased text.
    case_insensitive: bool,
    braces: BraceRule,
}

impl DetectionRule {
    fn matches(&self, text: &str, lower: &str, has_braces: bool) -> bool {
        let brace_ok = match self.braces {
            BraceRule::Required => has_braces,
            BraceRule::Forbidden => !has_braces,
            BraceRule::Ignored => true,
        };
        let haystack = if self.case_insensitive { lower } else { text };
        brace_ok && self.keywords.is_match(haystack)
    }
}

macro_rules! rule {
    ($bucket:ident, $pattern:literal, $lower:literal, $braces:ident) => {
        DetectionRule {
            bucket: LanguageBucket::$bucket,
            keywords: Lazy::new(|| Regex::new($pattern).unwrap()),
            case_insensitive: $lower,
            braces: BraceRule::$braces,
        }
    };
}

static RULES: [DetectionRule; 9] = [
    rule!(JavaScript, r"\b(function|const|let|var|=>)\b", false, Required),
    rule!(Java, r"\b(public|private|class|void|int|String)\b", false, Required),
    rule!(CFamily, r"\b(int|void|char|float|double|#include)\b", false, Required),
    rule!(CSharp, r"\b(using|namespace|class|void|int|string)\b", false, Required),
    rule!(Python, r"\b(def|if|elif|else|for|while|in|range)\b", true, Forbidden),
    rule!(Go, r"\b(func|package|import|var|:=)\b", true, Ignored),
    rule!(Ruby, r"\b(def|end|class|if|elsif|while|each)\b", true, Ignored),
    rule!(Kotlin, r"\b(fun|val|var|class|if|when|for)\b", true, Ignored),
    rule!(Functional, r"\b(map|filter|reduce|lambda|foldr|foldl)\b", true, Ignored),
];

/// Outcome of language sniffing. Tier and warning are fixed per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDetection {
    pub bucket: LanguageBucket,
    pub support: SupportTier,
    pub warning: Option<&'static str>,
}

impl From<LanguageBucket> for LanguageDetection {
    fn from(bucket: LanguageBucket) -> Self {
        Self {
            bucket,
            support: bucket.support(),
            warning: bucket.warning(),
        }
    }
}

/// Classify comment-free text into a language bucket. Never fails.
pub fn detect_language(text: &str) -> LanguageDetection {
    let lower = text.to_lowercase();
    let has_braces = text.contains('{') || text.contains('}');

    for rule in RULES.iter() {
        if rule.matches(text, &lower, has_braces) {
            debug!(bucket = %rule.bucket, "language detected");
            return rule.bucket.into();
        }
        trace!(bucket = %rule.bucket, "language rule did not match");
    }

    let bucket = if text.trim().is_empty() {
        LanguageBucket::Unknown
    } else {
        LanguageBucket::UnknownCStyle
    };
    debug!(bucket = %bucket, "no language rule matched");
    bucket.into()
}
