use bigo_core::LanguageBucket;
use once_cell::sync::Lazy;
use regex::Regex;

static C_STYLE_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\b(?:for|while|if|else|function|return|const|let|var|new|Map|Set|Array)\b|[(){}\[\];,=<>!&|+\-*/]|\w+|"[^"]*"|'[^']*'"#,
    )
    .unwrap()
});

// No brace or bracket singletons; the colon stands in as the block opener.
static PYTHON_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\b(?:for|while|if|elif|else|def|return|in|range|len)\b|[():,=<>!&|+\-*/]|\w+|"[^"]*"|'[^']*'"#,
    )
    .unwrap()
});

static GO_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\b(?:for|if|else|func|return|var|:=|range|len)\b|[(){}\[\];,=<>!&|+\-*/]|\w+|"[^"]*"|'[^']*'"#,
    )
    .unwrap()
});

fn token_pattern(bucket: LanguageBucket) -> &'static Regex {
    match bucket {
        LanguageBucket::Python => &*PYTHON_TOKENS,
        LanguageBucket::Go => &*GO_TOKENS,
        _ => &*C_STYLE_TOKENS,
    }
}

/// Flat token stream; characters outside the pattern (`.`, `:` in C-style
/// code, whitespace) are dropped.
pub fn tokenize(text: &str, bucket: LanguageBucket) -> Vec<String> {
    token_pattern(bucket)
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
