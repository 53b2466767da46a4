use regex::Regex;
use std::sync::LazyLock;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.,/#!?$%^&*;:{}=_`"~()]"#).expect("valid punctuation regex"));

/// Lowercases `text`, strips punctuation and splits on whitespace.
///
/// Apostrophes and hyphens are kept so contractions like "don't" stay whole.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    PUNCTUATION
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
