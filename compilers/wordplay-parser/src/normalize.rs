//! Comparison keys. Never used for display.

/// Characters removed from every key after quote folding.
pub const STRIPPED: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '\u{2026}',
];

/// Map typographic quote variants to their ASCII form.
pub fn fold_quote(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' | '\u{FF07}' | '\u{00B4}' | '`' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{00AB}' | '\u{00BB}' => '"',
        _ => c,
    }
}

/// Key of a single token: quotes folded, punctuation stripped, lowercased.
pub fn normalize_token(text: &str) -> String {
    text.chars()
        .map(fold_quote)
        .filter(|c| !STRIPPED.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Per-word keys of a phrase, one per whitespace-delimited word.
pub fn phrase_keys(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize_token).collect()
}

/// Key of a whole phrase; words that normalize to nothing are dropped.
pub fn normalize_phrase(text: &str) -> String {
    phrase_keys(text)
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact equality after normalization.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize_phrase(submitted) == normalize_phrase(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curly_apostrophe_equals_ascii() {
        assert_eq!(normalize_token("Don\u{2019}t"), normalize_token("don't"));
        assert_eq!(normalize_token("don't"), "dont");
    }

    #[test]
    fn test_strips_punctuation_and_case() {
        assert_eq!(normalize_token("Market."), "market");
        assert_eq!(normalize_token("\u{201C}Hello!\u{201D}"), "hello");
        assert_eq!(normalize_token("..."), "");
    }

    #[test]
    fn test_phrase_spacing() {
        assert_eq!(normalize_phrase("  Has   Gone. "), "has gone");
        assert!(answers_match("WENT!", "went"));
        assert!(!answers_match("goes", "went"));
    }
}
