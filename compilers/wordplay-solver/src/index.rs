use std::collections::BTreeSet;
use wordplay_rack::{LetterCounts, Rack};

/// Canonical dictionary form: trimmed, lowercased, letters only.
pub fn canonical(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(word)
}

/// Same letters with the same multiplicities, ignoring case.
pub fn is_anagram(a: &str, b: &str) -> bool {
    match (LetterCounts::of(a.trim()), LetterCounts::of(b.trim())) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

/// Dictionary used for membership checks and word search.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: BTreeSet<String>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        index.extend(words);
        index
    }

    /// Add words, skipping malformed entries. Returns how many were new.
    pub fn extend<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        self.words
            .extend(words.into_iter().filter_map(|w| canonical(w.as_ref())));
        self.words.len() - before
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        canonical(word).is_some_and(|w| self.words.contains(&w))
    }

    /// Dictionary words of at least `min_len` letters buildable from `rack`.
    pub fn formable<'a>(&'a self, rack: &Rack, min_len: usize) -> Vec<&'a str> {
        self.words
            .iter()
            .filter(|w| w.chars().count() >= min_len && rack.can_form(w))
            .map(String::as_str)
            .collect()
    }

    /// Dictionary words using exactly the letters of `letters`.
    pub fn anagrams<'a>(&'a self, letters: &str) -> Vec<&'a str> {
        self.words
            .iter()
            .filter(|w| is_anagram(w, letters))
            .map(String::as_str)
            .collect()
    }
}
