use wordplay_protocol::MistakeDefinition;

use crate::normalize::phrase_keys;
use crate::token::{LocatedSpan, Token};

/// Resolve mistake definitions against a tokenized passage.
///
/// Definitions are processed in authored order and each claims the first
/// window of still-unclaimed tokens whose keys equal its words. Definitions
/// that match nowhere are dropped. The result is sorted by start index.
pub fn locate(tokens: &[Token<'_>], keys: &[String], mistakes: &[MistakeDefinition]) -> Vec<LocatedSpan> {
    let mut consumed = vec![false; keys.len()];
    let mut spans = Vec::new();

    for (definition, mistake) in mistakes.iter().enumerate() {
        let words = phrase_keys(&mistake.wrong);
        let width = words.len();
        if width == 0 || width > keys.len() {
            continue;
        }

        let found = (0..=keys.len() - width).find(|&start| {
            let window = start..start + width;
            !consumed[window.clone()].iter().any(|&c| c) && keys[window] == words[..]
        });

        if let Some(start) = found {
            consumed[start..start + width].fill(true);
            let wrong = tokens[start..start + width]
                .iter()
                .map(|t| t.text)
                .collect::<Vec<_>>()
                .join(" ");
            spans.push(LocatedSpan {
                start,
                len: width,
                wrong,
                correct: mistake.correct.clone(),
                definition,
            });
        }
    }

    spans.sort_by_key(|s| s.start);
    spans
}
