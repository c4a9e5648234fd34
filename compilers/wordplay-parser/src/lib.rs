pub mod locator;
pub mod normalize;
pub mod parser;
pub mod token;

use wordplay_protocol::MistakeDefinition;
use crate::normalize::normalize_token;
use crate::parser::parse_with_spans;
use crate::token::{LocatedSpan, Token};

pub use normalize::{answers_match, normalize_phrase};

/// Tokenizes passages and resolves their planted mistakes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexer {
    multi_token: bool,
}

impl Lexer {
    /// `multi_token` allows mistakes that cover more than one token.
    pub fn new(multi_token: bool) -> Self {
        Self { multi_token }
    }

    /// Text -> tokens, one per whitespace-delimited run.
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        parse_with_spans(input)
            .into_iter()
            .enumerate()
            .map(|(index, (span, text))| Token { index, span, text })
            .collect()
    }

    /// Text + mistakes -> tokens and disjoint mistake spans.
    pub fn analyze<'a>(&self, input: &'a str, mistakes: &[MistakeDefinition]) -> Analysis<'a> {
        let tokens = self.tokenize(input);
        let keys: Vec<String> = tokens.iter().map(|t| normalize_token(t.text)).collect();

        let spans = if self.multi_token {
            locator::locate(&tokens, &keys, mistakes)
        } else {
            // Multi-word definitions are treated like unlocatable ones; keep
            // their authored position so definition order still holds.
            let single: Vec<MistakeDefinition> = mistakes
                .iter()
                .map(|m| {
                    if m.wrong.split_whitespace().count() == 1 {
                        m.clone()
                    } else {
                        MistakeDefinition::new("", m.correct.clone())
                    }
                })
                .collect();
            locator::locate(&tokens, &keys, &single)
        };

        Analysis { tokens, spans }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub tokens: Vec<Token<'a>>,
    pub spans: Vec<LocatedSpan>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn m(wrong: &str, correct: &str) -> MistakeDefinition {
        MistakeDefinition::new(wrong, correct)
    }

    #[test]
    fn test_market_scenario() {
        let lexer = Lexer::new(true);
        let analysis = lexer.analyze("She go to the market yesterday.", &[m("go", "went")]);

        assert_eq!(analysis.tokens.len(), 6);
        assert_eq!(analysis.tokens[5].text, "yesterday.");
        assert_eq!(analysis.spans.len(), 1);
        let span = &analysis.spans[0];
        assert_eq!((span.start, span.len), (1, 1));
        assert_eq!(span.correct, "went");
        assert_eq!(span.wrong, "go");
    }

    #[test]
    fn test_multi_token_match_keeps_literal_text() {
        let lexer = Lexer::new(true);
        let analysis = lexer.analyze(
            "He have went home, and Didn\u{2019}t eat.",
            &[m("have went", "has gone"), m("didn't eat", "did not eat")],
        );
        let found: Vec<(usize, usize, &str)> = analysis
            .spans
            .iter()
            .map(|s| (s.start, s.len, s.wrong.as_str()))
            .collect();
        assert_eq!(found, vec![(1, 2, "have went"), (5, 2, "Didn\u{2019}t eat.")]);
    }

    #[test]
    fn test_missing_definition_is_dropped() {
        let lexer = Lexer::new(true);
        let analysis = lexer.analyze(
            "They was late and they was tired.",
            &[m("were gone", "x"), m("was", "were"), m("", "y"), m("was", "were")],
        );
        let starts: Vec<usize> = analysis.spans.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![1, 5]);
        assert_eq!(analysis.spans[0].definition, 1);
        assert_eq!(analysis.spans[1].definition, 3);
    }

    #[test]
    fn test_definition_order_breaks_ties() {
        // The later definition loses the shared token.
        let lexer = Lexer::new(true);
        let analysis = lexer.analyze("saw the the cat", &[m("the cat", "the cat"), m("the the", "the")]);
        assert_eq!(analysis.spans.len(), 1);
        assert_eq!((analysis.spans[0].start, analysis.spans[0].definition), (2, 0));

        let analysis = lexer.analyze("saw the the cat", &[m("the the", "the"), m("the cat", "the cat")]);
        assert_eq!(analysis.spans.len(), 1);
        assert_eq!((analysis.spans[0].start, analysis.spans[0].definition), (1, 0));
    }

    #[test]
    fn test_single_token_mode_drops_phrases() {
        let lexer = Lexer::new(false);
        let analysis = lexer.analyze("He have went home.", &[m("have went", "has gone"), m("home.", "home")]);
        assert_eq!(analysis.spans.len(), 1);
        assert_eq!(analysis.spans[0].start, 3);
        assert_eq!(analysis.spans[0].definition, 1);
    }

    #[test]
    fn test_empty_passage() {
        let analysis = Lexer::new(true).analyze("", &[m("go", "went")]);
        assert!(analysis.tokens.is_empty());
        assert!(analysis.spans.is_empty());
    }

    proptest! {
        #[test]
        fn test_spans_are_disjoint_and_in_bounds(
            words in proptest::collection::vec("(a|b|c)[.,]?", 0..24),
            phrases in proptest::collection::vec("(a|b|c)( (a|b|c)){0,2}", 0..8),
        ) {
            let text = words.join(" ");
            let mistakes: Vec<MistakeDefinition> = phrases.iter().map(|p| m(p, "z")).collect();
            let analysis = Lexer::new(true).analyze(&text, &mistakes);

            let mut covered = vec![false; analysis.tokens.len()];
            let mut last_start = None;
            for span in &analysis.spans {
                prop_assert!(span.len > 0);
                prop_assert!(span.end() <= analysis.tokens.len());
                if let Some(prev) = last_start {
                    prop_assert!(span.start > prev);
                }
                last_start = Some(span.start);
                for i in span.start..span.end() {
                    prop_assert!(!covered[i]);
                    covered[i] = true;
                }
            }
        }
    }
}
