//! Content shipped with the engine, used when no pack is loaded.

use wordplay_protocol::{
    ContentPack, JumblePuzzle, MistakeDefinition, Passage, PassageId, PuzzleId, Question, QuestionId,
    RackPuzzle, RuleFlags,
};

pub const BUILTIN_VERSION: u32 = 1;

fn passage(id: u32, title: &str, text: &str, mistakes: &[(&str, &str)]) -> Passage {
    Passage {
        id: PassageId::new(id),
        title: title.to_string(),
        text: text.to_string(),
        mistakes: mistakes
            .iter()
            .map(|(wrong, correct)| MistakeDefinition::new(*wrong, *correct))
            .collect(),
    }
}

fn question(id: u32, prompt: &str, choices: &[&str], answer: u32) -> Question {
    Question {
        id: QuestionId::new(id),
        prompt: prompt.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        answer,
    }
}

fn jumble(id: u32, answer: &str, hint: &str) -> JumblePuzzle {
    JumblePuzzle {
        id: PuzzleId::new(id),
        answer: answer.to_string(),
        hint: Some(hint.to_string()),
    }
}

const WORDS: &[&str] = &[
    // PLANETS
    "ale", "ant", "ants", "ape", "apes", "ate", "east", "eat", "eats", "lane", "lanes", "lap", "laps",
    "lapse", "last", "late", "lean", "leans", "leap", "leaps", "leapt", "least", "lens", "lent", "let",
    "lets", "nap", "naps", "neat", "nest", "net", "nets", "pal", "pale", "pan", "pane", "panel",
    "panels", "panes", "pans", "pant", "pants", "past", "paste", "pastel", "pat", "pats", "pea",
    "peal", "pen", "pens", "pest", "pet", "petal", "petals", "pets", "plan", "plane", "planes",
    "planet", "planets", "plans", "plant", "plants", "plate", "plates", "sale", "salt", "sap", "sat",
    "sea", "seal", "seat", "sent", "set", "slant", "slap", "slate", "slept", "snap", "span", "spat",
    "spent", "splat", "stale", "steal", "step", "tale", "tales", "tan", "tap", "tape", "tapes",
    "taps", "tea", "teal", "ten", "tens",
    // GARDEN
    "age", "aged", "and", "anger", "are", "dare", "darn", "dean", "dear", "den", "drag",
    "ear", "earn", "end", "era", "danger", "gander", "garden", "gear", "grade", "grand", "nag",
    "near", "rag", "rage", "raged", "ran", "range", "ranged", "read", "red", "rend",
];

/// The pack used when the host supplies none.
pub fn builtin_pack() -> ContentPack {
    ContentPack {
        version: BUILTIN_VERSION,
        passages: vec![
            passage(
                1,
                "At the market",
                "She go to the market yesterday and buyed three apple. The seller were very friendly, so she have decided to come back next week.",
                &[
                    ("go", "went"),
                    ("buyed", "bought"),
                    ("apple.", "apples"),
                    ("were", "was"),
                    ("have decided", "decided"),
                ],
            ),
            passage(
                2,
                "A rainy day",
                "Yesterday it rain all day. We stayed inside and plays board games. My brother don\u{2019}t like losing, but he winned twice!",
                &[
                    ("rain", "rained"),
                    ("plays", "played"),
                    ("don't", "doesn't"),
                    ("winned", "won"),
                ],
            ),
            passage(
                3,
                "The new job",
                "Tom has start a new job last month. Every morning he take the bus, and he is never late because he leave home early.",
                &[
                    ("has start", "started"),
                    ("take", "takes"),
                    ("leave", "leaves"),
                ],
            ),
        ],
        racks: vec![
            RackPuzzle {
                id: PuzzleId::new(1),
                letters: "planets".to_string(),
                min_len: 3,
                rules: RuleFlags::EXTENDED_DICTIONARY.bits(),
            },
            RackPuzzle {
                id: PuzzleId::new(2),
                letters: "garden".to_string(),
                min_len: 3,
                rules: (RuleFlags::BOT_OPPONENT | RuleFlags::EXTENDED_DICTIONARY).bits(),
            },
        ],
        jumbles: vec![
            jumble(1, "teacher", "Works in a school"),
            jumble(2, "library", "A place full of books"),
            jumble(3, "weather", "Sunny, rainy or cloudy"),
            jumble(4, "journey", "A long trip"),
            jumble(5, "kitchen", "Where meals are cooked"),
            jumble(6, "holiday", "Time off work or school"),
        ],
        questions: vec![
            question(1, "She ___ to school every day.", &["go", "goes", "going", "gone"], 1),
            question(2, "I have lived here ___ 2015.", &["for", "since", "from", "during"], 1),
            question(3, "Which sentence is correct?", &["He don't know.", "He doesn't knows.", "He doesn't know.", "He not know."], 2),
            question(4, "They ___ watching TV when I called.", &["was", "were", "are", "be"], 1),
            question(5, "The plural of \u{201C}child\u{201D} is ___.", &["childs", "childes", "children", "childrens"], 2),
            question(6, "If it rains, we ___ at home.", &["stay", "will stay", "stayed", "would stayed"], 1),
            question(7, "Choose the past tense of \u{201C}bring\u{201D}.", &["bringed", "brang", "brought", "brung"], 2),
            question(8, "There isn't ___ milk left.", &["many", "any", "some", "a"], 1),
            question(9, "She is good ___ drawing.", &["in", "on", "at", "for"], 2),
            question(10, "This is the ___ film I have ever seen.", &["good", "better", "best", "most good"], 2),
        ],
        words: WORDS.iter().map(|w| w.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordplay_parser::Lexer;
    use wordplay_rack::Rack;
    use wordplay_solver::WordIndex;

    #[test]
    fn builtin_passages_locate_every_mistake() {
        let lexer = Lexer::new(true);
        for p in builtin_pack().passages {
            let analysis = lexer.analyze(&p.text, &p.mistakes);
            assert_eq!(analysis.spans.len(), p.mistakes.len(), "passage {}", p.title);
        }
    }

    #[test]
    fn builtin_racks_have_words() {
        let pack = builtin_pack();
        let index = WordIndex::from_words(&pack.words);
        for rack in &pack.racks {
            assert!(index.formable(&Rack::new(&rack.letters), rack.min_len as usize).len() >= 10);
        }
        assert!(index.contains(&pack.racks[0].letters));
    }

    #[test]
    fn builtin_questions_are_answerable() {
        for q in builtin_pack().questions {
            assert!((q.answer as usize) < q.choices.len());
        }
        let index = WordIndex::from_words(builtin_pack().jumbles.iter().map(|j| j.answer.as_str()));
        for j in builtin_pack().jumbles {
            assert!(j.answer.chars().count() >= 3);
            assert_eq!(index.anagrams(&j.answer).len(), 1, "ambiguous jumble {}", j.answer);
        }
    }
}
