#![no_std] // Shared by the wasm bridge and the CLI

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod rules;

pub use ids::{PassageId, PuzzleId, QuestionId, SpanId};
pub use rules::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_status_serialization() {
        let original = SpanStatus::Wrong;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize SpanStatus");
        let deserialized: SpanStatus = from_bytes(&bytes).expect("Failed to deserialize SpanStatus");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_pack_archive() {
        let pack = ContentPack {
            version: 2,
            passages: vec![Passage {
                id: PassageId::new(1),
                title: "Market".to_string(),
                text: "She go to the market yesterday.".to_string(),
                mistakes: vec![MistakeDefinition::new("go", "went")],
            }],
            racks: vec![RackPuzzle {
                id: PuzzleId::new(7),
                letters: "planets".to_string(),
                min_len: 3,
                rules: (RuleFlags::BOT_OPPONENT | RuleFlags::PENALIZE_DUPLICATES).bits(),
            }],
            jumbles: vec![],
            questions: vec![],
            words: vec!["plan".to_string()],
        };

        let bytes = to_bytes::<_, 1024>(&pack).expect("Failed to serialize pack");
        let archived = rkyv::check_archived_root::<ContentPack>(&bytes).expect("archive should validate");
        assert_eq!(archived.passages[0].mistakes[0].correct.as_str(), "went");

        let restored: ContentPack = from_bytes(&bytes).expect("Failed to deserialize pack");
        assert_eq!(restored, pack);
        assert!(RuleFlags::from_pack(restored.racks[0].rules).contains(RuleFlags::BOT_OPPONENT));
    }

    #[test]
    fn test_unknown_rule_bits_are_dropped() {
        let flags = RuleFlags::from_pack(0xFFFF_0001);
        assert_eq!(flags, RuleFlags::MULTI_TOKEN_SPANS);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<SpanId>(), 4);
    }

    #[test]
    fn test_best_score_keys_are_distinct() {
        let keys = [
            GameKind::Grammar.best_score_key(),
            GameKind::WordBattle.best_score_key(),
            GameKind::Jumble.best_score_key(),
            GameKind::Survival.best_score_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
