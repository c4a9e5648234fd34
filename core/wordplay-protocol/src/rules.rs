use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Lifecycle of a single mistake span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum SpanStatus {
    #[default]
    Pending = 0,
    Correct = 1,
    Wrong = 2,
}

/// The game variants shipped by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum GameKind {
    Grammar = 0,
    WordBattle = 1,
    Jumble = 2,
    Survival = 3,
}

impl GameKind {
    /// Local-storage key under which the best score of this variant lives.
    pub const fn best_score_key(self) -> &'static str {
        match self {
            GameKind::Grammar => "wordplay.best.grammar",
            GameKind::WordBattle => "wordplay.best.word_battle",
            GameKind::Jumble => "wordplay.best.jumble",
            GameKind::Survival => "wordplay.best.survival",
        }
    }
}

bitflags! {
    /// Rule switches that distinguish game variants sharing one engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct RuleFlags: u32 {
        /// Mistakes may span several tokens ("has went").
        const MULTI_TOKEN_SPANS = 1;
        /// A bot plays against the user in word battle.
        const BOT_OPPONENT = 2;
        /// A fetched word list may extend the built-in dictionary.
        const EXTENDED_DICTIONARY = 4;
        /// Re-submitting a found word costs the penalty instead of being ignored.
        const PENALIZE_DUPLICATES = 8;
    }
}

impl RuleFlags {
    /// Decode the raw bits stored in a content pack, ignoring unknown bits.
    pub const fn from_pack(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}
