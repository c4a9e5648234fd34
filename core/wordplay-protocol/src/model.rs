use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::{PassageId, PuzzleId, QuestionId};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A planted mistake: the literal wrong text and its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct MistakeDefinition {
    pub wrong: String,
    pub correct: String,
}

impl MistakeDefinition {
    pub fn new(wrong: impl Into<String>, correct: impl Into<String>) -> Self {
        Self {
            wrong: wrong.into(),
            correct: correct.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Passage {
    pub id: PassageId,
    pub title: String,
    pub text: String,
    pub mistakes: Vec<MistakeDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RackPuzzle {
    pub id: PuzzleId,
    pub letters: String,
    pub min_len: u32,
    /// Raw `RuleFlags` bits.
    pub rules: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct JumblePuzzle {
    pub id: PuzzleId,
    pub answer: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub choices: Vec<String>,
    /// Index into `choices`.
    pub answer: u32,
}

/// Everything a set of games needs, loadable from JSON or an rkyv archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ContentPack {
    pub version: u32,
    pub passages: Vec<Passage>,
    pub racks: Vec<RackPuzzle>,
    pub jumbles: Vec<JumblePuzzle>,
    pub questions: Vec<Question>,
    /// Built-in dictionary for the word games.
    pub words: Vec<String>,
}
