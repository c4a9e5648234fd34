#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::collections::BTreeMap;
use alloc::string::String;

use core::fmt;

/// Why a candidate word cannot be built from a rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackError {
    /// The candidate needs `needed` copies of `letter` but the rack holds `available`.
    Shortage { letter: char, needed: u32, available: u32 },
    /// The candidate contains a character that is not a letter.
    NotALetter(char),
}

impl fmt::Display for RackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RackError::Shortage { letter, needed, available } => write!(
                f,
                "needs {} '{}' but only {} available",
                needed, letter, available
            ),
            RackError::NotALetter(c) => write!(f, "'{}' is not a letter", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RackError {}

/// Letter multiset, case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: BTreeMap<char, u32>,
}

impl LetterCounts {
    pub fn of(text: &str) -> Result<Self, RackError> {
        let mut counts = BTreeMap::new();
        for c in text.chars().flat_map(char::to_lowercase) {
            if !c.is_alphabetic() {
                return Err(RackError::NotALetter(c));
            }
            *counts.entry(c).or_insert(0) += 1;
        }
        Ok(Self { counts })
    }

    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Multiset containment: every letter of `self` fits inside `other`.
    pub fn fits_in(&self, other: &LetterCounts) -> Result<(), RackError> {
        for (&letter, &needed) in &self.counts {
            let available = other.count(letter);
            if needed > available {
                return Err(RackError::Shortage { letter, needed, available });
            }
        }
        Ok(())
    }
}

/// The letters a player may build words from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    letters: String,
    counts: LetterCounts,
}

impl Rack {
    /// Whitespace and separators in the rack text are ignored.
    pub fn new(letters: &str) -> Self {
        let letters: String = letters
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        let counts = LetterCounts::of(&letters).unwrap_or_default();
        Self { letters, counts }
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.counts.total() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check that `word` uses no letter more often than the rack provides.
    pub fn check(&self, word: &str) -> Result<(), RackError> {
        LetterCounts::of(word)?.fits_in(&self.counts)
    }

    pub fn can_form(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }
}

/// Points awarded by word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTiers {
    pub three: i32,
    pub four: i32,
    pub five: i32,
    pub six_plus: i32,
}

impl Default for ScoreTiers {
    fn default() -> Self {
        Self {
            three: 10,
            four: 20,
            five: 30,
            six_plus: 40,
        }
    }
}

impl ScoreTiers {
    /// Words shorter than three letters are worth nothing.
    pub fn score(&self, letters: usize) -> i32 {
        match letters {
            0..=2 => 0,
            3 => self.three,
            4 => self.four,
            5 => self.five,
            _ => self.six_plus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cat_from_catto() {
        let rack = Rack::new("c a t t o");
        assert!(rack.can_form("cat"));
        assert!(rack.can_form("TOT"));
        assert_eq!(
            rack.check("cattt"),
            Err(RackError::Shortage { letter: 't', needed: 3, available: 2 })
        );
        assert_eq!(rack.check("c-t"), Err(RackError::NotALetter('-')));
    }

    #[test]
    fn test_tiers() {
        let tiers = ScoreTiers::default();
        assert_eq!(tiers.score(2), 0);
        assert_eq!(tiers.score(3), 10);
        assert_eq!(tiers.score(4), 20);
        assert_eq!(tiers.score(5), 30);
        assert_eq!(tiers.score(9), 40);
    }

    proptest! {
        #[test]
        fn test_formable_iff_counts_fit(rack in "[a-e]{0,8}", word in "[a-e]{1,6}") {
            let r = Rack::new(&rack);
            let expected = ['a', 'b', 'c', 'd', 'e'].iter().all(|&l| {
                word.chars().filter(|&c| c == l).count() <= rack.chars().filter(|&c| c == l).count()
            });
            prop_assert_eq!(r.can_form(&word), expected, "rack {} word {}", rack, word);
        }

        #[test]
        fn test_rack_forms_itself(letters in "[a-z]{1,10}") {
            let r = Rack::new(&letters);
            prop_assert!(r.can_form(&letters));
            prop_assert_eq!(r.len(), letters.len());
        }
    }
}
