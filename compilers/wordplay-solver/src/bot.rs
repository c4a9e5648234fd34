use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordplay_rack::{Rack, ScoreTiers};

use crate::index::WordIndex;

/// How hard the word-battle opponent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotLevel {
    /// A random short word (four letters or fewer when available).
    #[default]
    Casual,
    /// Always the highest-scoring word left.
    Sharp,
}

/// Word-battle opponent drawing from the shared dictionary.
#[derive(Debug, Clone)]
pub struct Bot {
    level: BotLevel,
    rng: StdRng,
}

impl Bot {
    pub fn new(level: BotLevel, seed: u64) -> Self {
        Self {
            level,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn level(&self) -> BotLevel {
        self.level
    }

    /// Pick a word nobody has played yet, if any remain.
    pub fn choose<'a>(
        &mut self,
        index: &'a WordIndex,
        rack: &Rack,
        min_len: usize,
        tiers: &ScoreTiers,
        taken: &BTreeSet<String>,
    ) -> Option<&'a str> {
        let open: Vec<&str> = index
            .formable(rack, min_len)
            .into_iter()
            .filter(|w| !taken.contains(*w))
            .collect();

        let pick = match self.level {
            BotLevel::Sharp => open
                .iter()
                .copied()
                .max_by(|a, b| {
                    tiers
                        .score(a.chars().count())
                        .cmp(&tiers.score(b.chars().count()))
                        .then_with(|| a.len().cmp(&b.len()))
                        .then_with(|| b.cmp(a))
                }),
            BotLevel::Casual => {
                let short: Vec<&str> = open.iter().copied().filter(|w| w.chars().count() <= 4).collect();
                let pool = if short.is_empty() { &open } else { &short };
                if pool.is_empty() {
                    None
                } else {
                    Some(pool[self.rng.random_range(0..pool.len())])
                }
            }
        };

        if let Some(word) = pick {
            log::debug!("bot ({:?}) plays {}", self.level, word);
        }
        pick
    }
}
