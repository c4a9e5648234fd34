use std::collections::{BTreeMap, BTreeSet};

use wordplay_parser::normalize_phrase;
use wordplay_protocol::{GameKind, RackPuzzle, RuleFlags};
use wordplay_rack::{Rack, RackError, ScoreTiers};
use wordplay_session::{EndReason, FlashTone, Session, SessionConfig, SessionError};
use wordplay_solver::{canonical, Bot, BotLevel, WordIndex};

use crate::snapshot::{BattleSnapshot, FoundWordView, SessionView};
use crate::Game;

#[derive(Debug, Clone)]
pub struct WordBattleConfig {
    /// `reward` is unused here; points come from `tiers`.
    pub session: SessionConfig,
    pub tiers: ScoreTiers,
    /// Seconds between bot moves.
    pub bot_interval_secs: u32,
    pub bot_level: BotLevel,
    pub seed: u64,
}

impl Default for WordBattleConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig {
                duration_secs: 120,
                reward: 0,
                penalty: 5,
                flash_ticks: 3,
            },
            tiers: ScoreTiers::default(),
            bot_interval_secs: 8,
            bot_level: BotLevel::Casual,
            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    User,
    Bot,
}

/// Classification of a submitted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordVerdict {
    Accepted { word: String, points: i32 },
    /// Blank input; nothing happens.
    Blank,
    /// Shorter than the puzzle minimum. No penalty.
    TooShort { min_len: usize },
    /// Someone already played it. Penalized only under `PENALIZE_DUPLICATES`.
    AlreadyFound { by: Player, penalized: bool },
    /// Uses letters the rack lacks. Penalized.
    NotFormable(RackError),
    /// Formable but unknown. Penalized.
    NotInDictionary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    UserWins,
    BotWins,
    Tie,
}

/// Build words from a letter rack, optionally racing a bot.
pub struct WordBattleGame {
    config: WordBattleConfig,
    rules: RuleFlags,
    rack: Rack,
    min_len: usize,
    dictionary: WordIndex,
    found: BTreeMap<String, (Player, i32)>,
    bot: Option<Bot>,
    bot_score: i32,
    since_bot_move: u32,
    session: Session,
}

impl WordBattleGame {
    pub fn new(puzzle: &RackPuzzle, words: &[String], config: WordBattleConfig) -> Self {
        let rules = RuleFlags::from_pack(puzzle.rules);
        let bot = rules
            .contains(RuleFlags::BOT_OPPONENT)
            .then(|| Bot::new(config.bot_level, config.seed));
        Self {
            rules,
            rack: Rack::new(&puzzle.letters),
            min_len: (puzzle.min_len as usize).max(1),
            dictionary: WordIndex::from_words(words),
            found: BTreeMap::new(),
            bot,
            bot_score: 0,
            since_bot_move: 0,
            session: Session::new(config.session.clone()),
            config,
        }
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn rules(&self) -> RuleFlags {
        self.rules
    }

    pub fn bot_score(&self) -> Option<i32> {
        self.bot.as_ref().map(|_| self.bot_score)
    }

    /// Merge a fetched word list. Ignored unless the puzzle allows it.
    /// Returns how many words were new.
    pub fn extend_dictionary<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.rules.contains(RuleFlags::EXTENDED_DICTIONARY) {
            return 0;
        }
        let added = self.dictionary.extend(words);
        log::info!("extended dictionary by {} words ({} total)", added, self.dictionary.len());
        added
    }

    pub fn found_by(&self, word: &str) -> Option<Player> {
        canonical(word).and_then(|w| self.found.get(&w).map(|(player, _)| *player))
    }

    fn taken(&self) -> BTreeSet<String> {
        self.found.keys().cloned().collect()
    }

    fn open_words(&self) -> usize {
        self.dictionary
            .formable(&self.rack, self.min_len)
            .into_iter()
            .filter(|w| !self.found.contains_key(*w))
            .count()
    }

    /// Classify a word, then score it.
    pub fn submit(&mut self, input: &str) -> Result<WordVerdict, SessionError> {
        self.session.ensure_running()?;

        // Punctuation around a word is not part of it.
        let word = normalize_phrase(input);
        if word.is_empty() {
            return Ok(WordVerdict::Blank);
        }
        let letters = word.chars().count();

        let verdict = if letters < self.min_len {
            WordVerdict::TooShort { min_len: self.min_len }
        } else if let Some((by, _)) = self.found.get(&word) {
            WordVerdict::AlreadyFound {
                by: *by,
                penalized: self.rules.contains(RuleFlags::PENALIZE_DUPLICATES),
            }
        } else if let Err(err) = self.rack.check(&word) {
            WordVerdict::NotFormable(err)
        } else if !self.dictionary.contains(&word) {
            WordVerdict::NotInDictionary
        } else {
            WordVerdict::Accepted {
                points: self.config.tiers.score(letters),
                word,
            }
        };

        match &verdict {
            WordVerdict::Accepted { word, points } => {
                self.session.award(*points)?;
                self.found.insert(word.clone(), (Player::User, *points));
                self.session.set_flash(format!("+{} {}", points, word), FlashTone::Success);
                if self.open_words() == 0 {
                    self.finish(EndReason::Exhausted);
                }
            }
            WordVerdict::Blank => {}
            WordVerdict::TooShort { min_len } => {
                self.session
                    .set_flash(format!("Words need at least {} letters", min_len), FlashTone::Error);
            }
            WordVerdict::AlreadyFound { penalized, .. } => {
                if *penalized {
                    self.session.penalty()?;
                }
                self.session.set_flash("Already found", FlashTone::Info);
            }
            WordVerdict::NotFormable(err) => {
                self.session.penalty()?;
                self.session.set_flash(format!("Not in the rack: {}", err), FlashTone::Error);
            }
            WordVerdict::NotInDictionary => {
                self.session.penalty()?;
                self.session.set_flash("Not a word we know", FlashTone::Error);
            }
        }
        Ok(verdict)
    }

    fn bot_move(&mut self) {
        let taken = self.taken();
        let Some(bot) = self.bot.as_mut() else {
            return;
        };
        let Some(word) = bot
            .choose(&self.dictionary, &self.rack, self.min_len, &self.config.tiers, &taken)
            .map(str::to_string)
        else {
            return;
        };
        let points = self.config.tiers.score(word.chars().count());
        self.bot_score += points;
        self.found.insert(word, (Player::Bot, points));
        if self.open_words() == 0 {
            self.finish(EndReason::Exhausted);
        }
    }

    /// Winner once the session is over; `None` while running or without a bot.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if self.bot.is_none() || !self.session.is_terminal() {
            return None;
        }
        let user = self.session.score();
        Some(match user.cmp(&self.bot_score) {
            std::cmp::Ordering::Greater => BattleOutcome::UserWins,
            std::cmp::Ordering::Less => BattleOutcome::BotWins,
            std::cmp::Ordering::Equal => BattleOutcome::Tie,
        })
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            rack: self.rack.letters().to_string(),
            session: SessionView::of(&self.session),
            found: self
                .found
                .iter()
                .map(|(word, (player, points))| FoundWordView {
                    word: word.clone(),
                    by: match player {
                        Player::User => "user",
                        Player::Bot => "bot",
                    },
                    points: *points,
                })
                .collect(),
            bot_score: self.bot_score(),
            outcome: self.outcome().map(|o| match o {
                BattleOutcome::UserWins => "user_wins",
                BattleOutcome::BotWins => "bot_wins",
                BattleOutcome::Tie => "tie",
            }),
            dictionary_size: self.dictionary.len(),
        }
    }
}

impl Game for WordBattleGame {
    fn kind(&self) -> GameKind {
        GameKind::WordBattle
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn restart(&mut self) {
        self.session.reset();
        self.found.clear();
        self.bot_score = 0;
        self.since_bot_move = 0;
        if self.bot.is_some() {
            self.bot = Some(Bot::new(self.config.bot_level, self.config.seed));
        }
    }

    fn on_second(&mut self) {
        if self.bot.is_none() {
            return;
        }
        self.since_bot_move += 1;
        if self.since_bot_move >= self.config.bot_interval_secs.max(1) {
            self.since_bot_move = 0;
            self.bot_move();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordplay_protocol::PuzzleId;
    use wordplay_session::TickOutcome;

    fn words() -> Vec<String> {
        ["cat", "act", "tact", "coat", "taco", "cot", "otto"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn puzzle(rules: RuleFlags) -> RackPuzzle {
        RackPuzzle {
            id: PuzzleId::new(1),
            letters: "cattoa".to_string(),
            min_len: 3,
            rules: rules.bits(),
        }
    }

    #[test]
    fn test_classification_and_penalties() {
        let mut game = WordBattleGame::new(&puzzle(RuleFlags::empty()), &words(), WordBattleConfig::default());

        assert_eq!(game.submit("  ").unwrap(), WordVerdict::Blank);
        assert_eq!(game.submit("at").unwrap(), WordVerdict::TooShort { min_len: 3 });
        assert_eq!(game.score(), 0);

        assert_eq!(
            game.submit("Cat").unwrap(),
            WordVerdict::Accepted { word: "cat".to_string(), points: 10 }
        );
        assert_eq!(
            game.submit("CAT").unwrap(),
            WordVerdict::AlreadyFound { by: Player::User, penalized: false }
        );
        assert_eq!(game.score(), 10);

        assert!(matches!(game.submit("otto").unwrap(), WordVerdict::NotFormable(RackError::Shortage { letter: 'o', .. })));
        assert_eq!(game.score(), 5);
        assert_eq!(game.submit("tao").unwrap(), WordVerdict::NotInDictionary);
        assert_eq!(game.score(), 0);

        assert_eq!(
            game.submit("coat").unwrap(),
            WordVerdict::Accepted { word: "coat".to_string(), points: 20 }
        );
        assert_eq!(game.score(), 20);
    }

    #[test]
    fn test_duplicate_penalty_rule() {
        let mut game = WordBattleGame::new(
            &puzzle(RuleFlags::PENALIZE_DUPLICATES),
            &words(),
            WordBattleConfig::default(),
        );
        game.submit("cat").unwrap();
        assert_eq!(
            game.submit("cat").unwrap(),
            WordVerdict::AlreadyFound { by: Player::User, penalized: true }
        );
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn test_extended_dictionary_needs_rule() {
        let mut plain = WordBattleGame::new(&puzzle(RuleFlags::empty()), &words(), WordBattleConfig::default());
        assert_eq!(plain.extend_dictionary(["toca"]), 0);

        let mut game = WordBattleGame::new(
            &puzzle(RuleFlags::EXTENDED_DICTIONARY),
            &words(),
            WordBattleConfig::default(),
        );
        assert_eq!(game.submit("tao").unwrap(), WordVerdict::NotInDictionary);
        assert_eq!(game.extend_dictionary(["tao", "cat"]), 1);
        assert!(matches!(game.submit("tao").unwrap(), WordVerdict::Accepted { .. }));
    }

    #[test]
    fn test_bot_plays_on_interval() {
        let config = WordBattleConfig {
            bot_interval_secs: 2,
            bot_level: BotLevel::Sharp,
            ..WordBattleConfig::default()
        };
        let mut game = WordBattleGame::new(&puzzle(RuleFlags::BOT_OPPONENT), &words(), config);
        assert_eq!(game.bot_score(), Some(0));

        game.tick();
        assert_eq!(game.bot_score(), Some(0));
        game.tick();
        assert_eq!(game.bot_score(), Some(20));
        assert_eq!(game.found_by("coat"), Some(Player::Bot));
        assert_eq!(
            game.submit("coat").unwrap(),
            WordVerdict::AlreadyFound { by: Player::Bot, penalized: false }
        );

        assert_eq!(game.outcome(), None);
        game.end();
        assert_eq!(game.outcome(), Some(BattleOutcome::BotWins));
    }

    #[test]
    fn test_bot_plays_on_frame_time() {
        let config = WordBattleConfig {
            bot_interval_secs: 2,
            bot_level: BotLevel::Sharp,
            ..WordBattleConfig::default()
        };
        let mut game = WordBattleGame::new(&puzzle(RuleFlags::BOT_OPPONENT), &words(), config);

        game.advance(0.9);
        assert_eq!(game.bot_score(), Some(0));
        assert_eq!(game.advance(1.6), TickOutcome::Running { remaining: 118 });
        assert_eq!(game.bot_score(), Some(20));
        assert_eq!(game.found_by("coat"), Some(Player::Bot));
    }

    #[test]
    fn test_punctuation_is_ignored() {
        let mut game = WordBattleGame::new(&puzzle(RuleFlags::empty()), &words(), WordBattleConfig::default());
        assert_eq!(
            game.submit("cat!").unwrap(),
            WordVerdict::Accepted { word: "cat".to_string(), points: 10 }
        );
        assert_eq!(game.submit(" \"Taco.\" ").unwrap(), WordVerdict::Accepted { word: "taco".to_string(), points: 20 });
        assert_eq!(game.submit("?!").unwrap(), WordVerdict::Blank);
        assert_eq!(game.score(), 30);
    }

    #[test]
    fn test_exhausting_the_rack_ends_the_session() {
        let mut game = WordBattleGame::new(&puzzle(RuleFlags::empty()), &words(), WordBattleConfig::default());
        for w in ["cat", "act", "tact", "coat", "taco"] {
            game.submit(w).unwrap();
        }
        assert!(!game.session().is_terminal());
        game.submit("cot").unwrap();
        assert_eq!(game.session().end_reason(), Some(EndReason::Exhausted));
        assert_eq!(game.submit("cat"), Err(SessionError::Terminal));

        game.restart();
        assert_eq!(game.score(), 0);
        assert!(game.snapshot().found.is_empty());
    }
}
