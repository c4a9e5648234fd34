use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use wordplay_parser::answers_match;
use wordplay_protocol::{GameKind, JumblePuzzle};
use wordplay_session::{EndReason, FlashTone, Session, SessionConfig, SessionError};

use crate::error::ContentError;
use crate::snapshot::{JumbleSnapshot, SessionView};
use crate::Game;

const SHUFFLE_ATTEMPTS: usize = 8;

#[derive(Debug, Clone)]
pub struct JumbleConfig {
    pub session: SessionConfig,
    pub seed: u64,
}

impl Default for JumbleConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig {
                duration_secs: 90,
                reward: 10,
                penalty: 5,
                flash_ticks: 3,
            },
            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumbleVerdict {
    Solved { answer: String },
    Wrong,
    Blank,
}

/// Shuffle the letters of `answer`, avoiding the answer itself when the
/// letters allow a different arrangement.
pub fn scramble(answer: &str, rng: &mut StdRng) -> String {
    let mut letters: Vec<char> = answer.trim().to_uppercase().chars().collect();
    let original = letters.clone();
    for _ in 0..SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        if letters != original {
            break;
        }
    }
    if letters == original && letters.len() > 1 {
        // Rotation differs unless every letter is the same.
        letters.rotate_left(1);
    }
    letters.into_iter().collect()
}

/// Unscramble jumbled words, one puzzle after another.
pub struct JumbleGame {
    config: JumbleConfig,
    puzzles: Vec<JumblePuzzle>,
    current: usize,
    scrambled: String,
    solved: usize,
    last_answer: Option<String>,
    rng: StdRng,
    session: Session,
}

impl JumbleGame {
    pub fn new(puzzles: Vec<JumblePuzzle>, config: JumbleConfig) -> Result<Self, ContentError> {
        if puzzles.is_empty() {
            return Err(ContentError::Empty("jumbles"));
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let scrambled = scramble(&puzzles[0].answer, &mut rng);
        Ok(Self {
            session: Session::new(config.session.clone()),
            config,
            puzzles,
            current: 0,
            scrambled,
            solved: 0,
            last_answer: None,
            rng,
        })
    }

    pub fn puzzle(&self) -> Option<&JumblePuzzle> {
        self.puzzles.get(self.current)
    }

    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    pub fn solved(&self) -> usize {
        self.solved
    }

    fn next_puzzle(&mut self) {
        self.current += 1;
        match self.puzzles.get(self.current) {
            Some(puzzle) => self.scrambled = scramble(&puzzle.answer, &mut self.rng),
            None => {
                self.scrambled.clear();
                self.finish(EndReason::Exhausted);
            }
        }
    }

    pub fn guess(&mut self, text: &str) -> Result<JumbleVerdict, SessionError> {
        self.session.ensure_running()?;
        if text.trim().is_empty() {
            return Ok(JumbleVerdict::Blank);
        }
        let Some(answer) = self.puzzle().map(|p| p.answer.clone()) else {
            return Err(SessionError::Terminal);
        };

        if answers_match(text, &answer) {
            self.session.reward()?;
            self.solved += 1;
            self.session.set_flash(format!("Yes! It was {}", answer), FlashTone::Success);
            self.last_answer = Some(answer.clone());
            self.next_puzzle();
            Ok(JumbleVerdict::Solved { answer })
        } else {
            self.session.penalty()?;
            self.session.set_flash("Not quite", FlashTone::Error);
            Ok(JumbleVerdict::Wrong)
        }
    }

    /// Reveal the answer without scoring and move on.
    pub fn skip(&mut self) -> Result<String, SessionError> {
        self.session.ensure_running()?;
        let Some(answer) = self.puzzle().map(|p| p.answer.clone()) else {
            return Err(SessionError::Terminal);
        };
        self.session.set_flash(format!("It was {}", answer), FlashTone::Info);
        self.last_answer = Some(answer.clone());
        self.next_puzzle();
        Ok(answer)
    }

    pub fn snapshot(&self) -> JumbleSnapshot {
        let puzzle = self.puzzle();
        JumbleSnapshot {
            session: SessionView::of(&self.session),
            scrambled: puzzle.map(|_| self.scrambled.clone()),
            hint: puzzle.and_then(|p| p.hint.clone()),
            solved: self.solved,
            puzzles_left: self.puzzles.len().saturating_sub(self.current),
            last_answer: self.last_answer.clone(),
        }
    }
}

impl Game for JumbleGame {
    fn kind(&self) -> GameKind {
        GameKind::Jumble
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn restart(&mut self) {
        self.session.reset();
        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.current = 0;
        self.solved = 0;
        self.last_answer = None;
        self.scrambled = scramble(&self.puzzles[0].answer, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordplay_protocol::PuzzleId;
    use wordplay_solver::is_anagram;

    fn puzzles() -> Vec<JumblePuzzle> {
        ["teacher", "kitchen"]
            .iter()
            .enumerate()
            .map(|(i, w)| JumblePuzzle {
                id: PuzzleId::new(i as u32),
                answer: w.to_string(),
                hint: None,
            })
            .collect()
    }

    #[test]
    fn test_scramble_differs_from_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        for word in ["teacher", "ab", "noon", "library"] {
            let s = scramble(word, &mut rng);
            assert!(is_anagram(&s, word));
            assert_ne!(s, word.to_uppercase());
        }
        assert_eq!(scramble("aaa", &mut rng), "AAA");
    }

    #[test]
    fn test_guess_skip_and_exhaust() {
        let mut game = JumbleGame::new(puzzles(), JumbleConfig::default()).unwrap();
        assert_eq!(game.guess(" ").unwrap(), JumbleVerdict::Blank);
        assert_eq!(game.guess("cheater").unwrap(), JumbleVerdict::Wrong);
        assert_eq!(game.score(), -5);

        assert_eq!(
            game.guess("Teacher").unwrap(),
            JumbleVerdict::Solved { answer: "teacher".to_string() }
        );
        assert_eq!(game.score(), 5);
        assert!(is_anagram(game.scrambled(), "kitchen"));

        assert_eq!(game.skip().unwrap(), "kitchen");
        assert_eq!(game.score(), 5);
        assert_eq!(game.session().end_reason(), Some(EndReason::Exhausted));
        assert_eq!(game.guess("kitchen"), Err(SessionError::Terminal));
        assert_eq!(game.snapshot().scrambled, None);
        assert_eq!(game.snapshot().last_answer.as_deref(), Some("kitchen"));
    }

    #[test]
    fn test_restart_replays_same_scramble() {
        let mut game = JumbleGame::new(puzzles(), JumbleConfig::default()).unwrap();
        let first = game.scrambled().to_string();
        game.skip().unwrap();
        game.restart();
        assert_eq!(game.scrambled(), first);
        assert_eq!(game.solved(), 0);
    }
}
