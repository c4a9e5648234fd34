use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use wordplay_protocol::{GameKind, Question};
use wordplay_session::{EndReason, FlashTone, Session, SessionConfig, SessionError};

use crate::error::ContentError;
use crate::snapshot::{SessionView, SurvivalSnapshot};
use crate::Game;

#[derive(Debug, Clone)]
pub struct SurvivalConfig {
    pub session: SessionConfig,
    pub lives: u32,
    pub seed: u64,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig {
                duration_secs: 120,
                reward: 10,
                penalty: 0,
                flash_ticks: 3,
            },
            lives: 3,
            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizVerdict {
    Correct { streak: u32 },
    Wrong { correct_choice: usize, lives_left: u32 },
    /// The choice index does not exist; nothing happens.
    Invalid,
}

/// Multiple choice until the lives, the questions or the clock run out.
pub struct SurvivalQuiz {
    config: SurvivalConfig,
    questions: Vec<Question>,
    order: Vec<usize>,
    cursor: usize,
    lives: u32,
    streak: u32,
    best_streak: u32,
    session: Session,
}

impl SurvivalQuiz {
    pub fn new(questions: Vec<Question>, config: SurvivalConfig) -> Result<Self, ContentError> {
        if questions.is_empty() {
            return Err(ContentError::Empty("questions"));
        }
        if let Some(q) = questions.iter().find(|q| q.answer as usize >= q.choices.len()) {
            return Err(ContentError::BadAnswer {
                id: q.id.0,
                answer: q.answer,
                choices: q.choices.len(),
            });
        }
        let mut quiz = Self {
            session: Session::new(config.session.clone()),
            lives: config.lives,
            config,
            questions,
            order: Vec::new(),
            cursor: 0,
            streak: 0,
            best_streak: 0,
        };
        quiz.shuffle();
        Ok(quiz)
    }

    fn shuffle(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.order = (0..self.questions.len()).collect();
        self.order.shuffle(&mut rng);
        self.cursor = 0;
    }

    pub fn current(&self) -> Option<&Question> {
        self.order.get(self.cursor).map(|&i| &self.questions[i])
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn answer(&mut self, choice: usize) -> Result<QuizVerdict, SessionError> {
        self.session.ensure_running()?;
        let Some(question) = self.current() else {
            return Err(SessionError::Terminal);
        };
        if choice >= question.choices.len() {
            return Ok(QuizVerdict::Invalid);
        }
        let correct_choice = question.answer as usize;

        let verdict = if choice == correct_choice {
            self.session.reward()?;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            self.session
                .set_flash(format!("Correct! Streak {}", self.streak), FlashTone::Success);
            QuizVerdict::Correct { streak: self.streak }
        } else {
            self.session.penalty()?;
            self.lives = self.lives.saturating_sub(1);
            self.streak = 0;
            self.session.set_flash("Wrong answer", FlashTone::Error);
            QuizVerdict::Wrong {
                correct_choice,
                lives_left: self.lives,
            }
        };

        self.cursor += 1;
        if self.lives == 0 || self.cursor >= self.order.len() {
            self.finish(EndReason::Exhausted);
        }
        Ok(verdict)
    }

    pub fn snapshot(&self) -> SurvivalSnapshot {
        let question = if self.session.is_terminal() { None } else { self.current() };
        SurvivalSnapshot {
            session: SessionView::of(&self.session),
            prompt: question.map(|q| q.prompt.clone()),
            choices: question.map(|q| q.choices.clone()).unwrap_or_default(),
            lives: self.lives,
            streak: self.streak,
            best_streak: self.best_streak,
            answered: self.cursor,
        }
    }
}

impl Game for SurvivalQuiz {
    fn kind(&self) -> GameKind {
        GameKind::Survival
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn restart(&mut self) {
        self.session.reset();
        self.lives = self.config.lives;
        self.streak = 0;
        self.best_streak = 0;
        self.shuffle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordplay_protocol::QuestionId;
    use wordplay_session::{BestScoreStore, MemoryStore};

    fn bank(n: u32) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                id: QuestionId::new(i),
                prompt: format!("q{}", i),
                choices: vec!["a".to_string(), "b".to_string()],
                answer: 1,
            })
            .collect()
    }

    #[test]
    fn test_rejects_bad_bank() {
        assert!(matches!(SurvivalQuiz::new(vec![], SurvivalConfig::default()), Err(ContentError::Empty(_))));
        let mut bad = bank(1);
        bad[0].answer = 2;
        assert!(matches!(
            SurvivalQuiz::new(bad, SurvivalConfig::default()),
            Err(ContentError::BadAnswer { answer: 2, choices: 2, .. })
        ));
    }

    #[test]
    fn test_lives_run_out() {
        let mut quiz = SurvivalQuiz::new(bank(10), SurvivalConfig::default()).unwrap();
        assert_eq!(quiz.answer(1).unwrap(), QuizVerdict::Correct { streak: 1 });
        assert_eq!(quiz.answer(1).unwrap(), QuizVerdict::Correct { streak: 2 });
        assert_eq!(quiz.answer(5).unwrap(), QuizVerdict::Invalid);
        assert_eq!(quiz.answer(0).unwrap(), QuizVerdict::Wrong { correct_choice: 1, lives_left: 2 });
        assert_eq!(quiz.streak(), 0);
        quiz.answer(0).unwrap();
        assert!(!quiz.session().is_terminal());
        quiz.answer(0).unwrap();
        assert_eq!(quiz.session().end_reason(), Some(EndReason::Exhausted));
        assert_eq!(quiz.score(), 20);
        assert_eq!(quiz.answer(1), Err(SessionError::Terminal));

        let snap = quiz.snapshot();
        assert_eq!((snap.lives, snap.best_streak, snap.answered), (0, 2, 5));
        assert!(snap.prompt.is_none());

        let mut store = MemoryStore::new();
        store.save(GameKind::Survival.best_score_key(), 30);
        assert!(!quiz.record_best(&mut store));
        assert_eq!(store.load(GameKind::Survival.best_score_key()), Some(30));
    }

    #[test]
    fn test_bank_exhaustion_and_restart() {
        let mut quiz = SurvivalQuiz::new(bank(2), SurvivalConfig::default()).unwrap();
        let first = quiz.current().map(|q| q.id);
        quiz.answer(1).unwrap();
        quiz.answer(1).unwrap();
        assert!(quiz.session().is_terminal());

        quiz.restart();
        assert_eq!(quiz.lives(), 3);
        assert_eq!(quiz.current().map(|q| q.id), first);
        assert_eq!(quiz.score(), 0);
    }
}
