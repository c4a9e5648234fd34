use wordplay_ecs::{PassageWorld, SelectOutcome, SubmitOutcome};
use wordplay_parser::Lexer;
use wordplay_protocol::{GameKind, Passage, RuleFlags, SpanId};
use wordplay_session::{FlashTone, Session, SessionConfig, SessionError};

use crate::error::ContentError;
use crate::snapshot::{GrammarSnapshot, SessionView};
use crate::Game;

#[derive(Debug, Clone)]
pub struct GrammarConfig {
    pub session: SessionConfig,
    pub rules: RuleFlags,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig {
                duration_secs: 180,
                reward: 20,
                penalty: 5,
                flash_ticks: 3,
            },
            rules: RuleFlags::MULTI_TOKEN_SPANS,
        }
    }
}

/// Find-and-fix: planted mistakes in a passage become editable spans.
pub struct GrammarGame {
    config: GrammarConfig,
    passages: Vec<Passage>,
    current: usize,
    board: PassageWorld,
    session: Session,
}

impl GrammarGame {
    pub fn new(passages: Vec<Passage>, config: GrammarConfig) -> Result<Self, ContentError> {
        if passages.is_empty() {
            return Err(ContentError::Empty("passages"));
        }
        let mut game = Self {
            session: Session::new(config.session.clone()),
            config,
            passages,
            current: 0,
            board: PassageWorld::new(),
        };
        game.load(0);
        Ok(game)
    }

    fn load(&mut self, index: usize) {
        self.current = index;
        self.board.clear();

        let passage = &self.passages[index];
        let lexer = Lexer::new(self.config.rules.contains(RuleFlags::MULTI_TOKEN_SPANS));
        let analysis = lexer.analyze(&passage.text, &passage.mistakes);

        for token in &analysis.tokens {
            self.board.add_token(token.index, token.text.to_string());
        }
        for span in analysis.spans {
            self.board.add_span(span.start, span.len, span.wrong, span.correct);
        }
        for err in self.board.validate() {
            log::warn!("passage {}: span {} {}", passage.id.0, err.span.0, err.details);
        }
    }

    pub fn passage(&self) -> &Passage {
        &self.passages[self.current]
    }

    pub fn board(&self) -> &PassageWorld {
        &self.board
    }

    pub fn select(&mut self, id: SpanId) -> Result<SelectOutcome, SessionError> {
        self.session.ensure_running()?;
        Ok(self.board.select(id))
    }

    /// Judge the open editor's text, scoring the outcome.
    pub fn submit(&mut self, text: &str) -> Result<SubmitOutcome, SessionError> {
        self.session.ensure_running()?;
        let outcome = self.board.submit(text);
        match outcome {
            SubmitOutcome::Correct(_) => {
                self.session.reward()?;
                if self.board.is_complete() {
                    self.session.set_flash("All mistakes fixed!", FlashTone::Success);
                } else {
                    self.session.set_flash("Correct!", FlashTone::Success);
                }
            }
            SubmitOutcome::Wrong(_) => {
                self.session.penalty()?;
                self.session.set_flash("Not quite, try again", FlashTone::Error);
            }
            SubmitOutcome::Ignored | SubmitOutcome::NotEditing => {}
        }
        Ok(outcome)
    }

    pub fn cancel(&mut self) -> bool {
        self.board.cancel()
    }

    /// Move on to the next passage, keeping score and clock.
    /// Returns false when this was the last passage.
    pub fn next_passage(&mut self) -> Result<bool, SessionError> {
        self.session.ensure_running()?;
        if self.current + 1 >= self.passages.len() {
            return Ok(false);
        }
        self.load(self.current + 1);
        Ok(true)
    }

    /// Answers are revealed once the session is over.
    pub fn snapshot(&self) -> GrammarSnapshot {
        let tally = self.board.tally();
        GrammarSnapshot {
            title: self.passage().title.clone(),
            session: SessionView::of(&self.session),
            segments: self
                .board
                .segments(self.session.is_terminal())
                .into_iter()
                .map(Into::into)
                .collect(),
            editing: self.board.editing(),
            solved: tally.correct,
            total: tally.total(),
            has_next: self.current + 1 < self.passages.len(),
        }
    }
}

impl Game for GrammarGame {
    fn kind(&self) -> GameKind {
        GameKind::Grammar
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn restart(&mut self) {
        self.session.reset();
        self.load(0);
    }

    fn on_terminal(&mut self) {
        self.board.cancel();
    }
}
