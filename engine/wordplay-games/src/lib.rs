pub mod avatar;
pub mod battle;
pub mod content;
pub mod error;
pub mod grammar;
pub mod jumble;
pub mod snapshot;
pub mod survival;
pub mod wordlist;

pub use battle::{WordBattleConfig, WordBattleGame, WordVerdict};
pub use content::builtin_pack;
pub use error::{ContentError, WordListError};
pub use grammar::{GrammarConfig, GrammarGame};
pub use jumble::{JumbleConfig, JumbleGame, JumbleVerdict};
pub use survival::{QuizVerdict, SurvivalConfig, SurvivalQuiz};

use wordplay_protocol::GameKind;
use wordplay_session::{record_best, BestScoreStore, EndReason, Session, TickOutcome};

/// The contract every game variant fulfils.
///
/// Hosts drive a game with one `tick` per second plus the variant's own
/// input methods; everything else is provided.
pub trait Game {
    fn kind(&self) -> GameKind;

    fn session(&self) -> &Session;

    fn session_mut(&mut self) -> &mut Session;

    /// Start over with the same content.
    fn restart(&mut self);

    /// Runs after every tick that leaves the session running.
    fn on_second(&mut self) {}

    /// Runs once when the session becomes terminal.
    fn on_terminal(&mut self) {}

    fn tick(&mut self) -> TickOutcome {
        let outcome = self.session_mut().tick();
        match outcome {
            TickOutcome::Running { .. } => self.on_second(),
            TickOutcome::Expired => self.on_terminal(),
            TickOutcome::Idle => {}
        }
        outcome
    }

    /// Drive the clock from frame time. Each whole second runs through
    /// `tick`, so the hooks fire exactly as with a one-second timer.
    fn advance(&mut self, frame_dt: f32) -> TickOutcome {
        let steps = self.session_mut().accumulate(frame_dt);
        let mut outcome = if self.session().is_terminal() {
            TickOutcome::Idle
        } else {
            TickOutcome::Running {
                remaining: self.session().remaining(),
            }
        };
        for _ in 0..steps {
            outcome = self.tick();
        }
        outcome
    }

    /// Terminate for `reason`. Returns false if already terminal.
    fn finish(&mut self, reason: EndReason) -> bool {
        let finished = self.session_mut().finish(reason);
        if finished {
            self.on_terminal();
        }
        finished
    }

    /// Explicit submit/quit by the player.
    fn end(&mut self) -> bool {
        self.finish(EndReason::Ended)
    }

    fn score(&self) -> i32 {
        self.session().score()
    }

    /// Persist the current score if it beats the stored best.
    fn record_best(&self, store: &mut dyn BestScoreStore) -> bool {
        record_best(store, self.kind().best_score_key(), self.session().score())
    }
}
