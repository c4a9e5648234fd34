pub mod best;
pub mod flash;
pub mod time;

pub use best::{record_best, BestScoreStore, MemoryStore};
pub use flash::{Flash, FlashTone};
pub use time::Countdown;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("the session is over")]
    Terminal,
}

/// Timing and scoring parameters of one game variant.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Countdown start, in seconds.
    pub duration_secs: u32,
    /// Points for a correct answer.
    pub reward: i32,
    /// Points removed for a wrong answer (positive number).
    pub penalty: i32,
    /// Ticks a flash message stays visible.
    pub flash_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: 180,
            reward: 20,
            penalty: 5,
            flash_ticks: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The countdown reached zero.
    Expired,
    /// The player submitted or quit.
    Ended,
    /// The game ran out of content or lives.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    /// This tick ended the session.
    Expired,
    /// Already terminal; nothing happened.
    Idle,
}

/// Score, clock and terminal state of one play-through.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    score: i32,
    countdown: Countdown,
    ended: Option<EndReason>,
    flash: Option<Flash>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        log::info!("session started: {}s on the clock", config.duration_secs);
        let mut session = Self {
            countdown: Countdown::new(config.duration_secs),
            config,
            score: 0,
            ended: None,
            flash: None,
        };
        session.expire_if_empty();
        session
    }

    /// A clock that starts at zero is already over.
    fn expire_if_empty(&mut self) {
        if self.countdown.is_expired() {
            self.finish(EndReason::Expired);
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn is_terminal(&self) -> bool {
        self.ended.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.ended
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_terminal() {
            return TickOutcome::Idle;
        }
        if let Some(flash) = self.flash.as_mut() {
            if !flash.age() {
                self.flash = None;
            }
        }
        if self.countdown.tick() {
            self.finish(EndReason::Expired);
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining: self.countdown.remaining(),
            }
        }
    }

    /// Bank a frame delta. Returns how many whole seconds the caller should
    /// `tick`; always 0 once terminal.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if self.is_terminal() {
            return 0;
        }
        self.countdown.accumulate(frame_dt)
    }

    /// Enter the terminal state. Returns true only for the call that did it.
    pub fn finish(&mut self, reason: EndReason) -> bool {
        if self.ended.is_some() {
            return false;
        }
        self.ended = Some(reason);
        log::info!("session over ({:?}) with score {}", reason, self.score);
        true
    }

    /// Player-triggered end.
    pub fn end(&mut self) -> bool {
        self.finish(EndReason::Ended)
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.countdown.reset();
        self.ended = None;
        self.flash = None;
        log::info!("session reset: {}s on the clock", self.config.duration_secs);
        self.expire_if_empty();
    }

    pub fn ensure_running(&self) -> Result<(), SessionError> {
        if self.is_terminal() {
            Err(SessionError::Terminal)
        } else {
            Ok(())
        }
    }

    /// Add points. Returns the new score.
    pub fn award(&mut self, points: i32) -> Result<i32, SessionError> {
        self.ensure_running()?;
        self.score = self.score.saturating_add(points);
        Ok(self.score)
    }

    /// Remove points; the score has no floor. Returns the new score.
    pub fn penalize(&mut self, points: i32) -> Result<i32, SessionError> {
        self.ensure_running()?;
        self.score = self.score.saturating_sub(points);
        Ok(self.score)
    }

    pub fn reward(&mut self) -> Result<i32, SessionError> {
        self.award(self.config.reward)
    }

    pub fn penalty(&mut self) -> Result<i32, SessionError> {
        self.penalize(self.config.penalty)
    }

    pub fn set_flash(&mut self, text: impl Into<String>, tone: FlashTone) {
        self.flash = Some(Flash::new(text, tone, self.config.flash_ticks));
    }

    pub fn clear_flash(&mut self) {
        self.flash = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(duration_secs: u32) -> Session {
        Session::new(SessionConfig {
            duration_secs,
            ..SessionConfig::default()
        })
    }

    #[test]
    fn test_terminal_exactly_once() {
        let mut s = short(3);
        assert_eq!(s.tick(), TickOutcome::Running { remaining: 2 });
        assert_eq!(s.tick(), TickOutcome::Running { remaining: 1 });
        assert_eq!(s.tick(), TickOutcome::Expired);
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert_eq!(s.end_reason(), Some(EndReason::Expired));
        assert!(!s.end());
        assert_eq!(s.award(20), Err(SessionError::Terminal));
        assert_eq!(s.penalty(), Err(SessionError::Terminal));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut s = short(60);
        assert_eq!(s.penalty(), Ok(-5));
        assert_eq!(s.penalty(), Ok(-10));
        assert_eq!(s.reward(), Ok(10));
    }

    #[test]
    fn test_end_and_reset() {
        let mut s = short(60);
        s.reward().unwrap();
        s.set_flash("Nice!", FlashTone::Success);
        assert!(s.end());
        assert!(!s.end());
        assert_eq!(s.tick(), TickOutcome::Idle);

        s.reset();
        assert!(!s.is_terminal());
        assert_eq!(s.score(), 0);
        assert_eq!(s.remaining(), 60);
        assert!(s.flash().is_none());
    }

    #[test]
    fn test_flash_expires() {
        let mut s = short(60);
        s.set_flash("Too short", FlashTone::Error);
        s.tick();
        s.tick();
        assert!(s.flash().is_some());
        s.tick();
        assert!(s.flash().is_none());
    }

    #[test]
    fn test_accumulate_frames() {
        let mut s = short(2);
        assert_eq!(s.accumulate(0.5), 0);
        assert_eq!(s.accumulate(0.75), 1);
        assert_eq!(s.tick(), TickOutcome::Running { remaining: 1 });
        assert_eq!(s.accumulate(10.0), 1);
        assert_eq!(s.tick(), TickOutcome::Expired);
        assert_eq!(s.accumulate(1.0), 0);
    }

    #[test]
    fn test_zero_duration_is_terminal() {
        let mut s = short(0);
        assert!(s.is_terminal());
        assert_eq!(s.end_reason(), Some(EndReason::Expired));
        for _ in 0..3 {
            assert_eq!(s.tick(), TickOutcome::Idle);
        }
        assert_eq!(s.reward(), Err(SessionError::Terminal));
        assert_eq!(s.penalty(), Err(SessionError::Terminal));

        s.reset();
        assert!(s.is_terminal());
        assert_eq!(s.score(), 0);
    }
}
