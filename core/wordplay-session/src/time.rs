/// One-second countdown.
/// Frame deltas are accumulated so a host may drive it from any frame rate.
#[derive(Debug, Clone)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    /// Fractional seconds not yet turned into ticks.
    accumulator: f32,
}

impl Countdown {
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            remaining: initial,
            accumulator: 0.0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Consume one second. Returns true when this tick reached zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Add frame time. Returns the number of whole seconds to tick, capped
    /// at what is left on the clock.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        let whole = (self.accumulator as u32).min(self.remaining);
        // Time past the end of the clock is discarded.
        self.accumulator = (self.accumulator - whole as f32).fract();
        whole
    }

    pub fn reset(&mut self) {
        self.remaining = self.initial;
        self.accumulator = 0.0;
    }
}
