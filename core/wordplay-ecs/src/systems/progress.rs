use hecs::World;
use crate::components::SpanState;
use wordplay_protocol::SpanStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub pending: usize,
    pub wrong: usize,
    pub correct: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.pending + self.wrong + self.correct
    }

    /// A round with no spans is never complete.
    pub fn is_complete(&self) -> bool {
        self.total() > 0 && self.correct == self.total()
    }
}

pub fn tally(world: &World) -> Tally {
    let mut tally = Tally::default();
    for (_id, state) in world.query::<&SpanState>().iter() {
        match state.status {
            SpanStatus::Pending => tally.pending += 1,
            SpanStatus::Wrong => tally.wrong += 1,
            SpanStatus::Correct => tally.correct += 1,
        }
    }
    tally
}
