pub mod components;
pub mod systems;

use hecs::{Entity, World};
use components::{SpanData, SpanState, TokenData};
use systems::overlap::{check_disjoint, OverlapError};
use systems::progress::{tally, Tally};
use systems::render::{segments, Segment};
use wordplay_parser::answers_match;
use wordplay_protocol::{SpanId, SpanStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The span is now the single active editor.
    Editing(SpanId),
    /// Solved spans cannot be edited again.
    AlreadyCorrect,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    NotEditing,
    /// Blank input: nothing changed.
    Ignored,
    /// The span is solved and the editor closed.
    Correct(SpanId),
    /// The span stays open for another try.
    Wrong(SpanId),
}

/// Read-only view of one span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanView {
    pub id: SpanId,
    pub start: usize,
    pub len: usize,
    pub wrong: String,
    pub correct: String,
    pub status: SpanStatus,
    pub last_attempt: Option<String>,
}

/// Tokens and mistake spans of the passage currently in play.
pub struct PassageWorld {
    world: World,
    editing: Option<Entity>,
    next_span: u32,
}

impl PassageWorld {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            editing: None,
            next_span: 0,
        }
    }

    /// Drop the current passage.
    pub fn clear(&mut self) {
        self.world.clear();
        self.editing = None;
        self.next_span = 0;
    }

    pub fn add_token(&mut self, index: usize, text: String) -> Entity {
        self.world.spawn((TokenData { index, text },))
    }

    /// Spans must be added in text order; ids are handed out sequentially.
    pub fn add_span(&mut self, start: usize, len: usize, wrong: String, correct: String) -> SpanId {
        let id = SpanId::new(self.next_span);
        self.next_span += 1;
        self.world.spawn((
            SpanData { id, start, len, wrong, correct },
            SpanState::default(),
        ));
        id
    }

    fn find(&self, id: SpanId) -> Option<Entity> {
        self.world
            .query::<&SpanData>()
            .iter()
            .find(|(_, data)| data.id == id)
            .map(|(entity, _)| entity)
    }

    fn view(&self, entity: Entity) -> Option<SpanView> {
        let data = self.world.get::<&SpanData>(entity).ok()?;
        let state = self.world.get::<&SpanState>(entity).ok()?;
        Some(SpanView {
            id: data.id,
            start: data.start,
            len: data.len,
            wrong: data.wrong.clone(),
            correct: data.correct.clone(),
            status: state.status,
            last_attempt: state.last_attempt.clone(),
        })
    }

    pub fn span(&self, id: SpanId) -> Option<SpanView> {
        self.find(id).and_then(|entity| self.view(entity))
    }

    /// All spans ordered by start index.
    pub fn spans(&self) -> Vec<SpanView> {
        let entities: Vec<Entity> = self
            .world
            .query::<&SpanData>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        let mut views: Vec<SpanView> = entities.into_iter().filter_map(|e| self.view(e)).collect();
        views.sort_by_key(|v| v.start);
        views
    }

    pub fn editing(&self) -> Option<SpanId> {
        self.editing
            .and_then(|entity| self.world.get::<&SpanData>(entity).ok().map(|data| data.id))
    }

    /// Open the editor on a span, moving it away from any other span.
    pub fn select(&mut self, id: SpanId) -> SelectOutcome {
        let Some(entity) = self.find(id) else {
            return SelectOutcome::Unknown;
        };
        let solved = self
            .world
            .get::<&SpanState>(entity)
            .map(|state| state.status == SpanStatus::Correct)
            .unwrap_or(true);
        if solved {
            return SelectOutcome::AlreadyCorrect;
        }
        self.editing = Some(entity);
        SelectOutcome::Editing(id)
    }

    /// Judge the active editor's text against its correction.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let Some(entity) = self.editing else {
            return SubmitOutcome::NotEditing;
        };
        let attempt = text.trim();
        if attempt.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let (id, correct) = match self.world.get::<&SpanData>(entity) {
            Ok(data) => (data.id, answers_match(attempt, &data.correct)),
            Err(_) => {
                self.editing = None;
                return SubmitOutcome::NotEditing;
            }
        };

        if let Ok(state) = self.world.query_one_mut::<&mut SpanState>(entity) {
            state.last_attempt = Some(attempt.to_string());
            state.status = if correct { SpanStatus::Correct } else { SpanStatus::Wrong };
        }

        if correct {
            self.editing = None;
            SubmitOutcome::Correct(id)
        } else {
            SubmitOutcome::Wrong(id)
        }
    }

    /// Close the editor without touching status. Returns whether one was open.
    pub fn cancel(&mut self) -> bool {
        self.editing.take().is_some()
    }

    pub fn tally(&self) -> Tally {
        tally(&self.world)
    }

    pub fn is_complete(&self) -> bool {
        self.tally().is_complete()
    }

    pub fn segments(&self, reveal: bool) -> Vec<Segment> {
        segments(&self.world, self.editing, reveal)
    }

    /// Spans that break the disjoint, in-bounds layout.
    pub fn validate(&self) -> Vec<OverlapError> {
        check_disjoint(&self.world)
    }
}

impl Default for PassageWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> (PassageWorld, SpanId) {
        let mut pw = PassageWorld::new();
        for (i, word) in "She go to the market yesterday.".split(' ').enumerate() {
            pw.add_token(i, word.to_string());
        }
        let id = pw.add_span(1, 1, "go".to_string(), "went".to_string());
        (pw, id)
    }

    #[test]
    fn test_wrong_then_correct() {
        let (mut pw, id) = market();
        assert_eq!(pw.submit("went"), SubmitOutcome::NotEditing);

        assert_eq!(pw.select(id), SelectOutcome::Editing(id));
        assert_eq!(pw.submit("   "), SubmitOutcome::Ignored);
        assert_eq!(pw.span(id).map(|s| s.status), Some(SpanStatus::Pending));

        assert_eq!(pw.submit("goes"), SubmitOutcome::Wrong(id));
        assert_eq!(pw.editing(), Some(id));
        assert_eq!(pw.span(id).and_then(|s| s.last_attempt), Some("goes".to_string()));

        assert_eq!(pw.submit("Went."), SubmitOutcome::Correct(id));
        assert_eq!(pw.editing(), None);
        assert_eq!(pw.select(id), SelectOutcome::AlreadyCorrect);
        assert_eq!(pw.submit("went"), SubmitOutcome::NotEditing);
        assert!(pw.is_complete());
    }

    #[test]
    fn test_single_active_editor() {
        let (mut pw, first) = market();
        let second = pw.add_span(3, 2, "the market".to_string(), "a market".to_string());

        pw.select(first);
        pw.select(second);
        assert_eq!(pw.editing(), Some(second));
        assert_eq!(pw.submit("went"), SubmitOutcome::Wrong(second));
        assert_eq!(pw.span(first).map(|s| s.status), Some(SpanStatus::Pending));

        assert!(pw.cancel());
        assert!(!pw.cancel());
        assert_eq!(pw.span(second).map(|s| s.status), Some(SpanStatus::Wrong));
    }

    #[test]
    fn test_segments_substitute_spans() {
        let (mut pw, id) = market();
        pw.select(id);
        let segs = pw.segments(false);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], Segment::Text("She".to_string()));
        match &segs[1] {
            Segment::Span { text, editing, answer, .. } => {
                assert_eq!(text, "go");
                assert!(*editing);
                assert!(answer.is_none());
            }
            other => panic!("Expected span, got {:?}", other),
        }
        assert_eq!(segs[2], Segment::Text("to the market yesterday.".to_string()));

        pw.submit("went");
        match &pw.segments(true)[1] {
            Segment::Span { text, answer, .. } => {
                assert_eq!(text, "went");
                assert_eq!(answer.as_deref(), Some("went"));
            }
            other => panic!("Expected span, got {:?}", other),
        }
    }

    #[test]
    fn test_overlap_check() {
        let (mut pw, _) = market();
        assert!(pw.validate().is_empty());

        pw.add_span(1, 2, "go to".to_string(), "went to".to_string());
        pw.add_span(5, 3, "yesterday.".to_string(), "".to_string());
        let errors = pw.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_clear_resets_ids() {
        let (mut pw, id) = market();
        pw.select(id);
        pw.clear();
        assert_eq!(pw.editing(), None);
        assert!(pw.spans().is_empty());
        assert!(!pw.is_complete());
        assert_eq!(pw.add_span(0, 1, "a".to_string(), "b".to_string()), SpanId::new(0));
    }
}
