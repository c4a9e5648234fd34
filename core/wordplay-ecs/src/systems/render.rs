use hecs::{Entity, World};
use crate::components::{SpanData, SpanState, TokenData};
use wordplay_protocol::{SpanId, SpanStatus};

/// A display unit: plain tokens, or one editable span standing in for its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Span {
        id: SpanId,
        /// The correction once solved, the original wrong text otherwise.
        text: String,
        status: SpanStatus,
        last_attempt: Option<String>,
        editing: bool,
        /// Filled only when answers are revealed.
        answer: Option<String>,
    },
}

/// Lay the passage out in token order, substituting spans for their ranges.
pub fn segments(world: &World, editing: Option<Entity>, reveal: bool) -> Vec<Segment> {
    let mut tokens: Vec<(usize, String)> = world
        .query::<&TokenData>()
        .iter()
        .map(|(_, t)| (t.index, t.text.clone()))
        .collect();
    tokens.sort_by_key(|(index, _)| *index);

    let mut spans: Vec<(Entity, SpanData, SpanState)> = world
        .query::<(&SpanData, &SpanState)>()
        .iter()
        .map(|(entity, (data, state))| (entity, data.clone(), state.clone()))
        .collect();
    spans.sort_by_key(|(_, data, _)| data.start);

    let mut out = Vec::new();
    let mut pending_text: Vec<&str> = Vec::new();
    let mut next_span = spans.iter().peekable();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let index = tokens[cursor].0;
        match next_span.peek() {
            Some((entity, data, state)) if data.start == index => {
                if !pending_text.is_empty() {
                    out.push(Segment::Text(pending_text.join(" ")));
                    pending_text.clear();
                }
                let text = if state.status == SpanStatus::Correct {
                    data.correct.clone()
                } else {
                    data.wrong.clone()
                };
                out.push(Segment::Span {
                    id: data.id,
                    text,
                    status: state.status,
                    last_attempt: state.last_attempt.clone(),
                    editing: editing == Some(*entity),
                    answer: reveal.then(|| data.correct.clone()),
                });
                cursor += data.len.max(1);
                next_span.next();
            }
            _ => {
                pending_text.push(&tokens[cursor].1);
                cursor += 1;
            }
        }
    }

    if !pending_text.is_empty() {
        out.push(Segment::Text(pending_text.join(" ")));
    }
    out
}
