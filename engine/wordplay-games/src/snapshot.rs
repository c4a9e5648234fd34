//! Serializable views handed to the UI layer.

use serde::Serialize;
use wordplay_ecs::systems::render::Segment;
use wordplay_protocol::{SpanId, SpanStatus};
use wordplay_session::{EndReason, FlashTone, Session};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashView {
    pub text: String,
    pub tone: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub score: i32,
    pub remaining: u32,
    pub terminal: bool,
    pub end_reason: Option<&'static str>,
    pub flash: Option<FlashView>,
}

impl SessionView {
    pub fn of(session: &Session) -> Self {
        Self {
            score: session.score(),
            remaining: session.remaining(),
            terminal: session.is_terminal(),
            end_reason: session.end_reason().map(|reason| match reason {
                EndReason::Expired => "expired",
                EndReason::Ended => "ended",
                EndReason::Exhausted => "exhausted",
            }),
            flash: session.flash().map(|flash| FlashView {
                text: flash.text.clone(),
                tone: match flash.tone {
                    FlashTone::Info => "info",
                    FlashTone::Success => "success",
                    FlashTone::Error => "error",
                },
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SegmentView {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Span {
        id: SpanId,
        text: String,
        status: SpanStatus,
        last_attempt: Option<String>,
        editing: bool,
        answer: Option<String>,
    },
}

impl From<Segment> for SegmentView {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Text(text) => SegmentView::Text { text },
            Segment::Span { id, text, status, last_attempt, editing, answer } => SegmentView::Span {
                id,
                text,
                status,
                last_attempt,
                editing,
                answer,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarSnapshot {
    pub title: String,
    pub session: SessionView,
    pub segments: Vec<SegmentView>,
    pub editing: Option<SpanId>,
    pub solved: usize,
    pub total: usize,
    pub has_next: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundWordView {
    pub word: String,
    pub by: &'static str,
    pub points: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSnapshot {
    pub rack: String,
    pub session: SessionView,
    pub found: Vec<FoundWordView>,
    pub bot_score: Option<i32>,
    pub outcome: Option<&'static str>,
    pub dictionary_size: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JumbleSnapshot {
    pub session: SessionView,
    pub scrambled: Option<String>,
    pub hint: Option<String>,
    pub solved: usize,
    pub puzzles_left: usize,
    pub last_answer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurvivalSnapshot {
    pub session: SessionView,
    pub prompt: Option<String>,
    pub choices: Vec<String>,
    pub lives: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub answered: usize,
}
