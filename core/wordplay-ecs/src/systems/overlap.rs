use hecs::World;
use crate::components::{SpanData, TokenData};
use wordplay_protocol::SpanId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapError {
    pub span: SpanId,
    pub details: String,
}

/// Every span must lie inside the passage and cover tokens no other span covers.
pub fn check_disjoint(world: &World) -> Vec<OverlapError> {
    let mut errors = Vec::new();
    let token_count = world.query::<&TokenData>().iter().count();

    let mut ranges: Vec<(usize, usize, SpanId)> = world
        .query::<&SpanData>()
        .iter()
        .map(|(_, span)| (span.start, span.end(), span.id))
        .collect();
    ranges.sort();

    for &(start, end, id) in &ranges {
        if start >= end || end > token_count {
            errors.push(OverlapError {
                span: id,
                details: format!("range {}..{} outside {} tokens", start, end, token_count),
            });
        }
    }

    for pair in ranges.windows(2) {
        let (_, prev_end, prev_id) = pair[0];
        let (next_start, _, next_id) = pair[1];
        if next_start < prev_end {
            errors.push(OverlapError {
                span: next_id,
                details: format!("overlaps span {} at token {}", prev_id.0, next_start),
            });
        }
    }

    errors
}
