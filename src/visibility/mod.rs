//! Deciding when rendered output would get in the way of editing.

use crate::spans::{Span, SpanKind};

/// Characters either side of a snippet within which the cursor keeps the
/// raw text showing.
pub const DEFAULT_SLACK: usize = 2;

/// Whether rendering should be withheld for the span `[start, end]` because
/// the cursor is inside it or within `slack` characters of either edge.
pub fn should_suppress_render(cursor: usize, start: usize, end: usize, slack: usize) -> bool {
    cursor >= start.saturating_sub(slack) && cursor <= end.saturating_add(slack)
}

/// Whether the character just before or just after the cursor belongs to
/// an inline code span. This is a heuristic for "the user is editing a
/// snippet right now", and when it holds a scan recomputes cached results
/// rather than trusting them.
pub fn is_cursor_adjacent(cursor: usize, spans: &[Span]) -> bool {
    spans
        .iter()
        .filter(|span| span.kind == SpanKind::InlineCode)
        .any(|span| {
            span.contains(cursor)
                || cursor
                    .checked_sub(1)
                    .is_some_and(|before| span.contains(before))
        })
}
