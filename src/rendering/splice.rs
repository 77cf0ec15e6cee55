use tracing::warn;

use crate::rendering::Render;
use crate::scanning::DecorationSet;

/// Produce the document as it would be displayed: each decorated snippet,
/// together with the backticks around it, replaced by its widget.
/// Everything else is copied through untouched.
pub fn splice(document: &str, decorations: &DecorationSet, renderer: &dyn Render) -> String {
    let mut output = String::with_capacity(document.len());
    let mut position = 0;

    for decoration in decorations {
        if decoration.end > document.len()
            || !document.is_char_boundary(decoration.start)
            || !document.is_char_boundary(decoration.end)
        {
            warn!(
                "Decoration {}..{} does not fit the document; skipped",
                decoration.start, decoration.end
            );
            continue;
        }

        let (start, end) = widen(document, decoration.start, decoration.end);
        if start < position {
            continue;
        }

        output.push_str(&document[position..start]);
        output.push_str(&renderer.formula(&decoration.display));
        position = end;
    }

    output.push_str(&document[position..]);
    output
}

// Extend a content range out over its enclosing backtick runs, provided
// the runs on either side are of equal length.
fn widen(document: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = document.as_bytes();

    let before = bytes[..start]
        .iter()
        .rev()
        .take_while(|&&b| b == b'`')
        .count();
    let after = bytes[end..]
        .iter()
        .take_while(|&&b| b == b'`')
        .count();

    if before > 0 && before == after {
        (start - before, end + after)
    } else {
        (start, end)
    }
}
