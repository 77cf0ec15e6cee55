use tracing::trace;

use crate::spans::{Span, SpanKind, SpanSource};

/// Finds code in Markdown text. A run of N backticks opens an inline code
/// span which the next run of exactly N backticks closes; the span covers
/// what lies between the two runs, and never crosses a blank line (one
/// holding only spaces, tabs, or a carriage return). A line starting with
/// three backticks or three tildes opens a fenced code block that lasts
/// until a line starting with the same fence closes it (or the document
/// ends), and nothing inside a fenced block is inline code. Indented code
/// blocks and fences indented by spaces are not recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl SpanSource for Markdown {
    fn spans(&self, document: &str) -> Vec<Span> {
        let bytes = document.as_bytes();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            let at_line_start = i == 0 || bytes[i - 1] == b'\n';

            if at_line_start {
                let fence = ["```", "~~~"]
                    .into_iter()
                    .find(|fence| document[i..].starts_with(fence));

                if let Some(fence) = fence {
                    let end = fence_end(document, i, fence);
                    trace!(start = i, end, "Code block");
                    spans.push(Span::new(i, end, SpanKind::CodeBlock));
                    i = end;
                    continue;
                }
            }

            if bytes[i] == b'`' {
                let width = backtick_run(bytes, i);
                let open = i + width;
                match closing_run(bytes, open, width) {
                    Some(close) => {
                        spans.push(Span::new(open, close, SpanKind::InlineCode));
                        i = close + width;
                    }
                    None => i = open,
                }
                continue;
            }

            i += 1;
        }

        spans
    }
}

fn backtick_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .take_while(|&&b| b == b'`')
        .count()
}

// Offset of the next run of exactly `width` backticks at or after `from`
// enclosing a non-empty span. An inline span does not continue past a blank
// line.
fn closing_run(bytes: &[u8], from: usize, width: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        match bytes[j] {
            b'`' => {
                let run = backtick_run(bytes, j);
                if run == width && j > from {
                    return Some(j);
                }
                j += run;
            }
            b'\n' if blank_line_follows(bytes, j) => return None,
            _ => j += 1,
        }
    }
    None
}

// Whether the line after the newline at `newline` is blank.
fn blank_line_follows(bytes: &[u8], newline: usize) -> bool {
    let rest = &bytes[newline + 1..];
    let width = rest
        .iter()
        .take_while(|&&b| b == b' ' || b == b'\t' || b == b'\r')
        .count();
    rest.get(width) == Some(&b'\n')
}

// End of a fenced block opened at `start`: just past the closing fence line,
// or the end of the document.
fn fence_end(document: &str, start: usize, fence: &str) -> usize {
    let body = match document[start..].find('\n') {
        Some(newline) => start + newline + 1,
        None => return document.len(),
    };

    let mut line_start = body;
    while line_start < document.len() {
        let line_end = match document[line_start..].find('\n') {
            Some(newline) => line_start + newline + 1,
            None => document.len(),
        };
        if document[line_start..line_end].starts_with(fence) {
            return line_end;
        }
        line_start = line_end;
    }

    document.len()
}
