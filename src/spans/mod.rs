//! Where the code spans of a document are. Finding them is the job of
//! whatever parses the document; [`Markdown`] is a small scanner for plain
//! Markdown text.

mod markdown;

pub use markdown::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    InlineCode,
    CodeBlock,
}

/// A region of a document as byte offsets `[start, end)`. Only meaningful
/// for the exact document text it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: SpanKind) -> Span {
        Span { start, end, kind }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The text this span covers, if it lies within the document.
    pub fn text<'i>(&self, document: &'i str) -> Option<&'i str> {
        document.get(self.start..self.end)
    }
}

/// Produces the spans of a document, in document order and not overlapping.
pub trait SpanSource {
    fn spans(&self, document: &str) -> Vec<Span>;
}
