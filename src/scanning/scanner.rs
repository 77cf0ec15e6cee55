use tracing::{debug, trace, warn};

use crate::cache::{CachePolicy, ResultCache};
use crate::classify::{classify, Classification};
use crate::config::Settings;
use crate::engine::{Calculator, Engine};
use crate::evaluator::{EvaluationError, Evaluator};
use crate::scanning::{Decoration, DecorationSet};
use crate::spans::{Span, SpanKind, SpanSource};
use crate::visibility::{is_cursor_adjacent, should_suppress_render};

/// One editing session over a document. Holds the evaluator (and through
/// it every declaration made so far), the result cache, and the
/// decorations produced by the most recent scan.
///
/// Scans run one at a time to completion. Snippets are visited in document
/// order, so a declaration is in effect for every snippet after it.
#[derive(Debug)]
pub struct Scanner<E = Calculator> {
    evaluator: Evaluator<E>,
    cache: ResultCache,
    slack: usize,
    decorations: DecorationSet,
}

/// What became of one snippet in a [`Scanner::check`] pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'i> {
    pub span: Span,
    pub text: &'i str,
    pub classification: Classification<'i>,
    /// `None` for unrecognized snippets.
    pub outcome: Option<Result<String, EvaluationError>>,
}

impl Scanner<Calculator> {
    pub fn new() -> Scanner<Calculator> {
        Scanner::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Scanner<Calculator> {
        Scanner::with_engine(Calculator::new(), settings)
    }
}

impl Default for Scanner<Calculator> {
    fn default() -> Self {
        Scanner::new()
    }
}

impl<E: Engine> Scanner<E> {
    pub fn with_engine(engine: E, settings: &Settings) -> Scanner<E> {
        let mut evaluator = Evaluator::with_engine(engine);
        evaluator.configure(settings);

        Scanner {
            evaluator,
            cache: ResultCache::new(CachePolicy::from_capacity(settings.cache_capacity)),
            slack: settings.slack,
            decorations: DecorationSet::new(),
        }
    }

    pub fn evaluator(&self) -> &Evaluator<E> {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator<E> {
        &mut self.evaluator
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Forget all cached results, as when the document is closed.
    pub fn clear_cache(&mut self) {
        self.cache
            .clear();
    }

    /// The decorations from the most recent scan that had a cursor.
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Scan the document after an edit or cursor movement and replace the
    /// held decorations with the result. Without a cursor nothing is
    /// scanned and the previous decorations stay as they were.
    pub fn update(
        &mut self,
        document: &str,
        cursor: Option<usize>,
        source: &impl SpanSource,
    ) -> &DecorationSet {
        if cursor.is_none() {
            debug!("No cursor; keeping previous decorations");
            return &self.decorations;
        }

        let spans = source.spans(document);
        if let Some(decorations) = self.scan(document, cursor, &spans) {
            self.decorations = decorations;
        }
        &self.decorations
    }

    /// One pass over the inline code spans of a document. Returns `None`
    /// when there is no cursor, in which case nothing was done.
    pub fn scan(
        &mut self,
        document: &str,
        cursor: Option<usize>,
        spans: &[Span],
    ) -> Option<DecorationSet> {
        let cursor = match cursor {
            Some(cursor) => cursor,
            None => {
                debug!("No cursor; scan abandoned");
                return None;
            }
        };

        // Editing right at a snippet means its text may coincide with a
        // stale cache key, so recompute everything this pass.
        let recompute = is_cursor_adjacent(cursor, spans);

        let mut snippets: Vec<&Span> = spans
            .iter()
            .filter(|span| span.kind == SpanKind::InlineCode)
            .collect();
        snippets.sort_by_key(|span| span.start);

        debug!(
            "Scanning {} snippet{} with cursor at {}{}",
            snippets.len(),
            if snippets.len() == 1 { "" } else { "s" },
            cursor,
            if recompute { ", recomputing" } else { "" }
        );

        let mut decorations = DecorationSet::new();

        for span in snippets {
            let text = match span.text(document) {
                Some(text) => text,
                None => {
                    warn!("Span {}..{} lies outside the document", span.start, span.end);
                    continue;
                }
            };

            let display = match self.outcome(text, recompute) {
                Some(display) => display,
                None => continue,
            };

            if should_suppress_render(cursor, span.start, span.end, self.slack) {
                trace!("Cursor at {} is editing `{}`; showing raw text", cursor, text);
                continue;
            }

            let decoration = Decoration::new(span.start, span.end, display);
            if !decorations.push(decoration) {
                warn!("Span {}..{} overlaps an earlier one; dropped", span.start, span.end);
            }
        }

        debug!("Produced {} decorations", decorations.len());
        Some(decorations)
    }

    /// Diagnostic pass: classify and compute every inline code span in
    /// document order, bypassing the cache, and report each outcome.
    pub fn check<'i>(&mut self, document: &'i str, spans: &[Span]) -> Vec<Report<'i>> {
        let mut snippets: Vec<&Span> = spans
            .iter()
            .filter(|span| span.kind == SpanKind::InlineCode)
            .collect();
        snippets.sort_by_key(|span| span.start);

        let mut reports = Vec::new();
        for span in snippets {
            let text = match span.text(document) {
                Some(text) => text,
                None => continue,
            };
            let classification = classify(text);
            let outcome = self
                .evaluator
                .compute(&classification);

            reports.push(Report {
                span: *span,
                text,
                classification,
                outcome,
            });
        }
        reports
    }

    // The display string for a snippet, from the cache when allowed, else
    // computed and cached. None when the snippet isn't one of ours or the
    // computation failed. Declarations are always run again, so that the
    // engine's tables follow document order on every scan.
    fn outcome(&mut self, text: &str, recompute: bool) -> Option<String> {
        let classification = classify(text);

        if !recompute && !classification.is_declaration() {
            if let Some(display) = self
                .cache
                .get(text)
            {
                return Some(display.to_string());
            }
        }

        match self
            .evaluator
            .compute(&classification)?
        {
            Ok(display) => {
                self.cache
                    .set(text, display.clone());
                Some(display)
            }
            Err(error) => {
                debug!("Leaving `{}` as written: {}", text, error);
                None
            }
        }
    }
}
