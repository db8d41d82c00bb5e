//! Diff span types and attempt scoring

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tokenize::{tokenize, TokenMode};

/// Kind of a diff span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanKind {
    /// Present in both the reference and the attempt
    Match,
    /// Present only in the attempt (extra text the learner typed)
    Insert,
    /// Present only in the reference (text the learner missed)
    Delete,
}

/// A maximal run of same-kind tokens.
///
/// `text` is the run's tokens joined with the mode's separator: a single
/// space in `Word` mode, nothing in `Char` mode. Adjacent spans always
/// differ in kind; the producer coalesces equal-kind neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl DiffSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for a `Match` span
    pub fn matched(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Match, text)
    }

    /// Shorthand for an `Insert` span
    pub fn inserted(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Insert, text)
    }

    /// Shorthand for a `Delete` span
    pub fn deleted(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Delete, text)
    }

    /// Get a human-readable description of this span
    pub fn description(&self) -> String {
        match self.kind {
            SpanKind::Match => format!("keep \"{}\"", self.text),
            SpanKind::Insert => format!("extra \"{}\"", self.text),
            SpanKind::Delete => format!("missing \"{}\"", self.text),
        }
    }
}

impl fmt::Display for DiffSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            SpanKind::Match => '=',
            SpanKind::Insert => '+',
            SpanKind::Delete => '-',
        };
        write!(f, "{}{}", marker, self.text)
    }
}

/// Rebuild the reference's token stream from a span list.
///
/// Match plus Delete spans carry exactly the reference tokens, in order;
/// joining them with the mode's separator reproduces the tokenized
/// reference (whitespace normalized to single spaces in `Word` mode).
pub fn reference_text(spans: &[DiffSpan], mode: TokenMode) -> String {
    rebuild(spans, SpanKind::Delete, mode)
}

/// Rebuild the attempt's token stream from a span list.
///
/// The counterpart of [`reference_text`]: Match plus Insert spans carry
/// exactly the attempt tokens, in order.
pub fn attempt_text(spans: &[DiffSpan], mode: TokenMode) -> String {
    rebuild(spans, SpanKind::Insert, mode)
}

fn rebuild(spans: &[DiffSpan], keep: SpanKind, mode: TokenMode) -> String {
    let parts: Vec<&str> = spans
        .iter()
        .filter(|span| span.kind == SpanKind::Match || span.kind == keep)
        .map(|span| span.text.as_str())
        .collect();

    parts.join(mode.separator())
}

/// Token counts for grading an attempt against its reference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Tokens present in both texts
    pub matched: usize,
    /// Attempt tokens with no reference counterpart
    pub inserted: usize,
    /// Reference tokens the attempt missed
    pub deleted: usize,
}

impl DiffStats {
    /// Tally a span list back into token counts, using the same mode that
    /// produced the spans.
    pub fn from_spans(spans: &[DiffSpan], mode: TokenMode) -> Self {
        let mut stats = Self::default();

        for span in spans {
            let count = tokenize(&span.text, mode).len();
            match span.kind {
                SpanKind::Match => stats.matched += count,
                SpanKind::Insert => stats.inserted += count,
                SpanKind::Delete => stats.deleted += count,
            }
        }

        stats
    }

    /// Number of tokens in the reference
    pub fn reference_tokens(&self) -> usize {
        self.matched + self.deleted
    }

    /// Number of tokens in the attempt
    pub fn attempt_tokens(&self) -> usize {
        self.matched + self.inserted
    }

    /// Share of the reference the attempt reproduced, 0.0 to 1.0.
    /// An empty reference counts as fully reproduced.
    pub fn accuracy(&self) -> f64 {
        if self.reference_tokens() == 0 {
            1.0
        } else {
            self.matched as f64 / self.reference_tokens() as f64
        }
    }

    /// Get a one-line summary for logs and demos
    pub fn summary(&self) -> String {
        format!(
            "{} matched, {} missing, {} extra ({:.0}% of reference)",
            self.matched,
            self.deleted,
            self.inserted,
            self.accuracy() * 100.0
        )
    }
}
