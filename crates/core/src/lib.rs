//! # Bitext Core
//!
//! The alignment and diff engine behind a bilingual reading-practice app.
//! A reader works through an article sentence by sentence: the app keeps a
//! two-column table pairing each source sentence with its translation, and
//! grades typed translation attempts against the reference translation
//! with a token-level diff.
//!
//! ## Core Concepts
//!
//! - **Tokenize**: split text per whitespace-delimited word or per
//!   character, the latter for unspaced scripts such as Chinese
//! - **Diff**: LCS alignment of reference vs. attempt, returned as
//!   coalesced match/insert/delete spans ready for colored rendering
//! - **Align**: pure editing operations over the sentence-pair table the
//!   user corrects by hand, plus readiness statistics for the commit flow
//! - **Segment**: the punctuation heuristic that seeds the table from raw
//!   article and translation text
//!
//! Everything is plain data in, plain data out. Operations never fail: an
//! out-of-range index returns the input unchanged, because the UI may
//! dispatch against a snapshot that is already stale.
//!
//! ## Example
//!
//! ```rust
//! use bitext_core::{compute_diff, SpanKind, TokenMode};
//!
//! let spans = compute_diff("the cat sat", "the dog sat", TokenMode::Word);
//!
//! assert_eq!(spans.len(), 4);
//! assert_eq!(spans[1].kind, SpanKind::Delete);
//! assert_eq!(spans[1].text, "cat");
//! ```

pub mod algorithm;
pub mod align;
pub mod diff;
pub mod segment;
pub mod tokenize;

// Re-export main types
pub use align::editor::{
    clean_empty_pairs, from_segments, insert_gap, merge_up, remove_gap, split_at, update_text,
};
pub use align::stats::{alignment_stats, AlignmentStats};
pub use align::{AlignmentPair, PairKind, Side};
pub use diff::{attempt_text, reference_text, DiffSpan, DiffStats, SpanKind};
pub use segment::split_sentences;
pub use tokenize::{tokenize, TokenMode};

/// Main entry point for diffing a translation attempt against its reference
///
/// # Arguments
///
/// * `reference` - The reference translation the attempt is graded against
/// * `attempt` - The text the learner typed
/// * `mode` - Tokenization granularity; `Word` for spaced scripts, `Char`
///   for unspaced ones
///
/// # Returns
///
/// Coalesced spans in presentation order. `Match` plus `Delete` spans
/// reproduce the reference's token stream, `Match` plus `Insert` the
/// attempt's.
///
/// # Example
///
/// ```rust
/// use bitext_core::{compute_diff, TokenMode};
///
/// let spans = compute_diff("我喜欢猫", "我爱猫", TokenMode::Char);
/// let rendered: Vec<String> = spans.iter().map(|s| s.to_string()).collect();
///
/// assert_eq!(rendered, vec!["=我", "-喜欢", "+爱", "=猫"]);
/// ```
pub fn compute_diff(reference: &str, attempt: &str, mode: TokenMode) -> Vec<DiffSpan> {
    let reference_tokens = tokenize(reference, mode);
    let attempt_tokens = tokenize(attempt, mode);

    tracing::debug!(
        reference_tokens = reference_tokens.len(),
        attempt_tokens = attempt_tokens.len(),
        ?mode,
        "computing span diff"
    );

    algorithm::diff_tokens(&reference_tokens, &attempt_tokens, mode)
}
