//! LCS diff over token sequences
//!
//! Implements the longest-common-subsequence dynamic program the span diff
//! is built on: fill an `(m+1) x (n+1)` length table, walk it back from the
//! corner, and coalesce the per-token operations into maximal same-kind
//! runs. The backtrack order is part of the engine's contract; see
//! [`diff_tokens`].

use crate::diff::{DiffSpan, SpanKind};
use crate::tokenize::TokenMode;

/// Compute the span diff between two already-tokenized sequences.
///
/// `reference` is the text the attempt is graded against; tokens that only
/// appear there come back as `Delete` spans, tokens only in `attempt` as
/// `Insert` spans. Output order is deterministic: when the table walk has
/// two equally good directions it takes the attempt token, which after the
/// final reverse puts a reference's missing run ahead of the attempt's
/// extra run at every substitution point.
pub fn diff_tokens(reference: &[&str], attempt: &[&str], mode: TokenMode) -> Vec<DiffSpan> {
    let dp = lcs_table(reference, attempt);
    let ops = backtrack(&dp, reference, attempt);

    coalesce(ops, mode)
}

/// Fill the LCS length table.
///
/// `dp[i][j]` is the LCS length of the first `i` reference tokens and the
/// first `j` attempt tokens; row and column zero stay zero.
fn lcs_table(reference: &[&str], attempt: &[&str]) -> Vec<Vec<usize>> {
    let m = reference.len();
    let n = attempt.len();

    let mut dp = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if reference[i - 1] == attempt[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp
}

/// Walk the filled table from the bottom-right corner, emitting one
/// operation per token, then reverse into presentation order.
fn backtrack<'a>(
    dp: &[Vec<usize>],
    reference: &[&'a str],
    attempt: &[&'a str],
) -> Vec<(SpanKind, &'a str)> {
    let mut ops = Vec::with_capacity(reference.len() + attempt.len());
    let mut i = reference.len();
    let mut j = attempt.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && reference[i - 1] == attempt[j - 1] {
            ops.push((SpanKind::Match, reference[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            // The >= sends ties to the attempt side. Presentation policy,
            // not correctness: either direction yields a minimal diff, this
            // one fixes which of them every caller sees.
            ops.push((SpanKind::Insert, attempt[j - 1]));
            j -= 1;
        } else {
            ops.push((SpanKind::Delete, reference[i - 1]));
            i -= 1;
        }
    }

    ops.reverse();
    ops
}

/// Merge adjacent same-kind operations into maximal spans, re-inserting
/// the mode's separator between the joined tokens.
fn coalesce(ops: Vec<(SpanKind, &str)>, mode: TokenMode) -> Vec<DiffSpan> {
    let separator = mode.separator();
    let mut spans: Vec<DiffSpan> = Vec::new();

    for (kind, token) in ops {
        match spans.last_mut() {
            Some(last) if last.kind == kind => {
                last.text.push_str(separator);
                last.text.push_str(token);
            }
            _ => spans.push(DiffSpan::new(kind, token)),
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn word_diff(reference: &str, attempt: &str) -> Vec<DiffSpan> {
        diff_tokens(
            &tokenize(reference, TokenMode::Word),
            &tokenize(attempt, TokenMode::Word),
            TokenMode::Word,
        )
    }

    fn char_diff(reference: &str, attempt: &str) -> Vec<DiffSpan> {
        diff_tokens(
            &tokenize(reference, TokenMode::Char),
            &tokenize(attempt, TokenMode::Char),
            TokenMode::Char,
        )
    }

    // ============================================================================
    // Substitutions and Span Order
    // ============================================================================

    #[test]
    fn test_word_substitution() {
        let spans = word_diff("the cat sat", "the dog sat");

        assert_eq!(
            spans,
            vec![
                DiffSpan::matched("the"),
                DiffSpan::deleted("cat"),
                DiffSpan::inserted("dog"),
                DiffSpan::matched("sat"),
            ]
        );
    }

    #[test]
    fn test_substitution_shows_missing_before_extra() {
        // The tie-break pins this order; flipping the >= would swap it.
        let spans = word_diff("a x b", "a y b");

        assert_eq!(spans[1], DiffSpan::deleted("x"), "Delete run should come first");
        assert_eq!(spans[2], DiffSpan::inserted("y"), "Insert run should follow");
    }

    #[test]
    fn test_char_substitution_coalesces_runs() {
        let spans = char_diff("我喜欢猫", "我爱猫");

        assert_eq!(
            spans,
            vec![
                DiffSpan::matched("我"),
                DiffSpan::deleted("喜欢"),
                DiffSpan::inserted("爱"),
                DiffSpan::matched("猫"),
            ]
        );
    }

    #[test]
    fn test_word_mode_rejoins_runs_with_spaces() {
        let spans = word_diff("one two three", "four five six");

        assert_eq!(
            spans,
            vec![
                DiffSpan::deleted("one two three"),
                DiffSpan::inserted("four five six"),
            ]
        );
    }

    // ============================================================================
    // Edge Cases and Boundary Conditions
    // ============================================================================

    #[test]
    fn test_both_empty() {
        assert!(word_diff("", "").is_empty());
        assert!(char_diff("", "").is_empty());
    }

    #[test]
    fn test_empty_reference_is_all_insert() {
        let spans = word_diff("", "some new text");

        assert_eq!(spans, vec![DiffSpan::inserted("some new text")]);
    }

    #[test]
    fn test_empty_attempt_is_all_delete() {
        let spans = word_diff("some old text", "");

        assert_eq!(spans, vec![DiffSpan::deleted("some old text")]);
    }

    #[test]
    fn test_identical_inputs_are_one_match_span() {
        let spans = word_diff("the cat sat", "the cat sat");

        assert_eq!(spans, vec![DiffSpan::matched("the cat sat")]);
    }

    #[test]
    fn test_prefix_insertion() {
        let spans = word_diff("cat sat", "the cat sat");

        assert_eq!(
            spans,
            vec![DiffSpan::inserted("the"), DiffSpan::matched("cat sat")]
        );
    }

    #[test]
    fn test_suffix_deletion() {
        let spans = word_diff("the cat sat down", "the cat sat");

        assert_eq!(
            spans,
            vec![DiffSpan::matched("the cat sat"), DiffSpan::deleted("down")]
        );
    }

    #[test]
    fn test_repeated_tokens_keep_lcs_maximal() {
        let spans = word_diff("a b a b a", "b a b");

        let matched: usize = spans
            .iter()
            .filter(|s| s.kind == SpanKind::Match)
            .map(|s| tokenize(&s.text, TokenMode::Word).len())
            .sum();

        assert_eq!(matched, 3, "Expected the full 'b a b' subsequence to match");
    }

    #[test]
    fn test_adjacent_spans_never_share_a_kind() {
        let spans = word_diff("the quick brown fox", "a quick red fox jumps");

        for window in spans.windows(2) {
            assert_ne!(
                window[0].kind, window[1].kind,
                "Coalescing must leave no equal-kind neighbors: {:?}",
                spans
            );
        }
    }

    #[test]
    fn test_deterministic_output() {
        let first = word_diff("she sells sea shells", "she shells sea sells");
        let second = word_diff("she sells sea shells", "she shells sea sells");

        assert_eq!(first, second);
    }
}
