//! Alignment table editing operations
//!
//! Every operation is pure: it borrows the current row list and returns a
//! new one, leaving the input untouched. A violated precondition (a stale
//! index from a racing UI event, a populated cell where a gap was
//! expected) returns the input unchanged instead of failing; the UI
//! dispatches against snapshots and an error here has nowhere useful to
//! land.
//!
//! Structural edits work column-wise. The targeted column is lifted out,
//! edited, and re-zipped against the untouched opposite column under one
//! shared rule set: pair index-by-index, pad the shorter column with blank
//! cells, drop a fully-blank synthesized last row. That rule is what keeps
//! the two language columns the same length on screen.

use crate::align::{AlignmentPair, Side};

// ============================================================================
// Column Rebuild
// ============================================================================

/// Lift one column out of the row list.
fn column(pairs: &[AlignmentPair], side: Side) -> Vec<String> {
    pairs.iter().map(|pair| pair.side(side).to_string()).collect()
}

/// Re-zip two columns into rows.
///
/// Rows pair up index-by-index out to the longer column, the shorter one
/// is padded with blank cells, and a fully-blank synthesized last row is
/// dropped. Every structural edit funnels through here, so the columns
/// can never drift apart in length.
fn zip_columns(source: Vec<String>, target: Vec<String>) -> Vec<AlignmentPair> {
    let rows = source.len().max(target.len());

    let mut source = source.into_iter();
    let mut target = target.into_iter();

    let mut pairs: Vec<AlignmentPair> = (0..rows)
        .map(|_| AlignmentPair {
            source: source.next().unwrap_or_default(),
            target: target.next().unwrap_or_default(),
        })
        .collect();

    if pairs.last().map_or(false, |pair| pair.is_empty()) {
        pairs.pop();
    }

    pairs
}

/// Re-zip an edited column against the untouched opposite column.
fn rebuild(pairs: &[AlignmentPair], side: Side, edited: Vec<String>) -> Vec<AlignmentPair> {
    let other = column(pairs, side.flip());

    match side {
        Side::Source => zip_columns(edited, other),
        Side::Target => zip_columns(other, edited),
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Build the initial row list from two independently segmented sentence
/// arrays, pairing them index-by-index and padding the shorter side with
/// blank cells.
#[must_use]
pub fn from_segments(
    source_segments: Vec<String>,
    target_segments: Vec<String>,
) -> Vec<AlignmentPair> {
    zip_columns(source_segments, target_segments)
}

/// Insert a blank cell at `index` in one column, shifting that column's
/// later cells down one row.
///
/// `index` may equal the row count, though the trailing blank row that
/// produces is dropped by the rebuild, so inserting at the very end comes
/// back unchanged.
#[must_use]
pub fn insert_gap(pairs: &[AlignmentPair], index: usize, side: Side) -> Vec<AlignmentPair> {
    if index > pairs.len() {
        tracing::trace!(index, rows = pairs.len(), "insert_gap ignored: index out of range");
        return pairs.to_vec();
    }

    let mut edited = column(pairs, side);
    edited.insert(index, String::new());

    rebuild(pairs, side, edited)
}

/// Remove the cell at `index` from one column, pulling that column's later
/// cells up one row.
///
/// Only a blank cell may be removed. Removing a populated cell would
/// silently destroy a sentence, so that case returns the input unchanged.
#[must_use]
pub fn remove_gap(pairs: &[AlignmentPair], index: usize, side: Side) -> Vec<AlignmentPair> {
    if index >= pairs.len() {
        tracing::trace!(index, rows = pairs.len(), "remove_gap ignored: index out of range");
        return pairs.to_vec();
    }
    if !pairs[index].side(side).trim().is_empty() {
        tracing::trace!(index, "remove_gap ignored: cell is not blank");
        return pairs.to_vec();
    }

    let mut edited = column(pairs, side);
    edited.remove(index);

    rebuild(pairs, side, edited)
}

/// Join row `index`'s text on one side into the row above it, closing the
/// gap this leaves in that column.
///
/// Fragments are trimmed and joined with a single space; a blank fragment
/// is skipped, so merging text upward into a blank cell relocates it
/// without picking up a stray leading space. Row 0 has nothing above it
/// and comes back unchanged.
#[must_use]
pub fn merge_up(pairs: &[AlignmentPair], index: usize, side: Side) -> Vec<AlignmentPair> {
    if index == 0 || index >= pairs.len() {
        tracing::trace!(index, rows = pairs.len(), "merge_up ignored: no row above");
        return pairs.to_vec();
    }

    let mut edited = column(pairs, side);
    let lower = edited.remove(index);
    edited[index - 1] = join_fragments(&edited[index - 1], &lower);

    rebuild(pairs, side, edited)
}

/// Join two cell fragments with a single space, skipping blank ones.
fn join_fragments(upper: &str, lower: &str) -> String {
    let upper = upper.trim();
    let lower = lower.trim();

    if upper.is_empty() {
        lower.to_string()
    } else if lower.is_empty() {
        upper.to_string()
    } else {
        format!("{} {}", upper, lower)
    }
}

/// Split one side's text at a character offset: the left half stays in row
/// `index`, the right half becomes a new row below it in that column.
///
/// Offsets count Unicode scalars, matching the UI cursor, and both halves
/// are trimmed. A split must take at least one character from each half,
/// so offset 0 and offsets at or past the end come back unchanged.
#[must_use]
pub fn split_at(
    pairs: &[AlignmentPair],
    index: usize,
    side: Side,
    char_position: usize,
) -> Vec<AlignmentPair> {
    if index >= pairs.len() {
        tracing::trace!(index, rows = pairs.len(), "split_at ignored: index out of range");
        return pairs.to_vec();
    }

    let text = pairs[index].side(side);
    let char_count = text.chars().count();
    if char_position == 0 || char_position >= char_count {
        tracing::trace!(
            index,
            char_position,
            char_count,
            "split_at ignored: offset not inside text"
        );
        return pairs.to_vec();
    }

    let byte_position = text
        .char_indices()
        .nth(char_position)
        .map(|(pos, _)| pos)
        .unwrap_or(text.len());
    let (head, tail) = text.split_at(byte_position);
    let head = head.trim().to_string();
    let tail = tail.trim().to_string();

    let mut edited = column(pairs, side);
    edited[index] = head;
    edited.insert(index + 1, tail);

    rebuild(pairs, side, edited)
}

/// Replace the text of one cell verbatim.
///
/// This is the keystroke path and the one operation that does not trim:
/// whatever the user typed, spaces and all, must come back byte-for-byte
/// or the editor fights the cursor. Structural edits normalize; this one
/// must not. The row shape is unchanged, so there is no rebuild either.
#[must_use]
pub fn update_text(
    pairs: &[AlignmentPair],
    index: usize,
    side: Side,
    text: impl Into<String>,
) -> Vec<AlignmentPair> {
    if index >= pairs.len() {
        tracing::trace!(index, rows = pairs.len(), "update_text ignored: index out of range");
        return pairs.to_vec();
    }

    let mut next = pairs.to_vec();
    *next[index].side_mut(side) = text.into();
    next
}

/// Drop every row that is blank on both sides.
///
/// Runs before commit-readiness is judged; blank rows are editing debris,
/// not content.
#[must_use]
pub fn clean_empty_pairs(pairs: &[AlignmentPair]) -> Vec<AlignmentPair> {
    pairs.iter().filter(|pair| !pair.is_empty()).cloned().collect()
}
