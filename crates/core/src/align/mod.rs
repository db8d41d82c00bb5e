//! Bilingual sentence alignment model
//!
//! The alignment table pairs each sentence of a source-language article
//! with its sentence in the translation, one row per pair. Machine
//! alignment gets rows wrong, so the user edits the table by hand; the
//! row list itself is plain data the UI owns, and everything that changes
//! it lives in [`editor`].

pub mod editor;
pub mod stats;

use serde::{Deserialize, Serialize};

/// Which language column of the alignment table an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The article's original language
    Source,
    /// The translation
    Target,
}

impl Side {
    /// Get the other column
    pub fn flip(self) -> Side {
        match self {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        }
    }
}

/// Exhaustive classification of one alignment row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairKind {
    /// Both sides have text
    Complete,
    /// Only the source cell has text
    SourceOnly,
    /// Only the target cell has text
    TargetOnly,
    /// Both cells blank; transient, cleaned up before commit
    Empty,
}

/// One row of the alignment table.
///
/// Either side may be blank while the user is still rearranging rows; a
/// blank cell is how a sentence on one side waits for its counterpart to
/// catch up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentPair {
    pub source: String,
    pub target: String,
}

impl AlignmentPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Borrow the text of one column
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    /// Mutably borrow the text of one column
    pub fn side_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }

    /// Classify this row. Emptiness is judged after trimming, so a cell
    /// holding only whitespace counts as blank.
    pub fn kind(&self) -> PairKind {
        match (self.source.trim().is_empty(), self.target.trim().is_empty()) {
            (false, false) => PairKind::Complete,
            (false, true) => PairKind::SourceOnly,
            (true, false) => PairKind::TargetOnly,
            (true, true) => PairKind::Empty,
        }
    }

    /// True when both sides are blank after trimming
    pub fn is_empty(&self) -> bool {
        self.kind() == PairKind::Empty
    }
}
