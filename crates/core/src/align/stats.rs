//! Alignment readiness statistics

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::align::{AlignmentPair, PairKind};

/// Row counts over an alignment table, one bucket per [`PairKind`].
///
/// The four buckets partition the rows: they always sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStats {
    /// All rows
    pub total: usize,
    /// Rows with text on both sides
    pub complete: usize,
    /// Rows with only source text
    pub source_only: usize,
    /// Rows with only target text
    pub target_only: usize,
    /// Rows blank on both sides
    pub empty: usize,
}

impl AlignmentStats {
    /// Count every row into exactly one bucket.
    pub fn compute(pairs: &[AlignmentPair]) -> Self {
        let mut stats = Self::default();

        for pair in pairs {
            stats.increment(pair.kind());
        }

        stats
    }

    fn increment(&mut self, kind: PairKind) {
        self.total += 1;
        match kind {
            PairKind::Complete => self.complete += 1,
            PairKind::SourceOnly => self.source_only += 1,
            PairKind::TargetOnly => self.target_only += 1,
            PairKind::Empty => self.empty += 1,
        }
    }

    /// Commit policy: at least one complete row and no half-filled ones.
    /// Blank rows do not block readiness; cleanup drops them on the way
    /// out.
    pub fn is_ready(&self) -> bool {
        self.complete > 0 && self.source_only == 0 && self.target_only == 0
    }
}

impl fmt::Display for AlignmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows: {} complete, {} source-only, {} target-only, {} empty",
            self.total, self.complete, self.source_only, self.target_only, self.empty
        )
    }
}

/// Classify and count every row of an alignment table.
pub fn alignment_stats(pairs: &[AlignmentPair]) -> AlignmentStats {
    AlignmentStats::compute(pairs)
}
