//! Text tokenizers
//!
//! Provides the two tokenization granularities the diff runs at: whole
//! whitespace-delimited words for spaced scripts, single characters for
//! unspaced scripts such as Chinese. Tokens borrow from the input text and
//! compare by exact string equality.

use serde::{Deserialize, Serialize};

/// Tokenization granularity for a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenMode {
    /// One token per Unicode scalar value, whitespace and punctuation
    /// included. Fits scripts written without word separators.
    Char,

    /// Whitespace-delimited words. Leading/trailing whitespace and runs of
    /// interior whitespace are consumed by the split, never tokenized.
    Word,
}

impl TokenMode {
    /// The separator re-inserted between tokens when a run of them is
    /// joined back into display text. Whitespace is not a token in `Word`
    /// mode, so the single space lost at split time comes back here.
    pub fn separator(self) -> &'static str {
        match self {
            TokenMode::Char => "",
            TokenMode::Word => " ",
        }
    }
}

/// Split `text` into comparison tokens.
///
/// Total over all inputs: empty or all-whitespace text yields an empty
/// list in `Word` mode, and whitespace characters become ordinary tokens
/// in `Char` mode.
pub fn tokenize(text: &str, mode: TokenMode) -> Vec<&str> {
    match mode {
        TokenMode::Char => text
            .char_indices()
            .map(|(pos, ch)| &text[pos..pos + ch.len_utf8()])
            .collect(),
        TokenMode::Word => text.split_whitespace().collect(),
    }
}
