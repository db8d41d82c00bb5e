//! Heuristic sentence segmentation
//!
//! Produces the per-sentence arrays the alignment table is seeded from.
//! Splitting is purely punctuation driven: a sentence ends after a
//! terminator (Latin or CJK) plus any further terminators or closing
//! quotes and brackets that follow it, so ellipses and quoted endings
//! stay in one piece. Abbreviations and decimal points are not
//! special-cased.

/// Characters that end a sentence.
fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '。' | '！' | '？' | '…')
}

/// Characters allowed to trail a terminator and stay with the sentence.
fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '”' | '’' | '」' | '』' | '）')
}

/// Split text into trimmed sentences, dropping blank fragments.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }

        let mut end = pos + ch.len_utf8();
        while let Some(&(next_pos, next_ch)) = chars.peek() {
            if is_terminator(next_ch) || is_closer(next_ch) {
                end = next_pos + next_ch.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        push_fragment(&mut sentences, &text[start..end]);
        start = end;
    }

    // Trailing text without a terminator still counts as a sentence.
    if start < text.len() {
        push_fragment(&mut sentences, &text[start..]);
    }

    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment.to_string());
    }
}
