//! Greedy word-level transcript chunking.
//!
//! Splits a transcript into word-aligned chunks whose estimated token cost
//! stays within a budget, so each chunk fits in a single cleaning request.
//! Pure functions; chunking is deterministic and never fails.

use crate::defaults;

/// Estimated token cost of a single word: `ceil(len * 1.3)`.
///
/// Heuristic proxy for sub-word tokenization cost. Callers must not rely on
/// it being precise, only monotonic in word length.
pub fn estimate_tokens(word: &str) -> usize {
    (word.len() as f32 * defaults::TOKENS_PER_CHAR).ceil() as usize
}

/// Split `text` on whitespace and greedily pack words into chunks whose
/// summed token estimate stays at or below `max_tokens`.
///
/// Word order is preserved and words within a chunk are joined with single
/// spaces, so re-joining all chunks reproduces the word sequence of `text`
/// with whitespace normalized. A single word whose own estimate exceeds
/// `max_tokens` still becomes a chunk by itself rather than being dropped.
/// Empty input yields no chunks; the trailing partial chunk is always flushed.
pub fn chunk_text(text: &str, max_tokens: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_tokens = 0usize;

    for word in text.split_whitespace() {
        let word_tokens = estimate_tokens(word);
        if !current.is_empty() && current_tokens + word_tokens > max_tokens {
            chunks.push(std::mem::take(&mut current));
            current_tokens = 0;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        current_tokens += word_tokens;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
