use crate::config::clamp_max_chars;
use crate::text::splitter::{normalize_whitespace, split_sentences};

/// Secondary boundaries used when a single sentence exceeds the chunk
/// bound. The delimiter stays with the preceding piece.
const SOFT_DELIMITERS: [char; 6] = [',', ';', ':', '、', '。', '，'];

/// One synthesizer-safe piece of the input text.
///
/// Chunks are created once per job and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// 0-based, order-preserving ordinal within the job.
    pub index: usize,
    pub text: String,
    /// Length in characters, always <= the clamped `max_chars`.
    pub char_len: usize,
}

/// Split and pack text into ordered chunks, each at most `max_chars`
/// characters (clamped to the supported range).
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<TextChunk> {
    pack_chunks(&split_sentences(text), max_chars)
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let char_len = text.chars().count();
            TextChunk {
                index,
                text,
                char_len,
            }
        })
        .collect()
}

/// Pack sentences into chunk strings of at most `max_chars` characters.
///
/// Three tiers, cheapest first:
/// 1. greedy packing of whole sentences, joined by single spaces;
/// 2. for a sentence that alone exceeds the bound, a soft split at
///    commas, semicolons, colons and their CJK equivalents, re-packed
///    greedily;
/// 3. hard slicing at fixed character offsets for any piece the soft
///    split could not bring under the bound.
///
/// No chunk is empty, and the chunks concatenated in order reproduce the
/// normalized input text up to whitespace.
pub fn pack_chunks(sentences: &[String], max_chars: usize) -> Vec<String> {
    let max_chars = clamp_max_chars(max_chars);
    let mut chunks: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for sentence in sentences {
        let sentence = normalize_whitespace(sentence);
        if sentence.is_empty() {
            continue;
        }

        if char_len(&sentence) > max_chars {
            if !buffer.is_empty() {
                chunks.push(std::mem::take(&mut buffer));
            }
            chunks.extend(split_oversized(&sentence, max_chars));
            continue;
        }

        if buffer.is_empty() {
            buffer = sentence;
        } else if char_len(&buffer) + 1 + char_len(&sentence) <= max_chars {
            buffer.push(' ');
            buffer.push_str(&sentence);
        } else {
            chunks.push(std::mem::replace(&mut buffer, sentence));
        }
    }

    if !buffer.is_empty() {
        chunks.push(buffer);
    }
    chunks
}

/// Break one over-long sentence into pieces within `max_chars`.
///
/// Soft-split pieces are re-packed greedily; a piece that still exceeds
/// the bound (no usable delimiter inside it) is hard-sliced in place, so
/// the bound holds for any input and no text is dropped.
fn split_oversized(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for piece in soft_pieces(sentence) {
        if char_len(&piece) > max_chars {
            if !buffer.is_empty() {
                out.push(std::mem::take(&mut buffer));
            }
            out.extend(hard_slice(&piece, max_chars));
            continue;
        }
        if buffer.is_empty() {
            buffer = piece;
        } else if char_len(&buffer) + 1 + char_len(&piece) <= max_chars {
            buffer.push(' ');
            buffer.push_str(&piece);
        } else {
            out.push(std::mem::replace(&mut buffer, piece));
        }
    }

    if !buffer.is_empty() {
        out.push(buffer);
    }
    out
}

/// Cut a sentence at secondary punctuation, keeping each delimiter with
/// the text before it.
fn soft_pieces(sentence: &str) -> Vec<String> {
    let mut pieces: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in sentence.chars() {
        current.push(ch);
        if SOFT_DELIMITERS.contains(&ch) {
            let piece = current.trim();
            if !piece.is_empty() {
                pieces.push(piece.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        pieces.push(tail.to_string());
    }
    pieces
}

/// Fixed-width slices of exactly `max_chars` characters; the final slice
/// may be shorter. Character-based, so multi-byte text is never cut
/// mid-codepoint.
fn hard_slice(text: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|slice| slice.iter().collect())
        .collect()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
