/// Fragments shorter than this are merged into their left neighbor when it
/// is also short. Local rule only; never looks past the immediate neighbor.
const MERGE_THRESHOLD_CHARS: usize = 60;

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentence-like units.
///
/// A boundary is sentence-ending punctuation (`.`, `!`, `?`) followed by
/// whitespace and then an ASCII uppercase letter or digit. The heuristic
/// prefers missed boundaries over false ones: a lowercase continuation
/// after a period is kept in the same sentence. Adjacent fragments that
/// are both under 60 characters are merged rightward into the previous
/// fragment, repeatedly, to avoid excessive fragmentation.
///
/// Empty or whitespace-only input yields an empty list. Re-splitting the
/// returned sentences is a no-op.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut parts: Vec<String> = Vec::new();
    let mut start = 0;
    let mut idx = 0;
    while idx < chars.len() {
        if matches!(chars[idx], '.' | '!' | '?') {
            // Scan the whitespace run after the terminator.
            let mut next = idx + 1;
            while next < chars.len() && chars[next].is_whitespace() {
                next += 1;
            }
            let starts_sentence = next > idx + 1
                && next < chars.len()
                && (chars[next].is_ascii_uppercase() || chars[next].is_ascii_digit());
            if starts_sentence {
                parts.push(chars[start..=idx].iter().collect());
                start = next;
                idx = next;
                continue;
            }
        }
        idx += 1;
    }
    if start < chars.len() {
        parts.push(chars[start..].iter().collect());
    }

    let mut merged: Vec<String> = Vec::new();
    for part in parts {
        let part = normalize_whitespace(&part);
        if part.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(prev)
                if prev.chars().count() < MERGE_THRESHOLD_CHARS
                    && part.chars().count() < MERGE_THRESHOLD_CHARS =>
            {
                prev.push(' ');
                prev.push_str(&part);
            }
            _ => merged.push(part),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::split_sentences;

    #[test]
    fn empty_and_whitespace_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn splits_on_terminator_before_uppercase() {
        let sentences = split_sentences(
            "The quick brown fox jumps over the lazy dog and keeps running away. \
             Nobody ever saw that fox again despite searching the whole forest!",
        );
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with("away."));
        assert!(sentences[1].starts_with("Nobody"));
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        let sentences = split_sentences("It cost 4.50 dollars. and then some");
        // "and" is lowercase, so the period does not end a sentence.
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn digit_starts_a_sentence() {
        let long_left = "This is a reasonably long sentence that will not get merged away at all.";
        let long_right = "42 people agreed with that statement when we surveyed them last year.";
        let sentences = split_sentences(&format!("{long_left} {long_right}"));
        assert_eq!(sentences.len(), 2);
        assert!(sentences[1].starts_with("42"));
    }

    #[test]
    fn short_neighbors_merge_rightward() {
        let sentences = split_sentences("Hi. No. Go. Stop. Done.");
        // Every fragment is tiny, so they all accumulate into one unit.
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], "Hi. No. Go. Stop. Done.");
    }

    #[test]
    fn merge_stops_once_previous_grows_past_threshold() {
        let text = "Hello world. ".repeat(50);
        let sentences = split_sentences(&text);
        assert!(sentences.len() > 1);
        for sentence in &sentences {
            // 12-char sentences accumulate to at least the 60-char threshold
            // before a new unit starts, except possibly the last one.
            assert!(sentence.chars().count() < 80);
        }
    }

    #[test]
    fn whitespace_runs_collapse() {
        let sentences = split_sentences("One\n\nlong   line\there");
        assert_eq!(sentences, vec!["One long line here".to_string()]);
    }

    #[test]
    fn resplitting_is_a_noop() {
        let text = "First sentence with enough words to stand on its own two feet. \
                    Second sentence also long enough that no merge will touch it at all.";
        let first = split_sentences(text);
        let again: Vec<String> = first
            .iter()
            .flat_map(|s| split_sentences(s))
            .collect();
        assert_eq!(first, again);
    }
}
