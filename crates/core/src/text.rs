//! Splitting article text into clickable words.

const SENTENCE_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Characters trimmed from the edges of a clicked word.
const EDGE_PUNCTUATION: [char; 11] = [';', ':', '"', '\'', '(', ')', '„', '“', '”', '«', '»'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Word,
    Whitespace,
    Punctuation,
}

/// A run of article text, either a word or the gap between words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    fn new(kind: SegmentKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }

    /// Only words react to clicks.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == SegmentKind::Word
    }
}

/// Split text into words, whitespace runs and trailing sentence punctuation.
///
/// A `.`, `,`, `!` or `?` is split off only when it is followed by whitespace,
/// more punctuation, or the end of the text, so abbreviations such as `z.B`
/// stay inside the word. Concatenating the segments yields the input.
#[must_use]
pub fn segment_words(text: &str) -> Vec<Segment> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let end_of = |idx: usize| chars.get(idx).map_or(text.len(), |(offset, _)| *offset);
    let splits_at = |idx: usize| -> bool {
        let Some((_, ch)) = chars.get(idx) else {
            return false;
        };
        if !SENTENCE_PUNCTUATION.contains(ch) {
            return false;
        }
        chars
            .get(idx + 1)
            .is_none_or(|(_, next)| next.is_whitespace() || SENTENCE_PUNCTUATION.contains(next))
    };

    let mut segments = Vec::new();
    let mut idx = 0;
    while idx < chars.len() {
        let (start, ch) = chars[idx];
        let mut next = idx + 1;
        let kind = if ch.is_whitespace() {
            while next < chars.len() && chars[next].1.is_whitespace() {
                next += 1;
            }
            SegmentKind::Whitespace
        } else if splits_at(idx) {
            while next < chars.len() && splits_at(next) {
                next += 1;
            }
            SegmentKind::Punctuation
        } else {
            while next < chars.len() && !chars[next].1.is_whitespace() && !splits_at(next) {
                next += 1;
            }
            SegmentKind::Word
        };
        segments.push(Segment::new(kind, &text[start..end_of(next)]));
        idx = next;
    }
    segments
}

/// Normalize a clicked word before asking for its translation.
///
/// Removes every `.`, `,`, `!`, `?` and trims quotes and brackets from the
/// edges. Returns `None` when nothing translatable is left.
#[must_use]
pub fn clean_word(raw: &str) -> Option<String> {
    let stripped: String = raw
        .chars()
        .filter(|ch| !SENTENCE_PUNCTUATION.contains(ch))
        .collect();
    let cleaned = stripped
        .trim()
        .trim_matches(|ch: char| EDGE_PUNCTUATION.contains(&ch))
        .trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
