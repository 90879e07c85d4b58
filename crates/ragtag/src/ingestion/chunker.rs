//! Text chunking with sentence-boundary adjustment

use crate::types::Chunk;

/// Fraction of a span a break point must clear before a sentence or
/// newline boundary is preferred over a hard character cut.
const BREAK_FRACTION: f64 = 0.7;

/// Text chunker with a fixed target span size
pub struct TextChunker {
    /// Target chunk size in characters
    chunk_size: usize,
}

impl TextChunker {
    /// Create a new chunker
    pub fn new(chunk_size: usize) -> Self {
        // A stride of zero would never advance
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Split content into trimmed, non-empty chunks tagged with the
    /// owning document's title.
    pub fn chunk(&self, content: &str, title: &str) -> Vec<Chunk> {
        self.split(content)
            .into_iter()
            .map(|text| Chunk::new(text, title))
            .collect()
    }

    /// Split text into spans of at most `chunk_size` characters.
    ///
    /// Every span except the last prefers to end right after its last
    /// `.` or newline, provided that break point sits past
    /// [`BREAK_FRACTION`] of the span. The stride to the next span stays
    /// fixed either way, so a shortened span trades its tail (at most
    /// 30% of the span) for a cleaner boundary. Deterministic: the same
    /// text and size always produce the same chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut start = 0usize;

        while start < text.len() {
            let end = advance_chars(text, start, self.chunk_size);
            let span = &text[start..end];
            let piece = if end < text.len() {
                self.prefer_boundary(span)
            } else {
                span
            };

            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }
            start = end;
        }

        chunks
    }

    /// Shorten a full span to end just after its last `.` or newline,
    /// when that break point lies late enough in the span.
    fn prefer_boundary<'a>(&self, span: &'a str) -> &'a str {
        match span.rfind(['.', '\n']) {
            Some(break_point) => {
                let chars_before = span[..break_point].chars().count();
                if chars_before as f64 > self.chunk_size as f64 * BREAK_FRACTION {
                    // Both break characters are one byte wide
                    &span[..=break_point]
                } else {
                    span
                }
            }
            None => span,
        }
    }
}

/// Byte offset of the position `count` characters past `start`, capped
/// at the end of the text.
fn advance_chars(text: &str, start: usize, count: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(count)
        .map(|(offset, _)| start + offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_trimmed_chunk() {
        let chunker = TextChunker::new(1000);
        let chunks = chunker.split("  The cat sat on the mat.  ");
        assert_eq!(chunks, vec!["The cat sat on the mat.".to_string()]);
    }

    #[test]
    fn empty_and_whitespace_input_produce_no_chunks() {
        let chunker = TextChunker::new(1000);
        assert!(chunker.split("").is_empty());
        assert!(chunker.split("   \n\t  ").is_empty());
    }

    #[test]
    fn splitting_is_deterministic() {
        let text = "One sentence. Another sentence follows here. And a third one closes it.";
        let chunker = TextChunker::new(30);
        assert_eq!(chunker.split(text), chunker.split(text));
    }

    #[test]
    fn late_period_shortens_the_span_and_the_tail_is_skipped() {
        // Span of 20 chars: "aaaa aaaa aaaaa. bbb" with the period at
        // char 15, past 70% of 20, so the span ends after the period and
        // " bbb" is traded away. The next span still starts at char 20.
        let text = "aaaa aaaa aaaaa. bbb cccc cccc cccc ccc";
        let chunker = TextChunker::new(20);
        assert_eq!(
            chunker.split(text),
            vec![
                "aaaa aaaa aaaaa.".to_string(),
                "cccc cccc cccc ccc".to_string(),
            ]
        );
    }

    #[test]
    fn early_period_keeps_the_hard_cut() {
        // Period at char 8 of a 20-char span is before the 70% mark, so
        // the span keeps its full width.
        let text = "aaaa aa. bbbb bbb bbbcccc cccc cccc ccc";
        let chunker = TextChunker::new(20);
        assert_eq!(
            chunker.split(text),
            vec![
                "aaaa aa. bbbb bbb bb".to_string(),
                "bcccc cccc cccc ccc".to_string(),
            ]
        );
    }

    #[test]
    fn newline_counts_as_a_break_point() {
        // Newline at char 16 of a 20-char span; trimming drops it from
        // the emitted chunk.
        let text = "aaaa aaaa aaaaaa\nbbb cccc cccc cccc ccc";
        let chunker = TextChunker::new(20);
        assert_eq!(
            chunker.split(text),
            vec![
                "aaaa aaaa aaaaaa".to_string(),
                "cccc cccc cccc ccc".to_string(),
            ]
        );
    }

    #[test]
    fn final_span_is_never_boundary_adjusted() {
        // 25 chars total: the second span is final and keeps its text
        // even though it contains a period.
        let text = "aaaa aaaa aaaa aaaa ab. c";
        let chunker = TextChunker::new(20);
        assert_eq!(
            chunker.split(text),
            vec!["aaaa aaaa aaaa aaaa".to_string(), "ab. c".to_string()]
        );
    }

    #[test]
    fn spans_count_characters_not_bytes() {
        // 17 chars of two-byte letters; spans fall at char boundaries.
        let text = "ééééé ééééé ééééé";
        let chunker = TextChunker::new(10);
        let chunks = chunker.split(text);
        assert_eq!(chunks, vec!["ééééé éééé".to_string(), "é ééééé".to_string()]);
    }

    #[test]
    fn chunks_appear_in_order_within_the_source() {
        let text = "The handbook covers vacation policy. Employees accrue twenty days \
                    per year. Unused days roll over once. The dress code is business \
                    casual from Monday to Thursday. Fridays are casual days for everyone.";
        let chunker = TextChunker::new(60);
        let chunks = chunker.split(text);
        assert!(chunks.len() > 1);

        let mut cursor = 0;
        for chunk in &chunks {
            let found = text[cursor..]
                .find(chunk.as_str())
                .map(|offset| cursor + offset);
            let at = found.unwrap_or_else(|| panic!("chunk {:?} lost from source", chunk));
            cursor = at + chunk.len();
        }
    }

    #[test]
    fn no_chunk_exceeds_the_target_size() {
        let text = "word word wordswork. tail word word words. tail word word words end";
        let chunker = TextChunker::new(20);
        let chunks = chunker.split(text);
        assert_eq!(chunks.len(), 4);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 20);
        }
    }

    #[test]
    fn zero_size_is_clamped_to_one() {
        let chunker = TextChunker::new(0);
        assert_eq!(chunker.split("ab"), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn chunk_attaches_the_source_title() {
        let chunker = TextChunker::new(1000);
        let chunks = chunker.chunk("Some content here.", "Handbook");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].source_title, "Handbook");
        assert_eq!(chunks[0].text, "Some content here.");
    }
}
