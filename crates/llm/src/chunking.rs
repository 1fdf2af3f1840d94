use condense_common::{CondenseError, Result};

/// Text chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Chunk text
    pub text: String,

    /// Start byte offset in original text
    pub start: usize,

    /// End byte offset in original text
    pub end: usize,
}

/// Split text into overlapping chunks bounded by a target size
///
/// Cuts prefer natural boundaries (paragraph, then sentence, then word)
/// found within the last fifth of the window; otherwise the cut is hard.
/// The next chunk starts `overlap` characters before the previous cut, so
/// consecutive chunks share a region and no part of the input is skipped.
pub fn chunk_text(text: &str, target_size: usize, overlap: usize) -> Result<Vec<TextChunk>> {
    if target_size == 0 {
        return Err(CondenseError::chunking("Chunk target size must be positive"));
    }
    if overlap >= target_size {
        return Err(CondenseError::chunking(format!(
            "Overlap ({}) must be smaller than target size ({})",
            overlap, target_size
        )));
    }

    let text_len = text.len();

    if text_len == 0 {
        return Ok(Vec::new());
    }

    if text_len <= target_size {
        // Text is short enough, return as single chunk
        return Ok(vec![TextChunk {
            text: text.to_string(),
            start: 0,
            end: text_len,
        }]);
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    loop {
        let ideal_end = floor_char_boundary(text, (start + target_size).min(text_len));

        let end = if ideal_end < text_len {
            find_break_point(text, start, ideal_end, overlap)
        } else {
            text_len
        };

        chunks.push(TextChunk {
            text: text[start..end].to_string(),
            start,
            end,
        });

        if end >= text_len {
            break;
        }

        // Move to next chunk with overlap
        start = floor_char_boundary(text, end.saturating_sub(overlap));
    }

    Ok(chunks)
}

/// Find a good breaking point within the last 20% of the window
///
/// The search floor is kept above `start + overlap` so the cut always moves
/// the next chunk forward.
fn find_break_point(text: &str, start: usize, ideal_end: usize, overlap: usize) -> usize {
    let window = ideal_end - start;
    let search_start = (start + window * 80 / 100).max(start + overlap + 1);
    let search_start = ceil_char_boundary(text, search_start);

    if search_start >= ideal_end {
        return ideal_end;
    }

    let search_text = &text[search_start..ideal_end];

    // Paragraph break first
    if let Some(idx) = search_text.rfind("\n\n") {
        return search_start + idx + 2;
    }

    // Then sentence endings
    let sentence_endings = [". ", ".\n", "! ", "!\n", "? ", "?\n"];

    let mut best_pos = None;
    let mut best_idx = 0;

    for ending in &sentence_endings {
        if let Some(idx) = search_text.rfind(ending) {
            if idx >= best_idx {
                best_idx = idx;
                best_pos = Some(search_start + idx + ending.len());
            }
        }
    }

    if let Some(pos) = best_pos {
        return pos;
    }

    // Then word boundaries
    if let Some(idx) = search_text.rfind(|c: char| c == ' ' || c == '\n') {
        return search_start + idx + 1;
    }

    // Hard cut
    ideal_end
}

/// Largest char boundary at or below `idx`
fn floor_char_boundary(text: &str, idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    let mut idx = idx;
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Smallest char boundary at or above `idx`
fn ceil_char_boundary(text: &str, idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    let mut idx = idx;
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Filler text of exactly `len` bytes made of 10-char words
    fn filler(len: usize) -> String {
        "abcdefghi ".repeat(len / 10 + 1)[..len].to_string()
    }

    #[test]
    fn test_chunk_short_text() {
        let text = "This is a short text.";
        let chunks = chunk_text(text, 100, 10).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, text.len());
    }

    #[test]
    fn test_chunk_empty_text() {
        let chunks = chunk_text("", 100, 10).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(chunk_text("some text", 0, 0).is_err());
        assert!(chunk_text("some text", 10, 10).is_err());
        assert!(chunk_text("some text", 10, 20).is_err());
    }

    #[test]
    fn test_chunk_long_text() {
        let text = "First sentence. Second sentence. Third sentence. Fourth sentence. Fifth sentence.";
        let chunks = chunk_text(text, 40, 8).unwrap();
        assert!(chunks.len() > 1);
    }

    #[test]
    fn test_coverage_no_gaps() {
        let text = filler(5000);
        let chunks = chunk_text(&text, 1200, 200).unwrap();

        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks.last().unwrap().end, text.len());

        // No gap between consecutive chunks; stripping the overlap
        // reconstructs the input exactly
        let mut rebuilt = String::new();
        let mut covered = 0;
        for chunk in &chunks {
            assert!(chunk.start <= covered, "gap before offset {}", chunk.start);
            rebuilt.push_str(&text[covered..chunk.end]);
            covered = chunk.end;
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_deterministic() {
        let text = filler(4321);
        let first = chunk_text(&text, 1200, 200).unwrap();
        let second = chunk_text(&text, 1200, 200).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_three_thousand_chars_yields_three_chunks() {
        let text = filler(3000);
        let chunks = chunk_text(&text, 1200, 200).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text.len(), 1200);
        assert_eq!(chunks[1].text.len(), 1200);

        // Consecutive chunks share a 200-char region
        assert_eq!(chunks[0].end - chunks[1].start, 200);
        assert_eq!(chunks[1].end - chunks[2].start, 200);
        assert_eq!(chunks[2].end, 3000);
    }

    #[test]
    fn test_prefers_paragraph_break() {
        let mut text = filler(1150);
        text.push_str("\n\n");
        text.push_str(&filler(600));
        let chunks = chunk_text(&text, 1200, 200).unwrap();

        assert_eq!(chunks[0].end, 1152);
        assert!(chunks[0].text.ends_with("\n\n"));
    }

    #[test]
    fn test_prefers_sentence_break() {
        let mut text = filler(1100);
        text.push_str("End of thought. ");
        text.push_str(&filler(600));
        let chunks = chunk_text(&text, 1200, 200).unwrap();

        assert!(chunks[0].text.ends_with("End of thought. "));
    }

    #[test]
    fn test_multibyte_boundary_safety() {
        // 3-byte chars with no whitespace force hard cuts on char boundaries
        let text = "가".repeat(1500);
        let chunks = chunk_text(&text, 1200, 200).unwrap();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(text.is_char_boundary(chunk.start));
            assert!(text.is_char_boundary(chunk.end));
            assert!(!chunk.text.is_empty());
        }
        assert_eq!(chunks.last().unwrap().end, text.len());
    }

    #[test]
    fn test_terminates_when_last_chunk_reaches_end() {
        // Regression guard: a chunk ending exactly at the input end must not
        // respawn a trailing overlap chunk
        let text = filler(2400);
        let chunks = chunk_text(&text, 1200, 200).unwrap();
        assert_eq!(chunks.last().unwrap().end, text.len());
        let ends: Vec<usize> = chunks.iter().map(|c| c.end).collect();
        let mut deduped = ends.clone();
        deduped.dedup();
        assert_eq!(ends, deduped);
    }
}
