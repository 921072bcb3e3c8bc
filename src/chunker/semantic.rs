use super::{fixed, Chunk, ChunkBuilder, ChunkConfig, ChunkMode, ChunkType, ChunkingStrategy};
use crate::splitter;

/// Preview length for the parent sentence on hybrid sub-chunks.
const PARENT_PREVIEW_CHARS: usize = 50;

/// Semantic chunking: accumulate whole paragraphs or sentences up to the
/// size target. Any other mode falls back to hybrid chunking, which keeps
/// sentence boundaries but force-splits oversized sentences.
pub(super) fn chunk(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    match config.mode {
        ChunkMode::Paragraphs => accumulate(
            splitter::split_paragraphs(text),
            "\n\n",
            ChunkType::Paragraph,
            config,
        ),
        ChunkMode::Sentences => accumulate(
            splitter::split_sentences(text),
            " ",
            ChunkType::Sentence,
            config,
        ),
        _ => hybrid(text, config),
    }
}

/// Buffer-and-flush over pre-split units.
///
/// The size check runs before appending and uses `>`, so a chunk may sit
/// exactly at `chunk_size`, and a single unit larger than `chunk_size` is
/// still emitted whole — this mode never splits inside a unit.
fn accumulate(
    units: Vec<String>,
    joiner: &str,
    chunk_type: ChunkType,
    config: &ChunkConfig,
) -> Vec<Chunk> {
    let builder = ChunkBuilder::new(ChunkingStrategy::Semantic, chunk_type);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut start_pos = 0usize;

    for unit in units {
        if !current.is_empty()
            && splitter::char_len(&current) + splitter::char_len(&unit) > config.chunk_size
        {
            let len = splitter::char_len(&current);
            chunks.push(builder.build(current.trim(), start_pos, start_pos + len));
            start_pos += len;
            current = unit;
        } else if current.is_empty() {
            current = unit;
        } else {
            current.push_str(joiner);
            current.push_str(&unit);
        }
    }

    if !current.trim().is_empty() {
        let len = splitter::char_len(&current);
        chunks.push(builder.build(current.trim(), start_pos, start_pos + len));
    }

    chunks
}

/// Hybrid semantic chunking: sentence accumulation, plus forced
/// character-level splitting of any sentence that alone exceeds the target.
fn hybrid(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    let builder = ChunkBuilder::new(ChunkingStrategy::Semantic, ChunkType::Hybrid);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut start_pos = 0usize;

    // Sub-splitting always runs in char mode, whatever mode triggered the
    // hybrid fallback.
    let sub_config = ChunkConfig {
        mode: ChunkMode::Chars,
        ..config.clone()
    };

    for sentence in splitter::split_sentences(text) {
        let sentence_len = splitter::char_len(&sentence);

        if sentence_len > config.chunk_size {
            if !current.is_empty() {
                let len = splitter::char_len(&current);
                chunks.push(builder.build(current.as_str(), start_pos, start_pos + len));
                start_pos += len;
                current.clear();
            }

            let preview = parent_preview(&sentence);
            for mut sub in fixed::chunk_as(
                &sentence,
                &sub_config,
                ChunkingStrategy::Semantic,
                ChunkType::HybridSub,
            ) {
                sub.parent_preview = Some(preview.clone());
                chunks.push(sub);
            }
            start_pos += sentence_len;
            continue;
        }

        if !current.is_empty()
            && splitter::char_len(&current) + 1 + sentence_len > config.chunk_size
        {
            let len = splitter::char_len(&current);
            chunks.push(builder.build(current.as_str(), start_pos, start_pos + len));
            start_pos += len;
            current = sentence;
        } else if current.is_empty() {
            current = sentence;
        } else {
            current.push(' ');
            current.push_str(&sentence);
        }
    }

    if !current.trim().is_empty() {
        let len = splitter::char_len(&current);
        chunks.push(builder.build(current.as_str(), start_pos, start_pos + len));
    }

    chunks
}

fn parent_preview(sentence: &str) -> String {
    let head: String = sentence.chars().take(PARENT_PREVIEW_CHARS).collect();
    if splitter::char_len(sentence) > PARENT_PREVIEW_CHARS {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, mode: ChunkMode) -> ChunkConfig {
        ChunkConfig {
            strategy: ChunkingStrategy::Semantic,
            chunk_size,
            overlap: 0,
            mode,
            ..ChunkConfig::default()
        }
    }

    #[test]
    fn test_paragraph_mode_respects_blank_lines() {
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird one.";
        let chunks = chunk(text, &config(30, ChunkMode::Paragraphs));

        assert_eq!(chunks.len(), 3);
        for c in &chunks {
            assert_eq!(c.chunk_type, ChunkType::Paragraph);
        }
    }

    #[test]
    fn test_paragraph_mode_merges_small_paragraphs() {
        let text = "Tiny one.\n\nTiny two.\n\nTiny three.";
        let chunks = chunk(text, &config(200, ChunkMode::Paragraphs));

        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].text.contains("Tiny one."));
        assert!(chunks[0].text.contains("\n\n"));
    }

    #[test]
    fn test_sentence_mode_joins_with_space() {
        let text = "One here. Two here. Three here.";
        let chunks = chunk(text, &config(200, ChunkMode::Sentences));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "One here. Two here. Three here.");
        assert_eq!(chunks[0].chunk_type, ChunkType::Sentence);
    }

    #[test]
    fn test_oversized_unit_emitted_whole_in_sentence_mode() {
        let long = format!("{}.", "word ".repeat(30).trim());
        let text = format!("Short lead. {long}");
        let chunks = chunk(&text, &config(40, ChunkMode::Sentences));

        // The oversized sentence is not split in this mode
        assert!(chunks.iter().any(|c| c.length > 40));
        assert!(chunks.iter().all(|c| c.chunk_type == ChunkType::Sentence));
    }

    #[test]
    fn test_hybrid_fallback_for_char_mode() {
        let text = "Short one. Short two. Short three.";
        let chunks = chunk(text, &config(25, ChunkMode::Chars));

        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| c.chunk_type == ChunkType::Hybrid));
    }

    #[test]
    fn test_hybrid_force_splits_oversized_sentence() {
        let oversized = format!("{}.", "a".repeat(80));
        let text = format!("Lead sentence here. {oversized}");
        let chunks = chunk(&text, &config(30, ChunkMode::Chars));

        let subs: Vec<_> = chunks
            .iter()
            .filter(|c| c.chunk_type == ChunkType::HybridSub)
            .collect();
        assert!(subs.len() >= 2);
        for sub in &subs {
            let preview = sub.parent_preview.as_deref().unwrap();
            assert!(preview.ends_with("..."));
            assert_eq!(splitter::char_len(preview), 53);
            assert_eq!(sub.strategy, ChunkingStrategy::Semantic);
        }
    }

    #[test]
    fn test_exact_chunk_size_allowed() {
        // Two 10-char sentences with a 21-char limit: 10 + 11 joined fails
        // the `>` check only when it exceeds, so both fit at exactly 21
        let text = "abcdefghi. bcdefghij.";
        let chunks = chunk(text, &config(21, ChunkMode::Sentences));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].length, 21);
    }
}
