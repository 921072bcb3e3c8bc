use super::{semantic, Chunk, ChunkBuilder, ChunkConfig, ChunkType, ChunkingStrategy};
use crate::patterns::PatternDetector;
use crate::splitter;

/// Session chunking: segment dialogue/transcript text into turns.
///
/// Turns are detected from the shared marker table (timestamps, speaker
/// labels, question prefixes). Text with no marker anywhere falls back
/// entirely to semantic chunking. A turn longer than `max_chunk_size` is
/// sub-chunked semantically, with each piece tagged `session_sub` and a
/// back-reference to its turn.
pub(super) fn chunk(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    let spans = PatternDetector::shared().session_spans(text);
    if spans.is_empty() {
        return semantic::chunk(text, config);
    }

    let mut chunks = Vec::new();

    for (session_id, span) in spans.iter().enumerate() {
        if splitter::char_len(&span.content) > config.max_chunk_size {
            for mut sub in semantic::chunk(&span.content, config) {
                sub.chunk_type = ChunkType::SessionSub;
                sub.strategy = ChunkingStrategy::Session;
                sub.session_id = Some(session_id);
                chunks.push(sub);
            }
        } else {
            let builder = ChunkBuilder::new(ChunkingStrategy::Session, ChunkType::Session);
            chunks.push(builder.build(span.content.as_str(), span.start, span.end));
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::ChunkMode;

    fn config() -> ChunkConfig {
        ChunkConfig {
            strategy: ChunkingStrategy::Session,
            chunk_size: 200,
            overlap: 0,
            mode: ChunkMode::Sentences,
            min_chunk_size: 10,
            max_chunk_size: 1000,
        }
    }

    #[test]
    fn test_timestamp_turns() {
        let text = "10:30 - Alice opened the meeting.\n10:35 - Bob presented the results.";
        let chunks = chunk(text, &config());

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_type, ChunkType::Session);
        assert!(chunks[0].text.starts_with("10:30"));
        assert!(chunks[1].text.starts_with("10:35"));
        assert!(chunks[0].session_id.is_none());
    }

    #[test]
    fn test_oversized_turn_is_subchunked() {
        let long_turn = format!(
            "Q: {}",
            "This answer keeps going with more detail. ".repeat(5)
        );
        let mut cfg = config();
        cfg.chunk_size = 60;
        cfg.max_chunk_size = 80;

        let chunks = chunk(&long_turn, &cfg);

        assert!(chunks.len() > 1);
        for c in &chunks {
            assert_eq!(c.chunk_type, ChunkType::SessionSub);
            assert_eq!(c.strategy, ChunkingStrategy::Session);
            assert_eq!(c.session_id, Some(0));
        }
    }

    #[test]
    fn test_fallback_to_semantic_without_markers() {
        let text = "plain prose with no timestamps or speaker labels. another plain sentence.";
        let chunks = chunk(text, &config());

        assert!(!chunks.is_empty());
        for c in &chunks {
            assert_eq!(c.strategy, ChunkingStrategy::Semantic);
            assert_eq!(c.chunk_type, ChunkType::Sentence);
        }
    }
}
