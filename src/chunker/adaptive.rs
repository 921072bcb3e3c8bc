use super::{hierarchical, semantic, session, Chunk, ChunkConfig, ChunkMode};
use crate::patterns::PatternDetector;

/// Adaptive chunking: pick the best strategy from the text's structure.
///
/// Deterministic decision tree over the shared feature analysis, first
/// match wins: session markers, then headings, then paragraph length
/// relative to the size target. Emitted chunks carry the tags of the
/// strategy that was delegated to.
pub(super) fn chunk(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    let features = PatternDetector::shared().analyze(text);

    if features.has_sessions {
        session::chunk(text, config)
    } else if features.has_hierarchy {
        hierarchical::chunk(text, config)
    } else if features.avg_paragraph_length > config.chunk_size as f64 {
        let cfg = ChunkConfig {
            mode: ChunkMode::Paragraphs,
            ..config.clone()
        };
        semantic::chunk(text, &cfg)
    } else {
        let cfg = ChunkConfig {
            mode: ChunkMode::Sentences,
            ..config.clone()
        };
        semantic::chunk(text, &cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::{ChunkType, ChunkingStrategy};

    fn config(chunk_size: usize) -> ChunkConfig {
        ChunkConfig {
            strategy: ChunkingStrategy::Adaptive,
            chunk_size,
            ..ChunkConfig::default()
        }
    }

    #[test]
    fn test_delegates_to_session_for_transcripts() {
        let text = "10:00 - the standup began on time.\n10:05 - updates were shared by everyone.";
        let chunks = chunk(text, &config(200));

        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| c.chunk_type == ChunkType::Session));
    }

    #[test]
    fn test_delegates_to_hierarchical_for_headed_docs() {
        let text = "# Guide\nthis section body is certainly long enough to be kept around\n## Part\nanother section body that is also long enough to be kept";
        let chunks = chunk(text, &config(200));

        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.chunk_type == ChunkType::Section));
    }

    #[test]
    fn test_long_paragraphs_use_paragraph_mode() {
        let para = "word ".repeat(60);
        let text = format!("{para}\n\n{para}");
        let chunks = chunk(&text, &config(100));

        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| c.chunk_type == ChunkType::Paragraph));
    }

    #[test]
    fn test_short_prose_uses_sentence_mode() {
        let text = "one short thought here. another short thought there.\n\na third idea follows.";
        let chunks = chunk(text, &config(200));

        assert!(!chunks.is_empty());
        for c in &chunks {
            assert_eq!(c.chunk_type, ChunkType::Sentence);
            assert_eq!(c.strategy, ChunkingStrategy::Semantic);
        }
    }
}
