use chrono::Utc;

use super::{Chunk, ChunkType, ChunkingStrategy};
use crate::splitter;

/// Produces fully populated chunk records for one strategy pass.
///
/// Every strategy goes through this builder, so `length` and `word_count`
/// are computed the same way regardless of whether the strategy accumulated
/// characters, sentences, or paragraphs. The `id` is a placeholder; the
/// dispatcher renumbers chunks from final output order.
#[derive(Debug, Clone)]
pub struct ChunkBuilder {
    strategy: ChunkingStrategy,
    chunk_type: ChunkType,
    level: Option<usize>,
    session_id: Option<usize>,
    parent_preview: Option<String>,
}

impl ChunkBuilder {
    pub fn new(strategy: ChunkingStrategy, chunk_type: ChunkType) -> Self {
        Self {
            strategy,
            chunk_type,
            level: None,
            session_id: None,
            parent_preview: None,
        }
    }

    /// Attach a heading depth (hierarchical sections).
    pub fn level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    /// Attach a parent session back-reference (session sub-chunks).
    pub fn session_id(mut self, id: usize) -> Self {
        self.session_id = Some(id);
        self
    }

    /// Attach a parent-sentence preview (hybrid sub-chunks).
    pub fn parent_preview(mut self, preview: String) -> Self {
        self.parent_preview = Some(preview);
        self
    }

    /// Build a chunk for the given span.
    ///
    /// `start_index`/`end_index` are positions in the unit space of the
    /// calling strategy's splitting pass.
    pub fn build(&self, text: impl Into<String>, start_index: usize, end_index: usize) -> Chunk {
        let text = text.into();
        Chunk {
            id: 0,
            length: splitter::char_len(&text),
            word_count: splitter::word_count(&text),
            text,
            start_index,
            end_index,
            chunk_type: self.chunk_type,
            strategy: self.strategy,
            level: self.level,
            session_id: self.session_id,
            parent_preview: self.parent_preview.clone(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_counts_from_text() {
        let builder = ChunkBuilder::new(ChunkingStrategy::Semantic, ChunkType::Sentence);
        let chunk = builder.build("two words", 0, 9);

        assert_eq!(chunk.length, 9);
        assert_eq!(chunk.word_count, 2);
        assert_eq!(chunk.start_index, 0);
        assert_eq!(chunk.end_index, 9);
        assert_eq!(chunk.chunk_type, ChunkType::Sentence);
        assert_eq!(chunk.strategy, ChunkingStrategy::Semantic);
        assert!(chunk.level.is_none());
    }

    #[test]
    fn test_length_is_character_count() {
        let builder = ChunkBuilder::new(ChunkingStrategy::FixedLength, ChunkType::Default);
        let chunk = builder.build("情緒管理", 0, 4);

        assert_eq!(chunk.length, 4);
    }

    #[test]
    fn test_optional_fields() {
        let chunk = ChunkBuilder::new(ChunkingStrategy::Hierarchical, ChunkType::Section)
            .level(2)
            .build("## Subtitle content", 0, 19);
        assert_eq!(chunk.level, Some(2));

        let sub = ChunkBuilder::new(ChunkingStrategy::Session, ChunkType::SessionSub)
            .session_id(3)
            .build("turn piece", 0, 10);
        assert_eq!(sub.session_id, Some(3));
    }
}
