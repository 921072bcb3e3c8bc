// Public API exports
pub mod chunker;
pub mod classify;
pub mod cleaner;
pub mod patterns;
pub mod splitter;

// Re-export main types for convenience
pub use chunker::{
    chunk_text, Chunk, ChunkBuilder, ChunkConfig, ChunkError, ChunkMode, ChunkType,
    ChunkingStrategy, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE,
    DEFAULT_OVERLAP,
};

pub use classify::KeywordClassifier;

pub use cleaner::clean_text;

pub use patterns::{PatternDetector, SessionSpan, TextFeatures};

pub use splitter::{split_paragraphs, split_sentences, word_count};
