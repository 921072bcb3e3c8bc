mod adaptive;
mod builder;
mod fixed;
mod hierarchical;
mod semantic;
mod session;


use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use builder::ChunkBuilder;

/// Default target chunk size, in mode units.
pub const DEFAULT_CHUNK_SIZE: usize = 200;
/// Default number of trailing units carried into the next chunk.
pub const DEFAULT_OVERLAP: usize = 30;
/// Default lower bound for keeping a hierarchical section.
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 50;
/// Default upper bound before a session span is sub-chunked.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// The five chunking algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkingStrategy {
    FixedLength,
    Semantic,
    Session,
    Hierarchical,
    Adaptive,
}

impl ChunkingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkingStrategy::FixedLength => "fixed_length",
            ChunkingStrategy::Semantic => "semantic",
            ChunkingStrategy::Session => "session",
            ChunkingStrategy::Hierarchical => "hierarchical",
            ChunkingStrategy::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for ChunkingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkingStrategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed_length" => Ok(ChunkingStrategy::FixedLength),
            "semantic" => Ok(ChunkingStrategy::Semantic),
            "session" => Ok(ChunkingStrategy::Session),
            "hierarchical" => Ok(ChunkingStrategy::Hierarchical),
            "adaptive" => Ok(ChunkingStrategy::Adaptive),
            other => Err(ChunkError::UnsupportedStrategy(other.to_string())),
        }
    }
}

/// Unit granularity a strategy operates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkMode {
    Chars,
    Words,
    Sentences,
    Paragraphs,
}

impl ChunkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkMode::Chars => "chars",
            ChunkMode::Words => "words",
            ChunkMode::Sentences => "sentences",
            ChunkMode::Paragraphs => "paragraphs",
        }
    }
}

impl fmt::Display for ChunkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkMode {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chars" => Ok(ChunkMode::Chars),
            "words" => Ok(ChunkMode::Words),
            "sentences" => Ok(ChunkMode::Sentences),
            "paragraphs" => Ok(ChunkMode::Paragraphs),
            other => Err(ChunkError::UnsupportedMode(other.to_string())),
        }
    }
}

/// How a chunk was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    /// Fixed-length accumulation with no boundary awareness.
    Default,
    /// Whole paragraphs accumulated up to the size target.
    Paragraph,
    /// Whole sentences accumulated up to the size target.
    Sentence,
    /// One detected dialogue/transcript turn.
    Session,
    /// Piece of an oversized turn, split recursively.
    SessionSub,
    /// Heading-delimited document section.
    Section,
    /// Sentence accumulation with forced splitting of oversized sentences.
    Hybrid,
    /// Piece of an oversized sentence, split at the character level.
    HybridSub,
}

impl ChunkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Default => "default",
            ChunkType::Paragraph => "paragraph",
            ChunkType::Sentence => "sentence",
            ChunkType::Session => "session",
            ChunkType::SessionSub => "session_sub",
            ChunkType::Section => "section",
            ChunkType::Hybrid => "hybrid",
            ChunkType::HybridSub => "hybrid_sub",
        }
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("unsupported chunking strategy: {0}")]
    UnsupportedStrategy(String),

    #[error("unsupported chunk mode: {0}")]
    UnsupportedMode(String),

    #[error("invalid chunk config: {0}")]
    InvalidConfig(String),
}

/// Immutable configuration for one chunking invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkConfig {
    pub strategy: ChunkingStrategy,
    /// Target maximum chunk size, in the unit determined by `mode`.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Trailing units from a completed chunk carried into the next one.
    #[serde(default = "default_overlap")]
    pub overlap: usize,
    #[serde(default = "default_mode")]
    pub mode: ChunkMode,
    /// Sections shorter than this (characters) are dropped by the
    /// hierarchical strategy.
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,
    /// Session spans longer than this (characters) are sub-chunked.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

fn default_mode() -> ChunkMode {
    ChunkMode::Chars
}

fn default_min_chunk_size() -> usize {
    DEFAULT_MIN_CHUNK_SIZE
}

fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

impl ChunkConfig {
    /// Create a config for the given strategy with default sizes.
    pub fn new(strategy: ChunkingStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Reject configurations that cannot make progress.
    ///
    /// `overlap >= chunk_size` is degenerate but still terminates, so it is
    /// not rejected here; callers should avoid it.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.chunk_size == 0 {
            return Err(ChunkError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            strategy: ChunkingStrategy::Adaptive,
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            mode: ChunkMode::Chars,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

/// One retrieval unit, immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    /// Position in this invocation's output (0-based, contiguous).
    pub id: usize,
    /// Text content assigned to this chunk.
    pub text: String,
    /// Character count of `text`.
    pub length: usize,
    /// Word-token count of `text`, always from the shared tokenizer.
    pub word_count: usize,
    /// Span start in the unit space of the splitting pass.
    pub start_index: usize,
    /// Span end in the unit space of the splitting pass.
    pub end_index: usize,
    pub chunk_type: ChunkType,
    /// The strategy that actually produced this chunk; fallback and
    /// adaptive delegation surface as the concrete producer.
    pub strategy: ChunkingStrategy,
    /// Heading depth, hierarchical chunks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    /// Back-reference to the parent session span, sub-chunks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<usize>,
    /// Preview of the oversized parent sentence, hybrid sub-chunks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_preview: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Split text into chunks according to the configured strategy.
///
/// Empty or whitespace-only input yields an empty sequence, not an error.
/// The call is pure apart from `created_at` timestamps: no I/O, no shared
/// mutable state, deterministic chunk content for identical text and config.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Result<Vec<Chunk>, ChunkError> {
    config.validate()?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = match config.strategy {
        ChunkingStrategy::FixedLength => fixed::chunk(text, config),
        ChunkingStrategy::Semantic => semantic::chunk(text, config),
        ChunkingStrategy::Session => session::chunk(text, config),
        ChunkingStrategy::Hierarchical => hierarchical::chunk(text, config),
        ChunkingStrategy::Adaptive => adaptive::chunk(text, config),
    };

    // Sub-chunk splicing can leave gaps in per-strategy numbering, so ids
    // are assigned from final output order.
    for (id, chunk) in chunks.iter_mut().enumerate() {
        chunk.id = id;
    }

    Ok(chunks)
}
