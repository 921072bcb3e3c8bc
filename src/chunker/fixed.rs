use super::{ChunkBuilder, ChunkConfig, ChunkMode, ChunkType, Chunk, ChunkingStrategy};
use crate::splitter;

/// Fixed-length chunking.
///
/// Accumulates units (characters, or word-boundary tokens in words mode)
/// until the running measure reaches `chunk_size`, emits the buffer, then
/// reseeds it with the trailing `overlap` units. No linguistic boundary is
/// respected: a chunk may end mid-sentence or mid-word in char mode.
pub(super) fn chunk(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    chunk_as(text, config, ChunkingStrategy::FixedLength, ChunkType::Default)
}

/// Same algorithm with caller-controlled tags, for use as a sub-procedure
/// (hybrid force-splitting of oversized sentences).
pub(super) fn chunk_as(
    text: &str,
    config: &ChunkConfig,
    strategy: ChunkingStrategy,
    chunk_type: ChunkType,
) -> Vec<Chunk> {
    let units: Vec<&str> = match config.mode {
        ChunkMode::Words => splitter::word_units(text),
        _ => char_units(text),
    };
    let measure_of = |unit: &str| match config.mode {
        ChunkMode::Words => 1,
        _ => splitter::char_len(unit),
    };

    let builder = ChunkBuilder::new(strategy, chunk_type);
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut measure = 0usize;

    for (i, unit) in units.iter().copied().enumerate() {
        current.push(unit);
        measure += measure_of(unit);

        if measure >= config.chunk_size {
            let chunk_text = current.concat();
            let start = i + 1 - current.len();
            if !chunk_text.trim().is_empty() {
                chunks.push(builder.build(chunk_text, start, i));
            }

            // Reseed the buffer with the trailing overlap units (all of
            // them, if the buffer is shorter than the overlap).
            current = if config.overlap > 0 {
                if current.len() > config.overlap {
                    current[current.len() - config.overlap..].to_vec()
                } else {
                    current
                }
            } else {
                Vec::new()
            };
            measure = current.iter().map(|u| measure_of(*u)).sum();
        }
    }

    // Trailing partial buffer is emitted regardless of size
    if !current.is_empty() {
        let chunk_text = current.concat();
        if !chunk_text.trim().is_empty() {
            let start = units.len() - current.len();
            chunks.push(builder.build(chunk_text, start, units.len() - 1));
        }
    }

    chunks
}

/// Per-character unit slices, so char and word modes share one loop.
fn char_units(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(i, c)| &text[i..i + c.len_utf8()])
        .collect()
}
