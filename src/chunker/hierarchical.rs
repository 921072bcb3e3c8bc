use super::{Chunk, ChunkBuilder, ChunkConfig, ChunkType, ChunkingStrategy};
use crate::patterns::PatternDetector;
use crate::splitter;

/// Hierarchical chunking: one chunk per heading-delimited section.
///
/// A heading line closes the current section and opens a new one at the
/// heading's level. A section buffer that grows past `chunk_size` is
/// flushed immediately, keeping its level. Sections shorter than
/// `min_chunk_size` are silently dropped, not merged — including a short
/// final section, so trailing content can be lost under this policy.
pub(super) fn chunk(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    let detector = PatternDetector::shared();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut level = 0usize;
    let mut start_pos = 0usize;

    let mut flush = |current: &mut String, level: usize, start_pos: &mut usize, forced: bool| {
        let trimmed_len = splitter::char_len(current.trim());
        let keep = if forced {
            !current.trim().is_empty()
        } else {
            trimmed_len >= config.min_chunk_size
        };
        if keep {
            let len = splitter::char_len(current);
            let builder =
                ChunkBuilder::new(ChunkingStrategy::Hierarchical, ChunkType::Section).level(level);
            chunks.push(builder.build(current.trim(), *start_pos, *start_pos + len));
            *start_pos += len;
        }
        current.clear();
    };

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(heading_level) = detector.heading_level(line) {
            flush(&mut current, level, &mut start_pos, false);
            current = format!("{line}\n");
            level = heading_level;
        } else {
            current.push_str(line);
            current.push('\n');

            // Oversized section: flush now, keep the level for what follows
            if splitter::char_len(&current) > config.chunk_size {
                flush(&mut current, level, &mut start_pos, true);
            }
        }
    }

    flush(&mut current, level, &mut start_pos, false);

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::ChunkMode;

    fn config(chunk_size: usize, min_chunk_size: usize) -> ChunkConfig {
        ChunkConfig {
            strategy: ChunkingStrategy::Hierarchical,
            chunk_size,
            overlap: 0,
            mode: ChunkMode::Chars,
            min_chunk_size,
            max_chunk_size: 1000,
        }
    }

    #[test]
    fn test_sections_with_levels() {
        let text = "# Title\nbody text for the first section\n## Subtitle\nmore text for the second section";
        let chunks = chunk(text, &config(500, 10));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_type, ChunkType::Section);
        assert_eq!(chunks[0].level, Some(1));
        assert_eq!(chunks[1].level, Some(2));
        assert!(chunks[0].text.starts_with("# Title"));
        assert!(chunks[1].text.starts_with("## Subtitle"));
    }

    #[test]
    fn test_short_section_dropped() {
        let text = "# Title\nlong enough body for this section to be kept\n## Stub\nno";
        let chunks = chunk(text, &config(500, 20));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].level, Some(1));
    }

    #[test]
    fn test_oversized_section_flushed_immediately() {
        let body = "a line of section body text\n".repeat(10);
        let text = format!("# Heading\n{body}");
        let chunks = chunk(&text, &config(60, 10));

        assert!(chunks.len() > 1);
        for c in &chunks {
            assert_eq!(c.level, Some(1));
        }
    }

    #[test]
    fn test_preamble_before_first_heading() {
        let text = "preamble content before any heading appears here\n# First\nsection body that is long enough";
        let chunks = chunk(text, &config(500, 10));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].level, Some(0));
        assert_eq!(chunks[1].level, Some(1));
    }

    #[test]
    fn test_chinese_chapter_headings() {
        let text = "第一章 情緒管理\n情緒管理是心理健康的重要組成部分，值得認真練習。\n第二章 壓力管理\n現代生活中壓力無處不在，需要學會調節。";
        let chunks = chunk(text, &config(500, 5));

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].text.starts_with("第一章"));
        assert!(chunks[1].text.starts_with("第二章"));
    }
}
