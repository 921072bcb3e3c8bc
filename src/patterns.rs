use std::sync::OnceLock;

use regex::Regex;

use crate::splitter;

/// A detected dialogue/transcript turn.
#[derive(Debug, Clone)]
pub struct SessionSpan {
    /// Trimmed text of the turn, marker included.
    pub content: String,
    /// Character offset of the span start in the source text.
    pub start: usize,
    /// Character offset of the span end in the source text.
    pub end: usize,
}

/// Structural features of a text, computed without any configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFeatures {
    pub has_sessions: bool,
    pub has_hierarchy: bool,
    pub avg_paragraph_length: f64,
    pub sentence_count: usize,
    pub paragraph_count: usize,
}

/// Scans text for structural signals: dialogue/session markers and
/// heading markers.
///
/// This is the single compiled pattern table shared by the session,
/// hierarchical, and adaptive strategies, so the three call sites cannot
/// drift apart.
pub struct PatternDetector {
    /// Markers that open a dialogue turn: timestamps, speaker labels,
    /// question prefixes.
    session_markers: Vec<Regex>,
    /// Line-anchored heading markers: Markdown headers, Chinese chapter
    /// headings, numbered headings, all-caps lines.
    heading_markers: Vec<Regex>,
}

impl PatternDetector {
    pub fn new() -> Self {
        Self {
            session_markers: vec![
                // 10:30 - content / 10:30:15 - content
                Regex::new(r"\d{1,2}:\d{2}(?::\d{2})?\s*-\s*").unwrap(),
                // Speaker 1: / localized role labels
                Regex::new(r"(?:Speaker\s+\d+|主持人|發言人|用戶|系統):\s*").unwrap(),
                // Q1: / Question: / 問題:
                Regex::new(r"(?:Q\d*|問題\d*|Question\s*\d*):\s*").unwrap(),
            ],
            heading_markers: vec![
                Regex::new(r"^#{1,6}\s+").unwrap(),
                Regex::new(r"^第[一二三四五六七八九十\d]+[章節]\s*").unwrap(),
                Regex::new(r"^\d+\.\d*\s+").unwrap(),
                Regex::new(r"^[A-Z][A-Z\s]+$").unwrap(),
            ],
        }
    }

    /// Shared detector instance; the patterns are constant, so one compiled
    /// table serves every chunking call.
    pub fn shared() -> &'static PatternDetector {
        static DETECTOR: OnceLock<PatternDetector> = OnceLock::new();
        DETECTOR.get_or_init(PatternDetector::new)
    }

    /// Whether any dialogue/session marker occurs anywhere in the text.
    pub fn has_sessions(&self, text: &str) -> bool {
        self.session_markers.iter().any(|re| re.is_match(text))
    }

    /// Whether any line of the text is a heading.
    pub fn has_headings(&self, text: &str) -> bool {
        text.lines().any(|line| self.heading_level(line.trim()).is_some())
    }

    /// Heading depth of a single (trimmed) line, if it is a heading.
    ///
    /// The level is the character length of the matched marker after
    /// trimming, e.g. the number of `#` characters for Markdown headers.
    pub fn heading_level(&self, line: &str) -> Option<usize> {
        for re in &self.heading_markers {
            if let Some(m) = re.find(line) {
                return Some(splitter::char_len(m.as_str().trim()).max(1));
            }
        }
        None
    }

    /// Detect all session spans in the text.
    ///
    /// For each marker pattern, a span runs from one marker to the next
    /// marker of the same pattern (or end of text). Patterns are applied
    /// independently, so spans from different patterns may overlap; spans
    /// that trim to empty are dropped.
    pub fn session_spans(&self, text: &str) -> Vec<SessionSpan> {
        let mut spans = Vec::new();

        for re in &self.session_markers {
            let starts: Vec<usize> = re.find_iter(text).map(|m| m.start()).collect();
            for (i, &start) in starts.iter().enumerate() {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                let content = text[start..end].trim();
                if content.is_empty() {
                    continue;
                }
                spans.push(SessionSpan {
                    content: content.to_string(),
                    start: splitter::char_len(&text[..start]),
                    end: splitter::char_len(&text[..end]),
                });
            }
        }

        spans
    }

    /// Compute the structural features used by adaptive strategy selection.
    pub fn analyze(&self, text: &str) -> TextFeatures {
        let paragraphs = splitter::split_paragraphs(text);
        let paragraph_count = paragraphs.len();
        let avg_paragraph_length = if paragraph_count > 0 {
            let total: usize = paragraphs.iter().map(|p| splitter::char_len(p)).sum();
            total as f64 / paragraph_count as f64
        } else {
            0.0
        };

        TextFeatures {
            has_sessions: self.has_sessions(text),
            has_hierarchy: self.has_headings(text),
            avg_paragraph_length,
            sentence_count: splitter::split_sentences(text).len(),
            paragraph_count,
        }
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new()
    }
}
