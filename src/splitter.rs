use unicode_segmentation::UnicodeSegmentation;

/// Sentence terminators, mixed Chinese/English punctuation.
const SENTENCE_TERMINATORS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Split text into sentences at punctuation boundaries.
///
/// The terminator stays attached to the end of its sentence. Spans that are
/// empty after trimming are dropped, so the result never contains blanks.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if SENTENCE_TERMINATORS.contains(&ch) {
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
    }
    // Trailing text without a terminator still counts as a sentence
    push_trimmed(&mut sentences, &current);

    sentences
}

/// Split text into paragraphs at blank-line boundaries.
///
/// A run of one or more blank lines (whitespace-only counts as blank)
/// separates paragraphs. Paragraphs are trimmed and never empty.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            push_trimmed(&mut paragraphs, &current);
            current.clear();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    push_trimmed(&mut paragraphs, &current);

    paragraphs
}

/// Count word tokens using Unicode word segmentation.
///
/// This is the single tokenizer shared by every strategy, so `word_count`
/// on a chunk is always a word-level count regardless of whether the
/// strategy accumulated characters, sentences, or paragraphs. Spans that
/// contain no word characters (punctuation-only) count as one token.
pub fn word_count(text: &str) -> usize {
    let count = text.unicode_words().count();
    if count == 0 && !text.trim().is_empty() {
        1
    } else {
        count
    }
}

/// Split text into word-boundary units for word-mode chunking.
///
/// Uses `split_word_bounds` rather than `unicode_words` so whitespace and
/// punctuation survive as their own units: concatenating the units
/// reconstructs the source exactly.
pub fn word_units(text: &str) -> Vec<&str> {
    text.split_word_bounds().collect()
}

/// Character count of a string (not byte length).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
