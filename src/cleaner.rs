/// Normalize extracted document text before chunking.
///
/// Collapses runs of spaces and tabs inside each line, strips control
/// characters, trims line ends, and squeezes runs of blank lines down to a
/// single blank line. Line structure survives on purpose: the session,
/// hierarchical, and paragraph strategies all key off line and blank-line
/// boundaries.
pub fn clean_text(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut prev_blank = true; // leading blanks dropped

    for raw in text.lines() {
        let filtered: String = raw.chars().filter(|c| !c.is_control()).collect();
        let cleaned = filtered.split_whitespace().collect::<Vec<_>>().join(" ");

        if cleaned.is_empty() {
            if !prev_blank {
                lines.push(String::new());
                prev_blank = true;
            }
        } else {
            lines.push(cleaned);
            prev_blank = false;
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_inline_whitespace() {
        assert_eq!(clean_text("too   many\tspaces  here"), "too many spaces here");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(clean_text("with\u{0} control\u{7} bytes"), "with control bytes");
    }

    #[test]
    fn test_squeezes_blank_runs() {
        assert_eq!(clean_text("para one\n\n\n\npara two"), "para one\n\npara two");
    }

    #[test]
    fn test_preserves_line_structure() {
        let text = "# Heading\nbody line\n\nnext paragraph";
        assert_eq!(clean_text(text), text);
    }

    #[test]
    fn test_trims_leading_and_trailing_blanks() {
        assert_eq!(clean_text("\n\n  body  \n\n"), "body");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("  \n \n"), "");
    }
}
