//! Re-flowing of free model text.
//!
//! Paragraphs (separated by a blank line) are handled independently:
//!
//! - a paragraph with at least one bullet line has its bullets stripped and
//!   numbered, other lines are kept as they are;
//! - otherwise a paragraph made of several short sentences becomes one
//!   numbered item per sentence;
//! - anything else is passed through untouched.

use super::{LINE_BREAK, PARAGRAPH_BREAK};

/// Leading glyphs treated as list bullets
const BULLET_MARKERS: [char; 5] = ['-', '*', '•', '→', '·'];

/// Sentences at or above this many characters keep a paragraph as prose
const MAX_SENTENCE_CHARS: usize = 100;

pub(super) fn reflow(text: &str) -> String {
    text.split("\n\n")
        .map(reflow_paragraph)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK)
}

fn reflow_paragraph(paragraph: &str) -> String {
    let lines: Vec<&str> = paragraph.split('\n').collect();

    if lines.iter().any(|line| bullet_content(line).is_some()) {
        let mut item = 0;
        return lines
            .iter()
            .map(|line| match bullet_content(line) {
                Some(content) => {
                    item += 1;
                    format!("{item}. {content}")
                }
                None => (*line).to_string(),
            })
            .collect::<Vec<_>>()
            .join(LINE_BREAK);
    }

    let sentences: Vec<&str> = paragraph
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.len() > 1
        && sentences
            .iter()
            .all(|s| s.chars().count() < MAX_SENTENCE_CHARS)
    {
        sentences
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}.", i + 1, s))
            .collect::<Vec<_>>()
            .join(LINE_BREAK)
    } else {
        paragraph.to_string()
    }
}

/// The text after a bullet marker, if the line is a bullet line
fn bullet_content(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    BULLET_MARKERS
        .contains(&first)
        .then(|| chars.as_str().trim())
}
