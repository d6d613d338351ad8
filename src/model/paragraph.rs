//! Paragraph type used during reflow.

use std::fmt;

/// A paragraph collapsed to a single logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    /// Create a paragraph from raw text, collapsing every whitespace run
    /// (line breaks included) into a single space.
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }

    /// The collapsed logical line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the paragraph has no words.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split(' ').filter(|w| !w.is_empty()).count()
    }

    /// Serialize the paragraph, wrapped to `width` characters per line.
    ///
    /// `None` keeps the whole paragraph on one line.
    pub fn wrap(&self, width: Option<usize>) -> String {
        match width {
            Some(width) => wrap_line(&self.text, width).join("\n"),
            None => self.text.clone(),
        }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Greedy word wrap in the manner of Python's `textwrap.fill`.
///
/// Words are split into chunks after a hyphen that joins letters
/// (`well-` `known`), and a run of two or more hyphens between words
/// (`word--word`) stands alone. A chunk longer than `width` is broken to fill
/// the room left on the current line, at its last hyphen that fits when
/// there is one. Lines never end in a space.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);

    let mut chunks: Vec<String> = Vec::new();
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            chunks.push(" ".to_string());
        }
        chunks.extend(word_chunks(word).into_iter().map(str::to_string));
    }
    // Popped from the back
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<String> = Vec::new();
        let mut line_len = 0;

        if chunks.last().is_some_and(|c| c == " ") {
            chunks.pop();
        }

        while let Some(len) = chunks.last().map(|c| c.chars().count()) {
            if line_len + len > width {
                break;
            }
            line_len += len;
            line.extend(chunks.pop());
        }

        if chunks.last().is_some_and(|c| c.chars().count() > width) {
            if let Some(chunk) = chunks.pop() {
                let (head, tail) = break_long_chunk(&chunk, width - line_len);
                if !head.is_empty() {
                    line.push(head.to_string());
                }
                chunks.push(tail.to_string());
            }
        }

        while line.last().is_some_and(|c| c == " ") {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}

/// Split one word into wrap chunks.
fn word_chunks(word: &str) -> Vec<&str> {
    let chars: Vec<char> = word.chars().collect();
    let offsets: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let dashes = dash_run_at(&chars, start);
        let end = if dashes > 0 {
            start + dashes
        } else {
            let mut pos = start + 1;
            loop {
                if pos == chars.len() {
                    break pos;
                }
                if breaks_after_hyphen(&chars, pos) {
                    break pos + 1;
                }
                if dash_run_at(&chars, pos) > 0 {
                    break pos;
                }
                pos += 1;
            }
        };
        chunks.push(&word[offsets[start]..offsets[end]]);
        start = end;
    }

    chunks
}

/// Whether the hyphen at `pos` may end a chunk: it follows two letters (or
/// `letter-letter`) and precedes two letters (or `letter-letter`).
fn breaks_after_hyphen(chars: &[char], pos: usize) -> bool {
    if chars[pos] != '-' {
        return false;
    }
    let before = |back: usize| pos.checked_sub(back).map(|i| chars[i]);
    let at = |i: usize| chars.get(i).copied();
    let letter = |c: Option<char>| c.is_some_and(is_letter);

    let behind = (letter(before(2)) && letter(before(1)))
        || (letter(before(3)) && before(2) == Some('-') && letter(before(1)));
    let ahead = letter(at(pos + 1))
        && (letter(at(pos + 2)) || (at(pos + 2) == Some('-') && letter(at(pos + 3))));

    behind && ahead
}

/// Length of the dash run at `pos` if it stands alone between words, else 0.
fn dash_run_at(chars: &[char], pos: usize) -> usize {
    let after_word = pos
        .checked_sub(1)
        .is_some_and(|i| is_word(chars[i]) || "!\"'&.,?".contains(chars[i]));
    if !after_word {
        return 0;
    }

    let run = chars[pos..].iter().take_while(|&&c| c == '-').count();
    if run >= 2 && chars.get(pos + run).copied().is_some_and(is_word) {
        run
    } else {
        0
    }
}

/// Split a chunk that cannot fit on any line, keeping at most `room` chars
/// in the head.
fn break_long_chunk(chunk: &str, room: usize) -> (&str, &str) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut end = room.min(chars.len());

    if let Some(hyphen) = chars[..end].iter().rposition(|&c| c == '-') {
        if hyphen > 0 && chars[..hyphen].iter().any(|&c| c != '-') {
            end = hyphen + 1;
        }
    }

    let split = chunk
        .char_indices()
        .nth(end)
        .map_or(chunk.len(), |(i, _)| i);
    chunk.split_at(split)
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        let p = Paragraph::new("  Chapter\tOne\nThis   is\r\n text ");
        assert_eq!(p.text(), "Chapter One This is text");
        assert_eq!(p.word_count(), 5);
    }

    #[test]
    fn test_empty_paragraph() {
        let p = Paragraph::new(" \n\t ");
        assert!(p.is_empty());
        assert_eq!(p.word_count(), 0);
        assert_eq!(p.wrap(Some(10)), "");
    }

    #[test]
    fn test_unbounded_width() {
        let p = Paragraph::new("one two\nthree");
        assert_eq!(p.wrap(None), "one two three");
    }

    #[test]
    fn test_greedy_wrap() {
        let p = Paragraph::new("the quick brown fox jumps over the lazy dog");
        assert_eq!(
            p.wrap(Some(10)),
            "the quick\nbrown fox\njumps over\nthe lazy\ndog"
        );
    }

    #[test]
    fn test_long_word_is_broken() {
        let p = Paragraph::new("ab cdefghij k");
        assert_eq!(p.wrap(Some(4)), "ab c\ndefg\nhij\nk");

        let p = Paragraph::new("abcdefghij");
        assert_eq!(p.wrap(Some(4)), "abcd\nefgh\nij");
    }

    #[test]
    fn test_break_after_hyphen() {
        let p = Paragraph::new("ab well-known-thing");
        assert_eq!(p.wrap(Some(12)), "ab well-\nknown-thing");

        let p = Paragraph::new("state-of-the-art systems");
        assert_eq!(p.wrap(Some(10)), "state-of-\nthe-art\nsystems");
    }

    #[test]
    fn test_long_word_broken_at_last_hyphen() {
        let p = Paragraph::new("ab 1-2-345");
        assert_eq!(p.wrap(Some(6)), "ab 1-\n2-345");

        let p = Paragraph::new("1-2-3-4-5-6");
        assert_eq!(p.wrap(Some(4)), "1-2-\n3-4-\n5-6");
    }

    #[test]
    fn test_dash_run_stands_alone() {
        let p = Paragraph::new("word--word and more");
        assert_eq!(p.wrap(Some(6)), "word--\nword\nand\nmore");
    }

    #[test]
    fn test_no_trailing_space() {
        let p = Paragraph::new("ab cdefg");
        assert_eq!(p.wrap(Some(3)), "ab\ncde\nfg");
    }

    #[test]
    fn test_word_chunks() {
        assert_eq!(word_chunks("well-known"), vec!["well-", "known"]);
        assert_eq!(word_chunks("x-ray"), vec!["x-ray"]);
        assert_eq!(word_chunks("e-mail-box"), vec!["e-mail-", "box"]);
        assert_eq!(word_chunks("---"), vec!["---"]);
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        let p = Paragraph::new("ééé ééé");
        assert_eq!(p.wrap(Some(7)), "ééé ééé");
        assert_eq!(p.wrap(Some(6)), "ééé\nééé");
    }
}
