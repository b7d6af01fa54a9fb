//! Greedy word wrapping for documentation text.
//!
//! Behaves like a classic paragraph filler: tabs expand to 8-column stops,
//! every other whitespace character becomes one space, whitespace between
//! words is kept as-is, whitespace at a line break is dropped, and words
//! longer than the width are split at the width.
//!
//! Words break after a hyphen only between two letter-ending runs of at
//! least two word characters (`well-known`, not `x-y-z`, `12-34` or
//! `IPv4-only`), and around an em-dash written as `--`. Word characters
//! are ASCII `[0-9A-Za-z_]`.

use regex::Regex;
use std::sync::LazyLock;

/// Column at which description text is wrapped.
pub const WRAP_WIDTH: usize = 70;

const TAB_SIZE: usize = 8;

static RE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ +").unwrap());

static RE_HYPHENATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^ 0-9A-Za-z_]*[0-9A-Za-z_]+[A-Za-z_]-").unwrap());

static RE_HYPHEN_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_]+[A-Za-z_]").unwrap());

static RE_EM_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{2,}[0-9A-Za-z_]").unwrap());

/// Wrap `text` into lines no longer than `width` characters.
///
/// Returns no lines for empty or whitespace-only input.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let text = munge_whitespace(text);

    // Reversed so the next chunk is always at the end.
    let mut chunks: Vec<String> = split_chunks(&text).into_iter().map(str::to_string).collect();
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<String> = Vec::new();
        let mut len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(n) = chunks.last().map(|c| c.chars().count()) {
            if len + n > width {
                break;
            }
            if let Some(chunk) = chunks.pop() {
                len += n;
                line.push(chunk);
            }
        }

        // `len <= width` here; a full line takes an empty head.
        if let Some(chunk) = chunks.last_mut() {
            if chunk.chars().count() > width {
                let space_left = width - len;
                let head: String = chunk.chars().take(space_left).collect();
                let tail: String = chunk.chars().skip(space_left).collect();
                line.push(head);
                *chunk = tail;
            }
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(|c| c == ' ')
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Expand tabs to 8-column stops, then turn the remaining ASCII
/// whitespace into single spaces.
fn munge_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let n = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(n));
                column += n;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            '\x0b' | '\x0c' => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Split munged text into wrappable chunks: space runs, hyphenated word
/// heads, em-dashes, and the text between them.
fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut pending = 0;
    let mut at = 0;
    while at < text.len() {
        match chunk_len_at(text, at) {
            Some(len) => {
                if pending < at {
                    chunks.push(&text[pending..at]);
                }
                chunks.push(&text[at..at + len]);
                at += len;
                pending = at;
            }
            None => at += text[at..].chars().next().map_or(1, char::len_utf8),
        }
    }
    if pending < text.len() {
        chunks.push(&text[pending..]);
    }
    chunks
}

/// Byte length of the separator chunk starting at `at`, if any.
fn chunk_len_at(text: &str, at: usize) -> Option<usize> {
    let rest = &text[at..];

    if let Some(m) = RE_SPACE.find(rest) {
        return Some(m.end());
    }

    if let Some(m) = RE_HYPHENATED.find(rest) {
        if RE_HYPHEN_TAIL.is_match(&rest[m.end()..]) {
            return Some(m.end());
        }
    }

    if let Some(m) = RE_EM_DASH.find(rest) {
        let after_word = text[..at]
            .chars()
            .next_back()
            .is_some_and(|c| is_word(c) || "!\"'&.,?".contains(c));
        if after_word {
            // The trailing word character is not part of the dash.
            return Some(m.end() - 1);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(
            wrap("Data to return for the ping return value.", WRAP_WIDTH),
            vec!["Data to return for the ping return value."]
        );
    }

    #[test]
    fn wraps_at_width() {
        let text = "Exercises the spec compiler with a single string option \
                    and a description long enough to wrap.";
        assert_eq!(
            wrap(text, WRAP_WIDTH),
            vec![
                "Exercises the spec compiler with a single string option and a",
                "description long enough to wrap.",
            ]
        );
    }

    #[test]
    fn line_may_be_exactly_width() {
        assert_eq!(wrap("aaaa bbbb", 9), vec!["aaaa bbbb"]);
        assert_eq!(wrap("aaaa bbbbb", 9), vec!["aaaa", "bbbbb"]);
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(wrap("a  b", 10), vec!["a  b"]);
    }

    #[test]
    fn newlines_become_spaces() {
        assert_eq!(wrap("a\nb\r\nc", 10), vec!["a b  c"]);
    }

    #[test]
    fn tabs_expand_to_stops() {
        assert_eq!(wrap("a\tb", 20), vec![format!("a{}b", " ".repeat(7))]);
        assert_eq!(wrap("abc\tdef", 20), vec![format!("abc{}def", " ".repeat(5))]);
        // The column resets after a newline.
        assert_eq!(wrap("a\nb\tc", 20), vec![format!("a b{}c", " ".repeat(7))]);
        assert_eq!(wrap("\tx", 20), vec![format!("{}x", " ".repeat(8))]);
    }

    #[test]
    fn drops_whitespace_at_breaks() {
        assert_eq!(wrap("aaa   bbb", 4), vec!["aaa", "bbb"]);
    }

    #[test]
    fn breaks_after_hyphen() {
        assert_eq!(wrap("a well-known thing", 8), vec!["a well-", "known", "thing"]);
        assert_eq!(wrap("0123456789 bb well-known", 19), vec!["0123456789 bb well-", "known"]);
    }

    #[test]
    fn short_or_numeric_hyphenated_words_stay_whole() {
        assert_eq!(wrap("0123456789 bb x-y-z tail", 16), vec!["0123456789 bb", "x-y-z tail"]);
        assert_eq!(wrap("0123456789 bb 12-34 tail", 16), vec!["0123456789 bb", "12-34 tail"]);
        assert_eq!(
            wrap("0123456789 bb IPv4-only tail", 18),
            vec!["0123456789 bb", "IPv4-only tail"]
        );
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn long_word_fills_the_current_line() {
        assert_eq!(wrap("abc-defghijkl", 6), vec!["abc-de", "fghijk", "l"]);
        assert_eq!(wrap("abcd efghijklmnop", 8), vec!["abcd efg", "hijklmno", "p"]);
    }

    #[test]
    fn empty_input() {
        assert!(wrap("", WRAP_WIDTH).is_empty());
        assert!(wrap("   ", WRAP_WIDTH).is_empty());
    }

    #[test]
    fn hyphen_chunks() {
        assert_eq!(split_chunks("well-known"), vec!["well-", "known"]);
        assert_eq!(split_chunks("ab-cd-ef"), vec!["ab-", "cd-", "ef"]);
        assert_eq!(split_chunks("a-b-c"), vec!["a-b-c"]);
        assert_eq!(split_chunks("x-y-z"), vec!["x-y-z"]);
        assert_eq!(split_chunks("12-34"), vec!["12-34"]);
        assert_eq!(split_chunks("v1.2-rc3"), vec!["v1.2-rc3"]);
        assert_eq!(split_chunks("IPv4-only"), vec!["IPv4-only"]);
        assert_eq!(split_chunks("ab-c"), vec!["ab-c"]);
        assert_eq!(split_chunks("--flag"), vec!["--flag"]);
        assert_eq!(split_chunks("trailing-"), vec!["trailing-"]);
    }

    #[test]
    fn punctuation_joins_the_hyphenated_head() {
        assert_eq!(split_chunks("foo/bar-baz"), vec!["foo", "/bar-", "baz"]);
    }

    #[test]
    fn em_dash_chunks() {
        assert_eq!(split_chunks("a--b"), vec!["a", "--", "b"]);
        assert_eq!(split_chunks("end.---next"), vec!["end.", "---", "next"]);
        assert_eq!(split_chunks("a-- b"), vec!["a--", " ", "b"]);
    }

    #[test]
    fn mixed_line_keeps_numeric_ranges_whole() {
        assert_eq!(
            split_chunks("foo/bar-baz  a--b v1.2-rc3  12-34"),
            vec!["foo", "/bar-", "baz", "  ", "a", "--", "b", " ", "v1.2-rc3", "  ", "12-34"]
        );
    }
}
