//! Append-only line buffer shared by the section renderers.

/// One rendered line and its left indentation.
#[derive(Debug)]
struct Line {
    indent: usize,
    text: String,
}

/// Ordered log of rendered lines, read once when the run completes.
///
/// Lines are never removed or reordered after being appended. Text with
/// embedded newlines is stored as a single entry; only its first line is
/// indented.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    lines: Vec<Line>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` prefixed by `indent` spaces.
    pub fn append(&mut self, text: &str, indent: usize) {
        self.lines.push(Line {
            indent,
            text: text.to_string(),
        });
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.append("", 0);
    }

    /// Full accumulated text, each line terminated by `\n`.
    pub fn contents(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.extend(std::iter::repeat(' ').take(line.indent));
            output.push_str(&line.text);
            output.push('\n');
        }
        output
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_indents_and_terminates() {
        let mut out = OutputBuffer::new();
        out.append("a", 0);
        out.append("b", 4);
        assert_eq!(out.contents(), "a\n    b\n");
    }

    #[test]
    fn multiline_text_is_not_reindented() {
        let mut out = OutputBuffer::new();
        out.append("first\nsecond", 2);
        assert_eq!(out.contents(), "  first\nsecond\n");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn blank_line() {
        let mut out = OutputBuffer::new();
        out.append("x", 0);
        out.blank();
        assert_eq!(out.contents(), "x\n\n");
    }

    #[test]
    fn empty_buffer_has_no_contents() {
        let out = OutputBuffer::new();
        assert_eq!(out.contents(), "");
        assert_eq!(out.len(), 0);
    }
}
