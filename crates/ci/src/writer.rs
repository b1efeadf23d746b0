//! Indentation-scoped configuration writer.
//!
//! CI configuration formats are line-oriented with significant indentation.
//! [`ConfigWriter`] exposes exactly the primitives the renderers need:
//! write a line at the current depth, run a closure one level deeper, or
//! open a named block (header line plus indented body).

/// Wrap a literal value in single quotes.
///
/// Embedded single quotes are deliberately not escaped: filter values are
/// passed through verbatim, and a value containing a quote produces output the
/// consuming CI provider will reject. Garbage in, garbage out.
#[must_use]
pub fn single_quote(value: &str) -> String {
    format!("'{value}'")
}

/// An indentation-aware writer producing structured configuration text.
#[derive(Debug)]
pub struct ConfigWriter {
    buffer: String,
    indent_width: usize,
    level: usize,
    comment_prefix: &'static str,
}

impl Default for ConfigWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigWriter {
    /// Create a writer with two-space indentation and `#` comments.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_width: 2,
            level: 0,
            comment_prefix: "#",
        }
    }

    /// Override the indentation width.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Write a line at the current indentation level.
    ///
    /// An empty string writes a bare newline with no trailing spaces.
    pub fn write_line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.level * self.indent_width {
                self.buffer.push(' ');
            }
            self.buffer.push_str(line);
        }
        self.buffer.push('\n');
    }

    /// Write a comment line at the current indentation level.
    pub fn comment(&mut self, text: &str) {
        let prefix = self.comment_prefix;
        self.write_line(&format!("{prefix} {text}"));
    }

    /// Run `body` with the indentation level increased by one.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.level += 1;
        body(self);
        self.level -= 1;
    }

    /// Write `header` at the current level, then run `body` one level deeper.
    pub fn write_block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.write_line(header);
        self.indented(body);
    }

    /// Consume the writer and return the accumulated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buffer
    }
}
