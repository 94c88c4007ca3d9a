//! Line builder for generated text.
//!
//! Generated Elm modules and Makefile rules are assembled line by line
//! instead of by substitution into multi-line templates, so token order and
//! whitespace are fixed by the order of calls.
//!
//! # Example
//!
//! ```ignore
//! let mut out = Lines::new();
//! out.line("markdown route =");
//! out.indented(|out| {
//!     out.line("case route of");
//! });
//! assert_eq!(out.finish(), "markdown route =\n    case route of\n");
//! ```

/// Width of one indentation level.
const INDENT: &str = "    ";

/// Ordered sequence of emitted lines.
#[derive(Debug, Default)]
pub struct Lines {
    buf: String,
    depth: usize,
}

impl Lines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one line at the current indentation.
    ///
    /// Empty text produces an empty line without trailing whitespace.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Emit an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Emit a Makefile recipe line (tab-prefixed, ignores indentation).
    pub fn recipe(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push('\t');
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    /// Emit lines one indentation level deeper.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self
    }

    /// Append another builder's output verbatim.
    pub fn append(&mut self, other: Lines) -> &mut Self {
        self.buf.push_str(&other.buf);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Format a count with its noun, pluralizing with `s` (`1 route`, `3 routes`).
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
