//! Output sinks for rendered blueprints.
//!
//! A sink owns the layout of the text. It tracks block depth and indents
//! each line to match. Blank lines are separators: a requested blank line is
//! written only once another line follows inside the same block. Emitters
//! only say what goes on a line and where blocks open and close.

const INDENT: &str = "    ";

/// Line-oriented destination for a rendered blueprint.
pub trait SourceSink {
    /// One line at the current block depth.
    fn line(&mut self, text: &str);

    /// One line a level deeper than the current block, for clauses that
    /// continue the previous line (`where T : new()`).
    fn continuation(&mut self, text: &str);

    /// Separator before the next line. Dropped at the start of the output,
    /// right after `{` and right before `}`.
    fn blank_line(&mut self);

    /// `{` at the current depth, then one level deeper.
    fn open_block(&mut self);

    /// Back one level, then `}`.
    fn close_block(&mut self);
}

/// In-memory [`SourceSink`].
#[derive(Default, Debug)]
pub struct SourceBuffer {
    text: String,
    depth: usize,
    blank_pending: bool,
}

impl SourceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        SourceBuffer {
            text: String::with_capacity(capacity),
            ..SourceBuffer::default()
        }
    }

    /// The rendered text, every line newline-terminated.
    pub fn finish(self) -> String {
        self.text
    }

    fn push_line(&mut self, depth: usize, text: &str) {
        if std::mem::take(&mut self.blank_pending) {
            self.text.push('\n');
        }
        for _ in 0..depth {
            self.text.push_str(INDENT);
        }
        self.text.push_str(text.trim_end());
        self.text.push('\n');
    }
}

impl SourceSink for SourceBuffer {
    fn line(&mut self, text: &str) {
        self.push_line(self.depth, text);
    }

    fn continuation(&mut self, text: &str) {
        self.push_line(self.depth + 1, text);
    }

    fn blank_line(&mut self) {
        self.blank_pending = !self.text.is_empty() && !self.text.ends_with("{\n");
    }

    fn open_block(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    fn close_block(&mut self) {
        self.blank_pending = false;
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }
}

#[cfg(test)]
mod tests;
