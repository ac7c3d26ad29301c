use crate::renderer::otree::{Fragment, OTree};

/// Serializes an [`OTree`] to text, applying indentation at the start of
/// each line and separators between children.
pub struct TextSink {
    output: String,
    indent: usize,
    at_line_start: bool,
    non_whitespace_written: usize,
}

impl TextSink {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
            at_line_start: true,
            non_whitespace_written: 0,
        }
    }

    pub fn write_tree(&mut self, tree: &OTree) {
        for fragment in tree.head() {
            match fragment {
                Fragment::Text(text) => self.write_str(text),
                Fragment::Tree(inner) => self.write_tree(inner),
                Fragment::LineBreak => self.ensure_new_line(),
            }
        }

        let options = tree.options();
        self.indent += options.indent;

        let mut mark = self.non_whitespace_written;
        for child in tree.children() {
            if child.is_empty() {
                continue;
            }
            if !options.separator.is_empty() && self.non_whitespace_written > mark {
                self.write_str(&options.separator);
            }
            mark = self.non_whitespace_written;
            self.write_tree(child);
        }

        self.indent -= options.indent;
        self.write_str(&options.suffix);
    }

    pub fn write_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.output.push('\n');
                self.at_line_start = true;
                continue;
            }
            if self.at_line_start {
                self.output.extend(std::iter::repeat(' ').take(self.indent));
                self.at_line_start = false;
            }
            self.output.push(ch);
            if !ch.is_whitespace() {
                self.non_whitespace_written += 1;
            }
        }
    }

    pub fn ensure_new_line(&mut self) {
        if !self.at_line_start {
            self.output.push('\n');
            self.at_line_start = true;
        }
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for TextSink {
    fn default() -> Self {
        Self::new()
    }
}
