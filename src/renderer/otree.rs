//! Output tree: rendered text with formatting decisions deferred until
//! serialization.

use crate::renderer::sink::TextSink;

/// One piece of a tree's head.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    Tree(OTree),
    /// Starts a fresh line unless the sink is already at the start of one.
    LineBreak,
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<OTree> for Fragment {
    fn from(tree: OTree) -> Self {
        Fragment::Tree(tree)
    }
}

/// Formatting attributes applied by the serializer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeOptions {
    /// Extra indentation for the children.
    pub indent: usize,
    /// Inserted between consecutive children that produced text.
    pub separator: String,
    /// Written after the last child, at the outer indentation.
    pub suffix: String,
    /// Advisory: this subtree may start on a fresh line in a statement list.
    pub can_break_line: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OTree {
    head: Vec<Fragment>,
    children: Vec<OTree>,
    options: TreeOptions,
}

impl OTree {
    pub fn new(head: Vec<Fragment>, children: Vec<OTree>, options: TreeOptions) -> Self {
        Self {
            head,
            children,
            options,
        }
    }

    /// Renders to nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::from_head(vec![Fragment::Text(text.into())])
    }

    pub fn from_head(head: Vec<Fragment>) -> Self {
        Self::new(head, Vec::new(), TreeOptions::default())
    }

    /// A head-less list of children, e.g. a comma separated argument list.
    pub fn list(children: Vec<OTree>, separator: &str) -> Self {
        Self::new(Vec::new(), children, TreeOptions::default()).with_separator(separator)
    }

    pub fn with_children(self, children: Vec<OTree>) -> Self {
        Self { children, ..self }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.options.indent = indent;
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.options.separator = separator.to_string();
        self
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.options.suffix = suffix.to_string();
        self
    }

    pub fn breakable(mut self) -> Self {
        self.options.can_break_line = true;
        self
    }

    pub fn head(&self) -> &[Fragment] {
        &self.head
    }

    pub fn children(&self) -> &[OTree] {
        &self.children
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn can_break_line(&self) -> bool {
        self.options.can_break_line
    }

    /// True when serializing this tree cannot produce any text. A lone line
    /// break does not count as text.
    pub fn is_empty(&self) -> bool {
        let head_empty = self.head.iter().all(|fragment| match fragment {
            Fragment::Text(text) => text.is_empty(),
            Fragment::Tree(tree) => tree.is_empty(),
            Fragment::LineBreak => true,
        });
        head_empty && self.options.suffix.is_empty() && self.children.iter().all(OTree::is_empty)
    }

    pub fn render(&self) -> String {
        let mut sink = TextSink::new();
        sink.write_tree(self);
        sink.finish()
    }
}

impl std::fmt::Display for OTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
