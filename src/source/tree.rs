use crate::source::loader::LoadError;
use crate::source::types::*;

/// A parsed snippet: the original source text plus its node arena.
///
/// Built once by [`TreeBuilder`] and only read afterwards.
#[derive(Debug, Clone)]
pub struct SourceFile {
    text: String,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SourceFile {
    pub fn builder(text: impl Into<String>) -> TreeBuilder {
        TreeBuilder {
            text: text.into(),
            nodes: Vec::new(),
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            file: self,
            id: self.root,
        }
    }

    /// Handle for `id`, or `None` when the id is not part of this file.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { file: self, id })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Verbatim source text for a span. Spans are validated on build.
    pub fn text_at(&self, span: Span) -> &str {
        self.text.get(span.start..span.end).unwrap_or_default()
    }

    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let before = &self.text.as_bytes()[..offset];
        let line = before.iter().filter(|b| **b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|b| *b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let column = self
            .text
            .get(line_start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(offset - line_start)
            + 1;
        Position { line, column }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Read-only handle to one node of a [`SourceFile`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    file: &'a SourceFile,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn file(&self) -> &'a SourceFile {
        self.file
    }

    pub fn kind(&self) -> SyntaxKind {
        self.file.data(self.id).kind
    }

    pub fn span(&self) -> Span {
        self.file.data(self.id).span
    }

    pub fn value(&self) -> Option<&'a str> {
        self.file.data(self.id).value.as_deref()
    }

    pub fn text(&self) -> &'a str {
        self.file.text_at(self.span())
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.file
            .data(self.id)
            .parent
            .map(|id| Node { file: self.file, id })
    }

    pub fn children(&self) -> Vec<Node<'a>> {
        self.file
            .data(self.id)
            .children
            .iter()
            .map(|&id| Node { file: self.file, id })
            .collect()
    }

    pub fn child(&self, index: usize) -> Option<Node<'a>> {
        self.file
            .data(self.id)
            .children
            .get(index)
            .map(|&id| Node { file: self.file, id })
    }

    /// Walks outward from the parent of this node up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind(), self.id)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.id == other.id
    }
}

/// Incrementally assembles a [`SourceFile`] bottom-up: children are pushed
/// before their parent.
pub struct TreeBuilder {
    text: String,
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn push(
        &mut self,
        kind: SyntaxKind,
        span: impl Into<Span>,
        value: Option<String>,
        children: Vec<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            span: span.into(),
            parent: None,
            children,
            value,
        });
        id
    }

    /// Pushes a node whose cooked value is the given text.
    pub fn leaf(&mut self, kind: SyntaxKind, span: impl Into<Span>, value: &str) -> NodeId {
        self.push(kind, span, Some(value.to_string()), Vec::new())
    }

    pub fn finish(mut self, root: NodeId) -> Result<SourceFile, LoadError> {
        if root.index() >= self.nodes.len() {
            return Err(LoadError::MissingNode(root));
        }

        for index in 0..self.nodes.len() {
            let span = self.nodes[index].span;
            if span.start > span.end || span.end > self.text.len() {
                return Err(LoadError::SpanOutOfBounds {
                    node: NodeId(index as u32),
                    start: span.start,
                    end: span.end,
                    len: self.text.len(),
                });
            }
            if !self.text.is_char_boundary(span.start) || !self.text.is_char_boundary(span.end) {
                return Err(LoadError::SpanNotOnCharBoundary {
                    node: NodeId(index as u32),
                });
            }

            let children = self.nodes[index].children.clone();
            for child in children {
                let Some(entry) = self.nodes.get_mut(child.index()) else {
                    return Err(LoadError::MissingNode(child));
                };
                if entry.parent.is_some() {
                    return Err(LoadError::SharedNode(child));
                }
                entry.parent = Some(NodeId(index as u32));
            }
        }

        if self.nodes[root.index()].parent.is_some() {
            return Err(LoadError::RootHasParent(root));
        }

        Ok(SourceFile {
            text: self.text,
            nodes: self.nodes,
            root,
        })
    }
}
