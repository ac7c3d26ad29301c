use crate::source::{Node, NodeId, Position, Span, SyntaxKind};
use serde::Serialize;
use std::cell::RefCell;

/// A node that no concrete renderer handled for the target language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unsupported {
    pub node: NodeId,
    pub kind: SyntaxKind,
    pub language: String,
    pub span: Span,
    pub position: Position,
    pub message: String,
}

impl std::fmt::Display for Unsupported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

/// Collects unsupported-construct records for one render. Recording never
/// interrupts rendering.
#[derive(Debug, Default)]
pub struct UnsupportedReporter {
    entries: RefCell<Vec<Unsupported>>,
}

impl UnsupportedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, node: Node<'_>, language: &str) {
        let kind = node.kind();
        let entry = Unsupported {
            node: node.id(),
            kind,
            language: language.to_string(),
            span: node.span(),
            position: node.file().position_at(node.span().start),
            message: format!(
                "This language feature ({}) is not supported when rendering examples for {}",
                kind, language
            ),
        };
        tracing::warn!(node = %entry.node, %kind, language, "unsupported construct");
        self.entries.borrow_mut().push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn snapshot(&self) -> Vec<Unsupported> {
        self.entries.borrow().clone()
    }

    pub fn into_entries(self) -> Vec<Unsupported> {
        self.entries.into_inner()
    }
}
