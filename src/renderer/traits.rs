use crate::renderer::otree::OTree;
use crate::renderer::report::UnsupportedReporter;
use crate::renderer::visitor::{Hooks, Visitor};
use crate::source::{Node, Position, Signature, SourceFile, Span, TypeInference, TypeInfo};

/// Scope holder threaded through one render.
///
/// Carries the language-specific context value `C` plus the lookups every
/// handler needs. Nested scopes derive a new context with
/// [`update_context`](Self::update_context); the parent is never modified.
pub struct RenderContext<'a, C> {
    state: C,
    file: &'a SourceFile,
    types: &'a dyn TypeInference,
    reporter: &'a UnsupportedReporter,
    visitor: &'a Visitor<C>,
}

impl<'a, C: Clone> RenderContext<'a, C> {
    pub fn new(
        file: &'a SourceFile,
        types: &'a dyn TypeInference,
        reporter: &'a UnsupportedReporter,
        visitor: &'a Visitor<C>,
    ) -> Self {
        Self {
            state: visitor.default_context().clone(),
            file,
            types,
            reporter,
            visitor,
        }
    }

    /// The language context value for the current scope.
    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn visitor(&self) -> &'a Visitor<C> {
        self.visitor
    }

    pub fn hooks(&self) -> &'a Hooks<C> {
        self.visitor.hooks()
    }

    pub fn language(&self) -> &'a str {
        self.visitor.language()
    }

    pub fn indent_width(&self) -> usize {
        self.visitor.indent_width()
    }

    /// Derives a context for a child scope with `update` merged in.
    pub fn update_context(&self, update: &C) -> Self {
        Self {
            state: self.visitor.merge_context(&self.state, update),
            file: self.file,
            types: self.types,
            reporter: self.reporter,
            visitor: self.visitor,
        }
    }

    /// Renders one node through the dispatch table.
    pub fn convert(&self, node: Node<'_>) -> OTree {
        tracing::trace!(kind = %node.kind(), node = %node.id(), "convert");
        match self.visitor.handler(node.kind()) {
            Some(handler) => handler(node, self),
            None => {
                tracing::debug!(kind = %node.kind(), language = self.language(), "no handler registered");
                (self.hooks().not_implemented)(node, self)
            }
        }
    }

    /// Renders nodes strictly left to right.
    pub fn convert_all(&self, nodes: &[Node<'_>]) -> Vec<OTree> {
        nodes.iter().map(|node| self.convert(*node)).collect()
    }

    pub fn text_of<'n>(&self, node: Node<'n>) -> &'n str {
        node.text()
    }

    pub fn text_at(&self, span: Span) -> &'a str {
        self.file.text_at(span)
    }

    pub fn position_of(&self, node: Node<'_>) -> Position {
        self.file.position_at(node.span().start)
    }

    pub fn inferred_type_of_expression(&self, node: Node<'_>) -> Option<TypeInfo> {
        self.types.inferred_type(node.id())
    }

    pub fn resolve_call_signature(&self, call: Node<'_>) -> Option<Signature> {
        self.types.resolve_call_signature(call.id())
    }

    /// Records `node` as unsupported for `language`; rendering carries on.
    pub fn report_unsupported(&self, node: Node<'_>, language: &str) {
        self.reporter.record(node, language);
    }
}
