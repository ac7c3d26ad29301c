//! Elision sentinels.
//!
//! Example authors write `void 'block'` or `void '...'` to redact code while
//! keeping the surrounding construct complete. The sentinel renders as a
//! comment placeholder or a bare ellipsis in every target.

use crate::renderer::components::LiteralRenderer;
use crate::renderer::otree::{Fragment, OTree};
use crate::renderer::traits::RenderContext;
use crate::source::{Node, SyntaxKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskMode {
    /// A whole block was elided: `// ...` on its own line.
    Block,
    /// Inline elision: a bare `...` token.
    Ellipsis,
    /// Any other payload renders nothing.
    Hidden,
}

impl MaskMode {
    pub fn from_payload(payload: &str) -> Self {
        match payload {
            "block" => MaskMode::Block,
            "..." => MaskMode::Ellipsis,
            _ => MaskMode::Hidden,
        }
    }
}

/// A comment to be rendered in the target's comment syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Comment body without the comment marker.
    pub text: String,
    /// Source offset the comment stands in for.
    pub pos: usize,
    pub leading_line_break: bool,
    pub trailing_newline: bool,
}

/// The string payload of a masking sentinel, if `node` is one.
pub fn masking_payload<'a>(node: Node<'a>) -> Option<&'a str> {
    if node.kind() != SyntaxKind::VoidExpression {
        return None;
    }
    let children = node.children();
    match children.as_slice() {
        [operand] if operand.kind().is_string_literal() => {
            Some(LiteralRenderer.cooked_string(*operand))
        }
        _ => None,
    }
}

pub fn is_masking_void_expression(node: Node<'_>) -> bool {
    masking_payload(node).is_some()
}

pub fn masking_void_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let mode = masking_payload(node)
        .map(MaskMode::from_payload)
        .unwrap_or(MaskMode::Hidden);

    match mode {
        MaskMode::Block => {
            let comment = CommentSyntax {
                text: "...".to_string(),
                pos: node.span().start,
                leading_line_break: true,
                trailing_newline: false,
            };
            (ctx.hooks().comment_range)(&comment, ctx)
        }
        MaskMode::Ellipsis => OTree::text("..."),
        MaskMode::Hidden => OTree::empty(),
    }
}

/// `// text` in curly-brace syntax.
pub fn comment_range<C: Clone>(comment: &CommentSyntax, _ctx: &RenderContext<'_, C>) -> OTree {
    let mut head = Vec::new();
    if comment.leading_line_break {
        head.push(Fragment::LineBreak);
    }
    head.push(Fragment::from(format!("// {}", comment.text)));
    if comment.trailing_newline {
        head.push(Fragment::from("\n"));
    }
    OTree::from_head(head)
}
