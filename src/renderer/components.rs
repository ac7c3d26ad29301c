use crate::renderer::otree::{Fragment, OTree};
use crate::source::Node;

/// Callee spellings rendered through the print-statement hook.
pub const PRINT_CALLEES: &[&str] = &["console.log", "console.error"];

/// Callee spelling of a superclass constructor call.
pub const SUPER_CALLEE: &str = "super";

/// Stand-in for the target's print function in default output.
pub const PRINT_PLACEHOLDER: &str = "<PRINT>";

/// Helper for rendering literal values
pub struct LiteralRenderer;

impl LiteralRenderer {
    /// Double-quoted literal with JSON escaping rules.
    pub fn quote_string(&self, value: &str) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
    }

    /// The cooked string value of a literal node. Falls back to stripping
    /// the quotes from the source text when the parser left no value.
    pub fn cooked_string<'a>(&self, node: Node<'a>) -> &'a str {
        if let Some(value) = node.value() {
            return value;
        }
        let text = node.text();
        let mut chars = text.chars();
        match (chars.next(), chars.next_back()) {
            (Some(open), Some(close)) if open == close && matches!(open, '"' | '\'' | '`') => {
                &text[open.len_utf8()..text.len() - close.len_utf8()]
            }
            _ => text,
        }
    }
}

/// Default operator spellings for a generic curly-brace target.
pub struct OperatorTable;

impl OperatorTable {
    pub fn binary(&self, operator: &str) -> String {
        match operator {
            "===" => "==".to_string(),
            "!==" => "!=".to_string(),
            other => other.to_string(),
        }
    }

    pub fn unary(&self, operator: &str) -> String {
        operator.to_string()
    }
}

/// Helper for the "not implemented" placeholder
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// `<KindName source text>` with whitespace runs collapsed to one space.
    pub fn placeholder_text(&self, node: Node<'_>) -> String {
        let text = node.text().split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            format!("<{}>", node.kind())
        } else {
            format!("<{} {}>", node.kind(), text)
        }
    }

    pub fn placeholder(&self, node: Node<'_>) -> OTree {
        OTree::text(self.placeholder_text(node)).breakable()
    }
}

/// Helper for statement lists
pub struct StatementList;

impl StatementList {
    /// Starts every statement on its own line. Handlers that return plain
    /// text still get a line break; the `LineBreak` is a no-op when a
    /// statement already sits at the start of a line.
    pub fn lay_out(&self, statements: Vec<OTree>) -> Vec<OTree> {
        statements
            .into_iter()
            .map(|statement| OTree::from_head(vec![Fragment::LineBreak, statement.into()]))
            .collect()
    }
}
