//! Dispatch table from node kind to render function.
//!
//! [`Visitor::baseline`] builds the default table for a generic curly-brace
//! language. A concrete target copies it and swaps out entries:
//!
//! ```ignore
//! let python = Visitor::baseline("python", PythonContext::default(), PythonContext::merge)
//!     .with_indent_width(4)
//!     .with_handler(SyntaxKind::Block, python_block)
//!     .with_hooks(|hooks| hooks.print_statement = python_print);
//! ```

use crate::renderer::masking::{self, CommentSyntax};
use crate::renderer::otree::OTree;
use crate::renderer::renders;
use crate::renderer::traits::RenderContext;
use crate::source::{Node, SyntaxKind, TypeInfo};
use std::collections::HashMap;

pub type Handler<C> = fn(Node<'_>, &RenderContext<'_, C>) -> OTree;
pub type ArgumentsHook<C> = fn(&[Node<'_>], &RenderContext<'_, C>) -> OTree;
pub type StructHook<C> = fn(Node<'_>, &TypeInfo, &RenderContext<'_, C>) -> OTree;
pub type CommentHook<C> = fn(&CommentSyntax, &RenderContext<'_, C>) -> OTree;
pub type OperatorHook = fn(&str) -> String;

pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Override points below the node-kind level.
pub struct Hooks<C> {
    /// Fallback for kinds without a handler. Must report the node.
    pub not_implemented: Handler<C>,
    pub print_statement: ArgumentsHook<C>,
    pub super_call_expression: Handler<C>,
    pub regular_call_expression: Handler<C>,
    pub argument_list: ArgumentsHook<C>,
    pub translate_binary_operator: OperatorHook,
    pub translate_unary_operator: OperatorHook,
    pub unknown_type_object_literal: Handler<C>,
    pub known_struct_object_literal: StructHook<C>,
    pub key_value_object_literal: Handler<C>,
    pub masking_void_expression: Handler<C>,
    pub comment_range: CommentHook<C>,
}

impl<C: Clone> Hooks<C> {
    pub fn baseline() -> Self {
        Self {
            not_implemented: renders::not_implemented,
            print_statement: renders::print_statement,
            super_call_expression: renders::super_call_expression,
            regular_call_expression: renders::regular_call_expression,
            argument_list: renders::argument_list,
            translate_binary_operator: renders::translate_binary_operator,
            translate_unary_operator: renders::translate_unary_operator,
            unknown_type_object_literal: renders::unknown_type_object_literal,
            known_struct_object_literal: renders::known_struct_object_literal,
            key_value_object_literal: renders::key_value_object_literal,
            masking_void_expression: masking::masking_void_expression,
            comment_range: masking::comment_range,
        }
    }
}

impl<C> Clone for Hooks<C> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<C> Copy for Hooks<C> {}

pub struct Visitor<C> {
    language: String,
    default_context: C,
    merge_context: fn(&C, &C) -> C,
    indent_width: usize,
    handlers: HashMap<SyntaxKind, Handler<C>>,
    hooks: Hooks<C>,
}

impl<C: Clone> Visitor<C> {
    pub fn baseline(language: &str, default_context: C, merge_context: fn(&C, &C) -> C) -> Self {
        let mut handlers: HashMap<SyntaxKind, Handler<C>> = HashMap::new();

        handlers.insert(SyntaxKind::SourceFile, renders::source_file);
        handlers.insert(SyntaxKind::Block, renders::block);
        handlers.insert(SyntaxKind::ExpressionStatement, renders::expression_statement);
        handlers.insert(SyntaxKind::VariableStatement, renders::variable_statement);
        handlers.insert(SyntaxKind::VariableDeclarationList, renders::variable_declaration_list);
        handlers.insert(SyntaxKind::ReturnStatement, renders::return_statement);

        handlers.insert(SyntaxKind::Identifier, renders::identifier);
        handlers.insert(SyntaxKind::StringLiteral, renders::string_literal);
        handlers.insert(SyntaxKind::NoSubstitutionTemplateLiteral, renders::string_literal);
        handlers.insert(SyntaxKind::NumericLiteral, renders::token);
        handlers.insert(SyntaxKind::TrueKeyword, renders::token);
        handlers.insert(SyntaxKind::FalseKeyword, renders::token);
        handlers.insert(SyntaxKind::NullKeyword, renders::token);
        handlers.insert(SyntaxKind::ThisKeyword, renders::token);
        handlers.insert(SyntaxKind::SuperKeyword, renders::token);
        handlers.insert(SyntaxKind::Token, renders::token);

        handlers.insert(SyntaxKind::BinaryExpression, renders::binary_expression);
        handlers.insert(SyntaxKind::PrefixUnaryExpression, renders::prefix_unary_expression);
        handlers.insert(SyntaxKind::CallExpression, renders::call_expression);
        handlers.insert(SyntaxKind::NewExpression, renders::new_expression);
        handlers.insert(SyntaxKind::PropertyAccessExpression, renders::property_access_expression);
        handlers.insert(SyntaxKind::ParenthesizedExpression, renders::parenthesized_expression);
        handlers.insert(SyntaxKind::ArrayLiteralExpression, renders::array_literal_expression);
        handlers.insert(SyntaxKind::ObjectLiteralExpression, renders::object_literal_expression);
        handlers.insert(SyntaxKind::VoidExpression, renders::void_expression);

        Self {
            language: language.to_string(),
            default_context,
            merge_context,
            indent_width: DEFAULT_INDENT_WIDTH,
            handlers,
            hooks: Hooks::baseline(),
        }
    }

    /// Replaces (or adds) the handler for one node kind.
    pub fn with_handler(mut self, kind: SyntaxKind, handler: Handler<C>) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// Drops the handler for a kind so it falls back to `not_implemented`.
    pub fn without_handler(mut self, kind: SyntaxKind) -> Self {
        self.handlers.remove(&kind);
        self
    }

    pub fn with_hooks(mut self, update: impl FnOnce(&mut Hooks<C>)) -> Self {
        update(&mut self.hooks);
        self
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn handler(&self, kind: SyntaxKind) -> Option<Handler<C>> {
        self.handlers.get(&kind).copied()
    }

    pub fn hooks(&self) -> &Hooks<C> {
        &self.hooks
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn default_context(&self) -> &C {
        &self.default_context
    }

    pub fn merge_context(&self, old: &C, update: &C) -> C {
        (self.merge_context)(old, update)
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }
}

impl Visitor<()> {
    /// The baseline table with no language-specific context.
    pub fn default_visitor() -> Self {
        Self::baseline("default", (), merge_unit)
    }
}

fn merge_unit(_old: &(), _update: &()) {}

impl<C: Clone> Clone for Visitor<C> {
    fn clone(&self) -> Self {
        Self {
            language: self.language.clone(),
            default_context: self.default_context.clone(),
            merge_context: self.merge_context,
            indent_width: self.indent_width,
            handlers: self.handlers.clone(),
            hooks: self.hooks,
        }
    }
}

impl<C> std::fmt::Debug for Visitor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visitor")
            .field("language", &self.language)
            .field("indent_width", &self.indent_width)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
