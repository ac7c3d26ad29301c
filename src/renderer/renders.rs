//! Baseline handlers for a generic curly-brace target.
//!
//! Every function here is a table entry or hook default; concrete targets
//! replace whichever ones their syntax needs.

use crate::renderer::components::*;
use crate::renderer::disambiguate::{classify_object_literal, ObjectLiteralShape};
use crate::renderer::masking::is_masking_void_expression;
use crate::renderer::otree::OTree;
use crate::renderer::traits::RenderContext;
use crate::source::{Node, TypeInfo};

fn fallback<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    (ctx.hooks().not_implemented)(node, ctx)
}

fn statements<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> Vec<OTree> {
    StatementList.lay_out(ctx.convert_all(&node.children()))
}

pub fn not_implemented<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    ctx.report_unsupported(node, ctx.language());
    PlaceholderRenderer.placeholder(node)
}

pub fn source_file<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    OTree::empty().with_children(statements(node, ctx))
}

pub fn block<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    OTree::from_head(vec!["{".into()])
        .with_children(statements(node, ctx))
        .with_indent(ctx.indent_width())
        .with_suffix("\n}")
        .breakable()
}

pub fn expression_statement<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    match node.children().as_slice() {
        &[expression] => OTree::from_head(vec![ctx.convert(expression).into()]).breakable(),
        _ => fallback(node, ctx),
    }
}

pub fn variable_statement<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    OTree::empty()
        .with_children(ctx.convert_all(&node.children()))
        .breakable()
}

pub fn variable_declaration_list<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    OTree::list(ctx.convert_all(&node.children()), "\n")
}

pub fn return_statement<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let tree = match node.children().as_slice() {
        &[] => OTree::text("return"),
        &[expression] => OTree::from_head(vec!["return ".into(), ctx.convert(expression).into()]),
        _ => return fallback(node, ctx),
    };
    tree.breakable()
}

pub fn identifier<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    OTree::text(node.value().unwrap_or_else(|| ctx.text_of(node)))
}

pub fn string_literal<C: Clone>(node: Node<'_>, _ctx: &RenderContext<'_, C>) -> OTree {
    let literals = LiteralRenderer;
    OTree::text(literals.quote_string(literals.cooked_string(node)))
}

/// Verbatim source text: numbers, keywords, operator tokens.
pub fn token<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    OTree::text(ctx.text_of(node))
}

pub fn binary_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let children = node.children();
    let &[left, operator, right] = children.as_slice() else {
        return fallback(node, ctx);
    };
    let operator = (ctx.hooks().translate_binary_operator)(ctx.text_of(operator));
    OTree::from_head(vec![
        ctx.convert(left).into(),
        " ".into(),
        operator.into(),
        " ".into(),
        ctx.convert(right).into(),
    ])
}

pub fn translate_binary_operator(operator: &str) -> String {
    OperatorTable.binary(operator)
}

pub fn prefix_unary_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let children = node.children();
    let &[operator, operand] = children.as_slice() else {
        return fallback(node, ctx);
    };
    let operator = (ctx.hooks().translate_unary_operator)(ctx.text_of(operator));
    OTree::from_head(vec![operator.into(), ctx.convert(operand).into()])
}

pub fn translate_unary_operator(operator: &str) -> String {
    OperatorTable.unary(operator)
}

pub fn call_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let children = node.children();
    let Some((callee, arguments)) = children.split_first() else {
        return fallback(node, ctx);
    };

    let callee_text = ctx.text_of(*callee);
    if PRINT_CALLEES.contains(&callee_text) {
        return (ctx.hooks().print_statement)(arguments, ctx);
    }
    if callee_text == SUPER_CALLEE {
        return (ctx.hooks().super_call_expression)(node, ctx);
    }
    (ctx.hooks().regular_call_expression)(node, ctx)
}

pub fn regular_call_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let children = node.children();
    let Some((callee, arguments)) = children.split_first() else {
        return fallback(node, ctx);
    };
    OTree::from_head(vec![
        ctx.convert(*callee).into(),
        "(".into(),
        (ctx.hooks().argument_list)(arguments, ctx).into(),
        ")".into(),
    ])
}

pub fn super_call_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    (ctx.hooks().regular_call_expression)(node, ctx)
}

/// Keeps a placeholder callee so targets can substitute their print syntax.
pub fn print_statement<C: Clone>(arguments: &[Node<'_>], ctx: &RenderContext<'_, C>) -> OTree {
    OTree::from_head(vec![
        PRINT_PLACEHOLDER.into(),
        "(".into(),
        (ctx.hooks().argument_list)(arguments, ctx).into(),
        ")".into(),
    ])
}

pub fn argument_list<C: Clone>(arguments: &[Node<'_>], ctx: &RenderContext<'_, C>) -> OTree {
    OTree::list(ctx.convert_all(arguments), ", ")
}

pub fn new_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let children = node.children();
    let Some((callee, arguments)) = children.split_first() else {
        return fallback(node, ctx);
    };
    OTree::from_head(vec![
        "new ".into(),
        ctx.convert(*callee).into(),
        "(".into(),
        (ctx.hooks().argument_list)(arguments, ctx).into(),
        ")".into(),
    ])
    .breakable()
}

pub fn property_access_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    let children = node.children();
    let &[expression, name] = children.as_slice() else {
        return fallback(node, ctx);
    };
    OTree::from_head(vec![ctx.convert(expression).into(), ".".into(), ctx.convert(name).into()])
}

pub fn parenthesized_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    match node.children().as_slice() {
        &[expression] => OTree::from_head(vec!["(".into(), ctx.convert(expression).into(), ")".into()]),
        _ => fallback(node, ctx),
    }
}

pub fn array_literal_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    OTree::from_head(vec!["[".into()])
        .with_children(ctx.convert_all(&node.children()))
        .with_separator(", ")
        .with_suffix("]")
}

pub fn object_literal_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    match classify_object_literal(node, ctx) {
        ObjectLiteralShape::Unknown => (ctx.hooks().unknown_type_object_literal)(node, ctx),
        ObjectLiteralShape::KnownStruct(ty) => (ctx.hooks().known_struct_object_literal)(node, &ty, ctx),
        ObjectLiteralShape::KeyValueMap => (ctx.hooks().key_value_object_literal)(node, ctx),
    }
}

pub fn unknown_type_object_literal<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    fallback(node, ctx)
}

pub fn known_struct_object_literal<C: Clone>(
    node: Node<'_>,
    _ty: &TypeInfo,
    ctx: &RenderContext<'_, C>,
) -> OTree {
    fallback(node, ctx)
}

pub fn key_value_object_literal<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    fallback(node, ctx)
}

pub fn void_expression<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> OTree {
    if is_masking_void_expression(node) {
        (ctx.hooks().masking_void_expression)(node, ctx)
    } else {
        fallback(node, ctx)
    }
}
