//! Type-directed classification of object literals.
//!
//! `{ ... }` may be an untyped bag, a configuration struct, or a map; the
//! syntax alone cannot tell. The inferred static type decides.

use crate::renderer::traits::RenderContext;
use crate::source::{Node, TypeInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectLiteralShape {
    /// No usable static type.
    Unknown,
    /// A fixed-shape record type; carries the resolved type.
    KnownStruct(TypeInfo),
    /// Anything else, including a deliberate `any`.
    KeyValueMap,
}

/// Pure decision given the inferred type and whether the nearest enclosing
/// call resolved to a signature.
///
/// An `any` literal under a resolved call was typed `any` on purpose; an
/// `any` literal with no resolvable call only got `any` because inference
/// gave up.
pub fn classify(inferred: Option<TypeInfo>, enclosing_call_resolves: bool) -> ObjectLiteralShape {
    match inferred {
        None => ObjectLiteralShape::Unknown,
        Some(TypeInfo::Any) if !enclosing_call_resolves => ObjectLiteralShape::Unknown,
        Some(ty) if ty.is_fixed_shape_record() => ObjectLiteralShape::KnownStruct(ty),
        Some(_) => ObjectLiteralShape::KeyValueMap,
    }
}

/// Nearest call-like ancestor of `node`.
pub fn find_enclosing_call<'a>(node: Node<'a>) -> Option<Node<'a>> {
    node.ancestors().find(|ancestor| ancestor.kind().is_call_like())
}

pub fn classify_object_literal<C: Clone>(node: Node<'_>, ctx: &RenderContext<'_, C>) -> ObjectLiteralShape {
    let inferred = ctx.inferred_type_of_expression(node);

    // Only an `any` answer needs the signature lookup
    let enclosing_call_resolves = match &inferred {
        Some(ty) if ty.is_any() => find_enclosing_call(node)
            .map(|call| ctx.resolve_call_signature(call).is_some())
            .unwrap_or(false),
        _ => false,
    };

    let shape = classify(inferred, enclosing_call_resolves);
    tracing::debug!(node = %node.id(), ?shape, "classified object literal");
    shape
}
