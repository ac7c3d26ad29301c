//! The narrow type-query surface the renderer depends on.
//!
//! Any analysis engine can sit behind [`TypeInference`]; the renderer only
//! ever asks for the inferred type of an expression and whether a call-like
//! node resolves to a signature.

use crate::source::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named, typed member of a record or a call parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeInfo,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeInfo {
    /// The universal type.
    Any,
    Primitive {
        name: String,
    },
    /// A declared interface.
    Interface {
        name: String,
        #[serde(default)]
        properties: Vec<PropertyInfo>,
        #[serde(default)]
        methods: Vec<String>,
        #[serde(default)]
        index_signature: bool,
    },
    Class {
        name: String,
    },
    /// An anonymous object type such as `{ a: string }`.
    Object {
        #[serde(default)]
        properties: Vec<PropertyInfo>,
    },
    Map {
        value: Box<TypeInfo>,
    },
    Array {
        element: Box<TypeInfo>,
    },
    Union {
        members: Vec<TypeInfo>,
    },
}

impl TypeInfo {
    pub fn is_any(&self) -> bool {
        matches!(self, TypeInfo::Any)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            TypeInfo::Primitive { name }
            | TypeInfo::Interface { name, .. }
            | TypeInfo::Class { name } => Some(name),
            _ => None,
        }
    }

    /// Whether this is a configuration-object type: a declared interface made
    /// only of properties, named as a struct rather than a behavioural
    /// `I`-prefixed interface.
    pub fn is_fixed_shape_record(&self) -> bool {
        match self {
            TypeInfo::Interface {
                name,
                methods,
                index_signature,
                ..
            } => methods.is_empty() && !index_signature && is_struct_interface_name(name),
            _ => false,
        }
    }

    pub fn properties(&self) -> &[PropertyInfo] {
        match self {
            TypeInfo::Interface { properties, .. } | TypeInfo::Object { properties } => properties,
            _ => &[],
        }
    }
}

/// `IBucket` names a behavioural interface, `BucketProps` or `Item` a struct.
pub fn is_struct_interface_name(name: &str) -> bool {
    let mut chars = name.chars();
    !matches!(
        (chars.next(), chars.next()),
        (Some('I'), Some(second)) if second.is_uppercase()
    )
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub parameters: Vec<PropertyInfo>,
    #[serde(default)]
    pub return_type: Option<TypeInfo>,
}

pub trait TypeInference {
    /// Static type of an expression node, `None` when nothing could be
    /// determined.
    fn inferred_type(&self, node: NodeId) -> Option<TypeInfo>;

    /// Resolved signature of a call-like node, `None` when the callee could
    /// not be resolved.
    fn resolve_call_signature(&self, call: NodeId) -> Option<Signature>;
}

/// A surface that knows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTypeInfo;

impl TypeInference for NoTypeInfo {
    fn inferred_type(&self, _node: NodeId) -> Option<TypeInfo> {
        None
    }

    fn resolve_call_signature(&self, _call: NodeId) -> Option<Signature> {
        None
    }
}

/// Type answers recorded ahead of time, usually from a snippet file.
#[derive(Debug, Clone, Default)]
pub struct StaticTypes {
    types: HashMap<NodeId, TypeInfo>,
    signatures: HashMap<NodeId, Signature>,
}

impl StaticTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_type(&mut self, node: NodeId, ty: TypeInfo) {
        self.types.insert(node, ty);
    }

    pub fn set_signature(&mut self, call: NodeId, signature: Signature) {
        self.signatures.insert(call, signature);
    }

    pub fn with_type(mut self, node: NodeId, ty: TypeInfo) -> Self {
        self.set_type(node, ty);
        self
    }

    pub fn with_signature(mut self, call: NodeId, signature: Signature) -> Self {
        self.set_signature(call, signature);
        self
    }
}

impl TypeInference for StaticTypes {
    fn inferred_type(&self, node: NodeId) -> Option<TypeInfo> {
        self.types.get(&node).cloned()
    }

    fn resolve_call_signature(&self, call: NodeId) -> Option<Signature> {
        self.signatures.get(&call).cloned()
    }
}
