use crate::source::tree::{SourceFile, TreeBuilder};
use crate::source::typeinfo::{Signature, StaticTypes, TypeInfo};
use crate::source::types::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read snippet file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snippet JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node {node} has span {start}..{end} outside source text of length {len}")]
    SpanOutOfBounds {
        node: NodeId,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("node {node} has a span that does not fall on character boundaries")]
    SpanNotOnCharBoundary { node: NodeId },

    #[error("node {0} is referenced but was never defined")]
    MissingNode(NodeId),

    #[error("node {0} is the child of more than one parent")]
    SharedNode(NodeId),

    #[error("root node {0} is also listed as a child")]
    RootHasParent(NodeId),
}

// Serialized form of a snippet, as written by the upstream parser
#[derive(Debug, Deserialize)]
struct SnippetFile {
    source: String,
    root: SerializedNode,
}

#[derive(Debug, Deserialize)]
struct SerializedNode {
    kind: SyntaxKind,
    span: Span,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    children: Vec<SerializedNode>,
    #[serde(default, rename = "type")]
    ty: Option<TypeInfo>,
    #[serde(default)]
    signature: Option<Signature>,
}

/// A loaded snippet: the tree plus the type answers recorded with it.
#[derive(Debug)]
pub struct Snippet {
    pub file: SourceFile,
    pub types: StaticTypes,
}

pub struct SnippetLoader;

impl SnippetLoader {
    pub fn from_json(&self, json: &str) -> Result<Snippet, LoadError> {
        let raw: SnippetFile = serde_json::from_str(json)?;
        let mut builder = SourceFile::builder(raw.source);
        let mut types = StaticTypes::new();

        let root = Self::push_node(&mut builder, &mut types, raw.root);
        let file = builder.finish(root)?;

        tracing::debug!(nodes = file.len(), "loaded snippet tree");
        Ok(Snippet { file, types })
    }

    pub fn from_path(&self, path: &Path) -> Result<Snippet, LoadError> {
        let json = std::fs::read_to_string(path)?;
        self.from_json(&json)
    }

    // Children are pushed before their parent so ids are known up front
    fn push_node(builder: &mut TreeBuilder, types: &mut StaticTypes, node: SerializedNode) -> NodeId {
        let children = node
            .children
            .into_iter()
            .map(|child| Self::push_node(builder, types, child))
            .collect();
        let id = builder.push(node.kind, node.span, node.value, children);

        if let Some(ty) = node.ty {
            types.set_type(id, ty);
        }
        if let Some(signature) = node.signature {
            types.set_signature(id, signature);
        }
        id
    }
}
