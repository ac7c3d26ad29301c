//! # polyglot
//!
//! Renders a parsed TypeScript-style snippet into another curly-brace
//! language so documentation examples can be kept correct across targets
//! from a single source.
//!
//! Rendering goes through a per-node-kind dispatch table
//! ([`renderer::Visitor`]). The baseline table covers common constructs;
//! concrete targets copy it and override entries. Output is an
//! [`renderer::OTree`] whose formatting is applied at serialization time.
//! Constructs without a renderer are reported, never fatal.
//!
//! ```ignore
//! let snippet = SnippetLoader.from_path(path)?;
//! let output = SnippetRenderer.render(&snippet.file, &snippet.types, &Visitor::default_visitor());
//! print!("{}", output.to_text());
//! for gap in &output.unsupported {
//!     eprintln!("warning: {}", gap);
//! }
//! ```

pub mod config;
pub mod renderer;
pub mod source;

pub use config::RenderConfig;
pub use renderer::{OTree, RenderContext, RenderOutput, SnippetRenderer, Unsupported, Visitor};
pub use source::{Node, NodeId, SnippetLoader, SourceFile, SyntaxKind, TypeInference, TypeInfo};

#[cfg(test)]
mod tests;
