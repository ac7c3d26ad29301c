use crate::renderer::otree::OTree;
use crate::renderer::report::{Unsupported, UnsupportedReporter};
use crate::renderer::traits::RenderContext;
use crate::renderer::visitor::Visitor;
use crate::source::{SourceFile, TypeInference};

/// The result of rendering one snippet.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub tree: OTree,
    pub unsupported: Vec<Unsupported>,
}

impl RenderOutput {
    /// Serialized text, newline terminated unless empty.
    pub fn to_text(&self) -> String {
        let mut text = self.tree.render();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    /// True when every construct had a real renderer.
    pub fn is_complete(&self) -> bool {
        self.unsupported.is_empty()
    }
}

pub struct SnippetRenderer;

impl SnippetRenderer {
    /// Renders the whole file with a fresh context. Never fails; gaps are
    /// listed in [`RenderOutput::unsupported`].
    pub fn render<C: Clone>(
        &self,
        file: &SourceFile,
        types: &dyn TypeInference,
        visitor: &Visitor<C>,
    ) -> RenderOutput {
        let reporter = UnsupportedReporter::new();
        let tree = {
            let context = RenderContext::new(file, types, &reporter, visitor);
            context.convert(file.root())
        };

        let unsupported = reporter.into_entries();
        tracing::debug!(
            language = visitor.language(),
            unsupported = unsupported.len(),
            "rendered snippet"
        );
        RenderOutput { tree, unsupported }
    }
}
