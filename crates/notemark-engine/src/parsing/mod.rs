//! Block parser: consumes the bundle stream and assembles the document
//! tree.
//!
//! Directly treeizable bundles (heading, paragraph, blank line,
//! horizontal rule) flush the accumulators and append their node. List
//! items feed the accumulator of their kind; fence and code-line bundles
//! feed the code-block accumulator. All accumulators are drained
//! unconditionally once the stream ends, so no partially-built node can
//! leak out of a `parse` call.

mod code_builder;
mod list_builder;
mod node;

pub use node::TreeNode;

use log::trace;

use crate::error::CompileError;
use crate::lexing::Bundle;

use code_builder::CodeBlockBuilder;
use list_builder::{ListBuilder, ListKind};
use node::inline_children;

/// Per-call parser state. Constructed fresh by every `parse` call; never
/// share one across concurrent invocations.
#[derive(Debug)]
struct ParserState {
    unordered: ListBuilder,
    ordered: ListBuilder,
    code: CodeBlockBuilder,
}

impl ParserState {
    fn new() -> Self {
        Self {
            unordered: ListBuilder::new(ListKind::Unordered),
            ordered: ListBuilder::new(ListKind::Ordered),
            code: CodeBlockBuilder::new(),
        }
    }

    /// Drains every accumulator into `tree`, unordered list first, then
    /// ordered, then the code block.
    fn flush_into(&mut self, tree: &mut Vec<TreeNode>) {
        tree.extend(self.unordered.flush());
        tree.extend(self.ordered.flush());
        tree.extend(self.code.flush());
    }
}

/// Assembles the bundle stream into a sequence of top-level tree nodes.
pub fn parse(bundles: Vec<Bundle>) -> Result<Vec<TreeNode>, CompileError> {
    let mut state = ParserState::new();
    let mut tree = Vec::new();

    for bundle in bundles {
        trace!("dispatching {bundle:?}");
        match bundle {
            Bundle::Heading { level, tokens } => {
                state.flush_into(&mut tree);
                tree.push(TreeNode::Heading {
                    level,
                    children: inline_children(tokens),
                });
            }
            Bundle::Paragraph { tokens } => {
                state.flush_into(&mut tree);
                tree.push(TreeNode::Paragraph {
                    children: inline_children(tokens),
                });
            }
            Bundle::NewLine => {
                state.flush_into(&mut tree);
                tree.push(TreeNode::NewLine);
            }
            Bundle::HorizontalRule => {
                state.flush_into(&mut tree);
                tree.push(TreeNode::HorizontalRule);
            }
            Bundle::ListItemOrdered { indent, tokens } => {
                state.ordered.push(indent, tokens);
            }
            Bundle::ListItemUnordered { indent, tokens } => {
                state.unordered.push(indent, tokens);
            }
            Bundle::CodeFence { language } => {
                if state.code.is_open() {
                    tree.extend(state.code.flush());
                }
                state.code.open(language)?;
            }
            Bundle::CodeLine { text } => {
                state.code.push_line(&text)?;
            }
        }
    }

    state.flush_into(&mut tree);
    Ok(tree)
}
