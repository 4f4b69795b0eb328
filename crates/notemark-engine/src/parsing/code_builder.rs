//! The code-block accumulator: collects verbatim lines between fences.

use crate::error::CompileError;

use super::node::TreeNode;

#[derive(Debug)]
struct OpenBlock {
    language: String,
    text: String,
}

/// At most one code block is accumulated at a time. Opening a second
/// fence without flushing first, or pushing a line with no open block,
/// is a caller-sequencing bug, surfaced as a fatal error rather than
/// recovered from.
#[derive(Debug, Default)]
pub(super) struct CodeBlockBuilder {
    current: Option<OpenBlock>,
}

impl CodeBlockBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub(super) fn open(&mut self, language: String) -> Result<(), CompileError> {
        if self.current.is_some() {
            return Err(CompileError::FenceStillOpen);
        }
        self.current = Some(OpenBlock {
            language,
            text: String::new(),
        });
        Ok(())
    }

    /// Appends one verbatim line (plus its newline) to the open block.
    pub(super) fn push_line(&mut self, text: &str) -> Result<(), CompileError> {
        match &mut self.current {
            Some(block) => {
                block.text.push_str(text);
                block.text.push('\n');
                Ok(())
            }
            None => Err(CompileError::StrayCodeLine(text.to_string())),
        }
    }

    pub(super) fn flush(&mut self) -> Option<TreeNode> {
        self.current.take().map(|block| TreeNode::CodeBlock {
            language: block.language,
            text: block.text,
        })
    }
}
