//! Tree renderer: walks the parsed tree and produces the output-node
//! tree a rendering backend consumes.

mod markup;
mod output;
mod rules;

pub use markup::to_markup;
pub use output::OutputNode;

use crate::error::CompileError;
use crate::parsing::TreeNode;

use rules::{RenderRule, default_rules};

/// Renders tree nodes through an ordered rule registry.
///
/// For each node the rules are tried in registration order and the first
/// to produce an element wins; a node no rule claims fails the whole
/// render. Children of parent kinds are rendered recursively and appended
/// in order.
pub struct Renderer {
    rules: Vec<RenderRule>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    #[cfg(test)]
    fn with_rules(rules: Vec<RenderRule>) -> Self {
        Self { rules }
    }

    /// Renders a top-level node sequence under a synthetic root.
    pub fn render(&self, tree: &[TreeNode]) -> Result<OutputNode, CompileError> {
        let mut root = OutputNode::element("div").with_class("markdown-body");
        for node in tree {
            root.children.push(self.render_node(node)?);
        }
        Ok(root)
    }

    fn render_node(&self, node: &TreeNode) -> Result<OutputNode, CompileError> {
        let mut out = self
            .rules
            .iter()
            .find_map(|rule| rule(node))
            .ok_or_else(|| CompileError::UnhandledNode(format!("{node:?}")))?;

        if let Some(children) = node.children() {
            for child in children {
                out.children.push(self.render_node(child)?);
            }
        }
        Ok(out)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_heading_with_inline_children() {
        let tree = vec![TreeNode::Heading {
            level: 3,
            children: vec![TreeNode::Text("Title".to_string())],
        }];
        let root = Renderer::new().render(&tree).unwrap();

        assert_eq!(root.kind, "div");
        assert_eq!(root.classes, vec!["markdown-body".to_string()]);
        assert_eq!(root.children.len(), 1);

        let heading = &root.children[0];
        assert_eq!(heading.kind, "h3");
        assert_eq!(heading.children[0], OutputNode::text_node("Title"));
    }

    #[test]
    fn link_nodes_carry_new_context_attributes() {
        let tree = vec![TreeNode::Paragraph {
            children: vec![TreeNode::LinkNamed {
                link: "https://example.com".to_string(),
                name: "example".to_string(),
            }],
        }];
        let root = Renderer::new().render(&tree).unwrap();
        let anchor = &root.children[0].children[0];

        assert_eq!(anchor.kind, "a");
        assert_eq!(
            anchor.attributes.get("href").map(String::as_str),
            Some("https://example.com")
        );
        assert_eq!(
            anchor.attributes.get("target").map(String::as_str),
            Some("_blank")
        );
        assert_eq!(
            anchor.attributes.get("rel").map(String::as_str),
            Some("noopener noreferrer")
        );
        assert_eq!(anchor.text.as_deref(), Some("example"));
    }

    #[test]
    fn phone_link_gets_tel_href() {
        let tree = vec![TreeNode::Paragraph {
            children: vec![TreeNode::LinkPhone {
                link: "03-1234-5678".to_string(),
            }],
        }];
        let root = Renderer::new().render(&tree).unwrap();
        let anchor = &root.children[0].children[0];
        assert_eq!(
            anchor.attributes.get("href").map(String::as_str),
            Some("tel:03-1234-5678")
        );
        assert_eq!(anchor.text.as_deref(), Some("03-1234-5678"));
    }

    #[test]
    fn code_block_with_language_has_label_body_and_copy_marker() {
        let tree = vec![TreeNode::CodeBlock {
            language: "js".to_string(),
            text: "const x = 1;\n".to_string(),
        }];
        let root = Renderer::new().render(&tree).unwrap();
        let block = &root.children[0];

        assert_eq!(block.kind, "div");
        assert_eq!(block.classes, vec!["code-block".to_string()]);
        assert_eq!(block.children.len(), 3);

        assert_eq!(block.children[0].classes, vec!["code-block-lang".to_string()]);
        assert_eq!(block.children[0].text.as_deref(), Some("js"));

        let pre = &block.children[1];
        assert_eq!(pre.kind, "pre");
        assert_eq!(pre.children[0].kind, "code");
        assert_eq!(pre.children[0].text.as_deref(), Some("const x = 1;\n"));

        let button = &block.children[2];
        assert_eq!(button.kind, "button");
        assert_eq!(button.classes, vec!["code-block-copy".to_string()]);
    }

    #[test]
    fn code_block_without_language_has_no_label() {
        let tree = vec![TreeNode::CodeBlock {
            language: String::new(),
            text: "x\n".to_string(),
        }];
        let root = Renderer::new().render(&tree).unwrap();
        let block = &root.children[0];
        assert_eq!(block.children.len(), 2);
        assert_eq!(block.children[0].kind, "pre");
    }

    #[test]
    fn text_is_passed_through_unescaped() {
        let tree = vec![TreeNode::Paragraph {
            children: vec![TreeNode::Text("<em>raw</em>".to_string())],
        }];
        let root = Renderer::new().render(&tree).unwrap();
        assert_eq!(
            root.children[0].children[0].text.as_deref(),
            Some("<em>raw</em>")
        );
    }

    #[test]
    fn node_without_a_rule_is_fatal() {
        let renderer = Renderer::with_rules(vec![]);
        let result = renderer.render(&[TreeNode::NewLine]);
        assert!(matches!(result, Err(CompileError::UnhandledNode(_))));
    }

    #[test]
    fn rule_order_is_the_dispatch_priority() {
        // A registry with a single grabby rule claims every node kind.
        fn grab(_: &TreeNode) -> Option<OutputNode> {
            Some(OutputNode::element("x"))
        }
        let renderer = Renderer::with_rules(vec![grab]);
        let root = renderer
            .render(&[TreeNode::NewLine, TreeNode::HorizontalRule])
            .unwrap();
        assert!(root.children.iter().all(|child| child.kind == "x"));
    }
}
