//! The default render rules, one per tree-node kind, in registry order.
//!
//! Each rule inspects a node and either produces its output element or
//! passes. Rules build the element only; children of parent kinds are
//! rendered and appended by the walk in [`super::Renderer`].

use crate::parsing::TreeNode;

use super::output::OutputNode;

/// One entry in the renderer's registry.
pub(super) type RenderRule = fn(&TreeNode) -> Option<OutputNode>;

/// Registry order is the dispatch priority; first producing rule wins.
pub(super) fn default_rules() -> Vec<RenderRule> {
    vec![
        heading,
        paragraph,
        new_line,
        horizontal_rule,
        list_ordered,
        list_item_ordered,
        list_unordered,
        list_item_unordered,
        code_block,
        text,
        bold,
        italic,
        strike,
        code,
        link_named,
        link_bare,
        link_phone,
        space_half,
        space_full,
        tab,
    ]
}

fn heading(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::Heading { level, .. } = node else {
        return None;
    };
    Some(OutputNode::element(format!("h{level}")))
}

fn paragraph(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::Paragraph { .. }).then(|| OutputNode::element("p"))
}

fn new_line(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::NewLine).then(|| OutputNode::element("br"))
}

fn horizontal_rule(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::HorizontalRule).then(|| OutputNode::element("hr"))
}

fn list_ordered(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::ListOrdered { .. }).then(|| OutputNode::element("ol"))
}

fn list_item_ordered(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::ListItemOrdered { .. }).then(|| OutputNode::element("li"))
}

fn list_unordered(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::ListUnordered { .. }).then(|| OutputNode::element("ul"))
}

fn list_item_unordered(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::ListItemUnordered { .. }).then(|| OutputNode::element("li"))
}

/// Wrapper block, optional language label, literal code body, and the
/// copy-action marker a collaborator wires to the clipboard.
fn code_block(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::CodeBlock { language, text } = node else {
        return None;
    };
    let mut wrapper = OutputNode::element("div").with_class("code-block");
    if !language.is_empty() {
        wrapper = wrapper.with_child(
            OutputNode::element("div")
                .with_class("code-block-lang")
                .with_text(language.clone()),
        );
    }
    Some(
        wrapper
            .with_child(
                OutputNode::element("pre")
                    .with_child(OutputNode::element("code").with_text(text.clone())),
            )
            .with_child(
                OutputNode::element("button")
                    .with_class("code-block-copy")
                    .with_attribute("type", "button"),
            ),
    )
}

fn text(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::Text(content) = node else {
        return None;
    };
    Some(OutputNode::text_node(content.clone()))
}

fn bold(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::Bold(content) = node else {
        return None;
    };
    Some(OutputNode::element("strong").with_text(content.clone()))
}

fn italic(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::Italic(content) = node else {
        return None;
    };
    Some(OutputNode::element("em").with_text(content.clone()))
}

fn strike(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::Strike(content) = node else {
        return None;
    };
    Some(OutputNode::element("s").with_text(content.clone()))
}

fn code(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::Code(content) = node else {
        return None;
    };
    Some(OutputNode::element("code").with_text(content.clone()))
}

/// Links open in a new context with no referrer/opener leakage; how that
/// maps onto a backend is the backend's call.
fn anchor(href: String) -> OutputNode {
    OutputNode::element("a")
        .with_attribute("href", href)
        .with_attribute("target", "_blank")
        .with_attribute("rel", "noopener noreferrer")
}

fn link_named(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::LinkNamed { link, name } = node else {
        return None;
    };
    Some(anchor(link.clone()).with_text(name.clone()))
}

fn link_bare(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::LinkBare { link } = node else {
        return None;
    };
    Some(anchor(link.clone()).with_text(link.clone()))
}

fn link_phone(node: &TreeNode) -> Option<OutputNode> {
    let TreeNode::LinkPhone { link } = node else {
        return None;
    };
    Some(anchor(format!("tel:{link}")).with_text(link.clone()))
}

fn space_half(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::SpaceHalf)
        .then(|| OutputNode::element("span").with_class("sp-half").with_text(" "))
}

fn space_full(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::SpaceFull)
        .then(|| OutputNode::element("span").with_class("sp-full").with_text("\u{3000}"))
}

fn tab(node: &TreeNode) -> Option<OutputNode> {
    matches!(node, TreeNode::Tab)
        .then(|| OutputNode::element("span").with_class("sp-tab").with_text("\t"))
}
