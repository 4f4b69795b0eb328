//! Markup-string serialization of an output-node tree.
//!
//! One of the two expected renderings of the output tree (the other being
//! a live UI tree built by a backend). Text content is emitted raw, never
//! escaped; callers needing safe markup sanitize in their backend.

use super::output::OutputNode;

const VOID_KINDS: [&str; 2] = ["br", "hr"];

/// Serializes `node` and its subtree to a tag string.
pub fn to_markup(node: &OutputNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &OutputNode) {
    if node.kind == "text" {
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        return;
    }

    out.push('<');
    out.push_str(&node.kind);
    if !node.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&node.classes.join(" "));
        out.push('"');
    }
    for (key, value) in &node.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');

    if VOID_KINDS.contains(&node.kind.as_str()) {
        return;
    }

    if let Some(text) = &node.text {
        out.push_str(text);
    }
    for child in &node.children {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(&node.kind);
    out.push('>');
}
