use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A backend-agnostic rendered element.
///
/// This is the only artifact a rendering backend touches: it maps 1:1
/// onto a platform element (kind -> element type, classes -> class list,
/// attributes -> element attributes, text -> literal content, children ->
/// appended in order). The `text` field is set without escaping on
/// purpose; any sanitization policy belongs to the backend.
///
/// A node with kind `"text"` is a bare text node rather than an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNode {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutputNode>,
}

impl OutputNode {
    /// An element node of the given kind.
    pub fn element(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// A bare text node.
    pub fn text_node(text: impl Into<String>) -> Self {
        let mut node = Self::element("text");
        node.text = Some(text.into());
        node
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: OutputNode) -> Self {
        self.children.push(child);
        self
    }
}
