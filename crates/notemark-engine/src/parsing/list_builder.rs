//! The list accumulator: folds a run of same-kind list-item bundles at
//! varying indentation into one nested list node.

use crate::inline::Token;

use super::node::{TreeNode, inline_children};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn list_node(self) -> TreeNode {
        match self {
            ListKind::Ordered => TreeNode::ListOrdered { children: vec![] },
            ListKind::Unordered => TreeNode::ListUnordered { children: vec![] },
        }
    }

    fn item_node(self, tokens: Vec<Token>) -> TreeNode {
        let children = inline_children(tokens);
        match self {
            ListKind::Ordered => TreeNode::ListItemOrdered { children },
            ListKind::Unordered => TreeNode::ListItemUnordered { children },
        }
    }
}

/// In-progress list state for one list kind.
///
/// `levels[i]` is the list node being built at indentation level `i`; the
/// deepest level present is the last-seen indentation. Levels are always
/// contiguous from zero: an indentation jump past the last level
/// synthesizes fresh empty list nodes for every skipped level, even though
/// no source line exists at those levels. That shape is a documented
/// source quirk, not a target for fixing.
#[derive(Debug)]
pub(super) struct ListBuilder {
    kind: ListKind,
    levels: Vec<TreeNode>,
}

impl ListBuilder {
    pub(super) fn new(kind: ListKind) -> Self {
        Self {
            kind,
            levels: Vec::new(),
        }
    }

    /// Accepts one item at indentation `indent`.
    pub(super) fn push(&mut self, indent: usize, tokens: Vec<Token>) {
        if self.levels.is_empty() {
            for _ in 0..=indent {
                self.levels.push(self.kind.list_node());
            }
        } else {
            let last = self.levels.len() - 1;
            if indent >= last {
                for _ in last..indent {
                    self.levels.push(self.kind.list_node());
                }
            } else {
                while self.levels.len() - 1 > indent {
                    self.fold_deepest();
                }
            }
        }

        let item = self.kind.item_node(tokens);
        push_list_child(&mut self.levels[indent], item);
    }

    /// Folds everything down to level zero and returns the finished list.
    pub(super) fn flush(&mut self) -> Option<TreeNode> {
        while self.levels.len() > 1 {
            self.fold_deepest();
        }
        self.levels.pop()
    }

    /// Folds the deepest level into the one above it.
    ///
    /// The nested list becomes a child of the shallower level's last item;
    /// a synthesized empty level has no items, so the nested list then
    /// lands directly in the list node.
    fn fold_deepest(&mut self) {
        let Some(deeper) = self.levels.pop() else {
            return;
        };
        let Some(shallower) = self.levels.last_mut() else {
            return;
        };
        attach_nested(shallower, deeper);
    }
}

fn push_list_child(list: &mut TreeNode, node: TreeNode) {
    if let TreeNode::ListOrdered { children } | TreeNode::ListUnordered { children } = list {
        children.push(node);
    }
}

fn attach_nested(list: &mut TreeNode, nested: TreeNode) {
    let (TreeNode::ListOrdered { children } | TreeNode::ListUnordered { children }) = list else {
        return;
    };
    match children.last_mut() {
        Some(
            TreeNode::ListItemOrdered { children: item }
            | TreeNode::ListItemUnordered { children: item },
        ) => item.push(nested),
        _ => children.push(nested),
    }
}
