//! Binary search tree of discovered clue texts.
//!
//! Ordering is plain byte-wise string comparison, so `"Pegadas"` sorts
//! before `"Um"` and uppercase letters sort before lowercase ones.

use std::cmp::Ordering;

use tracing::{instrument, trace};

/// A node of the clue tree, exclusively owning its subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueNode {
    text: String,
    left: ClueTree,
    right: ClueTree,
}

/// Owning reference to a (possibly empty) clue subtree.
pub type ClueTree = Option<Box<ClueNode>>;

impl ClueNode {
    fn leaf(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            left: None,
            right: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn left(&self) -> Option<&ClueNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&ClueNode> {
        self.right.as_deref()
    }
}

/// Inserts `text` below `tree` and returns the new owning root.
///
/// An exact duplicate leaves the tree unchanged.
pub fn insert(tree: ClueTree, text: &str) -> ClueTree {
    match tree {
        None => Some(ClueNode::leaf(text)),
        Some(mut node) => {
            match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left = insert(node.left.take(), text),
                Ordering::Greater => node.right = insert(node.right.take(), text),
                Ordering::Equal => trace!("duplicate clue ignored: {}", text),
            }
            Some(node)
        }
    }
}

/// Lazily walks `tree` in ascending order.
pub fn traverse_in_order(tree: &ClueTree) -> InOrder<'_> {
    InOrder::new(tree.as_deref())
}

/// Clues collected during one exploration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClueIndex {
    root: ClueTree,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a clue; returns false if the exact text was already known.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, text: &str) -> bool {
        if self.contains(text) {
            return false;
        }
        self.root = insert(self.root.take(), text);
        self.len += 1;
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn root(&self) -> Option<&ClueNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> InOrder<'_> {
        traverse_in_order(&self.root)
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClueIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        for text in iter {
            index.insert(text.as_ref());
        }
        index
    }
}

/// Stack-based in-order iterator: left subtree, node, right subtree.
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.text())
    }
}
