//! Nested property tree built from dot-path keys.
//!
//! `"Button.default.background"` becomes
//! `{"Button": {"default": {"background": ...}}}`. When a path is both a
//! value and a prefix of other paths (`Button.background` alongside
//! `Button.background.hover`), the value lives under the reserved empty key
//! inside the branch: `{"background": {"": ..., "hover": ...}}`. The
//! consuming IDE reads that layout, so the collision handling here is part
//! of the file format.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Key that holds a leaf value inside a branch.
pub const BRANCH_VALUE_KEY: &str = "";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyNode {
    Leaf(Value),
    Branch(IndexMap<String, PropertyNode>),
}

impl PropertyNode {
    /// Turn a leaf into a branch holding it under [`BRANCH_VALUE_KEY`], then
    /// return the branch's children.
    fn make_branch(&mut self) -> &mut IndexMap<String, PropertyNode> {
        if let Self::Leaf(value) = self {
            let leaf = Self::Leaf(std::mem::take(value));
            *self = Self::Branch(IndexMap::from([(BRANCH_VALUE_KEY.to_string(), leaf)]));
        }
        match self {
            Self::Branch(children) => children,
            Self::Leaf(_) => unreachable!("leaf converted to branch above"),
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    #[must_use]
    pub fn as_branch(&self) -> Option<&IndexMap<String, PropertyNode>> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => Some(children),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyTree {
    root: IndexMap<String, PropertyNode>,
}

impl PropertyTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` at the dot-separated `path`.
    pub fn insert(&mut self, path: &str, value: Value) {
        let (parents, last) = match path.rsplit_once('.') {
            Some((parents, last)) => (Some(parents), last),
            None => (None, path),
        };

        let mut level = &mut self.root;
        if let Some(parents) = parents {
            for segment in parents.split('.') {
                level = level
                    .entry(segment.to_string())
                    .or_insert_with(|| PropertyNode::Branch(IndexMap::new()))
                    .make_branch();
            }
        }

        match level.get_mut(last) {
            Some(PropertyNode::Branch(children)) => {
                children.insert(BRANCH_VALUE_KEY.to_string(), PropertyNode::Leaf(value));
            }
            _ => {
                level.insert(last.to_string(), PropertyNode::Leaf(value));
            }
        }
    }

    /// Walk `path` segment by segment.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PropertyNode> {
        let mut segments = path.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = node.as_branch()?.get(segment)?;
        }
        Some(node)
    }

    /// Number of leaf values anywhere in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        fn count(node: &PropertyNode) -> usize {
            match node {
                PropertyNode::Leaf(_) => 1,
                PropertyNode::Branch(children) => children.values().map(count).sum(),
            }
        }
        self.root.values().map(count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Expand a flat dot-path table into a [`PropertyTree`], in input order.
pub fn assemble_ui_tree<I, K>(bindings: I) -> PropertyTree
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    let mut tree = PropertyTree::new();
    for (path, value) in bindings {
        tree.insert(path.as_ref(), value);
    }
    tree
}
