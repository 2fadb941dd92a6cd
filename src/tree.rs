//! Flat path list to directory hierarchy.
//!
//! `git ls-files` prints one repository-relative path per line. [`PathTree`]
//! folds those into nested directories. Nodes live in an arena and are
//! addressed by [`NodeId`], so walking down a path only updates an index and
//! paths sharing a prefix land in the same sub-tree.
//!
//! Serialized, a tree is a map keyed by segment: directories map to nested
//! trees and the files directly at a level are listed under the key `.`:
//!
//! ```text
//! a/b/c, a/b/d, a/e, x  =>  {".": ["x"], "a": {".": ["e"], "b": {".": ["c", "d"]}}}
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key under which the files of a level are listed.
pub const LEAF_KEY: &str = ".";

/// Index of a directory node inside a [`PathTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default, Clone, PartialEq)]
struct Node {
    /// Child directories in first-seen order.
    children: Vec<(String, NodeId)>,
    by_name: HashMap<String, NodeId>,
    leaves: Vec<String>,
}

/// A directory hierarchy built from flat `/`-separated paths.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTree {
    nodes: Vec<Node>,
}

impl Default for PathTree {
    fn default() -> Self {
        Self { nodes: vec![Node::default()] }
    }
}

impl PathTree {
    /// The root directory node.
    pub const ROOT: NodeId = NodeId(0);

    /// Builds a tree from paths in the given order.
    ///
    /// Every segment but the last becomes a directory; the last one is a
    /// leaf of the directory it ends in. Paths are not normalised: duplicates
    /// give duplicate leaves and a trailing `/` gives an empty leaf name.
    pub fn build<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::default();
        for path in paths {
            tree.insert(path.as_ref());
        }
        tree
    }

    /// Adds one path to the tree.
    pub fn insert(&mut self, path: &str) {
        let mut cursor = Self::ROOT;
        let mut rest = path;
        while let Some((dir, tail)) = rest.split_once('/') {
            cursor = self.child_or_insert(cursor, dir);
            rest = tail;
        }
        self.nodes[cursor.0].leaves.push(rest.to_string());
    }

    fn child_or_insert(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent.0].by_name.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        let node = &mut self.nodes[parent.0];
        node.by_name.insert(name.to_string(), id);
        node.children.push((name.to_string(), id));
        id
    }

    /// Returns `true` if no path was ever inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[0].leaves.is_empty()
    }

    /// Number of directory nodes, not counting the root.
    #[must_use]
    pub fn dir_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Files listed directly in `node`, in insertion order.
    #[must_use]
    pub fn leaves(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].leaves
    }

    /// The sub-directory `name` of `node`, if any.
    #[must_use]
    pub fn child(&self, node: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[node.0].by_name.get(name).copied()
    }

    /// Sub-directories of `node` in first-seen order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.nodes[node.0].children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Follows a chain of directory names from the root.
    #[must_use]
    pub fn lookup<S: AsRef<str>>(&self, dirs: &[S]) -> Option<NodeId> {
        dirs.iter().try_fold(Self::ROOT, |node, name| self.child(node, name.as_ref()))
    }

    /// Reassembles every stored path, depth first with files before
    /// sub-directories at each level.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_paths(Self::ROOT, "", &mut out);
        out
    }

    fn collect_paths(&self, node: NodeId, prefix: &str, out: &mut Vec<String>) {
        for leaf in self.leaves(node) {
            out.push(format!("{prefix}{leaf}"));
        }
        for (name, child) in self.children(node) {
            self.collect_paths(child, &format!("{prefix}{name}/"), out);
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node: NodeId, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        for leaf in self.leaves(node) {
            writeln!(f, "{indent}{leaf}")?;
        }
        for (name, child) in self.children(node) {
            writeln!(f, "{indent}{name}/")?;
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented listing, two spaces per level, directories suffixed with `/`.
impl fmt::Display for PathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, Self::ROOT, 0)
    }
}

struct NodeView<'a> {
    tree: &'a PathTree,
    node: NodeId,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = &self.tree.nodes[self.node.0];
        let has_leaves = !node.leaves.is_empty();
        let len = node.children.len() + usize::from(has_leaves);
        let mut map = serializer.serialize_map(Some(len))?;
        if has_leaves {
            map.serialize_entry(LEAF_KEY, &node.leaves)?;
        }
        for (name, child) in &node.children {
            map.serialize_entry(name, &NodeView { tree: self.tree, node: *child })?;
        }
        map.end()
    }
}

impl Serialize for PathTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView { tree: self, node: Self::ROOT }.serialize(serializer)
    }
}
