//! Path set analysis and tree construction from a flat list of paths.

use std::collections::{BTreeMap, HashSet};

/// Splits a newline-separated block of paths into individual path strings.
///
/// Empty lines are dropped; they carry no path and must never end up in the
/// tree. Everything else is kept verbatim.
pub fn parse_paths(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Computes the set of path prefixes that act as directories.
///
/// A prefix is included iff it is a strict ancestor of at least one input
/// path, i.e. `"a/b/c.txt"` contributes `"a"` and `"a/b"` but not itself.
/// Single-segment paths contribute nothing.
pub fn directory_prefixes(paths: &[String]) -> HashSet<String> {
    let mut prefixes = HashSet::new();
    for path in paths {
        let segments: Vec<&str> = path.split('/').collect();
        for depth in 1..segments.len() {
            prefixes.insert(segments[..depth].join("/"));
        }
    }
    prefixes
}

/// A node in the path hierarchy: an ordered mapping from segment name to
/// child node. An empty mapping is a leaf.
///
/// The builder performs no directory/leaf classification; a childless node is
/// ambiguous between "file" and "unlisted directory" until combined with the
/// prefix set and annotation keys at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    /// Folds a flat path list into a nested hierarchy keyed by segment.
    ///
    /// Insertion is create-if-absent: re-inserting a path, or a path that is
    /// a prefix of a previously inserted one, reuses the existing nodes and
    /// never loses descendants. Empty paths are skipped.
    pub fn from_paths(paths: &[String]) -> Self {
        let mut root = TreeNode::default();
        for path in paths {
            if path.is_empty() {
                continue;
            }
            let mut node = &mut root;
            for segment in path.split('/') {
                node = node.children.entry(segment.to_owned()).or_default();
            }
        }
        root
    }

    /// The node's children, keyed by segment name in lexicographic order.
    pub fn children(&self) -> &BTreeMap<String, TreeNode> {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
