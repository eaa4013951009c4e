//! Box-drawn rendering of the path hierarchy with inline annotations.

use crate::annotations::{self, AnnotationMap};
use crate::tree::TreeNode;
use std::collections::HashSet;

/// Returns whether a childless node still counts as a directory: either its
/// key is a strict ancestor of some input path, or the annotation map marks
/// it with a trailing-separator key.
///
/// Nodes with children are directories regardless; callers check that first.
pub fn is_known_dir(
    path_key: &str,
    prefixes: &HashSet<String>,
    annotations: &AnnotationMap,
) -> bool {
    prefixes.contains(path_key) || annotations.contains_key(&format!("{path_key}/"))
}

/// Renders the hierarchy as box-drawn lines, one per node, in depth-first
/// pre-order with siblings in lexicographic order.
///
/// Each line is `prefix + connector + name [+ "/"] [+ "  # comment"]`. The
/// connector is `└── ` for the last sibling and `├── ` otherwise; the prefix
/// extends by four spaces below a last sibling and by `│   ` otherwise. The
/// root itself emits no line.
pub fn render_lines(
    root: &TreeNode,
    prefixes: &HashSet<String>,
    annotations: &AnnotationMap,
) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(root, prefixes, annotations, "", "", &mut lines);
    lines
}

fn render_into(
    node: &TreeNode,
    prefixes: &HashSet<String>,
    annotations: &AnnotationMap,
    prefix: &str,
    parent_path: &str,
    lines: &mut Vec<String>,
) {
    let count = node.children().len();
    for (index, (name, child)) in node.children().iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        let guide = if is_last { "    " } else { "│   " };

        let path_key = if parent_path.is_empty() {
            name.clone()
        } else {
            format!("{parent_path}/{name}")
        };
        let is_dir = !child.is_leaf() || is_known_dir(&path_key, prefixes, annotations);

        let mut line = format!("{prefix}{connector}{name}");
        if is_dir {
            line.push('/');
        }
        if let Some(comment) = annotations::lookup(annotations, &path_key) {
            line.push_str("  # ");
            line.push_str(comment);
        }
        lines.push(line);

        if !child.is_leaf() {
            let child_prefix = format!("{prefix}{guide}");
            render_into(child, prefixes, annotations, &child_prefix, &path_key, lines);
        }
    }
}
